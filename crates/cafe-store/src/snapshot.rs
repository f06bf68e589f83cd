//! # Store Snapshot
//!
//! The complete persisted state of a [`crate::CafeStore`].
//!
//! ## Persisted Layout
//! ```text
//! key: "cafe-management-store"
//! value: {
//!   "user": {...} | null,
//!   "orders": [...],            newest first
//!   "orderCounter": 6,          last issued order number
//!   "tables": [...],
//!   "staff": [...],
//!   "inventory": [...],
//!   "menuItems": [...],
//!   "analytics": {...},         derived, cached
//!   "analyticsUpdatedAt": "...",
//!   "cafeSettings": {...},
//!   "inventoryDeducted": [...]  order ids already decremented
//! }
//! ```
//!
//! The document is rehydrated as is. There is no version field and no
//! migration of its contents.

use std::collections::BTreeSet;

use cafe_core::{
    Analytics, CafeSettings, InventoryItem, MenuItem, Order, OrderId, Staff, Table, User,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serializable state of the whole store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub user: Option<User>,
    /// Newest first.
    pub orders: Vec<Order>,
    /// Number of the most recently created order.
    pub order_counter: u32,
    pub tables: Vec<Table>,
    pub staff: Vec<Staff>,
    pub inventory: Vec<InventoryItem>,
    pub menu_items: Vec<MenuItem>,
    pub analytics: Analytics,
    #[serde(default)]
    pub analytics_updated_at: Option<DateTime<Utc>>,
    pub cafe_settings: CafeSettings,
    /// Orders whose payment already took stock off the inventory.
    #[serde(default)]
    pub inventory_deducted: BTreeSet<OrderId>,
}

impl Default for StoreSnapshot {
    /// An empty cafe: no orders, no tables, default settings, signed out.
    fn default() -> Self {
        StoreSnapshot {
            user: None,
            orders: Vec::new(),
            order_counter: 0,
            tables: Vec::new(),
            staff: Vec::new(),
            inventory: Vec::new(),
            menu_items: Vec::new(),
            analytics: Analytics::default(),
            analytics_updated_at: None,
            cafe_settings: CafeSettings::default(),
            inventory_deducted: BTreeSet::new(),
        }
    }
}

impl StoreSnapshot {
    /// Encodes the snapshot as the persisted JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decodes a persisted JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_are_camel_case() {
        let json = StoreSnapshot::default().to_json().unwrap();
        assert!(json.contains("\"orderCounter\":0"));
        assert!(json.contains("\"menuItems\":[]"));
        assert!(json.contains("\"cafeSettings\":{"));
        assert!(json.contains("\"currencySymbol\":\"₹\""));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let full = StoreSnapshot::default().to_json().unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&full).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("inventoryDeducted");
        obj.remove("analyticsUpdatedAt");

        let snapshot = StoreSnapshot::from_json(&value.to_string()).unwrap();
        assert!(snapshot.inventory_deducted.is_empty());
        assert_eq!(snapshot.analytics_updated_at, None);
    }
}
