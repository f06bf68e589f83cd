//! # Cafe Store
//!
//! The single owner of all back-office state.
//!
//! ## Mutation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CafeStore Operations                                 │
//! │                                                                         │
//! │  Dashboard action         CafeStore method          State change        │
//! │  ────────────────         ────────────────          ────────────        │
//! │  New order ─────────────► create_order() ─────────► orders.prepend     │
//! │  Kitchen board ─────────► set_order_status() ─────► order.status       │
//! │  Billing ───────────────► set_payment_status() ───► order.payment      │
//! │                               │                                         │
//! │                               └─ into paid ──► recompute_analytics()    │
//! │                                           └──► inventory decrement      │
//! │  Floor plan ────────────► assign_table() ─────────► table + order      │
//! │  Staff / Menu / Stock ──► add_* / update_* ───────► matching record    │
//! │                                                                         │
//! │  Every method takes &mut self and runs to completion. Derived state    │
//! │  is recomputed in the same call, after the change it depends on.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations addressed by id return `bool`: `false` means no record matched
//! and nothing changed. Only the checked entry points (`place_order`,
//! `add_staff`, `update_cafe_settings`) and persistence return errors.

mod inventory;
mod menu;
mod orders;
mod session;
mod settings;
mod staff;
mod tables;

use chrono::Utc;
use tracing::{debug, info};

use cafe_core::{Analytics, CafeSettings, InventoryItem, MenuItem, Order, Staff, Table, User};

use crate::error::StoreResult;
use crate::seed;
use crate::snapshot::StoreSnapshot;
use crate::storage::SnapshotStorage;

pub use settings::SettingsChange;

/// The back-office state container.
///
/// ## Usage
/// ```rust,ignore
/// let storage = config.open_storage().await?;
/// let mut store = CafeStore::load_or_demo(&storage, &config.storage_key).await?;
///
/// let id = store.place_order(draft)?;
/// store.set_payment_status(&id, PaymentStatus::Paid, Some(PaymentMethod::Upi));
///
/// store.save(&storage, &config.storage_key).await?;
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CafeStore {
    state: StoreSnapshot,
}

impl CafeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        CafeStore::default()
    }

    /// Creates a store over an existing snapshot.
    pub fn from_snapshot(state: StoreSnapshot) -> Self {
        CafeStore { state }
    }

    /// Creates a store holding the demo cafe.
    pub fn demo() -> Self {
        CafeStore::from_snapshot(seed::demo_snapshot())
    }

    /// Current state, for persistence or inspection.
    pub fn snapshot(&self) -> &StoreSnapshot {
        &self.state
    }

    pub fn into_snapshot(self) -> StoreSnapshot {
        self.state
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Loads the store saved under `key`, if any.
    pub async fn load<S: SnapshotStorage>(storage: &S, key: &str) -> StoreResult<Option<Self>> {
        let snapshot = storage.load_snapshot(key).await?;
        Ok(snapshot.map(CafeStore::from_snapshot))
    }

    /// Loads the store saved under `key`, falling back to the demo cafe.
    pub async fn load_or_demo<S: SnapshotStorage>(storage: &S, key: &str) -> StoreResult<Self> {
        match CafeStore::load(storage, key).await? {
            Some(store) => {
                info!(key, orders = store.state.orders.len(), "Store rehydrated");
                Ok(store)
            }
            None => {
                info!(key, "No saved store, starting from demo data");
                Ok(CafeStore::demo())
            }
        }
    }

    /// Persists the current state under `key`.
    pub async fn save<S: SnapshotStorage>(&self, storage: &S, key: &str) -> StoreResult<()> {
        storage.save_snapshot(key, &self.state).await
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    /// All orders, newest first.
    pub fn orders(&self) -> &[Order] {
        &self.state.orders
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.state.orders.iter().find(|o| o.id == id)
    }

    pub fn tables(&self) -> &[Table] {
        &self.state.tables
    }

    pub fn table(&self, id: u32) -> Option<&Table> {
        self.state.tables.iter().find(|t| t.id == id)
    }

    pub fn staff(&self) -> &[Staff] {
        &self.state.staff
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.state.inventory
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.state.menu_items
    }

    pub fn menu_item(&self, id: u32) -> Option<&MenuItem> {
        self.state.menu_items.iter().find(|m| m.id == id)
    }

    pub fn analytics(&self) -> &Analytics {
        &self.state.analytics
    }

    pub fn cafe_settings(&self) -> &CafeSettings {
        &self.state.cafe_settings
    }

    // =========================================================================
    // Analytics
    // =========================================================================

    /// Rebuilds the analytics from the paid orders.
    ///
    /// Idempotent: the result depends only on the order list.
    pub fn recompute_analytics(&mut self) {
        self.state.analytics = Analytics::from_orders(&self.state.orders);
        self.state.analytics_updated_at = Some(Utc::now());

        debug!(
            total_orders = self.state.analytics.total_orders,
            total_revenue = %self.state.analytics.total_revenue,
            "Analytics recomputed"
        );
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn order_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.state.orders.iter_mut().find(|o| o.id == id)
    }

    fn table_mut(&mut self, id: u32) -> Option<&mut Table> {
        self.state.tables.iter_mut().find(|t| t.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_demo_store_contents() {
        let store = CafeStore::demo();

        assert_eq!(store.orders().len(), 5);
        assert_eq!(store.tables().len(), 15);
        assert_eq!(store.staff().len(), 5);
        assert_eq!(store.menu_items().len(), 35);
        assert_eq!(store.inventory().len(), 5);
        assert_eq!(store.user().map(|u| u.name.as_str()), Some("Rajesh Kumar"));
    }

    #[test]
    fn test_recompute_analytics_is_idempotent() {
        let mut store = CafeStore::demo();

        store.recompute_analytics();
        let first = store.analytics().clone();
        store.recompute_analytics();

        assert_eq!(store.analytics(), &first);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let storage = MemoryStorage::new();
        let store = CafeStore::demo();

        store.save(&storage, "cafe-management-store").await.unwrap();
        let loaded = CafeStore::load(&storage, "cafe-management-store")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(loaded, store);
    }

    #[tokio::test]
    async fn test_load_or_demo_on_empty_storage() {
        let storage = MemoryStorage::new();
        let store = CafeStore::load_or_demo(&storage, "missing").await.unwrap();
        assert_eq!(store.orders().len(), 5);
    }
}
