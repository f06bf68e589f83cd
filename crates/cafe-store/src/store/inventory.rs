//! Inventory mutations: order-driven decrement, manual edits, restocking.

use chrono::Utc;
use tracing::{debug, info, warn};

use cafe_core::inventory::{apply_order_to_inventory, StockLevel};
use cafe_core::{InventoryItem, InventoryItemUpdate};

use super::CafeStore;

impl CafeStore {
    /// Takes an order's ingredients off the inventory by the keyword rules.
    ///
    /// Unconditional: every call decrements again. The payment path guards
    /// against repeats itself. Returns `false` for an unknown order.
    pub fn decrement_inventory_for_order(&mut self, order_id: &str) -> bool {
        let Some(order) = self.state.orders.iter().find(|o| o.id == order_id) else {
            debug!(order_id, "decrement_inventory_for_order: no such order");
            return false;
        };

        let changes = apply_order_to_inventory(&order.items, &mut self.state.inventory);

        for change in &changes {
            info!(
                order_id,
                item = %change.name,
                before = change.before,
                after = change.after,
                "Inventory decremented"
            );
            let level = StockLevel::classify(change.after, self.min_level_of(change.inventory_id));
            if level.needs_restock() {
                warn!(item = %change.name, quantity = change.after, ?level, "Stock running low");
            }
        }
        true
    }

    /// Applies a partial update to an inventory row.
    pub fn update_inventory_item(&mut self, id: u32, changes: InventoryItemUpdate) -> bool {
        let Some(item) = self.state.inventory.iter_mut().find(|i| i.id == id) else {
            debug!(inventory_id = id, "update_inventory_item: no such item");
            return false;
        };

        changes.apply(item);
        info!(inventory_id = id, name = %item.name, quantity = item.quantity, "Inventory item updated");
        true
    }

    /// Adds stock to a row and stamps the restock time. Negative amounts
    /// are ignored.
    pub fn restock(&mut self, id: u32, amount: f64) -> bool {
        if !amount.is_finite() || amount <= 0.0 {
            debug!(inventory_id = id, amount, "restock: ignoring non-positive amount");
            return false;
        }

        let Some(item) = self.state.inventory.iter_mut().find(|i| i.id == id) else {
            debug!(inventory_id = id, "restock: no such item");
            return false;
        };

        item.quantity += amount;
        item.last_restocked = Some(Utc::now());
        info!(inventory_id = id, name = %item.name, amount, quantity = item.quantity, "Restocked");
        true
    }

    /// Rows at or below their minimum level, critical ones first.
    pub fn low_stock_items(&self) -> Vec<&InventoryItem> {
        let mut low: Vec<&InventoryItem> = self
            .state
            .inventory
            .iter()
            .filter(|i| i.stock_level().needs_restock())
            .collect();
        low.sort_by_key(|i| match i.stock_level() {
            StockLevel::Critical => 0,
            _ => 1,
        });
        low
    }

    fn min_level_of(&self, id: u32) -> f64 {
        self.state
            .inventory
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.min_stock_level)
            .unwrap_or_default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::{Money, NewOrder, OrderItem, OrderType};

    fn latte_order(lines: usize) -> NewOrder {
        let items: Vec<OrderItem> = (0..lines)
            .map(|i| OrderItem {
                id: 100 + i as u32,
                name: format!("Caffe Latte {}", i),
                price: Money::from_major(180),
                quantity: 1,
                category: "Hot Beverages".to_string(),
            })
            .collect();
        NewOrder {
            customer_name: "Walk-in".to_string(),
            customer_phone: String::new(),
            order_type: OrderType::Takeaway,
            table_number: None,
            subtotal: Money::from_major(180) * lines as u32,
            tax_amount: Money::zero(),
            total_amount: Money::from_major(180) * lines as u32,
            items,
            notes: String::new(),
            is_online: false,
            discount: None,
        }
    }

    fn quantity_of(store: &CafeStore, name: &str) -> f64 {
        store
            .inventory()
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.quantity)
            .unwrap()
    }

    #[test]
    fn test_direct_decrement_is_unconditional() {
        let mut store = CafeStore::demo();
        let id = store.create_order(latte_order(2));

        assert!(store.decrement_inventory_for_order(&id));
        assert!(store.decrement_inventory_for_order(&id));

        assert!((quantity_of(&store, "Coffee Beans (Arabica)") - 24.0).abs() < 1e-9);
        // 2 × (0.3 × 2 lines)
        assert!((quantity_of(&store, "Milk") - 48.8).abs() < 1e-9);
    }

    #[test]
    fn test_inventory_never_negative() {
        let mut store = CafeStore::demo();
        let id = store.create_order(latte_order(30));

        for _ in 0..10 {
            store.decrement_inventory_for_order(&id);
            assert!(store.inventory().iter().all(|i| i.quantity >= 0.0));
        }
        assert_eq!(quantity_of(&store, "Milk"), 0.0);
    }

    #[test]
    fn test_unknown_order_changes_nothing() {
        let mut store = CafeStore::demo();
        let before = store.inventory().to_vec();

        assert!(!store.decrement_inventory_for_order("ORD-404"));
        assert_eq!(store.inventory(), before.as_slice());
    }

    #[test]
    fn test_update_and_restock() {
        let mut store = CafeStore::demo();

        assert!(store.update_inventory_item(
            3,
            InventoryItemUpdate {
                quantity: Some(2.0),
                supplier: Some("Deccan Sugar Co.".to_string()),
                ..Default::default()
            }
        ));
        assert_eq!(store.low_stock_items()[0].name, "Sugar");

        assert!(store.restock(3, 20.0));
        let sugar = store.inventory().iter().find(|i| i.id == 3).unwrap();
        assert_eq!(sugar.quantity, 22.0);
        assert_eq!(sugar.supplier, "Deccan Sugar Co.");
        assert!(sugar.last_restocked.is_some());
        assert!(store.low_stock_items().is_empty());

        assert!(!store.restock(3, -5.0));
        assert!(!store.update_inventory_item(99, InventoryItemUpdate::default()));
    }

    #[test]
    fn test_low_stock_orders_critical_first() {
        let mut store = CafeStore::demo();
        // Milk: low (10 ≤ min 10), Tea Leaves: critical (1 ≤ 3/2)
        store.update_inventory_item(2, InventoryItemUpdate { quantity: Some(10.0), ..Default::default() });
        store.update_inventory_item(4, InventoryItemUpdate { quantity: Some(1.0), ..Default::default() });

        let names: Vec<&str> = store.low_stock_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tea Leaves", "Milk"]);
    }
}
