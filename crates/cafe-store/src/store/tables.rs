//! Table assignment and floor-plan queries.

use tracing::{debug, info};

use cafe_core::{OrderId, Table, TableStatus};

use super::CafeStore;

impl CafeStore {
    /// Sets a table's status and the order it holds (`None` clears it).
    ///
    /// An order id that does not name an open order leaves the table as it
    /// was.
    pub fn set_table_status(
        &mut self,
        table_id: u32,
        status: TableStatus,
        order_id: Option<OrderId>,
    ) -> bool {
        if let Some(order_id) = order_id.as_deref() {
            if !self.is_open_order(order_id) {
                debug!(table_id, order_id, "set_table_status: no such open order");
                return false;
            }
        }

        let Some(table) = self.table_mut(table_id) else {
            debug!(table_id, "set_table_status: no such table");
            return false;
        };

        table.status = status;
        table.current_order_id = order_id;

        info!(table_id, ?status, order_id = ?table.current_order_id, "Table status updated");
        true
    }

    /// Seats an order at a table.
    ///
    /// The table becomes occupied and linked to the order, and the order's
    /// table number is set to the table's display number. Nothing changes
    /// unless the order exists and is still open and the table exists.
    ///
    /// Assigning one order to two tables is not prevented.
    pub fn assign_table(&mut self, order_id: &str, table_id: u32) -> bool {
        if !self.is_open_order(order_id) {
            debug!(order_id, table_id, "assign_table: no such open order");
            return false;
        }

        let Some(table) = self.table_mut(table_id) else {
            debug!(order_id, table_id, "assign_table: no such table");
            return false;
        };
        table.status = TableStatus::Occupied;
        table.current_order_id = Some(order_id.to_string());
        let number = table.number;

        if let Some(order) = self.order_mut(order_id) {
            order.table_number = Some(number);
        }

        info!(order_id, table_id, table_number = number, "Table assigned");
        true
    }

    fn is_open_order(&self, order_id: &str) -> bool {
        self.order(order_id).is_some_and(|order| !order.status.is_closed())
    }

    /// Makes a table available and drops its order link.
    pub fn free_table(&mut self, table_id: u32) -> bool {
        self.set_table_status(table_id, TableStatus::Available, None)
    }

    /// Table with the given display number.
    pub fn table_by_number(&self, number: u32) -> Option<&Table> {
        self.state.tables.iter().find(|t| t.number == number)
    }

    /// Tables that can be seated right now.
    pub fn available_tables(&self) -> Vec<&Table> {
        self.state
            .tables
            .iter()
            .filter(|t| t.status == TableStatus::Available)
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StoreSnapshot;
    use cafe_core::{Money, NewOrder, OrderItem, OrderType};

    fn order_data() -> NewOrder {
        NewOrder {
            customer_name: "Meera Nair".to_string(),
            customer_phone: String::new(),
            order_type: OrderType::DineIn,
            table_number: None,
            items: vec![OrderItem {
                id: 20,
                name: "Masala Dosa".to_string(),
                price: Money::from_major(220),
                quantity: 1,
                category: "South Indian".to_string(),
            }],
            subtotal: Money::from_major(220),
            tax_amount: Money::from_major(11),
            total_amount: Money::from_major(231),
            notes: String::new(),
            is_online: false,
            discount: None,
        }
    }

    #[test]
    fn test_assign_table_links_both_sides() {
        let mut store = CafeStore::demo();
        let id = store.create_order(order_data());

        assert!(store.assign_table(&id, 9));

        let table = store.table(9).unwrap();
        assert_eq!(table.status, TableStatus::Occupied);
        assert_eq!(table.current_order_id.as_deref(), Some(id.as_str()));
        assert_eq!(store.order(&id).unwrap().table_number, Some(table.number));
    }

    #[test]
    fn test_assign_table_uses_display_number() {
        let mut snapshot = StoreSnapshot::default();
        snapshot.tables.push(Table {
            id: 1,
            number: 21,
            capacity: 4,
            status: TableStatus::Available,
            current_order_id: None,
        });
        let mut store = CafeStore::from_snapshot(snapshot);
        let id = store.create_order(order_data());

        store.assign_table(&id, 1);

        assert_eq!(store.order(&id).unwrap().table_number, Some(21));
    }

    #[test]
    fn test_assign_table_unknown_ids_change_nothing() {
        let mut store = CafeStore::demo();
        let id = store.create_order(order_data());
        let before = store.clone();

        assert!(!store.assign_table(&id, 99));
        assert!(!store.assign_table("ORD-404", 9));
        assert_eq!(store, before);
    }

    #[test]
    fn test_set_table_status_and_free() {
        let mut store = CafeStore::demo();

        assert!(store.set_table_status(8, TableStatus::Reserved, None));
        assert_eq!(store.table(8).unwrap().status, TableStatus::Reserved);

        assert!(store.set_table_status(8, TableStatus::Occupied, Some("ORD-003".to_string())));
        assert!(store.free_table(8));
        let table = store.table(8).unwrap();
        assert_eq!(table.status, TableStatus::Available);
        assert_eq!(table.current_order_id, None);

        assert!(!store.free_table(99));
    }

    #[test]
    fn test_assign_table_skips_closed_orders() {
        let mut store = CafeStore::demo();
        let before = store.clone();

        // ORD-005 is completed
        assert!(!store.assign_table("ORD-005", 10));
        assert_eq!(store, before);
        assert_eq!(store.table(10).unwrap().status, TableStatus::Available);
    }

    #[test]
    fn test_set_table_status_rejects_unknown_or_closed_order() {
        let mut store = CafeStore::demo();
        let before = store.clone();

        assert!(!store.set_table_status(11, TableStatus::Occupied, Some("ORD-404".to_string())));
        assert!(!store.set_table_status(11, TableStatus::Occupied, Some("ORD-005".to_string())));
        assert_eq!(store, before);

        let table = store.table(11).unwrap();
        assert_eq!(table.status, TableStatus::Available);
        assert_eq!(table.current_order_id, None);
    }

    #[test]
    fn test_available_tables_in_demo() {
        let store = CafeStore::demo();
        // 5 occupied, 1 reserved
        assert_eq!(store.available_tables().len(), 9);
        assert_eq!(store.table_by_number(1).unwrap().capacity, 6);
        assert_eq!(store.table_by_number(14).unwrap().capacity, 2);
        assert_eq!(store.table_by_number(15).unwrap().capacity, 4);
    }
}
