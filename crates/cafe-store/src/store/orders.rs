//! Order lifecycle: creation, kitchen status, payment and the side effects
//! of a payment landing.
//!
//! ```text
//!   create_order ──► pending/pending
//!        │
//!        ▼
//!   set_order_status(any → any)       completed: stamps completed_at,
//!        │                            completed/cancelled: frees its table
//!        ▼
//!   set_payment_status(.., paid)
//!        │  previous != paid ?
//!        ├── yes ──► recompute_analytics ──► inventory decrement (once per id)
//!        └── no  ──► fields updated; leaving paid recomputes analytics
//! ```

use chrono::Utc;
use tracing::{debug, info, warn};

use cafe_core::{
    NewOrder, Order, OrderDraft, OrderId, OrderStatus, OrderType, PaymentMethod, PaymentStatus,
    TableStatus,
};

use super::CafeStore;
use crate::error::StoreResult;

impl CafeStore {
    /// Creates an order from caller-supplied data and returns its id.
    ///
    /// The store assigns the next number from the counter, stamps the
    /// creation time and forces both statuses to pending. The input is not
    /// validated here; use [`CafeStore::place_order`] for a checked path.
    pub fn create_order(&mut self, data: NewOrder) -> OrderId {
        self.state.order_counter += 1;
        let number = format!("{:03}", self.state.order_counter);
        let id = format!("ORD-{}", number);

        let order = Order {
            id: id.clone(),
            order_number: number,
            customer_name: data.customer_name,
            customer_phone: data.customer_phone,
            order_type: data.order_type,
            table_number: data.table_number,
            status: OrderStatus::Pending,
            items: data.items,
            subtotal: data.subtotal,
            tax_amount: data.tax_amount,
            total_amount: data.total_amount,
            payment_status: PaymentStatus::Pending,
            payment_method: None,
            created_at: Utc::now(),
            updated_at: None,
            completed_at: None,
            notes: data.notes,
            is_online: data.is_online,
            discount: data.discount,
        };

        info!(
            order_id = %id,
            order_type = ?order.order_type,
            lines = order.items.len(),
            total = %order.total_amount,
            "Order created"
        );

        self.state.orders.insert(0, order);
        id
    }

    /// Validates a draft, creates the order and seats dine-in orders.
    ///
    /// ## Table Handling
    /// - Dine-in with a table number: the table with that number is assigned
    /// - Dine-in without one and auto-assign on: the first available table
    /// - Otherwise no table is touched
    pub fn place_order(&mut self, draft: OrderDraft) -> StoreResult<OrderId> {
        let new_order = draft.into_new_order(self.state.cafe_settings.tax_rate)?;
        let dine_in = new_order.order_type == OrderType::DineIn;
        let requested_table = new_order.table_number;

        let id = self.create_order(new_order);

        if dine_in {
            let table_id = match requested_table {
                Some(number) => self.table_by_number(number).map(|t| t.id),
                None if self.state.cafe_settings.auto_assign_tables => {
                    self.available_tables().first().map(|t| t.id)
                }
                None => None,
            };

            match table_id {
                Some(table_id) => {
                    self.assign_table(&id, table_id);
                }
                None => warn!(order_id = %id, ?requested_table, "No table to seat dine-in order"),
            }
        }

        Ok(id)
    }

    /// Sets the kitchen status. Any status may follow any other.
    ///
    /// Completing stamps `completed_at` once. Completing or cancelling
    /// releases the table held by the order.
    pub fn set_order_status(&mut self, id: &str, status: OrderStatus) -> bool {
        let now = Utc::now();
        let Some(order) = self.order_mut(id) else {
            debug!(order_id = id, "set_order_status: no such order");
            return false;
        };

        let previous = order.status;
        order.status = status;
        order.updated_at = Some(now);
        if status == OrderStatus::Completed && order.completed_at.is_none() {
            order.completed_at = Some(now);
        }

        info!(order_id = id, ?previous, ?status, "Order status updated");

        if status.is_closed() {
            self.release_tables_for(id);
        }
        true
    }

    /// Records a payment state change.
    ///
    /// The method is kept when `None` is passed. A transition into paid from
    /// any other state then, in order:
    /// 1. recomputes analytics
    /// 2. takes the order's ingredients off the inventory, once per order
    ///
    /// Leaving paid (a refund) recomputes analytics only. Paid → paid
    /// triggers nothing.
    pub fn set_payment_status(
        &mut self,
        id: &str,
        payment_status: PaymentStatus,
        method: Option<PaymentMethod>,
    ) -> bool {
        let Some(order) = self.order_mut(id) else {
            debug!(order_id = id, "set_payment_status: no such order");
            return false;
        };

        let previous = order.payment_status;
        order.payment_status = payment_status;
        if method.is_some() {
            order.payment_method = method;
        }
        order.updated_at = Some(Utc::now());

        info!(order_id = id, ?previous, current = ?payment_status, "Payment status updated");

        let was_paid = previous == PaymentStatus::Paid;
        let now_paid = payment_status == PaymentStatus::Paid;
        if !was_paid && now_paid {
            self.on_order_paid(id);
        } else if was_paid && !now_paid {
            self.recompute_analytics();
        }
        true
    }

    /// Overwrites an order by id.
    ///
    /// The order's identity (id, number, creation time) and its line items
    /// are kept from the stored record. Status and payment changes landing
    /// through this path have the same effects as through
    /// [`CafeStore::set_order_status`] and [`CafeStore::set_payment_status`].
    pub fn replace_order(&mut self, replacement: Order) -> bool {
        let id = replacement.id.clone();
        let Some(order) = self.order_mut(&id) else {
            debug!(order_id = %id, "replace_order: no such order");
            return false;
        };

        let was_paid = order.is_paid();
        let previous_status = order.status;
        let kept = (
            std::mem::take(&mut order.order_number),
            order.created_at,
            std::mem::take(&mut order.items),
        );

        *order = replacement;
        order.order_number = kept.0;
        order.created_at = kept.1;
        order.items = kept.2;

        let status = order.status;
        if status == OrderStatus::Completed && order.completed_at.is_none() {
            order.completed_at = Some(Utc::now());
        }

        let now_paid = order.is_paid();
        info!(order_id = %id, previous = ?previous_status, ?status, "Order replaced");

        if status.is_closed() {
            self.release_tables_for(&id);
        }
        if !was_paid && now_paid {
            self.on_order_paid(&id);
        } else if was_paid && !now_paid {
            self.recompute_analytics();
        }
        true
    }

    fn on_order_paid(&mut self, id: &str) {
        self.recompute_analytics();

        if self.state.inventory_deducted.contains(id) {
            debug!(order_id = id, "Inventory already deducted for order");
            return;
        }
        if self.decrement_inventory_for_order(id) {
            self.state.inventory_deducted.insert(id.to_string());
        }
    }

    fn release_tables_for(&mut self, order_id: &str) {
        for table in self
            .state
            .tables
            .iter_mut()
            .filter(|t| t.current_order_id.as_deref() == Some(order_id))
        {
            table.status = TableStatus::Available;
            table.current_order_id = None;
            debug!(table_id = table.id, order_id, "Table released");
        }
    }

    // =========================================================================
    // Dashboard Queries
    // =========================================================================

    /// Orders waiting for the kitchen.
    pub fn pending_order_count(&self) -> usize {
        self.orders_by_status(OrderStatus::Pending).len()
    }

    pub fn orders_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.state.orders.iter().filter(|o| o.status == status).collect()
    }

    pub fn online_orders(&self) -> Vec<&Order> {
        self.state
            .orders
            .iter()
            .filter(|o| o.is_online || o.order_type == OrderType::Online)
            .collect()
    }

    /// Orders that are not yet paid.
    pub fn unpaid_orders(&self) -> Vec<&Order> {
        self.state.orders.iter().filter(|o| !o.is_paid()).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
