//! # Order Drafting
//!
//! An order being taken at the counter, before it is placed with the store.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Counter action            OrderDraft                 Effect            │
//! │  ──────────────            ──────────                 ──────            │
//! │  Tap menu item ──────────► add_item() ──────────────► push or qty += n  │
//! │  +/- buttons ────────────► update_quantity() ───────► qty = n, 0 drops  │
//! │  Remove ─────────────────► remove_item() ───────────► line dropped      │
//! │  Place order ────────────► into_new_order(tax) ─────► NewOrder          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are frozen [`OrderItem`] snapshots, so a menu price change after a
//! line was added does not reach the draft.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{MenuItem, NewOrder, OrderItem, OrderType, TaxRate};
use crate::validation::validate_order_items;
use crate::{MAX_ITEM_QUANTITY, MAX_ORDER_LINES};

/// Order totals at a given tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Money,
    pub tax_amount: Money,
    pub discount: Money,
    pub total_amount: Money,
}

/// An order under construction.
///
/// ## Invariants
/// - Lines are unique by menu item id (adding again bumps quantity)
/// - Quantities are in 1..=999; setting 0 removes the line
/// - At most 100 lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub order_type: OrderType,
    pub table_number: Option<u32>,
    pub notes: String,
    pub is_online: bool,
    pub discount: Option<Money>,
    items: Vec<OrderItem>,
}

impl OrderDraft {
    /// Creates an empty draft.
    pub fn new(order_type: OrderType) -> Self {
        OrderDraft {
            customer_name: String::new(),
            customer_phone: String::new(),
            order_type,
            table_number: None,
            notes: String::new(),
            is_online: matches!(order_type, OrderType::Online),
            discount: None,
            items: Vec::new(),
        }
    }

    /// Sets the customer details.
    pub fn for_customer(mut self, name: impl Into<String>, phone: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self.customer_phone = phone.into();
        self
    }

    /// Seats the order at a table number.
    pub fn at_table(mut self, number: u32) -> Self {
        self.table_number = Some(number);
        self
    }

    /// Adds a menu item, or bumps its quantity if already on the draft.
    pub fn add_item(&mut self, menu_item: &MenuItem, quantity: u32) -> CoreResult<()> {
        if !menu_item.available {
            return Err(CoreError::MenuItemUnavailable {
                name: menu_item.name.clone(),
            });
        }

        if let Some(line) = self.items.iter_mut().find(|l| l.id == menu_item.id) {
            let new_qty = line.quantity.saturating_add(quantity);
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(quantity_out_of_range().into());
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_ORDER_LINES {
            return Err(CoreError::OrderTooLarge {
                max: MAX_ORDER_LINES,
            });
        }

        crate::validation::validate_quantity(quantity)?;
        self.items.push(OrderItem::from_menu_item(menu_item, quantity));
        Ok(())
    }

    /// Sets the quantity of a line. Zero removes it.
    pub fn update_quantity(&mut self, menu_item_id: u32, quantity: u32) -> CoreResult<()> {
        if quantity == 0 {
            self.remove_item(menu_item_id);
            return Ok(());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(quantity_out_of_range().into());
        }

        match self.items.iter_mut().find(|l| l.id == menu_item_id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::MenuItemNotFound(menu_item_id)),
        }
    }

    /// Drops a line. Returns whether it was on the draft.
    pub fn remove_item(&mut self, menu_item_id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|l| l.id != menu_item_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals, before tax.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|l| l.line_total()).sum()
    }

    /// Totals at `tax_rate`. Tax is charged on the subtotal; the discount
    /// comes off the taxed amount and never takes the total below zero.
    pub fn totals(&self, tax_rate: TaxRate) -> OrderTotals {
        let subtotal = self.subtotal();
        let tax_amount = subtotal.calculate_tax(tax_rate);
        let discount = self.discount.unwrap_or_default();
        let total_amount = subtotal + tax_amount - discount;

        OrderTotals {
            subtotal,
            tax_amount,
            discount,
            total_amount: if total_amount.is_negative() {
                Money::zero()
            } else {
                total_amount
            },
        }
    }

    /// Validates the draft and turns it into a [`NewOrder`].
    pub fn into_new_order(self, tax_rate: TaxRate) -> CoreResult<NewOrder> {
        validate_order_items(&self.items)?;
        if let Some(discount) = self.discount {
            if discount.is_negative() {
                return Err(ValidationError::MustBePositive {
                    field: "discount".to_string(),
                }
                .into());
            }
        }

        let totals = self.totals(tax_rate);

        Ok(NewOrder {
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            order_type: self.order_type,
            table_number: self.table_number,
            items: self.items,
            subtotal: totals.subtotal,
            tax_amount: totals.tax_amount,
            total_amount: totals.total_amount,
            notes: self.notes,
            is_online: self.is_online,
            discount: self.discount,
        })
    }
}

fn quantity_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: MAX_ITEM_QUANTITY as i64,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item(id: u32, name: &str, price: i64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            price: Money::from_major(price),
            category: "Hot Beverages".to_string(),
            available: true,
            image: None,
        }
    }

    const GST: TaxRate = TaxRate::from_bps(500);

    #[test]
    fn test_add_same_item_bumps_quantity() {
        let chai = menu_item(1, "Masala Chai", 120);
        let mut draft = OrderDraft::new(OrderType::Takeaway);

        draft.add_item(&chai, 1).unwrap();
        draft.add_item(&chai, 1).unwrap();

        assert_eq!(draft.items().len(), 1);
        assert_eq!(draft.items()[0].quantity, 2);
        assert_eq!(draft.subtotal(), Money::from_major(240));
    }

    #[test]
    fn test_unavailable_item_rejected() {
        let mut kulfi = menu_item(35, "Kulfi", 150);
        kulfi.available = false;
        let mut draft = OrderDraft::new(OrderType::DineIn);

        assert!(matches!(
            draft.add_item(&kulfi, 1),
            Err(CoreError::MenuItemUnavailable { .. })
        ));
        assert!(draft.is_empty());
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let chai = menu_item(1, "Masala Chai", 120);
        let mut draft = OrderDraft::new(OrderType::Takeaway);
        draft.add_item(&chai, 3).unwrap();

        draft.update_quantity(1, 0).unwrap();
        assert!(draft.is_empty());
        assert!(matches!(
            draft.update_quantity(1, 2),
            Err(CoreError::MenuItemNotFound(1))
        ));
    }

    #[test]
    fn test_quantity_cap() {
        let chai = menu_item(1, "Masala Chai", 120);
        let mut draft = OrderDraft::new(OrderType::Takeaway);
        draft.add_item(&chai, 999).unwrap();

        assert!(draft.add_item(&chai, 1).is_err());
        assert!(draft.update_quantity(1, 1000).is_err());
        assert_eq!(draft.items()[0].quantity, 999);
    }

    #[test]
    fn test_totals_with_gst_and_discount() {
        let mut draft = OrderDraft::new(OrderType::DineIn);
        draft.add_item(&menu_item(1, "Masala Chai", 120), 2).unwrap();
        draft.add_item(&menu_item(6, "Samosa Platter", 180), 1).unwrap();

        let totals = draft.totals(GST);
        assert_eq!(totals.subtotal, Money::from_major(420));
        assert_eq!(totals.tax_amount, Money::from_major(21));
        assert_eq!(totals.total_amount, Money::from_major(441));

        draft.discount = Some(Money::from_major(41));
        assert_eq!(draft.totals(GST).total_amount, Money::from_major(400));

        draft.discount = Some(Money::from_major(1000));
        assert_eq!(draft.totals(GST).total_amount, Money::zero());
    }

    #[test]
    fn test_into_new_order() {
        let mut draft = OrderDraft::new(OrderType::DineIn)
            .for_customer("Amit Patel", "+91 98765 43210")
            .at_table(3);
        draft.add_item(&menu_item(1, "Masala Chai", 120), 2).unwrap();

        let order = draft.into_new_order(GST).unwrap();

        assert_eq!(order.customer_name, "Amit Patel");
        assert_eq!(order.table_number, Some(3));
        assert_eq!(order.subtotal, Money::from_major(240));
        assert_eq!(order.tax_amount, Money::from_major(12));
        assert_eq!(order.total_amount, Money::from_major(252));
        assert!(!order.is_online);
    }

    #[test]
    fn test_empty_draft_cannot_be_placed() {
        let draft = OrderDraft::new(OrderType::Online);
        assert!(draft.is_online);
        assert!(matches!(
            draft.into_new_order(GST),
            Err(CoreError::EmptyOrder)
        ));
    }
}
