//! # Inventory Rules
//!
//! Keyword-driven stock decrement for paid orders and stock level
//! classification.
//!
//! ## Decrement Rule Table
//! ```text
//! ┌──────────────────────────────┬──────────────────────────┬─────────────────────┐
//! │ any line name contains       │ stock row                │ decrement           │
//! ├──────────────────────────────┼──────────────────────────┼─────────────────────┤
//! │ coffee | espresso | latte    │ name contains            │ 0.5                 │
//! │                              │ "Coffee Beans"           │                     │
//! │ milk | latte | cappuccino    │ name == "Milk"           │ 0.3 × line count    │
//! │ tea                          │ name == "Tea Leaves"     │ 0.2                 │
//! └──────────────────────────────┴──────────────────────────┴─────────────────────┘
//! ```
//!
//! Line names are matched case-insensitively, stock row names exactly as
//! written. Each rule fires at most once per order and touches the first
//! matching row only. Quantities never drop below zero.
//!
//! There is no recipe mapping; the table is a stand-in and is kept as is.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{InventoryItem, OrderItem};

// =============================================================================
// Rule Table
// =============================================================================

/// How a rule picks its stock row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StockMatch {
    /// Row name contains the text.
    Contains(&'static str),
    /// Row name equals the text.
    Exact(&'static str),
}

impl StockMatch {
    fn matches(&self, row_name: &str) -> bool {
        match self {
            StockMatch::Contains(needle) => row_name.contains(needle),
            StockMatch::Exact(name) => row_name == *name,
        }
    }
}

/// How much a firing rule takes off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decrement {
    /// Fixed amount per order.
    PerOrder(f64),
    /// Amount multiplied by the number of order lines.
    PerLine(f64),
}

impl Decrement {
    fn amount(&self, line_count: usize) -> f64 {
        match self {
            Decrement::PerOrder(amount) => *amount,
            Decrement::PerLine(amount) => *amount * line_count as f64,
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecrementRule {
    /// Lowercase keywords looked for in order line names.
    pub keywords: &'static [&'static str],
    pub stock: StockMatch,
    pub decrement: Decrement,
}

impl DecrementRule {
    fn fires_for(&self, items: &[OrderItem]) -> bool {
        items.iter().any(|item| {
            let name = item.name.to_lowercase();
            self.keywords.iter().any(|kw| name.contains(kw))
        })
    }
}

/// The decrement rules, applied in this order.
pub const DECREMENT_RULES: [DecrementRule; 3] = [
    DecrementRule {
        keywords: &["coffee", "espresso", "latte"],
        stock: StockMatch::Contains("Coffee Beans"),
        decrement: Decrement::PerOrder(0.5),
    },
    DecrementRule {
        keywords: &["milk", "latte", "cappuccino"],
        stock: StockMatch::Exact("Milk"),
        decrement: Decrement::PerLine(0.3),
    },
    DecrementRule {
        keywords: &["tea"],
        stock: StockMatch::Exact("Tea Leaves"),
        decrement: Decrement::PerOrder(0.2),
    },
];

/// A stock movement produced by [`apply_order_to_inventory`].
#[derive(Debug, Clone, PartialEq)]
pub struct StockChange {
    pub inventory_id: u32,
    pub name: String,
    pub before: f64,
    pub after: f64,
}

/// Applies the rule table for one order's lines to the inventory.
///
/// Returns the rows that were touched, in rule order.
///
/// ```rust
/// use cafe_core::inventory::apply_order_to_inventory;
/// use cafe_core::money::Money;
/// use cafe_core::types::{InventoryItem, OrderItem};
///
/// let mut stock = vec![InventoryItem {
///     id: 4,
///     name: "Tea Leaves".to_string(),
///     quantity: 15.0,
///     unit: "kg".to_string(),
///     min_stock_level: 3.0,
///     price: Money::from_major(600),
///     supplier: "Tea Traders".to_string(),
///     category: "Raw Materials".to_string(),
///     last_restocked: None,
/// }];
/// let lines = vec![OrderItem {
///     id: 4,
///     name: "Ginger Tea".to_string(),
///     price: Money::from_major(130),
///     quantity: 3,
///     category: "Hot Beverages".to_string(),
/// }];
///
/// let changes = apply_order_to_inventory(&lines, &mut stock);
/// assert_eq!(changes.len(), 1);
/// assert!((stock[0].quantity - 14.8).abs() < 1e-9);
/// ```
pub fn apply_order_to_inventory(
    items: &[OrderItem],
    inventory: &mut [InventoryItem],
) -> Vec<StockChange> {
    let mut changes = Vec::new();

    for rule in DECREMENT_RULES.iter() {
        if !rule.fires_for(items) {
            continue;
        }

        let Some(row) = inventory.iter_mut().find(|row| rule.stock.matches(&row.name)) else {
            continue;
        };

        let before = row.quantity;
        row.quantity = (before - rule.decrement.amount(items.len())).max(0.0);

        changes.push(StockChange {
            inventory_id: row.id,
            name: row.name.clone(),
            before,
            after: row.quantity,
        });
    }

    changes
}

// =============================================================================
// Stock Level
// =============================================================================

/// Stock health of an inventory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Good,
    /// At or below the minimum level.
    Low,
    /// At or below half the minimum level.
    Critical,
}

impl StockLevel {
    /// Classifies a quantity against a minimum stock level.
    pub fn classify(quantity: f64, min_stock_level: f64) -> Self {
        if quantity <= min_stock_level * 0.5 {
            StockLevel::Critical
        } else if quantity <= min_stock_level {
            StockLevel::Low
        } else {
            StockLevel::Good
        }
    }

    /// Whether the row needs restocking.
    pub fn needs_restock(&self) -> bool {
        !matches!(self, StockLevel::Good)
    }
}

impl InventoryItem {
    /// Stock health of this row.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.quantity, self.min_stock_level)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn row(id: u32, name: &str, quantity: f64, min: f64) -> InventoryItem {
        InventoryItem {
            id,
            name: name.to_string(),
            quantity,
            unit: "kg".to_string(),
            min_stock_level: min,
            price: Money::from_major(100),
            supplier: "Supplier".to_string(),
            category: "Raw Materials".to_string(),
            last_restocked: None,
        }
    }

    fn line(name: &str, quantity: u32) -> OrderItem {
        OrderItem {
            id: 1,
            name: name.to_string(),
            price: Money::from_major(150),
            quantity,
            category: "Hot Beverages".to_string(),
        }
    }

    fn demo_stock() -> Vec<InventoryItem> {
        vec![
            row(1, "Coffee Beans (Arabica)", 25.0, 5.0),
            row(2, "Milk", 50.0, 10.0),
            row(3, "Sugar", 30.0, 5.0),
            row(4, "Tea Leaves", 15.0, 3.0),
        ]
    }

    fn qty(stock: &[InventoryItem], id: u32) -> f64 {
        stock.iter().find(|r| r.id == id).map(|r| r.quantity).unwrap()
    }

    #[test]
    fn test_latte_fires_coffee_and_milk_once_each() {
        let mut stock = demo_stock();
        let lines = vec![line("Caffe Latte", 2), line("Iced Latte", 1), line("Samosa", 1)];

        let changes = apply_order_to_inventory(&lines, &mut stock);

        assert_eq!(changes.len(), 2);
        assert!((qty(&stock, 1) - 24.5).abs() < 1e-9);
        // 0.3 × 3 lines
        assert!((qty(&stock, 2) - 49.1).abs() < 1e-9);
        assert_eq!(qty(&stock, 3), 30.0);
        assert_eq!(qty(&stock, 4), 15.0);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let mut stock = demo_stock();
        apply_order_to_inventory(&[line("MASALA TEA", 1)], &mut stock);
        assert!((qty(&stock, 4) - 14.8).abs() < 1e-9);
    }

    #[test]
    fn test_row_name_match_is_exact_for_milk() {
        let mut stock = vec![row(2, "Milk Powder", 5.0, 1.0)];
        let changes = apply_order_to_inventory(&[line("Cappuccino", 1)], &mut stock);
        assert!(changes.is_empty());
        assert_eq!(stock[0].quantity, 5.0);
    }

    #[test]
    fn test_quantities_floor_at_zero() {
        let mut stock = vec![row(1, "Coffee Beans (Robusta)", 0.2, 5.0)];
        for _ in 0..5 {
            apply_order_to_inventory(&[line("Filter Coffee", 1)], &mut stock);
            assert!(stock[0].quantity >= 0.0);
        }
        assert_eq!(stock[0].quantity, 0.0);
    }

    #[test]
    fn test_no_keyword_no_change() {
        let mut stock = demo_stock();
        let changes = apply_order_to_inventory(&[line("Butter Chicken", 1)], &mut stock);
        assert!(changes.is_empty());
        assert_eq!(stock, demo_stock());
    }

    #[test]
    fn test_stock_level_thresholds() {
        assert_eq!(StockLevel::classify(11.0, 10.0), StockLevel::Good);
        assert_eq!(StockLevel::classify(10.0, 10.0), StockLevel::Low);
        assert_eq!(StockLevel::classify(5.1, 10.0), StockLevel::Low);
        assert_eq!(StockLevel::classify(5.0, 10.0), StockLevel::Critical);
        assert_eq!(StockLevel::classify(0.0, 0.0), StockLevel::Critical);
        assert!(row(1, "Milk", 4.0, 10.0).stock_level().needs_restock());
    }
}
