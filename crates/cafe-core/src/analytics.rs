//! # Analytics Projection
//!
//! Derives the dashboard analytics from the order list.
//!
//! ## Projection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  orders ──► filter(payment_status == paid)                              │
//! │                │                                                        │
//! │                ├──► weekday buckets   Mon..Sun by created_at (UTC)      │
//! │                ├──► totals            revenue, count, average           │
//! │                ├──► category sales    Σ price×qty per category, % share │
//! │                └──► popular items     Σ qty per item name, top 10       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Analytics::from_orders`] is a pure function: it never looks at the
//! previous analytics, so recomputing with an unchanged order list gives an
//! identical result. Weekday buckets collapse all weeks into one.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

use crate::money::Money;
use crate::types::Order;
use crate::{ASSUMED_PROFIT_MARGIN, TOP_ITEMS_LIMIT};

/// Short weekday labels, Monday first.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Revenue and order count for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    /// Short weekday label ("Mon").
    pub date: String,
    pub revenue: Money,
    pub orders: u32,
}

/// Line revenue of one menu category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: String,
    pub sales: Money,
    /// Whole-number share of all line revenue.
    pub percentage: u32,
}

/// Units sold and revenue of one item name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PopularItem {
    pub name: String,
    pub quantity: u32,
    pub revenue: Money,
}

/// Aggregated view over the paid orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub daily_revenue: Vec<DailyRevenue>,
    pub total_revenue: Money,
    pub total_orders: u32,
    pub average_order_value: Money,
    pub category_sales: Vec<CategorySales>,
    pub popular_items: Vec<PopularItem>,
    /// Flat estimate in percent.
    pub profit_margin: u32,
}

impl Default for Analytics {
    /// The projection of an empty order list.
    fn default() -> Self {
        Analytics::from_orders(&[])
    }
}

impl Analytics {
    /// Builds analytics from the paid subset of `orders`.
    ///
    /// ```rust
    /// use cafe_core::analytics::Analytics;
    ///
    /// let empty = Analytics::from_orders(&[]);
    /// assert_eq!(empty.total_orders, 0);
    /// assert_eq!(empty.daily_revenue.len(), 7);
    /// assert!(empty.average_order_value.is_zero());
    /// ```
    pub fn from_orders(orders: &[Order]) -> Self {
        let paid: Vec<&Order> = orders.iter().filter(|o| o.is_paid()).collect();

        let total_revenue: Money = paid.iter().map(|o| o.total_amount).sum();
        let total_orders = paid.len() as u32;

        Analytics {
            daily_revenue: weekday_buckets(&paid),
            total_revenue,
            total_orders,
            average_order_value: total_revenue.average_over(paid.len()),
            category_sales: category_sales(&paid),
            popular_items: popular_items(&paid),
            profit_margin: ASSUMED_PROFIT_MARGIN,
        }
    }

    /// Revenue bucket for a weekday label, if it exists.
    pub fn revenue_on(&self, weekday: &str) -> Option<&DailyRevenue> {
        self.daily_revenue.iter().find(|d| d.date == weekday)
    }
}

// =============================================================================
// Projections
// =============================================================================

fn weekday_buckets(paid: &[&Order]) -> Vec<DailyRevenue> {
    let mut buckets: Vec<DailyRevenue> = WEEKDAYS
        .iter()
        .map(|day| DailyRevenue {
            date: (*day).to_string(),
            revenue: Money::zero(),
            orders: 0,
        })
        .collect();

    for order in paid {
        let idx = order.created_at.weekday().num_days_from_monday() as usize;
        buckets[idx].revenue += order.total_amount;
        buckets[idx].orders += 1;
    }

    buckets
}

fn category_sales(paid: &[&Order]) -> Vec<CategorySales> {
    // Insertion order is kept so equal sales stay in first-seen order.
    let mut totals: Vec<(String, Money)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in paid.iter().flat_map(|o| o.items.iter()) {
        let idx = *index.entry(item.category.clone()).or_insert_with(|| {
            totals.push((item.category.clone(), Money::zero()));
            totals.len() - 1
        });
        totals[idx].1 += item.line_total();
    }

    let grand_total: Money = totals.iter().map(|(_, sales)| *sales).sum();

    let mut sales: Vec<CategorySales> = totals
        .into_iter()
        .map(|(category, sales)| CategorySales {
            percentage: sales.percentage_of(grand_total),
            category,
            sales,
        })
        .collect();

    sales.sort_by(|a, b| b.sales.cmp(&a.sales));
    sales
}

fn popular_items(paid: &[&Order]) -> Vec<PopularItem> {
    let mut items: Vec<PopularItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in paid.iter().flat_map(|o| o.items.iter()) {
        let idx = *index.entry(item.name.clone()).or_insert_with(|| {
            items.push(PopularItem {
                name: item.name.clone(),
                quantity: 0,
                revenue: Money::zero(),
            });
            items.len() - 1
        });
        items[idx].quantity += item.quantity;
        items[idx].revenue += item.line_total();
    }

    items.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    items.truncate(TOP_ITEMS_LIMIT);
    items
}

// =============================================================================
// Unit Tests
// =============================================================================
