//! # cafe-core: Pure Domain Logic for Cafe Desk
//!
//! This crate is the **heart** of Cafe Desk. It holds the domain types and
//! every calculation the back office relies on, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cafe Desk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard (web SPA)                          │   │
//! │  │   Orders ──► Tables ──► Billing ──► Inventory ──► Analytics     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ named store mutations                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    cafe-store (CafeStore)                       │   │
//! │  │   create_order, set_payment_status, assign_table, ...           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cafe-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌──────────┐ ┌───────────┐ ┌───────────┐        │   │
//! │  │   │  types  │ │  money   │ │ analytics │ │ inventory │        │   │
//! │  │   │  Order  │ │ currency │ │ projection│ │ rule table│        │   │
//! │  │   └─────────┘ └──────────┘ └───────────┘ └───────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Order, Table, Staff, InventoryItem, ...)
//! - [`money`] - Money type with integer arithmetic (paise, not floats)
//! - [`currency`] - Display currency conversion and formatting
//! - [`analytics`] - Paid-order projection (revenue, categories, top items)
//! - [`inventory`] - Keyword decrement rules and stock level classification
//! - [`access`] - Role gates for dashboard sections and salary visibility
//! - [`order`] - Order drafting (line items, totals)
//! - [`validation`] - Input validation for checked entry points
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cafe_core::money::Money;
//! use cafe_core::types::TaxRate;
//!
//! let chai = Money::from_minor(12000); // ₹120.00
//! let tax = (chai * 2u32).calculate_tax(TaxRate::from_bps(500)); // 5% GST
//! assert_eq!(tax.minor(), 1200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod analytics;
pub mod currency;
pub mod error;
pub mod inventory;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use analytics::Analytics;
pub use currency::Currency;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::OrderDraft;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Assumed flat profit margin (percent) reported by analytics.
///
/// The back office has no cost data per menu item, so the dashboard shows
/// this fixed estimate.
pub const ASSUMED_PROFIT_MARGIN: u32 = 60;

/// Number of entries kept in the analytics top-items list.
pub const TOP_ITEMS_LIMIT: usize = 10;

/// Maximum quantity of a single item on one order.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Maximum number of distinct line items on one order.
pub const MAX_ORDER_LINES: usize = 100;
