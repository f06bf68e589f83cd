//! # Domain Types
//!
//! Core domain types used throughout Cafe Desk.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │     Table       │   │  InventoryItem  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id  ORD-007    │   │  id / number    │   │  id             │       │
//! │  │  order_number   │◄──│  current_order  │   │  quantity (f64) │       │
//! │  │  items (frozen) │   │  status         │   │  min_stock_level│       │
//! │  │  status/payment │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │     Staff       │   │  CafeSettings   │       │
//! │  │  price (Money)  │   │  salary (gated) │   │  tax, currency  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Status fields are plain enums. Nothing here enforces a transition order;
//! the store accepts any status after any other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::{Currency, ExchangeRates};
use crate::money::Money;

/// Order identifier, e.g. `ORD-007`.
pub type OrderId = String;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so the default 5% GST is 500 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Orders
// =============================================================================

/// How the customer is being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    DineIn,
    Takeaway,
    Delivery,
    Online,
}

/// Kitchen status of an order.
///
/// The usual path is pending → preparing → ready → completed, with
/// cancelled possible at any point. The path is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order no longer needs a table.
    pub fn is_closed(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

/// How an order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
    Wallet,
}

/// A line on an order.
///
/// Snapshot of the menu item at the time the order was taken. Later menu
/// edits never reach back into placed orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Menu item id at time of ordering.
    pub id: u32,
    pub name: String,
    /// Unit price at time of ordering (frozen).
    pub price: Money,
    pub quantity: u32,
    pub category: String,
}

impl OrderItem {
    /// Freezes a menu item into an order line.
    pub fn from_menu_item(item: &MenuItem, quantity: u32) -> Self {
        OrderItem {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity,
            category: item.category.clone(),
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// A customer transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Zero-padded sequential number shown on tickets, e.g. `007`.
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub order_type: OrderType,
    pub table_number: Option<u32>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub subtotal: Money,
    pub tax_amount: Money,
    pub total_amount: Money,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<PaymentMethod>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "Option<String>", optional)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>", optional)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: String,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub discount: Option<Money>,
}

impl Order {
    /// Whether the order counts towards revenue.
    #[inline]
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Everything a caller supplies to create an order.
///
/// The store assigns id, number and creation time, and forces both the
/// kitchen and payment status to pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_phone: String,
    pub order_type: OrderType,
    pub table_number: Option<u32>,
    pub items: Vec<OrderItem>,
    pub subtotal: Money,
    pub tax_amount: Money,
    pub total_amount: Money,
    pub notes: String,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub discount: Option<Money>,
}

// =============================================================================
// Tables
// =============================================================================

/// Occupancy of a dine-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
}

/// A physical dine-in seating unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: u32,
    /// Number painted on the table, shown on orders.
    pub number: u32,
    pub capacity: u32,
    pub status: TableStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub current_order_id: Option<OrderId>,
}

// =============================================================================
// Staff
// =============================================================================

/// Availability of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    Active,
    Inactive,
    OnBreak,
}

/// A staff member.
///
/// `salary` is only shown to admin and manager sessions, see
/// [`crate::access`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    /// Job role on the floor ("Barista", "Chef", ...), free text.
    pub role: String,
    pub email: String,
    pub phone: String,
    pub status: StaffStatus,
    /// Shift start, `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub shift_start: Option<String>,
    /// Shift end, `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub shift_end: Option<String>,
    pub hours_worked: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub avatar: Option<String>,
    /// Monthly salary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub salary: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub joining_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub position: Option<String>,
}

/// Payload for adding a staff member; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewStaff {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub status: StaffStatus,
    pub shift_start: Option<String>,
    pub shift_end: Option<String>,
    pub hours_worked: f64,
    pub avatar: Option<String>,
    pub salary: Option<Money>,
    pub joining_date: Option<String>,
    pub address: Option<String>,
    pub position: Option<String>,
}

impl NewStaff {
    /// Attaches an id, producing the stored record.
    pub fn with_id(self, id: String) -> Staff {
        Staff {
            id,
            name: self.name,
            role: self.role,
            email: self.email,
            phone: self.phone,
            status: self.status,
            shift_start: self.shift_start,
            shift_end: self.shift_end,
            hours_worked: self.hours_worked,
            avatar: self.avatar,
            salary: self.salary,
            joining_date: self.joining_date,
            address: self.address,
            position: self.position,
        }
    }
}

/// Partial update of a staff member. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<StaffStatus>,
    pub hours_worked: Option<f64>,
    pub salary: Option<Money>,
    pub address: Option<String>,
    pub position: Option<String>,
}

impl StaffUpdate {
    pub fn apply(&self, staff: &mut Staff) {
        if let Some(name) = &self.name {
            staff.name = name.clone();
        }
        if let Some(role) = &self.role {
            staff.role = role.clone();
        }
        if let Some(email) = &self.email {
            staff.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            staff.phone = phone.clone();
        }
        if let Some(status) = self.status {
            staff.status = status;
        }
        if let Some(hours) = self.hours_worked {
            staff.hours_worked = hours;
        }
        if let Some(salary) = self.salary {
            staff.salary = Some(salary);
        }
        if let Some(address) = &self.address {
            staff.address = Some(address.clone());
        }
        if let Some(position) = &self.position {
            staff.position = Some(position.clone());
        }
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// A stock-tracked ingredient or supply row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    /// Quantity on hand in `unit`; fractional, never negative.
    pub quantity: f64,
    pub unit: String,
    /// Threshold for low / critical classification.
    pub min_stock_level: f64,
    /// Purchase price per unit.
    pub price: Money,
    pub supplier: String,
    pub category: String,
    #[ts(as = "Option<String>", optional)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_restocked: Option<DateTime<Utc>>,
}

/// Partial update of an inventory row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub min_stock_level: Option<f64>,
    pub price: Option<Money>,
    pub supplier: Option<String>,
    pub category: Option<String>,
}

impl InventoryItemUpdate {
    /// Applies the update; quantities are clamped at zero.
    pub fn apply(&self, item: &mut InventoryItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity.max(0.0);
        }
        if let Some(unit) = &self.unit {
            item.unit = unit.clone();
        }
        if let Some(min) = self.min_stock_level {
            item.min_stock_level = min.max(0.0);
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(supplier) = &self.supplier {
            item.supplier = supplier.clone();
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
    }
}

// =============================================================================
// Menu
// =============================================================================

/// A sellable menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: Money,
    pub category: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub image: Option<String>,
}

/// Payload for adding a menu item; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: String,
    pub price: Money,
    pub category: String,
    pub available: bool,
    pub image: Option<String>,
}

/// Partial update of a menu item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub category: Option<String>,
    pub available: Option<bool>,
    pub image: Option<String>,
}

impl MenuItemUpdate {
    pub fn apply(&self, item: &mut MenuItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(available) = self.available {
            item.available = available;
        }
        if let Some(image) = &self.image {
            item.image = Some(image.clone());
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Dashboard role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Cashier,
    Waiter,
}

impl Role {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Cashier => "cashier",
            Role::Waiter => "waiter",
        }
    }

    /// Capitalized label ("Cashier").
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Cashier => "Cashier",
            Role::Waiter => "Waiter",
        }
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub avatar: Option<String>,
}

/// Partial update of the signed-in user's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub avatar: Option<String>,
}

impl UserUpdate {
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(avatar) = &self.avatar {
            user.avatar = Some(avatar.clone());
        }
    }
}

// =============================================================================
// Cafe Settings
// =============================================================================

/// Dashboard colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

/// Tenant-level configuration of the cafe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CafeSettings {
    pub cafe_name: String,
    pub business_name: String,
    pub address: String,
    pub phone: String,
    pub gstin: String,
    pub upi_id: String,
    /// Opening time, `HH:MM`.
    pub opening_time: String,
    /// Closing time, `HH:MM`.
    pub closing_time: String,
    pub tax_rate: TaxRate,
    pub table_count: u32,
    pub enable_online_orders: bool,
    pub allow_table_reservation: bool,
    pub print_receipts: bool,
    pub auto_assign_tables: bool,
    /// Display currency.
    pub currency_symbol: Currency,
    /// INR per 1 USD.
    pub currency_rate_usd: f64,
    /// INR per 1 EUR.
    pub currency_rate_eur: f64,
    pub theme: Theme,
}

impl CafeSettings {
    /// Exchange rates to the base currency held by these settings.
    pub fn rates(&self) -> ExchangeRates {
        ExchangeRates {
            usd_to_inr: self.currency_rate_usd,
            eur_to_inr: self.currency_rate_eur,
        }
    }
}

impl Default for CafeSettings {
    /// Settings of the demo cafe.
    ///
    /// - 5% GST
    /// - ₹ display currency, 88.79 INR/USD, 103.39 INR/EUR
    /// - 15 tables, online orders and reservations on
    fn default() -> Self {
        CafeSettings {
            cafe_name: "Cafe Bliss".to_string(),
            business_name: "Bliss Foods Pvt. Ltd.".to_string(),
            address: "123 Coffee Lane, Mumbai, Maharashtra".to_string(),
            phone: "+91 98765 43210".to_string(),
            gstin: "27AADCB2230M1Z3".to_string(),
            upi_id: "cafebliss@ybl".to_string(),
            opening_time: "08:00".to_string(),
            closing_time: "22:00".to_string(),
            tax_rate: TaxRate::from_bps(500),
            table_count: 15,
            enable_online_orders: true,
            allow_table_reservation: true,
            print_receipts: true,
            auto_assign_tables: false,
            currency_symbol: Currency::Inr,
            currency_rate_usd: 88.79,
            currency_rate_eur: 103.39,
            theme: Theme::Light,
        }
    }
}

/// Partial update of the cafe settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CafeSettingsUpdate {
    pub cafe_name: Option<String>,
    pub business_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub gstin: Option<String>,
    pub upi_id: Option<String>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub tax_rate: Option<TaxRate>,
    pub table_count: Option<u32>,
    pub enable_online_orders: Option<bool>,
    pub allow_table_reservation: Option<bool>,
    pub print_receipts: Option<bool>,
    pub auto_assign_tables: Option<bool>,
    pub currency_symbol: Option<Currency>,
    pub currency_rate_usd: Option<f64>,
    pub currency_rate_eur: Option<f64>,
    pub theme: Option<Theme>,
}

impl CafeSettingsUpdate {
    /// Merges the update into `settings`.
    pub fn apply(&self, settings: &mut CafeSettings) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }

        set(&mut settings.cafe_name, &self.cafe_name);
        set(&mut settings.business_name, &self.business_name);
        set(&mut settings.address, &self.address);
        set(&mut settings.phone, &self.phone);
        set(&mut settings.gstin, &self.gstin);
        set(&mut settings.upi_id, &self.upi_id);
        set(&mut settings.opening_time, &self.opening_time);
        set(&mut settings.closing_time, &self.closing_time);
        set(&mut settings.tax_rate, &self.tax_rate);
        set(&mut settings.table_count, &self.table_count);
        set(&mut settings.enable_online_orders, &self.enable_online_orders);
        set(&mut settings.allow_table_reservation, &self.allow_table_reservation);
        set(&mut settings.print_receipts, &self.print_receipts);
        set(&mut settings.auto_assign_tables, &self.auto_assign_tables);
        set(&mut settings.currency_symbol, &self.currency_symbol);
        set(&mut settings.currency_rate_usd, &self.currency_rate_usd);
        set(&mut settings.currency_rate_eur, &self.currency_rate_eur);
        set(&mut settings.theme, &self.theme);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(5.0);
        assert_eq!(rate.bps(), 500);
        assert!((rate.percentage() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&OrderType::DineIn).unwrap(), "\"dine-in\"");
        assert_eq!(serde_json::to_string(&StaffStatus::OnBreak).unwrap(), "\"on-break\"");
        assert_eq!(serde_json::to_string(&PaymentStatus::Refunded).unwrap(), "\"refunded\"");
        assert_eq!(serde_json::to_string(&Role::Waiter).unwrap(), "\"waiter\"");
    }

    #[test]
    fn test_skipped_options_are_optional_in_bindings() {
        use ts_rs::TS;

        let order = Order::decl();
        assert!(order.contains("completedAt?: string"));
        assert!(order.contains("discount?: "));
        assert!(Table::decl().contains("currentOrderId?: "));
        assert!(Staff::decl().contains("salary?: "));
    }

    #[test]
    fn test_order_item_snapshot_is_detached_from_menu() {
        let mut menu = MenuItem {
            id: 1,
            name: "Masala Chai".to_string(),
            price: Money::from_major(120),
            category: "Hot Beverages".to_string(),
            available: true,
            image: None,
        };
        let line = OrderItem::from_menu_item(&menu, 2);

        menu.price = Money::from_major(150);
        menu.name = "Kadak Chai".to_string();

        assert_eq!(line.price, Money::from_major(120));
        assert_eq!(line.name, "Masala Chai");
        assert_eq!(line.line_total(), Money::from_major(240));
    }

    #[test]
    fn test_settings_update_merges_only_given_fields() {
        let mut settings = CafeSettings::default();
        let update = CafeSettingsUpdate {
            currency_symbol: Some(Currency::Usd),
            theme: Some(Theme::Dark),
            ..Default::default()
        };

        update.apply(&mut settings);

        assert_eq!(settings.currency_symbol, Currency::Usd);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.cafe_name, "Cafe Bliss");
        assert_eq!(settings.tax_rate.bps(), 500);
    }

    #[test]
    fn test_inventory_update_clamps_quantity() {
        let mut item = InventoryItem {
            id: 2,
            name: "Milk".to_string(),
            quantity: 50.0,
            unit: "liters".to_string(),
            min_stock_level: 10.0,
            price: Money::from_major(60),
            supplier: "Local Dairy Farm".to_string(),
            category: "Dairy".to_string(),
            last_restocked: None,
        };
        InventoryItemUpdate {
            quantity: Some(-4.0),
            ..Default::default()
        }
        .apply(&mut item);

        assert_eq!(item.quantity, 0.0);
    }
}
