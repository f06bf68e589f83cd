//! # Demo Cafe
//!
//! The data a fresh install starts with: "Cafe Bliss" in Mumbai.
//!
//! ```text
//! ┌──────────────┬─────────────────────────────────────────────────┐
//! │ Orders       │ ORD-001 … ORD-005, four paid, counter at 6      │
//! │ Tables       │ 15 tables, 1-5 occupied, 6 reserved             │
//! │ Staff        │ 5 members, salaries on the first two            │
//! │ Menu         │ 35 items across 8 categories                    │
//! │ Inventory    │ 5 ingredient rows                               │
//! │ Session      │ Rajesh Kumar (admin)                            │
//! └──────────────┴─────────────────────────────────────────────────┘
//! ```
//!
//! Order timestamps are relative to the moment the snapshot is built.

use std::collections::BTreeSet;

use chrono::{Duration, Utc};

use cafe_core::{
    Analytics, CafeSettings, InventoryItem, MenuItem, Money, Order, OrderItem, OrderStatus,
    OrderType, PaymentMethod, PaymentStatus, Role, Staff, StaffStatus, Table, TableStatus, User,
};

use crate::snapshot::StoreSnapshot;

/// Builds the demo cafe.
///
/// Analytics are derived from the seeded orders. The paid seed orders are
/// marked as already deducted so that re-saving them as paid leaves the
/// inventory alone.
pub fn demo_snapshot() -> StoreSnapshot {
    let orders = demo_orders();
    let analytics = Analytics::from_orders(&orders);
    let inventory_deducted: BTreeSet<String> = orders
        .iter()
        .filter(|o| o.is_paid())
        .map(|o| o.id.clone())
        .collect();

    StoreSnapshot {
        user: Some(User {
            id: "user-001".to_string(),
            name: "Rajesh Kumar".to_string(),
            email: "admin@cafebliss.com".to_string(),
            role: Role::Admin,
            avatar: Some("/avatar-admin.jpg".to_string()),
        }),
        orders,
        order_counter: 6,
        tables: demo_tables(),
        staff: demo_staff(),
        inventory: demo_inventory(),
        menu_items: demo_menu(),
        analytics,
        analytics_updated_at: Some(Utc::now()),
        cafe_settings: CafeSettings::default(),
        inventory_deducted,
    }
}

// =============================================================================
// Orders
// =============================================================================

fn line(id: u32, name: &str, quantity: u32, price: i64, category: &str) -> OrderItem {
    OrderItem {
        id,
        name: name.to_string(),
        price: Money::from_major(price),
        quantity,
        category: category.to_string(),
    }
}

struct SeedOrder {
    number: u32,
    customer: (&'static str, &'static str),
    order_type: OrderType,
    table_number: Option<u32>,
    status: OrderStatus,
    items: Vec<OrderItem>,
    totals: (Money, Money, Money),
    payment: (PaymentStatus, Option<PaymentMethod>),
    minutes_ago: i64,
    notes: &'static str,
}

impl SeedOrder {
    fn build(self) -> Order {
        let now = Utc::now();
        let (subtotal, tax_amount, total_amount) = self.totals;
        let completed_at = (self.status == OrderStatus::Completed)
            .then(|| now - Duration::minutes(self.minutes_ago / 2));

        Order {
            id: format!("ORD-{:03}", self.number),
            order_number: format!("{:03}", self.number),
            customer_name: self.customer.0.to_string(),
            customer_phone: self.customer.1.to_string(),
            order_type: self.order_type,
            table_number: self.table_number,
            status: self.status,
            items: self.items,
            subtotal,
            tax_amount,
            total_amount,
            payment_status: self.payment.0,
            payment_method: self.payment.1,
            created_at: now - Duration::minutes(self.minutes_ago),
            updated_at: None,
            completed_at,
            notes: self.notes.to_string(),
            is_online: self.order_type == OrderType::Online,
            discount: None,
        }
    }
}

fn totals(subtotal: i64, tax: Money, total: Money) -> (Money, Money, Money) {
    (Money::from_major(subtotal), tax, total)
}

fn demo_orders() -> Vec<Order> {
    let seeds = vec![
        SeedOrder {
            number: 1,
            customer: ("Aditya Sharma", "+91 98765 43211"),
            order_type: OrderType::DineIn,
            table_number: Some(5),
            status: OrderStatus::Preparing,
            items: vec![
                line(1, "Masala Chai", 2, 120, "Hot Beverages"),
                line(6, "Samosa Platter", 1, 180, "Snacks"),
            ],
            totals: totals(420, Money::from_major(21), Money::from_major(441)),
            payment: (PaymentStatus::Paid, Some(PaymentMethod::Upi)),
            minutes_ago: 20,
            notes: "Extra masala in chai, mint chutney on the side",
        },
        SeedOrder {
            number: 2,
            customer: ("Priyanka Gupta", "+91 87654 32109"),
            order_type: OrderType::Takeaway,
            table_number: None,
            status: OrderStatus::Ready,
            items: vec![
                line(2, "Cold Coffee", 2, 160, "Cold Beverages"),
                line(8, "Paneer Tikka Sandwich", 1, 220, "Sandwiches"),
            ],
            totals: totals(540, Money::from_major(27), Money::from_major(567)),
            payment: (PaymentStatus::Paid, Some(PaymentMethod::Cash)),
            minutes_ago: 15,
            notes: "Extra cheese in sandwich",
        },
        SeedOrder {
            number: 3,
            customer: ("Rahul Verma", "+91 76543 21098"),
            order_type: OrderType::DineIn,
            table_number: Some(3),
            status: OrderStatus::Pending,
            items: vec![
                line(3, "Butter Chicken", 1, 350, "Main Course"),
                line(4, "Garlic Naan", 2, 60, "Breads"),
                line(5, "Mango Lassi", 2, 120, "Beverages"),
            ],
            totals: totals(
                710,
                Money::from_major_minor(35, 50),
                Money::from_major_minor(745, 50),
            ),
            payment: (PaymentStatus::Pending, None),
            minutes_ago: 10,
            notes: "Medium spicy",
        },
        SeedOrder {
            number: 4,
            customer: ("Nisha Patel", "+91 65432 10987"),
            order_type: OrderType::Online,
            table_number: None,
            status: OrderStatus::Preparing,
            items: vec![
                line(6, "Chocolate Truffle Pastry", 2, 160, "Desserts"),
                line(7, "Filter Coffee", 2, 120, "Hot Beverages"),
            ],
            totals: totals(560, Money::from_major(28), Money::from_major(588)),
            payment: (PaymentStatus::Paid, Some(PaymentMethod::Upi)),
            minutes_ago: 25,
            notes: "Deliver by 5:30 PM",
        },
        SeedOrder {
            number: 5,
            customer: ("Suresh Kumar", "+91 95432 10987"),
            order_type: OrderType::DineIn,
            table_number: Some(8),
            status: OrderStatus::Completed,
            items: vec![
                line(8, "Masala Dosa", 1, 160, "South Indian"),
                line(9, "Idli Sambar", 1, 120, "South Indian"),
                line(10, "Filter Coffee", 2, 120, "Hot Beverages"),
            ],
            totals: totals(520, Money::from_major(26), Money::from_major(546)),
            payment: (PaymentStatus::Paid, Some(PaymentMethod::Card)),
            // completed 45 minutes ago
            minutes_ago: 90,
            notes: "",
        },
    ];

    seeds.into_iter().map(SeedOrder::build).collect()
}

// =============================================================================
// Floor Plan
// =============================================================================

/// Tables 1-15. Capacity cycles 6 / 2 / 4 by position; the first five are
/// occupied and the sixth reserved. Tables 3 and 5 hold the open dine-in
/// seed orders.
fn demo_tables() -> Vec<Table> {
    (0..15u32)
        .map(|i| {
            let number = i + 1;
            let capacity = if i % 3 == 0 {
                6
            } else if i % 2 == 0 {
                4
            } else {
                2
            };
            let status = match i {
                0..=4 => TableStatus::Occupied,
                5 => TableStatus::Reserved,
                _ => TableStatus::Available,
            };
            let current_order_id = match number {
                3 => Some("ORD-003".to_string()),
                5 => Some("ORD-001".to_string()),
                _ => None,
            };

            Table {
                id: number,
                number,
                capacity,
                status,
                current_order_id,
            }
        })
        .collect()
}

// =============================================================================
// Staff
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn staff(
    number: u32,
    name: &str,
    role: &str,
    email: &str,
    phone: &str,
    status: StaffStatus,
    shift: (&str, &str),
    hours_worked: f64,
    avatar: &str,
) -> Staff {
    Staff {
        id: format!("STAFF-{:03}", number),
        name: name.to_string(),
        role: role.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        status,
        shift_start: Some(shift.0.to_string()),
        shift_end: Some(shift.1.to_string()),
        hours_worked,
        avatar: Some(avatar.to_string()),
        salary: None,
        joining_date: None,
        address: None,
        position: None,
    }
}

fn demo_staff() -> Vec<Staff> {
    vec![
        Staff {
            salary: Some(Money::from_major(35_000)),
            joining_date: Some("2022-05-15".to_string()),
            address: Some("456 Park Avenue, Mumbai".to_string()),
            position: Some("Cafe Manager".to_string()),
            ..staff(
                1,
                "Priya Sharma",
                "Manager",
                "priya@cafebliss.com",
                "+91 98765 43210",
                StaffStatus::Active,
                ("08:00", "16:00"),
                8.0,
                "/avatar-manager.jpg",
            )
        },
        Staff {
            salary: Some(Money::from_major(28_000)),
            joining_date: Some("2022-06-10".to_string()),
            address: Some("789 Cuisine Lane, Mumbai".to_string()),
            position: Some("Head Chef".to_string()),
            ..staff(
                2,
                "Raj Kapoor",
                "Chef",
                "raj@cafebliss.com",
                "+91 87654 32109",
                StaffStatus::Active,
                ("09:00", "17:00"),
                7.5,
                "/avatar-chef.jpg",
            )
        },
        staff(
            3,
            "Ananya Desai",
            "Server",
            "ananya@cafebliss.com",
            "+91 76543 21098",
            StaffStatus::OnBreak,
            ("10:00", "18:00"),
            4.0,
            "/avatar-server.jpg",
        ),
        staff(
            4,
            "Vikram Singh",
            "Barista",
            "vikram@cafebliss.com",
            "+91 65432 10987",
            StaffStatus::Active,
            ("07:00", "15:00"),
            7.0,
            "/avatar-barista.jpg",
        ),
        staff(
            5,
            "Neha Gupta",
            "Cashier",
            "neha@cafebliss.com",
            "+91 54321 09876",
            StaffStatus::Inactive,
            ("12:00", "20:00"),
            0.0,
            "/avatar-cashier.jpg",
        ),
    ]
}

// =============================================================================
// Menu
// =============================================================================

const MENU: [(&str, i64, &str, &str); 35] = [
    ("Masala Chai", 120, "Hot Beverages", "/masala-chai.jpg"),
    ("Filter Coffee", 140, "Hot Beverages", "/filter-coffee.jpg"),
    ("Hot Chocolate", 180, "Hot Beverages", "/hot-chocolate.jpg"),
    ("Ginger Tea", 130, "Hot Beverages", "/ginger-tea.jpg"),
    ("Cardamom Coffee", 150, "Hot Beverages", "/cardamom-coffee.jpg"),
    ("Cold Coffee", 160, "Cold Beverages", "/cold-coffee.jpg"),
    ("Mango Lassi", 140, "Cold Beverages", "/mango-lassi.jpg"),
    ("Fresh Lime Soda", 120, "Cold Beverages", "/lime-soda.jpg"),
    ("Watermelon Juice", 130, "Cold Beverages", "/watermelon-juice.jpg"),
    ("Strawberry Milkshake", 170, "Cold Beverages", "/strawberry-milkshake.jpg"),
    ("Samosa (2 pcs)", 100, "Snacks", "/samosa.jpg"),
    ("Vada Pav", 120, "Snacks", "/vada-pav.jpg"),
    ("Paneer Tikka", 280, "Snacks", "/paneer-tikka.jpg"),
    ("Aloo Tikki Chaat", 150, "Snacks", "/aloo-tikki.jpg"),
    ("Vegetable Pakora", 160, "Snacks", "/veg-pakora.jpg"),
    ("Veg Grilled Sandwich", 180, "Sandwiches", "/veg-sandwich.jpg"),
    ("Paneer Tikka Sandwich", 220, "Sandwiches", "/paneer-sandwich.jpg"),
    ("Mumbai Sandwich", 190, "Sandwiches", "/mumbai-sandwich.jpg"),
    ("Cheese Chilli Toast", 200, "Sandwiches", "/cheese-toast.jpg"),
    ("Masala Dosa", 220, "South Indian", "/masala-dosa.jpg"),
    ("Idli Sambar", 160, "South Indian", "/idli-sambar.jpg"),
    ("Medu Vada", 150, "South Indian", "/medu-vada.jpg"),
    ("Uttapam", 200, "South Indian", "/uttapam.jpg"),
    ("Paneer Butter Masala", 320, "Main Course", "/paneer-butter-masala.jpg"),
    ("Dal Makhani", 270, "Main Course", "/dal-makhani.jpg"),
    ("Butter Chicken", 350, "Main Course", "/butter-chicken.jpg"),
    ("Veg Biryani", 280, "Main Course", "/veg-biryani.jpg"),
    ("Chicken Biryani", 320, "Main Course", "/chicken-biryani.jpg"),
    ("Butter Naan", 60, "Breads", "/butter-naan.jpg"),
    ("Garlic Naan", 70, "Breads", "/garlic-naan.jpg"),
    ("Tandoori Roti", 50, "Breads", "/tandoori-roti.jpg"),
    ("Gulab Jamun (2 pcs)", 120, "Desserts", "/gulab-jamun.jpg"),
    ("Chocolate Truffle Pastry", 160, "Desserts", "/chocolate-pastry.jpg"),
    ("Rasgulla (2 pcs)", 130, "Desserts", "/rasgulla.jpg"),
    ("Kulfi", 150, "Desserts", "/kulfi.jpg"),
];

/// Menu ids run 1-35 in catalogue order.
fn demo_menu() -> Vec<MenuItem> {
    MENU.iter()
        .zip(1u32..)
        .map(|(&(name, price, category, image), id)| MenuItem {
            id,
            name: name.to_string(),
            price: Money::from_major(price),
            category: category.to_string(),
            available: true,
            image: Some(image.to_string()),
        })
        .collect()
}

// =============================================================================
// Inventory
// =============================================================================

fn demo_inventory() -> Vec<InventoryItem> {
    let rows: [(&str, f64, &str, f64, i64, &str, &str); 5] = [
        ("Coffee Beans (Arabica)", 25.0, "kg", 5.0, 800, "Coffee Estates Ltd.", "Raw Materials"),
        ("Milk", 50.0, "liters", 10.0, 60, "Local Dairy Farm", "Dairy"),
        ("Sugar", 30.0, "kg", 5.0, 45, "Sweet Supplies Inc.", "Dry Goods"),
        ("Tea Leaves", 15.0, "kg", 3.0, 600, "Tea Traders", "Raw Materials"),
        ("Chocolate Syrup", 12.0, "bottles", 3.0, 180, "Sweet Supplies Inc.", "Syrups"),
    ];

    rows.iter()
        .zip(1u32..)
        .map(
            |(&(name, quantity, unit, min_stock_level, price, supplier, category), id)| {
                InventoryItem {
                    id,
                    name: name.to_string(),
                    quantity,
                    unit: unit.to_string(),
                    min_stock_level,
                    price: Money::from_major(price),
                    supplier: supplier.to_string(),
                    category: category.to_string(),
                    last_restocked: None,
                }
            },
        )
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_orders() {
        let snapshot = demo_snapshot();
        let ids: Vec<&str> = snapshot.orders.iter().map(|o| o.id.as_str()).collect();

        assert_eq!(ids, vec!["ORD-001", "ORD-002", "ORD-003", "ORD-004", "ORD-005"]);
        assert_eq!(snapshot.order_counter, 6);

        let ord3 = &snapshot.orders[2];
        assert_eq!(ord3.tax_amount, Money::from_minor(3_550));
        assert_eq!(ord3.total_amount, Money::from_minor(74_550));
        assert!(snapshot.orders[3].is_online);
        assert!(snapshot.orders[4].completed_at.is_some());
    }

    #[test]
    fn test_demo_analytics_cover_paid_orders() {
        let snapshot = demo_snapshot();

        // 441 + 567 + 588 + 546
        assert_eq!(snapshot.analytics.total_revenue, Money::from_major(2_142));
        assert_eq!(snapshot.analytics.total_orders, 4);
        assert_eq!(snapshot.inventory_deducted.len(), 4);
        assert!(!snapshot.inventory_deducted.contains("ORD-003"));
    }

    #[test]
    fn test_demo_tables_link_open_orders() {
        let snapshot = demo_snapshot();
        let table = |n: u32| snapshot.tables.iter().find(|t| t.number == n).unwrap();

        assert_eq!(table(3).current_order_id.as_deref(), Some("ORD-003"));
        assert_eq!(table(5).current_order_id.as_deref(), Some("ORD-001"));
        assert_eq!(table(6).status, TableStatus::Reserved);
        assert_eq!(table(7).status, TableStatus::Available);
    }

    #[test]
    fn test_demo_menu_ids() {
        let snapshot = demo_snapshot();

        assert_eq!(snapshot.menu_items.first().map(|m| m.id), Some(1));
        assert_eq!(snapshot.menu_items.last().map(|m| m.id), Some(35));
        assert!(snapshot.menu_items.iter().all(|m| m.available));
    }
}
