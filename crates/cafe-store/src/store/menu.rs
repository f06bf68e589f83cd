//! Menu catalogue edits.
//!
//! Orders copy name, price and category when they are placed, so editing or
//! deleting a menu item never rewrites existing orders.

use tracing::{debug, info};

use cafe_core::{MenuItem, MenuItemUpdate, NewMenuItem};

use super::CafeStore;

impl CafeStore {
    /// Adds a menu item and returns its id (highest existing id + 1).
    pub fn add_menu_item(&mut self, data: NewMenuItem) -> u32 {
        let id = self.state.menu_items.iter().map(|m| m.id).max().unwrap_or(0) + 1;

        info!(menu_item_id = id, name = %data.name, price = %data.price, "Menu item added");
        self.state.menu_items.push(MenuItem {
            id,
            name: data.name,
            price: data.price,
            category: data.category,
            available: data.available,
            image: data.image,
        });
        id
    }

    pub fn update_menu_item(&mut self, id: u32, changes: MenuItemUpdate) -> bool {
        let Some(item) = self.state.menu_items.iter_mut().find(|m| m.id == id) else {
            debug!(menu_item_id = id, "update_menu_item: no such item");
            return false;
        };

        changes.apply(item);
        info!(menu_item_id = id, name = %item.name, "Menu item updated");

        self.recompute_analytics();
        true
    }

    pub fn delete_menu_item(&mut self, id: u32) -> bool {
        let before = self.state.menu_items.len();
        self.state.menu_items.retain(|m| m.id != id);

        if self.state.menu_items.len() == before {
            debug!(menu_item_id = id, "delete_menu_item: no such item");
            return false;
        }

        info!(menu_item_id = id, "Menu item removed");
        self.recompute_analytics();
        true
    }

    /// Menu items that can be ordered right now.
    pub fn available_menu_items(&self) -> Vec<&MenuItem> {
        self.state.menu_items.iter().filter(|m| m.available).collect()
    }

    /// Distinct categories in catalogue order.
    pub fn menu_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.state.menu_items {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::Money;

    #[test]
    fn test_add_menu_item_takes_next_id() {
        let mut store = CafeStore::demo();

        let id = store.add_menu_item(NewMenuItem {
            name: "Filter Coffee".to_string(),
            price: Money::from_major(90),
            category: "Hot Beverages".to_string(),
            available: true,
            image: None,
        });

        assert_eq!(id, 36);
        assert_eq!(store.menu_item(36).unwrap().name, "Filter Coffee");
    }

    #[test]
    fn test_menu_edits_leave_orders_alone() {
        let mut store = CafeStore::demo();
        let before = store.order("ORD-001").unwrap().items.clone();
        let first_id = before[0].id;

        assert!(store.update_menu_item(
            first_id,
            MenuItemUpdate {
                name: Some("Renamed".to_string()),
                price: Some(Money::from_major(999)),
                ..Default::default()
            }
        ));
        assert!(store.delete_menu_item(first_id));

        assert_eq!(store.order("ORD-001").unwrap().items, before);
        assert!(store.menu_item(first_id).is_none());
    }

    #[test]
    fn test_unknown_menu_item() {
        let mut store = CafeStore::demo();

        assert!(!store.update_menu_item(404, MenuItemUpdate::default()));
        assert!(!store.delete_menu_item(404));
        assert_eq!(store.menu_items().len(), 35);
    }

    #[test]
    fn test_availability_filter() {
        let mut store = CafeStore::demo();
        let all = store.available_menu_items().len();

        store.update_menu_item(
            1,
            MenuItemUpdate {
                available: Some(false),
                ..Default::default()
            },
        );

        assert_eq!(store.available_menu_items().len(), all - 1);
        assert!(!store.menu_categories().is_empty());
    }
}
