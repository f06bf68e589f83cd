//! # Role Access
//!
//! Which dashboard sections each role may open, and who sees salaries.
//!
//! ```text
//!               admin  manager  cashier  waiter
//!   dashboard     ✓       ✓        ✓        ✓
//!   menu          ✓       ✓
//!   orders        ✓       ✓        ✓        ✓
//!   inventory     ✓       ✓
//!   staff         ✓       ✓
//!   analytics     ✓       ✓        ✓
//!   settings      ✓
//!   billing       ✓       ✓        ✓
//!   help          ✓       ✓        ✓        ✓
//!   salaries      ✓       ✓
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Role, Staff};

/// A top-level dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Dashboard,
    Menu,
    Orders,
    Inventory,
    Staff,
    Analytics,
    Settings,
    Billing,
    Help,
}

impl Section {
    /// Every section, in sidebar order.
    pub const ALL: [Section; 9] = [
        Section::Dashboard,
        Section::Menu,
        Section::Orders,
        Section::Inventory,
        Section::Staff,
        Section::Analytics,
        Section::Settings,
        Section::Billing,
        Section::Help,
    ];

    /// Roles allowed to open this section.
    pub fn allowed_roles(&self) -> &'static [Role] {
        use Role::*;
        match self {
            Section::Dashboard | Section::Orders | Section::Help => {
                &[Admin, Manager, Cashier, Waiter]
            }
            Section::Menu | Section::Inventory | Section::Staff => &[Admin, Manager],
            Section::Analytics | Section::Billing => &[Admin, Manager, Cashier],
            Section::Settings => &[Admin],
        }
    }
}

impl Role {
    /// Whether this role may open `section`.
    pub fn can_access(&self, section: Section) -> bool {
        section.allowed_roles().contains(self)
    }

    /// Sections shown in this role's sidebar.
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .iter()
            .copied()
            .filter(|s| self.can_access(*s))
            .collect()
    }

    /// Whether staff salaries are shown to this role.
    pub fn can_view_salary(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }
}

impl Staff {
    /// Copy of this record as `role` may see it; salary is dropped for
    /// roles that cannot view it.
    pub fn visible_to(&self, role: Role) -> Staff {
        let mut staff = self.clone();
        if !role.can_view_salary() {
            staff.salary = None;
        }
        staff
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::StaffStatus;

    #[test]
    fn test_sidebar_per_role() {
        assert_eq!(Role::Admin.sections().len(), 9);
        assert_eq!(
            Role::Waiter.sections(),
            vec![Section::Dashboard, Section::Orders, Section::Help]
        );
        assert!(Role::Cashier.can_access(Section::Billing));
        assert!(Role::Cashier.can_access(Section::Analytics));
        assert!(!Role::Cashier.can_access(Section::Inventory));
        assert!(!Role::Manager.can_access(Section::Settings));
    }

    #[test]
    fn test_salary_redaction() {
        let staff = Staff {
            id: "STAFF-001".to_string(),
            name: "Priya Sharma".to_string(),
            role: "Manager".to_string(),
            email: "priya@cafebliss.com".to_string(),
            phone: "+91 98765 43211".to_string(),
            status: StaffStatus::Active,
            shift_start: None,
            shift_end: None,
            hours_worked: 160.0,
            avatar: None,
            salary: Some(Money::from_major(45_000)),
            joining_date: None,
            address: None,
            position: None,
        };

        assert_eq!(staff.visible_to(Role::Manager).salary, staff.salary);
        assert_eq!(staff.visible_to(Role::Admin).salary, staff.salary);
        assert_eq!(staff.visible_to(Role::Cashier).salary, None);
        assert_eq!(staff.visible_to(Role::Waiter).salary, None);
    }
}
