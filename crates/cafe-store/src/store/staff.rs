//! Staff records.

use tracing::{debug, info};

use cafe_core::validation::validate_new_staff;
use cafe_core::{NewStaff, Staff, StaffStatus, StaffUpdate};

use super::CafeStore;
use crate::error::StoreResult;

impl CafeStore {
    /// Validates and adds a staff member, returning the new `STAFF-NNN` id.
    pub fn add_staff(&mut self, data: NewStaff) -> StoreResult<String> {
        validate_new_staff(&data)?;

        let id = self.next_staff_id();
        let staff = data.with_id(id.clone());
        info!(staff_id = %id, name = %staff.name, role = %staff.role, "Staff added");

        self.state.staff.push(staff);
        Ok(id)
    }

    /// Applies a partial update to a staff member.
    pub fn update_staff(&mut self, id: &str, changes: StaffUpdate) -> bool {
        let Some(member) = self.staff_mut(id) else {
            debug!(staff_id = id, "update_staff: no such staff member");
            return false;
        };

        changes.apply(member);
        info!(staff_id = id, "Staff updated");
        true
    }

    pub fn delete_staff(&mut self, id: &str) -> bool {
        let before = self.state.staff.len();
        self.state.staff.retain(|s| s.id != id);

        let removed = self.state.staff.len() != before;
        if removed {
            info!(staff_id = id, "Staff removed");
        }
        removed
    }

    pub fn update_staff_status(&mut self, id: &str, status: StaffStatus) -> bool {
        let Some(member) = self.staff_mut(id) else {
            debug!(staff_id = id, "update_staff_status: no such staff member");
            return false;
        };

        member.status = status;
        info!(staff_id = id, ?status, "Staff status updated");
        true
    }

    /// Sets a staff member's shift window (`HH:MM`).
    pub fn update_staff_shift(&mut self, id: &str, shift_start: &str, shift_end: &str) -> bool {
        let Some(member) = self.staff_mut(id) else {
            debug!(staff_id = id, "update_staff_shift: no such staff member");
            return false;
        };

        member.shift_start = Some(shift_start.to_string());
        member.shift_end = Some(shift_end.to_string());
        info!(staff_id = id, shift_start, shift_end, "Staff shift updated");
        true
    }

    /// Staff list as the signed-in user may see it.
    ///
    /// Salaries are dropped unless an admin or manager is signed in.
    pub fn staff_for_session(&self) -> Vec<Staff> {
        match self.user() {
            Some(user) => self.state.staff.iter().map(|s| s.visible_to(user.role)).collect(),
            None => self
                .state
                .staff
                .iter()
                .map(|s| Staff {
                    salary: None,
                    ..s.clone()
                })
                .collect(),
        }
    }

    fn staff_mut(&mut self, id: &str) -> Option<&mut Staff> {
        self.state.staff.iter_mut().find(|s| s.id == id)
    }

    fn next_staff_id(&self) -> String {
        let last = self
            .state
            .staff
            .iter()
            .filter_map(|s| s.id.strip_prefix("STAFF-"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("STAFF-{:03}", last + 1)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::{Money, Role};

    fn new_barista() -> NewStaff {
        NewStaff {
            name: "Arjun Mehta".to_string(),
            role: "Barista".to_string(),
            email: "arjun@cafebliss.com".to_string(),
            phone: "+91 99887 76655".to_string(),
            status: StaffStatus::Active,
            shift_start: Some("06:00".to_string()),
            shift_end: Some("14:00".to_string()),
            hours_worked: 0.0,
            avatar: None,
            salary: Some(Money::from_major(22_000)),
            joining_date: Some("2024-02-01".to_string()),
            address: None,
            position: Some("Junior Barista".to_string()),
        }
    }

    #[test]
    fn test_add_staff_assigns_next_id() {
        let mut store = CafeStore::demo();

        let id = store.add_staff(new_barista()).unwrap();

        assert_eq!(id, "STAFF-006");
        assert_eq!(store.staff().len(), 6);
        assert_eq!(store.staff().last().unwrap().name, "Arjun Mehta");
    }

    #[test]
    fn test_add_staff_rejects_bad_input() {
        let mut store = CafeStore::demo();
        let mut staff = new_barista();
        staff.email = "not-an-email".to_string();

        assert!(store.add_staff(staff).is_err());
        assert_eq!(store.staff().len(), 5);
    }

    #[test]
    fn test_status_shift_and_update() {
        let mut store = CafeStore::demo();

        assert!(store.update_staff_status("STAFF-005", StaffStatus::Active));
        assert!(store.update_staff_shift("STAFF-005", "14:00", "22:00"));
        assert!(store.update_staff(
            "STAFF-005",
            StaffUpdate {
                hours_worked: Some(6.5),
                ..Default::default()
            }
        ));

        let neha = store.staff().iter().find(|s| s.id == "STAFF-005").unwrap();
        assert_eq!(neha.status, StaffStatus::Active);
        assert_eq!(neha.shift_start.as_deref(), Some("14:00"));
        assert_eq!(neha.hours_worked, 6.5);

        assert!(!store.update_staff_status("STAFF-999", StaffStatus::Inactive));
    }

    #[test]
    fn test_delete_staff() {
        let mut store = CafeStore::demo();

        assert!(store.delete_staff("STAFF-003"));
        assert!(!store.delete_staff("STAFF-003"));
        assert_eq!(store.staff().len(), 4);
    }

    #[test]
    fn test_salary_follows_session_role() {
        let mut store = CafeStore::demo();
        let priya_salary = |list: &[Staff]| {
            list.iter()
                .find(|s| s.id == "STAFF-001")
                .and_then(|s| s.salary)
        };

        assert_eq!(
            priya_salary(&store.staff_for_session()),
            Some(Money::from_major(35_000))
        );

        store.login("cashier@cafe.com", "secret", None);
        assert_eq!(store.user().unwrap().role, Role::Cashier);
        assert_eq!(priya_salary(&store.staff_for_session()), None);

        store.logout();
        assert_eq!(priya_salary(&store.staff_for_session()), None);
    }
}
