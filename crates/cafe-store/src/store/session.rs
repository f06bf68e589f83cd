//! Signed-in user and role checks.
//!
//! ## Demo Accounts
//! ```text
//! ┌────────────────────┬──────────┬────────────────┬─────────┐
//! │ Email              │ Id       │ Name           │ Role    │
//! ├────────────────────┼──────────┼────────────────┼─────────┤
//! │ admin@cafe.com     │ admin-001│ Admin Kumar    │ admin   │
//! │ manager@cafe.com   │ mgr-001  │ Manager Sharma │ manager │
//! │ cashier@cafe.com   │ cash-001 │ Cashier Patel  │ cashier │
//! │ waiter@cafe.com    │ wait-001 │ Waiter Singh   │ waiter  │
//! │ anything else      │ user-001 │ "<Role> User"  │ chosen  │
//! └────────────────────┴──────────┴────────────────┴─────────┘
//! ```
//!
//! There is no password check. Any non-empty email and password sign in.

use tracing::{debug, info, warn};

use cafe_core::access::Section;
use cafe_core::validation::credentials_present;
use cafe_core::{Role, User, UserUpdate};

use super::CafeStore;

const DEMO_ACCOUNTS: [(&str, &str, &str, Role); 4] = [
    ("admin@cafe.com", "admin-001", "Admin Kumar", Role::Admin),
    ("manager@cafe.com", "mgr-001", "Manager Sharma", Role::Manager),
    ("cashier@cafe.com", "cash-001", "Cashier Patel", Role::Cashier),
    ("waiter@cafe.com", "wait-001", "Waiter Singh", Role::Waiter),
];

impl CafeStore {
    /// Signs a user in. Returns `false` when either credential is empty.
    ///
    /// Demo emails map to fixed accounts and ignore `role`. Other emails get
    /// a generic user with the requested role (admin when none is given).
    pub fn login(&mut self, email: &str, password: &str, role: Option<Role>) -> bool {
        if !credentials_present(email, password) {
            warn!("Login rejected: missing email or password");
            return false;
        }

        let user = match DEMO_ACCOUNTS.iter().find(|(e, ..)| *e == email) {
            Some((_, id, name, role)) => User {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                role: *role,
                avatar: None,
            },
            None => User {
                id: "user-001".to_string(),
                name: match role {
                    Some(r) => format!("{} User", r.label()),
                    None => "Default User".to_string(),
                },
                email: email.to_string(),
                role: role.unwrap_or(Role::Admin),
                avatar: None,
            },
        };

        info!(user_id = %user.id, role = user.role.as_str(), "User signed in");
        self.state.user = Some(user);
        true
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.state.user.take() {
            info!(user_id = %user.id, "User signed out");
        }
    }

    /// Merges profile changes into the signed-in user. No-op when signed out.
    pub fn update_user(&mut self, changes: UserUpdate) -> bool {
        let Some(user) = self.state.user.as_mut() else {
            debug!("update_user: nobody signed in");
            return false;
        };

        changes.apply(user);
        info!(user_id = %user.id, "User profile updated");
        true
    }

    /// Whether the signed-in user may open `section`.
    pub fn can_access(&self, section: Section) -> bool {
        self.user().is_some_and(|u| u.role.can_access(section))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_account_login() {
        let mut store = CafeStore::new();

        assert!(store.login("manager@cafe.com", "pw", Some(Role::Waiter)));

        let user = store.user().unwrap();
        assert_eq!(user.id, "mgr-001");
        assert_eq!(user.name, "Manager Sharma");
        assert_eq!(user.role, Role::Manager);
    }

    #[test]
    fn test_generic_login_uses_requested_role() {
        let mut store = CafeStore::new();

        assert!(store.login("someone@example.com", "pw", Some(Role::Cashier)));
        let user = store.user().unwrap();
        assert_eq!(user.id, "user-001");
        assert_eq!(user.name, "Cashier User");
        assert_eq!(user.role, Role::Cashier);

        assert!(store.login("someone@example.com", "pw", None));
        let user = store.user().unwrap();
        assert_eq!(user.name, "Default User");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_login_requires_both_credentials() {
        let mut store = CafeStore::new();

        assert!(!store.login("", "pw", None));
        assert!(!store.login("admin@cafe.com", "", None));
        assert!(store.user().is_none());
    }

    #[test]
    fn test_update_user_needs_session() {
        let mut store = CafeStore::new();
        let changes = UserUpdate {
            name: Some("Ravi".to_string()),
            ..Default::default()
        };

        assert!(!store.update_user(changes.clone()));

        store.login("waiter@cafe.com", "pw", None);
        assert!(store.update_user(changes));
        assert_eq!(store.user().unwrap().name, "Ravi");

        store.logout();
        assert!(store.user().is_none());
    }

    #[test]
    fn test_section_access_by_role() {
        let mut store = CafeStore::new();
        assert!(!store.can_access(Section::Dashboard));

        store.login("waiter@cafe.com", "pw", None);
        assert!(store.can_access(Section::Orders));
        assert!(!store.can_access(Section::Billing));

        store.login("admin@cafe.com", "pw", None);
        assert!(store.can_access(Section::Settings));
    }
}
