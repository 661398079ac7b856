pub mod provider;
pub mod session;

pub use provider::{use_auth, AuthHandle, AuthProvider};
pub use session::Session;

use crate::models::{Role, User};

/// The support account is always an admin, whatever role the backend has
/// stored for it.
pub const SUPPORT_EMAIL: &str = "support@medverse.com";

pub fn is_support_account(user: &User) -> bool {
    user.email.eq_ignore_ascii_case(SUPPORT_EMAIL)
}

/// Ordered effective-role resolution, shared by the role guard, the
/// dashboard dispatcher, and the post-login landing decision:
///
/// 1. support-account override;
/// 2. the live active role;
/// 3. the user's own stored role.
///
/// Callers pass context values merged with the storage fallback, so this
/// stays a pure function.
pub fn resolve_role(user: Option<&User>, active_role: Option<Role>) -> Option<Role> {
    if let Some(user) = user {
        if is_support_account(user) {
            return Some(Role::Admin);
        }
    }
    if active_role.is_some() {
        return active_role;
    }
    user.map(|user| user.role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, role: Role) -> User {
        User {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: email.into(),
            role,
            roles: None,
            is_registered: None,
            specialization: None,
            bio: None,
            consultation_fee: None,
            qualifications: None,
            profile_picture_url: None,
        }
    }

    #[test]
    fn support_account_is_admin_for_any_stored_role() {
        for stored in [Role::Patient, Role::Doctor, Role::Staff, Role::Admin] {
            let u = user("support@medverse.com", stored);
            assert_eq!(resolve_role(Some(&u), Some(stored)), Some(Role::Admin));
        }
        // Case-insensitive match on the address
        let u = user("Support@MedVerse.com", Role::Patient);
        assert_eq!(resolve_role(Some(&u), None), Some(Role::Admin));
    }

    #[test]
    fn active_role_wins_over_the_user_record() {
        let u = user("d@example.com", Role::Doctor);
        assert_eq!(resolve_role(Some(&u), Some(Role::Patient)), Some(Role::Patient));
    }

    #[test]
    fn falls_back_to_the_user_role_then_to_nothing() {
        let u = user("d@example.com", Role::Doctor);
        assert_eq!(resolve_role(Some(&u), None), Some(Role::Doctor));
        assert_eq!(resolve_role(None, Some(Role::Staff)), Some(Role::Staff));
        assert_eq!(resolve_role(None, None), None);
    }
}
