use crate::models::{Role, User};

/// The in-memory authenticated context: token, user, and the role the
/// user is currently acting as.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub active_role: Option<Role>,
    pub remember_me: bool,
}

impl Session {
    pub fn logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Enforce the invariant that the active role is a member of the
    /// user's role list; mismatches reset to the first role. Returns the
    /// corrected session and whether a correction happened, so callers
    /// can persist it.
    pub fn normalized(mut self) -> (Session, bool) {
        let Some(user) = self.user.as_ref() else {
            return (self, false);
        };
        let roles = user.role_list();
        let valid = self.active_role.map_or(false, |role| roles.contains(&role));
        if valid {
            (self, false)
        } else {
            self.active_role = roles.first().copied();
            (self, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi_role_user() -> User {
        User {
            id: None,
            first_name: "Nila".into(),
            last_name: "Shah".into(),
            email: "nila@example.com".into(),
            role: Role::Doctor,
            roles: Some(vec![Role::Doctor, Role::Patient]),
            is_registered: Some(true),
            specialization: None,
            bio: None,
            consultation_fee: None,
            qualifications: None,
            profile_picture_url: None,
        }
    }

    #[test]
    fn mismatched_active_role_resets_to_first_role() {
        let session = Session {
            token: Some("t".into()),
            user: Some(multi_role_user()),
            active_role: Some(Role::Admin),
            remember_me: false,
        };
        let (corrected, changed) = session.normalized();
        assert!(changed);
        assert_eq!(corrected.active_role, Some(Role::Doctor));
    }

    #[test]
    fn missing_active_role_is_also_corrected() {
        let session = Session {
            token: Some("t".into()),
            user: Some(multi_role_user()),
            active_role: None,
            remember_me: true,
        };
        let (corrected, changed) = session.normalized();
        assert!(changed);
        assert_eq!(corrected.active_role, Some(Role::Doctor));
    }

    #[test]
    fn valid_active_role_is_left_alone() {
        let session = Session {
            token: Some("t".into()),
            user: Some(multi_role_user()),
            active_role: Some(Role::Patient),
            remember_me: false,
        };
        let (unchanged, changed) = session.normalized();
        assert!(!changed);
        assert_eq!(unchanged.active_role, Some(Role::Patient));
    }

    #[test]
    fn sessions_without_a_user_never_correct() {
        let session = Session::default();
        let (unchanged, changed) = session.normalized();
        assert!(!changed);
        assert_eq!(unchanged.active_role, None);
    }
}
