use serde::{Deserialize, Serialize};

/// Account role. Serialized lowercase on the wire and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }

    /// Parse a stored/wire role string. Unknown values are rejected so
    /// callers can fall back explicitly.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "patient" => Some(Role::Patient),
            "doctor" => Some(Role::Doctor),
            "admin" => Some(Role::Admin),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }

    /// Capitalized label for dropdowns and headings.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
            Role::Admin => "Admin",
            Role::Staff => "Staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated account as returned by the backend. Doctor-specific
/// profile fields stay None for other roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: Role,
    /// Ordered role list for multi-role accounts. Absent for the common
    /// single-role case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
    #[serde(rename = "isRegistered", default, skip_serializing_if = "Option::is_none")]
    pub is_registered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "consultationFee", default, skip_serializing_if = "Option::is_none")]
    pub consultation_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
    #[serde(rename = "profilePictureUrl", default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

fn default_role() -> Role {
    Role::Patient
}

impl User {
    /// The ordered role list: `roles` when present and non-empty,
    /// otherwise the single `role`.
    pub fn role_list(&self) -> Vec<Role> {
        match &self.roles {
            Some(roles) if !roles.is_empty() => roles.clone(),
            _ => vec![self.role],
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role_list().contains(&role)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, roles: Option<Vec<Role>>) -> User {
        User {
            id: Some("u1".into()),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            email: "asha@example.com".into(),
            role,
            roles,
            is_registered: None,
            specialization: None,
            bio: None,
            consultation_fee: None,
            qualifications: None,
            profile_picture_url: None,
        }
    }

    #[test]
    fn role_round_trips_lowercase() {
        for role in [Role::Patient, Role::Doctor, Role::Admin, Role::Staff] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), role);
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_list_falls_back_to_single_role() {
        assert_eq!(user(Role::Doctor, None).role_list(), vec![Role::Doctor]);
        assert_eq!(user(Role::Doctor, Some(vec![])).role_list(), vec![Role::Doctor]);
        assert_eq!(
            user(Role::Patient, Some(vec![Role::Doctor, Role::Patient])).role_list(),
            vec![Role::Doctor, Role::Patient]
        );
    }

    #[test]
    fn has_role_only_admits_held_roles() {
        let u = user(Role::Patient, Some(vec![Role::Doctor, Role::Patient]));
        assert!(u.has_role(Role::Doctor));
        assert!(u.has_role(Role::Patient));
        // A role outside the list is the switch_role no-op case
        assert!(!u.has_role(Role::Admin));
        assert!(!u.has_role(Role::Staff));
    }

    #[test]
    fn user_decodes_camel_case_wire_fields() {
        let raw = r#"{
            "id": "42",
            "firstName": "Maya",
            "lastName": "Iyer",
            "email": "maya@example.com",
            "role": "doctor",
            "isRegistered": true,
            "consultationFee": 450.0
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.first_name, "Maya");
        assert_eq!(user.role, Role::Doctor);
        assert_eq!(user.is_registered, Some(true));
        assert_eq!(user.consultation_fee, Some(450.0));
        assert!(user.roles.is_none());
    }
}
