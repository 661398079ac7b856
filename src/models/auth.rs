use serde::{Deserialize, Serialize};

use super::user::{Role, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Error payload the backend sends alongside non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of POST /api/auth/login and /api/auth/signup.
///
/// Two shapes exist in the wild: `{ token, user: {...} }` and an older
/// flattened `{ token, firstName, lastName, email, role }`. Both decode
/// here; `into_user` produces the canonical account either way.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl AuthResponse {
    pub fn into_user(self) -> Option<User> {
        if let Some(user) = self.user {
            return Some(user);
        }
        let email = self.email?;
        Some(User {
            id: self.id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email,
            role: self.role.unwrap_or(Role::Patient),
            roles: None,
            is_registered: None,
            specialization: None,
            bio: None,
            consultation_fee: None,
            qualifications: None,
            profile_picture_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_and_flattened_shapes_normalize_to_the_same_user() {
        let nested: AuthResponse = serde_json::from_str(
            r#"{
                "token": "abc",
                "user": {
                    "id": "7",
                    "firstName": "Ravi",
                    "lastName": "Menon",
                    "email": "ravi@example.com",
                    "role": "staff"
                }
            }"#,
        )
        .unwrap();
        let flattened: AuthResponse = serde_json::from_str(
            r#"{
                "token": "abc",
                "id": "7",
                "firstName": "Ravi",
                "lastName": "Menon",
                "email": "ravi@example.com",
                "role": "staff"
            }"#,
        )
        .unwrap();

        let a = nested.into_user().unwrap();
        let b = flattened.into_user().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.role, Role::Staff);
    }

    #[test]
    fn flattened_shape_defaults_missing_role_to_patient() {
        let response: AuthResponse = serde_json::from_str(
            r#"{ "token": "t", "email": "p@example.com" }"#,
        )
        .unwrap();
        let user = response.into_user().unwrap();
        assert_eq!(user.role, Role::Patient);
    }

    #[test]
    fn token_without_any_user_data_yields_no_user() {
        let response: AuthResponse = serde_json::from_str(r#"{ "token": "t" }"#).unwrap();
        assert!(response.into_user().is_none());
    }
}
