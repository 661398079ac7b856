//! Durable mirror of the auth session across page reloads.
//!
//! Two backing stores: localStorage survives browser restarts ("remember
//! me"), sessionStorage lasts for the tab session only. Reads prefer the
//! durable store. The active role is always written durably so a returning
//! user's role preference outlives a session-only login.

use web_sys::{window, Storage};

use crate::auth::session::Session;
use crate::models::{Role, User};

pub const KEY_TOKEN: &str = "authToken";
pub const KEY_USER: &str = "authUser";
pub const KEY_ACTIVE_ROLE: &str = "activeRole";
pub const KEY_AUTH_SEEN: &str = "authSeen";
pub const KEY_AUTH_EXPIRED: &str = "authExpired";
/// Older releases stored the token under this key; still honored on read.
pub const KEY_LEGACY_TOKEN: &str = "token";

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

fn get_item(storage: &Option<Storage>, key: &str) -> Option<String> {
    storage.as_ref()?.get_item(key).ok()?
}

fn set_item(storage: &Option<Storage>, key: &str, value: &str) {
    if let Some(storage) = storage.as_ref() {
        if storage.set_item(key, value).is_err() {
            log::warn!("storage write failed for key {}", key);
        }
    }
}

fn remove_item(storage: &Option<Storage>, key: &str) {
    if let Some(storage) = storage.as_ref() {
        let _ = storage.remove_item(key);
    }
}

/// Outcome of deserializing the persisted user. Absent, corrupt, and valid
/// are three distinct states; corrupt never escapes as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredUser {
    Missing,
    Malformed(String),
    Valid(User),
}

impl StoredUser {
    pub fn into_option(self) -> Option<User> {
        match self {
            StoredUser::Valid(user) => Some(user),
            _ => None,
        }
    }
}

fn parse_stored_user(raw: Option<String>) -> StoredUser {
    match raw {
        None => StoredUser::Missing,
        Some(json) => match serde_json::from_str::<User>(&json) {
            Ok(user) => StoredUser::Valid(user),
            Err(err) => StoredUser::Malformed(err.to_string()),
        },
    }
}

/// Token lookup order: durable, then ephemeral, then the legacy key.
pub fn stored_token() -> Option<String> {
    let local = local_storage();
    get_item(&local, KEY_TOKEN)
        .or_else(|| get_item(&session_storage(), KEY_TOKEN))
        .or_else(|| get_item(&local, KEY_LEGACY_TOKEN))
}

/// Stored user, durable store first.
pub fn stored_user() -> StoredUser {
    let raw = get_item(&local_storage(), KEY_USER)
        .or_else(|| get_item(&session_storage(), KEY_USER));
    parse_stored_user(raw)
}

pub fn stored_active_role() -> Option<Role> {
    let raw = get_item(&local_storage(), KEY_ACTIVE_ROLE)
        .or_else(|| get_item(&session_storage(), KEY_ACTIVE_ROLE))?;
    Role::parse(&raw)
}

/// Best-effort session reconstruction. A malformed stored user degrades to
/// logged-out rather than failing the page load.
pub fn read() -> Session {
    let token_durable = get_item(&local_storage(), KEY_TOKEN).is_some();
    let user = match stored_user() {
        StoredUser::Valid(user) => Some(user),
        StoredUser::Malformed(err) => {
            log::warn!("stored user is not valid JSON, treating as logged out: {}", err);
            None
        }
        StoredUser::Missing => None,
    };

    Session {
        token: stored_token(),
        user,
        active_role: stored_active_role(),
        remember_me: token_durable,
    }
}

/// Persist a session. Token and user follow the remember-me choice; the
/// active role always lands in the durable store.
pub fn write(session: &Session, remember_me: bool) {
    write_token(session.token.as_deref(), remember_me);
    write_user(session.user.as_ref(), remember_me);
    match session.active_role {
        Some(role) => write_active_role(role),
        None => {
            remove_item(&local_storage(), KEY_ACTIVE_ROLE);
            remove_item(&session_storage(), KEY_ACTIVE_ROLE);
        }
    }
}

pub fn write_token(token: Option<&str>, remember_me: bool) {
    let (target, other) = if remember_me {
        (local_storage(), session_storage())
    } else {
        (session_storage(), local_storage())
    };
    match token {
        Some(token) => set_item(&target, KEY_TOKEN, token),
        None => remove_item(&target, KEY_TOKEN),
    }
    remove_item(&other, KEY_TOKEN);
}

pub fn write_user(user: Option<&User>, remember_me: bool) {
    let (target, other) = if remember_me {
        (local_storage(), session_storage())
    } else {
        (session_storage(), local_storage())
    };
    match user.and_then(|u| serde_json::to_string(u).ok()) {
        Some(json) => set_item(&target, KEY_USER, &json),
        None => remove_item(&target, KEY_USER),
    }
    remove_item(&other, KEY_USER);
}

pub fn write_active_role(role: Role) {
    set_item(&local_storage(), KEY_ACTIVE_ROLE, role.as_str());
    remove_item(&session_storage(), KEY_ACTIVE_ROLE);
}

/// Remove every auth key from both stores. Safe to call when nothing is
/// stored. The first-visit flag is deliberately left alone.
pub fn clear() {
    for storage in [local_storage(), session_storage()] {
        remove_item(&storage, KEY_TOKEN);
        remove_item(&storage, KEY_USER);
        remove_item(&storage, KEY_ACTIVE_ROLE);
        remove_item(&storage, KEY_LEGACY_TOKEN);
    }
}

/// First-visit gate flag. Once set, the site no longer forces /auth.
pub fn gate_seen() -> bool {
    get_item(&local_storage(), KEY_AUTH_SEEN).is_some()
}

pub fn mark_gate_seen() {
    set_item(&local_storage(), KEY_AUTH_SEEN, "1");
}

/// One-shot "session expired" flag set by the 401 handler.
pub fn set_session_expired() {
    set_item(&local_storage(), KEY_AUTH_EXPIRED, "1");
}

/// Read and clear the expiry flag so the notice shows exactly once.
pub fn take_session_expired() -> bool {
    let local = local_storage();
    let expired = get_item(&local, KEY_AUTH_EXPIRED).as_deref() == Some("1");
    if expired {
        remove_item(&local, KEY_AUTH_EXPIRED);
    }
    expired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn parse_outcome_distinguishes_missing_malformed_valid() {
        assert_eq!(parse_stored_user(None), StoredUser::Missing);
        assert!(matches!(
            parse_stored_user(Some("{not json".into())),
            StoredUser::Malformed(_)
        ));
        let json = r#"{"email":"a@b.com","firstName":"A","lastName":"B","role":"patient"}"#;
        match parse_stored_user(Some(json.into())) {
            StoredUser::Valid(user) => assert_eq!(user.role, Role::Patient),
            other => panic!("expected valid user, got {:?}", other),
        }
    }

    #[test]
    fn malformed_user_converts_to_absent() {
        assert!(StoredUser::Malformed("boom".into()).into_option().is_none());
        assert!(StoredUser::Missing.into_option().is_none());
    }
}
