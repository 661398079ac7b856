//! Storage-backed behavior: remember-me placement, durable activeRole,
//! clearing, corrupt-state degradation, and the 401 invalidation path.
//! These need real local/session storage, so they run in a browser.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::window;

use medverse_portal::auth::Session;
use medverse_portal::models::{Role, User};
use medverse_portal::services::api_client;
use medverse_portal::services::session_store::{self, StoredUser};

wasm_bindgen_test_configure!(run_in_browser);

fn local() -> web_sys::Storage {
    window().unwrap().local_storage().unwrap().unwrap()
}

fn ephemeral() -> web_sys::Storage {
    window().unwrap().session_storage().unwrap().unwrap()
}

fn reset_storage() {
    local().clear().unwrap();
    ephemeral().clear().unwrap();
}

fn sample_user(roles: Option<Vec<Role>>) -> User {
    User {
        id: Some("u1".into()),
        first_name: "Asha".into(),
        last_name: "Rao".into(),
        email: "asha@example.com".into(),
        role: Role::Doctor,
        roles,
        is_registered: Some(true),
        specialization: None,
        bio: None,
        consultation_fee: None,
        qualifications: None,
        profile_picture_url: None,
    }
}

fn sample_session(roles: Option<Vec<Role>>, active: Role, remember_me: bool) -> Session {
    Session {
        token: Some("tok-123".into()),
        user: Some(sample_user(roles)),
        active_role: Some(active),
        remember_me,
    }
}

#[wasm_bindgen_test]
fn remember_me_persists_credentials_durably() {
    reset_storage();
    let session = sample_session(None, Role::Doctor, true);
    session_store::write(&session, true);

    assert_eq!(local().get_item("authToken").unwrap().as_deref(), Some("tok-123"));
    assert!(local().get_item("authUser").unwrap().is_some());
    assert!(ephemeral().get_item("authToken").unwrap().is_none());
    assert!(ephemeral().get_item("authUser").unwrap().is_none());
    // Role preference is durable regardless of remember-me
    assert_eq!(local().get_item("activeRole").unwrap().as_deref(), Some("doctor"));
}

#[wasm_bindgen_test]
fn session_only_login_keeps_credentials_ephemeral() {
    reset_storage();
    let session = sample_session(None, Role::Doctor, false);
    session_store::write(&session, false);

    assert!(local().get_item("authToken").unwrap().is_none());
    assert!(local().get_item("authUser").unwrap().is_none());
    assert_eq!(ephemeral().get_item("authToken").unwrap().as_deref(), Some("tok-123"));
    assert!(ephemeral().get_item("authUser").unwrap().is_some());
    // The active role still lands durably
    assert_eq!(local().get_item("activeRole").unwrap().as_deref(), Some("doctor"));
}

#[wasm_bindgen_test]
fn clear_removes_every_auth_key_from_both_stores() {
    reset_storage();
    session_store::write(&sample_session(None, Role::Doctor, true), true);
    local().set_item("token", "legacy").unwrap();
    ephemeral().set_item("authToken", "stray").unwrap();

    session_store::clear();

    for storage in [local(), ephemeral()] {
        for key in ["authToken", "authUser", "activeRole", "token"] {
            assert!(storage.get_item(key).unwrap().is_none(), "{} survived clear", key);
        }
    }

    let session = session_store::read();
    assert!(session.token.is_none());
    assert!(session.user.is_none());
    assert!(session.active_role.is_none());
}

#[wasm_bindgen_test]
fn read_prefers_the_durable_store() {
    reset_storage();
    local().set_item("authToken", "durable-token").unwrap();
    ephemeral().set_item("authToken", "ephemeral-token").unwrap();

    let session = session_store::read();
    assert_eq!(session.token.as_deref(), Some("durable-token"));
    assert!(session.remember_me);
}

#[wasm_bindgen_test]
fn legacy_token_key_is_still_honored() {
    reset_storage();
    local().set_item("token", "legacy-token").unwrap();
    assert_eq!(session_store::stored_token().as_deref(), Some("legacy-token"));
}

#[wasm_bindgen_test]
fn corrupt_stored_user_degrades_to_logged_out() {
    reset_storage();
    local().set_item("authToken", "tok").unwrap();
    local().set_item("authUser", "{definitely not json").unwrap();

    assert!(matches!(session_store::stored_user(), StoredUser::Malformed(_)));

    let session = session_store::read();
    assert!(session.user.is_none());
    // The token is untouched; only the user record was unreadable
    assert_eq!(session.token.as_deref(), Some("tok"));
}

#[wasm_bindgen_test]
fn stale_active_role_is_corrected_and_persisted_on_startup() {
    reset_storage();
    let stored = sample_session(
        Some(vec![Role::Doctor, Role::Patient]),
        Role::Doctor,
        true,
    );
    session_store::write(&stored, true);
    // Simulate drift: the stored preference no longer matches the roles
    local().set_item("activeRole", "admin").unwrap();

    // The provider's startup sequence
    let (session, corrected) = session_store::read().normalized();
    assert!(corrected);
    assert_eq!(session.active_role, Some(Role::Doctor));
    if corrected {
        if let Some(role) = session.active_role {
            session_store::write_active_role(role);
        }
    }

    assert_eq!(local().get_item("activeRole").unwrap().as_deref(), Some("doctor"));
}

#[wasm_bindgen_test]
fn unknown_stored_role_reads_as_absent() {
    reset_storage();
    local().set_item("activeRole", "superuser").unwrap();
    assert_eq!(session_store::stored_active_role(), None);
}

#[wasm_bindgen_test]
fn session_invalidation_clears_storage_and_sets_the_one_shot_flag() {
    reset_storage();
    session_store::write(&sample_session(None, Role::Patient, true), true);

    api_client::invalidate_session();

    assert!(local().get_item("authToken").unwrap().is_none());
    assert!(ephemeral().get_item("authToken").unwrap().is_none());
    assert!(local().get_item("authUser").unwrap().is_none());
    assert_eq!(local().get_item("authExpired").unwrap().as_deref(), Some("1"));

    // Reading the flag consumes it
    assert!(session_store::take_session_expired());
    assert!(!session_store::take_session_expired());
    assert!(local().get_item("authExpired").unwrap().is_none());
}

#[wasm_bindgen_test]
fn first_visit_flag_survives_a_session_clear() {
    reset_storage();
    assert!(!session_store::gate_seen());
    session_store::mark_gate_seen();
    assert!(session_store::gate_seen());

    session_store::clear();
    assert!(session_store::gate_seen());
}

#[wasm_bindgen_test]
fn write_moves_credentials_when_remember_me_changes() {
    reset_storage();
    session_store::write(&sample_session(None, Role::Doctor, false), false);
    assert!(ephemeral().get_item("authToken").unwrap().is_some());

    // Logging in again with remember-me moves the credentials over
    session_store::write(&sample_session(None, Role::Doctor, true), true);
    assert!(local().get_item("authToken").unwrap().is_some());
    assert!(ephemeral().get_item("authToken").unwrap().is_none());
}
