//! Single source of truth for the current session.
//!
//! `AuthProvider` sits at the application root, seeds its state from the
//! persistent store once, and shares a cloneable `AuthHandle` through Yew
//! context. All session mutations go through the handle so the store and
//! the in-memory state never drift.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::session::Session;
use crate::models::{Role, User};
use crate::router::{self, Route};
use crate::services::session_store;

#[derive(Clone)]
pub struct AuthHandle {
    session: UseStateHandle<Session>,
    navigator: Option<Navigator>,
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.session == *other.session
    }
}

impl AuthHandle {
    pub fn token(&self) -> Option<String> {
        self.session.token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.session.user.clone()
    }

    pub fn active_role(&self) -> Option<Role> {
        self.session.active_role
    }

    pub fn logged_in(&self) -> bool {
        self.session.logged_in()
    }

    /// Record a successful authentication. The caller already holds the
    /// credentials from the API; no network here. The first role in the
    /// user's list becomes the active one.
    pub fn login(&self, user: User, token: String, remember_me: bool) {
        let active_role = user.role_list().first().copied();
        let session = Session {
            token: Some(token),
            user: Some(user),
            active_role,
            remember_me,
        };
        session_store::write(&session, remember_me);
        if let (Some(user), Some(role)) = (session.user.as_ref(), session.active_role) {
            log::info!("logged in: {} as {}", user.email, role);
        }
        self.session.set(session);
    }

    /// Drop the session everywhere and land on the login page. The only
    /// operation that navigates directly; guards handle every other
    /// redirect declaratively.
    pub fn logout(&self) {
        session_store::clear();
        self.session.set(Session::default());
        log::info!("logged out");
        if let Some(navigator) = &self.navigator {
            navigator.push(&Route::Login);
        }
    }

    /// Change the acting role. Ignored when the user does not hold the
    /// requested role; otherwise persists the preference and moves to
    /// that role's dashboard.
    pub fn switch_role(&self, new_role: Role) {
        let mut session = (*self.session).clone();
        let Some(user) = session.user.as_ref() else {
            return;
        };
        if !user.has_role(new_role) {
            log::warn!("ignoring switch to unheld role {}", new_role);
            return;
        }
        session.active_role = Some(new_role);
        session_store::write_active_role(new_role);
        self.session.set(session);
        if let Some(navigator) = &self.navigator {
            navigator.push(&router::dashboard_for(new_role));
        }
    }

    /// Post-signup token sync. Persists under the session's remember-me
    /// choice without re-running the login flow.
    pub fn update_token(&self, token: String) {
        let mut session = (*self.session).clone();
        session_store::write_token(Some(&token), session.remember_me);
        session.token = Some(token);
        self.session.set(session);
    }

    /// Post-profile-edit user sync. Re-checks the role invariant since an
    /// edit can change the role list.
    pub fn update_user(&self, user: User) {
        let mut session = (*self.session).clone();
        session.user = Some(user);
        let (session, corrected) = session.normalized();
        session_store::write_user(session.user.as_ref(), session.remember_me);
        if corrected {
            if let Some(role) = session.active_role {
                session_store::write_active_role(role);
            }
        }
        self.session.set(session);
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let navigator = use_navigator();

    // Seed from storage exactly once. The role invariant is corrected
    // here so a stale activeRole never survives a reload.
    let session = use_state(|| {
        let (session, corrected) = session_store::read().normalized();
        if corrected {
            if let Some(role) = session.active_role {
                log::info!("active role reset to {}", role);
                session_store::write_active_role(role);
            }
        }
        session
    });

    let handle = AuthHandle { session, navigator };

    html! {
        <ContextProvider<AuthHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<AuthHandle>>
    }
}

#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("use_auth called outside AuthProvider")
}
