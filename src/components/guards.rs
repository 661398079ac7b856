//! Route guards: render children or redirect.
//!
//! The render-vs-redirect choice is a pure function per guard, so the
//! whole redirect matrix is testable without mounting components. The
//! components themselves only translate a decision into markup, reading
//! context first and the persistent store second; no guard touches the
//! network.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{resolve_role, use_auth};
use crate::models::Role;
use crate::router::Route;
use crate::services::session_store;

/// Navigation state carried through guard redirects so the login flow
/// can return the user to the page they were headed for.
#[derive(Clone, PartialEq)]
pub struct FromLocation {
    pub from: String,
}

#[derive(Properties, PartialEq)]
pub struct GuardRedirectProps {
    pub to: Route,
}

/// Replace-navigation that records the attempted path in history state.
#[function_component(GuardRedirect)]
pub fn guard_redirect(props: &GuardRedirectProps) -> Html {
    let navigator = use_navigator();
    let location = use_location();
    let to = props.to.clone();

    use_effect_with((), move |_| {
        if let Some(navigator) = navigator {
            let from = location
                .map(|location| location.path().to_string())
                .unwrap_or_else(|| "/".to_string());
            navigator.replace_with_state(&to, FromLocation { from });
        }
        || ()
    });

    Html::default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    RedirectLogin,
    RedirectAuthGate,
}

/// First-visit gate: authenticated users pass, returning visitors pass
/// (nested guards take over), first-timers go to the auth selection page.
pub fn initial_gate_decision(has_token: bool, gate_seen: bool) -> GateDecision {
    if has_token || gate_seen {
        GateDecision::Render
    } else {
        GateDecision::RedirectAuthGate
    }
}

/// Plain "must be logged in" gate.
pub fn protected_decision(has_token: bool) -> GateDecision {
    if has_token {
        GateDecision::Render
    } else {
        GateDecision::RedirectLogin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleDecision {
    Render,
    RedirectLogin,
    RedirectFallback,
}

/// Role gate: no resolvable role means login; a resolved role outside
/// the allowed set means the fallback page. An empty allowed set only
/// requires a resolvable role.
pub fn role_route_decision(resolved: Option<Role>, allowed: &[Role]) -> RoleDecision {
    match resolved {
        None => RoleDecision::RedirectLogin,
        Some(role) => {
            if allowed.is_empty() || allowed.contains(&role) {
                RoleDecision::Render
            } else {
                RoleDecision::RedirectFallback
            }
        }
    }
}

fn token_present(auth: &crate::auth::AuthHandle) -> bool {
    auth.token().is_some() || session_store::stored_token().is_some()
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

#[function_component(InitialGate)]
pub fn initial_gate(props: &GuardProps) -> Html {
    let auth = use_auth();
    match initial_gate_decision(token_present(&auth), session_store::gate_seen()) {
        GateDecision::Render => html! { <>{ props.children.clone() }</> },
        GateDecision::RedirectAuthGate => html! { <GuardRedirect to={Route::AuthGate} /> },
        GateDecision::RedirectLogin => html! { <GuardRedirect to={Route::Login} /> },
    }
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &GuardProps) -> Html {
    let auth = use_auth();
    match protected_decision(token_present(&auth)) {
        GateDecision::Render => html! { <>{ props.children.clone() }</> },
        _ => html! { <GuardRedirect to={Route::Login} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct RoleRouteProps {
    pub allowed_roles: Vec<Role>,
    /// Where a logged-in user with the wrong role lands.
    #[prop_or(Route::Dashboard)]
    pub fallback: Route,
    pub children: Children,
}

#[function_component(RoleRoute)]
pub fn role_route(props: &RoleRouteProps) -> Html {
    let auth = use_auth();
    let user = auth.user().or_else(|| session_store::stored_user().into_option());
    let active_role = auth.active_role().or_else(session_store::stored_active_role);
    let resolved = resolve_role(user.as_ref(), active_role);

    match role_route_decision(resolved, &props.allowed_roles) {
        RoleDecision::Render => html! { <>{ props.children.clone() }</> },
        RoleDecision::RedirectLogin => html! { <GuardRedirect to={Route::Login} /> },
        RoleDecision::RedirectFallback => html! { <GuardRedirect to={props.fallback.clone()} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

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
    fn first_visit_goes_to_the_auth_gate() {
        assert_eq!(initial_gate_decision(false, false), GateDecision::RedirectAuthGate);
        assert_eq!(initial_gate_decision(false, true), GateDecision::Render);
        assert_eq!(initial_gate_decision(true, false), GateDecision::Render);
    }

    #[test]
    fn protected_routes_require_a_token() {
        assert_eq!(protected_decision(true), GateDecision::Render);
        assert_eq!(protected_decision(false), GateDecision::RedirectLogin);
    }

    #[test]
    fn admin_only_route_with_no_session_redirects_to_login() {
        assert_eq!(
            role_route_decision(None, &[Role::Admin]),
            RoleDecision::RedirectLogin
        );
    }

    #[test]
    fn doctor_only_route_with_a_patient_session_falls_back() {
        let u = user("pat@example.com", Role::Patient);
        let resolved = resolve_role(Some(&u), Some(Role::Patient));
        assert_eq!(
            role_route_decision(resolved, &[Role::Doctor]),
            RoleDecision::RedirectFallback
        );
    }

    #[test]
    fn support_account_passes_an_admin_only_route() {
        let u = user("support@medverse.com", Role::Patient);
        let resolved = resolve_role(Some(&u), Some(Role::Patient));
        assert_eq!(
            role_route_decision(resolved, &[Role::Admin]),
            RoleDecision::Render
        );
    }

    #[test]
    fn empty_allowed_set_admits_any_resolved_role() {
        assert_eq!(role_route_decision(Some(Role::Staff), &[]), RoleDecision::Render);
        assert_eq!(role_route_decision(None, &[]), RoleDecision::RedirectLogin);
    }
}
