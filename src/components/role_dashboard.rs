use yew::prelude::*;

use crate::auth::{resolve_role, use_auth};
use crate::components::guards::GuardRedirect;
use crate::models::Role;
use crate::router::{dashboard_for, Route};
use crate::services::session_store;

/// Where the dispatcher sends a session, given the resolved role and
/// whether any session exists at all. Logged-in users without a
/// resolvable role land on the patient dashboard.
pub fn dispatch_target(resolved: Option<Role>, has_session: bool) -> Route {
    match resolved {
        Some(role) => dashboard_for(role),
        None if has_session => Route::PatientDashboard,
        None => Route::Login,
    }
}

/// Pure redirect: the /dashboard entry point fans out to the active
/// role's landing page. Renders nothing itself.
#[function_component(RoleDashboard)]
pub fn role_dashboard() -> Html {
    let auth = use_auth();
    let user = auth.user().or_else(|| session_store::stored_user().into_option());
    let active_role = auth.active_role().or_else(session_store::stored_active_role);
    let resolved = resolve_role(user.as_ref(), active_role);
    let has_session = auth.logged_in() || session_store::stored_token().is_some();

    html! { <GuardRedirect to={dispatch_target(resolved, has_session)} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_lands_on_its_dashboard() {
        assert_eq!(dispatch_target(Some(Role::Admin), true), Route::AdminDashboard);
        assert_eq!(dispatch_target(Some(Role::Doctor), true), Route::DoctorDashboard);
        assert_eq!(dispatch_target(Some(Role::Staff), true), Route::StaffDashboard);
        assert_eq!(dispatch_target(Some(Role::Patient), true), Route::PatientDashboard);
    }

    #[test]
    fn logged_in_without_a_role_defaults_to_patient() {
        assert_eq!(dispatch_target(None, true), Route::PatientDashboard);
    }

    #[test]
    fn no_session_at_all_means_login() {
        assert_eq!(dispatch_target(None, false), Route::Login);
    }
}
