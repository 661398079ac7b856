use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::session_store;

/// Auth selection entry point. Marks the first-visit flag so the initial
/// gate stops forcing /auth, then hands over to the login page (which
/// links to signup).
#[function_component(AuthCard)]
pub fn auth_card() -> Html {
    use_effect_with((), |_| {
        session_store::mark_gate_seen();
        || ()
    });

    html! { <Redirect<Route> to={Route::Login} /> }
}
