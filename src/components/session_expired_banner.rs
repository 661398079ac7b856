use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::session_store;

/// One-shot notice shown after the API client invalidated the session on
/// a 401. Reading the flag clears it, so a reload does not repeat the
/// message.
#[function_component(SessionExpiredBanner)]
pub fn session_expired_banner() -> Html {
    let expired = use_state(session_store::take_session_expired);

    if !*expired {
        return Html::default();
    }

    html! {
        <div class="alert alert-warning" role="alert">
            <strong>{"Session expired or not authenticated."}</strong>
            <div class="small">{"Please sign in again to continue."}</div>
            <Link<Route> to={Route::Login} classes="btn btn-sm btn-primary">
                {"Go to Login"}
            </Link<Route>>
        </div>
    }
}
