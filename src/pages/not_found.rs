use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="text-center">
            <h1>{"404"}</h1>
            <p>{"The page you were looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back home"}</Link<Route>>
        </div>
    }
}
