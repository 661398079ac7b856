use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::use_auth;
use crate::models::Role;
use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_auth();
    let user = auth.user();
    let active_role = auth.active_role();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| auth.logout())
    };

    let on_role_change = {
        let auth = auth.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(role) = Role::parse(&select.value()) {
                auth.switch_role(role);
            }
        })
    };

    html! {
        <nav class="navbar shadow-sm">
            <div class="container">
                <Link<Route> to={Route::Home} classes="navbar-brand fw-bold text-primary">
                    {"MedVerse"}
                </Link<Route>>
                <div class="navbar-nav">
                    {
                        if let Some(user) = user {
                            let roles = user.role_list();
                            html! {
                                <>
                                    <Link<Route> to={Route::Dashboard} classes="nav-link">
                                        {"Dashboard"}
                                    </Link<Route>>
                                    // Role switcher only for multi-role accounts
                                    {
                                        if roles.len() > 1 {
                                            html! {
                                                <select class="role-switcher" onchange={on_role_change}>
                                                    {
                                                        roles.iter().map(|role| html! {
                                                            <option
                                                                value={role.as_str()}
                                                                selected={Some(*role) == active_role}
                                                            >
                                                                { format!("Role: {}", role.label()) }
                                                            </option>
                                                        }).collect::<Html>()
                                                    }
                                                </select>
                                            }
                                        } else {
                                            Html::default()
                                        }
                                    }
                                    <a class="nav-link text-danger" onclick={on_logout}>{"Log Out"}</a>
                                </>
                            }
                        } else {
                            html! {
                                <Link<Route> to={Route::Login} classes="nav-link">{"Login"}</Link<Route>>
                            }
                        }
                    }
                </div>
            </div>
        </nav>
    }
}
