use gloo_timers::callback::Timeout;
use serde::Deserialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{resolve_role, use_auth};
use crate::components::guards::FromLocation;
use crate::components::session_expired_banner::SessionExpiredBanner;
use crate::router::{dashboard_for, Route};
use crate::services::auth_api;

/// Delay before leaving the login page, long enough to read the welcome
/// message.
const WELCOME_REDIRECT_DELAY_MS: u32 = 1200;

#[derive(Deserialize, Default)]
struct LoginQuery {
    redirect: Option<String>,
}

/// Post-login destination: explicit ?redirect= wins, then the guard's
/// recorded "from" location, then the role dashboard.
fn landing_route(redirect: Option<String>, from: Option<String>, role_route: Route) -> Route {
    redirect
        .or(from)
        .and_then(|path| Route::recognize(&path))
        // recognize() resolves unknown paths to the 404 route
        .filter(|route| *route != Route::NotFound)
        .unwrap_or(role_route)
}

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let location = use_location();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember_me = use_state(|| false);
    let error_message = use_state(String::new);
    let success_message = use_state(String::new);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_remember_change = {
        let remember_me = remember_me.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            remember_me.set(input.checked());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let remember_me = remember_me.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let redirect_param = location
            .as_ref()
            .and_then(|location| location.query::<LoginQuery>().ok())
            .and_then(|query| query.redirect);
        let from_state = location
            .as_ref()
            .and_then(|location| location.state::<FromLocation>())
            .map(|state| state.from.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(String::new());
            success_message.set(String::new());

            let auth = auth.clone();
            let navigator = navigator.clone();
            let email_val = (*email).clone();
            let password_val = (*password).clone();
            let remember = *remember_me;
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let redirect_param = redirect_param.clone();
            let from_state = from_state.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match auth_api::login(email_val, password_val).await {
                    Ok(response) => {
                        let token = response.token.clone();
                        let Some(user) = response.into_user() else {
                            error_message.set("Login failed: no account data in response".into());
                            return;
                        };
                        let name = user.first_name.clone();
                        auth.login(user.clone(), token, remember);
                        success_message.set(if name.is_empty() {
                            "Welcome back!".to_string()
                        } else {
                            format!("Welcome back, {}!", name)
                        });

                        // Settle on the success message, then leave. The
                        // context update is deferred, so derive the landing
                        // role from the user we just logged in.
                        let active_role = user.role_list().first().copied();
                        let role_route = resolve_role(Some(&user), active_role)
                            .map(dashboard_for)
                            .unwrap_or(Route::PatientDashboard);
                        let target = landing_route(redirect_param, from_state, role_route);
                        Timeout::new(WELCOME_REDIRECT_DELAY_MS, move || {
                            if let Some(navigator) = navigator {
                                navigator.push(&target);
                            }
                        })
                        .forget();
                    }
                    Err(err) => {
                        log::error!("login failed: {}", err);
                        error_message.set(err.to_string());
                    }
                }
            });
        })
    };

    html! {
        <div class="card-container">
            <div class="card-box">
                <div class="card-header">{"Login"}</div>
                <SessionExpiredBanner />

                <form onsubmit={on_submit}>
                    {
                        if !error_message.is_empty() {
                            html! { <div class="alert alert-danger">{ (*error_message).clone() }</div> }
                        } else {
                            Html::default()
                        }
                    }
                    {
                        if !success_message.is_empty() {
                            html! { <div class="alert alert-success">{ (*success_message).clone() }</div> }
                        } else {
                            Html::default()
                        }
                    }

                    <div class="mb-3">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            class="form-control"
                            value={(*email).clone()}
                            oninput={on_email_change}
                            required=true
                        />
                    </div>

                    <div class="mb-3">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            class="form-control"
                            value={(*password).clone()}
                            oninput={on_password_change}
                            required=true
                        />
                    </div>

                    <div class="mb-3 form-check">
                        <input
                            type="checkbox"
                            class="form-check-input"
                            id="rememberMeCheck"
                            checked={*remember_me}
                            onchange={on_remember_change}
                        />
                        <label class="form-check-label" for="rememberMeCheck">
                            {"Remember Me"}
                        </label>
                    </div>

                    <button type="submit" class="btn btn-primary w-100">{"Login"}</button>
                </form>

                <div class="text-center mt-3 mb-3">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Signup} classes="text-danger fw-bold">
                        {"Sign Up"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_redirect_param_wins_over_guard_state() {
        let target = landing_route(
            Some("/medical-records".into()),
            Some("/edit-profile".into()),
            Route::PatientDashboard,
        );
        assert_eq!(target, Route::MedicalRecords);
    }

    #[test]
    fn guard_state_wins_over_the_role_dashboard() {
        let target = landing_route(None, Some("/edit-profile".into()), Route::AdminDashboard);
        assert_eq!(target, Route::EditProfile);
    }

    #[test]
    fn unrecognized_paths_fall_back_to_the_role_dashboard() {
        let target = landing_route(Some("/no-such-page/x/y".into()), None, Route::StaffDashboard);
        assert_eq!(target, Route::StaffDashboard);
        assert_eq!(landing_route(None, None, Route::DoctorDashboard), Route::DoctorDashboard);
    }
}
