use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::use_auth;
use crate::models::SignupRequest;
use crate::router::Route;
use crate::services::auth_api;

const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Backend rules mirrored client-side so the form can complain before a
/// round-trip: 8+ characters, one uppercase, one special character.
fn password_problem(password: &str) -> Option<&'static str> {
    let long_enough = password.chars().count() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(&c));
    if long_enough && has_upper && has_special {
        None
    } else {
        Some("Password must be at least 8 characters, include one uppercase letter and one special character")
    }
}

fn email_problem(email: &str) -> Option<&'static str> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && domain.contains('.') => None,
        _ => Some("Please enter a valid email address"),
    }
}

#[function_component(Signup)]
pub fn signup() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error_message = use_state(String::new);
    let submitting = use_state(|| false);

    let bind_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_first = bind_input(first_name.clone());
    let on_last = bind_input(last_name.clone());
    let on_email = bind_input(email.clone());
    let on_password = bind_input(password.clone());
    let on_confirm = bind_input(confirm_password.clone());

    let on_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error_message = error_message.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(String::new());

            if first_name.trim().is_empty() || last_name.trim().is_empty() {
                error_message.set("First name and last name are required".into());
                return;
            }
            if let Some(problem) = email_problem(email.trim()) {
                error_message.set(problem.into());
                return;
            }
            if let Some(problem) = password_problem(&password) {
                error_message.set(problem.into());
                return;
            }
            if *password != *confirm_password {
                error_message.set("Passwords do not match".into());
                return;
            }

            submitting.set(true);
            let request = SignupRequest {
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let auth = auth.clone();
            let navigator = navigator.clone();
            let error_message = error_message.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match auth_api::signup(&request).await {
                    Ok(response) => {
                        let token = response.token.clone();
                        match response.into_user() {
                            Some(user) => {
                                // New accounts start session-only; they can
                                // opt into remember-me at next login
                                auth.login(user, token, false);
                                if let Some(navigator) = navigator {
                                    navigator.push(&Route::PatientDashboard);
                                }
                            }
                            None => {
                                error_message.set("Signup failed: no account data in response".into());
                            }
                        }
                    }
                    Err(err) => {
                        log::error!("signup failed: {}", err);
                        error_message.set(err.to_string());
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="card-container">
            <div class="card-box">
                <div class="card-header">{"Create your account"}</div>

                <form onsubmit={on_submit}>
                    {
                        if !error_message.is_empty() {
                            html! { <div class="alert alert-danger">{ (*error_message).clone() }</div> }
                        } else {
                            Html::default()
                        }
                    }

                    <div class="mb-3">
                        <label for="firstName">{"First name"}</label>
                        <input type="text" id="firstName" class="form-control"
                            value={(*first_name).clone()} oninput={on_first} required=true />
                    </div>
                    <div class="mb-3">
                        <label for="lastName">{"Last name"}</label>
                        <input type="text" id="lastName" class="form-control"
                            value={(*last_name).clone()} oninput={on_last} required=true />
                    </div>
                    <div class="mb-3">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" class="form-control"
                            value={(*email).clone()} oninput={on_email} required=true />
                    </div>
                    <div class="mb-3">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" class="form-control"
                            value={(*password).clone()} oninput={on_password} required=true />
                    </div>
                    <div class="mb-3">
                        <label for="confirmPassword">{"Confirm password"}</label>
                        <input type="password" id="confirmPassword" class="form-control"
                            value={(*confirm_password).clone()} oninput={on_confirm} required=true />
                    </div>

                    <button type="submit" class="btn btn-primary w-100" disabled={*submitting}>
                        { if *submitting { "Creating account..." } else { "Sign Up" } }
                    </button>
                </form>

                <div class="text-center mt-3 mb-3">
                    {"Already registered? "}
                    <Link<Route> to={Route::Login} classes="text-danger fw-bold">{"Login"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
