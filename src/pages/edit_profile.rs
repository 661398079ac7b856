use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::auth::use_auth;
use crate::models::{ProfileUpdate, Role};
use crate::services::portal_api;

#[function_component(EditProfile)]
pub fn edit_profile() -> Html {
    let auth = use_auth();
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let bio = use_state(String::new);
    let specialization = use_state(String::new);
    let is_doctor = use_state(|| false);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let error_message = use_state(String::new);
    let success_message = use_state(String::new);

    // Prefill from the backend; the context copy may be stale after edits
    // made elsewhere
    {
        let auth = auth.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let bio = bio.clone();
        let specialization = specialization.clone();
        let is_doctor = is_doctor.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match portal_api::fetch_profile().await {
                    Ok(user) => {
                        first_name.set(user.first_name.clone());
                        last_name.set(user.last_name.clone());
                        bio.set(user.bio.clone().unwrap_or_default());
                        specialization.set(user.specialization.clone().unwrap_or_default());
                        is_doctor.set(user.has_role(Role::Doctor));
                        auth.update_user(user);
                    }
                    Err(err) => {
                        log::error!("loading profile failed: {}", err);
                        error_message.set(err.to_string());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let bind_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_first = bind_input(first_name.clone());
    let on_last = bind_input(last_name.clone());
    let on_bio = bind_input(bio.clone());
    let on_specialization = bind_input(specialization.clone());

    let on_submit = {
        let auth = auth.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let bio = bio.clone();
        let specialization = specialization.clone();
        let is_doctor = is_doctor.clone();
        let saving = saving.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(String::new());
            success_message.set(String::new());

            if first_name.trim().is_empty() || last_name.trim().is_empty() {
                error_message.set("First name and last name are required".into());
                return;
            }

            saving.set(true);
            let update = ProfileUpdate {
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
                bio: Some((*bio).clone()).filter(|s| !s.is_empty()),
                specialization: if *is_doctor {
                    Some((*specialization).clone()).filter(|s| !s.is_empty())
                } else {
                    None
                },
            };
            let auth = auth.clone();
            let saving = saving.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match portal_api::update_profile(&update).await {
                    Ok(user) => {
                        // Keep context and storage in step with the backend
                        auth.update_user(user);
                        success_message.set("Profile updated".into());
                    }
                    Err(err) => {
                        log::error!("profile update failed: {}", err);
                        error_message.set(err.to_string());
                    }
                }
                saving.set(false);
            });
        })
    };

    if *loading {
        return html! { <p>{"Loading profile..."}</p> };
    }

    html! {
        <div class="card-container">
            <div class="card-box">
                <div class="card-header">{"Edit Profile"}</div>

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
                        <label for="bio">{"Bio"}</label>
                        <input type="text" id="bio" class="form-control"
                            value={(*bio).clone()} oninput={on_bio} />
                    </div>
                    {
                        if *is_doctor {
                            html! {
                                <div class="mb-3">
                                    <label for="specialization">{"Specialization"}</label>
                                    <input type="text" id="specialization" class="form-control"
                                        value={(*specialization).clone()} oninput={on_specialization} />
                                </div>
                            }
                        } else {
                            Html::default()
                        }
                    }

                    <button type="submit" class="btn btn-primary w-100" disabled={*saving}>
                        { if *saving { "Saving..." } else { "Save changes" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
