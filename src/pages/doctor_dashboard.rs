use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::use_auth;
use crate::models::Appointment;
use crate::router::Route;
use crate::services::portal_api;

#[function_component(DoctorDashboard)]
pub fn doctor_dashboard() -> Html {
    let auth = use_auth();
    let appointments = use_state(Vec::<Appointment>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let appointments = appointments.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match portal_api::fetch_appointments().await {
                    Ok(list) => appointments.set(list),
                    Err(err) => {
                        log::error!("loading schedule failed: {}", err);
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let user = auth.user();
    let heading = user
        .as_ref()
        .map(|u| format!("Dr. {}", u.full_name()))
        .unwrap_or_else(|| "Doctor".to_string());
    let specialization = user.as_ref().and_then(|u| u.specialization.clone());
    // Doctors created by signup still need the registration step before
    // patients can book them
    let needs_registration = user
        .as_ref()
        .map(|u| u.is_registered == Some(false))
        .unwrap_or(false);

    html! {
        <div class="dashboard doctor-dashboard">
            <h2>{ heading }</h2>
            {
                if let Some(specialization) = specialization {
                    html! { <p class="text-muted">{ specialization }</p> }
                } else {
                    Html::default()
                }
            }
            {
                if needs_registration {
                    html! {
                        <div class="alert alert-warning">
                            {"Your doctor profile is not complete yet. "}
                            <Link<Route> to={Route::EditProfile}>{"Finish registration"}</Link<Route>>
                        </div>
                    }
                } else {
                    Html::default()
                }
            }

            <h4>{"Your schedule"}</h4>
            {
                if *loading {
                    html! { <p>{"Loading..."}</p> }
                } else if let Some(message) = error.as_ref() {
                    html! { <div class="alert alert-danger">{ message.clone() }</div> }
                } else if appointments.is_empty() {
                    html! { <p class="text-muted">{"No appointments booked."}</p> }
                } else {
                    html! {
                        <ul class="list-group">
                            {
                                appointments.iter().map(|a| html! {
                                    <li class="list-group-item" key={a.id.clone().unwrap_or_default()}>
                                        <strong>{ a.date.clone() }</strong>
                                        {" "}{ a.time_slot.clone() }
                                        {" in "}{ a.department.clone() }
                                        <span class="badge">{ a.status.clone() }</span>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    }
                }
            }
        </div>
    }
}
