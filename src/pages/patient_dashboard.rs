use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::use_auth;
use crate::models::Appointment;
use crate::router::Route;
use crate::services::portal_api;

#[function_component(PatientDashboard)]
pub fn patient_dashboard() -> Html {
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
                        log::error!("loading appointments failed: {}", err);
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let greeting = auth
        .user()
        .map(|user| format!("Welcome, {}", user.full_name()))
        .unwrap_or_else(|| "Welcome".to_string());

    html! {
        <div class="dashboard patient-dashboard">
            <h2>{ greeting }</h2>

            <div class="quick-links">
                <Link<Route> to={Route::BookAppointment} classes="btn btn-primary">
                    {"Book an appointment"}
                </Link<Route>>
                <Link<Route> to={Route::MedicalRecords} classes="btn btn-outline-primary">
                    {"Medical records"}
                </Link<Route>>
                <Link<Route> to={Route::EditProfile} classes="btn btn-outline-secondary">
                    {"Edit profile"}
                </Link<Route>>
            </div>

            <h4>{"Upcoming appointments"}</h4>
            {
                if *loading {
                    html! { <p>{"Loading..."}</p> }
                } else if let Some(message) = error.as_ref() {
                    html! { <div class="alert alert-danger">{ message.clone() }</div> }
                } else if appointments.is_empty() {
                    html! { <p class="text-muted">{"No appointments scheduled."}</p> }
                } else {
                    html! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Doctor"}</th>
                                    <th>{"Department"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Time"}</th>
                                    <th>{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    appointments.iter().map(|a| html! {
                                        <tr key={a.id.clone().unwrap_or_default()}>
                                            <td>{ a.doctor_name.clone() }</td>
                                            <td>{ a.department.clone() }</td>
                                            <td>{ a.date.clone() }</td>
                                            <td>{ a.time_slot.clone() }</td>
                                            <td>{ a.status.clone() }</td>
                                        </tr>
                                    }).collect::<Html>()
                                }
                            </tbody>
                        </table>
                    }
                }
            }
        </div>
    }
}
