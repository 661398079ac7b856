use yew::prelude::*;

use crate::auth::use_auth;
use crate::models::Appointment;
use crate::services::portal_api;

#[function_component(StaffDashboard)]
pub fn staff_dashboard() -> Html {
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
                        log::error!("loading desk queue failed: {}", err);
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
        .map(|user| format!("Front desk: {}", user.full_name()))
        .unwrap_or_else(|| "Front desk".to_string());

    html! {
        <div class="dashboard staff-dashboard">
            <h2>{ greeting }</h2>
            <h4>{"Today's appointments"}</h4>
            {
                if *loading {
                    html! { <p>{"Loading..."}</p> }
                } else if let Some(message) = error.as_ref() {
                    html! { <div class="alert alert-danger">{ message.clone() }</div> }
                } else if appointments.is_empty() {
                    html! { <p class="text-muted">{"Nothing on the schedule."}</p> }
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
