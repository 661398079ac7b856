use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{AppointmentRequest, DoctorSummary};
use crate::services::portal_api;

#[derive(Properties, PartialEq)]
pub struct BookAppointmentProps {
    /// Pre-selected doctor when coming from the directory.
    pub doctor_id: Option<String>,
}

#[function_component(BookAppointment)]
pub fn book_appointment(props: &BookAppointmentProps) -> Html {
    let doctors = use_state(Vec::<DoctorSummary>::new);
    let doctor_id = use_state(|| props.doctor_id.clone());
    let department = use_state(String::new);
    let date = use_state(String::new);
    let time_slot = use_state(String::new);
    let error_message = use_state(String::new);
    let success_message = use_state(String::new);
    let submitting = use_state(|| false);

    {
        let doctors = doctors.clone();
        let error_message = error_message.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match portal_api::fetch_doctors().await {
                    Ok(list) => doctors.set(list),
                    Err(err) => {
                        log::error!("loading doctor directory failed: {}", err);
                        error_message.set(err.to_string());
                    }
                }
            });
            || ()
        });
    }

    let on_doctor_change = {
        let doctor_id = doctor_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            doctor_id.set(if value.is_empty() { None } else { Some(value) });
        })
    };

    let bind_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };
    let on_department = bind_input(department.clone());
    let on_date = bind_input(date.clone());
    let on_time = bind_input(time_slot.clone());

    let on_submit = {
        let doctor_id = doctor_id.clone();
        let department = department.clone();
        let date = date.clone();
        let time_slot = time_slot.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(String::new());
            success_message.set(String::new());

            if department.is_empty() || date.is_empty() || time_slot.is_empty() {
                error_message.set("Please fill in department, date and time slot".into());
                return;
            }

            submitting.set(true);
            let request = AppointmentRequest {
                doctor_id: (*doctor_id).clone(),
                department: (*department).clone(),
                date: (*date).clone(),
                time_slot: (*time_slot).clone(),
                notes: None,
            };
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match portal_api::book_appointment(&request).await {
                    Ok(appointment) => {
                        success_message.set(format!(
                            "Appointment booked for {} at {}",
                            appointment.date, appointment.time_slot
                        ));
                    }
                    Err(err) => {
                        log::error!("booking failed: {}", err);
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
                <div class="card-header">{"Book an appointment"}</div>

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
                        <label for="doctor">{"Doctor (optional)"}</label>
                        <select id="doctor" class="form-control" onchange={on_doctor_change}>
                            <option value="" selected={doctor_id.is_none()}>{"Any available"}</option>
                            {
                                doctors.iter().map(|doctor| html! {
                                    <option
                                        value={doctor.id.clone()}
                                        selected={Some(&doctor.id) == doctor_id.as_ref()}
                                    >
                                        { format!("{} ({})", doctor.name, doctor.specialization) }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>

                    <div class="mb-3">
                        <label for="department">{"Department"}</label>
                        <input type="text" id="department" class="form-control"
                            value={(*department).clone()} oninput={on_department} required=true />
                    </div>
                    <div class="mb-3">
                        <label for="date">{"Date"}</label>
                        <input type="date" id="date" class="form-control"
                            value={(*date).clone()} oninput={on_date} required=true />
                    </div>
                    <div class="mb-3">
                        <label for="timeSlot">{"Time slot"}</label>
                        <input type="time" id="timeSlot" class="form-control"
                            value={(*time_slot).clone()} oninput={on_time} required=true />
                    </div>

                    <button type="submit" class="btn btn-primary w-100" disabled={*submitting}>
                        { if *submitting { "Booking..." } else { "Book appointment" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
