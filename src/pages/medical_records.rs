use yew::prelude::*;

use crate::models::MedicalRecord;
use crate::services::portal_api;

#[function_component(MedicalRecords)]
pub fn medical_records() -> Html {
    let records = use_state(Vec::<MedicalRecord>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let records = records.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match portal_api::fetch_medical_records().await {
                    Ok(list) => records.set(list),
                    Err(err) => {
                        log::error!("loading records failed: {}", err);
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="medical-records">
            <h2>{"Medical Records"}</h2>
            {
                if *loading {
                    html! { <p>{"Loading..."}</p> }
                } else if let Some(message) = error.as_ref() {
                    html! { <div class="alert alert-danger">{ message.clone() }</div> }
                } else if records.is_empty() {
                    html! { <p class="text-muted">{"No records on file."}</p> }
                } else {
                    html! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Doctor"}</th>
                                    <th>{"Diagnosis"}</th>
                                    <th>{"Prescription"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    records.iter().map(|record| html! {
                                        <tr key={record.id.clone().unwrap_or_default()}>
                                            <td>{ record.date.clone() }</td>
                                            <td>{ record.doctor_name.clone() }</td>
                                            <td>{ record.diagnosis.clone() }</td>
                                            <td>{ record.prescription.clone() }</td>
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
