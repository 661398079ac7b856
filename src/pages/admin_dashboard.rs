use yew::prelude::*;

use crate::auth::use_auth;
use crate::models::User;
use crate::services::portal_api;

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let auth = use_auth();
    let users = use_state(Vec::<User>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let users = users.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match portal_api::admin_list_users().await {
                    Ok(list) => users.set(list),
                    Err(err) => {
                        log::error!("loading user list failed: {}", err);
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
        .map(|user| format!("Administration: {}", user.full_name()))
        .unwrap_or_else(|| "Administration".to_string());

    html! {
        <div class="dashboard admin-dashboard">
            <h2>{ greeting }</h2>
            {
                if *loading {
                    html! { <p>{"Loading..."}</p> }
                } else if let Some(message) = error.as_ref() {
                    html! { <div class="alert alert-danger">{ message.clone() }</div> }
                } else {
                    html! {
                        <>
                            <p>{ format!("{} registered users", users.len()) }</p>
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>{"Name"}</th>
                                        <th>{"Email"}</th>
                                        <th>{"Role"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {
                                        users.iter().map(|user| html! {
                                            <tr key={user.email.clone()}>
                                                <td>{ user.full_name() }</td>
                                                <td>{ user.email.clone() }</td>
                                                <td>{ user.role.label() }</td>
                                            </tr>
                                        }).collect::<Html>()
                                    }
                                </tbody>
                            </table>
                        </>
                    }
                }
            }
        </div>
    }
}
