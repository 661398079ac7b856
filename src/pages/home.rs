use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::use_auth;
use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let auth = use_auth();

    html! {
        <div class="home">
            <section class="hero text-center">
                <h1 class="fw-bold">{"Your health, one portal"}</h1>
                <p class="lead">
                    {"Book appointments, view your medical records and lab tests, and reach your care team."}
                </p>
                {
                    if auth.logged_in() {
                        html! {
                            <Link<Route> to={Route::Dashboard} classes="btn btn-primary btn-lg">
                                {"Go to your dashboard"}
                            </Link<Route>>
                        }
                    } else {
                        html! {
                            <Link<Route> to={Route::Login} classes="btn btn-primary btn-lg">
                                {"Sign in to get started"}
                            </Link<Route>>
                        }
                    }
                }
            </section>

            <section class="services row">
                <div class="col service-card">
                    <h3>{"Appointments"}</h3>
                    <p>{"Find a doctor and book a visit in minutes."}</p>
                    <Link<Route> to={Route::BookAppointment}>{"Book now"}</Link<Route>>
                </div>
                <div class="col service-card">
                    <h3>{"Medical Records"}</h3>
                    <p>{"Diagnoses, prescriptions and lab results in one place."}</p>
                    <Link<Route> to={Route::MedicalRecords}>{"View records"}</Link<Route>>
                </div>
                <div class="col service-card">
                    <h3>{"Your Profile"}</h3>
                    <p>{"Keep your contact and care details up to date."}</p>
                    <Link<Route> to={Route::EditProfile}>{"Edit profile"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
