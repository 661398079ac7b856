use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::guards::{InitialGate, ProtectedRoute, RoleRoute};
use crate::components::role_dashboard::RoleDashboard;
use crate::models::Role;
use crate::pages::{
    AdminDashboard, AuthCard, BookAppointment, DoctorDashboard, EditProfile, Home, Login,
    MedicalRecords, NotFound, PatientDashboard, Signup, StaffDashboard,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth")]
    AuthGate,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/admin")]
    AdminDashboard,
    #[at("/dashboard/doctor")]
    DoctorDashboard,
    #[at("/dashboard/staff")]
    StaffDashboard,
    #[at("/dashboard/patient")]
    PatientDashboard,
    #[at("/book-appointment")]
    BookAppointment,
    #[at("/book-appointment/:doctor_id")]
    BookAppointmentWith { doctor_id: String },
    #[at("/medical-records")]
    MedicalRecords,
    #[at("/edit-profile")]
    EditProfile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The one role-to-landing-page table. switch_role, the role guard's
/// default fallback, and the dispatcher all go through here.
pub fn dashboard_for(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard,
        Role::Doctor => Route::DoctorDashboard,
        Role::Staff => Route::StaffDashboard,
        Role::Patient => Route::PatientDashboard,
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <InitialGate><Home /></InitialGate>
        },
        Route::AuthGate => html! { <AuthCard /> },
        Route::Login => html! { <Login /> },
        Route::Signup => html! { <Signup /> },
        Route::Dashboard => html! {
            <ProtectedRoute><RoleDashboard /></ProtectedRoute>
        },
        Route::AdminDashboard => html! {
            <RoleRoute allowed_roles={vec![Role::Admin]}><AdminDashboard /></RoleRoute>
        },
        Route::DoctorDashboard => html! {
            <RoleRoute allowed_roles={vec![Role::Doctor]}><DoctorDashboard /></RoleRoute>
        },
        Route::StaffDashboard => html! {
            <RoleRoute allowed_roles={vec![Role::Staff, Role::Admin]}><StaffDashboard /></RoleRoute>
        },
        Route::PatientDashboard => html! {
            <ProtectedRoute><PatientDashboard /></ProtectedRoute>
        },
        Route::BookAppointment => html! {
            <ProtectedRoute><BookAppointment doctor_id={None::<String>} /></ProtectedRoute>
        },
        Route::BookAppointmentWith { doctor_id } => html! {
            <ProtectedRoute><BookAppointment doctor_id={Some(doctor_id)} /></ProtectedRoute>
        },
        Route::MedicalRecords => html! {
            <ProtectedRoute><MedicalRecords /></ProtectedRoute>
        },
        Route::EditProfile => html! {
            <ProtectedRoute><EditProfile /></ProtectedRoute>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_maps_to_its_own_dashboard() {
        assert_eq!(dashboard_for(Role::Admin), Route::AdminDashboard);
        assert_eq!(dashboard_for(Role::Doctor), Route::DoctorDashboard);
        assert_eq!(dashboard_for(Role::Staff), Route::StaffDashboard);
        assert_eq!(dashboard_for(Role::Patient), Route::PatientDashboard);
    }

    #[test]
    fn dashboard_routes_render_the_expected_paths() {
        assert_eq!(dashboard_for(Role::Admin).to_path(), "/dashboard/admin");
        assert_eq!(dashboard_for(Role::Staff).to_path(), "/dashboard/staff");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::AuthGate.to_path(), "/auth");
    }
}
