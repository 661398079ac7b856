//! Thin endpoint wrappers for the data pages. No client-side business
//! rules; the backend owns validation.

use crate::models::{
    Appointment, AppointmentRequest, DoctorSummary, MedicalRecord, ProfileUpdate, User,
};
use crate::services::api_client::{self, ApiError};

pub async fn fetch_profile() -> Result<User, ApiError> {
    api_client::get_json("/users/me").await
}

pub async fn update_profile(update: &ProfileUpdate) -> Result<User, ApiError> {
    api_client::put_json("/users/me", update).await
}

pub async fn fetch_appointments() -> Result<Vec<Appointment>, ApiError> {
    api_client::get_json("/appointments").await
}

pub async fn book_appointment(request: &AppointmentRequest) -> Result<Appointment, ApiError> {
    api_client::post_json("/appointments", request).await
}

pub async fn fetch_medical_records() -> Result<Vec<MedicalRecord>, ApiError> {
    api_client::get_json("/medical-records").await
}

pub async fn fetch_doctors() -> Result<Vec<DoctorSummary>, ApiError> {
    api_client::get_json("/doctors").await
}

pub async fn admin_list_users() -> Result<Vec<User>, ApiError> {
    api_client::get_json("/admin/users").await
}
