pub mod auth;
pub mod clinical;
pub mod user;

pub use auth::{AuthResponse, ErrorBody, LoginRequest, SignupRequest};
pub use clinical::{Appointment, AppointmentRequest, DoctorSummary, MedicalRecord, ProfileUpdate};
pub use user::{Role, User};
