pub mod admin_dashboard;
pub mod auth_card;
pub mod book_appointment;
pub mod doctor_dashboard;
pub mod edit_profile;
pub mod home;
pub mod login;
pub mod medical_records;
pub mod not_found;
pub mod patient_dashboard;
pub mod signup;
pub mod staff_dashboard;

pub use admin_dashboard::AdminDashboard;
pub use auth_card::AuthCard;
pub use book_appointment::BookAppointment;
pub use doctor_dashboard::DoctorDashboard;
pub use edit_profile::EditProfile;
pub use home::Home;
pub use login::Login;
pub use medical_records::MedicalRecords;
pub use not_found::NotFound;
pub use patient_dashboard::PatientDashboard;
pub use signup::Signup;
pub use staff_dashboard::StaffDashboard;
