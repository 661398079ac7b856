use serde::{Deserialize, Serialize};

/// Appointment row as listed by GET /api/appointments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "doctorName", default)]
    pub doctor_name: String,
    #[serde(default)]
    pub department: String,
    pub date: String,
    #[serde(rename = "timeSlot", default)]
    pub time_slot: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentRequest {
    #[serde(rename = "doctorId", skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<String>,
    pub department: String,
    pub date: String,
    #[serde(rename = "timeSlot")]
    pub time_slot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub date: String,
    #[serde(rename = "doctorName", default)]
    pub doctor_name: String,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub prescription: String,
}

/// Directory entry for the doctor listing and booking form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(rename = "consultationFee", default)]
    pub consultation_fee: Option<f64>,
}

/// PUT /api/users/me body. Only the editable profile fields travel.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}
