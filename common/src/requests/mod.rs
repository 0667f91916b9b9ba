//! Request bodies sent to the records backend.
//!
//! Create bodies carry every field including the caller-chosen id and leave
//! out blank optionals. Update bodies carry only the fields that stay mutable
//! after creation, and always carry them: the backend keeps any field whose
//! key is absent, so a cleared optional is sent as `""`.

use serde::Serialize;

use crate::model::appointment::AppointmentStatus;
use crate::model::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPatient {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientChanges {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDoctor {
    pub id: RecordId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorChanges {
    pub name: String,
    pub specialization: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAppointment {
    pub id: RecordId,
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    pub appointment_date: String,
    pub status: AppointmentStatus,
}

/// Appointments only ever change status once booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentChanges {
    pub status: AppointmentStatus,
}
