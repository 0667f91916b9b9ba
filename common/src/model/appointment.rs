use std::fmt;

use serde::{Deserialize, Serialize};

use super::{blank_as_none, Record, RecordId};
use crate::api::Resource;
use crate::drafts::appointment::AppointmentDraft;

/// Lifecycle of an appointment. Only this field changes after creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }

    /// Parses the exact wire spelling.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    /// ISO calendar date (`YYYY-MM-DD`), kept as the backend sent it.
    pub appointment_date: String,
    pub status: AppointmentStatus,
    /// Denormalized display column; only present on list replies that join it.
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
}

impl Appointment {
    pub fn patient_label(&self) -> String {
        self.patient_name
            .clone()
            .unwrap_or_else(|| format!("Patient #{}", self.patient_id))
    }

    pub fn doctor_label(&self) -> String {
        self.doctor_name
            .clone()
            .unwrap_or_else(|| format!("Doctor #{}", self.doctor_id))
    }
}

impl Record for Appointment {
    const RESOURCE: Resource = Resource::Appointments;
    const NEEDS_REFERENCES: bool = true;
    type Draft = AppointmentDraft;

    fn id(&self) -> RecordId {
        self.id
    }
}
