use super::{number, required, Draft};
use crate::error::DraftError;
use crate::model::appointment::{Appointment, AppointmentStatus};
use crate::requests::{AppointmentChanges, NewAppointment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentField {
    Id,
    PatientId,
    DoctorId,
    Date,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date: String,
    pub status: String,
}

impl Default for AppointmentDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            patient_id: String::new(),
            doctor_id: String::new(),
            appointment_date: String::new(),
            status: AppointmentStatus::default().as_str().to_string(),
        }
    }
}

impl AppointmentDraft {
    fn parsed_status(&self) -> Result<AppointmentStatus, DraftError> {
        let status = required(&self.status, "Status")?;
        AppointmentStatus::parse(&status).ok_or(DraftError::Invalid("Status"))
    }
}

impl Draft for AppointmentDraft {
    type Record = Appointment;
    type Field = AppointmentField;
    type Create = NewAppointment;
    type Update = AppointmentChanges;

    fn from_record(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id.to_string(),
            patient_id: appointment.patient_id.to_string(),
            doctor_id: appointment.doctor_id.to_string(),
            appointment_date: appointment.appointment_date.clone(),
            status: appointment.status.as_str().to_string(),
        }
    }

    fn get(&self, field: AppointmentField) -> &str {
        match field {
            AppointmentField::Id => &self.id,
            AppointmentField::PatientId => &self.patient_id,
            AppointmentField::DoctorId => &self.doctor_id,
            AppointmentField::Date => &self.appointment_date,
            AppointmentField::Status => &self.status,
        }
    }

    fn set(&mut self, field: AppointmentField, value: String) {
        match field {
            AppointmentField::Id => self.id = value,
            AppointmentField::PatientId => self.patient_id = value,
            AppointmentField::DoctorId => self.doctor_id = value,
            AppointmentField::Date => self.appointment_date = value,
            AppointmentField::Status => self.status = value,
        }
    }

    fn to_create(&self) -> Result<NewAppointment, DraftError> {
        Ok(NewAppointment {
            id: number(&self.id, "ID")?,
            patient_id: number(&self.patient_id, "Patient")?,
            doctor_id: number(&self.doctor_id, "Doctor")?,
            appointment_date: required(&self.appointment_date, "Appointment Date")?,
            status: self.parsed_status()?,
        })
    }

    fn to_update(&self) -> Result<AppointmentChanges, DraftError> {
        Ok(AppointmentChanges {
            status: self.parsed_status()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_draft_defaults_to_scheduled() {
        assert_eq!(AppointmentDraft::default().status, "Scheduled");
    }

    #[test]
    fn create_body_has_every_field_typed() {
        let draft = AppointmentDraft {
            id: "100".into(),
            patient_id: "1".into(),
            doctor_id: "2".into(),
            appointment_date: "2026-11-02".into(),
            status: "Scheduled".into(),
        };
        let body = serde_json::to_value(draft.to_create().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "id": 100,
                "patient_id": 1,
                "doctor_id": 2,
                "appointment_date": "2026-11-02",
                "status": "Scheduled"
            })
        );
    }

    #[test]
    fn unselected_patient_is_reported() {
        let draft = AppointmentDraft {
            id: "100".into(),
            doctor_id: "2".into(),
            appointment_date: "2026-11-02".into(),
            ..AppointmentDraft::default()
        };
        assert_eq!(draft.to_create(), Err(DraftError::Missing("Patient")));
    }

    #[test]
    fn update_sends_status_only_even_with_broken_immutables() {
        let mut draft = AppointmentDraft::default();
        draft.set(AppointmentField::PatientId, "garbage".into());
        draft.set(AppointmentField::Status, "Completed".into());
        let body = serde_json::to_value(draft.to_update().unwrap()).unwrap();
        assert_eq!(body, json!({"status": "Completed"}));
    }

    #[test]
    fn unknown_status_is_invalid() {
        let mut draft = AppointmentDraft::default();
        draft.set(AppointmentField::Status, "Postponed".into());
        assert_eq!(draft.to_update(), Err(DraftError::Invalid("Status")));
    }
}
