use super::{cleared, number, optional, required, Draft};
use crate::error::DraftError;
use crate::model::patient::Patient;
use crate::requests::{NewPatient, PatientChanges};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientField {
    Id,
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientDraft {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Draft for PatientDraft {
    type Record = Patient;
    type Field = PatientField;
    type Create = NewPatient;
    type Update = PatientChanges;

    fn from_record(patient: &Patient) -> Self {
        Self {
            id: patient.id.to_string(),
            name: patient.name.clone(),
            email: patient.email.clone(),
            phone: patient.phone.clone().unwrap_or_default(),
        }
    }

    fn get(&self, field: PatientField) -> &str {
        match field {
            PatientField::Id => &self.id,
            PatientField::Name => &self.name,
            PatientField::Email => &self.email,
            PatientField::Phone => &self.phone,
        }
    }

    fn set(&mut self, field: PatientField, value: String) {
        match field {
            PatientField::Id => self.id = value,
            PatientField::Name => self.name = value,
            PatientField::Email => self.email = value,
            PatientField::Phone => self.phone = value,
        }
    }

    fn to_create(&self) -> Result<NewPatient, DraftError> {
        Ok(NewPatient {
            id: number(&self.id, "ID")?,
            name: required(&self.name, "Name")?,
            email: required(&self.email, "Email")?,
            phone: optional(&self.phone),
        })
    }

    fn to_update(&self) -> Result<PatientChanges, DraftError> {
        Ok(PatientChanges {
            name: required(&self.name, "Name")?,
            email: required(&self.email, "Email")?,
            phone: cleared(&self.phone),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PatientDraft {
        let mut draft = PatientDraft::default();
        draft.set(PatientField::Id, "12".into());
        draft.set(PatientField::Name, "Ada Lovelace".into());
        draft.set(PatientField::Email, "ada@example.org".into());
        draft
    }

    #[test]
    fn create_converts_id_to_number() {
        let body = filled().to_create().unwrap();
        assert_eq!(body.id, 12);
        assert_eq!(body.phone, None);
    }

    #[test]
    fn email_is_required() {
        let mut draft = filled();
        draft.set(PatientField::Email, String::new());
        assert_eq!(draft.to_create(), Err(DraftError::Missing("Email")));
        assert_eq!(draft.to_update(), Err(DraftError::Missing("Email")));
    }

    #[test]
    fn update_ignores_the_id_field() {
        let mut draft = filled();
        draft.set(PatientField::Id, "not a number".into());
        let body = serde_json::to_value(draft.to_update().unwrap()).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["name"], "Ada Lovelace");
    }

    #[test]
    fn from_record_prefills_every_field() {
        let draft = PatientDraft::from_record(&Patient {
            id: 3,
            name: "Bo".into(),
            email: "bo@example.org".into(),
            phone: Some("555-0101".into()),
        });
        assert_eq!(draft.get(PatientField::Id), "3");
        assert_eq!(draft.get(PatientField::Phone), "555-0101");
    }
}
