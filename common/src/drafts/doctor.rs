use super::{cleared, number, optional, required, Draft};
use crate::error::DraftError;
use crate::model::doctor::Doctor;
use crate::requests::{DoctorChanges, NewDoctor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorField {
    Id,
    Name,
    Specialization,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorDraft {
    pub id: String,
    pub name: String,
    pub specialization: String,
}

impl Draft for DoctorDraft {
    type Record = Doctor;
    type Field = DoctorField;
    type Create = NewDoctor;
    type Update = DoctorChanges;

    fn from_record(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.to_string(),
            name: doctor.name.clone(),
            specialization: doctor.specialization.clone().unwrap_or_default(),
        }
    }

    fn get(&self, field: DoctorField) -> &str {
        match field {
            DoctorField::Id => &self.id,
            DoctorField::Name => &self.name,
            DoctorField::Specialization => &self.specialization,
        }
    }

    fn set(&mut self, field: DoctorField, value: String) {
        match field {
            DoctorField::Id => self.id = value,
            DoctorField::Name => self.name = value,
            DoctorField::Specialization => self.specialization = value,
        }
    }

    fn to_create(&self) -> Result<NewDoctor, DraftError> {
        Ok(NewDoctor {
            id: number(&self.id, "ID")?,
            name: required(&self.name, "Name")?,
            specialization: optional(&self.specialization),
        })
    }

    fn to_update(&self) -> Result<DoctorChanges, DraftError> {
        Ok(DoctorChanges {
            name: required(&self.name, "Name")?,
            specialization: cleared(&self.specialization),
        })
    }
}
