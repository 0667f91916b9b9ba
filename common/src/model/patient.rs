use serde::{Deserialize, Serialize};

use super::{blank_as_none, Record, RecordId};
use crate::api::Resource;
use crate::drafts::patient::PatientDraft;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phone: Option<String>,
}

impl Record for Patient {
    const RESOURCE: Resource = Resource::Patients;
    type Draft = PatientDraft;

    fn id(&self) -> RecordId {
        self.id
    }
}
