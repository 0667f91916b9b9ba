use serde::{Deserialize, Serialize};

use super::{blank_as_none, Record, RecordId};
use crate::api::Resource;
use crate::drafts::doctor::DoctorDraft;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: RecordId,
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub specialization: Option<String>,
}

impl Record for Doctor {
    const RESOURCE: Resource = Resource::Doctors;
    type Draft = DoctorDraft;

    fn id(&self) -> RecordId {
        self.id
    }
}
