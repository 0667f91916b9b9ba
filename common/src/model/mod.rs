//! Entity schemas as the records backend returns them.
//!
//! Each entity implements [`Record`], which ties it to its REST resource and
//! to the string-typed [`Draft`](crate::drafts::Draft) its form edits.

pub mod appointment;
pub mod doctor;
pub mod health;
pub mod patient;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::api::Resource;
use crate::drafts::Draft;

/// Identifier type for every entity. Ids are chosen by the caller at creation.
pub type RecordId = i64;

pub trait Record: Clone + PartialEq + DeserializeOwned + 'static {
    const RESOURCE: Resource;

    /// Whether the create form needs the patient and doctor collections.
    const NEEDS_REFERENCES: bool = false;

    type Draft: Draft<Record = Self>;

    fn id(&self) -> RecordId;
}

/// Reads an optional string, mapping `null`, absent and blank values to `None`.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
