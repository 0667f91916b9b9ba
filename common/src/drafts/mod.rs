//! Form drafts: the not-yet-submitted, string-typed copy of an entity.
//!
//! Drafts mirror what the user typed. Numbers stay strings until
//! [`Draft::to_create`] or [`Draft::to_update`] converts them, and the only
//! checks performed are presence and numeric conversion.

pub mod appointment;
pub mod doctor;
pub mod patient;

use std::fmt::Debug;

use serde::Serialize;

use crate::error::DraftError;
use crate::model::{Record, RecordId};

pub trait Draft: Clone + Debug + Default + PartialEq + 'static {
    type Record: Record;

    /// Addresses one editable input of the form.
    type Field: Copy + PartialEq + 'static;

    type Create: Serialize;
    type Update: Serialize;

    fn from_record(record: &Self::Record) -> Self;

    fn get(&self, field: Self::Field) -> &str;

    fn set(&mut self, field: Self::Field, value: String);

    fn to_create(&self) -> Result<Self::Create, DraftError>;

    /// Body for an update: only the fields that stay mutable after creation.
    fn to_update(&self) -> Result<Self::Update, DraftError>;
}

pub(crate) fn required(value: &str, label: &'static str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::Missing(label))
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn number(value: &str, label: &'static str) -> Result<RecordId, DraftError> {
    required(value, label)?
        .parse::<RecordId>()
        .map_err(|_| DraftError::NotANumber(label))
}

/// Trimmed value for an update body, where blank means "clear it".
pub(crate) fn cleared(value: &str) -> String {
    value.trim().to_string()
}

pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("  Ada ", "Name"), Ok("Ada".to_string()));
        assert_eq!(required(" \t", "Name"), Err(DraftError::Missing("Name")));
    }

    #[test]
    fn number_distinguishes_missing_from_garbage() {
        assert_eq!(number("42", "ID"), Ok(42));
        assert_eq!(number("", "ID"), Err(DraftError::Missing("ID")));
        assert_eq!(number("4x2", "ID"), Err(DraftError::NotANumber("ID")));
    }

    #[test]
    fn optional_maps_blank_to_none() {
        assert_eq!(optional(""), None);
        assert_eq!(optional(" 555-0101 "), Some("555-0101".to_string()));
    }
}
