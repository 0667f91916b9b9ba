//! Per-resource table and form layouts.

mod appointments;
mod doctors;
mod patients;

/// Placeholder for empty optional columns.
const NOT_AVAILABLE: &str = "N/A";
