pub mod modal;
pub mod records;
pub mod resources;
