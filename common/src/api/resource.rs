use crate::model::RecordId;

/// One of the entity collections exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Patients,
    Doctors,
    Appointments,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Patients, Resource::Doctors, Resource::Appointments];

    /// Collection path relative to the API base, e.g. `/patients`.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Patients => "/patients",
            Resource::Doctors => "/doctors",
            Resource::Appointments => "/appointments",
        }
    }

    pub fn item_path(self, id: RecordId) -> String {
        format!("{}/{}", self.path(), id)
    }

    /// Field of the list reply holding the collection.
    pub fn collection_field(self) -> &'static str {
        &self.path()[1..]
    }

    /// Field of the single-item reply holding the entity.
    pub fn item_field(self) -> &'static str {
        match self {
            Resource::Patients => "patient",
            Resource::Doctors => "doctor",
            Resource::Appointments => "appointment",
        }
    }

    /// Lowercase singular noun used in messages ("Failed to create patient").
    pub fn singular(self) -> &'static str {
        self.item_field()
    }

    pub fn label(self) -> &'static str {
        match self {
            Resource::Patients => "Patients",
            Resource::Doctors => "Doctors",
            Resource::Appointments => "Appointments",
        }
    }

    /// Capitalized singular, for headings such as "Edit Doctor".
    pub fn title(self) -> &'static str {
        match self {
            Resource::Patients => "Patient",
            Resource::Doctors => "Doctor",
            Resource::Appointments => "Appointment",
        }
    }
}
