use crate::api::{RecordsClient, References, Transport};
use crate::drafts::Draft;
use crate::error::ApiError;
use crate::model::{Record, RecordId};

type CreateBody<R> = <<R as Record>::Draft as Draft>::Create;
type UpdateBody<R> = <<R as Record>::Draft as Draft>::Update;
type FieldOf<R> = <<R as Record>::Draft as Draft>::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: RecordId },
}

pub enum FormCommand<R: Record> {
    LoadReferences,
    Create(CreateBody<R>),
    Update { id: RecordId, changes: UpdateBody<R> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormReply {
    References(Result<References, ApiError>),
    Submitted(Result<(), ApiError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Still open: waiting, or showing an error.
    Open,
    /// The owning list should refresh and dismiss the form.
    Succeeded,
}

impl<R: Record> FormCommand<R> {
    pub async fn run<T: Transport>(self, client: &RecordsClient<T>) -> FormReply {
        match self {
            FormCommand::LoadReferences => FormReply::References(client.references().await),
            FormCommand::Create(body) => FormReply::Submitted(client.create::<R>(&body).await),
            FormCommand::Update { id, changes } => {
                FormReply::Submitted(client.update::<R>(id, &changes).await)
            }
        }
    }
}

/// Create/update surface for one entity.
///
/// Holds the draft, the in-flight flag that disables submission, and the
/// inline error. Cancelling needs no state change: the owner simply drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<R: Record> {
    mode: FormMode,
    draft: R::Draft,
    submitting: bool,
    error: Option<String>,
    references: References,
}

impl<R: Record> FormState<R> {
    /// Blank form. Resources with reference selectors also get a load command.
    pub fn create() -> (Self, Option<FormCommand<R>>) {
        let state = Self {
            mode: FormMode::Create,
            draft: R::Draft::default(),
            submitting: false,
            error: None,
            references: References::default(),
        };
        let command = R::NEEDS_REFERENCES.then_some(FormCommand::LoadReferences);
        (state, command)
    }

    /// Form pre-populated from `record`. References are immutable once
    /// created, so nothing is loaded.
    pub fn edit(record: &R) -> Self {
        Self {
            mode: FormMode::Edit { id: record.id() },
            draft: R::Draft::from_record(record),
            submitting: false,
            error: None,
            references: References::default(),
        }
    }

    pub fn open(editing: Option<&R>) -> (Self, Option<FormCommand<R>>) {
        match editing {
            Some(record) => (Self::edit(record), None),
            None => Self::create(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn value(&self, field: FieldOf<R>) -> &str {
        self.draft.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn references(&self) -> &References {
        &self.references
    }

    pub fn edit_field(&mut self, field: FieldOf<R>, value: String) {
        self.draft.set(field, value);
    }

    pub fn apply(&mut self, reply: FormReply) -> FormOutcome {
        match reply {
            FormReply::References(result) => {
                self.on_references(result);
                FormOutcome::Open
            }
            FormReply::Submitted(result) => self.on_submitted(result),
        }
    }

    /// Fills the selectors. A failure only leaves them empty.
    pub fn on_references(&mut self, result: Result<References, ApiError>) {
        match result {
            Ok(references) => self.references = references,
            Err(err) => log::warn!("loading patients and doctors failed: {}", err),
        }
    }

    /// Converts the draft and yields exactly one request, or nothing when a
    /// request is already in flight or the draft is incomplete.
    pub fn submit(&mut self) -> Option<FormCommand<R>> {
        if self.submitting {
            return None;
        }
        self.error = None;

        let command = match self.mode {
            FormMode::Create => self.draft.to_create().map(FormCommand::Create),
            FormMode::Edit { id } => self
                .draft
                .to_update()
                .map(|changes| FormCommand::Update { id, changes }),
        };

        match command {
            Ok(command) => {
                self.submitting = true;
                Some(command)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    pub fn on_submitted(&mut self, result: Result<(), ApiError>) -> FormOutcome {
        self.submitting = false;
        match result {
            Ok(()) => FormOutcome::Succeeded,
            Err(err) => {
                let verb = if self.is_editing() { "update" } else { "create" };
                let fallback = format!("Failed to {} {}", verb, R::RESOURCE.singular());
                self.error = Some(err.message_or(&fallback));
                FormOutcome::Open
            }
        }
    }

    pub fn heading(&self) -> String {
        if self.is_editing() {
            format!("Edit {}", R::RESOURCE.title())
        } else {
            format!("Add New {}", R::RESOURCE.title())
        }
    }

    pub fn submit_label(&self) -> String {
        match (self.is_editing(), self.submitting) {
            (true, true) => "Updating...".to_string(),
            (false, true) => "Creating...".to_string(),
            (true, false) => format!("Update {}", R::RESOURCE.title()),
            (false, false) => format!("Create {}", R::RESOURCE.title()),
        }
    }
}
