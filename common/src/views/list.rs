use std::collections::BTreeSet;

use crate::api::{RecordsClient, Transport};
use crate::error::ApiError;
use crate::model::{Record, RecordId};

#[derive(Debug, Clone, PartialEq)]
pub enum ListPhase<R> {
    Loading,
    Loaded(Vec<R>),
    /// Replaces the table until the view is mounted again.
    Failed(String),
}

/// Which form, if any, is shown over the list.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay<R> {
    Hidden,
    Create,
    Edit(R),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    Fetch,
    Delete(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListReply<R> {
    Fetched(Result<Vec<R>, ApiError>),
    Deleted(RecordId, Result<(), ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEffect {
    Run(ListCommand),
    /// Blocking alert for a failed delete.
    Alert(String),
}

impl ListCommand {
    pub async fn run<R: Record, T: Transport>(self, client: &RecordsClient<T>) -> ListReply<R> {
        match self {
            ListCommand::Fetch => ListReply::Fetched(client.list::<R>().await),
            ListCommand::Delete(id) => ListReply::Deleted(id, client.delete::<R>(id).await),
        }
    }
}

/// Rows of one resource, owned by its list view for as long as it is mounted.
///
/// Deletes are never applied locally: a successful delete triggers a full
/// refetch and the table reflects whatever the backend returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    phase: ListPhase<R>,
    overlay: Overlay<R>,
    /// Rows with a delete in flight. Each row's delete runs independently.
    deleting: BTreeSet<RecordId>,
}

impl<R: Record> ListState<R> {
    /// Fresh state for a view that was just mounted, with its initial fetch.
    pub fn mount() -> (Self, ListCommand) {
        let state = Self {
            phase: ListPhase::Loading,
            overlay: Overlay::Hidden,
            deleting: BTreeSet::new(),
        };
        (state, ListCommand::Fetch)
    }

    pub fn phase(&self) -> &ListPhase<R> {
        &self.phase
    }

    pub fn overlay(&self) -> &Overlay<R> {
        &self.overlay
    }

    /// Rows currently rendered; empty unless a fetch succeeded.
    pub fn rows(&self) -> &[R] {
        match &self.phase {
            ListPhase::Loaded(rows) => rows,
            _ => &[],
        }
    }

    pub fn is_deleting(&self, id: RecordId) -> bool {
        self.deleting.contains(&id)
    }

    pub fn apply(&mut self, reply: ListReply<R>) -> Option<ListEffect> {
        match reply {
            ListReply::Fetched(result) => {
                self.on_fetched(result);
                None
            }
            ListReply::Deleted(id, result) => Some(self.on_deleted(id, result)),
        }
    }

    pub fn on_fetched(&mut self, result: Result<Vec<R>, ApiError>) {
        self.phase = match result {
            Ok(rows) => ListPhase::Loaded(rows),
            Err(err) => {
                log::warn!("fetching {} failed: {}", R::RESOURCE.collection_field(), err);
                ListPhase::Failed(format!("Failed to fetch {}", R::RESOURCE.collection_field()))
            }
        };
    }

    /// Asks to delete `id`. Nothing happens unless the user confirmed or while
    /// that same row is already being deleted.
    pub fn request_delete(&mut self, id: RecordId, confirmed: bool) -> Option<ListCommand> {
        if !confirmed || !self.deleting.insert(id) {
            return None;
        }
        Some(ListCommand::Delete(id))
    }

    /// A successful delete refetches; a failed one leaves the rows stale.
    pub fn on_deleted(&mut self, id: RecordId, result: Result<(), ApiError>) -> ListEffect {
        self.deleting.remove(&id);
        match result {
            Ok(()) => ListEffect::Run(ListCommand::Fetch),
            Err(err) => ListEffect::Alert(
                err.message_or(&format!("Failed to delete {}", R::RESOURCE.singular())),
            ),
        }
    }

    pub fn open_create(&mut self) {
        self.overlay = Overlay::Create;
    }

    /// Opens the edit form for a loaded row. Unknown ids are ignored.
    pub fn open_edit(&mut self, id: RecordId) -> bool {
        match self.rows().iter().find(|row| row.id() == id).cloned() {
            Some(row) => {
                self.overlay = Overlay::Edit(row);
                true
            }
            None => false,
        }
    }

    pub fn on_form_success(&mut self) -> ListCommand {
        self.overlay = Overlay::Hidden;
        ListCommand::Fetch
    }

    pub fn on_form_cancel(&mut self) {
        self.overlay = Overlay::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::api::testing::FakeTransport;
    use crate::api::{ApiReply, ApiRequest};
    use crate::model::doctor::Doctor;
    use crate::model::patient::Patient;

    const TWO_PATIENTS: &str = r#"{"patients":[
        {"id":1,"name":"Ada","email":"ada@example.org"},
        {"id":2,"name":"Bo","email":"bo@example.org"}
    ]}"#;

    fn mounted(transport: FakeTransport) -> (ListState<Patient>, RecordsClient<FakeTransport>) {
        let client = RecordsClient::new(transport);
        let (mut state, command) = ListState::<Patient>::mount();
        let reply = block_on(command.run::<Patient, _>(&client));
        assert_eq!(state.apply(reply), None);
        (state, client)
    }

    #[test]
    fn row_count_matches_collection_length() {
        let (state, _) = mounted(FakeTransport::replying([ApiReply::new(200, TWO_PATIENTS)]));
        assert_eq!(state.rows().len(), 2);
    }

    #[test]
    fn absent_collection_renders_zero_rows() {
        let (state, _) = mounted(FakeTransport::replying([ApiReply::new(200, "{}")]));
        assert_eq!(state.phase(), &ListPhase::Loaded(Vec::new()));
    }

    #[test]
    fn fetch_failure_replaces_table_with_message() {
        let (state, _) = mounted(FakeTransport::replying([ApiReply::new(500, "{}")]));
        assert_eq!(state.phase(), &ListPhase::Failed("Failed to fetch patients".into()));
        assert!(state.rows().is_empty());
    }

    #[test]
    fn confirmed_delete_is_one_delete_then_one_fetch() {
        let (mut state, client) = mounted(FakeTransport::replying([
            ApiReply::new(200, TWO_PATIENTS),
            ApiReply::new(200, r#"{"success":true}"#),
            ApiReply::new(200, r#"{"patients":[{"id":2,"name":"Bo","email":"bo@example.org"}]}"#),
        ]));

        let command = state.request_delete(1, true).unwrap();
        assert!(state.is_deleting(1));
        // Not removed locally while the delete is in flight.
        assert_eq!(state.rows().len(), 2);

        let effect = state.apply(block_on(command.run::<Patient, _>(&client)));
        assert_eq!(effect, Some(ListEffect::Run(ListCommand::Fetch)));
        assert_eq!(state.apply(block_on(ListCommand::Fetch.run::<Patient, _>(&client))), None);

        assert_eq!(
            client.transport().requests(),
            vec![
                ApiRequest::get("/patients"),
                ApiRequest::delete("/patients/1"),
                ApiRequest::get("/patients"),
            ]
        );
        assert_eq!(state.rows().len(), 1);
        assert!(!state.is_deleting(1));
    }

    #[test]
    fn declined_delete_issues_nothing() {
        let (mut state, client) = mounted(FakeTransport::replying([ApiReply::new(200, TWO_PATIENTS)]));

        assert_eq!(state.request_delete(1, false), None);
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn failed_delete_alerts_and_keeps_rows() {
        let (mut state, client) = mounted(FakeTransport::replying([ApiReply::new(200, TWO_PATIENTS)]));
        client.transport().push(Ok(ApiReply::new(
            500,
            r#"{"success":false,"error":"Row is referenced"}"#,
        )));

        let command = state.request_delete(2, true).unwrap();
        let effect = state.apply(block_on(command.run::<Patient, _>(&client)));

        assert_eq!(effect, Some(ListEffect::Alert("Row is referenced".into())));
        assert_eq!(state.rows().len(), 2);
        assert_eq!(client.transport().requests().len(), 2);
    }

    #[test]
    fn failed_delete_without_text_uses_generic_alert() {
        let (mut state, _) = ListState::<Doctor>::mount();
        state.on_fetched(Ok(vec![Doctor {
            id: 3,
            name: "Quinn".into(),
            specialization: None,
        }]));
        state.request_delete(3, true);

        let effect = state.on_deleted(3, Err(ApiError::Network("offline".into())));
        assert_eq!(effect, ListEffect::Alert("Failed to delete doctor".into()));
        assert!(!state.is_deleting(3));
    }

    #[test]
    fn deletes_on_different_rows_each_issue_a_request() {
        let (mut state, client) = mounted(FakeTransport::replying([ApiReply::new(200, TWO_PATIENTS)]));

        let first = state.request_delete(1, true).unwrap();
        let second = state.request_delete(2, true).unwrap();
        assert_eq!(second, ListCommand::Delete(2));
        // The same row cannot be deleted twice while its request is pending.
        assert_eq!(state.request_delete(1, true), None);
        assert!(state.is_deleting(1) && state.is_deleting(2));

        client.transport().push(Ok(ApiReply::new(200, r#"{"success":true}"#)));
        client.transport().push(Ok(ApiReply::new(200, r#"{"success":true}"#)));
        let effect = state.apply(block_on(second.run::<Patient, _>(&client)));
        assert_eq!(effect, Some(ListEffect::Run(ListCommand::Fetch)));
        assert!(state.is_deleting(1));
        assert!(!state.is_deleting(2));

        let effect = state.apply(block_on(first.run::<Patient, _>(&client)));
        assert_eq!(effect, Some(ListEffect::Run(ListCommand::Fetch)));
        assert!(!state.is_deleting(1));

        assert_eq!(
            client.transport().requests()[1..].to_vec(),
            vec![ApiRequest::delete("/patients/2"), ApiRequest::delete("/patients/1")]
        );
    }

    #[test]
    fn edit_opens_with_the_loaded_row() {
        let (mut state, _) = mounted(FakeTransport::replying([ApiReply::new(200, TWO_PATIENTS)]));

        assert!(state.open_edit(2));
        match state.overlay() {
            Overlay::Edit(patient) => assert_eq!(patient.name, "Bo"),
            other => panic!("unexpected overlay {other:?}"),
        }
        assert!(!state.open_edit(99));
    }

    #[test]
    fn cancel_hides_form_without_request_or_change() {
        let (mut state, client) = mounted(FakeTransport::replying([ApiReply::new(200, TWO_PATIENTS)]));
        let before = state.rows().to_vec();

        state.open_create();
        state.on_form_cancel();

        assert_eq!(state.overlay(), &Overlay::Hidden);
        assert_eq!(state.rows(), before.as_slice());
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn form_success_hides_form_and_refetches() {
        let (mut state, _) = ListState::<Patient>::mount();
        state.open_create();

        assert_eq!(state.on_form_success(), ListCommand::Fetch);
        assert_eq!(state.overlay(), &Overlay::Hidden);
    }
}
