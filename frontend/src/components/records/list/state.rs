use common::config::ClientConfig;
use common::views::list::{ListCommand, ListState};

use crate::api::{self, Client};

/// Runtime state of one list view.
pub struct RecordList<R> {
    /// Rows, overlay and in-flight delete, driven by messages.
    pub list: ListState<R>,

    /// Client bound to the configured API base.
    pub client: Client,
}

impl<R: common::model::Record> RecordList<R> {
    /// Fresh view plus the fetch it must run on mount.
    pub fn new(config: &ClientConfig) -> (Self, ListCommand) {
        let (list, command) = ListState::mount();
        let component = Self {
            list,
            client: api::client(config),
        };
        (component, command)
    }
}
