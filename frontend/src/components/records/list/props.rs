use common::config::ClientConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecordListProps {
    /// Where the records API lives. A change triggers a fresh fetch.
    pub config: ClientConfig,
}
