use common::config::ClientConfig;
use common::model::Record;
use common::views::form::{FormCommand, FormState};

use crate::api::{self, Client};

pub struct RecordForm<R: Record> {
    pub form: FormState<R>,
    pub client: Client,
}

impl<R: Record> RecordForm<R> {
    pub fn new(config: &ClientConfig, editing: Option<&R>) -> (Self, Option<FormCommand<R>>) {
        let (form, command) = FormState::open(editing);
        let component = Self {
            form,
            client: api::client(config),
        };
        (component, command)
    }
}
