use common::config::ClientConfig;
use yew::prelude::*;

use crate::components::records::RecordView;

#[derive(Properties, PartialEq)]
pub struct RecordFormProps<R: RecordView> {
    pub config: ClientConfig,

    /// The record being edited; `None` opens a blank create form.
    ///
    /// Read once when the form is created.
    #[prop_or_default]
    pub editing: Option<R>,

    /// Fired once after the backend accepted the create or update.
    pub on_success: Callback<()>,

    /// Fired by the cancel button or a click on the overlay. No request is made.
    pub on_cancel: Callback<()>,
}
