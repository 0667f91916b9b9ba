use common::views::form::FormReply;

use crate::components::records::FieldOf;

pub enum Msg<R: common::model::Record> {
    Edit(FieldOf<R>, String),
    Submit,
    Reply(FormReply),
    Cancel,
}
