use common::model::RecordId;
use common::views::list::ListReply;

pub enum Msg<R> {
    /// A fetch or delete finished.
    Reply(ListReply<R>),
    OpenCreate,
    OpenEdit(RecordId),
    Delete(RecordId),
    FormSucceeded,
    FormCancelled,
}
