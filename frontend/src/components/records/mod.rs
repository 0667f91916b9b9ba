//! Generic list and form views shared by every resource.
//!
//! A resource plugs in by implementing [`RecordView`]: its table columns, the
//! cells of one row, and the inputs of its form. Fetching, deleting, drafting
//! and submitting are identical for all of them and live in `list` and `form`.

pub mod fields;
pub mod form;
pub mod list;

use common::drafts::Draft;
use common::model::Record;
use common::views::form::FormState;
use yew::{Callback, Html};

pub type FieldOf<R> = <<R as Record>::Draft as Draft>::Field;

/// Callback a form input fires with the field it edits and its new value.
pub type OnEdit<R> = Callback<(FieldOf<R>, String)>;

pub trait RecordView: Record {
    /// Table headings, not counting the actions column.
    fn columns() -> &'static [&'static str];

    /// The `<td>` cells of one row, in `columns()` order.
    fn cells(&self) -> Html;

    fn form_fields(form: &FormState<Self>, on_edit: &OnEdit<Self>) -> Html;
}
