use common::views::form::FormOutcome;
use yew::prelude::*;

use super::messages::Msg;
use super::run_command;
use super::state::RecordForm;
use crate::components::records::RecordView;
use crate::helpers::show_toast;

pub fn update<R: RecordView>(
    component: &mut RecordForm<R>,
    ctx: &Context<RecordForm<R>>,
    msg: Msg<R>,
) -> bool {
    match msg {
        Msg::Edit(field, value) => {
            component.form.edit_field(field, value);
            true
        }
        Msg::Submit => {
            if let Some(command) = component.form.submit() {
                run_command(component, ctx, command);
            }
            true
        }
        Msg::Reply(reply) => {
            if component.form.apply(reply) == FormOutcome::Succeeded {
                let verb = if component.form.is_editing() { "updated" } else { "created" };
                show_toast(&format!("{} {}.", R::RESOURCE.title(), verb));
                ctx.props().on_success.emit(());
            }
            true
        }
        Msg::Cancel => {
            ctx.props().on_cancel.emit(());
            false
        }
    }
}
