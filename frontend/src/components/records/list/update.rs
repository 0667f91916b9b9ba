//! Message handling for the list view.

use common::views::list::ListEffect;
use yew::prelude::*;

use super::messages::Msg;
use super::run_command;
use super::state::RecordList;
use crate::components::records::RecordView;
use crate::helpers::{alert, confirm};

pub fn update<R: RecordView>(
    component: &mut RecordList<R>,
    ctx: &Context<RecordList<R>>,
    msg: Msg<R>,
) -> bool {
    match msg {
        Msg::Reply(reply) => {
            match component.list.apply(reply) {
                Some(ListEffect::Run(command)) => run_command(component, ctx, command),
                Some(ListEffect::Alert(message)) => alert(&message),
                None => {}
            }
            true
        }
        Msg::OpenCreate => {
            component.list.open_create();
            true
        }
        Msg::OpenEdit(id) => component.list.open_edit(id),
        Msg::Delete(id) => {
            let confirmed = confirm(&format!(
                "Are you sure you want to delete this {}?",
                R::RESOURCE.singular()
            ));
            match component.list.request_delete(id, confirmed) {
                Some(command) => {
                    run_command(component, ctx, command);
                    true
                }
                None => false,
            }
        }
        Msg::FormSucceeded => {
            let command = component.list.on_form_success();
            run_command(component, ctx, command);
            true
        }
        Msg::FormCancelled => {
            component.list.on_form_cancel();
            true
        }
    }
}
