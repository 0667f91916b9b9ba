//! Generic list view: fetch on mount, table, edit/delete actions, and the
//! create/edit form overlay.
//!
//! Responsibilities
//! - Own the rows of one resource for as long as the tab is shown.
//! - Run the commands the shared [`ListState`](common::views::list::ListState)
//!   hands back and feed every reply in as a message.
//! - Ask for confirmation before deleting and alert when a delete fails.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use common::views::list::ListCommand;

use super::RecordView;
pub use messages::Msg;
pub use props::RecordListProps;
pub use state::RecordList;

impl<R: RecordView> Component for RecordList<R> {
    type Message = Msg<R>;
    type Properties = RecordListProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (component, command) = RecordList::new(&ctx.props().config);
        run_command(&component, ctx, command);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().config != old_props.config {
            self.client = crate::api::client(&ctx.props().config);
            run_command(self, ctx, ListCommand::Fetch);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

/// Spawns `command` and delivers its reply as [`Msg::Reply`].
pub(super) fn run_command<R: RecordView>(
    component: &RecordList<R>,
    ctx: &Context<RecordList<R>>,
    command: ListCommand,
) {
    let client = component.client.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let reply = command.run::<R, _>(&client).await;
        link.send_message(Msg::Reply(reply));
    });
}
