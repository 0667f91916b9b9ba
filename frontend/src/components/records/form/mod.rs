//! Generic form view: create or update one record inside a modal overlay.
//!
//! The draft, the in-flight flag and the inline error live in the shared
//! [`FormState`](common::views::form::FormState). This module only spawns the
//! commands it yields and reports success or cancellation to the owning list.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use common::views::form::FormCommand;

use super::RecordView;
pub use messages::Msg;
pub use props::RecordFormProps;
pub use state::RecordForm;

impl<R: RecordView> Component for RecordForm<R> {
    type Message = Msg<R>;
    type Properties = RecordFormProps<R>;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let (component, command) = RecordForm::new(&props.config, props.editing.as_ref());
        if let Some(command) = command {
            run_command(&component, ctx, command);
        }
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

/// Spawns `command` and delivers its reply as [`Msg::Reply`].
pub(super) fn run_command<R: RecordView>(
    component: &RecordForm<R>,
    ctx: &Context<RecordForm<R>>,
    command: FormCommand<R>,
) {
    let client = component.client.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let reply = command.run(&client).await;
        link.send_message(Msg::Reply(reply));
    });
}
