//! Overlay surface hosting a form.
//!
//! Clicking the dimmed overlay cancels; clicks on the surface itself are
//! stopped so they never reach the overlay.

use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

pub struct Modal {
    /// Id of the heading, referenced by `aria-labelledby`.
    pub heading_id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            heading_id: format!("modal-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_overlay = props.on_cancel.reform(|_: MouseEvent| ());
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="modal-overlay" onclick={on_overlay}>
                <div
                    class="modal-content"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={self.heading_id.clone()}
                    onclick={stop}
                >
                    <h3 id={self.heading_id.clone()}>{ props.title.clone() }</h3>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
