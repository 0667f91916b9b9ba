use yew::prelude::*;

use super::messages::Msg;
use super::state::RecordForm;
use crate::components::modal::Modal;
use crate::components::records::{FieldOf, RecordView};

pub fn view<R: RecordView>(component: &RecordForm<R>, ctx: &Context<RecordForm<R>>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    let on_edit = link.callback(|(field, value): (FieldOf<R>, String)| Msg::Edit(field, value));
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <Modal title={form.heading()} on_cancel={link.callback(|_| Msg::Cancel)}>
            {
                if let Some(error) = form.error() {
                    html! { <div class="form-error">{ error.to_string() }</div> }
                } else {
                    html! {}
                }
            }
            <form {onsubmit}>
                { R::form_fields(form, &on_edit) }
                <div class="form-actions">
                    <button type="button" class="btn-cancel" onclick={link.callback(|_| Msg::Cancel)}>
                        { "Cancel" }
                    </button>
                    <button type="submit" class="btn-submit" disabled={form.is_submitting()}>
                        { form.submit_label() }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
