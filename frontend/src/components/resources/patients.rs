use common::drafts::patient::PatientField;
use common::model::patient::Patient;
use common::views::form::FormState;
use yew::prelude::*;

use super::NOT_AVAILABLE;
use crate::components::records::fields::input;
use crate::components::records::{OnEdit, RecordView};

impl RecordView for Patient {
    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Email", "Phone"]
    }

    fn cells(&self) -> Html {
        html! {
            <>
                <td>{ self.id.to_string() }</td>
                <td>{ self.name.clone() }</td>
                <td>{ self.email.clone() }</td>
                <td>{ self.phone.as_deref().unwrap_or(NOT_AVAILABLE).to_string() }</td>
            </>
        }
    }

    fn form_fields(form: &FormState<Self>, on_edit: &OnEdit<Self>) -> Html {
        html! {
            <>
                {
                    if form.is_editing() {
                        html! {}
                    } else {
                        input("ID", "number", PatientField::Id, form.value(PatientField::Id), true, on_edit)
                    }
                }
                { input("Name", "text", PatientField::Name, form.value(PatientField::Name), true, on_edit) }
                { input("Email", "email", PatientField::Email, form.value(PatientField::Email), true, on_edit) }
                { input("Phone", "tel", PatientField::Phone, form.value(PatientField::Phone), false, on_edit) }
            </>
        }
    }
}
