use common::drafts::doctor::DoctorField;
use common::model::doctor::Doctor;
use common::views::form::FormState;
use yew::prelude::*;

use super::NOT_AVAILABLE;
use crate::components::records::fields::input;
use crate::components::records::{OnEdit, RecordView};

impl RecordView for Doctor {
    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Specialization"]
    }

    fn cells(&self) -> Html {
        html! {
            <>
                <td>{ self.id.to_string() }</td>
                <td>{ self.name.clone() }</td>
                <td>{ self.specialization.as_deref().unwrap_or(NOT_AVAILABLE).to_string() }</td>
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
                        input("ID", "number", DoctorField::Id, form.value(DoctorField::Id), true, on_edit)
                    }
                }
                { input("Name", "text", DoctorField::Name, form.value(DoctorField::Name), true, on_edit) }
                {
                    input(
                        "Specialization",
                        "text",
                        DoctorField::Specialization,
                        form.value(DoctorField::Specialization),
                        false,
                        on_edit,
                    )
                }
            </>
        }
    }
}
