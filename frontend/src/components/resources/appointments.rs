use common::drafts::appointment::AppointmentField;
use common::model::appointment::{Appointment, AppointmentStatus};
use common::views::form::FormState;
use yew::prelude::*;

use crate::components::records::fields::{input, select};
use crate::components::records::{OnEdit, RecordView};

impl RecordView for Appointment {
    fn columns() -> &'static [&'static str] {
        &["ID", "Patient Name", "Doctor Name", "Date", "Status"]
    }

    fn cells(&self) -> Html {
        html! {
            <>
                <td>{ self.id.to_string() }</td>
                <td>{ self.patient_label() }</td>
                <td>{ self.doctor_label() }</td>
                <td>{ self.appointment_date.clone() }</td>
                <td>
                    <span class={classes!("status", status_class(self.status))}>
                        { self.status.as_str() }
                    </span>
                </td>
            </>
        }
    }

    fn form_fields(form: &FormState<Self>, on_edit: &OnEdit<Self>) -> Html {
        let statuses = AppointmentStatus::ALL
            .iter()
            .map(|status| (status.as_str().to_string(), status.as_str().to_string()))
            .collect();
        let status = select(
            "Status",
            AppointmentField::Status,
            form.value(AppointmentField::Status),
            statuses,
            None,
            on_edit,
        );

        // Patient, doctor and date are fixed once the appointment exists.
        if form.is_editing() {
            return status;
        }

        let references = form.references();
        let patients = references
            .patients
            .iter()
            .map(|patient| (patient.id.to_string(), patient.name.clone()))
            .collect();
        let doctors = references
            .doctors
            .iter()
            .map(|doctor| {
                let text = match &doctor.specialization {
                    Some(specialization) => format!("{} - {}", doctor.name, specialization),
                    None => doctor.name.clone(),
                };
                (doctor.id.to_string(), text)
            })
            .collect();

        html! {
            <>
                { input("ID", "number", AppointmentField::Id, form.value(AppointmentField::Id), true, on_edit) }
                {
                    select(
                        "Patient",
                        AppointmentField::PatientId,
                        form.value(AppointmentField::PatientId),
                        patients,
                        Some("Select Patient"),
                        on_edit,
                    )
                }
                {
                    select(
                        "Doctor",
                        AppointmentField::DoctorId,
                        form.value(AppointmentField::DoctorId),
                        doctors,
                        Some("Select Doctor"),
                        on_edit,
                    )
                }
                {
                    input(
                        "Appointment Date",
                        "date",
                        AppointmentField::Date,
                        form.value(AppointmentField::Date),
                        true,
                        on_edit,
                    )
                }
                { status }
            </>
        }
    }
}

/// CSS class for a status badge, e.g. `status-cancelled`.
fn status_class(status: AppointmentStatus) -> String {
    format!("status-{}", status.as_str().to_ascii_lowercase())
}
