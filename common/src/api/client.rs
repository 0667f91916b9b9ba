use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::resource::Resource;
use super::transport::{ApiReply, ApiRequest, Method, Transport};
use crate::drafts::Draft;
use crate::error::ApiError;
use crate::model::appointment::Appointment;
use crate::model::doctor::Doctor;
use crate::model::health::HealthReport;
use crate::model::patient::Patient;
use crate::model::{Record, RecordId};
use crate::requests::{
    AppointmentChanges, DoctorChanges, NewAppointment, NewDoctor, NewPatient, PatientChanges,
};

type CreateBody<R> = <<R as Record>::Draft as Draft>::Create;
type UpdateBody<R> = <<R as Record>::Draft as Draft>::Update;

/// Patient and doctor collections backing the appointment selectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct References {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// One call per (resource, operation) pair, each a single request.
///
/// No retries, no timeouts. Replies are decoded with the entity schemas and a
/// missing collection field decodes to an empty list.
#[derive(Debug, Clone)]
pub struct RecordsClient<T> {
    transport: T,
}

impl<T: Transport> RecordsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, request: ApiRequest) -> Result<ApiReply, ApiError> {
        log::debug!("{} {}", request.method, request.path);
        let method = request.method;
        let path = request.path.clone();

        let reply = self.transport.send(request).await.inspect_err(|err| {
            log::warn!("{} {} failed: {}", method, path, err);
        })?;

        if reply.is_success() {
            return Ok(reply);
        }

        let message = serde_json::from_str::<ErrorBody>(&reply.body)
            .ok()
            .and_then(|body| body.error);
        log::warn!(
            "{} {} replied {}: {}",
            method,
            path,
            reply.status,
            message.as_deref().unwrap_or("<no error text>")
        );
        Err(ApiError::Backend {
            status: reply.status,
            message,
        })
    }

    async fn call_json(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let reply = self.call(request).await?;
        serde_json::from_str(&reply.body).map_err(ApiError::decode)
    }

    async fn send_body<B: serde::Serialize>(
        &self,
        method: Method,
        path: String,
        body: &B,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::decode)?;
        self.call(ApiRequest::with_body(method, path, body)).await?;
        Ok(())
    }

    /// Fetches the whole collection of `R`.
    pub async fn list<R: Record>(&self) -> Result<Vec<R>, ApiError> {
        let resource = R::RESOURCE;
        let mut reply = self.call_json(ApiRequest::get(resource.path())).await?;
        take_field(&mut reply, resource.collection_field())
            .map(decode::<Vec<R>>)
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    pub async fn get<R: Record>(&self, id: RecordId) -> Result<R, ApiError> {
        let resource = R::RESOURCE;
        let mut reply = self.call_json(ApiRequest::get(resource.item_path(id))).await?;
        take_field(&mut reply, resource.item_field())
            .map(decode::<R>)
            .unwrap_or_else(|| {
                Err(ApiError::Decode(format!(
                    "reply has no `{}` field",
                    resource.item_field()
                )))
            })
    }

    pub async fn create<R: Record>(&self, body: &CreateBody<R>) -> Result<(), ApiError> {
        self.send_body(Method::Post, R::RESOURCE.path().to_string(), body)
            .await
    }

    pub async fn update<R: Record>(
        &self,
        id: RecordId,
        changes: &UpdateBody<R>,
    ) -> Result<(), ApiError> {
        self.send_body(Method::Put, R::RESOURCE.item_path(id), changes)
            .await
    }

    pub async fn delete<R: Record>(&self, id: RecordId) -> Result<(), ApiError> {
        self.call(ApiRequest::delete(R::RESOURCE.item_path(id)))
            .await
            .map(|_| ())
    }

    /// Loads patients and doctors together; either failing fails both.
    pub async fn references(&self) -> Result<References, ApiError> {
        let (patients, doctors) = futures::try_join!(self.list_patients(), self.list_doctors())?;
        Ok(References { patients, doctors })
    }

    pub async fn health(&self) -> Result<HealthReport, ApiError> {
        let reply = self.call_json(ApiRequest::get("/health")).await?;
        decode(reply)
    }

    pub async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.list::<Patient>().await
    }

    pub async fn get_patient(&self, id: RecordId) -> Result<Patient, ApiError> {
        self.get::<Patient>(id).await
    }

    pub async fn create_patient(&self, patient: &NewPatient) -> Result<(), ApiError> {
        self.create::<Patient>(patient).await
    }

    pub async fn update_patient(
        &self,
        id: RecordId,
        changes: &PatientChanges,
    ) -> Result<(), ApiError> {
        self.update::<Patient>(id, changes).await
    }

    pub async fn delete_patient(&self, id: RecordId) -> Result<(), ApiError> {
        self.delete::<Patient>(id).await
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        self.list::<Doctor>().await
    }

    pub async fn get_doctor(&self, id: RecordId) -> Result<Doctor, ApiError> {
        self.get::<Doctor>(id).await
    }

    pub async fn create_doctor(&self, doctor: &NewDoctor) -> Result<(), ApiError> {
        self.create::<Doctor>(doctor).await
    }

    pub async fn update_doctor(&self, id: RecordId, changes: &DoctorChanges) -> Result<(), ApiError> {
        self.update::<Doctor>(id, changes).await
    }

    pub async fn delete_doctor(&self, id: RecordId) -> Result<(), ApiError> {
        self.delete::<Doctor>(id).await
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.list::<Appointment>().await
    }

    pub async fn get_appointment(&self, id: RecordId) -> Result<Appointment, ApiError> {
        self.get::<Appointment>(id).await
    }

    pub async fn create_appointment(&self, appointment: &NewAppointment) -> Result<(), ApiError> {
        self.create::<Appointment>(appointment).await
    }

    pub async fn update_appointment(
        &self,
        id: RecordId,
        changes: &AppointmentChanges,
    ) -> Result<(), ApiError> {
        self.update::<Appointment>(id, changes).await
    }

    pub async fn delete_appointment(&self, id: RecordId) -> Result<(), ApiError> {
        self.delete::<Appointment>(id).await
    }
}

/// Removes `field` from an object reply. `null` counts as absent.
fn take_field(reply: &mut Value, field: &str) -> Option<Value> {
    match reply.get_mut(field).map(Value::take) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn decode<D: DeserializeOwned>(value: Value) -> Result<D, ApiError> {
    serde_json::from_value(value).map_err(ApiError::decode)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::api::testing::FakeTransport;
    use crate::model::appointment::AppointmentStatus;

    fn client(transport: FakeTransport) -> RecordsClient<FakeTransport> {
        RecordsClient::new(transport)
    }

    #[test]
    fn list_reads_the_collection_field() {
        let client = client(FakeTransport::replying([ApiReply::new(
            200,
            r#"{"success":true,"patients":[
                {"id":1,"name":"Ada","email":"ada@example.org"},
                {"id":2,"name":"Bo","email":"bo@example.org","phone":"555"}
            ],"count":2}"#,
        )]));

        let patients = block_on(client.list_patients()).unwrap();

        assert_eq!(patients.len(), 2);
        assert_eq!(patients[1].phone.as_deref(), Some("555"));
        assert_eq!(client.transport().requests(), vec![ApiRequest::get("/patients")]);
    }

    #[test]
    fn missing_or_null_collection_is_empty() {
        let client = client(FakeTransport::replying([
            ApiReply::new(200, r#"{"success":true}"#),
            ApiReply::new(200, r#"{"success":true,"doctors":null}"#),
        ]));

        assert_eq!(block_on(client.list_doctors()).unwrap(), Vec::new());
        assert_eq!(block_on(client.list_doctors()).unwrap(), Vec::new());
    }

    #[test]
    fn malformed_row_rejects_the_whole_list() {
        let client = client(FakeTransport::replying([ApiReply::new(
            200,
            r#"{"appointments":[{"id":"x"}]}"#,
        )]));

        let err = block_on(client.list_appointments()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn error_status_carries_backend_text() {
        let client = client(FakeTransport::replying([ApiReply::new(
            400,
            r#"{"success":false,"error":"Name and email are required"}"#,
        )]));

        let err = block_on(client.create_patient(&NewPatient {
            id: 1,
            name: "Ada".into(),
            email: String::new(),
            phone: None,
        }))
        .unwrap_err();

        assert_eq!(
            err,
            ApiError::Backend {
                status: 400,
                message: Some("Name and email are required".into())
            }
        );
    }

    #[test]
    fn non_json_error_body_has_no_message() {
        let client = client(FakeTransport::replying([ApiReply::new(502, "Bad Gateway")]));

        let err = block_on(client.delete_doctor(3)).unwrap_err();
        assert_eq!(err, ApiError::Backend { status: 502, message: None });
    }

    #[test]
    fn mutations_use_the_right_verbs_and_paths() {
        let client = client(FakeTransport::replying([
            ApiReply::new(201, "{}"),
            ApiReply::new(200, "{}"),
            ApiReply::new(200, ""),
        ]));

        block_on(client.create_appointment(&NewAppointment {
            id: 5,
            patient_id: 1,
            doctor_id: 2,
            appointment_date: "2026-11-02".into(),
            status: AppointmentStatus::Scheduled,
        }))
        .unwrap();
        block_on(client.update_appointment(
            5,
            &AppointmentChanges {
                status: AppointmentStatus::Completed,
            },
        ))
        .unwrap();
        block_on(client.delete_appointment(5)).unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/appointments");
        assert_eq!(requests[0].body.as_ref().unwrap()["patient_id"], json!(1));
        assert_eq!(requests[1].method, Method::Put);
        assert_eq!(requests[1].path, "/appointments/5");
        assert_eq!(requests[1].body, Some(json!({"status": "Completed"})));
        assert_eq!(requests[2], ApiRequest::delete("/appointments/5"));
    }

    #[test]
    fn get_reads_the_item_field() {
        let client = client(FakeTransport::replying([
            ApiReply::new(200, r#"{"success":true,"doctor":{"id":4,"name":"Quinn"}}"#),
            ApiReply::new(404, r#"{"success":false,"error":"Doctor not found"}"#),
        ]));

        let doctor = block_on(client.get_doctor(4)).unwrap();
        assert_eq!(doctor.specialization, None);

        let err = block_on(client.get_doctor(5)).unwrap_err();
        assert_eq!(err.message_or("Failed"), "Doctor not found");
    }

    #[test]
    fn network_failure_is_passed_through() {
        let client = client(FakeTransport::new([Err(ApiError::Network(
            "connection refused".into(),
        ))]));

        let err = block_on(client.health()).unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".into()));
    }

    #[test]
    fn unreadable_list_body_is_a_network_error_not_a_decode_error() {
        let client = client(FakeTransport::new([Err(ApiError::Network(
            "error reading response body".into(),
        ))]));

        let err = block_on(client.list_patients()).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
        assert_eq!(err.message_or("Failed to fetch patients"), "Failed to fetch patients");
    }

    #[test]
    fn health_decodes_report() {
        let client = client(FakeTransport::replying([ApiReply::new(
            200,
            r#"{"status":"healthy","service":"Records API"}"#,
        )]));

        let report = block_on(client.health()).unwrap();
        assert!(report.is_healthy());
    }

    #[test]
    fn references_load_both_collections() {
        let client = client(FakeTransport::replying([
            ApiReply::new(200, r#"{"patients":[{"id":1,"name":"Ada","email":"a@x"}]}"#),
            ApiReply::new(200, r#"{"doctors":[{"id":2,"name":"Quinn"}]}"#),
        ]));

        let references = block_on(client.references()).unwrap();
        assert_eq!(references.patients.len(), 1);
        assert_eq!(references.doctors.len(), 1);
    }
}
