use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `getPatientStudy` endpoint.
#[derive(Debug, Default)]
pub struct PatientStudyRequest {
    pub collection: Option<String>,
    pub patient_id: Option<String>,
    pub study_instance_uid: Option<String>,
    pub format: OutputFormat,
}

impl NoBodyHTTPRequestType for PatientStudyRequest {}

impl HTTPRequestType for PatientStudyRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::GetPatientStudy }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::COLLECTION, self.collection.as_deref());
        params.push(common::PATIENT_ID, self.patient_id.as_deref());
        params.push(common::STUDY_INSTANCE_UID, self.study_instance_uid.as_deref());
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
