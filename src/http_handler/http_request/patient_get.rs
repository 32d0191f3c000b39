use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `getPatient` endpoint.
#[derive(Debug, Default)]
pub struct PatientRequest {
    pub collection: Option<String>,
    pub format: OutputFormat,
}

impl NoBodyHTTPRequestType for PatientRequest {}

impl HTTPRequestType for PatientRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::GetPatient }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::COLLECTION, self.collection.as_deref());
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
