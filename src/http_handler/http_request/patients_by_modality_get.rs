use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `PatientsByModality` endpoint. The service requires
/// both `Collection` and `Modality`.
#[derive(Debug, Default)]
pub struct PatientsByModalityRequest {
    pub collection: Option<String>,
    pub modality: Option<String>,
    pub format: OutputFormat,
}

impl PatientsByModalityRequest {
    pub fn new(collection: &str, modality: &str) -> Self {
        Self {
            collection: Some(String::from(collection)),
            modality: Some(String::from(modality)),
            ..Self::default()
        }
    }
}

impl NoBodyHTTPRequestType for PatientsByModalityRequest {}

impl HTTPRequestType for PatientsByModalityRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::PatientsByModality }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::COLLECTION, self.collection.as_deref());
        params.push(common::MODALITY, self.modality.as_deref());
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
