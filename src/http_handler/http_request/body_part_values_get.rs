use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `getBodyPartValues` endpoint.
#[derive(Debug, Default)]
pub struct BodyPartValuesRequest {
    pub collection: Option<String>,
    pub modality: Option<String>,
    pub format: OutputFormat,
}

impl NoBodyHTTPRequestType for BodyPartValuesRequest {}

impl HTTPRequestType for BodyPartValuesRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::GetBodyPartValues }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::COLLECTION, self.collection.as_deref());
        params.push(common::MODALITY, self.modality.as_deref());
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
