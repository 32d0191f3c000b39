use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `getModalityValues` endpoint.
#[derive(Debug, Default)]
pub struct ModalityValuesRequest {
    pub collection: Option<String>,
    pub body_part_examined: Option<String>,
    pub format: OutputFormat,
}

impl NoBodyHTTPRequestType for ModalityValuesRequest {}

impl HTTPRequestType for ModalityValuesRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::GetModalityValues }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::COLLECTION, self.collection.as_deref());
        params.push(common::BODY_PART_EXAMINED, self.body_part_examined.as_deref());
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
