use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `getCollectionValues` endpoint.
#[derive(Debug, Default)]
pub struct CollectionValuesRequest {
    pub format: OutputFormat,
}

impl NoBodyHTTPRequestType for CollectionValuesRequest {}

impl HTTPRequestType for CollectionValuesRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::GetCollectionValues }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
