use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `getSharedList` endpoint. The service requires the
/// list's `name`.
#[derive(Debug, Default)]
pub struct SharedListRequest {
    pub name: Option<String>,
    pub format: OutputFormat,
}

impl SharedListRequest {
    pub fn new(name: &str) -> Self {
        Self { name: Some(String::from(name)), ..Self::default() }
    }
}

impl NoBodyHTTPRequestType for SharedListRequest {}

impl HTTPRequestType for SharedListRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::GetSharedList }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::NAME, self.name.as_deref());
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
