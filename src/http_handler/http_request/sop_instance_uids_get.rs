use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `getSOPInstanceUIDs` endpoint, listing the
/// instances of one series. `SeriesInstanceUID` is required by the service.
#[derive(Debug, Default)]
pub struct SOPInstanceUIDsRequest {
    pub series_instance_uid: Option<String>,
    pub format: OutputFormat,
}

impl SOPInstanceUIDsRequest {
    pub fn new(series_instance_uid: &str) -> Self {
        Self {
            series_instance_uid: Some(String::from(series_instance_uid)),
            ..Self::default()
        }
    }
}

impl NoBodyHTTPRequestType for SOPInstanceUIDsRequest {}

impl HTTPRequestType for SOPInstanceUIDsRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::GetSOPInstanceUIDs }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::SERIES_INSTANCE_UID, self.series_instance_uid.as_deref());
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
