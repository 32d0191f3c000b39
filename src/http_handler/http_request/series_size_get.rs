use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `getSeriesSize` endpoint.
///
/// The service requires `SeriesInstanceUID`; it is forwarded as-is and not
/// validated here.
#[derive(Debug, Default)]
pub struct SeriesSizeRequest {
    pub series_instance_uid: Option<String>,
    pub format: OutputFormat,
}

impl SeriesSizeRequest {
    pub fn new(series_instance_uid: &str) -> Self {
        Self {
            series_instance_uid: Some(String::from(series_instance_uid)),
            ..Self::default()
        }
    }
}

impl NoBodyHTTPRequestType for SeriesSizeRequest {}

impl HTTPRequestType for SeriesSizeRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::GetSeriesSize }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::SERIES_INSTANCE_UID, self.series_instance_uid.as_deref());
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
