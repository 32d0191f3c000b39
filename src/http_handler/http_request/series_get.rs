use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `getSeries` endpoint, the widest metadata query the
/// API offers. Every filter narrows the result set; all of them are
/// optional.
#[derive(Debug, Default)]
pub struct SeriesRequest {
    pub collection: Option<String>,
    pub study_instance_uid: Option<String>,
    pub modality: Option<String>,
    pub series_instance_uid: Option<String>,
    pub body_part_examined: Option<String>,
    pub manufacturer: Option<String>,
    pub manufacturer_model_name: Option<String>,
    pub format: OutputFormat,
}

impl NoBodyHTTPRequestType for SeriesRequest {}

impl HTTPRequestType for SeriesRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::GetSeries }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::COLLECTION, self.collection.as_deref());
        params.push(common::STUDY_INSTANCE_UID, self.study_instance_uid.as_deref());
        params.push(common::MODALITY, self.modality.as_deref());
        params.push(common::SERIES_INSTANCE_UID, self.series_instance_uid.as_deref());
        params.push(common::BODY_PART_EXAMINED, self.body_part_examined.as_deref());
        params.push(common::MANUFACTURER, self.manufacturer.as_deref());
        params.push(common::MANUFACTURER_MODEL_NAME, self.manufacturer_model_name.as_deref());
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
