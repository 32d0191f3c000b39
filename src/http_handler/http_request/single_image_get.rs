use super::super::common::{self, Endpoint};
use super::super::http_response::image_archive::ImageArchiveResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `getSingleImage` endpoint: the archive of one
/// instance out of a series. The service requires both `SOPInstanceUID` and
/// `SeriesInstanceUID`; the reply is always a binary archive.
#[derive(Debug, Default)]
pub struct SingleImageRequest {
    pub sop_instance_uid: Option<String>,
    pub series_instance_uid: Option<String>,
}

impl SingleImageRequest {
    pub fn new(sop_instance_uid: &str, series_instance_uid: &str) -> Self {
        Self {
            sop_instance_uid: Some(String::from(sop_instance_uid)),
            series_instance_uid: Some(String::from(series_instance_uid)),
        }
    }
}

impl NoBodyHTTPRequestType for SingleImageRequest {}

impl HTTPRequestType for SingleImageRequest {
    type Response = ImageArchiveResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::GetSingleImage }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::SOP_INSTANCE_UID, self.sop_instance_uid.as_deref());
        params.push(common::SERIES_INSTANCE_UID, self.series_instance_uid.as_deref());
        params
    }
}
