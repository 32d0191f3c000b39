use super::super::common::{self, Endpoint};
use super::super::http_response::image_archive::ImageArchiveResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `getImage` endpoint: the image archive of a whole
/// series.
///
/// The service requires `SeriesInstanceUID`. Like every other filter it is
/// forwarded without validation: a `Default`-constructed request simply
/// goes out lacking the key, and the server rejects it. No `format`
/// parameter exists here; the reply is always a binary archive.
#[derive(Debug, Default)]
pub struct ImageRequest {
    pub series_instance_uid: Option<String>,
}

impl ImageRequest {
    pub fn new(series_instance_uid: &str) -> Self {
        Self { series_instance_uid: Some(String::from(series_instance_uid)) }
    }
}

impl NoBodyHTTPRequestType for ImageRequest {}

impl HTTPRequestType for ImageRequest {
    type Response = ImageArchiveResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::GetImage }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::SERIES_INSTANCE_UID, self.series_instance_uid.as_deref());
        params
    }
}
