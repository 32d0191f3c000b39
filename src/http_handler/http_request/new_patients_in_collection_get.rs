use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `NewPatientsInCollection` endpoint: patients added
/// to a collection since the given date. The service requires `Collection`
/// and `Date`.
#[derive(Debug, Default)]
pub struct NewPatientsInCollectionRequest {
    pub collection: Option<String>,
    pub date: Option<String>,
    pub format: OutputFormat,
}

impl NewPatientsInCollectionRequest {
    pub fn new(collection: &str, date: &str) -> Self {
        Self {
            collection: Some(String::from(collection)),
            date: Some(String::from(date)),
            ..Self::default()
        }
    }
}

impl NoBodyHTTPRequestType for NewPatientsInCollectionRequest {}

impl HTTPRequestType for NewPatientsInCollectionRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::NewPatientsInCollection }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::COLLECTION, self.collection.as_deref());
        params.push(common::DATE, self.date.as_deref());
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
