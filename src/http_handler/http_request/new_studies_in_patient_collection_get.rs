use super::super::common::{self, Endpoint, OutputFormat};
use super::super::http_response::query_result::QueryResultResponse;
use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, QueryParams};

/// Request type for the `NewStudiesInPatientCollection` endpoint: studies
/// added to a collection since the given date, optionally narrowed to one
/// patient. The service requires `Collection` and `Date`.
#[derive(Debug, Default)]
pub struct NewStudiesInPatientCollectionRequest {
    pub collection: Option<String>,
    pub date: Option<String>,
    pub patient_id: Option<String>,
    pub format: OutputFormat,
}

impl NewStudiesInPatientCollectionRequest {
    pub fn new(collection: &str, date: &str) -> Self {
        Self {
            collection: Some(String::from(collection)),
            date: Some(String::from(date)),
            ..Self::default()
        }
    }
}

impl NoBodyHTTPRequestType for NewStudiesInPatientCollectionRequest {}

impl HTTPRequestType for NewStudiesInPatientCollectionRequest {
    type Response = QueryResultResponse;
    fn endpoint(&self) -> Endpoint { Endpoint::NewStudiesInPatientCollection }
    fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(common::COLLECTION, self.collection.as_deref());
        params.push(common::DATE, self.date.as_deref());
        params.push(common::PATIENT_ID, self.patient_id.as_deref());
        params.push(common::FORMAT, Some(self.format.to_string().as_str()));
        params
    }
}
