use super::super::common::{Endpoint, HTTPError};
use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::HTTPResponseType;
use url::form_urlencoded;

/// Ordered collection of query parameters for a single request.
///
/// Values are compacted on the way in: an absent or empty value drops the
/// key entirely, so only filters the caller actually supplied reach the
/// wire. Insertion order is preserved: the encoded string lists keys in the
/// order the endpoint's request type pushed them, never alphabetized.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self { Self(Vec::new()) }

    /// Appends `name=value` if `value` is present and non-empty.
    pub fn push(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(v) = value {
            if !v.is_empty() {
                self.0.push((name, String::from(v)));
            }
        }
    }

    /// The percent-encoded query string, leading `?` included.
    ///
    /// Pairs are encoded as `application/x-www-form-urlencoded` (spaces
    /// become `+`) and joined with `&`. When nothing survived compaction the
    /// result is the bare `?` suffix, which the service accepts.
    pub fn query_string(&self) -> String {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter().map(|(k, v)| (*k, v.as_str())))
            .finish();
        format!("?{encoded}")
    }
}

/// Contract shared by every endpoint request type: which endpoint the
/// request targets, the filters it forwards, and any extra headers.
pub trait HTTPRequestType {
    /// Response type describing how this endpoint's reply is read.
    type Response: HTTPResponseType;
    /// The endpoint this request is addressed to.
    fn endpoint(&self) -> Endpoint;
    /// The filters to forward, in the endpoint's documented order.
    fn query_params(&self) -> QueryParams;
    /// Additional request headers; authorization is attached by the client.
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
}

/// GET requests without a body, which is every operation the data API offers.
pub trait NoBodyHTTPRequestType: HTTPRequestType {
    /// Builds the fully qualified endpoint URL, executes the GET and hands
    /// the live response to the endpoint's response type.
    ///
    /// One network round-trip, no retries: the caller is suspended until the
    /// server replies or the transport fails.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let endpoint_url = format!("{}/{}", client.url(), self.endpoint());
        let response = client
            .execute(&endpoint_url, &self.query_params(), self.header_params())
            .await?;
        Ok(<Self::Response as HTTPResponseType>::read_response(response).await?)
    }
}
