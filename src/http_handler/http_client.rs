use super::http_request::request_common::QueryParams;
use super::http_response::response_common::ResponseError;
use reqwest::header::{AUTHORIZATION, HeaderMap};

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// against the archive's data API.
///
/// The client holds the service root and the caller's opaque credential
/// string. Both are stored verbatim and never validated here; a malformed
/// base URL or credential only surfaces once the service rejects the
/// resulting request. Beyond these two fields the client is stateless, so
/// one instance can be shared across tasks freely.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL of the data API, prepended to all endpoint path segments.
    base_url: String,
    /// Opaque credential string forwarded in the `Authorization` header.
    credentials: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` for the given service root.
    ///
    /// No request timeout is configured; the transport's defaults apply.
    ///
    /// # Arguments
    /// * `base_url` – The root URL of the data API (e.g.,
    ///   `"https://services.cancerimagingarchive.net/services/v3/TCIA/query"`).
    /// * `credentials` – The opaque credential string, forwarded as-is.
    ///
    /// # Returns
    /// A configured `HTTPClient` instance.
    pub fn new(base_url: &str, credentials: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder().build().unwrap(),
            base_url: String::from(base_url),
            credentials: String::from(credentials),
        }
    }

    /// Performs the single authenticated GET this client exists for.
    ///
    /// The encoded query string is appended to `endpoint_url` even when no
    /// filter survived compaction, leaving a bare trailing `?`. The returned
    /// `reqwest::Response` is live: status and headers are readable, the body
    /// is unread and ownership of it passes to the caller.
    ///
    /// Transport failures are mapped onto `ResponseError`; non-2xx statuses
    /// are not inspected here, response types unwrap those.
    pub async fn execute(
        &self,
        endpoint_url: &str,
        query_params: &QueryParams,
        header_params: HeaderMap,
    ) -> Result<reqwest::Response, ResponseError> {
        let request_url = format!("{endpoint_url}{}", query_params.query_string());
        crate::event!("GET {request_url}");
        let response = self
            .client
            .get(&request_url)
            .headers(header_params)
            .header(AUTHORIZATION, self.credentials_header())
            .send()
            .await?;
        Ok(response)
    }

    /// `Authorization` value: the literal scheme token `ldap`, one space,
    /// then the raw credential string. No encoding or hashing is applied.
    fn credentials_header(&self) -> String { format!("ldap {}", self.credentials) }

    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }
}
