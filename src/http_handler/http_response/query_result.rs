use super::response_common::{HTTPResponseType, ResponseError, TextBodyHTTPResponseType};

/// Response type shared by the metadata endpoints.
///
/// The payload is handed back unparsed. The service serializes it in the
/// `format` the request carried (json by default, or csv/html/xml), so
/// nothing stronger than `String` holds here.
pub struct QueryResultResponse {}

impl TextBodyHTTPResponseType for QueryResultResponse {}

impl HTTPResponseType for QueryResultResponse {
    type ParsedResponseType = String;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_text_body(resp).await
    }
}
