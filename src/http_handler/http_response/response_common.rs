use strum_macros::Display;

/// Responses whose payload comes back as serialized text, in whatever
/// `format` the request asked the service for.
pub trait TextBodyHTTPResponseType: HTTPResponseType {
    async fn parse_text_body(response: reqwest::Response) -> Result<String, ResponseError> {
        Ok(response.text().await?)
    }
}

/// Responses streamed back as raw bytes, i.e. the image archives.
pub trait ByteStreamResponseType: HTTPResponseType {}

pub trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    /// Lets 2xx replies through; anything else is turned into a structured
    /// error carrying the status code and the readable error body.
    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let code = response.status().as_u16();
            let body = response.text().await?;
            Err(ResponseError::HttpStatus { code, body })
        }
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    /// The server answered with a non-2xx status.
    #[strum(to_string = "HTTP {code}")]
    HttpStatus { code: u16, body: String },
    NoConnection,
    Timeout,
    Unknown,
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else {
            ResponseError::Unknown
        }
    }
}
