use super::super::common::HTTPError;
use super::response_common::{ByteStreamResponseType, HTTPResponseType, ResponseError};
use futures::StreamExt;
use std::path::Path;
use std::pin::Pin;
use tokio::io::AsyncWriteExt;

/// Header the service sets on archive responses with the number of images
/// packed into the archive.
const IMAGE_COUNT_HEADER: &str = "imageCount";

/// A live image-archive download.
///
/// Owns the unread byte stream of the response body. The caller decides
/// whether to stream it to disk or collect it in memory; dropping the handle
/// drops the stream and with it the underlying connection.
pub struct ImageArchive {
    stream: Pin<Box<dyn futures_core::Stream<Item = reqwest::Result<bytes::Bytes>> + Send>>,
    content_length: Option<u64>,
    image_count: Option<u32>,
}

impl std::fmt::Debug for ImageArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageArchive")
            .field("content_length", &self.content_length)
            .field("image_count", &self.image_count)
            .finish_non_exhaustive()
    }
}

impl ImageArchive {
    /// Byte length the server declared for the archive, if any.
    pub fn content_length(&self) -> Option<u64> { self.content_length }

    /// Number of images in the archive per the `imageCount` header, if the
    /// server sent one.
    pub fn image_count(&self) -> Option<u32> { self.image_count }

    /// Streams the archive to `path` chunk by chunk.
    ///
    /// # Returns
    /// The number of bytes written.
    pub async fn save_to<P: AsRef<Path>>(mut self, path: P) -> Result<u64, HTTPError> {
        let mut file = tokio::fs::File::create(path.as_ref()).await?;
        let mut written: u64 = 0;
        while let Some(chunk) = self.stream.next().await {
            let chunk = chunk.map_err(ResponseError::from)?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        Ok(written)
    }

    /// Drains the whole archive into memory.
    pub async fn collect(mut self) -> Result<Vec<u8>, HTTPError> {
        let mut collected: Vec<u8> = Vec::new();
        while let Some(chunk) = self.stream.next().await {
            let chunk = chunk.map_err(ResponseError::from)?;
            collected.extend_from_slice(&chunk);
        }
        Ok(collected)
    }
}

/// Response type for the `getImage` and `getSingleImage` endpoints.
pub struct ImageArchiveResponse {}

impl ByteStreamResponseType for ImageArchiveResponse {}

impl HTTPResponseType for ImageArchiveResponse {
    type ParsedResponseType = ImageArchive;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let response = Self::unwrap_return_code(response).await?;
        let content_length = response.content_length();
        let image_count = response
            .headers()
            .get(IMAGE_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        Ok(ImageArchive {
            stream: Box::pin(response.bytes_stream()),
            content_length,
            image_count,
        })
    }
}
