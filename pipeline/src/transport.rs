//! Single-attempt HTTP exchange with the analysis endpoint.

use std::time::Duration;

use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use menulens_core::ScanError;

use crate::multipart::MultipartBody;

/// Per-request timeout (connection establishment included).
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Bound on the whole transfer.
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(300);

/// Thin wrapper around one shared `reqwest::Client`.
///
/// Constructed explicitly and passed to the upload flow — the connection
/// pool is reused across calls without hiding behind a process-wide
/// singleton. Configuration is read-only after construction.
pub struct TransportClient {
    http: reqwest::Client,
}

impl TransportClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(TRANSFER_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// POST a multipart body and return `(status, response bytes)`.
    ///
    /// A non-2xx status is not an error at this layer; only network-level
    /// failures are. Single attempt, no retry, no backoff.
    pub async fn post_multipart(
        &self,
        url: &str,
        body: MultipartBody,
    ) -> Result<(u16, Vec<u8>), ScanError> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, body.content_type())
            .body(body.bytes)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(classify)?;
        debug!(status, bytes = bytes.len(), "Upload exchange complete");
        Ok((status, bytes.to_vec()))
    }
}

fn classify(err: reqwest::Error) -> ScanError {
    if err.is_timeout() {
        ScanError::TransportTimeout
    } else {
        ScanError::TransportUnreachable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_non_2xx_is_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/scan"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = TransportClient::new().unwrap();
        let body = MultipartBody::build(b"jpeg", "menu_image.jpg");
        let (status, bytes) = client
            .post_multipart(&format!("{}/scan", server.uri()), body)
            .await
            .unwrap();
        assert_eq!(status, 500);
        assert_eq!(bytes, b"boom");
    }

    #[tokio::test]
    async fn test_sends_multipart_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header_exists("content-type"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = TransportClient::new().unwrap();
        let body = MultipartBody::build(b"jpeg", "menu_image.jpg");
        client.post_multipart(&server.uri(), body).await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_failure_is_unreachable() {
        let client = TransportClient::new().unwrap();
        let body = MultipartBody::build(b"jpeg", "menu_image.jpg");
        // Port 9 (discard) on loopback, nothing listens there.
        let err = client
            .post_multipart("http://127.0.0.1:9", body)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ScanError::TransportUnreachable(_) | ScanError::TransportTimeout
        ));
    }
}
