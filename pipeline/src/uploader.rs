//! Orchestration of one upload cycle: encode → frame → send → interpret.

use tracing::info;

use menulens_core::{Menu, RawImage, ScanError};

use crate::encoder::encode_jpeg;
use crate::interpret::interpret;
use crate::multipart::MultipartBody;
use crate::transport::TransportClient;

/// Filename the endpoint expects for the uploaded part.
pub const UPLOAD_FILENAME: &str = "menu_image.jpg";

/// Sends a captured frame to the analysis endpoint and decodes the result.
pub struct MenuUploader {
    transport: TransportClient,
    endpoint: String,
}

impl MenuUploader {
    pub fn new(transport: TransportClient, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// Run one full upload cycle. Single network suspension point, single
    /// attempt. Status gating happens before any body interpretation.
    pub async fn upload(&self, image: &RawImage) -> Result<Menu, ScanError> {
        let jpeg = encode_jpeg(image)?;
        let body = MultipartBody::build(&jpeg, UPLOAD_FILENAME);
        info!(
            endpoint = %self.endpoint,
            payload_bytes = jpeg.len(),
            "Uploading menu photo"
        );

        let (status, bytes) = self.transport.post_multipart(&self.endpoint, body).await?;
        if !(200..=299).contains(&status) {
            return Err(ScanError::ServerError(status));
        }
        interpret(&bytes)
    }
}
