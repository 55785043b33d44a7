use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use menulens_core::{Authorization, CaptureDevice, Facing, RawImage, ScanError};

/// A capture device backed by an image file on disk.
///
/// This is the "select from photos" path: instead of live hardware, the
/// photo already exists and "capturing" means decoding it to RGB8. Always
/// authorized, presents itself as a single rear camera.
pub struct FileCaptureDevice {
    path: PathBuf,
}

impl FileCaptureDevice {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CaptureDevice for FileCaptureDevice {
    fn check_permission(&self) -> Authorization {
        Authorization::Authorized
    }

    async fn request_permission(&self) -> bool {
        true
    }

    fn has_camera(&self, facing: Facing) -> bool {
        matches!(facing, Facing::Rear)
    }

    async fn start_session(&self, _facing: Facing) -> Result<(), ScanError> {
        Ok(())
    }

    async fn capture_photo(&self) -> Result<RawImage, ScanError> {
        let path = self.path.clone();
        let decoded = tokio::task::spawn_blocking(move || image::open(&path))
            .await
            .map_err(|e| ScanError::CaptureError(e.to_string()))?
            .map_err(|e| ScanError::CaptureError(e.to_string()))?;

        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        debug!(path = %self.path.display(), width, height, "Decoded photo from disk");
        Ok(RawImage::rgb8(width, height, Bytes::from(rgb.into_raw())))
    }
}
