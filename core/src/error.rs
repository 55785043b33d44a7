use thiserror::Error;

/// Top-level error type for the MenuLens scan pipeline.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("image encoding failed: {0}")]
    EncodingFailed(String),

    #[error("endpoint unreachable: {0}")]
    TransportUnreachable(String),

    #[error("request timed out")]
    TransportTimeout,

    #[error("server returned status {0}")]
    ServerError(u16),

    #[error("no known response shape matched: {source}")]
    Decoding {
        #[source]
        source: serde_json::Error,
        /// Raw response text, kept for diagnostic logging only.
        raw: String,
    },

    #[error("camera permission denied")]
    PermissionDenied,

    #[error("no capture device available")]
    NoDeviceAvailable,

    #[error("photo capture failed: {0}")]
    CaptureError(String),
}

impl ScanError {
    /// The single user-visible message for this failure. Structural detail
    /// (serde errors, raw response bodies) stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ScanError::EncodingFailed(_) => {
                "Could not prepare the photo for upload.".to_string()
            }
            ScanError::TransportUnreachable(_) | ScanError::TransportTimeout => {
                "Network error. Please check your connection and try again.".to_string()
            }
            ScanError::ServerError(status) => {
                format!("The menu service returned an error (status {status}).")
            }
            ScanError::Decoding { .. } => "Failed to parse menu data.".to_string(),
            ScanError::PermissionDenied => "Camera access was denied.".to_string(),
            ScanError::NoDeviceAvailable => {
                "No camera is available on this device.".to_string()
            }
            ScanError::CaptureError(_) => "Could not capture the photo.".to_string(),
        }
    }
}
