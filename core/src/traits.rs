use async_trait::async_trait;

use crate::error::ScanError;
use crate::image::RawImage;
use crate::menu::Menu;

/// Camera authorization state as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Authorized,
    NotDetermined,
    Denied,
}

/// Which way a camera points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Rear,
    Front,
}

/// Trait for the hardware (or simulated) capture backend consumed by the
/// capture session.
///
/// Implementations own device discovery and the asynchronous single-shot
/// capture; the session state machine owns permission flow and fallback.
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    /// Current permission state, without prompting.
    fn check_permission(&self) -> Authorization;

    /// Prompt for permission. Returns whether access was granted.
    async fn request_permission(&self) -> bool;

    /// Whether a camera with the given facing exists.
    fn has_camera(&self, facing: Facing) -> bool;

    /// Start the device session for the given facing.
    async fn start_session(&self, facing: Facing) -> Result<(), ScanError>;

    /// Capture a single photo. One result per call.
    async fn capture_photo(&self) -> Result<RawImage, ScanError>;
}

/// Receives the outcome of a scan. Rendering is out of scope; this is the
/// seam the UI layer plugs into.
pub trait Presenter: Send + Sync {
    fn present_menu(&self, menu: &Menu);
    fn present_error(&self, message: &str);
}
