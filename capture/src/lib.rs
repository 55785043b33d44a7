pub mod file_device;
pub mod session;

pub use file_device::FileCaptureDevice;
pub use session::{CaptureSession, SessionFailure, SessionState};
