use std::sync::Arc;

use tokio::sync::{oneshot, watch};
use tracing::{debug, info, warn};

use menulens_core::{Authorization, CaptureDevice, Facing, RawImage, ScanError};

/// Why a session ended up in [`SessionState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionFailure {
    PermissionDenied,
    NoDeviceAvailable,
    CaptureError(String),
}

impl SessionFailure {
    pub fn to_scan_error(&self) -> ScanError {
        match self {
            SessionFailure::PermissionDenied => ScanError::PermissionDenied,
            SessionFailure::NoDeviceAvailable => ScanError::NoDeviceAvailable,
            SessionFailure::CaptureError(msg) => ScanError::CaptureError(msg.clone()),
        }
    }
}

/// Lifecycle of one capture cycle. `Captured` is terminal for the cycle;
/// [`CaptureSession::rearm`] returns to `Ready` for the next shot. There is
/// no automatic retry out of `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthorized,
    RequestingPermission,
    Configuring,
    Ready,
    Capturing,
    Captured(RawImage),
    Failed(SessionFailure),
}

/// Drives a [`CaptureDevice`] through permission, configuration, and
/// single-shot capture.
pub struct CaptureSession<D: CaptureDevice + 'static> {
    device: Arc<D>,
    state: SessionState,
    facing: Option<Facing>,
}

impl<D: CaptureDevice + 'static> CaptureSession<D> {
    pub fn new(device: Arc<D>) -> Self {
        Self {
            device,
            state: SessionState::Unauthorized,
            facing: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The facing selected during configuration, if any.
    pub fn facing(&self) -> Option<Facing> {
        self.facing
    }

    /// Resolve camera permission. An already-authorized device skips the
    /// prompt and goes straight to `Configuring`.
    pub async fn authorize(&mut self) {
        match self.device.check_permission() {
            Authorization::Authorized => {
                debug!("Camera already authorized");
                self.state = SessionState::Configuring;
            }
            Authorization::Denied => {
                warn!("Camera permission previously denied");
                self.state = SessionState::Failed(SessionFailure::PermissionDenied);
            }
            Authorization::NotDetermined => {
                self.state = SessionState::RequestingPermission;
                if self.device.request_permission().await {
                    info!("Camera permission granted");
                    self.state = SessionState::Configuring;
                } else {
                    warn!("Camera permission denied by user");
                    self.state = SessionState::Failed(SessionFailure::PermissionDenied);
                }
            }
        }
    }

    /// Select a camera (rear preferred, front fallback) and start the device
    /// session on a background task. The state flips to `Ready` once the
    /// readiness signal arrives.
    pub async fn configure(&mut self) {
        if self.state != SessionState::Configuring {
            debug!(state = ?self.state, "configure() called outside Configuring");
            return;
        }

        let facing = if self.device.has_camera(Facing::Rear) {
            Facing::Rear
        } else if self.device.has_camera(Facing::Front) {
            // Single-camera environments (e.g. laptops, emulators).
            Facing::Front
        } else {
            warn!("No camera available for either facing");
            self.state = SessionState::Failed(SessionFailure::NoDeviceAvailable);
            return;
        };
        self.facing = Some(facing);
        info!(facing = ?facing, "Selected capture device");

        let (ready_tx, mut ready_rx) = watch::channel::<Option<Result<(), String>>>(None);
        let device = Arc::clone(&self.device);
        tokio::spawn(async move {
            let started = device
                .start_session(facing)
                .await
                .map_err(|e| e.to_string());
            let _ = ready_tx.send(Some(started));
        });

        let started = match ready_rx.changed().await {
            Ok(()) => ready_rx.borrow().clone(),
            Err(_) => None,
        };
        match started {
            Some(Ok(())) => {
                info!("Capture session running");
                self.state = SessionState::Ready;
            }
            Some(Err(msg)) => {
                warn!(error = %msg, "Capture session failed to start");
                self.state = SessionState::Failed(SessionFailure::CaptureError(msg));
            }
            None => {
                warn!("Session start task dropped before signalling readiness");
                self.state = SessionState::Failed(SessionFailure::CaptureError(
                    "session start aborted".to_string(),
                ));
            }
        }
    }

    /// Trigger a single-shot capture. The hardware callback is funnelled
    /// through one oneshot channel per invocation.
    pub async fn capture(&mut self) -> Result<RawImage, ScanError> {
        match &self.state {
            SessionState::Ready => {}
            SessionState::Failed(failure) => return Err(failure.to_scan_error()),
            other => {
                return Err(ScanError::CaptureError(format!(
                    "capture triggered in state {other:?}"
                )))
            }
        }
        self.state = SessionState::Capturing;

        let (tx, rx) = oneshot::channel();
        let device = Arc::clone(&self.device);
        tokio::spawn(async move {
            let _ = tx.send(device.capture_photo().await);
        });

        match rx.await {
            Ok(Ok(image)) => {
                info!(
                    width = image.width,
                    height = image.height,
                    "Photo captured"
                );
                self.state = SessionState::Captured(image.clone());
                Ok(image)
            }
            Ok(Err(err)) => {
                warn!(error = %err, "Hardware capture failed");
                let failure = SessionFailure::CaptureError(err.to_string());
                self.state = SessionState::Failed(failure.clone());
                Err(failure.to_scan_error())
            }
            Err(_) => {
                let failure =
                    SessionFailure::CaptureError("capture task dropped".to_string());
                self.state = SessionState::Failed(failure.clone());
                Err(failure.to_scan_error())
            }
        }
    }

    /// Return a `Captured` session to `Ready` for a subsequent capture.
    pub fn rearm(&mut self) {
        if matches!(self.state, SessionState::Captured(_)) {
            self.state = SessionState::Ready;
        }
    }
}
