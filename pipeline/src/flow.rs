//! Top of the scan flow: busy-flag gating, error-to-message conversion, and
//! handoff to the presenter.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{error, warn};

use menulens_core::{Menu, Presenter, RawImage};

use crate::uploader::MenuUploader;

/// Runs upload cycles one at a time and reports outcomes to a [`Presenter`].
///
/// Every pipeline failure is converted to a single user-visible message and
/// the flow resets for a fresh attempt; nothing here is fatal.
pub struct ScanFlow<P: Presenter> {
    uploader: MenuUploader,
    presenter: P,
    busy: AtomicBool,
}

impl<P: Presenter> ScanFlow<P> {
    pub fn new(uploader: MenuUploader, presenter: P) -> Self {
        Self {
            uploader,
            presenter,
            busy: AtomicBool::new(false),
        }
    }

    /// Whether an upload is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Upload one captured frame. A trigger that arrives while another
    /// upload is in flight is a logged no-op — no queueing.
    pub async fn scan(&self, image: RawImage) -> Option<Menu> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Upload already in flight, ignoring trigger");
            return None;
        }

        let result = self.uploader.upload(&image).await;
        // Reset-to-retry: the flag clears on every outcome.
        self.busy.store(false, Ordering::SeqCst);

        match result {
            Ok(menu) => {
                self.presenter.present_menu(&menu);
                Some(menu)
            }
            Err(err) => {
                error!(error = %err, "Menu scan failed");
                self.presenter.present_error(&err.user_message());
                None
            }
        }
    }
}
