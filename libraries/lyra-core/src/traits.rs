//! Capability traits for host-owned media controllers

use crate::error::Result;
use crate::types::{MediaMetadata, PlaybackState, QueueEntry};
use std::sync::Arc;

/// Opaque shared handle to an externally owned media controller.
pub type ControllerHandle = Arc<dyn MediaController>;

/// Registration cookie issued by a controller.
///
/// Surrendering the token to [`MediaController::unregister_callback`]
/// revokes the registration it names. Tokens are only meaningful to the
/// controller that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackToken(u64);

impl CallbackToken {
    /// Wrap a controller-chosen raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The controller-chosen raw id.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// External playback session the host hands to the adapter.
///
/// Implementations front a real transport (local engine, remote renderer,
/// platform session). This seam carries no transport operations; it only
/// manages callback registration, and all playback control stays with the
/// host.
pub trait MediaController: Send + Sync {
    /// Begin delivering session events to `callback`.
    ///
    /// The returned token names this registration for later removal.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying session refuses the registration
    /// or is no longer reachable.
    fn register_callback(&self, callback: Arc<dyn SessionCallback>) -> Result<CallbackToken>;

    /// Stop delivering session events to a previously registered callback.
    ///
    /// # Errors
    ///
    /// Returns an error if `token` does not name a live registration on
    /// this controller.
    fn unregister_callback(&self, token: CallbackToken) -> Result<()>;
}

/// Event surface a controller pushes into.
///
/// Every method defaults to a no-op so implementations may handle only the
/// events they care about.
pub trait SessionCallback: Send + Sync {
    /// The currently playing item's metadata was replaced.
    fn on_metadata_changed(&self, _metadata: MediaMetadata) {}

    /// The transport state was replaced.
    fn on_playback_state_changed(&self, _state: PlaybackState) {}

    /// The play queue was replaced.
    ///
    /// `None` means the session has no queue at all, which is distinct
    /// from an empty queue.
    fn on_queue_changed(&self, _queue: Option<Vec<QueueEntry>>) {}
}
