//! Playback state adapter
//!
//! Mirrors a host-supplied media controller into observable cells for UI
//! layers. The host swaps controllers in and out; the model keeps at most
//! one callback registration alive, always against the most recently
//! supplied handle, and republishes that controller's events.

use crate::error::Result;
use crate::observable::{Observable, Watch};
use lyra_core::{
    CallbackToken, ControllerHandle, MediaMetadata, PlaybackState, QueueEntry, QueueItem,
    SessionCallback,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, trace, warn};

/// Event sink bound to a single controller attachment.
///
/// Each attachment gets a fresh sink; superseding the attachment disarms
/// it. A controller that keeps delivering after `unregister_callback` hits
/// a disarmed sink and cannot reach the cells.
struct CallbackSink {
    armed: AtomicBool,
    metadata: Observable<MediaMetadata>,
    playback_state: Observable<PlaybackState>,
    queue: Observable<Option<Vec<QueueItem>>>,
    has_queue: Observable<bool>,
}

impl CallbackSink {
    fn disarm(&self) {
        self.armed.store(false, Ordering::Release);
    }

    fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }
}

impl SessionCallback for CallbackSink {
    fn on_metadata_changed(&self, metadata: MediaMetadata) {
        if !self.is_armed() {
            trace!("Ignoring metadata event from detached controller");
            return;
        }
        self.metadata.publish(metadata);
    }

    fn on_playback_state_changed(&self, state: PlaybackState) {
        if !self.is_armed() {
            trace!("Ignoring playback-state event from detached controller");
            return;
        }
        self.playback_state.publish(state);
    }

    fn on_queue_changed(&self, queue: Option<Vec<QueueEntry>>) {
        if !self.is_armed() {
            trace!("Ignoring queue event from detached controller");
            return;
        }
        let sanitized: Option<Vec<QueueItem>> =
            queue.map(|entries| entries.into_iter().map(QueueItem::from).collect());
        let has_items = sanitized.as_ref().is_some_and(|items| !items.is_empty());
        // Queue first, flag second: one logical update per queue event.
        self.queue.publish(sanitized);
        self.has_queue.publish(has_items);
    }
}

/// Record of the active callback registration.
struct Attachment {
    controller: ControllerHandle,
    token: CallbackToken,
    sink: Arc<CallbackSink>,
}

impl Attachment {
    /// Disarm the sink, then surrender the token on the issuing handle.
    ///
    /// The order matters: once disarmed, nothing the old controller does
    /// can reach the cells, so a failed unregister costs nothing but a
    /// lingering registration on the controller side.
    fn release(self) {
        self.sink.disarm();
        if let Err(err) = self.controller.unregister_callback(self.token) {
            warn!("Failed to unregister superseded callback: {err}");
        }
    }
}

/// Observable mirror of a host-owned media controller.
///
/// The host supplies (and replaces) the controller handle through
/// [`set_controller`](Self::set_controller); the model detaches the
/// previous controller's callback before attaching to the new one and
/// republishes controller events through its cells:
///
/// - [`controller`](Self::controller): the latest supplied handle
/// - [`metadata`](Self::metadata): current item snapshot
/// - [`playback_state`](Self::playback_state): transport snapshot
/// - [`queue`](Self::queue): sanitized queue, `None` while the session
///   reports no queue
/// - [`has_queue`](Self::has_queue): `true` iff the queue is present and
///   non-empty
///
/// Every cell starts unset: observers hear nothing until the attached
/// controller actually emits. The accessors return read-only [`Watch`]
/// handles, so only controller events (and `set_controller` itself) write
/// to the cells. Dropping the model releases the active registration.
pub struct PlaybackModel {
    controller: Observable<Option<ControllerHandle>>,
    metadata: Observable<MediaMetadata>,
    playback_state: Observable<PlaybackState>,
    queue: Observable<Option<Vec<QueueItem>>>,
    has_queue: Observable<bool>,
    attachment: Mutex<Option<Attachment>>,
}

impl PlaybackModel {
    /// Create a model with every cell unset and no controller attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: Observable::new(),
            metadata: Observable::new(),
            playback_state: Observable::new(),
            queue: Observable::new(),
            has_queue: Observable::new(),
            attachment: Mutex::new(None),
        }
    }

    /// Supply a new controller handle, or `None` to detach.
    ///
    /// Any previous attachment is released first (disarm, then
    /// unregister), so a superseded controller's late events never reach
    /// the cells. A failed unregister is logged and does not abort the
    /// swap.
    ///
    /// On success the new handle is published on
    /// [`controller`](Self::controller). If the new controller rejects the
    /// registration the error propagates, the handle cell keeps its prior
    /// value, and the model stays detached; previously mirrored snapshots
    /// are retained either way.
    ///
    /// # Errors
    ///
    /// Returns an error when the new controller refuses
    /// `register_callback`.
    pub fn set_controller(&self, controller: Option<ControllerHandle>) -> Result<()> {
        let mut attachment = self.attachment.lock().unwrap();

        if let Some(previous) = attachment.take() {
            debug!("Detaching callback from superseded controller");
            previous.release();
        }

        match controller {
            Some(controller) => {
                let sink = self.armed_sink();
                let token = controller.register_callback(sink.clone())?;
                debug!("Attached callback to new controller");
                *attachment = Some(Attachment {
                    controller: controller.clone(),
                    token,
                    sink,
                });
                self.controller.publish(Some(controller));
            }
            None => {
                self.controller.publish(None);
            }
        }

        Ok(())
    }

    /// Latest controller handle supplied by the host.
    ///
    /// Unset until the first [`set_controller`](Self::set_controller)
    /// call; `None` after an explicit detach.
    #[must_use]
    pub fn controller(&self) -> Watch<Option<ControllerHandle>> {
        self.controller.watch()
    }

    /// Latest metadata snapshot emitted by the attached controller.
    #[must_use]
    pub fn metadata(&self) -> Watch<MediaMetadata> {
        self.metadata.watch()
    }

    /// Latest playback-state snapshot emitted by the attached controller.
    #[must_use]
    pub fn playback_state(&self) -> Watch<PlaybackState> {
        self.playback_state.watch()
    }

    /// Latest sanitized queue.
    ///
    /// Republishes `None` when the session reports no queue, which stays
    /// observably distinct from an empty queue.
    #[must_use]
    pub fn queue(&self) -> Watch<Option<Vec<QueueItem>>> {
        self.queue.watch()
    }

    /// Whether the last queue event carried a non-empty queue.
    ///
    /// Updated together with [`queue`](Self::queue) on every queue event;
    /// a missing queue and an empty queue both yield `false`.
    #[must_use]
    pub fn has_queue(&self) -> Watch<bool> {
        self.has_queue.watch()
    }

    fn armed_sink(&self) -> Arc<CallbackSink> {
        Arc::new(CallbackSink {
            armed: AtomicBool::new(true),
            metadata: self.metadata.clone(),
            playback_state: self.playback_state.clone(),
            queue: self.queue.clone(),
            has_queue: self.has_queue.clone(),
        })
    }
}

impl Default for PlaybackModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PlaybackModel {
    fn drop(&mut self) {
        if let Some(attachment) = self.attachment.lock().unwrap().take() {
            attachment.release();
        }
    }
}
