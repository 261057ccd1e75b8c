//! Lyra Session
//!
//! Observable playback-session state for Lyra front-ends.
//!
//! This crate provides:
//! - Observable value cells with replay for late subscribers
//! - A playback model that mirrors a host-owned media controller
//! - Safe controller replacement (detach before attach, stale events
//!   suppressed)
//! - Sanitized queue republishing with a derived has-queue flag
//!
//! # Architecture
//!
//! `lyra-session` owns no playback. The host hands it a
//! [`MediaController`](lyra_core::MediaController) handle; the model
//! registers a callback on it and republishes whatever that controller
//! emits. Swapping handles is the host's business: the model only
//! guarantees that at most one callback is registered at a time and that
//! it always belongs to the most recently supplied handle.
//!
//! # Example: Observable Cells
//!
//! ```rust
//! use lyra_session::Observable;
//!
//! let cell = Observable::new();
//! let early = cell.subscribe();
//!
//! cell.publish("first");
//! cell.publish("second");
//!
//! // Existing subscribers saw every value; late ones get the latest.
//! assert_eq!(early.try_recv(), Ok("first"));
//! let late = cell.subscribe();
//! assert_eq!(late.try_recv(), Ok("second"));
//!
//! // Consumers get a read-only watch instead of the writable cell.
//! let watch = cell.watch();
//! assert_eq!(watch.get(), Some("second"));
//! ```
//!
//! # Example: Mirroring a Controller
//!
//! ```rust
//! use lyra_core::{CallbackToken, MediaController, SessionCallback};
//! use lyra_session::PlaybackModel;
//! use std::sync::Arc;
//!
//! // A controller that accepts registrations and never emits.
//! struct SilentController;
//!
//! impl MediaController for SilentController {
//!     fn register_callback(
//!         &self,
//!         _callback: Arc<dyn SessionCallback>,
//!     ) -> lyra_core::Result<CallbackToken> {
//!         Ok(CallbackToken::new(1))
//!     }
//!
//!     fn unregister_callback(&self, _token: CallbackToken) -> lyra_core::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let model = PlaybackModel::new();
//! let metadata = model.metadata().subscribe();
//!
//! model.set_controller(Some(Arc::new(SilentController)))?;
//!
//! // The handle is observable right away; metadata stays unset until the
//! // controller actually emits.
//! assert!(model.controller().get().is_some());
//! assert!(metadata.try_recv().is_err());
//! # Ok::<(), lyra_session::SessionError>(())
//! ```

mod error;
mod model;
mod observable;

// Public exports
pub use error::{Result, SessionError};
pub use model::PlaybackModel;
pub use observable::{Observable, Watch};
