//! Lyra Core
//!
//! Platform-agnostic core types, traits, and error handling for Lyra.
//!
//! This crate provides the foundational building blocks shared by every
//! Lyra front-end: the snapshot types a media session reports and the
//! capability seam a host-owned controller implements.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `MediaMetadata`, `PlaybackState`, `QueueEntry`, `QueueItem`
//! - **Core Traits**: `MediaController`, `SessionCallback`
//! - **Error Handling**: Unified `LyraError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use lyra_core::types::{MediaMetadata, QueueEntry, QueueItem};
//!
//! // Snapshot for the item a session is playing
//! let metadata = MediaMetadata::titled("Golden Hour");
//! assert_eq!(metadata.artist, None);
//!
//! // Raw queue entries sanitize down to (title, queue id) pairs
//! let entry = QueueEntry::titled(1, "Golden Hour");
//! let item = QueueItem::from(entry);
//! assert_eq!(item.queue_id, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{LyraError, Result};
pub use traits::{CallbackToken, ControllerHandle, MediaController, SessionCallback};

// Export all types
pub use types::{MediaMetadata, PlaybackState, PlaybackStatus, QueueEntry, QueueItem};
