//! Queue entries and their sanitized, observer-facing form

use serde::{Deserialize, Serialize};

/// A raw queue element as reported by the controller.
///
/// Carries whatever display fields the underlying session exposes. Only a
/// sanitized subset is republished to observers; see [`QueueItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Stable id assigned by the session, unique within one queue
    pub queue_id: u64,

    /// Display title of the entry
    pub title: Option<String>,

    /// Artist name, when known
    pub artist: Option<String>,

    /// Artwork location understood by the host UI
    pub art_uri: Option<String>,
}

impl QueueEntry {
    /// Entry with a title and id, remaining fields absent.
    #[must_use]
    pub fn titled(queue_id: u64, title: impl Into<String>) -> Self {
        Self {
            queue_id,
            title: Some(title.into()),
            artist: None,
            art_uri: None,
        }
    }
}

/// Sanitized (title, queue id) pair republished to observers.
///
/// A queue is an ordered `Vec<QueueItem>`; insertion order is playback
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    /// Stable id copied from the source entry
    pub queue_id: u64,

    /// Display title copied from the source entry
    pub title: Option<String>,
}

impl From<QueueEntry> for QueueItem {
    fn from(entry: QueueEntry) -> Self {
        Self {
            queue_id: entry.queue_id,
            title: entry.title,
        }
    }
}

impl From<&QueueEntry> for QueueItem {
    fn from(entry: &QueueEntry) -> Self {
        Self {
            queue_id: entry.queue_id,
            title: entry.title.clone(),
        }
    }
}
