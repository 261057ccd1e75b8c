//! Metadata snapshot for the currently playing item

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Immutable description of the currently playing item.
///
/// Replaced wholesale whenever the controller reports a change; fields are
/// never patched in place. Everything is optional because sessions report
/// whatever their backing source happens to know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMetadata {
    /// Display title of the item
    pub title: Option<String>,

    /// Artist name, when known
    pub artist: Option<String>,

    /// Album name, when known
    pub album: Option<String>,

    /// Total duration of the item
    pub duration: Option<Duration>,

    /// Artwork location understood by the host UI
    pub art_uri: Option<String>,

    /// Queue id of the item when it belongs to the active queue
    pub queue_id: Option<u64>,
}

impl MediaMetadata {
    /// Snapshot carrying only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}
