//! Transport-state snapshot types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transport status reported by a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// Nothing loaded, or playback stopped
    #[default]
    Stopped,
    /// Actively rendering the current item
    Playing,
    /// Paused with a current item
    Paused,
    /// Waiting on the underlying session (seek in flight, stream starting)
    Buffering,
}

impl PlaybackStatus {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Buffering => "buffering",
        }
    }

    /// Parse from string representation
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "stopped" => Some(Self::Stopped),
            "playing" => Some(Self::Playing),
            "paused" => Some(Self::Paused),
            "buffering" => Some(Self::Buffering),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value snapshot of transport state.
///
/// Replaced wholesale whenever the controller reports a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Current transport status
    pub status: PlaybackStatus,

    /// Playback position within the current item
    pub position: Duration,
}

impl PlaybackState {
    /// Snapshot at a given status and position.
    #[must_use]
    pub fn new(status: PlaybackStatus, position: Duration) -> Self {
        Self { status, position }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            position: Duration::ZERO,
        }
    }
}
