//! Domain snapshot types shared by every Lyra front-end

mod metadata;
mod playback_state;
mod queue;

pub use metadata::MediaMetadata;
pub use playback_state::{PlaybackState, PlaybackStatus};
pub use queue::{QueueEntry, QueueItem};
