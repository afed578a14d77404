//! Playback queue controller for the Jamstream music player.
//!
//! The crate owns what the player UI needs to know about "what plays
//! next": an ordered queue of catalog tracks, a cursor into it, shuffle and
//! repeat modes, and a snapshot of the audio transport. Audio decoding,
//! the catalog service and the UI itself live elsewhere and talk to the
//! [`PlaybackController`] through [`AudioOutput`], plain method calls and
//! [`SessionEvent`]s.
//!
//! ```
//! use jamstream_player::{MemoryStore, NullOutput, PlaybackController, RepeatMode, Track};
//!
//! let mut player = PlaybackController::new(NullOutput, MemoryStore::new());
//! player.set_repeat_mode(RepeatMode::All);
//! player.set_queue(
//!     vec![
//!         Track::new("1", "First", "Artist", 180, "https://cdn/1.mp3"),
//!         Track::new("2", "Second", "Artist", 200, "https://cdn/2.mp3"),
//!     ],
//!     1,
//! );
//! player.on_ended();
//! assert_eq!(player.current_track().map(|t| t.id.as_str()), Some("1"));
//! ```

pub mod error;
pub mod logging;
pub mod player;
pub mod session;
pub mod settings;

pub use error::{AudioError, SettingsError};
pub use player::{
    AudioOutput, NullOutput, PlaybackController, PlaybackModes, Queue, RepeatMode, Step, Track,
    Transport,
};
pub use session::SessionEvent;
pub use settings::{JsonFileStore, MemoryStore, PlayerSettings, SettingsStore};
