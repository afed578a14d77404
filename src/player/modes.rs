// Playback mode flags: shuffle and repeat.
//
// These belong to the listener, not to the queue, so they survive queue
// replacement and clear().

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    #[default]
    Off, // Stop after the last track
    All, // Loop the whole queue
    One, // Replay the current track indefinitely
}

impl RepeatMode {
    /// Off → All → One → Off
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaybackModes {
    pub shuffle: bool,
    pub repeat: RepeatMode,
}
