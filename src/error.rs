// Error types for the fallible edges of the player: the audio output and
// the settings file. Queue operations themselves never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("playback failed: {0}")]
    Playback(String),

    #[error("unsupported source: {0}")]
    Unsupported(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not find config directory")]
    NoConfigDir,

    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
