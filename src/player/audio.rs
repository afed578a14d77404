// ==========================================
// AUDIO OUTPUT BOUNDARY
// ==========================================
// The controller does not decode or play audio itself. It drives whatever
// implements AudioOutput (a browser audio element, a native sink) and keeps
// a Transport snapshot of what the output reported back.
//
// Events flow the other way: the embedding layer forwards the output's
// time-update / ended / error / metadata notifications to the controller.

use crate::error::AudioError;

pub const DEFAULT_VOLUME: u32 = 80;
pub const MAX_VOLUME: u32 = 100;

// Commands the controller sends to the audio output.
//
// Volume is 0 (silent) to 100 (full), same scale the settings file uses.
// Implementations convert to whatever range their backend expects.
pub trait AudioOutput {
    fn load_source(&mut self, url: &str);

    /// Starts or resumes playback. A rejection (autoplay policy, broken
    /// stream) is reported here and surfaced to the UI, never retried.
    fn play(&mut self) -> Result<(), AudioError>;

    fn pause(&mut self);

    fn seek_time(&mut self, seconds: f64);

    fn set_volume(&mut self, volume: u32);
}

// ==========================================
// TRANSPORT SNAPSHOT
// ==========================================
// Fields:
// - is_playing: playback was requested and not stopped or rejected
// - is_loading: a source was loaded and its metadata has not arrived yet
// - current_time / duration: seconds, as last reported by the output
// - volume / is_muted: user preference, restored from settings
// - error: message from the last failed play() or output error
#[derive(Debug, Clone, PartialEq)]
pub struct Transport {
    pub is_playing: bool,
    pub is_loading: bool,
    pub current_time: f64,
    pub duration: f64,
    pub volume: u32,
    pub is_muted: bool,
    pub error: Option<String>,
}

impl Default for Transport {
    fn default() -> Self {
        Transport {
            is_playing: false,
            is_loading: false,
            current_time: 0.0,
            duration: 0.0,
            volume: DEFAULT_VOLUME,
            is_muted: false,
            error: None,
        }
    }
}

impl Transport {
    /// Volume the output should actually use, taking mute into account.
    pub fn effective_volume(&self) -> u32 {
        if self.is_muted {
            0
        } else {
            self.volume
        }
    }

    /// Playback position as a 0.0-1.0 fraction, for progress bars.
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    // Called whenever a new track (or the same one again) starts.
    pub(crate) fn reset_for_load(&mut self, duration_hint: u64) {
        self.current_time = 0.0;
        self.duration = duration_hint as f64;
        self.is_loading = true;
        self.error = None;
    }

    pub(crate) fn reset_stopped(&mut self) {
        self.is_playing = false;
        self.is_loading = false;
        self.current_time = 0.0;
        self.duration = 0.0;
    }
}

// An output that accepts everything and plays nothing.
// Handy for headless embedding where only the queue state matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOutput;

impl AudioOutput for NullOutput {
    fn load_source(&mut self, _url: &str) {}

    fn play(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn seek_time(&mut self, _seconds: f64) {}

    fn set_volume(&mut self, _volume: u32) {}
}
