// ==========================================
// TRACK REFERENCE
// ==========================================
// A single catalog track as the player sees it.
//
// Tracks come from the catalog service already filled in; the player
// never fetches or edits them. Once a track sits in the queue it is only
// handed out as &Track, so replacing an entry means replacing the value.

use serde::{Deserialize, Serialize};

// Fields:
// - id: catalog identifier, used by reorder() to match entries
// - duration: length in seconds (0 when the catalog did not report it)
// - audio_url: the stream the audio output loads
// - artwork_url: cover image, absent for some catalog entries
//
// The same track may appear several times in one queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: u64,
    pub audio_url: String,
    #[serde(default)]
    pub artwork_url: Option<String>,
}

impl Track {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: u64,
        audio_url: impl Into<String>,
    ) -> Self {
        Track {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            duration,
            audio_url: audio_url.into(),
            artwork_url: None,
        }
    }

    pub fn with_artwork(mut self, artwork_url: impl Into<String>) -> Self {
        self.artwork_url = Some(artwork_url.into());
        self
    }
}
