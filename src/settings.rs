// Player settings persistence
//
// Only the listener's preferences are stored: shuffle, repeat, volume and
// mute. Queue contents and the cursor are never written to disk.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::player::audio::{DEFAULT_VOLUME, MAX_VOLUME};
use crate::player::modes::{PlaybackModes, RepeatMode};

const APP_DIR_NAME: &str = "jamstream-player";
const SETTINGS_FILE: &str = "player.json";
const SETTINGS_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub version: u32, // Schema version for future migrations
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub volume: u32, // 0-100
    pub muted: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        PlayerSettings {
            version: SETTINGS_VERSION,
            shuffle: false,
            repeat: RepeatMode::Off,
            volume: DEFAULT_VOLUME,
            muted: false,
        }
    }
}

impl PlayerSettings {
    pub fn modes(&self) -> PlaybackModes {
        PlaybackModes {
            shuffle: self.shuffle,
            repeat: self.repeat,
        }
    }

    /// Hand-edited files can carry out-of-range values.
    pub fn normalized(mut self) -> Self {
        self.volume = self.volume.min(MAX_VOLUME);
        self
    }
}

/// Durable key-value storage for [`PlayerSettings`].
pub trait SettingsStore {
    fn load(&self) -> Result<PlayerSettings, SettingsError>;
    fn save(&self, settings: &PlayerSettings) -> Result<(), SettingsError>;
}

// ==========================================
// FILE STORE
// ==========================================
// Settings live at <config_dir>/jamstream-player/player.json, pretty
// printed so they can be edited by hand. A missing file means defaults.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store under the platform config directory (e.g. ~/.config on Linux).
    pub fn new() -> Result<Self, SettingsError> {
        let dir = dirs::config_dir()
            .ok_or(SettingsError::NoConfigDir)?
            .join(APP_DIR_NAME);
        Ok(JsonFileStore { dir })
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        JsonFileStore { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<PlayerSettings, SettingsError> {
        let path = self.path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(PlayerSettings::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: PlayerSettings = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded player settings");
        Ok(settings.normalized())
    }

    fn save(&self, settings: &PlayerSettings) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(self.path(), json)?;
        Ok(())
    }
}

// ==========================================
// MEMORY STORE
// ==========================================
// Keeps settings in memory. Clones share the same slot, so a test can keep
// one handle and inspect what the controller saved through the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<PlayerSettings>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: PlayerSettings) -> Self {
        MemoryStore {
            slot: Rc::new(RefCell::new(Some(settings))),
        }
    }

    /// Last saved value, if anything was ever stored.
    pub fn stored(&self) -> Option<PlayerSettings> {
        self.slot.borrow().clone()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<PlayerSettings, SettingsError> {
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, settings: &PlayerSettings) -> Result<(), SettingsError> {
        *self.slot.borrow_mut() = Some(settings.clone());
        Ok(())
    }
}
