// ==========================================
// PLAYBACK CONTROLLER
// ==========================================
// Ties the queue state machine to the audio output and the settings store.
//
// The controller is an ordinary owned value: the UI layer constructs one
// and passes it around by reference. All calls happen on the UI thread, so
// there is no locking anywhere in here.
//
// Flow for every queue operation:
// 1. Queue computes the transition and returns a Step
// 2. apply() turns the Step into output commands and Transport updates
//
// Mode changes (shuffle, repeat, volume, mute) are also written to the
// settings store. Saving is best effort: failures are logged and dropped.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::audio::{AudioOutput, Transport, MAX_VOLUME};
use super::modes::{PlaybackModes, RepeatMode};
use super::queue::{Queue, Step};
use super::track::Track;
use crate::session::SessionEvent;
use crate::settings::{PlayerSettings, SettingsStore};

pub struct PlaybackController<O: AudioOutput, S: SettingsStore> {
    queue: Queue,
    transport: Transport,
    output: O,
    store: S,
    rng: StdRng,
}

impl<O: AudioOutput, S: SettingsStore> PlaybackController<O, S> {
    pub fn new(output: O, store: S) -> Self {
        Self::with_rng(output, store, StdRng::from_entropy())
    }

    // ==========================================
    // CONSTRUCTOR: with_rng()
    // ==========================================
    // Same as new() but with a caller-supplied RNG, so shuffle order can be
    // made reproducible.
    //
    // Saved modes, volume and mute are restored from the store. An
    // unreadable store is not fatal: the player starts with defaults.
    pub fn with_rng(mut output: O, store: S, rng: StdRng) -> Self {
        let settings = match store.load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "could not load player settings, using defaults");
                PlayerSettings::default()
            }
        };

        let transport = Transport {
            volume: settings.volume.min(MAX_VOLUME),
            is_muted: settings.muted,
            ..Transport::default()
        };
        output.set_volume(transport.effective_volume());

        PlaybackController {
            queue: Queue::with_modes(settings.modes()),
            transport,
            output,
            store,
            rng,
        }
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.queue.current()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.queue.cursor()
    }

    pub fn modes(&self) -> PlaybackModes {
        self.queue.modes()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ==========================================
    // QUEUE OPERATIONS
    // ==========================================

    /// Replace the queue and start playing at `start_index`.
    pub fn set_queue(&mut self, tracks: Vec<Track>, start_index: usize) {
        tracing::info!(len = tracks.len(), start_index, "queue replaced");
        let step = self.queue.set_queue(tracks, start_index);
        self.apply(step, true);
    }

    /// Play `track`, optionally within `playlist` at `index`.
    pub fn set_current_track(&mut self, track: Track, playlist: Option<Vec<Track>>, index: usize) {
        tracing::info!(track_id = %track.id, has_playlist = playlist.is_some(), "playing track");
        let step = self.queue.set_current_track(track, playlist, index);
        self.apply(step, true);
    }

    pub fn advance(&mut self) {
        let step = self.queue.advance(&mut self.rng);
        tracing::debug!(?step, "advance");
        self.apply(step, true);
    }

    pub fn retreat(&mut self) {
        let step = self.queue.retreat();
        tracing::debug!(?step, "retreat");
        self.apply(step, true);
    }

    pub fn seek_to_index(&mut self, index: usize) {
        let step = self.queue.seek_to_index(index);
        self.apply(step, true);
    }

    pub fn enqueue(&mut self, track: Track) {
        tracing::debug!(track_id = %track.id, "enqueued");
        self.queue.enqueue(track);
    }

    pub fn enqueue_all(&mut self, tracks: Vec<Track>) {
        tracing::debug!(count = tracks.len(), "enqueued batch");
        self.queue.enqueue_all(tracks);
    }

    // Removing or reordering entries keeps the current play/pause state when
    // a different track ends up under the cursor.
    pub fn dequeue(&mut self, index: usize) {
        let step = self.queue.dequeue(index);
        tracing::debug!(index, ?step, len = self.queue.len(), "dequeued");
        let keep_playing = self.transport.is_playing;
        self.apply(step, keep_playing);
    }

    pub fn reorder<T: AsRef<str>>(&mut self, ids: &[T]) {
        let step = self.queue.reorder(ids);
        tracing::debug!(?step, len = self.queue.len(), "reordered");
        let keep_playing = self.transport.is_playing;
        self.apply(step, keep_playing);
    }

    pub fn clear(&mut self) {
        tracing::info!("queue cleared");
        self.queue.clear();
        self.output.pause();
        self.transport.reset_stopped();
    }

    // ==========================================
    // PLAYBACK MODES
    // ==========================================

    pub fn toggle_shuffle(&mut self) -> bool {
        let shuffle = self.queue.toggle_shuffle();
        self.persist();
        shuffle
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.queue.set_repeat_mode(mode);
        self.persist();
    }

    pub fn cycle_repeat_mode(&mut self) -> RepeatMode {
        let mode = self.queue.cycle_repeat_mode();
        self.persist();
        mode
    }

    // ==========================================
    // TRANSPORT COMMANDS
    // ==========================================

    /// Resume the current track. Nothing happens without a current track.
    pub fn play(&mut self) {
        if self.queue.current().is_none() || self.transport.is_playing {
            return;
        }
        self.start_playback();
    }

    pub fn pause(&mut self) {
        if !self.transport.is_playing {
            return;
        }
        self.output.pause();
        self.transport.is_playing = false;
    }

    pub fn toggle_play(&mut self) {
        if self.transport.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump within the current track. Clamped to the known duration.
    pub fn seek(&mut self, seconds: f64) {
        if self.queue.current().is_none() {
            return;
        }
        let mut target = seconds.max(0.0);
        if self.transport.duration > 0.0 {
            target = target.min(self.transport.duration);
        }
        self.output.seek_time(target);
        self.transport.current_time = target;
    }

    // Raising the volume above zero also unmutes.
    pub fn set_volume(&mut self, volume: u32) {
        let volume = volume.min(MAX_VOLUME);
        self.transport.volume = volume;
        if volume > 0 {
            self.transport.is_muted = false;
        }
        self.output.set_volume(self.transport.effective_volume());
        self.persist();
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.transport.is_muted = !self.transport.is_muted;
        self.output.set_volume(self.transport.effective_volume());
        self.persist();
        self.transport.is_muted
    }

    // ==========================================
    // AUDIO OUTPUT EVENTS
    // ==========================================
    // Forwarded by the embedding layer from the output's notifications.

    pub fn on_time_update(&mut self, seconds: f64) {
        self.transport.current_time = seconds;
    }

    pub fn on_loaded_metadata(&mut self, duration: f64) {
        self.transport.duration = duration;
        self.transport.is_loading = false;
    }

    pub fn on_ended(&mut self) {
        tracing::debug!(index = ?self.queue.cursor(), "track ended");
        self.advance();
    }

    pub fn on_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "audio output error");
        self.transport.error = Some(message);
        self.transport.is_playing = false;
        self.transport.is_loading = false;
    }

    pub fn handle_session_event(&mut self, event: SessionEvent) {
        tracing::info!(?event, "session event");
        self.clear();
        if event == SessionEvent::Reset {
            self.queue.set_modes(PlaybackModes::default());
            self.persist();
        }
    }

    // ==========================================
    // SIDE EFFECTS
    // ==========================================

    fn apply(&mut self, step: Step, autoplay: bool) {
        match step {
            Step::Moved(index) | Step::Replayed(index) => self.load_index(index, autoplay),
            Step::Stopped if self.queue.current().is_none() => {
                self.output.pause();
                self.transport.reset_stopped();
            }
            // End of queue: the last track stays selected but goes quiet
            Step::Stopped => {
                self.output.pause();
                self.transport.is_playing = false;
                self.transport.is_loading = false;
            }
            Step::Unchanged => {}
        }
    }

    fn load_index(&mut self, index: usize, autoplay: bool) {
        let Some(track) = self.queue.get(index) else {
            return;
        };
        tracing::debug!(index, track_id = %track.id, len = self.queue.len(), "loading track");
        self.transport.reset_for_load(track.duration);
        self.output.load_source(&track.audio_url);

        if autoplay {
            self.start_playback();
        } else {
            self.transport.is_playing = false;
        }
    }

    fn start_playback(&mut self) {
        match self.output.play() {
            Ok(()) => {
                self.transport.is_playing = true;
                self.transport.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "play request rejected");
                self.transport.is_playing = false;
                self.transport.is_loading = false;
                self.transport.error = Some(e.to_string());
            }
        }
    }

    fn persist(&self) {
        let modes = self.queue.modes();
        let settings = PlayerSettings {
            shuffle: modes.shuffle,
            repeat: modes.repeat,
            volume: self.transport.volume,
            muted: self.transport.is_muted,
            ..PlayerSettings::default()
        };
        if let Err(e) = self.store.save(&settings) {
            tracing::warn!(error = %e, "failed to save player settings");
        }
    }
}
