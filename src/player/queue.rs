// ==========================================
// QUEUE MANAGEMENT MODULE
// ==========================================
// This module holds the playback queue as a small state machine:
// - An ordered list of tracks (insertion order matters, duplicates allowed)
// - A cursor pointing at the current track
// - The shuffle/repeat flags that decide where the cursor goes next
//
// Nothing in here touches audio. Each transition returns a Step that tells
// the controller what happened, and the controller decides which side
// effects to run (reload the output, stop, persist).
//
// Every operation is total: bad indices and empty queues become no-ops.

use rand::Rng;

use super::modes::{PlaybackModes, RepeatMode};
use super::track::Track;

// ==========================================
// STEP
// ==========================================
// Outcome of a queue transition.
//
// - Moved(i): the cursor now points at index i and that track must be
//   (re)loaded from the start
// - Replayed(i): same index as before, replay from the start (repeat one)
// - Stopped: playback must stop. Either the queue lost its current track
//   or advance() ran off the end with repeat off (the last track stays
//   selected)
// - Unchanged: the current track is the same entry as before (its index may
//   have shifted)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(usize),
    Replayed(usize),
    Stopped,
    Unchanged,
}

// ==========================================
// QUEUE STRUCT
// ==========================================
// Fields:
//
// tracks: Vec<Track>
//   - Play order. Shuffle never rearranges this list, it only changes how
//     advance() picks the next index.
//
// cursor: Option<usize>
//   - Some(i) with i < tracks.len(), or None for "no current track"
//   - Always None when tracks is empty
//   - May also be None on a non-empty queue after set_queue() received an
//     out-of-range start index; advance() then starts from the top
//
// modes: PlaybackModes
//   - Shuffle and repeat. Kept across set_queue() and clear().
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
    cursor: Option<usize>,
    modes: PlaybackModes,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modes(modes: PlaybackModes) -> Self {
        Queue {
            tracks: Vec::new(),
            cursor: None,
            modes,
        }
    }

    // ==========================================
    // REPLACING THE QUEUE: set_queue()
    // ==========================================
    // Replaces the whole list and points the cursor at start_index.
    //
    // An out-of-range start_index (including any index into an empty list)
    // leaves the queue without a current track: the tracks are kept but the
    // cursor is None, so nothing plays until the user picks one or calls
    // advance().
    //
    // Example:
    // - set_queue([A, B, C], 1) → current = B, returns Moved(1)
    // - set_queue([A, B, C], 7) → current = None, returns Stopped
    pub fn set_queue(&mut self, tracks: Vec<Track>, start_index: usize) -> Step {
        self.tracks = tracks;
        if start_index < self.tracks.len() {
            self.cursor = Some(start_index);
            Step::Moved(start_index)
        } else {
            self.cursor = None;
            Step::Stopped
        }
    }

    // ==========================================
    // PLAYING ONE TRACK: set_current_track()
    // ==========================================
    // Plays a track picked outside the current queue context.
    //
    // - playlist = None: the queue becomes just [track]
    // - playlist = Some(list): the queue becomes list, with the cursor on
    //   the entry for track. index is tried first; if it does not hold this
    //   track, the first entry with the same id is used. A playlist that
    //   does not contain the track at all is ignored in favour of [track].
    pub fn set_current_track(
        &mut self,
        track: Track,
        playlist: Option<Vec<Track>>,
        index: usize,
    ) -> Step {
        if let Some(list) = playlist {
            let position = match list.get(index) {
                Some(entry) if entry.id == track.id => Some(index),
                _ => list.iter().position(|entry| entry.id == track.id),
            };
            if let Some(position) = position {
                self.tracks = list;
                self.cursor = Some(position);
                return Step::Moved(position);
            }
        }

        self.tracks = vec![track];
        self.cursor = Some(0);
        Step::Moved(0)
    }

    // ==========================================
    // NAVIGATION: advance()
    // ==========================================
    // Picks the next cursor position. Rules in order of precedence:
    //
    // 1. Empty queue                    → Unchanged
    // 2. Shuffle on                     → random index other than the
    //                                     current one (Unchanged when there
    //                                     is no other index)
    // 3. Repeat one                     → Replayed(current)
    // 4. Repeat all, at the last index  → Moved(0)
    // 5. Not at the last index          → Moved(current + 1)
    // 6. Last index, repeat off         → Stopped
    //
    // A queue with no current track starts at index 0 in rules 3-5.
    //
    // The cursor stays put on Stopped: the last track remains selected, it
    // just does not play.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Step {
        let len = self.tracks.len();
        if len == 0 {
            return Step::Unchanged;
        }

        if self.modes.shuffle {
            return match self.cursor {
                // Draw from len - 1 slots and skip over the current index
                Some(current) if len > 1 => {
                    let pick = rng.gen_range(0..len - 1);
                    let next = if pick >= current { pick + 1 } else { pick };
                    self.move_to(next)
                }
                Some(_) => Step::Unchanged,
                None => {
                    let next = rng.gen_range(0..len);
                    self.move_to(next)
                }
            };
        }

        let Some(current) = self.cursor else {
            return self.move_to(0);
        };

        let at_last = current + 1 == len;
        match self.modes.repeat {
            RepeatMode::One => Step::Replayed(current),
            RepeatMode::All if at_last => self.move_to(0),
            _ if !at_last => self.move_to(current + 1),
            _ => Step::Stopped,
        }
    }

    // ==========================================
    // NAVIGATION: retreat()
    // ==========================================
    // Previous track. Always sequential: shuffle does not apply here.
    //
    // 1. Empty queue or no current track → Unchanged
    // 2. Repeat all at index 0           → Moved(last)
    // 3. Index > 0                       → Moved(current - 1)
    // 4. Otherwise                       → Unchanged
    pub fn retreat(&mut self) -> Step {
        let Some(current) = self.cursor else {
            return Step::Unchanged;
        };

        if current == 0 {
            if self.modes.repeat == RepeatMode::All {
                let last = self.tracks.len() - 1;
                return self.move_to(last);
            }
            return Step::Unchanged;
        }

        self.move_to(current - 1)
    }

    /// Jumps to `index` when it is in range.
    pub fn seek_to_index(&mut self, index: usize) -> Step {
        if index < self.tracks.len() {
            self.move_to(index)
        } else {
            Step::Unchanged
        }
    }

    // Appends to the end. Cursor and current track are untouched.
    pub fn enqueue(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn enqueue_all(&mut self, tracks: impl IntoIterator<Item = Track>) {
        self.tracks.extend(tracks);
    }

    // ==========================================
    // QUEUE MANAGEMENT: dequeue()
    // ==========================================
    // Removes the entry at index and keeps the cursor consistent:
    //
    // - index before the cursor: cursor shifts left, same track stays current
    // - index after the cursor: nothing changes
    // - index at the cursor:
    //     * queue now empty           → Stopped, no current track
    //     * it was the last element   → cursor wraps to 0
    //     * otherwise                 → cursor keeps its value, which now
    //                                   points at the following track
    //
    // Out-of-range indices are ignored.
    //
    // Example:
    // - Queue: [A, B, C], cursor 1 (B)
    // - dequeue(1) → Queue: [A, C], cursor 1 (C), returns Moved(1)
    pub fn dequeue(&mut self, index: usize) -> Step {
        if index >= self.tracks.len() {
            return Step::Unchanged;
        }
        self.tracks.remove(index);

        let Some(current) = self.cursor else {
            return Step::Unchanged;
        };

        if index < current {
            self.cursor = Some(current - 1);
            return Step::Unchanged;
        }
        if index > current {
            return Step::Unchanged;
        }

        if self.tracks.is_empty() {
            self.cursor = None;
            Step::Stopped
        } else {
            // A different track now sits under the cursor
            let next = if current >= self.tracks.len() { 0 } else { current };
            self.cursor = Some(next);
            Step::Moved(next)
        }
    }

    // ==========================================
    // QUEUE MANAGEMENT: reorder()
    // ==========================================
    // Rebuilds the queue in the order given by ids.
    //
    // Each id claims the first not-yet-claimed entry with that id, so
    // duplicates are handled by position. Entries whose id is not listed
    // are dropped, and ids with no matching entry are skipped.
    //
    // The cursor follows the current entry to its new position. If the
    // current entry was dropped, the cursor is clamped to the new last index
    // and that track becomes current.
    //
    // Example:
    // - Queue: [A, B, C], cursor 0 (A)
    // - reorder(["c", "a", "b"]) → Queue: [C, A, B], cursor 1 (still A)
    pub fn reorder<S: AsRef<str>>(&mut self, ids: &[S]) -> Step {
        let old_cursor = self.cursor;
        let mut slots: Vec<Option<Track>> = std::mem::take(&mut self.tracks)
            .into_iter()
            .map(Some)
            .collect();

        let mut reordered = Vec::with_capacity(slots.len());
        let mut followed = None;
        for id in ids {
            let id = id.as_ref();
            let claimed = slots
                .iter_mut()
                .enumerate()
                .find(|(_, slot)| matches!(slot, Some(track) if track.id == id));

            if let Some((old_index, slot)) = claimed {
                if let Some(track) = slot.take() {
                    if old_cursor == Some(old_index) {
                        followed = Some(reordered.len());
                    }
                    reordered.push(track);
                }
            }
        }
        self.tracks = reordered;

        match (old_cursor, followed) {
            (_, Some(new_index)) => {
                self.cursor = Some(new_index);
                Step::Unchanged
            }
            (None, None) => Step::Unchanged,
            (Some(_), None) if self.tracks.is_empty() => {
                self.cursor = None;
                Step::Stopped
            }
            (Some(old_index), None) => {
                let clamped = old_index.min(self.tracks.len() - 1);
                self.cursor = Some(clamped);
                Step::Moved(clamped)
            }
        }
    }

    // Empties the queue. Modes are kept.
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = None;
    }

    // ==========================================
    // PLAYBACK MODES
    // ==========================================
    // Pure flag changes: the cursor never moves here.

    pub fn toggle_shuffle(&mut self) -> bool {
        self.modes.shuffle = !self.modes.shuffle;
        self.modes.shuffle
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.modes.shuffle = shuffle;
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.modes.repeat = mode;
    }

    pub fn cycle_repeat_mode(&mut self) -> RepeatMode {
        self.modes.repeat = self.modes.repeat.cycle();
        self.modes.repeat
    }

    pub fn set_modes(&mut self, modes: PlaybackModes) {
        self.modes = modes;
    }

    // ==========================================
    // QUEUE INSPECTION
    // ==========================================

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&Track> {
        self.cursor.and_then(|index| self.tracks.get(index))
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn modes(&self) -> PlaybackModes {
        self.modes
    }

    // ==========================================
    // QUEUE INSPECTION: peek_next()
    // ==========================================
    // The track advance() would pick, for "Up next" displays.
    //
    // Returns None under shuffle (the pick is random) and at the end of the
    // queue with repeat off. Repeat one peeks at the current track.
    pub fn peek_next(&self) -> Option<&Track> {
        if self.modes.shuffle || self.tracks.is_empty() {
            return None;
        }
        let Some(current) = self.cursor else {
            return self.tracks.first();
        };

        match self.modes.repeat {
            RepeatMode::One => self.tracks.get(current),
            RepeatMode::All if current + 1 == self.tracks.len() => self.tracks.first(),
            _ => self.tracks.get(current + 1),
        }
    }

    fn move_to(&mut self, index: usize) -> Step {
        let replay = self.cursor == Some(index);
        self.cursor = Some(index);
        if replay {
            Step::Replayed(index)
        } else {
            Step::Moved(index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn track(id: &str) -> Track {
        Track::new(id, id.to_uppercase(), "Artist", 180, format!("https://cdn/{id}.mp3"))
    }

    fn abc() -> Vec<Track> {
        vec![track("a"), track("b"), track("c")]
    }

    fn current_id(queue: &Queue) -> Option<&str> {
        queue.current().map(|t| t.id.as_str())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn set_queue_points_at_start_index() {
        let mut q = Queue::new();
        assert_eq!(q.set_queue(abc(), 2), Step::Moved(2));
        assert_eq!(current_id(&q), Some("c"));
    }

    #[test]
    fn set_queue_empty_has_no_current_track() {
        let mut q = Queue::new();
        for start in [0, 1, 99] {
            assert_eq!(q.set_queue(Vec::new(), start), Step::Stopped);
            assert!(q.current().is_none());
            assert_eq!(q.cursor(), None);
        }
    }

    #[test]
    fn set_queue_out_of_range_keeps_tracks_without_cursor() {
        let mut q = Queue::new();
        assert_eq!(q.set_queue(abc(), 3), Step::Stopped);
        assert_eq!(q.len(), 3);
        assert_eq!(q.cursor(), None);
        assert_eq!(q.advance(&mut rng()), Step::Moved(0));
        assert_eq!(current_id(&q), Some("a"));
    }

    #[test]
    fn set_current_track_without_playlist_is_single_entry() {
        let mut q = Queue::new();
        q.set_queue(abc(), 0);
        q.set_current_track(track("z"), None, 5);
        assert_eq!(q.len(), 1);
        assert_eq!(current_id(&q), Some("z"));
    }

    #[test]
    fn set_current_track_with_playlist_finds_entry() {
        let mut q = Queue::new();
        assert_eq!(q.set_current_track(track("b"), Some(abc()), 1), Step::Moved(1));
        assert_eq!(q.len(), 3);

        // Wrong index falls back to the id lookup
        assert_eq!(q.set_current_track(track("c"), Some(abc()), 0), Step::Moved(2));
        assert_eq!(current_id(&q), Some("c"));

        // Track missing from the playlist
        q.set_current_track(track("z"), Some(abc()), 0);
        assert_eq!(q.len(), 1);
        assert_eq!(current_id(&q), Some("z"));
    }

    #[test]
    fn advance_sequential() {
        let mut q = Queue::new();
        q.set_queue(abc(), 0);
        assert_eq!(q.advance(&mut rng()), Step::Moved(1));
        assert_eq!(current_id(&q), Some("b"));
    }

    #[test]
    fn advance_on_empty_queue_is_noop() {
        let mut q = Queue::new();
        assert_eq!(q.advance(&mut rng()), Step::Unchanged);
        assert_eq!(q.cursor(), None);
    }

    #[test]
    fn advance_at_end_with_repeat_off_stops_in_place() {
        let mut q = Queue::new();
        q.set_queue(abc(), 2);
        assert_eq!(q.advance(&mut rng()), Step::Stopped);
        assert_eq!(q.cursor(), Some(2));
    }

    #[test]
    fn advance_single_track_repeat_off_stops() {
        let mut q = Queue::new();
        q.set_queue(vec![track("a")], 0);
        assert_eq!(q.advance(&mut rng()), Step::Stopped);
        assert_eq!(q.cursor(), Some(0));
    }

    #[test]
    fn advance_repeat_all_wraps_from_last() {
        let mut q = Queue::new();
        q.set_repeat_mode(RepeatMode::All);
        for len in 1..6 {
            let tracks: Vec<Track> = (0..len).map(|i| track(&format!("t{i}"))).collect();
            q.set_queue(tracks, len - 1);
            q.advance(&mut rng());
            assert_eq!(q.cursor(), Some(0), "len {len}");
        }
    }

    #[test]
    fn advance_repeat_one_replays() {
        let mut q = Queue::new();
        q.set_repeat_mode(RepeatMode::One);
        q.set_queue(abc(), 1);
        assert_eq!(q.advance(&mut rng()), Step::Replayed(1));
        assert_eq!(q.cursor(), Some(1));
    }

    #[test]
    fn advance_shuffle_never_picks_current() {
        let mut q = Queue::new();
        q.set_shuffle(true);
        q.set_queue(abc(), 0);
        let mut rng = rng();
        for _ in 0..200 {
            let before = q.cursor();
            let step = q.advance(&mut rng);
            assert!(matches!(step, Step::Moved(_)));
            assert_ne!(q.cursor(), before);
        }
    }

    #[test]
    fn advance_shuffle_reaches_every_other_index() {
        let mut q = Queue::new();
        q.set_shuffle(true);
        let tracks: Vec<Track> = (0..5).map(|i| track(&format!("t{i}"))).collect();
        let mut seen = [false; 5];
        let mut rng = rng();
        for _ in 0..500 {
            q.set_queue(tracks.clone(), 2);
            if let Step::Moved(index) = q.advance(&mut rng) {
                seen[index] = true;
            }
        }
        assert_eq!(seen, [true, true, false, true, true]);
    }

    #[test]
    fn advance_shuffle_single_track_is_noop() {
        let mut q = Queue::new();
        q.set_shuffle(true);
        q.set_repeat_mode(RepeatMode::One);
        q.set_queue(vec![track("a")], 0);
        assert_eq!(q.advance(&mut rng()), Step::Unchanged);
        assert_eq!(q.cursor(), Some(0));
    }

    #[test]
    fn shuffle_does_not_reorder_tracks() {
        let mut q = Queue::new();
        q.set_queue(abc(), 0);
        q.toggle_shuffle();
        q.advance(&mut rng());
        let ids: Vec<&str> = q.tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn retreat_steps_back_and_stops_at_zero() {
        let mut q = Queue::new();
        q.set_queue(abc(), 1);
        assert_eq!(q.retreat(), Step::Moved(0));
        assert_eq!(q.retreat(), Step::Unchanged);
        assert_eq!(q.cursor(), Some(0));
    }

    #[test]
    fn retreat_repeat_all_wraps_to_last() {
        let mut q = Queue::new();
        q.set_repeat_mode(RepeatMode::All);
        q.set_queue(abc(), 0);
        assert_eq!(q.retreat(), Step::Moved(2));
        assert_eq!(current_id(&q), Some("c"));
    }

    #[test]
    fn retreat_ignores_shuffle() {
        let mut q = Queue::new();
        q.set_shuffle(true);
        q.set_queue(abc(), 2);
        assert_eq!(q.retreat(), Step::Moved(1));
    }

    #[test]
    fn retreat_without_cursor_is_noop() {
        let mut q = Queue::new();
        q.set_repeat_mode(RepeatMode::All);
        assert_eq!(q.retreat(), Step::Unchanged);
        q.set_queue(abc(), 10);
        assert_eq!(q.retreat(), Step::Unchanged);
    }

    #[test]
    fn seek_to_index_checks_bounds() {
        let mut q = Queue::new();
        q.set_queue(abc(), 0);
        assert_eq!(q.seek_to_index(2), Step::Moved(2));
        assert_eq!(q.seek_to_index(3), Step::Unchanged);
        assert_eq!(q.cursor(), Some(2));
    }

    #[test]
    fn enqueue_appends_and_keeps_cursor() {
        let mut q = Queue::new();
        q.set_queue(abc(), 1);
        q.enqueue(track("a"));
        assert_eq!(q.len(), 4);
        assert_eq!(current_id(&q), Some("b"));
        assert_eq!(q.get(3).map(|t| t.id.as_str()), Some("a"));
    }

    #[test]
    fn dequeue_before_cursor_shifts_left() {
        let mut q = Queue::new();
        q.set_queue(vec![track("a"), track("b")], 1);
        assert_eq!(q.dequeue(0), Step::Unchanged);
        assert_eq!(q.cursor(), Some(0));
        assert_eq!(current_id(&q), Some("b"));
    }

    #[test]
    fn dequeue_current_moves_to_following_track() {
        let mut q = Queue::new();
        q.set_queue(abc(), 1);
        assert_eq!(q.dequeue(1), Step::Moved(1));
        assert_eq!(current_id(&q), Some("c"));
    }

    #[test]
    fn dequeue_current_last_wraps_to_zero() {
        let mut q = Queue::new();
        q.set_queue(abc(), 2);
        assert_eq!(q.dequeue(2), Step::Moved(0));
        assert_eq!(current_id(&q), Some("a"));
    }

    #[test]
    fn dequeue_only_track_stops() {
        let mut q = Queue::new();
        q.set_queue(vec![track("a")], 0);
        assert_eq!(q.dequeue(0), Step::Stopped);
        assert!(q.is_empty());
        assert!(q.current().is_none());
    }

    #[test]
    fn dequeue_after_cursor_and_out_of_range() {
        let mut q = Queue::new();
        q.set_queue(abc(), 0);
        assert_eq!(q.dequeue(2), Step::Unchanged);
        assert_eq!(q.dequeue(9), Step::Unchanged);
        assert_eq!(q.len(), 2);
        assert_eq!(current_id(&q), Some("a"));
    }

    #[test]
    fn dequeue_duplicate_keeps_the_playing_entry() {
        let mut q = Queue::new();
        q.set_queue(vec![track("a"), track("b"), track("a")], 2);
        assert_eq!(q.dequeue(0), Step::Unchanged);
        assert_eq!(q.cursor(), Some(1));
        assert_eq!(current_id(&q), Some("a"));
    }

    #[test]
    fn reorder_follows_current_track() {
        let mut q = Queue::new();
        q.set_queue(abc(), 0);
        assert_eq!(q.reorder(&["c", "a", "b"]), Step::Unchanged);
        assert_eq!(q.cursor(), Some(1));
        assert_eq!(current_id(&q), Some("a"));
    }

    #[test]
    fn reorder_drops_unlisted_and_skips_unknown() {
        let mut q = Queue::new();
        q.set_queue(abc(), 2);
        q.reorder(&["c", "x", "a"]);
        let ids: Vec<&str> = q.tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);
        assert_eq!(current_id(&q), Some("c"));
    }

    #[test]
    fn reorder_dropping_current_clamps_cursor() {
        let mut q = Queue::new();
        q.set_queue(abc(), 2);
        assert_eq!(q.reorder(&["b", "a"]), Step::Moved(1));
        assert_eq!(current_id(&q), Some("a"));
    }

    #[test]
    fn reorder_to_nothing_stops() {
        let mut q = Queue::new();
        q.set_queue(abc(), 0);
        assert_eq!(q.reorder::<&str>(&[]), Step::Stopped);
        assert!(q.is_empty());
        assert_eq!(q.cursor(), None);
    }

    #[test]
    fn reorder_with_duplicates_claims_entries_in_order() {
        let mut q = Queue::new();
        q.set_queue(vec![track("a"), track("b"), track("a")], 2);
        q.reorder(&["a", "a", "b"]);
        let ids: Vec<&str> = q.tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "a", "b"]);
        // The second "a" was playing and claims position 1
        assert_eq!(q.cursor(), Some(1));
    }

    #[test]
    fn clear_keeps_modes() {
        let mut q = Queue::new();
        q.set_shuffle(true);
        q.set_repeat_mode(RepeatMode::One);
        q.set_queue(abc(), 0);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.cursor(), None);
        assert_eq!(
            q.modes(),
            PlaybackModes {
                shuffle: true,
                repeat: RepeatMode::One
            }
        );
    }

    #[test]
    fn modes_survive_set_queue() {
        let mut q = Queue::new();
        q.cycle_repeat_mode();
        q.toggle_shuffle();
        q.set_queue(abc(), 0);
        assert_eq!(q.modes().repeat, RepeatMode::All);
        assert!(q.modes().shuffle);
    }

    #[test]
    fn mode_changes_do_not_move_cursor() {
        let mut q = Queue::new();
        q.set_queue(abc(), 1);
        q.toggle_shuffle();
        q.cycle_repeat_mode();
        q.set_repeat_mode(RepeatMode::One);
        assert_eq!(q.cursor(), Some(1));
    }

    #[test]
    fn peek_next_follows_repeat() {
        let mut q = Queue::new();
        q.set_queue(abc(), 2);
        assert!(q.peek_next().is_none());
        q.set_repeat_mode(RepeatMode::All);
        assert_eq!(q.peek_next().map(|t| t.id.as_str()), Some("a"));
        q.set_repeat_mode(RepeatMode::One);
        assert_eq!(q.peek_next().map(|t| t.id.as_str()), Some("c"));
        q.toggle_shuffle();
        assert!(q.peek_next().is_none());
    }
}
