// Session events sent to the player by the authentication layer.
//
// Logging out has to wipe what the previous user was listening to. Instead
// of the auth code reaching into player state, it hands one of these to
// PlaybackController::handle_session_event().

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// User signed out: drop the queue and stop playback. Preferences stay.
    LoggedOut,
    /// Full reset: as LoggedOut, and modes go back to their defaults.
    Reset,
}
