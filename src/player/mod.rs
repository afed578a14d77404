// Player module: queue state machine, audio boundary and the controller
// that ties them together.

pub mod audio;
pub mod controller;
pub mod modes;
pub mod queue;
pub mod track;

pub use audio::{AudioOutput, NullOutput, Transport};
pub use controller::PlaybackController;
pub use modes::{PlaybackModes, RepeatMode};
pub use queue::{Queue, Step};
pub use track::Track;
