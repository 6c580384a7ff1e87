pub mod note;
pub mod pitch;
pub mod timeline;

pub use note::Note;
pub use pitch::{note_freq, PitchError};
pub use timeline::Timeline;
