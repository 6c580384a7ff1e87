//! Voice rendering and mixing.
//!
//! A `Voice` turns one timeline into a continuous signal through its
//! instrument and oscillator; the `Mixer` sums a fixed set of voices into
//! the final mono sample stream.

pub mod instrument;
pub mod mixer;
pub mod voice;

pub use instrument::Instrument;
pub use mixer::Mixer;
pub use voice::{PitchMode, Voice};
