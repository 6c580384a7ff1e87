//! Pre-built voices for common sounds.
//!
//! Each constructor takes the timeline the voice should play and returns a
//! fully configured [`Voice`](crate::synth::Voice). Use these as starting
//! points for your own sounds, or study them to see how the envelope,
//! oscillator, and clamp settings combine into a timbre.
//!
//! # Example
//!
//! ```ignore
//! use tinytune::{sequencing::Timeline, voices};
//!
//! let kicks = Timeline::new().note(50.0, 0.0, 0.5).repeat(8);
//! let kick = voices::kick(kicks);
//! ```

mod bass;
mod hihat;
mod kick;

pub use bass::bass;
pub use hihat::hihat;
pub use kick::kick;
