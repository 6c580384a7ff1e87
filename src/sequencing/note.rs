#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single timed note event.
///
/// Notes are plain immutable values: constructed when a timeline is defined,
/// never mutated afterwards. Times are in seconds; a note is audible over
/// the half-open span `[start, start + duration)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Pitch in Hz (> 0).
    pub frequency: f64,
    /// Onset in seconds from the start of the timeline (>= 0).
    pub start: f64,
    /// Length in seconds (> 0).
    pub duration: f64,
    /// Per-note loudness in [0, 1]. `None` falls back to the voice's
    /// default velocity at render time.
    pub velocity: Option<f64>,
}

impl Note {
    pub fn new(frequency: f64, start: f64, duration: f64) -> Self {
        debug_assert!(frequency > 0.0, "note frequency must be positive");
        debug_assert!(start >= 0.0, "note start must be non-negative");
        debug_assert!(duration > 0.0, "note duration must be positive");
        Self {
            frequency,
            start,
            duration,
            velocity: None,
        }
    }

    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = Some(velocity.clamp(0.0, 1.0));
        self
    }

    /// End of the audible span in seconds.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Whether this note sounds at absolute time `t`.
    pub fn covers(&self, t: f64) -> bool {
        self.start <= t && t < self.end()
    }

    /// Copy of this note shifted later by `offset` seconds.
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            start: self.start + offset,
            ..*self
        }
    }
}
