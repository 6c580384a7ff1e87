//! Kick drum voice.
//!
//! A classic synthesized kick: a sine wave whose frequency is driven by a
//! fast downward pitch sweep. The sweep starts high (~150 Hz) and drops
//! toward the floor of the clamp range, producing the characteristic punch
//! of an electronic kick.
//!
//! # How It Works
//!
//! 1. Sine oscillator provides the body (pure, deep tone)
//! 2. Swept pitch: envelope peak × 150 Hz, clamped to [40, 150] Hz
//! 3. Amplitude envelope with instant attack and a decay matching the note
//! 4. Amplitude clamped to [0, 1] (the kick may use the full range)
//!
//! # Variations
//!
//! - Longer pitch release = boomy 808-style kick
//! - Higher sweep scale = more "click" at the attack

use crate::dsp::{Envelope, Waveform};
use crate::sequencing::Timeline;
use crate::synth::{Instrument, Voice};

/// Create a kick drum voice playing `timeline`.
///
/// Note frequencies in the timeline are ignored; kicks are tuned by the
/// pitch sweep, not the note.
pub fn kick(timeline: Timeline) -> Voice {
    let instrument = Instrument::new(
        // fast downward sweep
        Envelope::ar(0.0, 0.08),
        // instant attack, decay across the note
        Envelope::ar(0.0, 0.25),
    );

    Voice::new("kick", timeline, instrument, Waveform::Sine)
        .swept_pitch(150.0, 40.0, 150.0)
        .amp_range(0.0, 1.0)
        .gain(0.9)
}
