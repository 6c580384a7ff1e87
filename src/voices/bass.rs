//! Bass voice.
//!
//! A sawtooth playing the timeline's own pitches. Saws carry every
//! harmonic, which keeps a bass line present even on small speakers. The
//! amplitude clamp caps at 0.5 so the bass sits under the kick instead of
//! fighting it.
//!
//! # Variations
//!
//! - Sine instead of saw = sub bass
//! - Shorter release = staccato plucks

use crate::dsp::{Envelope, Waveform};
use crate::sequencing::Timeline;
use crate::synth::{Instrument, Voice};

/// Create a bass voice playing `timeline` at the notes' own frequencies.
pub fn bass(timeline: Timeline) -> Voice {
    Voice::new(
        "bass",
        timeline,
        Instrument::amp_only(Envelope::ar(0.01, 0.3)),
        Waveform::Saw,
    )
    .amp_range(0.0, 0.5)
    .gain(0.8)
}
