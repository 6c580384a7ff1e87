//! Hi-hat voice (closed).
//!
//! A tight burst of noise. The pitch envelope is irrelevant for noise, so
//! the whole character comes from a very short amplitude decay: the "tss"
//! is over in a few tens of milliseconds.
//!
//! # Variations
//!
//! - Longer decay = open hi-hat
//! - Lower gain = further back in the mix

use crate::dsp::{Envelope, Waveform};
use crate::sequencing::Timeline;
use crate::synth::{Instrument, Voice};

/// Create a closed hi-hat voice playing `timeline`.
pub fn hihat(timeline: Timeline) -> Voice {
    Voice::new(
        "hihat",
        timeline,
        Instrument::amp_only(Envelope::ar(0.0, 0.05)),
        Waveform::Noise,
    )
    .amp_range(0.0, 1.0)
    .gain(0.25)
}
