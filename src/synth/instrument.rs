#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::Envelope;

/// A pair of envelopes bound to the two modulation roles a voice has:
/// pitch shaping and amplitude shaping.
///
/// Instruments are stateless values, shared by every note a voice plays.
/// The two roles are explicit named fields rather than a bag of arbitrary
/// closures, so an instrument is inspectable and its evaluation is total.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instrument {
    /// Pitch modulation over the note's life. Only consulted by voices in
    /// swept-pitch mode; fixed-pitch voices play the note's own frequency.
    pub pitch: Envelope,
    /// Amplitude modulation over the note's life.
    pub amp: Envelope,
}

impl Instrument {
    pub fn new(pitch: Envelope, amp: Envelope) -> Self {
        Self { pitch, amp }
    }

    /// Instrument that only shapes amplitude; the pitch role holds a flat
    /// envelope that fixed-pitch voices never consult.
    pub fn amp_only(amp: Envelope) -> Self {
        Self {
            pitch: Envelope::ar(0.0, f64::MAX),
            amp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amp_only_pitch_role_holds_peak() {
        let inst = Instrument::amp_only(Envelope::ar(0.0, 0.25));
        // flat pitch envelope stays at its peak for the whole note
        assert!((inst.pitch.evaluate(0.0, 1.0) - 1.0).abs() < 1e-9);
        assert!((inst.pitch.evaluate(0.9, 1.0) - 1.0).abs() < 1e-9);
    }
}
