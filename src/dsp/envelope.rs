/*
Envelope Evaluation
===================

An envelope is a time-varying multiplier that shapes a note's amplitude (or
pitch) over its life. Unlike a gate-driven envelope generator, these
envelopes are PURE: the output depends only on two inputs,

    evaluate(elapsed, duration) -> multiplier

where `elapsed` is the time since the note started and `duration` is the
note's total length. There is no internal state, no note_on/note_off, no
per-sample increment bookkeeping. The renderer can evaluate any note at any
time in any order and always get the same answer, which is what makes the
whole synthesis path deterministic.

The Shapes
----------

AR (attack/release):

    1.0 ┐   ╱╲
        │  ╱  ╲
        │ ╱    ╲
    0.0 └╱──────╲──→ elapsed
        Attack  (release ramp, may undershoot 0)

ADSR (attack/decay/sustain/release):

    1.0 ┐   ╱╲
        │  ╱  ╲________
    S   │ ╱            ╲
    0.0 └╱──────────────╲──→ elapsed
        A   D   Sustain  R

Both use straight-line segments. Linear envelopes are cheap, predictable,
and punchy; the classic trade-off against exponential curves is documented
to death elsewhere.

Degenerate Phases
-----------------

Zero-length phases are valid configurations, not errors. A kick drum wants
`attack = 0` (instant punch); a gate-like blip wants `release = 0`. The
rule: a zero-length phase is skipped and evaluation lands on the phase's
TERMINAL value (1.0 at the end of attack, 0.0 at the end of release). No
division by zero ever reaches the mix as NaN or infinity.

One deliberate quirk: the AR release ramp is NOT clamped here. With a
release shorter than `duration - attack` the ramp keeps falling below zero
until `duration` is reached. The voice layer clamps to its own amplitude
range, and different voices clamp differently (a bass caps at 0.5), so the
clamp belongs there, not here.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pure envelope shape. All times are in the caller's unit (the engine
/// uses seconds throughout); `evaluate` only ever relates them to each
/// other.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope {
    /// Attack ramp 0 → 1, then a linear fall from 1 at rate `1/release`.
    Ar { attack: f64, release: f64 },
    /// Attack 0 → 1, decay 1 → sustain, hold, release sustain → 0 over the
    /// final `release` window of the note.
    Adsr {
        attack: f64,
        decay: f64,
        sustain: f64,
        release: f64,
    },
}

impl Envelope {
    /// Attack/release envelope. Negative times are treated as zero.
    pub fn ar(attack: f64, release: f64) -> Self {
        Envelope::Ar {
            attack: attack.max(0.0),
            release: release.max(0.0),
        }
    }

    /// Full ADSR envelope. Sustain is clamped to [0, 1].
    pub fn adsr(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Envelope::Adsr {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Evaluate the multiplier at `elapsed` seconds into a note of length
    /// `duration`. Output is unclamped: the AR ramp may undershoot zero
    /// before `duration`; callers clamp to their own range.
    pub fn evaluate(&self, elapsed: f64, duration: f64) -> f64 {
        if elapsed >= duration {
            return 0.0;
        }

        match *self {
            Envelope::Ar { attack, release } => {
                if elapsed < attack {
                    // attack == 0 never reaches this branch
                    elapsed / attack
                } else if release > 0.0 {
                    1.0 - (elapsed - attack) / release
                } else {
                    // zero-length release: terminal value of the ramp
                    0.0
                }
            }
            Envelope::Adsr {
                attack,
                decay,
                sustain,
                release,
            } => {
                let release_start = duration - release;
                if elapsed < attack {
                    elapsed / attack
                } else if elapsed < attack + decay {
                    1.0 - ((elapsed - attack) / decay) * (1.0 - sustain)
                } else if elapsed < release_start {
                    sustain
                } else if release > 0.0 {
                    sustain * (1.0 - (elapsed - release_start) / release)
                } else {
                    0.0
                }
            }
        }
    }
}
