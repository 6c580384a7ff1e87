//! Low-level DSP primitives used by the voice and mixing layers.
//!
//! These components are allocation-free and realtime-safe. They stay focused
//! on the signal math: envelopes and oscillators are pure functions of an
//! explicit time argument, so the higher layers can call them at any sample
//! position without hidden state getting in the way. The one exception is
//! the noise source, which is passed in explicitly so tests can seed it.

/// Attack/release and ADSR envelope evaluation.
pub mod envelope;
/// Oscillator waveforms and the injectable noise source.
pub mod oscillator;

pub use envelope::Envelope;
pub use oscillator::{Noise, Waveform};
