/*
Oscillators
===========

An oscillator maps a phase position to an instantaneous sample value. Like
the envelopes, rendering is a pure function of its inputs:

    render(waveform, phase_secs, freq, amp) -> sample

`phase_secs` is time since the note started, so every note restarts its
waveform from phase zero. That costs a tiny phase discontinuity at note
boundaries (inaudible under the amplitude envelope) and buys the same
property the envelopes have: any sample can be computed independently.

Waveform character:

  Sine: fundamental only. Smooth and deep; the body of a kick drum.
  Saw:  every harmonic, falling off as 1/n. Bright and buzzy; bass lines.
  Noise: all frequencies at once, no pitch. Hi-hats and texture.

Noise is the one impure shape. Rather than reaching for a global RNG, the
generator state lives in an explicit `Noise` value owned by the mixer and
threaded through every render call. Tests construct it from a fixed seed and
get reproducible "random" output.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
    Noise,
}

/// Uniform noise source backing `Waveform::Noise`.
///
/// A thin wrapper over a seedable PRNG so the only hidden state in the
/// oscillator bank is injectable.
#[derive(Debug, Clone)]
pub struct Noise {
    rng: SmallRng,
}

impl Noise {
    /// Noise source with an arbitrary (entropy-derived) seed.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic noise source for tests and reproducible renders.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// One bipolar draw in [-1, 1).
    pub fn next_bipolar(&mut self) -> f64 {
        self.rng.gen::<f64>() * 2.0 - 1.0
    }
}

impl Default for Noise {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one sample of `waveform` at `phase_secs` seconds into the cycle,
/// scaled by `amp`. `freq` is ignored by `Noise`.
pub fn render(waveform: Waveform, phase_secs: f64, freq: f64, amp: f64, noise: &mut Noise) -> f64 {
    match waveform {
        Waveform::Sine => (std::f64::consts::TAU * phase_secs * freq).sin() * amp,
        Waveform::Saw => (((phase_secs * freq * 2.0).rem_euclid(2.0)) - 1.0) * amp,
        Waveform::Noise => noise.next_bipolar() * amp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_starts_at_zero_phase() {
        let mut noise = Noise::seeded(0);
        let v = render(Waveform::Sine, 0.0, 440.0, 1.0, &mut noise);
        assert!(v.abs() < 1e-12);
    }

    #[test]
    fn sine_returns_to_start_after_one_period() {
        let mut noise = Noise::seeded(0);
        let freq = 440.0;
        let start = render(Waveform::Sine, 0.0, freq, 1.0, &mut noise);
        let one_period = render(Waveform::Sine, 1.0 / freq, freq, 1.0, &mut noise);
        assert!((one_period - start).abs() < 1e-9);
    }

    #[test]
    fn saw_is_bipolar_ramp() {
        let mut noise = Noise::seeded(0);
        let freq = 100.0; // period 10ms
        // phase 0: bottom of the ramp
        let v0 = render(Waveform::Saw, 0.0, freq, 1.0, &mut noise);
        assert!((v0 - (-1.0)).abs() < 1e-12);
        // quarter period: -0.5
        let v1 = render(Waveform::Saw, 0.0025, freq, 1.0, &mut noise);
        assert!((v1 - (-0.5)).abs() < 1e-9);
        // just before wrap: near +1
        let v2 = render(Waveform::Saw, 0.0099999, freq, 1.0, &mut noise);
        assert!(v2 > 0.99);
    }

    #[test]
    fn saw_wraps_at_period_boundary() {
        let mut noise = Noise::seeded(0);
        // power-of-two frequency keeps the period exactly representable
        let freq = 256.0;
        let v = render(Waveform::Saw, 1.0 / freq, freq, 1.0, &mut noise);
        assert!((v - (-1.0)).abs() < 1e-9);
    }

    #[test]
    fn amp_scales_output() {
        let mut noise = Noise::seeded(0);
        let full = render(Waveform::Sine, 0.0003, 440.0, 1.0, &mut noise);
        let half = render(Waveform::Sine, 0.0003, 440.0, 0.5, &mut noise);
        assert!((half - full * 0.5).abs() < 1e-12);
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let mut a = Noise::seeded(42);
        let mut b = Noise::seeded(42);
        for _ in 0..64 {
            assert_eq!(a.next_bipolar(), b.next_bipolar());
        }
    }

    #[test]
    fn noise_stays_in_amp_bounds() {
        let mut noise = Noise::seeded(7);
        for _ in 0..1024 {
            let v = render(Waveform::Noise, 0.0, 0.0, 0.3, &mut noise);
            assert!(v.abs() <= 0.3);
        }
    }
}
