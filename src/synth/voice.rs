/*
Voice Rendering
===============

A voice is one independent sound-generating path: timeline + instrument +
oscillator shape + a pitch rule + gain. Rendering one sample walks a fixed
pipeline:

  1. Find the active note at the absolute time (first match wins).
  2. elapsed = t - note.start
  3. amp   = clamp(amp_envelope(elapsed, duration), amp_min, amp_max)
  4. pitch = note frequency (fixed mode), or
             clamp(pitch_envelope(elapsed, duration) * scale, min, max)
             (swept mode; how a kick drum sweeps downward)
  5. sample = oscillator(shape, elapsed, pitch, amp)
              * velocity * gain

The amplitude clamp range is per-voice because voices sit at different
loudness ceilings in the mix: a kick clamps to [0, 1], a bass to [0, 0.5].
The clamp also absorbs the AR envelope's deliberate undershoot.
*/

use crate::dsp::{oscillator, Noise, Waveform};
use crate::sequencing::Timeline;

use super::instrument::Instrument;

/// How a voice derives oscillator frequency from the active note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PitchMode {
    /// Play the matched note's own frequency; the pitch envelope is unused.
    Fixed,
    /// Drive frequency from the pitch envelope: `env * scale`, clamped to
    /// `[min, max]` Hz. The matched note's frequency is ignored.
    Swept { scale: f64, min: f64, max: f64 },
}

/// One timeline played through one instrument and oscillator.
pub struct Voice {
    /// Display name for logs.
    pub name: String,
    pub timeline: Timeline,
    pub instrument: Instrument,
    pub waveform: Waveform,
    pitch_mode: PitchMode,
    amp_min: f64,
    amp_max: f64,
    gain: f64,
    default_velocity: f64,
}

impl Voice {
    pub fn new(
        name: impl Into<String>,
        timeline: Timeline,
        instrument: Instrument,
        waveform: Waveform,
    ) -> Self {
        Self {
            name: name.into(),
            timeline,
            instrument,
            waveform,
            pitch_mode: PitchMode::Fixed,
            amp_min: 0.0,
            amp_max: 1.0,
            gain: 1.0,
            default_velocity: 0.8,
        }
    }

    /// Drive frequency from the pitch envelope instead of the note.
    pub fn swept_pitch(mut self, scale: f64, min: f64, max: f64) -> Self {
        self.pitch_mode = PitchMode::Swept { scale, min, max };
        self
    }

    /// Clamp range applied to the amplitude envelope's output.
    pub fn amp_range(mut self, min: f64, max: f64) -> Self {
        self.amp_min = min;
        self.amp_max = max;
        self
    }

    /// Output gain applied after velocity.
    pub fn gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Velocity used by notes that don't carry their own.
    pub fn default_velocity(mut self, velocity: f64) -> Self {
        self.default_velocity = velocity.clamp(0.0, 1.0);
        self
    }

    pub fn pitch_mode(&self) -> PitchMode {
        self.pitch_mode
    }

    /// Instantaneous contribution of this voice at absolute time `t`
    /// seconds. Silence (0.0) when no note is active.
    pub fn render(&self, t: f64, noise: &mut Noise) -> f64 {
        let Some(note) = self.timeline.active_at(t) else {
            return 0.0;
        };

        let elapsed = t - note.start;
        let amp = self
            .instrument
            .amp
            .evaluate(elapsed, note.duration)
            .clamp(self.amp_min, self.amp_max);

        let pitch = match self.pitch_mode {
            PitchMode::Fixed => note.frequency,
            PitchMode::Swept { scale, min, max } => {
                (self.instrument.pitch.evaluate(elapsed, note.duration) * scale).clamp(min, max)
            }
        };

        let velocity = note.velocity.unwrap_or(self.default_velocity);
        oscillator::render(self.waveform, elapsed, pitch, amp, noise) * velocity * self.gain
    }
}
