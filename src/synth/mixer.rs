/*
Mixing Engine
=============

The mixer owns the fixed set of voices that make up a tune, plus the one
piece of hidden state in the whole synthesis path: the noise source. Each
output sample is the plain sum of every voice's contribution at the same
absolute time. No normalization happens here; the transport hard-limits into
[-1, 1] when it fills the device block, because how much headroom a mix
needs is a composition decision (gains), not a mixer policy.

Given the same voices and the same time, output is bit-identical across
renders, except for noise-shaped voices whose output is only statistically
bounded. Seeding the noise source makes even those reproducible.
*/

use crate::dsp::Noise;

use super::voice::Voice;

/// A fixed set of voices summed into one mono signal.
pub struct Mixer {
    voices: Vec<Voice>,
    noise: Noise,
    sample_rate: f64,
}

impl Mixer {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            voices: Vec::new(),
            noise: Noise::new(),
            sample_rate,
        }
    }

    /// Replace the noise source with a seeded one for deterministic output.
    pub fn with_noise_seed(mut self, seed: u64) -> Self {
        self.noise = Noise::seeded(seed);
        self
    }

    /// Add a voice to the mix. Voices render in insertion order.
    pub fn voice(mut self, voice: Voice) -> Self {
        self.voices.push(voice);
        self
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Length of the longest voice timeline in seconds.
    pub fn span(&self) -> f64 {
        self.voices
            .iter()
            .map(|v| v.timeline.span())
            .fold(0.0, f64::max)
    }

    /// Sum of all voice contributions at absolute time `t` seconds.
    pub fn render_sample(&mut self, t: f64) -> f64 {
        let noise = &mut self.noise;
        self.voices.iter().map(|v| v.render(t, noise)).sum()
    }

    /// Fill `out` starting at absolute sample index `start_sample`, mapping
    /// each index to `index / sample_rate` seconds and hard-limiting into
    /// [-1, 1] for the device-facing block.
    pub fn render_block(&mut self, out: &mut [f32], start_sample: u64) {
        for (i, slot) in out.iter_mut().enumerate() {
            let t = (start_sample + i as u64) as f64 / self.sample_rate;
            *slot = self.render_sample(t).clamp(-1.0, 1.0) as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::{Envelope, Waveform};
    use crate::sequencing::Timeline;
    use crate::synth::{Instrument, Voice};

    fn tone(name: &str, freq: f64, gain: f64) -> Voice {
        Voice::new(
            name,
            Timeline::new().note_vel(freq, 0.0, 1.0, 1.0),
            Instrument::amp_only(Envelope::ar(0.0, f64::MAX)),
            Waveform::Sine,
        )
        .gain(gain)
    }

    #[test]
    fn empty_mix_is_silent() {
        let mut mixer = Mixer::new(44_100.0);
        assert_eq!(mixer.render_sample(0.5), 0.0);
    }

    #[test]
    fn voices_sum_linearly() {
        let t = 0.0137;
        let mut solo_a = Mixer::new(44_100.0).voice(tone("a", 220.0, 0.3));
        let mut solo_b = Mixer::new(44_100.0).voice(tone("b", 330.0, 0.3));
        let mut both = Mixer::new(44_100.0)
            .voice(tone("a", 220.0, 0.3))
            .voice(tone("b", 330.0, 0.3));

        let sum = solo_a.render_sample(t) + solo_b.render_sample(t);
        assert!((both.render_sample(t) - sum).abs() < 1e-12);
    }

    #[test]
    fn non_noise_renders_are_identical() {
        let make = || {
            Mixer::new(44_100.0)
                .voice(tone("a", 220.0, 0.4))
                .voice(tone("b", 331.0, 0.4))
        };
        let mut first = make();
        let mut second = make();

        let mut block_a = vec![0.0f32; 512];
        let mut block_b = vec![0.0f32; 512];
        first.render_block(&mut block_a, 0);
        second.render_block(&mut block_b, 0);
        assert_eq!(block_a, block_b);
    }

    #[test]
    fn seeded_noise_renders_are_identical() {
        let make = || {
            let hat = Voice::new(
                "hat",
                Timeline::new().note(440.0, 0.0, 0.5),
                Instrument::amp_only(Envelope::ar(0.0, 0.5)),
                Waveform::Noise,
            );
            Mixer::new(44_100.0).voice(hat).with_noise_seed(99)
        };
        let mut first = make();
        let mut second = make();

        let mut block_a = vec![0.0f32; 256];
        let mut block_b = vec![0.0f32; 256];
        first.render_block(&mut block_a, 0);
        second.render_block(&mut block_b, 0);
        assert_eq!(block_a, block_b);
    }

    #[test]
    fn block_samples_are_hard_limited() {
        // two full-scale voices sum past 1.0; the block clamps
        let mut mixer = Mixer::new(44_100.0)
            .voice(tone("a", 100.0, 1.0))
            .voice(tone("b", 100.0, 1.0));

        let mut block = vec![0.0f32; 2048];
        mixer.render_block(&mut block, 0);
        assert!(block.iter().all(|s| s.abs() <= 1.0));
        // and the raw sum really does exceed the limit somewhere
        let peak_t = (0..2048)
            .map(|i| i as f64 / 44_100.0)
            .fold(0.0f64, |acc, t| acc.max(mixer.render_sample(t)));
        assert!(peak_t > 1.0);
    }

    #[test]
    fn block_indexing_matches_sample_times() {
        let mut mixer = Mixer::new(44_100.0).voice(tone("a", 220.0, 0.5));
        let mut block = vec![0.0f32; 64];
        mixer.render_block(&mut block, 1000);

        let expected = mixer.render_sample(1010.0 / 44_100.0) as f32;
        assert!((block[10] - expected).abs() < 1e-6);
    }

    #[test]
    fn span_covers_longest_voice() {
        let mixer = Mixer::new(44_100.0)
            .voice(tone("short", 220.0, 0.5))
            .voice(Voice::new(
                "long",
                Timeline::new().note(110.0, 0.0, 3.5),
                Instrument::amp_only(Envelope::ar(0.0, 3.5)),
                Waveform::Saw,
            ));
        assert_eq!(mixer.span(), 3.5);
    }
}
