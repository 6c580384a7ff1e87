//! Offline render of the demo tune.
//!
//! Renders a fixed number of samples through a memory sink, then writes the
//! run's two artifacts: `waveform.png` (oscillogram of the whole render)
//! and `bounce.wav`.

use color_eyre::eyre::Result;
use tinytune::engine::{EngineConfig, Transport};
use tinytune::io::{scope, wave, MemorySink};
use tinytune::sequencing::{note_freq, Timeline};
use tinytune::synth::Mixer;
use tinytune::voices;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let config = EngineConfig::default();

    let kick_pattern = Timeline::new()
        .note(50.0, 0.0, 0.4)
        .note(50.0, 1.0, 0.4)
        .note(50.0, 2.0, 0.4)
        .note(50.0, 3.0, 0.4);

    let hat_pattern = Timeline::new()
        .note(8000.0, 0.5, 0.1)
        .note(8000.0, 1.5, 0.1)
        .note(8000.0, 2.5, 0.1)
        .note(8000.0, 3.5, 0.1);

    let bass_pattern = Timeline::new()
        .note(note_freq("A2")?, 0.0, 0.9)
        .note(note_freq("E2")?, 1.0, 0.9)
        .note(note_freq("A2")?, 2.0, 0.9)
        .note(note_freq("G2")?, 3.0, 0.9);

    // two passes of the pattern, seeded noise for a reproducible bounce
    let mut mixer = Mixer::new(config.sample_rate_f64())
        .voice(voices::kick(kick_pattern.repeat(2)))
        .voice(voices::hihat(hat_pattern.repeat(2)))
        .voice(voices::bass(bass_pattern.repeat(2)))
        .with_noise_seed(7);

    let budget = (mixer.span() * config.sample_rate_f64()).ceil() as u64;
    let mut sink = MemorySink::new();
    let mut transport = Transport::new(config);

    log::info!("rendering {budget} samples offline");
    let log = transport.run(&mut mixer, &mut sink, Some(budget))?;
    let samples = log.snapshot();

    scope::write_waveform("waveform.png", &samples)?;
    wave::write_wav("bounce.wav", &samples, config.sample_rate)?;

    log::info!(
        "wrote waveform.png and bounce.wav ({} samples, {:.2}s)",
        samples.len(),
        samples.len() as f64 / config.sample_rate_f64()
    );
    Ok(())
}
