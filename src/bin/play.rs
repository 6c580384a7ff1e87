//! Live playback of the demo tune through the default audio device.
//!
//! Runs until killed: the transport keeps rendering blocks and the device's
//! consumption rate paces the loop.

use color_eyre::eyre::Result;
use tinytune::dsp::{Envelope, Waveform};
use tinytune::engine::{EngineConfig, Transport};
use tinytune::io::CpalOutput;
use tinytune::sequencing::{note_freq, Timeline};
use tinytune::synth::{Instrument, Mixer, Voice};
use tinytune::voices;

const PATTERN_REPEATS: usize = 64;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let config = EngineConfig::default();

    // Alternating octave lead, one bar of four one-second notes
    let lead_pattern = Timeline::new()
        .note(note_freq("A4")?, 0.0, 1.0)
        .note(note_freq("A5")?, 1.0, 1.0)
        .note(note_freq("A4")?, 2.0, 1.0)
        .note(note_freq("A5")?, 3.0, 1.0);
    let lead = Voice::new(
        "lead",
        lead_pattern.repeat(PATTERN_REPEATS),
        // short percussive blip at the front of each note
        Instrument::amp_only(Envelope::adsr(0.0, 0.1, 0.0, 0.0)),
        Waveform::Sine,
    )
    .gain(0.6);

    // Four-on-the-floor kick; frequencies are ignored by the pitch sweep
    let kick_pattern = Timeline::new()
        .note(50.0, 0.0, 0.4)
        .note(50.0, 1.0, 0.4)
        .note(50.0, 2.0, 0.4)
        .note(50.0, 3.0, 0.4);

    // Offbeat hats
    let hat_pattern = Timeline::new()
        .note(8000.0, 0.5, 0.1)
        .note(8000.0, 1.5, 0.1)
        .note(8000.0, 2.5, 0.1)
        .note(8000.0, 3.5, 0.1);

    // Root-and-fifth bass line
    let bass_pattern = Timeline::new()
        .note(note_freq("A2")?, 0.0, 0.9)
        .note(note_freq("E2")?, 1.0, 0.9)
        .note(note_freq("A2")?, 2.0, 0.9)
        .note(note_freq("G2")?, 3.0, 0.9);

    let mut mixer = Mixer::new(config.sample_rate_f64())
        .voice(lead)
        .voice(voices::kick(kick_pattern.repeat(PATTERN_REPEATS)))
        .voice(voices::hihat(hat_pattern.repeat(PATTERN_REPEATS)))
        .voice(voices::bass(bass_pattern.repeat(PATTERN_REPEATS)));

    let mut sink = CpalOutput::open(&config)?;
    let mut transport = Transport::new(config);

    log::info!(
        "playing {} voices at {} Hz; Ctrl+C to stop",
        mixer.voices().len(),
        config.sample_rate
    );

    // Indefinite run: only returns on a device fault.
    transport.run(&mut mixer, &mut sink, None)?;
    Ok(())
}
