pub mod dsp;
pub mod engine; // Transport loop and engine configuration
pub mod io;
pub mod sequencing; // Notes, timelines, pitch lookup
pub mod synth; // Voices and the mixing engine
pub mod voices; // Pre-built voices (kick, hihat, bass)

pub const MAX_BLOCK_SIZE: usize = 2048;
