//! Collaborator glue: the audio device seam, waveform image rasterization,
//! and WAV bounces. The core engine only ever sees the `BlockSink` trait;
//! everything in here is replaceable.

pub mod output;
pub mod scope;
pub mod wave;

#[cfg(feature = "rtrb")]
pub use output::CpalOutput;
pub use output::MemorySink;
