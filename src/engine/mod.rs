//! Transport loop and engine configuration.

pub mod transport;

pub use transport::{BlockSink, SampleLog, SinkError, Transport, TransportError, TransportState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Process-level constants for a run. These are configuration, not parsed
/// input: binaries bake them in or tweak the defaults in code.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Samples per second.
    pub sample_rate: u32,
    /// Frames rendered per transport tick.
    pub block_size: usize,
    /// Device channel count. The engine renders mono and duplicates the
    /// signal across channels at the device seam.
    pub channels: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            block_size: 1024,
            channels: 1,
        }
    }
}

impl EngineConfig {
    pub fn sample_rate_f64(&self) -> f64 {
        self.sample_rate as f64
    }
}
