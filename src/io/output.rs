//! `BlockSink` implementations.
//!
//! `CpalOutput` is the real device: the transport thread pushes samples
//! into a lock-free ring buffer and the cpal callback drains it. `write`
//! blocks while the ring is full, which is exactly the pacing contract the
//! transport expects: the device's consumption rate becomes the loop's
//! clock. `MemorySink` captures samples for offline renders and tests.

use crate::engine::{BlockSink, SinkError};

/// Sink that accumulates every sample in memory. Used for offline bounces
/// and as a test double for the device.
#[derive(Debug, Default)]
pub struct MemorySink {
    samples: Vec<f32>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

impl BlockSink for MemorySink {
    fn write(&mut self, block: &[f32]) -> Result<(), SinkError> {
        self.samples.extend_from_slice(block);
        Ok(())
    }
}

#[cfg(feature = "rtrb")]
pub use cpal_output::CpalOutput;

#[cfg(feature = "rtrb")]
mod cpal_output {
    use std::time::Duration;

    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

    use crate::engine::{BlockSink, EngineConfig, SinkError};

    /// Default audio device as a blocking block sink.
    ///
    /// The mono engine signal is duplicated across the device's channels in
    /// the callback. The ring holds a few blocks of headroom so the
    /// transport stays slightly ahead of the hardware.
    pub struct CpalOutput {
        producer: rtrb::Producer<f32>,
        // Held for its lifetime; dropping the stream stops playback.
        _stream: cpal::Stream,
    }

    impl CpalOutput {
        /// Ring capacity in blocks.
        const RING_BLOCKS: usize = 4;

        /// Open the default output device at the configured rate.
        pub fn open(config: &EngineConfig) -> Result<Self, SinkError> {
            let host = cpal::default_host();
            let device = host
                .default_output_device()
                .ok_or_else(|| SinkError::Device("no default output device".into()))?;

            let channels = config.channels.max(1);
            let stream_config = cpal::StreamConfig {
                channels,
                sample_rate: cpal::SampleRate(config.sample_rate),
                buffer_size: cpal::BufferSize::Default,
            };

            let (producer, mut consumer) =
                rtrb::RingBuffer::<f32>::new(config.block_size * Self::RING_BLOCKS);

            let channels = channels as usize;
            let stream = device
                .build_output_stream(
                    &stream_config,
                    move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                        for frame in data.chunks_mut(channels) {
                            // underrun plays silence rather than stale data
                            let sample = consumer.pop().unwrap_or(0.0);
                            for slot in frame.iter_mut() {
                                *slot = sample;
                            }
                        }
                    },
                    |err| log::error!("output stream error: {err}"),
                    None,
                )
                .map_err(|e| SinkError::Device(e.to_string()))?;

            stream
                .play()
                .map_err(|e| SinkError::Device(e.to_string()))?;

            log::info!(
                "opened output device at {} Hz, {} channel(s), block {}",
                config.sample_rate,
                channels,
                config.block_size
            );

            Ok(Self {
                producer,
                _stream: stream,
            })
        }
    }

    impl BlockSink for CpalOutput {
        fn write(&mut self, block: &[f32]) -> Result<(), SinkError> {
            for &sample in block {
                let mut pending = sample;
                loop {
                    match self.producer.push(pending) {
                        Ok(()) => break,
                        Err(rtrb::PushError::Full(rejected)) => {
                            if self.producer.is_abandoned() {
                                return Err(SinkError::Disconnected);
                            }
                            pending = rejected;
                            // ring is full: the device is pacing us
                            std::thread::sleep(Duration::from_micros(500));
                        }
                    }
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_concatenates_blocks() {
        let mut sink = MemorySink::new();
        sink.write(&[0.1, 0.2]).unwrap();
        sink.write(&[0.3]).unwrap();
        assert_eq!(sink.samples(), &[0.1, 0.2, 0.3]);
    }
}
