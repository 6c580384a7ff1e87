/*
Transport Loop
==============

The transport drives the mixer at a fixed block size and hands each finished
block to the device collaborator. The loop is single-threaded, cooperative,
and block-synchronous: `BlockSink::write` blocks until the device has
consumed (or buffered) the block, so the device's own pacing is the loop's
pacing. Nothing inside a tick suspends, and a block always completes once
started.

The State Machine
-----------------

    Idle ──run()──→ Running ──budget reached──→ Stopped
                       │
                       └──sink error──→ Stopped (error returned, fatal)

A device fault is fatal. There is no partial-block retry and no
reconnect; a higher layer may restart the whole process.

The Sample Log
--------------

Every rendered sample is also appended to a log for later visualization.
Finite renders know their total length up front, so the log is pre-sized and
never reallocates. Indefinite (live) runs would otherwise grow without
bound, so they keep a fixed-capacity ring holding the most recent samples
instead.
*/

use std::fmt;

use crate::synth::Mixer;

use super::EngineConfig;

/// Blocking device seam. The transport treats `write` as synchronous: it
/// must not return until the block is consumed or buffered.
pub trait BlockSink {
    fn write(&mut self, block: &[f32]) -> Result<(), SinkError>;
}

/// A failed block write. Fatal to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The device rejected or failed the write.
    Device(String),
    /// The consumer side has gone away (stream closed, process exiting).
    Disconnected,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Device(msg) => write!(f, "device write failed: {msg}"),
            SinkError::Disconnected => write!(f, "output sink disconnected"),
        }
    }
}

impl std::error::Error for SinkError {}

/// Transport failure: the sink fault plus where in the run it happened.
#[derive(Debug)]
pub struct TransportError {
    pub sample_position: u64,
    pub source: SinkError,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transport stopped at sample {}: {}",
            self.sample_position, self.source
        )
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    Idle,
    Running,
    Stopped,
}

/// Accumulated samples for visualization.
///
/// `Finite` is pre-sized to the known total; `Ring` keeps the most recent
/// `capacity` samples of an indefinite run.
#[derive(Debug, Clone)]
pub enum SampleLog {
    Finite(Vec<f32>),
    Ring {
        buf: Vec<f32>,
        head: usize,
        filled: bool,
    },
}

impl SampleLog {
    fn finite(total: usize) -> Self {
        SampleLog::Finite(Vec::with_capacity(total))
    }

    fn ring(capacity: usize) -> Self {
        SampleLog::Ring {
            buf: vec![0.0; capacity.max(1)],
            head: 0,
            filled: false,
        }
    }

    fn extend(&mut self, block: &[f32]) {
        match self {
            SampleLog::Finite(samples) => samples.extend_from_slice(block),
            SampleLog::Ring { buf, head, filled } => {
                for &s in block {
                    buf[*head] = s;
                    *head += 1;
                    if *head == buf.len() {
                        *head = 0;
                        *filled = true;
                    }
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SampleLog::Finite(samples) => samples.len(),
            SampleLog::Ring { buf, head, filled } => {
                if *filled {
                    buf.len()
                } else {
                    *head
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples in time order, oldest first.
    pub fn snapshot(&self) -> Vec<f32> {
        match self {
            SampleLog::Finite(samples) => samples.clone(),
            SampleLog::Ring { buf, head, filled } => {
                if *filled {
                    let mut out = Vec::with_capacity(buf.len());
                    out.extend_from_slice(&buf[*head..]);
                    out.extend_from_slice(&buf[..*head]);
                    out
                } else {
                    buf[..*head].to_vec()
                }
            }
        }
    }
}

/// Block-synchronous render loop.
pub struct Transport {
    config: EngineConfig,
    state: TransportState,
    samples_rendered: u64,
}

impl Transport {
    /// Ring capacity for indefinite runs, in seconds of audio.
    const RING_SECONDS: u32 = 2;

    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: TransportState::Idle,
            samples_rendered: 0,
        }
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Monotonic count of samples rendered so far.
    pub fn samples_rendered(&self) -> u64 {
        self.samples_rendered
    }

    /// Drive `mixer` through `sink` until `budget` samples have been
    /// rendered.
    ///
    /// Each tick renders one block (the final tick of a finite run renders
    /// the remainder, so the log holds exactly `budget` samples), writes it
    /// to the sink, and appends it to the returned log. With `budget =
    /// None` the loop runs until the process is terminated or the sink
    /// fails; the log then holds the most recent few seconds.
    pub fn run<S: BlockSink>(
        &mut self,
        mixer: &mut Mixer,
        sink: &mut S,
        budget: Option<u64>,
    ) -> Result<SampleLog, TransportError> {
        let mut log = match budget {
            Some(total) => SampleLog::finite(total as usize),
            None => SampleLog::ring((self.config.sample_rate * Self::RING_SECONDS) as usize),
        };
        let mut block = vec![0.0f32; self.config.block_size];

        self.state = TransportState::Running;
        loop {
            let frames = match budget {
                Some(total) => {
                    let remaining = total.saturating_sub(self.samples_rendered);
                    if remaining == 0 {
                        self.state = TransportState::Stopped;
                        return Ok(log);
                    }
                    (remaining as usize).min(self.config.block_size)
                }
                None => self.config.block_size,
            };

            let chunk = &mut block[..frames];
            mixer.render_block(chunk, self.samples_rendered);

            if let Err(source) = sink.write(chunk) {
                self.state = TransportState::Stopped;
                return Err(TransportError {
                    sample_position: self.samples_rendered,
                    source,
                });
            }

            log.extend(chunk);
            self.samples_rendered += frames as u64;
        }
    }
}
