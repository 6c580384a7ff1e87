/*
Waveform Rasterization
======================

Turns a finite sample sequence into a grayscale oscillogram: white
background, black trace, midline at zero. The canvas is a fixed 2000x200 so
one run always produces the same artifact shape regardless of how many
samples were rendered.

Rasterization is column-oriented: every sample maps to a column, each column
draws the vertical span its samples cover, and adjacent columns are bridged
so steep slopes stay connected instead of dissolving into dots. With more
samples than columns (the normal case) this collapses each column to its
min/max band, which is how hardware scopes draw dense signals too.
*/

use std::fmt;
use std::path::Path;

/// Canvas width in pixels.
pub const WIDTH: usize = 2000;
/// Canvas height in pixels.
pub const HEIGHT: usize = 200;

const BACKGROUND: u8 = 0xff;
const TRACE: u8 = 0x00;

/// Failure while encoding or writing the image artifact.
#[derive(Debug)]
pub enum ScopeError {
    Encode(png::EncodingError),
    Io(std::io::Error),
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::Encode(e) => write!(f, "png encoding failed: {e}"),
            ScopeError::Io(e) => write!(f, "writing waveform image failed: {e}"),
        }
    }
}

impl std::error::Error for ScopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScopeError::Encode(e) => Some(e),
            ScopeError::Io(e) => Some(e),
        }
    }
}

impl From<png::EncodingError> for ScopeError {
    fn from(e: png::EncodingError) -> Self {
        ScopeError::Encode(e)
    }
}

impl From<std::io::Error> for ScopeError {
    fn from(e: std::io::Error) -> Self {
        ScopeError::Io(e)
    }
}

fn sample_to_row(sample: f32) -> usize {
    let mid = (HEIGHT / 2) as f32;
    let row = mid - sample.clamp(-1.0, 1.0) * (mid - 1.0);
    (row as usize).min(HEIGHT - 1)
}

/// Rasterize samples (assumed in [-1, 1]) into a row-major grayscale pixel
/// buffer of `WIDTH * HEIGHT` bytes.
pub fn rasterize(samples: &[f32]) -> Vec<u8> {
    let mut pixels = vec![BACKGROUND; WIDTH * HEIGHT];
    if samples.is_empty() {
        return pixels;
    }

    let mut draw_span = |x: usize, top: usize, bottom: usize| {
        for y in top..=bottom {
            pixels[y * WIDTH + x] = TRACE;
        }
    };

    let mut prev_row = sample_to_row(samples[0]);
    for x in 0..WIDTH {
        // samples covered by this column (always at least one)
        let lo = x * samples.len() / WIDTH;
        let hi = (((x + 1) * samples.len() / WIDTH).max(lo + 1)).min(samples.len());

        let mut top = sample_to_row(samples[lo]);
        let mut bottom = top;
        for &s in &samples[lo..hi] {
            let row = sample_to_row(s);
            top = top.min(row);
            bottom = bottom.max(row);
        }

        // bridge to the previous column so steep slopes stay connected
        draw_span(x, top.min(prev_row), bottom.max(prev_row));
        prev_row = sample_to_row(samples[hi - 1]);
    }

    pixels
}

/// Fixed-length variant: rasterize only the first `frame_count` samples of
/// a larger buffer (the device-facing block shape).
pub fn rasterize_frames(buffer: &[f32], frame_count: usize) -> Vec<u8> {
    rasterize(&buffer[..frame_count.min(buffer.len())])
}

/// Encode a rasterized pixel buffer as a grayscale PNG byte buffer.
pub fn encode_png(pixels: &[u8]) -> Result<Vec<u8>, ScopeError> {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, WIDTH as u32, HEIGHT as u32);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(pixels)?;
    }
    Ok(bytes)
}

/// Rasterize, encode, and write the one image artifact of a run.
pub fn write_waveform(path: impl AsRef<Path>, samples: &[f32]) -> Result<(), ScopeError> {
    let pixels = rasterize(samples);
    let bytes = encode_png(&pixels)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
