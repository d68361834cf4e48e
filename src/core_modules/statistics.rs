// THEORY:
// The `statistics` module summarizes a buffer into per-channel averages. Sums
// are accumulated in u64 so even a maximal raster cannot overflow, and the
// division truncates, matching the truncate-then-clamp convention used by the
// transform passes. An empty buffer has no meaningful average; that case is an
// error rather than a silent zero, because a silent zero is exactly the kind of
// plausible-looking garbage that hides bugs downstream.

use crate::core_modules::pixel_buffer::pixel_buffer::PixelBuffer;
use crate::error::{Error, Result};

/// Integer-truncated per-channel averages over a full buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelAverages {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

/// Averages each channel across all pixels of the buffer.
pub fn rgba_averages(buffer: &PixelBuffer) -> Result<ChannelAverages> {
    let count = buffer.pixel_count() as u64;
    if count == 0 {
        return Err(Error::InvalidDimensions {
            width: buffer.width(),
            height: buffer.height(),
            reason: "cannot average an empty buffer".to_string(),
        });
    }

    let mut sum_r = 0u64;
    let mut sum_g = 0u64;
    let mut sum_b = 0u64;
    let mut sum_a = 0u64;
    for pixel in buffer.pixels() {
        sum_r += pixel.red as u64;
        sum_g += pixel.green as u64;
        sum_b += pixel.blue as u64;
        sum_a += pixel.alpha as u64;
    }

    Ok(ChannelAverages {
        red: (sum_r / count) as u8,
        green: (sum_g / count) as u8,
        blue: (sum_b / count) as u8,
        alpha: (sum_a / count) as u8,
    })
}
