// THEORY:
// The `transform` module is the engine proper: the four per-pixel passes that
// give this crate a reason to exist. Every pass has the same shape — iterate
// the buffer linearly, compute new red/green/blue values from a small formula,
// push each through the clamping discipline, write back. Alpha is never
// modified by any pass.
//
// Key architectural principles:
// 1.  **One Pass, No Streaming**: Each transform fully re-materializes the
//     buffer in a single blocking O(width * height) loop with no I/O inside it.
//     Pixels are independent, so correctness never depends on visit order.
// 2.  **Truncate Then Clamp**: Every channel write truncates the computed real
//     value toward zero first and clamps to [0, 255] second. The order only
//     matters at exact boundary values, but it is part of the contract.
// 3.  **Factors Arrive Normalized**: Passes trust their `Factor` argument; all
//     argument interpretation happens upstream in the `factor` module. Extreme
//     factors are legal inputs here and the clamp absorbs them.

use crate::core_modules::factor::Factor;
use crate::core_modules::pixel_buffer::pixel_buffer::PixelBuffer;
use log::debug;

/// The truncate-then-clamp write discipline shared by every pass.
fn clamp_channel(computed: f64) -> u8 {
    computed.trunc().clamp(0.0, 255.0) as u8
}

/// Pushes every channel toward white: `c' = c + (255 - c) * factor`.
/// Factor 0 is a no-op, factor 1 is fully white.
pub fn lighten(buffer: &mut PixelBuffer, factor: Factor) {
    debug!("lighten pass over {} pixels, factor {factor}", buffer.pixel_count());
    for pixel in buffer.pixels_mut() {
        pixel.red = clamp_channel(pixel.red as f64 + (255.0 - pixel.red as f64) * factor);
        pixel.green = clamp_channel(pixel.green as f64 + (255.0 - pixel.green as f64) * factor);
        pixel.blue = clamp_channel(pixel.blue as f64 + (255.0 - pixel.blue as f64) * factor);
    }
}

/// Pushes every channel toward black: `c' = c * (1 - factor)`.
pub fn darken(buffer: &mut PixelBuffer, factor: Factor) {
    debug!("darken pass over {} pixels, factor {factor}", buffer.pixel_count());
    for pixel in buffer.pixels_mut() {
        pixel.red = clamp_channel(pixel.red as f64 * (1.0 - factor));
        pixel.green = clamp_channel(pixel.green as f64 * (1.0 - factor));
        pixel.blue = clamp_channel(pixel.blue as f64 * (1.0 - factor));
    }
}

/// Scales every channel's deviation from mid-grey: `c' = factor * (c - 128) + 128`.
/// Factor 1 is the identity, factor 0 collapses to flat grey, factors above 1
/// increase contrast and factors between 0 and 1 decrease it.
pub fn change_contrast(buffer: &mut PixelBuffer, factor: Factor) {
    debug!(
        "contrast pass over {} pixels, factor {factor}",
        buffer.pixel_count()
    );
    for pixel in buffer.pixels_mut() {
        pixel.red = clamp_channel(factor * (pixel.red as f64 - 128.0) + 128.0);
        pixel.green = clamp_channel(factor * (pixel.green as f64 - 128.0) + 128.0);
        pixel.blue = clamp_channel(factor * (pixel.blue as f64 - 128.0) + 128.0);
    }
}

/// Replaces red, green and blue with their truncated mean: `(r + g + b) / 3`.
pub fn grey_scale(buffer: &mut PixelBuffer) {
    debug!("greyscale pass over {} pixels", buffer.pixel_count());
    for pixel in buffer.pixels_mut() {
        let grey = ((pixel.red as u32 + pixel.green as u32 + pixel.blue as u32) / 3) as u8;
        pixel.red = grey;
        pixel.green = grey;
        pixel.blue = grey;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::pixel::pixel::Pixel;

    fn single_pixel_buffer(red: u8, green: u8, blue: u8, alpha: u8) -> PixelBuffer {
        PixelBuffer::new(1, 1, vec![Pixel::new(red, green, blue, alpha)]).expect("valid buffer")
    }

    fn sample_values() -> [u8; 7] {
        [0, 1, 64, 127, 128, 200, 255]
    }

    #[test]
    fn lighten_is_monotonic_non_decreasing() {
        for factor in [0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            for value in sample_values() {
                let mut buffer = single_pixel_buffer(value, value, value, 255);
                lighten(&mut buffer, factor);
                let result = buffer.pixels()[0].red;
                assert!(result >= value, "lighten({factor}) lowered {value} to {result}");
                if factor == 0.0 || value == 255 {
                    assert_eq!(result, value);
                }
            }
        }
    }

    #[test]
    fn darken_is_monotonic_non_increasing() {
        for factor in [0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            for value in sample_values() {
                let mut buffer = single_pixel_buffer(value, value, value, 255);
                darken(&mut buffer, factor);
                let result = buffer.pixels()[0].red;
                assert!(result <= value, "darken({factor}) raised {value} to {result}");
                if factor == 0.0 {
                    assert_eq!(result, value);
                }
            }
        }
    }

    #[test]
    fn contrast_factor_one_is_identity() {
        let mut buffer = single_pixel_buffer(13, 128, 250, 77);
        let original = buffer.clone();
        change_contrast(&mut buffer, 1.0);
        assert_eq!(buffer, original);
    }

    #[test]
    fn contrast_factor_zero_collapses_to_mid_grey() {
        let mut buffer = single_pixel_buffer(0, 128, 255, 42);
        change_contrast(&mut buffer, 0.0);
        let pixel = buffer.pixels()[0];
        assert_eq!((pixel.red, pixel.green, pixel.blue), (128, 128, 128));
        assert_eq!(pixel.alpha, 42);
    }

    #[test]
    fn grey_scale_truncates_and_is_idempotent() {
        let mut buffer = single_pixel_buffer(10, 20, 35, 255);
        grey_scale(&mut buffer);
        // (10 + 20 + 35) / 3 = 21.66.. truncates to 21
        let pixel = buffer.pixels()[0];
        assert_eq!((pixel.red, pixel.green, pixel.blue), (21, 21, 21));

        let once = buffer.clone();
        grey_scale(&mut buffer);
        assert_eq!(buffer, once);
    }

    #[test]
    fn extreme_factors_stay_in_range() {
        for value in sample_values() {
            let mut buffer = single_pixel_buffer(value, value, value, 255);
            lighten(&mut buffer, 5.0);
            assert_eq!(buffer.pixels()[0].red, 255);

            let mut buffer = single_pixel_buffer(value, value, value, 255);
            darken(&mut buffer, 3.0);
            assert_eq!(buffer.pixels()[0].red, 0);

            let mut buffer = single_pixel_buffer(value, value, value, 255);
            change_contrast(&mut buffer, 100.0);
            let red = buffer.pixels()[0].red;
            assert!(red == 0 || red == 255 || value == 128);
        }
    }

    #[test]
    fn alpha_is_never_modified() {
        let mut buffer = single_pixel_buffer(5, 90, 180, 33);
        lighten(&mut buffer, 0.5);
        darken(&mut buffer, 0.5);
        change_contrast(&mut buffer, 3.0);
        grey_scale(&mut buffer);
        assert_eq!(buffer.pixels()[0].alpha, 33);
    }
}
