// THEORY:
// The `PixelBuffer` module is the raster the whole engine operates on: a width,
// a height, and a dense, row-major `Vec<Pixel>` where index `y * width + x`
// addresses exactly one pixel. It is produced by the codec from an opaque image,
// mutated in place by the transform passes, summarized by the statistics module,
// and converted back into an opaque image when a session step completes. The
// buffer itself is never the long-lived artifact — the encoded image is.
//
// Key architectural principles:
// 1.  **Validated Construction**: A buffer can only be built when its pixel (or
//     byte) count matches `width * height`. Once constructed, the density
//     invariant holds for the buffer's entire lifetime because the pixel vector
//     is never resized, only rewritten element by element.
// 2.  **Flat Storage**: One contiguous vector, no rows-of-rows. The transform
//     passes iterate it linearly; coordinate addressing is just index math.
// 3.  **Byte-Run Conversions**: The codec speaks flat RGBA byte runs, so the
//     conversions in both directions live here with the layout they depend on.

pub mod pixel_buffer {
    use crate::core_modules::pixel::pixel::{Byte, Bytes, Pixel};
    use crate::error::{Error, Result};

    const CHANNELS: usize = 4;

    /// A dense, row-major raster of RGBA pixels.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PixelBuffer {
        /// The width of the raster in pixels.
        width: u32,
        /// The height of the raster in pixels.
        height: u32,
        /// The flattened pixel data, exactly `width * height` entries.
        pixels: Vec<Pixel>,
    }

    impl PixelBuffer {
        /// Builds a buffer from pre-assembled pixels, enforcing the density
        /// invariant `pixels.len() == width * height`.
        pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
            let expected = width as usize * height as usize;
            if pixels.len() != expected {
                return Err(Error::InvalidDimensions {
                    width,
                    height,
                    reason: format!("expected {expected} pixels, got {}", pixels.len()),
                });
            }
            Ok(Self {
                width,
                height,
                pixels,
            })
        }

        /// Builds a buffer from a flat run of RGBA bytes, 4 bytes per pixel.
        pub fn from_raw_rgba(width: u32, height: u32, bytes: &[Byte]) -> Result<Self> {
            let expected = width as usize * height as usize * CHANNELS;
            if bytes.len() != expected {
                return Err(Error::InvalidDimensions {
                    width,
                    height,
                    reason: format!("expected {expected} bytes of RGBA data, got {}", bytes.len()),
                });
            }
            let pixels = bytes.chunks_exact(CHANNELS).map(Pixel::from).collect();
            Self::new(width, height, pixels)
        }

        /// Flattens the buffer back into the RGBA byte run the codec expects.
        pub fn to_bytes(&self) -> Bytes {
            let mut bytes = Bytes::with_capacity(self.pixels.len() * CHANNELS);
            for pixel in &self.pixels {
                bytes.extend_from_slice(&[pixel.red, pixel.green, pixel.blue, pixel.alpha]);
            }
            bytes
        }

        pub fn width(&self) -> u32 {
            self.width
        }

        pub fn height(&self) -> u32 {
            self.height
        }

        pub fn pixel_count(&self) -> usize {
            self.pixels.len()
        }

        pub fn is_empty(&self) -> bool {
            self.pixels.is_empty()
        }

        pub fn pixels(&self) -> &[Pixel] {
            &self.pixels
        }

        pub fn pixels_mut(&mut self) -> &mut [Pixel] {
            &mut self.pixels
        }

        /// Coordinate addressing over the flat storage: `y * width + x`.
        pub fn pixel_at(&self, x: u32, y: u32) -> Option<&Pixel> {
            if x >= self.width || y >= self.height {
                return None;
            }
            self.pixels.get((y * self.width + x) as usize)
        }
    }
}
