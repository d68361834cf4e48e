// THEORY:
// The `Pixel` module is the most fundamental unit of the transform engine. It is
// a "dumb" data container for a single RGBA pixel: four independent 8-bit
// channels and nothing else. All arithmetic lives elsewhere — the transform
// passes read and write channels, the statistics module sums them. A pixel has
// no knowledge of its neighbors and shares no state with them, which is what
// makes every transform a trivially independent per-pixel operation.
//
// Key architectural principles:
// 1.  **Plain Data**: No cached or derived values. A channel is a byte; a pixel
//     is four bytes. Anything computed from those bytes belongs to the module
//     that needs it.
// 2.  **Byte-Slice Conversions**: The codec boundary hands us flat RGBA byte
//     runs, so the conversions to and from a 4-byte slice live here, next to
//     the data they describe.

pub mod pixel {
    pub type Byte = u8;
    pub type Bytes = Vec<Byte>;
    pub type Channel = Byte;

    const CHANNELS: usize = 4;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into pixel.", bytes.len());
            }
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<Pixel> for Bytes {
        fn from(pixel: Pixel) -> Self {
            vec![pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }
}
