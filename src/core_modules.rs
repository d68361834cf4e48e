pub mod codec;
pub mod factor;
pub mod filter;
pub mod pixel;
pub mod pixel_buffer;
pub mod statistics;
pub mod transform;
