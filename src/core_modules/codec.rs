// THEORY:
// The `codec` module is the engine's only boundary with the outside world. It
// converts between the opaque platform image type (`image::RgbaImage`) and the
// engine's own `PixelBuffer`, and it resolves named image resources from an
// explicitly configured store. Nothing else in the crate touches the
// filesystem or the `image` crate's decoding machinery.
//
// Key architectural principles:
// 1.  **Opaque Handle In, Opaque Handle Out**: The engine never holds a
//     platform image for longer than one decode/transform/encode cycle. The
//     buffer is the working representation; the image is the artifact.
// 2.  **Explicit Configuration**: The "default resource" is a field on
//     `ResourceStore`, passed in at construction. There is no implicit global
//     naming a bundled asset.
// 3.  **Errors At The Boundary**: Absent resources, unreadable files and
//     degenerate dimensions are all rejected here, so the engine's passes can
//     assume a well-formed buffer.

use std::path::PathBuf;

use image::RgbaImage;

use crate::core_modules::pixel_buffer::pixel_buffer::PixelBuffer;
use crate::error::{Error, Result};

/// Resource directory used when no explicit root is configured.
pub const DEFAULT_RESOURCE_ROOT: &str = "assets";
/// Resource name used when no explicit default is configured.
pub const DEFAULT_RESOURCE_NAME: &str = "default.png";

/// Decodes an opaque image into the engine's pixel buffer representation.
pub fn decode(image: &RgbaImage) -> Result<PixelBuffer> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions {
            width,
            height,
            reason: "decoded image has a zero dimension".to_string(),
        });
    }
    PixelBuffer::from_raw_rgba(width, height, image.as_raw())
}

/// Re-encodes a pixel buffer back into the opaque image type.
pub fn encode(buffer: &PixelBuffer) -> Result<RgbaImage> {
    if buffer.is_empty() {
        return Err(Error::Encode {
            width: buffer.width(),
            height: buffer.height(),
        });
    }
    RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.to_bytes()).ok_or(Error::Encode {
        width: buffer.width(),
        height: buffer.height(),
    })
}

/// Explicit configuration for looking up named image resources on disk.
#[derive(Debug, Clone)]
pub struct ResourceStore {
    /// Directory all resource names are resolved against.
    root: PathBuf,
    /// The resource name selected when a caller asks for "the default".
    default_resource: String,
}

impl Default for ResourceStore {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE_ROOT, DEFAULT_RESOURCE_NAME)
    }
}

impl ResourceStore {
    pub fn new(root: impl Into<PathBuf>, default_resource: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            default_resource: default_resource.into(),
        }
    }

    pub fn default_resource(&self) -> &str {
        &self.default_resource
    }

    /// Loads a named resource and converts it to RGBA.
    pub fn load(&self, name: &str) -> Result<RgbaImage> {
        let path = self.root.join(name);
        if !path.exists() {
            return Err(Error::ResourceNotFound {
                name: name.to_string(),
                path,
            });
        }
        let opened = image::open(&path).map_err(|source| Error::Decode { source })?;
        Ok(opened.to_rgba8())
    }

    /// Loads the configured default resource.
    pub fn load_default(&self) -> Result<RgbaImage> {
        self.load(&self.default_resource)
    }
}
