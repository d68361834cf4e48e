// THEORY:
// The `session` module is the final, top-level API for the transform engine.
// An `ImageSession` wraps exactly one opaque image. Every transform runs the
// same three stages: decode the image into a `PixelBuffer`, run one engine
// pass over it, re-encode the result into a fresh image owned by the returned
// session.
//
// Key architectural principles:
// 1.  **Value Semantics**: Transform methods consume `self` and return a new
//     session. The input and output of a chain step share no mutable state, so
//     chaining is ordinary function composition — there is no way for a later
//     step to mutate an "original" a caller kept around.
// 2.  **Two Contrast Surfaces**: The zero-argument `less_contrast` /
//     `more_contrast` always use their literal defaults (0.5 / 2.0). The
//     `_with` forms take an explicit optional strength and resolve an absent
//     one to the neutral factor 1.0. These are different defaults on purpose
//     and are modeled as separate methods so the divergence is visible in the
//     API.
// 3.  **Dispatch Policy Lives Here**: Symbolic dispatch parses names against
//     the closed `FilterName` set. Whether an unknown name is a logged no-op
//     or an error is the session's configured `DispatchMode`.

use image::RgbaImage;
use log::warn;

use crate::core_modules::codec::{self, ResourceStore};
use crate::core_modules::factor::{self, ContrastMode};
use crate::core_modules::filter::{DispatchMode, FilterName};
use crate::core_modules::pixel_buffer::pixel_buffer::PixelBuffer;
use crate::core_modules::statistics::{self, ChannelAverages};
use crate::core_modules::transform;
use crate::error::Result;

/// The live wrapper around one in-progress image.
#[derive(Debug, Clone)]
pub struct ImageSession {
    /// The opaque image handle, replaced by each transform.
    image: RgbaImage,
    /// Policy for symbolic dispatch of unrecognized names.
    dispatch_mode: DispatchMode,
}

impl ImageSession {
    /// Wraps an already-decoded opaque image.
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            dispatch_mode: DispatchMode::default(),
        }
    }

    /// Loads a named resource from the store and wraps it.
    pub fn from_resource(store: &ResourceStore, name: &str) -> Result<Self> {
        Ok(Self::new(store.load(name)?))
    }

    /// Loads the store's configured default resource and wraps it.
    pub fn from_default(store: &ResourceStore) -> Result<Self> {
        Ok(Self::new(store.load_default()?))
    }

    pub fn with_dispatch_mode(mut self, mode: DispatchMode) -> Self {
        self.dispatch_mode = mode;
        self
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// The decode / transform / re-encode cycle every transform shares.
    fn run_pass(self, pass: impl FnOnce(&mut PixelBuffer)) -> Result<Self> {
        let mut buffer = codec::decode(&self.image)?;
        pass(&mut buffer);
        let image = codec::encode(&buffer)?;
        Ok(Self {
            image,
            dispatch_mode: self.dispatch_mode,
        })
    }

    /// Pushes the image toward white. `None` selects the documented default
    /// of 0.25; see the factor module for how percents normalize.
    pub fn lighten(self, percent: Option<f64>) -> Result<Self> {
        let factor = factor::brightness_factor(percent);
        self.run_pass(|buffer| transform::lighten(buffer, factor))
    }

    /// Pushes the image toward black, with the same percent semantics as
    /// [`ImageSession::lighten`].
    pub fn darken(self, percent: Option<f64>) -> Result<Self> {
        let factor = factor::brightness_factor(percent);
        self.run_pass(|buffer| transform::darken(buffer, factor))
    }

    /// Reduces contrast with the fixed convenience default of 0.5.
    pub fn less_contrast(self) -> Result<Self> {
        self.run_pass(|buffer| transform::change_contrast(buffer, factor::DEFAULT_LESS_CONTRAST))
    }

    /// Increases contrast with the fixed convenience default of 2.0.
    pub fn more_contrast(self) -> Result<Self> {
        self.run_pass(|buffer| transform::change_contrast(buffer, factor::DEFAULT_MORE_CONTRAST))
    }

    /// Reduces contrast by an explicit optional strength. An absent strength
    /// resolves to the neutral factor 1.0, not the convenience default.
    pub fn less_contrast_with(self, alpha: Option<f64>) -> Result<Self> {
        let factor = factor::contrast_factor(alpha, ContrastMode::Less);
        self.run_pass(|buffer| transform::change_contrast(buffer, factor))
    }

    /// Increases contrast by an explicit optional strength. An absent strength
    /// resolves to the neutral factor 1.0, not the convenience default.
    pub fn more_contrast_with(self, alpha: Option<f64>) -> Result<Self> {
        let factor = factor::contrast_factor(alpha, ContrastMode::More);
        self.run_pass(|buffer| transform::change_contrast(buffer, factor))
    }

    /// The raw contrast primitive: absent resolves to 2.0 and a negative
    /// strength to its magnitude, with no less/more inversion applied.
    pub fn change_contrast(self, alpha: Option<f64>) -> Result<Self> {
        let factor = factor::primitive_contrast_factor(alpha);
        self.run_pass(|buffer| transform::change_contrast(buffer, factor))
    }

    /// Collapses every pixel to the truncated mean of its color channels.
    pub fn grey_scale(self) -> Result<Self> {
        self.run_pass(transform::grey_scale)
    }

    /// Applies one transform by symbolic name using its zero-argument default
    /// form. Unknown names follow the session's dispatch mode.
    pub fn apply_filter(self, name: &str) -> Result<Self> {
        match name.parse::<FilterName>() {
            Ok(filter) => self.run_pass(|buffer| filter.apply_default(buffer)),
            Err(error) => match self.dispatch_mode {
                DispatchMode::Permissive => {
                    warn!("ignoring unknown filter name {name:?}");
                    Ok(self)
                }
                DispatchMode::Strict => Err(error),
            },
        }
    }

    /// Applies a sequence of named transforms left to right, each acting on
    /// the cumulative result of the previous step.
    pub fn apply_filters(self, names: &[&str]) -> Result<Self> {
        names
            .iter()
            .try_fold(self, |session, name| session.apply_filter(name))
    }

    /// Computes integer-truncated per-channel averages over the current image.
    pub fn rgba_averages(&self) -> Result<ChannelAverages> {
        let buffer = codec::decode(&self.image)?;
        statistics::rgba_averages(&buffer)
    }
}
