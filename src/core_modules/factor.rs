// THEORY:
// The `factor` module holds the normalization rules that turn a caller-supplied
// optional numeric argument into the canonical multiplier each transform family
// consumes. The two families interpret magnitude differently — brightness is
// additive ("push this fraction of the way toward white/black") while contrast
// is multiplicative ("scale the deviation from mid-grey") — so each gets its
// own rule rather than one generic knob.
//
// Key architectural principles:
// 1.  **Totality**: Every branch is exhaustive. No input, however odd, is an
//     error here; a nonsense argument normalizes to something harmless and the
//     clamping in the transform passes absorbs the rest.
// 2.  **Permissive Magnitudes**: Negative brightness input is accepted and read
//     as its magnitude — the sign carries no meaning. Whole-number percentages
//     (`30`) and fractions (`0.3`) both normalize to the same factor.
// 3.  **Zero Is Not Absent**: An explicit `0` brightness argument means "factor
//     zero, no-op pass", never "fall back to the default". Only a genuinely
//     absent argument selects the default.
// 4.  **Two Contrast Defaults**: The zero-argument convenience transforms pin
//     their own literal defaults (0.5 / 2.0), while the explicit-optional forms
//     resolve an absent argument to the neutral 1.0. Both paths are deliberate
//     and both are kept.

/// The normalized multiplier driving a transform's per-pixel formula.
pub type Factor = f64;

/// Factor used by lighten/darken when no percent argument is given.
pub const DEFAULT_BRIGHTNESS_FACTOR: Factor = 0.25;
/// Factor used by the zero-argument `less_contrast` convenience form.
pub const DEFAULT_LESS_CONTRAST: Factor = 0.5;
/// Factor used by the zero-argument `more_contrast` convenience form.
pub const DEFAULT_MORE_CONTRAST: Factor = 2.0;
/// Factor used by the raw contrast primitive when invoked with no argument.
pub const DEFAULT_PRIMITIVE_CONTRAST: Factor = 2.0;

/// Which direction a contrast argument should be normalized toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastMode {
    Less,
    More,
}

/// Normalizes an optional brightness percent into a multiplier.
///
/// - Absent input selects [`DEFAULT_BRIGHTNESS_FACTOR`].
/// - Positive input below 1.0 is already a fraction; at or above 1.0 it is read
///   as a whole-number percentage and divided by 100.
/// - Non-positive input is read as its magnitude, with the same percentage
///   rule applied. An explicit zero therefore yields factor 0.0, a no-op.
pub fn brightness_factor(percent: Option<f64>) -> Factor {
    let Some(percent) = percent else {
        return DEFAULT_BRIGHTNESS_FACTOR;
    };
    if percent > 0.0 {
        if percent < 1.0 { percent } else { percent / 100.0 }
    } else {
        let magnitude = percent.abs();
        if magnitude > 1.0 {
            magnitude / 100.0
        } else {
            magnitude
        }
    }
}

/// Normalizes an optional contrast strength for the named convenience
/// transforms. Absent and zero both resolve to the neutral factor 1.0; an
/// out-of-direction magnitude is inverted so that `Less` always yields a
/// reducing factor and `More` an increasing one.
pub fn contrast_factor(alpha: Option<f64>, mode: ContrastMode) -> Factor {
    let Some(alpha) = alpha else {
        return 1.0;
    };
    if alpha == 0.0 {
        return 1.0;
    }
    match mode {
        ContrastMode::Less => {
            if alpha > 1.0 {
                1.0 / alpha
            } else {
                alpha
            }
        }
        ContrastMode::More => {
            if alpha > 1.0 {
                alpha
            } else {
                1.0 / alpha
            }
        }
    }
}

/// Normalizes the raw contrast primitive's own optional argument. Reachable
/// only when the primitive is invoked directly rather than through the named
/// convenience transforms, which pass an already-normalized factor.
pub fn primitive_contrast_factor(alpha: Option<f64>) -> Factor {
    match alpha {
        None => DEFAULT_PRIMITIVE_CONTRAST,
        Some(alpha) if alpha < 0.0 => alpha.abs(),
        Some(alpha) => alpha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_whole_number_percent() {
        assert_eq!(brightness_factor(Some(30.0)), 0.3);
    }

    #[test]
    fn brightness_fraction_passes_through() {
        assert_eq!(brightness_factor(Some(0.3)), 0.3);
    }

    #[test]
    fn brightness_negative_reads_magnitude() {
        assert_eq!(brightness_factor(Some(-0.3)), 0.3);
        assert_eq!(brightness_factor(Some(-30.0)), 0.3);
    }

    #[test]
    fn brightness_absent_selects_default() {
        assert_eq!(brightness_factor(None), DEFAULT_BRIGHTNESS_FACTOR);
    }

    #[test]
    fn brightness_explicit_zero_is_noop_not_default() {
        assert_eq!(brightness_factor(Some(0.0)), 0.0);
    }

    #[test]
    fn contrast_absent_and_zero_are_neutral() {
        assert_eq!(contrast_factor(None, ContrastMode::Less), 1.0);
        assert_eq!(contrast_factor(None, ContrastMode::More), 1.0);
        assert_eq!(contrast_factor(Some(0.0), ContrastMode::Less), 1.0);
        assert_eq!(contrast_factor(Some(0.0), ContrastMode::More), 1.0);
    }

    #[test]
    fn contrast_less_inverts_strengths_above_one() {
        assert_eq!(contrast_factor(Some(4.0), ContrastMode::Less), 0.25);
        assert_eq!(contrast_factor(Some(0.5), ContrastMode::Less), 0.5);
    }

    #[test]
    fn contrast_more_inverts_strengths_below_one() {
        assert_eq!(contrast_factor(Some(4.0), ContrastMode::More), 4.0);
        assert_eq!(contrast_factor(Some(0.25), ContrastMode::More), 4.0);
    }

    #[test]
    fn primitive_contrast_defaults_and_magnitudes() {
        assert_eq!(primitive_contrast_factor(None), 2.0);
        assert_eq!(primitive_contrast_factor(Some(-1.5)), 1.5);
        assert_eq!(primitive_contrast_factor(Some(0.7)), 0.7);
    }
}
