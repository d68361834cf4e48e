// THEORY:
// The `filter` module represents the five named transforms as a closed enum so
// that unknown strings are a parse failure at the boundary, not something the
// engine has to reason about later. Parsing is the single point where strings
// meet the filter set; everything past it works with the enum. What happens to
// a string that fails to parse is the dispatcher's policy decision, captured by
// `DispatchMode`: the historical behavior silently ignores it, the strict mode
// surfaces it as an error for callers who want fail-fast dispatch.

use std::str::FromStr;

use crate::core_modules::factor;
use crate::core_modules::pixel_buffer::pixel_buffer::PixelBuffer;
use crate::core_modules::transform;
use crate::error::Error;

/// The closed set of transforms addressable by symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterName {
    Lighten,
    Darken,
    LessContrast,
    MoreContrast,
    GreyScale,
}

/// How the dispatcher treats names that fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Unrecognized names are ignored; dispatch always succeeds.
    #[default]
    Permissive,
    /// Unrecognized names surface `Error::UnknownFilter`.
    Strict,
}

impl FilterName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterName::Lighten => "lighten",
            FilterName::Darken => "darken",
            FilterName::LessContrast => "lessContrast",
            FilterName::MoreContrast => "moreContrast",
            FilterName::GreyScale => "greyScale",
        }
    }

    /// Applies this filter to the buffer using its zero-argument default
    /// factor, exactly as symbolic dispatch would.
    pub fn apply_default(&self, buffer: &mut PixelBuffer) {
        match self {
            FilterName::Lighten => transform::lighten(buffer, factor::brightness_factor(None)),
            FilterName::Darken => transform::darken(buffer, factor::brightness_factor(None)),
            FilterName::LessContrast => {
                transform::change_contrast(buffer, factor::DEFAULT_LESS_CONTRAST)
            }
            FilterName::MoreContrast => {
                transform::change_contrast(buffer, factor::DEFAULT_MORE_CONTRAST)
            }
            FilterName::GreyScale => transform::grey_scale(buffer),
        }
    }
}

impl FromStr for FilterName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "lighten" => Ok(FilterName::Lighten),
            "darken" => Ok(FilterName::Darken),
            "lessContrast" => Ok(FilterName::LessContrast),
            "moreContrast" => Ok(FilterName::MoreContrast),
            "greyScale" => Ok(FilterName::GreyScale),
            _ => Err(Error::UnknownFilter {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_round_trips() {
        for filter in [
            FilterName::Lighten,
            FilterName::Darken,
            FilterName::LessContrast,
            FilterName::MoreContrast,
            FilterName::GreyScale,
        ] {
            assert_eq!(filter.as_str().parse::<FilterName>().unwrap(), filter);
        }
    }

    #[test]
    fn unknown_name_fails_to_parse() {
        let result = "not_a_filter".parse::<FilterName>();
        assert!(matches!(result, Err(Error::UnknownFilter { .. })));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("GreyScale".parse::<FilterName>().is_err());
        assert!("lesscontrast".parse::<FilterName>().is_err());
    }
}
