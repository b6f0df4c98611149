//! Width and height option parsing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::EmbedError;

/// Size grammar: digits with an optional `px` or `%` unit.
static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(px|%)?$").expect("size regex is valid"));

/// Unit of a [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// CSS pixels.
    Px,
    /// Percentage of the containing block.
    Percent,
}

impl Unit {
    /// CSS suffix for the unit.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
        }
    }
}

/// A parsed `width` or `height` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub magnitude: u32,
    pub unit: Unit,
}

impl Dimension {
    /// Pixel dimension.
    #[must_use]
    pub fn px(magnitude: u32) -> Self {
        Self {
            magnitude,
            unit: Unit::Px,
        }
    }

    /// Percentage dimension.
    #[must_use]
    pub fn percent(magnitude: u32) -> Self {
        Self {
            magnitude,
            unit: Unit::Percent,
        }
    }

    /// Parse `560`, `560px` or `100%`. A missing unit means pixels.
    ///
    /// `option` names the directive option in the error.
    ///
    /// ```
    /// use docext_youtube::{Dimension, EmbedError};
    ///
    /// assert_eq!(Dimension::parse("width", "100%"), Ok(Dimension::percent(100)));
    /// assert_eq!(Dimension::parse("width", "560"), Ok(Dimension::px(560)));
    /// assert!(matches!(
    ///     Dimension::parse("height", "10em"),
    ///     Err(EmbedError::InvalidDimension { option: "height", .. })
    /// ));
    /// ```
    pub fn parse(option: &'static str, raw: &str) -> Result<Self, EmbedError> {
        let invalid = || EmbedError::InvalidDimension {
            option,
            value: raw.to_owned(),
        };

        let caps = SIZE_RE.captures(raw.trim()).ok_or_else(invalid)?;
        let magnitude = caps[1].parse::<u32>().map_err(|_| invalid())?;
        let unit = match caps.get(2).map(|m| m.as_str()) {
            Some("%") => Unit::Percent,
            _ => Unit::Px,
        };

        Ok(Self { magnitude, unit })
    }

    /// Parse an option that may be absent.
    pub fn parse_opt(option: &'static str, raw: Option<&str>) -> Result<Option<Self>, EmbedError> {
        raw.map(|raw| Self::parse(option, raw)).transpose()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_defaults_to_px() {
        for n in [0, 1, 315, 560, 4096] {
            let raw = n.to_string();
            assert_eq!(Dimension::parse("width", &raw), Ok(Dimension::px(n)));
        }
    }

    #[test]
    fn test_explicit_units() {
        assert_eq!(Dimension::parse("width", "300px"), Ok(Dimension::px(300)));
        assert_eq!(Dimension::parse("width", "75%"), Ok(Dimension::percent(75)));
        assert_eq!(Dimension::parse("width", "0%"), Ok(Dimension::percent(0)));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(Dimension::parse("width", " 320px "), Ok(Dimension::px(320)));
    }

    #[test]
    fn test_rejects_malformed() {
        for raw in ["10em", "abc", "-5px", "", "px", "%", "5 px", "1.5px", "5px%", "+5", "٣"] {
            assert_eq!(
                Dimension::parse("width", raw),
                Err(EmbedError::InvalidDimension {
                    option: "width",
                    value: raw.to_owned(),
                }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(Dimension::parse("height", "99999999999").is_err());
    }

    #[test]
    fn test_error_names_option_and_value() {
        let err = Dimension::parse("height", "10em").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid size "10em" for option `height` (expected e.g. 560, 560px or 100%)"#
        );
    }

    #[test]
    fn test_parse_opt() {
        assert_eq!(Dimension::parse_opt("width", None), Ok(None));
        assert_eq!(
            Dimension::parse_opt("width", Some("50%")),
            Ok(Some(Dimension::percent(50)))
        );
        assert!(Dimension::parse_opt("width", Some("wide")).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::px(560).to_string(), "560px");
        assert_eq!(Dimension::percent(100).to_string(), "100%");
    }
}
