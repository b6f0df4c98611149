//! Aspect ratio option parsing.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::LazyLock;

use regex::Regex;

use crate::EmbedError;

static ASPECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+):([0-9]+)$").expect("aspect regex is valid"));

/// Width-to-height ratio of the player, `16:9` by default.
///
/// Both components are non-zero, so layout arithmetic never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    numerator: NonZeroU32,
    denominator: NonZeroU32,
}

const WIDESCREEN: AspectRatio = AspectRatio {
    numerator: NonZeroU32::new(16).unwrap(),
    denominator: NonZeroU32::new(9).unwrap(),
};

impl Default for AspectRatio {
    fn default() -> Self {
        WIDESCREEN
    }
}

impl AspectRatio {
    /// Build a ratio, returning `None` if either side is zero.
    #[must_use]
    pub fn new(numerator: u32, denominator: u32) -> Option<Self> {
        Some(Self {
            numerator: NonZeroU32::new(numerator)?,
            denominator: NonZeroU32::new(denominator)?,
        })
    }

    #[must_use]
    pub fn numerator(self) -> u32 {
        self.numerator.get()
    }

    #[must_use]
    pub fn denominator(self) -> u32 {
        self.denominator.get()
    }

    /// Parse `W:H`.
    ///
    /// ```
    /// use docext_youtube::{AspectRatio, EmbedError};
    ///
    /// assert_eq!(AspectRatio::parse("4:3"), Ok(AspectRatio::new(4, 3).unwrap()));
    /// assert_eq!(
    ///     AspectRatio::parse("0:9"),
    ///     Err(EmbedError::InvalidAspectRatio("0:9".to_owned()))
    /// );
    /// ```
    pub fn parse(raw: &str) -> Result<Self, EmbedError> {
        let invalid = || EmbedError::InvalidAspectRatio(raw.to_owned());

        let caps = ASPECT_RE.captures(raw.trim()).ok_or_else(invalid)?;
        let numerator = caps[1].parse::<u32>().map_err(|_| invalid())?;
        let denominator = caps[2].parse::<u32>().map_err(|_| invalid())?;

        Self::new(numerator, denominator).ok_or_else(invalid)
    }

    /// Parse an option that may be absent.
    pub fn parse_opt(raw: Option<&str>) -> Result<Option<Self>, EmbedError> {
        raw.map(Self::parse).transpose()
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}
