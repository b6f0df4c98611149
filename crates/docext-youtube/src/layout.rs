//! Layout resolution.

use crate::{
    AspectRatio, CONTROL_HEIGHT, DEFAULT_WIDTH, Dimension, EMBED_URL_PREFIX, EmbedError,
    EmbedFragment, Style, Unit,
};

/// Validated options of one `youtube` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedRequest {
    pub video_id: String,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub aspect: Option<AspectRatio>,
}

impl EmbedRequest {
    /// Request with no sizing options.
    #[must_use]
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            width: None,
            height: None,
            aspect: None,
        }
    }

    /// Validate raw option strings.
    pub fn from_options(
        video_id: &str,
        width: Option<&str>,
        height: Option<&str>,
        aspect: Option<&str>,
    ) -> Result<Self, EmbedError> {
        let video_id = video_id.trim();
        if video_id.is_empty() {
            return Err(EmbedError::MissingVideoId);
        }

        Ok(Self {
            video_id: video_id.to_owned(),
            width: Dimension::parse_opt("width", width)?,
            height: Dimension::parse_opt("height", height)?,
            aspect: AspectRatio::parse_opt(aspect)?,
        })
    }

    /// Embed URL with the id inserted verbatim.
    #[must_use]
    pub fn src(&self) -> String {
        format!("{EMBED_URL_PREFIX}{}", self.video_id)
    }
}

/// Resolve a request into player markup.
///
/// A percentage width without a height selects responsive mode; everything
/// else is fixed mode. Derived sizes are truncated toward zero.
///
/// ```
/// use docext_youtube::{EmbedRequest, resolve_embed};
///
/// let fragment = resolve_embed(&EmbedRequest::new("dQw4w9WgXcQ"));
/// assert_eq!(fragment.frame_style().get("width"), Some("560px"));
/// assert_eq!(fragment.frame_style().get("height"), Some("345px"));
/// ```
#[must_use]
pub fn resolve_embed(request: &EmbedRequest) -> EmbedFragment {
    let aspect = request.aspect.unwrap_or_default();
    let src = request.src();

    match (request.width, request.height) {
        (Some(width), None) if width.unit == Unit::Percent => {
            let padding = scale(width.magnitude, aspect.denominator(), aspect.numerator());
            EmbedFragment::Responsive {
                src,
                container: Style::new()
                    .with("padding-top", format!("{CONTROL_HEIGHT}px"))
                    .with("padding-bottom", format!("{padding}%"))
                    .with("width", width.to_string())
                    .with("position", "relative"),
                frame: Style::new()
                    .with("position", "absolute")
                    .with("top", "0")
                    .with("left", "0")
                    .with("width", "100%")
                    .with("height", "100%")
                    .with("border", "0"),
            }
        }
        (width, height) => {
            let (width, height) = fixed_size(width, height, aspect);
            EmbedFragment::Fixed {
                src,
                frame: Style::new()
                    .with("width", format!("{}{}", width.0, width.1.as_str()))
                    .with(
                        "height",
                        format!("{}{}", height.0 + u64::from(CONTROL_HEIGHT), height.1.as_str()),
                    )
                    .with("border", "0"),
            }
        }
    }
}

/// Fixed-mode size before the control bar is added.
fn fixed_size(
    width: Option<Dimension>,
    height: Option<Dimension>,
    aspect: AspectRatio,
) -> ((u64, Unit), (u64, Unit)) {
    let (num, den) = (aspect.numerator(), aspect.denominator());
    let given = |d: Dimension| (u64::from(d.magnitude), d.unit);

    match (width, height) {
        (None, None) => (
            (u64::from(DEFAULT_WIDTH), Unit::Px),
            (scale(DEFAULT_WIDTH, den, num), Unit::Px),
        ),
        (Some(w), None) => (given(w), (scale(w.magnitude, den, num), Unit::Px)),
        (None, Some(h)) => ((scale(h.magnitude, num, den), Unit::Px), given(h)),
        (Some(w), Some(h)) => (given(w), given(h)),
    }
}

/// `value * mul / div`, truncated. `div` is never zero.
fn scale(value: u32, mul: u32, div: u32) -> u64 {
    u64::from(value) * u64::from(mul) / u64::from(div)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(
        width: Option<&str>,
        height: Option<&str>,
        aspect: Option<&str>,
    ) -> EmbedFragment {
        let request = EmbedRequest::from_options("abc", width, height, aspect).unwrap();
        resolve_embed(&request)
    }

    #[test]
    fn test_percent_width_is_responsive() {
        let fragment = resolve(Some("100%"), None, None);

        assert!(fragment.is_responsive());
        assert_eq!(
            fragment.container_style().unwrap().to_string(),
            "padding-bottom: 56%; padding-top: 30px; position: relative; width: 100%"
        );
        assert_eq!(
            fragment.frame_style().to_string(),
            "border: 0; height: 100%; left: 0; position: absolute; top: 0; width: 100%"
        );
    }

    #[test]
    fn test_responsive_uses_aspect() {
        let fragment = resolve(Some("50%"), None, Some("4:3"));
        let container = fragment.container_style().unwrap();
        assert_eq!(container.get("padding-bottom"), Some("37%"));
        assert_eq!(container.get("width"), Some("50%"));
    }

    #[test]
    fn test_defaults() {
        let fragment = resolve(None, None, None);

        assert!(!fragment.is_responsive());
        assert_eq!(
            fragment.frame_style().to_string(),
            "border: 0; height: 345px; width: 560px"
        );
    }

    #[test]
    fn test_default_width_follows_aspect() {
        let fragment = resolve(None, None, Some("4:3"));
        assert_eq!(fragment.frame_style().get("height"), Some("450px"));
    }

    #[test]
    fn test_height_derived_from_width() {
        let fragment = resolve(Some("320px"), None, Some("4:3"));
        assert_eq!(
            fragment.frame_style().to_string(),
            "border: 0; height: 270px; width: 320px"
        );
    }

    #[test]
    fn test_unitless_width_is_pixels() {
        let fragment = resolve(Some("640"), None, None);
        assert_eq!(fragment.frame_style().get("width"), Some("640px"));
        assert_eq!(fragment.frame_style().get("height"), Some("390px"));
    }

    #[test]
    fn test_width_derived_from_height() {
        let fragment = resolve(None, Some("315"), None);
        assert_eq!(fragment.frame_style().get("width"), Some("560px"));
        assert_eq!(fragment.frame_style().get("height"), Some("345px"));
    }

    #[test]
    fn test_percent_height_keeps_unit() {
        let fragment = resolve(None, Some("90%"), None);
        assert_eq!(fragment.frame_style().get("width"), Some("160px"));
        assert_eq!(fragment.frame_style().get("height"), Some("120%"));
    }

    #[test]
    fn test_both_given() {
        let fragment = resolve(Some("50%"), Some("200px"), Some("1:1"));

        assert!(!fragment.is_responsive());
        assert_eq!(fragment.frame_style().get("width"), Some("50%"));
        assert_eq!(fragment.frame_style().get("height"), Some("230px"));
    }

    #[test]
    fn test_derived_sizes_truncate() {
        // 100 * 9 / 16 = 56.25
        let fragment = resolve(Some("100px"), None, None);
        assert_eq!(fragment.frame_style().get("height"), Some("86px"));
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let fragment = resolve(Some("4294967295px"), None, Some("1:4294967295"));
        assert_eq!(
            fragment.frame_style().get("height"),
            Some("18446744065119617055px")
        );
    }

    #[test]
    fn test_src() {
        let fragment = resolve(None, None, None);
        assert_eq!(fragment.src(), "https://www.youtube.com/embed/abc");
    }

    #[test]
    fn test_idempotent() {
        let request = EmbedRequest::from_options("abc", Some("75%"), None, Some("21:9")).unwrap();
        assert_eq!(resolve_embed(&request).to_html(), resolve_embed(&request).to_html());
    }

    #[test]
    fn test_missing_video_id() {
        assert_eq!(
            EmbedRequest::from_options("  ", None, None, None),
            Err(EmbedError::MissingVideoId)
        );
    }

    #[test]
    fn test_invalid_options_propagate() {
        assert!(matches!(
            EmbedRequest::from_options("abc", Some("wide"), None, None),
            Err(EmbedError::InvalidDimension { option: "width", .. })
        ));
        assert!(matches!(
            EmbedRequest::from_options("abc", None, Some("-5px"), None),
            Err(EmbedError::InvalidDimension { option: "height", .. })
        ));
        assert_eq!(
            EmbedRequest::from_options("abc", None, None, Some("16:0")),
            Err(EmbedError::InvalidAspectRatio("16:0".to_owned()))
        );
    }
}
