//! Embed fragment and its HTML serialization.

use std::collections::BTreeMap;
use std::fmt;

use docext_directive::escape_html;

/// Inline CSS declarations.
///
/// Serializes as `property: value` pairs sorted by property and joined with
/// `"; "`, so equal styles always produce identical markup.
///
/// ```
/// use docext_youtube::Style;
///
/// let style = Style::new().with("width", "560px").with("border", "0");
/// assert_eq!(style.to_string(), "border: 0; width: 560px");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style(BTreeMap<&'static str, String>);

impl Style {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    #[must_use]
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.0.insert(property, value.into());
        self
    }

    /// Value of a property.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

/// Resolved player markup, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedFragment {
    /// Relatively positioned box whose padding keeps the aspect ratio, with
    /// the player absolutely positioned inside it.
    Responsive {
        src: String,
        container: Style,
        frame: Style,
    },
    /// Player with explicit width and height.
    Fixed { src: String, frame: Style },
}

impl EmbedFragment {
    /// Embed source URL.
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::Responsive { src, .. } | Self::Fixed { src, .. } => src,
        }
    }

    /// Style of the player element.
    #[must_use]
    pub fn frame_style(&self) -> &Style {
        match self {
            Self::Responsive { frame, .. } | Self::Fixed { frame, .. } => frame,
        }
    }

    /// Style of the wrapping box, only present in responsive mode.
    #[must_use]
    pub fn container_style(&self) -> Option<&Style> {
        match self {
            Self::Responsive { container, .. } => Some(container),
            Self::Fixed { .. } => None,
        }
    }

    #[must_use]
    pub fn is_responsive(&self) -> bool {
        matches!(self, Self::Responsive { .. })
    }

    /// Serialize to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let iframe = format!(
            r#"<iframe src="{}" style="{}" allowfullscreen></iframe>"#,
            escape_html(self.src()),
            escape_html(&self.frame_style().to_string())
        );

        match self.container_style() {
            Some(container) => format!(
                r#"<div style="{}">{iframe}</div>"#,
                escape_html(&container.to_string())
            ),
            None => iframe,
        }
    }
}
