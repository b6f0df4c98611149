//! Directive output.

/// What a handler wants in place of the directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveOutput {
    /// Raw HTML, passed through the markdown renderer untouched.
    Html(String),
    /// Leave the directive text as written.
    Skip,
}

impl DirectiveOutput {
    /// Create an HTML output.
    ///
    /// ```
    /// use docext_directive::DirectiveOutput;
    ///
    /// let output = DirectiveOutput::html("<kbd>Ctrl+C</kbd>");
    /// assert_eq!(output, DirectiveOutput::Html("<kbd>Ctrl+C</kbd>".to_owned()));
    /// ```
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }
}
