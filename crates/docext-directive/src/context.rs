//! Directive processing context.

use std::fmt;
use std::path::Path;

/// Source location handed to directive handlers.
///
/// Handlers use it to point warnings at the offending directive.
///
/// ```
/// use std::path::Path;
/// use docext_directive::DirectiveContext;
///
/// let ctx = DirectiveContext { source_path: Some(Path::new("docs/tutorials/react.md")), line: 12 };
/// assert_eq!(ctx.to_string(), "docs/tutorials/react.md:12");
///
/// let ctx = DirectiveContext { source_path: None, line: 3 };
/// assert_eq!(ctx.to_string(), "line 3");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DirectiveContext<'a> {
    /// File being processed, if known.
    pub source_path: Option<&'a Path>,
    /// 1-indexed line of the directive.
    pub line: usize,
}

impl fmt::Display for DirectiveContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source_path {
            Some(path) => write!(f, "{}:{}", path.display(), self.line),
            None => write!(f, "line {}", self.line),
        }
    }
}
