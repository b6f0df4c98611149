//! Terminal reporting for CLI commands.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

/// Reports progress and problems on stderr, leaving stdout for rendered HTML.
pub(crate) struct Output {
    term: Term,
    done: Style,
    label_warning: Style,
    label_error: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            done: Style::new().green(),
            label_warning: Style::new().yellow().bold(),
            label_error: Style::new().red().bold(),
        }
    }

    /// `Rendered docs/index.md -> site/index.html`
    pub(crate) fn rendered(&self, source: &Path, dest: &Path) {
        let text = format!("Rendered {} -> {}", source.display(), dest.display());
        self.line(&self.done.apply_to(text).to_string());
    }

    /// A directive warning, which already carries its `path:line` prefix.
    pub(crate) fn directive_warning(&self, warning: &str) {
        self.line(&format!("{} {warning}", self.label_warning.apply_to("warning:")));
    }

    /// Closing count after a page that produced warnings.
    pub(crate) fn warning_summary(&self, count: usize, strict: bool) {
        if count > 0 {
            self.line(&self.label_warning.apply_to(summary(count, strict)).to_string());
        }
    }

    pub(crate) fn error(&self, err: &dyn Display) {
        self.line(&format!("{} {err}", self.label_error.apply_to("error:")));
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

fn summary(count: usize, strict: bool) -> String {
    let noun = if count == 1 { "warning" } else { "warnings" };
    if strict {
        format!("{count} {noun} (fatal with --strict)")
    } else {
        format!("{count} {noun}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary() {
        assert_eq!(summary(1, false), "1 warning");
        assert_eq!(summary(3, false), "3 warnings");
        assert_eq!(summary(2, true), "2 warnings (fatal with --strict)");
    }
}
