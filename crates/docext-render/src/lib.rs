//! Page renderer for docext.
//!
//! Expands directives in a markdown page, converts the result to HTML with
//! pulldown-cmark and optionally appends an "Edit on GitHub" link.
//!
//! # Example
//!
//! ```
//! use docext_render::PageRenderer;
//!
//! let result = PageRenderer::new().render("# Intro\n\n::youtube[dQw4w9WgXcQ]{width=100%}\n", None);
//! assert!(result.html.contains("padding-bottom: 56%"));
//! assert!(result.warnings.is_empty());
//! ```

use std::fmt::Write;
use std::path::{Component, Path};

use docext_config::{Config, EditLinkConfig};
use docext_directive::{DirectiveProcessor, DirectiveProcessorConfig, escape_html};
use docext_lingui::{IndexEntry, ObjectIndex};
use docext_youtube::YoutubeDirective;
use pulldown_cmark::{Options, Parser, html};

/// Result of rendering a page.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Edit URL, when edit links are configured and the page path is known.
    pub edit_url: Option<String>,
    /// Warnings from directive handlers, prefixed with their location.
    pub warnings: Vec<String>,
    /// Objects declared on the page, in declaration order.
    pub objects: Vec<IndexEntry>,
}

/// Renders markdown pages with every docext directive registered.
///
/// Each call to [`render`](Self::render) builds a fresh directive processor,
/// so no state leaks from one page into the next.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    edit_link: Option<EditLinkConfig>,
    gfm: bool,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer {
    /// Create a renderer with GFM enabled and no edit links.
    #[must_use]
    pub fn new() -> Self {
        Self {
            edit_link: None,
            gfm: true,
        }
    }

    /// Create a renderer from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            edit_link: config.edit_link.clone(),
            ..Self::new()
        }
    }

    /// Append an edit link to pages rendered with a known path.
    #[must_use]
    pub fn with_edit_link(mut self, edit_link: EditLinkConfig) -> Self {
        self.edit_link = Some(edit_link);
        self
    }

    /// Enable or disable GitHub Flavored Markdown extensions.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    fn processor(page: Option<&Path>, index: &ObjectIndex) -> DirectiveProcessor {
        let mut config = DirectiveProcessorConfig::new();
        if let Some(page) = page {
            config = config.with_source_path(page);
        }
        let processor = DirectiveProcessor::with_config(config).with_leaf(YoutubeDirective::new());
        docext_lingui::register(processor, index)
    }

    /// Render `markdown` to HTML.
    ///
    /// `page` is the page path relative to the docs root. It prefixes
    /// warnings and, when edit links are configured, selects the edit URL.
    #[must_use]
    pub fn render(&self, markdown: &str, page: Option<&Path>) -> RenderResult {
        let index = ObjectIndex::default();
        let mut processor = Self::processor(page, &index);
        let expanded = processor.process(markdown);
        let warnings = processor.warnings();
        let objects = index.entries();

        let mut output = String::with_capacity(expanded.len() * 3 / 2);
        html::push_html(&mut output, Parser::new_ext(&expanded, self.parser_options()));

        let edit_url = self
            .edit_link
            .as_ref()
            .zip(page)
            .map(|(edit_link, page)| {
                let url = edit_link.url_for(&page_url_path(page));
                write_edit_link(&mut output, &url, &edit_link.text);
                url
            });

        tracing::info!(
            page = ?page,
            bytes = output.len(),
            warnings = warnings.len(),
            objects = objects.len(),
            "Rendered page"
        );

        RenderResult {
            html: output,
            edit_url,
            warnings,
            objects,
        }
    }
}

/// Forward-slash form of a page path, for use in URLs.
fn page_url_path(page: &Path) -> String {
    page.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn write_edit_link(out: &mut String, url: &str, text: &str) {
    let _ = writeln!(
        out,
        r#"<p class="edit-link"><a href="{}">{}</a></p>"#,
        escape_html(url),
        escape_html(text)
    );
}
