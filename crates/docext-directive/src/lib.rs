//! Directive host for documentation extensions.
//!
//! Extensions plug into a [`DirectiveProcessor`] that rewrites `CommonMark`
//! directive syntax before the markdown is handed to a renderer:
//!
//! - **Inline** ([`InlineDirective`]): `:name[content]{attrs}`, used for roles
//!   such as cross-references
//! - **Leaf** ([`LeafDirective`]): `::name[content]{attrs}`, self-contained
//!   blocks such as `::youtube[id]`
//! - **Container** ([`ContainerDirective`]): `:::name` ... `:::`, blocks that
//!   wrap markdown content
//!
//! Handlers receive parsed [`DirectiveArgs`] and a [`DirectiveContext`] with the
//! source location, and return a [`DirectiveOutput`]. Anything a handler does
//! not recognize is passed through unchanged, as is everything inside fenced
//! code blocks.
//!
//! # Example
//!
//! ```
//! use docext_directive::{
//!     DirectiveArgs, DirectiveContext, DirectiveOutput, DirectiveProcessor, InlineDirective,
//! };
//!
//! struct Kbd;
//!
//! impl InlineDirective for Kbd {
//!     fn name(&self) -> &str { "kbd" }
//!
//!     fn process(&mut self, args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
//!         DirectiveOutput::html(format!("<kbd>{}</kbd>", args.content))
//!     }
//! }
//!
//! let mut processor = DirectiveProcessor::new().with_inline(Kbd);
//! let output = processor.process("Press :kbd[Ctrl+C] to copy.");
//! assert_eq!(output, "Press <kbd>Ctrl+C</kbd> to copy.");
//! ```

mod args;
mod container;
mod context;
mod fence;
mod inline;
mod leaf;
mod output;
mod parser;
mod processor;

pub use args::DirectiveArgs;
pub use container::ContainerDirective;
pub use context::DirectiveContext;
pub use inline::InlineDirective;
pub use leaf::LeafDirective;
pub use output::DirectiveOutput;
pub use processor::{DirectiveProcessor, DirectiveProcessorConfig};

/// Escape the five HTML-significant characters.
///
/// Safe for both text content and double- or single-quoted attribute values.
///
/// ```
/// assert_eq!(docext_directive::escape_html(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
