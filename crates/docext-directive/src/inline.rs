//! Inline directive trait.

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput};

/// Handler for inline directives (roles): `:name[content]{attrs}`.
///
/// Inline directives can appear anywhere in a line and usually produce an
/// inline element such as a cross-reference link.
///
/// Handlers are `Send` but not `Sync`: every page gets its own processor.
pub trait InlineDirective: Send {
    /// Name matched against `:name[...]`.
    fn name(&self) -> &str;

    /// Expand one occurrence of the directive.
    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Problems found while processing, formatted for the author.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
