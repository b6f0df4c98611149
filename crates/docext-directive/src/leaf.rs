//! Leaf directive trait.

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput};

/// Handler for leaf directives: `::name[content]{attrs}`.
///
/// Leaf directives are self-contained blocks, like void HTML elements. The
/// `::youtube[id]{width=100%}` embed is the canonical example.
///
/// A handler that cannot expand a directive should record a warning and
/// return [`DirectiveOutput::Skip`]; the directive is then left in the page
/// as written and the rest of the page still renders.
pub trait LeafDirective: Send {
    /// Name matched against `::name[...]`.
    fn name(&self) -> &str;

    /// Expand one occurrence of the directive.
    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Problems found while processing, formatted for the author.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
