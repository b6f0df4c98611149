//! Container directive trait.

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput};

/// Handler for container directives: `:::name[content]{attrs}` ... `:::`.
///
/// The body between the fences is ordinary markdown and is processed as usual.
/// Handlers that nest keep their own stack; the processor only guarantees that
/// [`end`](Self::end) is called once for every successful [`start`](Self::start).
pub trait ContainerDirective: Send {
    /// Name matched against `:::name`.
    fn name(&self) -> &str;

    /// Handle the opening line.
    ///
    /// Returning [`DirectiveOutput::Skip`] leaves the opening line as written
    /// and the matching `:::` passes through as well; [`end`](Self::end) is
    /// not called for it.
    fn start(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput;

    /// Handle the closing `:::`, returning the HTML that closes the block.
    fn end(&mut self, line: usize) -> Option<String>;

    /// Problems found while processing, formatted for the author.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
