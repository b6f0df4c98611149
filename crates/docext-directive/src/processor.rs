//! Directive processor.
//!
//! Rewrites directive syntax in markdown source before it reaches the renderer.

use std::path::PathBuf;

use super::fence::FenceTracker;
use super::parser::{ParsedDirective, find_directive, parse_container_line};
use super::{
    ContainerDirective, DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective,
    LeafDirective,
};

/// Configuration for the directive processor.
#[derive(Debug, Default, Clone)]
pub struct DirectiveProcessorConfig {
    /// Path of the page being processed, used in warnings.
    pub source_path: Option<PathBuf>,
}

impl DirectiveProcessorConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source file path.
    #[must_use]
    pub fn with_source_path(mut self, source_path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }

    fn context(&self, line: usize) -> DirectiveContext<'_> {
        DirectiveContext {
            source_path: self.source_path.as_deref(),
            line,
        }
    }
}

/// A container opened by `:::name`, awaiting its closing `:::`.
#[derive(Debug)]
struct OpenContainer {
    name: String,
    /// Handler index, or `None` when the container passes through as written.
    handler: Option<usize>,
    line: usize,
}

/// Per-page directive processor.
///
/// Handlers are registered with the `with_*` builders and looked up by name;
/// directives without a handler are left as written.
///
/// ```
/// use docext_directive::{
///     DirectiveArgs, DirectiveContext, DirectiveOutput, DirectiveProcessor, LeafDirective,
/// };
///
/// struct Rule;
///
/// impl LeafDirective for Rule {
///     fn name(&self) -> &str { "rule" }
///     fn process(&mut self, _args: DirectiveArgs, _ctx: &DirectiveContext) -> DirectiveOutput {
///         DirectiveOutput::html("<hr>")
///     }
/// }
///
/// let mut processor = DirectiveProcessor::new().with_leaf(Rule);
/// assert_eq!(processor.process("::rule\n::other\n"), "<hr>\n::other\n");
/// ```
pub struct DirectiveProcessor {
    config: DirectiveProcessorConfig,
    inline_handlers: Vec<Box<dyn InlineDirective>>,
    leaf_handlers: Vec<Box<dyn LeafDirective>>,
    container_handlers: Vec<Box<dyn ContainerDirective>>,
    fence: FenceTracker,
    /// Open containers, innermost last.
    open_containers: Vec<OpenContainer>,
    warnings: Vec<String>,
}

impl Default for DirectiveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveProcessor {
    /// Create a processor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DirectiveProcessorConfig::default())
    }

    /// Create a processor with custom configuration.
    #[must_use]
    pub fn with_config(config: DirectiveProcessorConfig) -> Self {
        Self {
            config,
            inline_handlers: Vec::new(),
            leaf_handlers: Vec::new(),
            container_handlers: Vec::new(),
            fence: FenceTracker::new(),
            open_containers: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Register an inline directive handler.
    #[must_use]
    pub fn with_inline<D: InlineDirective + 'static>(mut self, handler: D) -> Self {
        self.inline_handlers.push(Box::new(handler));
        self
    }

    /// Register a leaf directive handler.
    #[must_use]
    pub fn with_leaf<D: LeafDirective + 'static>(mut self, handler: D) -> Self {
        self.leaf_handlers.push(Box::new(handler));
        self
    }

    /// Register a container directive handler.
    #[must_use]
    pub fn with_container<D: ContainerDirective + 'static>(mut self, handler: D) -> Self {
        self.container_handlers.push(Box::new(handler));
        self
    }

    /// Expand all directives in `input`.
    ///
    /// Line structure is preserved: output has the same number of lines as
    /// input, unless a handler emits multi-line HTML.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());

        for (idx, line) in input.lines().enumerate() {
            if idx > 0 {
                output.push('\n');
            }
            let processed = self.process_line(line, idx + 1);
            output.push_str(&processed);
        }
        if input.ends_with('\n') {
            output.push('\n');
        }

        self.finalize(&mut output);
        output
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> String {
        self.fence.update(line);
        if self.fence.in_fence() {
            return line.to_owned();
        }

        if let Some(directive) = parse_container_line(line) {
            return self.dispatch_container(directive, line, line_num);
        }

        self.expand_inline(line, line_num)
    }

    fn expand_inline(&mut self, line: &str, line_num: usize) -> String {
        let mut result = String::with_capacity(line.len());
        let mut remaining = line;

        while let Some((directive, start, end)) = find_directive(remaining) {
            result.push_str(&remaining[..start]);
            match self.dispatch_inline_or_leaf(directive, line_num) {
                DirectiveOutput::Html(html) => result.push_str(&html),
                DirectiveOutput::Skip => result.push_str(&remaining[start..end]),
            }
            remaining = &remaining[end..];
        }

        result.push_str(remaining);
        result
    }

    fn dispatch_inline_or_leaf(
        &mut self,
        directive: ParsedDirective,
        line_num: usize,
    ) -> DirectiveOutput {
        let ctx = self.config.context(line_num);
        match directive {
            ParsedDirective::Inline { name, args } => self
                .inline_handlers
                .iter_mut()
                .find(|h| h.name() == name)
                .map_or(DirectiveOutput::Skip, |h| h.process(args, &ctx)),
            ParsedDirective::Leaf { name, args } => self
                .leaf_handlers
                .iter_mut()
                .find(|h| h.name() == name)
                .map_or(DirectiveOutput::Skip, |h| h.process(args, &ctx)),
            ParsedDirective::ContainerStart { .. } | ParsedDirective::ContainerEnd { .. } => {
                DirectiveOutput::Skip
            }
        }
    }

    fn dispatch_container(
        &mut self,
        directive: ParsedDirective,
        line: &str,
        line_num: usize,
    ) -> String {
        match directive {
            ParsedDirective::ContainerStart { name, args, .. } => {
                self.start_container(name, args, line, line_num)
            }
            ParsedDirective::ContainerEnd { .. } => match self.open_containers.pop() {
                Some(OpenContainer {
                    name,
                    handler: Some(idx),
                    ..
                }) => {
                    tracing::trace!(directive = %name, line = line_num, "Closing container");
                    self.container_handlers[idx]
                        .end(line_num)
                        .unwrap_or_default()
                }
                Some(OpenContainer { handler: None, .. }) => line.to_owned(),
                None => {
                    self.warnings.push(format!(
                        "{}: stray ::: with no opening directive",
                        self.config.context(line_num)
                    ));
                    line.to_owned()
                }
            },
            ParsedDirective::Inline { .. } | ParsedDirective::Leaf { .. } => line.to_owned(),
        }
    }

    fn start_container(
        &mut self,
        name: String,
        args: DirectiveArgs,
        line: &str,
        line_num: usize,
    ) -> String {
        let handler = self
            .container_handlers
            .iter()
            .position(|h| h.name() == name);

        let output = match handler {
            Some(idx) => {
                let ctx = self.config.context(line_num);
                self.container_handlers[idx].start(args, &ctx)
            }
            None => DirectiveOutput::Skip,
        };

        // Skipped containers stay open so their closing ::: passes through too.
        let (handler, html) = match output {
            DirectiveOutput::Html(html) => (handler, html),
            DirectiveOutput::Skip => (None, line.to_owned()),
        };
        self.open_containers.push(OpenContainer {
            name,
            handler,
            line: line_num,
        });
        html
    }

    /// Close containers left open at end of input, innermost first.
    ///
    /// Pass-through containers need no closing markup and are dropped silently.
    fn finalize(&mut self, output: &mut String) {
        while let Some(open) = self.open_containers.pop() {
            let Some(idx) = open.handler else {
                continue;
            };
            self.warnings.push(format!(
                "{}: unclosed container directive :::{} (missing closing :::)",
                self.config.context(open.line),
                open.name
            ));
            if let Some(html) = self.container_handlers[idx].end(0) {
                if !output.is_empty() && !output.ends_with('\n') {
                    output.push('\n');
                }
                output.push_str(&html);
            }
        }
    }

    /// Warnings from the processor and every registered handler.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let handler_warnings = self
            .inline_handlers
            .iter()
            .flat_map(|h| h.warnings())
            .chain(self.leaf_handlers.iter().flat_map(|h| h.warnings()))
            .chain(self.container_handlers.iter().flat_map(|h| h.warnings()));

        self.warnings
            .iter()
            .chain(handler_warnings)
            .cloned()
            .collect()
    }
}
