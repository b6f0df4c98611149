//! CLI command options.

use std::sync::{Arc, Mutex, PoisonError};

use docext_directive::{
    DirectiveArgs, DirectiveContext, DirectiveOutput, LeafDirective, escape_html,
};

use crate::slug;

/// Name of the CLI command currently being documented.
///
/// Set by `:::lingui-cli` and read by `::lingui-cli-option`. It persists
/// until the next command is declared, including past the closing `:::`.
#[derive(Debug, Clone, Default)]
pub struct ProgramContext(Arc<Mutex<Option<String>>>);

impl ProgramContext {
    pub fn set(&self, program: &str) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(program.to_owned());
    }

    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Leaf directive declaring a command option: `::lingui-cli-option[--format <format>]`.
///
/// Several spellings may be listed, comma separated (`-v, --verbose`); the
/// first one names the anchor, `lingui-cli-<program>-option-<name>`.
#[derive(Debug)]
pub struct CliOptionDirective {
    program: ProgramContext,
    warnings: Vec<String>,
}

impl CliOptionDirective {
    #[must_use]
    pub fn new(program: ProgramContext) -> Self {
        Self {
            program,
            warnings: Vec::new(),
        }
    }
}

impl LeafDirective for CliOptionDirective {
    fn name(&self) -> &'static str {
        "lingui-cli-option"
    }

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let signature = args.content.trim();
        let Some(option) = signature
            .split(',')
            .next()
            .and_then(|first| first.split_whitespace().next())
        else {
            self.warnings
                .push(format!("{ctx}: lingui-cli-option: missing option name"));
            return DirectiveOutput::Skip;
        };

        let anchor = match self.program.get() {
            Some(program) => format!("lingui-cli-{}-option-{}", slug(&program), slug(option)),
            None => format!("option-{}", slug(option)),
        };

        DirectiveOutput::html(format!(
            r#"<dl class="option"><dt id="{}"><code>{}</code></dt></dl>"#,
            escape_html(&anchor),
            escape_html(signature)
        ))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
