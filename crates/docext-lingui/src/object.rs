//! Object description container directives.

use docext_directive::{
    ContainerDirective, DirectiveArgs, DirectiveContext, DirectiveOutput, escape_html,
};

use crate::props::render_props;
use crate::{IndexEntry, ObjectIndex, ObjectType, ProgramContext, PropsContext};

/// Container declaring an object: `:::jsxmacro[Trans]` ... `:::`.
///
/// Emits a definition list whose term carries the object's anchor; the body
/// becomes the description. For [`ObjectType::CliCommand`] the bracket
/// content is a signature such as `extract [files...]`: its first word names
/// the command and becomes the current program for following options.
///
/// React macros and components collect `::prop` lines from their body and
/// list them under "Props" before the block closes. Every declaration is
/// recorded in the [`ObjectIndex`].
#[derive(Debug)]
pub struct ObjectDirective {
    object: ObjectType,
    program: ProgramContext,
    props: PropsContext,
    index: ObjectIndex,
    warnings: Vec<String>,
}

impl ObjectDirective {
    /// Directive for `object` with a private program context.
    #[must_use]
    pub fn new(object: ObjectType) -> Self {
        Self {
            object,
            program: ProgramContext::default(),
            props: PropsContext::default(),
            index: ObjectIndex::default(),
            warnings: Vec::new(),
        }
    }

    /// `lingui-cli` directive sharing `program` with option handlers.
    #[must_use]
    pub fn cli(program: ProgramContext) -> Self {
        Self {
            program,
            ..Self::new(ObjectType::CliCommand)
        }
    }

    /// Share the prop lists with a [`PropDirective`](crate::PropDirective).
    #[must_use]
    pub fn with_props(mut self, props: PropsContext) -> Self {
        self.props = props;
        self
    }

    /// Record declarations in `index`.
    #[must_use]
    pub fn with_index(mut self, index: ObjectIndex) -> Self {
        self.index = index;
        self
    }
}

impl ContainerDirective for ObjectDirective {
    fn name(&self) -> &str {
        self.object.directive_name()
    }

    fn start(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let signature = args.content.trim();
        if signature.is_empty() {
            self.warnings.push(format!(
                "{ctx}: {}: missing {} name",
                self.object.directive_name(),
                self.object.label()
            ));
            return DirectiveOutput::Skip;
        }

        let name = match self.object {
            ObjectType::CliCommand => {
                let command = signature.split_whitespace().next().unwrap_or(signature);
                self.program.set(command);
                command
            }
            _ => signature,
        };

        let anchor = args.id.unwrap_or_else(|| self.object.anchor(name));
        tracing::debug!(object = ?self.object, %anchor, "Declared object");
        self.index.record(IndexEntry {
            object: self.object,
            name: name.to_owned(),
            anchor: anchor.clone(),
            line: ctx.line,
        });
        if self.object.has_props() {
            self.props.open();
        }

        // Trailing newline leaves a blank line so the body parses as markdown.
        DirectiveOutput::html(format!(
            "<dl class=\"object {class}\">\n<dt id=\"{anchor}\"><code>{display}</code></dt>\n<dd>\n",
            class = self.object.directive_name(),
            anchor = escape_html(&anchor),
            display = escape_html(&self.object.display(signature)),
        ))
    }

    fn end(&mut self, _line: usize) -> Option<String> {
        let mut html = if self.object.has_props() {
            render_props(&self.props.close())
        } else {
            String::new()
        };
        html.push_str("</dd>\n</dl>");
        Some(html)
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropDirective;
    use docext_directive::DirectiveProcessor;
    use pretty_assertions::assert_eq;

    fn ctx() -> DirectiveContext<'static> {
        DirectiveContext {
            source_path: None,
            line: 1,
        }
    }

    #[test]
    fn test_jsxmacro_start() {
        let mut directive = ObjectDirective::new(ObjectType::JsxMacro);
        let output = directive.start(DirectiveArgs::parse("Trans", ""), &ctx());

        assert_eq!(
            output,
            DirectiveOutput::html(
                "<dl class=\"object jsxmacro\">\n<dt id=\"jsxmacro-Trans\"><code>&lt;Trans&gt;</code></dt>\n<dd>\n"
            )
        );
        assert_eq!(directive.end(3).as_deref(), Some("</dd>\n</dl>"));
    }

    #[test]
    fn test_jsmacro_is_bare() {
        let mut directive = ObjectDirective::new(ObjectType::JsMacro);
        let output = directive.start(DirectiveArgs::parse("t", ""), &ctx());
        assert!(matches!(output, DirectiveOutput::Html(html) if html.contains("<code>t</code>")));
    }

    #[test]
    fn test_explicit_id_wins() {
        let mut directive = ObjectDirective::new(ObjectType::Component);
        let output = directive.start(DirectiveArgs::parse("I18nProvider", "#provider"), &ctx());
        assert!(matches!(output, DirectiveOutput::Html(html) if html.contains(r#"<dt id="provider">"#)));
    }

    #[test]
    fn test_cli_sets_program() {
        let program = ProgramContext::default();
        let mut directive = ObjectDirective::cli(program.clone());

        let output = directive.start(DirectiveArgs::parse("compile [--strict]", ""), &ctx());

        assert_eq!(program.get().as_deref(), Some("compile"));
        assert!(matches!(
            output,
            DirectiveOutput::Html(html)
                if html.contains(r#"<dt id="lingui-cli-compile"><code>lingui compile [--strict]</code></dt>"#)
        ));
    }

    #[test]
    fn test_missing_name_warns() {
        let mut directive = ObjectDirective::new(ObjectType::Component);
        let output = directive.start(DirectiveArgs::default(), &ctx());

        assert_eq!(output, DirectiveOutput::Skip);
        assert_eq!(directive.warnings(), ["line 1: component: missing Component name"]);
    }

    #[test]
    fn test_declarations_are_indexed() {
        let index = ObjectIndex::default();
        let mut directive = ObjectDirective::cli(ProgramContext::default()).with_index(index.clone());

        directive.start(DirectiveArgs::parse("extract [files...]", ""), &ctx());

        assert_eq!(
            index.entries(),
            [IndexEntry {
                object: ObjectType::CliCommand,
                name: "extract".to_owned(),
                anchor: "lingui-cli-extract".to_owned(),
                line: 1,
            }]
        );
    }

    #[test]
    fn test_skipped_declaration_is_not_indexed() {
        let index = ObjectIndex::default();
        let mut directive = ObjectDirective::new(ObjectType::JsMacro).with_index(index.clone());
        directive.start(DirectiveArgs::default(), &ctx());
        assert!(index.entries().is_empty());
    }

    #[test]
    fn test_props_listed_before_close() {
        let props = PropsContext::default();
        let mut processor = DirectiveProcessor::new()
            .with_container(ObjectDirective::new(ObjectType::Component).with_props(props.clone()))
            .with_leaf(PropDirective::new(props));

        let output = processor.process(
            ":::component[I18nProvider]\nProvides i18n.\n\n::prop[i18n: Active instance]{type=I18n}\n:::\n",
        );

        assert_eq!(
            output,
            concat!(
                "<dl class=\"object component\">\n",
                "<dt id=\"component-I18nProvider\"><code>&lt;I18nProvider&gt;</code></dt>\n",
                "<dd>\n\nProvides i18n.\n\n\n",
                "<dl class=\"field-list props\">\n<dt>Props</dt>\n<dd>\n<ul>\n",
                "<li><code>i18n</code> (<em>I18n</em>) \u{2013} Active instance</li>\n",
                "</ul>\n</dd>\n</dl>\n",
                "</dd>\n</dl>\n",
            )
        );
        assert!(processor.warnings().is_empty());
    }

    #[test]
    fn test_jsmacro_has_no_props() {
        let props = PropsContext::default();
        let mut processor = DirectiveProcessor::new()
            .with_container(ObjectDirective::new(ObjectType::JsMacro).with_props(props.clone()))
            .with_leaf(PropDirective::new(props));

        let output = processor.process(":::jsmacro[t]\n::prop[id]\n:::");

        assert!(output.contains("::prop[id]"));
        assert_eq!(processor.warnings().len(), 1);
    }

    #[test]
    fn test_body_is_separated_from_markup() {
        let mut processor =
            DirectiveProcessor::new().with_container(ObjectDirective::new(ObjectType::JsxMacro));
        let output = processor.process(":::jsxmacro[Plural]\nPicks a form.\n:::\n");

        assert_eq!(
            output,
            "<dl class=\"object jsxmacro\">\n<dt id=\"jsxmacro-Plural\"><code>&lt;Plural&gt;</code></dt>\n<dd>\n\nPicks a form.\n</dd>\n</dl>\n"
        );
    }
}
