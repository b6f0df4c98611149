//! Cross-reference roles.

use docext_directive::{
    DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective, escape_html,
};

use crate::ObjectType;

/// Inline role linking to an object: `:jsxmacro[Trans]`, `:cli[extract]`.
///
/// `:role[title <target>]` links to `target` with `title` as link text.
#[derive(Debug)]
pub struct XrefRole {
    object: ObjectType,
    warnings: Vec<String>,
}

impl XrefRole {
    #[must_use]
    pub fn new(object: ObjectType) -> Self {
        Self {
            object,
            warnings: Vec::new(),
        }
    }
}

impl InlineDirective for XrefRole {
    fn name(&self) -> &str {
        self.object.role_name()
    }

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let (title, target) = split_title(args.content.trim());
        if target.is_empty() {
            self.warnings.push(format!(
                "{ctx}: {}: empty {} reference",
                self.object.role_name(),
                self.object.label()
            ));
            return DirectiveOutput::Skip;
        }

        let text = title.map_or_else(|| self.object.display(target), str::to_owned);
        DirectiveOutput::html(format!(
            r##"<a class="reference {class}" href="#{anchor}"><code>{text}</code></a>"##,
            class = self.object.directive_name(),
            anchor = escape_html(&self.object.anchor(target)),
            text = escape_html(&text),
        ))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Split `title <target>` into its parts; plain content is all target.
fn split_title(content: &str) -> (Option<&str>, &str) {
    if let Some(inner) = content.strip_suffix('>')
        && let Some(open) = inner.rfind(" <")
    {
        let title = inner[..open].trim_end();
        if !title.is_empty() {
            return (Some(title), inner[open + 2..].trim());
        }
    }
    (None, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(object: ObjectType, content: &str) -> DirectiveOutput {
        let ctx = DirectiveContext {
            source_path: None,
            line: 1,
        };
        XrefRole::new(object).process(DirectiveArgs::parse(content, ""), &ctx)
    }

    #[test]
    fn test_jsxmacro_reference() {
        assert_eq!(
            render(ObjectType::JsxMacro, "Trans"),
            DirectiveOutput::html(
                r##"<a class="reference jsxmacro" href="#jsxmacro-Trans"><code>&lt;Trans&gt;</code></a>"##
            )
        );
    }

    #[test]
    fn test_cli_reference() {
        assert_eq!(
            render(ObjectType::CliCommand, "extract"),
            DirectiveOutput::html(
                r##"<a class="reference lingui-cli" href="#lingui-cli-extract"><code>lingui extract</code></a>"##
            )
        );
    }

    #[test]
    fn test_config_reference() {
        assert_eq!(
            render(ObjectType::Config, "sourceLocale"),
            DirectiveOutput::html(
                r##"<a class="reference config" href="#config-sourceLocale"><code>sourceLocale</code></a>"##
            )
        );
    }

    #[test]
    fn test_explicit_title() {
        assert_eq!(
            render(ObjectType::Component, "the provider <I18nProvider>"),
            DirectiveOutput::html(
                r##"<a class="reference component" href="#component-I18nProvider"><code>the provider</code></a>"##
            )
        );
    }

    #[test]
    fn test_angle_brackets_without_title_are_target() {
        let (title, target) = split_title("<Trans>");
        assert_eq!((title, target), (None, "<Trans>"));
    }

    #[test]
    fn test_empty_reference_warns() {
        let mut role = XrefRole::new(ObjectType::Icu);
        let ctx = DirectiveContext {
            source_path: None,
            line: 2,
        };

        let output = role.process(DirectiveArgs::default(), &ctx);

        assert_eq!(output, DirectiveOutput::Skip);
        assert_eq!(role.warnings(), ["line 2: icu: empty ICU reference"]);
    }
}
