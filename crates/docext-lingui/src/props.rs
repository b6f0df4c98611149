//! Typed prop lists for React macros and components.

use std::fmt::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use docext_directive::{
    DirectiveArgs, DirectiveContext, DirectiveOutput, LeafDirective, escape_html,
};

/// One documented prop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prop {
    pub name: String,
    pub ty: Option<String>,
    pub description: String,
}

/// Prop lists of the open `jsxmacro`/`component` blocks, innermost last.
#[derive(Debug, Clone, Default)]
pub struct PropsContext(Arc<Mutex<Vec<Vec<Prop>>>>);

impl PropsContext {
    pub(crate) fn open(&self) {
        self.frames().push(Vec::new());
    }

    /// Add a prop to the innermost open block. Returns `false` outside one.
    pub(crate) fn push(&self, prop: Prop) -> bool {
        match self.frames().last_mut() {
            Some(frame) => {
                frame.push(prop);
                true
            }
            None => false,
        }
    }

    pub(crate) fn close(&self) -> Vec<Prop> {
        self.frames().pop().unwrap_or_default()
    }

    fn frames(&self) -> MutexGuard<'_, Vec<Vec<Prop>>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Leaf directive documenting a prop: `::prop[id: Message id]{type=string}`.
///
/// The text before the first `:` names the prop, the rest describes it.
/// `type` (or `proptype`) gives its type. The directive line itself renders
/// as nothing; the collected props are listed when the enclosing block closes.
#[derive(Debug)]
pub struct PropDirective {
    props: PropsContext,
    warnings: Vec<String>,
}

impl PropDirective {
    #[must_use]
    pub fn new(props: PropsContext) -> Self {
        Self {
            props,
            warnings: Vec::new(),
        }
    }
}

impl LeafDirective for PropDirective {
    fn name(&self) -> &'static str {
        "prop"
    }

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let (name, description) = args
            .content
            .split_once(':')
            .unwrap_or((args.content.as_str(), ""));
        let name = name.trim();
        if name.is_empty() {
            self.warnings.push(format!("{ctx}: prop: missing prop name"));
            return DirectiveOutput::Skip;
        }

        let prop = Prop {
            name: name.to_owned(),
            ty: args
                .get("type")
                .or_else(|| args.get("proptype"))
                .map(str::to_owned),
            description: description.trim().to_owned(),
        };
        if !self.props.push(prop) {
            self.warnings.push(format!(
                "{ctx}: prop: {name} is outside of a jsxmacro or component block"
            ));
            return DirectiveOutput::Skip;
        }

        DirectiveOutput::html("")
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// HTML for a "Props" field list. Empty when there are no props.
pub(crate) fn render_props(props: &[Prop]) -> String {
    if props.is_empty() {
        return String::new();
    }

    let mut out = String::from("<dl class=\"field-list props\">\n<dt>Props</dt>\n<dd>\n<ul>\n");
    for prop in props {
        let _ = write!(out, "<li><code>{}</code>", escape_html(&prop.name));
        if let Some(ty) = &prop.ty {
            let _ = write!(out, " (<em>{}</em>)", escape_html(ty));
        }
        if !prop.description.is_empty() {
            let _ = write!(out, " \u{2013} {}", escape_html(&prop.description));
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n</dd>\n</dl>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx() -> DirectiveContext<'static> {
        DirectiveContext {
            source_path: None,
            line: 4,
        }
    }

    #[test]
    fn test_prop_is_collected() {
        let props = PropsContext::default();
        props.open();
        let mut directive = PropDirective::new(props.clone());

        let output = directive.process(
            DirectiveArgs::parse("id: Message id", "type=string"),
            &ctx(),
        );

        assert_eq!(output, DirectiveOutput::html(""));
        assert_eq!(
            props.close(),
            [Prop {
                name: "id".to_owned(),
                ty: Some("string".to_owned()),
                description: "Message id".to_owned(),
            }]
        );
    }

    #[test]
    fn test_proptype_alias_and_no_description() {
        let props = PropsContext::default();
        props.open();
        let mut directive = PropDirective::new(props.clone());

        directive.process(DirectiveArgs::parse("values", "proptype=object"), &ctx());

        let collected = props.close();
        assert_eq!(collected[0].ty.as_deref(), Some("object"));
        assert_eq!(collected[0].description, "");
    }

    #[test]
    fn test_prop_outside_block_warns() {
        let mut directive = PropDirective::new(PropsContext::default());
        let output = directive.process(DirectiveArgs::parse("id", ""), &ctx());

        assert_eq!(output, DirectiveOutput::Skip);
        assert_eq!(
            directive.warnings(),
            ["line 4: prop: id is outside of a jsxmacro or component block"]
        );
    }

    #[test]
    fn test_missing_name_warns() {
        let props = PropsContext::default();
        props.open();
        let mut directive = PropDirective::new(props);
        let output = directive.process(DirectiveArgs::parse(": no name", ""), &ctx());

        assert_eq!(output, DirectiveOutput::Skip);
        assert_eq!(directive.warnings(), ["line 4: prop: missing prop name"]);
    }

    #[test]
    fn test_nested_blocks_keep_separate_lists() {
        let props = PropsContext::default();
        props.open();
        assert!(props.push(Prop {
            name: "outer".to_owned(),
            ty: None,
            description: String::new(),
        }));
        props.open();
        props.close();
        assert_eq!(props.close()[0].name, "outer");
        assert!(props.close().is_empty());
    }

    #[test]
    fn test_render_props() {
        let html = render_props(&[
            Prop {
                name: "id".to_owned(),
                ty: Some("string".to_owned()),
                description: "Message <id>".to_owned(),
            },
            Prop {
                name: "render".to_owned(),
                ty: None,
                description: String::new(),
            },
        ]);

        assert_eq!(
            html,
            "<dl class=\"field-list props\">\n<dt>Props</dt>\n<dd>\n<ul>\n\
             <li><code>id</code> (<em>string</em>) \u{2013} Message &lt;id&gt;</li>\n\
             <li><code>render</code></li>\n\
             </ul>\n</dd>\n</dl>\n"
        );
        assert_eq!(render_props(&[]), "");
    }
}
