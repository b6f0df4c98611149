//! Invisible reference targets.

use docext_directive::{
    DirectiveArgs, DirectiveContext, DirectiveOutput, LeafDirective, escape_html,
};

use crate::ObjectType;

/// Leaf directive that only places an anchor: `::config[sourceLocale]`.
///
/// Used for object types that are referenced but have no rendered
/// description of their own, such as configuration keys.
#[derive(Debug)]
pub struct TargetDirective {
    object: ObjectType,
    warnings: Vec<String>,
}

impl TargetDirective {
    #[must_use]
    pub fn new(object: ObjectType) -> Self {
        Self {
            object,
            warnings: Vec::new(),
        }
    }
}

impl LeafDirective for TargetDirective {
    fn name(&self) -> &str {
        self.object.directive_name()
    }

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let name = args.content.trim();
        if name.is_empty() {
            self.warnings.push(format!(
                "{ctx}: {}: missing target name",
                self.object.directive_name()
            ));
            return DirectiveOutput::Skip;
        }

        DirectiveOutput::html(format!(
            r#"<span id="{}"></span>"#,
            escape_html(&self.object.anchor(name))
        ))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
