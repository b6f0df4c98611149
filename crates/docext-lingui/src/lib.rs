//! Object descriptions and cross-reference roles for library documentation.
//!
//! Each [`ObjectType`] gets a directive that declares an object (with an
//! anchor) and an inline role that links to it:
//!
//! | object | declare | reference |
//! |---|---|---|
//! | React macro | `:::jsxmacro[Trans]` | `:jsxmacro[Trans]` |
//! | component | `:::component[I18nProvider]` | `:component[I18nProvider]` |
//! | JS macro | `:::jsmacro[t]` | `:jsmacro[t]` |
//! | CLI command | `:::lingui-cli[extract [files...]]` | `:cli[extract]` |
//! | CLI option | `::lingui-cli-option[--verbose]` | |
//! | config key | `::config[sourceLocale]` | `:config[sourceLocale]` |
//! | ICU keyword | `::icu[plural]` | `:icu[plural]` |
//!
//! Roles accept an explicit title: `:component[the provider <I18nProvider>]`.
//! Inside `jsxmacro` and `component` blocks, `::prop[name: description]{type=T}`
//! documents a prop.
//!
//! ```
//! use docext_directive::DirectiveProcessor;
//! use docext_lingui::ObjectIndex;
//!
//! let index = ObjectIndex::default();
//! let mut processor = docext_lingui::register(DirectiveProcessor::new(), &index);
//! let html = processor.process("Wrap the app in :component[I18nProvider].");
//! assert_eq!(
//!     html,
//!     r##"Wrap the app in <a class="reference component" href="#component-I18nProvider"><code>&lt;I18nProvider&gt;</code></a>."##
//! );
//! ```

mod cli;
mod index;
mod object;
mod props;
mod role;
mod target;

pub use cli::{CliOptionDirective, ProgramContext};
pub use index::{IndexEntry, ObjectIndex};
pub use object::ObjectDirective;
pub use props::{Prop, PropDirective, PropsContext};
pub use role::XrefRole;
pub use target::TargetDirective;

use docext_directive::DirectiveProcessor;

/// Kinds of documented objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// React macro rendered as a JSX element, e.g. `<Trans>`.
    JsxMacro,
    /// React component, e.g. `<I18nProvider>`.
    Component,
    /// Plain JS macro, e.g. `t`.
    JsMacro,
    /// `lingui` CLI subcommand.
    CliCommand,
    /// Configuration key.
    Config,
    /// ICU message format keyword.
    Icu,
}

impl ObjectType {
    pub const ALL: [Self; 6] = [
        Self::JsxMacro,
        Self::Component,
        Self::JsMacro,
        Self::CliCommand,
        Self::Config,
        Self::Icu,
    ];

    /// Name of the declaring directive.
    #[must_use]
    pub fn directive_name(self) -> &'static str {
        match self {
            Self::JsxMacro => "jsxmacro",
            Self::Component => "component",
            Self::JsMacro => "jsmacro",
            Self::CliCommand => "lingui-cli",
            Self::Config => "config",
            Self::Icu => "icu",
        }
    }

    /// Name of the referencing role.
    #[must_use]
    pub fn role_name(self) -> &'static str {
        match self {
            Self::CliCommand => "cli",
            other => other.directive_name(),
        }
    }

    /// Human-readable label, used in `title` attributes.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::JsxMacro => "React macro",
            Self::Component => "Component",
            Self::JsMacro => "JS Macro",
            Self::CliCommand => "lingui-cli command",
            Self::Config => "config",
            Self::Icu => "ICU",
        }
    }

    /// Kind shown in index entries.
    #[must_use]
    pub fn index_label(self) -> &'static str {
        match self {
            Self::CliCommand => "lingui-cli command",
            other => other.directive_name(),
        }
    }

    /// Whether declarations take a typed prop list.
    #[must_use]
    pub fn has_props(self) -> bool {
        matches!(self, Self::JsxMacro | Self::Component)
    }

    /// Anchor id for an object of this type.
    ///
    /// ```
    /// use docext_lingui::ObjectType;
    ///
    /// assert_eq!(ObjectType::JsxMacro.anchor("Trans"), "jsxmacro-Trans");
    /// assert_eq!(ObjectType::CliCommand.anchor("compile"), "lingui-cli-compile");
    /// ```
    #[must_use]
    pub fn anchor(self, name: &str) -> String {
        format!("{}-{}", self.directive_name(), slug(name))
    }

    /// How an object name is displayed, before HTML escaping.
    #[must_use]
    pub fn display(self, name: &str) -> String {
        match self {
            Self::JsxMacro | Self::Component => format!("<{name}>"),
            Self::CliCommand => format!("lingui {name}"),
            Self::JsMacro | Self::Config | Self::Icu => name.to_owned(),
        }
    }
}

/// Register every directive and role on `processor`.
///
/// All handlers of one processor share a [`ProgramContext`], so options
/// declared with `::lingui-cli-option` attach to the preceding command, and a
/// [`PropsContext`], so `::prop` lines attach to the enclosing block.
/// Declarations are recorded in `index`.
#[must_use]
pub fn register(processor: DirectiveProcessor, index: &ObjectIndex) -> DirectiveProcessor {
    let program = ProgramContext::default();
    let props = PropsContext::default();

    let processor = ObjectType::ALL
        .into_iter()
        .fold(processor, |p, object| p.with_inline(XrefRole::new(object)));

    let processor = [
        ObjectDirective::new(ObjectType::JsxMacro),
        ObjectDirective::new(ObjectType::Component),
        ObjectDirective::new(ObjectType::JsMacro),
        ObjectDirective::cli(program.clone()),
    ]
    .into_iter()
    .fold(processor, |p, directive| {
        p.with_container(
            directive
                .with_props(props.clone())
                .with_index(index.clone()),
        )
    });

    processor
        .with_leaf(PropDirective::new(props))
        .with_leaf(CliOptionDirective::new(program))
        .with_leaf(TargetDirective::new(ObjectType::Config))
        .with_leaf(TargetDirective::new(ObjectType::Icu))
}

/// Reduce a name to anchor-safe characters.
///
/// Runs of anything other than ASCII alphanumerics, `_` and `.` become a
/// single `-`; leading and trailing dashes are dropped. Case is kept.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
