//! Directive argument parsing.
//!
//! Handles the `[content]{#id .class key="value"}` tail of a directive.

use std::collections::BTreeMap;

/// Arguments of a single directive invocation.
///
/// For `::youtube[dQw4w9WgXcQ]{#intro .wide width=100% aspect="4:3"}`:
///
/// ```
/// use docext_directive::DirectiveArgs;
///
/// let args = DirectiveArgs::parse("dQw4w9WgXcQ", r#"#intro .wide width=100% aspect="4:3""#);
/// assert_eq!(args.content, "dQw4w9WgXcQ");
/// assert_eq!(args.id.as_deref(), Some("intro"));
/// assert_eq!(args.classes, vec!["wide"]);
/// assert_eq!(args.get("width"), Some("100%"));
/// assert_eq!(args.get("aspect"), Some("4:3"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Bracketed content, empty when absent.
    pub content: String,
    /// `#id` attribute.
    pub id: Option<String>,
    /// `.class` attributes in source order.
    pub classes: Vec<String>,
    /// `key=value` attributes. Later duplicates win.
    pub attrs: BTreeMap<String, String>,
}

impl DirectiveArgs {
    /// Build arguments from bracket content and the raw text between braces.
    #[must_use]
    pub fn parse(content: &str, attrs_str: &str) -> Self {
        let mut args = Self {
            content: content.to_owned(),
            ..Self::default()
        };

        let mut rest = attrs_str.trim_start();
        while let Some(first) = rest.chars().next() {
            rest = match first {
                '#' => {
                    let (name, tail) = split_selector(&rest[1..]);
                    args.id = Some(name.to_owned());
                    tail
                }
                '.' => {
                    let (name, tail) = split_selector(&rest[1..]);
                    if !name.is_empty() {
                        args.classes.push(name.to_owned());
                    }
                    tail
                }
                _ => match parse_key_value(rest) {
                    Some((key, value, tail)) => {
                        args.attrs.insert(key.to_owned(), value.to_owned());
                        tail
                    }
                    None => &rest[first.len_utf8()..],
                },
            }
            .trim_start();
        }

        args
    }

    /// Look up a `key=value` attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// Split an `#id` or `.class` name off the front of `s`.
fn split_selector(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| c.is_whitespace() || c == '.' || c == '#')
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Parse `key="value"`, `key='value'` or `key=value` from the front of `s`.
///
/// Returns `(key, value, rest)`.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq = s.find('=')?;
    let key = s[..eq].trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let value_start = &s[eq + 1..];
    for quote in ['"', '\''] {
        if let Some(quoted) = value_start.strip_prefix(quote) {
            let close = quoted.find(quote)?;
            return Some((key, &quoted[..close], &quoted[close + 1..]));
        }
    }

    let end = value_start
        .find(char::is_whitespace)
        .unwrap_or(value_start.len());
    Some((key, &value_start[..end], &value_start[end..]))
}
