//! Directive syntax parsing.
//!
//! Recognizes `:name`, `::name` and `:::name` forms, each optionally followed by
//! `[content]` and `{attrs}`.

use std::ops::Range;

use super::DirectiveArgs;

/// A directive found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedDirective {
    /// `:name[content]{attrs}`
    Inline { name: String, args: DirectiveArgs },
    /// `::name[content]{attrs}`
    Leaf { name: String, args: DirectiveArgs },
    /// `:::name[content]{attrs}` on a line of its own
    ContainerStart {
        name: String,
        args: DirectiveArgs,
        colon_count: usize,
    },
    /// `:::` on a line of its own
    ContainerEnd { colon_count: usize },
}

/// Find the first inline or leaf directive in `line`.
///
/// Returns the directive with its byte range in `line`. A colon run only
/// starts a directive at the beginning of the line or after a
/// non-alphanumeric character, and the name must start with a letter, so
/// `https://`, `10:30` and `Note: text` are left alone. Colons inside inline
/// code spans are literal.
pub(crate) fn find_directive(line: &str) -> Option<(ParsedDirective, usize, usize)> {
    let spans = code_spans(line);
    let mut search_from = 0;

    while let Some(offset) = line[search_from..].find(':') {
        let start = search_from + offset;
        if let Some(span) = spans.iter().find(|span| span.contains(&start)) {
            search_from = span.end;
            continue;
        }

        let colon_count = line[start..].bytes().take_while(|&b| b == b':').count();
        search_from = start + colon_count;

        let preceded_by_word = line[..start]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric);
        if preceded_by_word || colon_count > 2 {
            continue;
        }

        let Some((name, args, consumed)) = parse_tail(&line[search_from..]) else {
            continue;
        };

        let directive = if colon_count == 1 {
            ParsedDirective::Inline { name, args }
        } else {
            ParsedDirective::Leaf { name, args }
        };
        return Some((directive, start, search_from + consumed));
    }

    None
}

/// Byte ranges of the inline code spans in `line`.
///
/// A span opens with a run of backticks and closes at the next run of the
/// same length. An opening run with no match is literal text.
fn code_spans(line: &str) -> Vec<Range<usize>> {
    let bytes = line.as_bytes();
    let run_len = |at: usize| bytes[at..].iter().take_while(|&&b| b == b'`').count();

    let mut spans = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] != b'`' {
            pos += 1;
            continue;
        }

        let open = run_len(pos);
        let mut cursor = pos + open;
        let mut close = None;
        while cursor < bytes.len() {
            if bytes[cursor] == b'`' {
                let len = run_len(cursor);
                if len == open {
                    close = Some(cursor + len);
                    break;
                }
                cursor += len;
            } else {
                cursor += 1;
            }
        }

        match close {
            Some(end) => {
                spans.push(pos..end);
                pos = end;
            }
            None => pos += open,
        }
    }
    spans
}

/// Parse a line that consists of a container fence.
pub(crate) fn parse_container_line(line: &str) -> Option<ParsedDirective> {
    let trimmed = line.trim();
    let colon_count = trimmed.bytes().take_while(|&b| b == b':').count();
    if colon_count < 3 {
        return None;
    }

    let rest = trimmed[colon_count..].trim_start();
    if rest.is_empty() {
        return Some(ParsedDirective::ContainerEnd { colon_count });
    }

    let (name, args, _) = parse_tail(rest)?;
    Some(ParsedDirective::ContainerStart {
        name,
        args,
        colon_count,
    })
}

/// Parse `name[content]{attrs}` at the start of `s`.
///
/// Returns the name, the parsed arguments and the number of bytes consumed.
fn parse_tail(s: &str) -> Option<(String, DirectiveArgs, usize)> {
    let name_len = s
        .find(|c: char| !is_name_char(c))
        .unwrap_or(s.len());
    let name = &s[..name_len];
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut pos = name_len;
    let content = balanced(&s[pos..], '[', ']');
    if let Some(content) = content {
        pos += content.len() + 2;
    }
    let attrs = balanced(&s[pos..], '{', '}');
    if let Some(attrs) = attrs {
        pos += attrs.len() + 2;
    }

    let args = DirectiveArgs::parse(content.unwrap_or_default(), attrs.unwrap_or_default());
    Some((name.to_owned(), args, pos))
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Text between `open` at the start of `s` and its matching `close`.
fn balanced(s: &str, open: char, close: char) -> Option<&str> {
    if !s.starts_with(open) {
        return None;
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(&s[open.len_utf8()..i]);
            }
        }
    }
    None
}
