//! Fenced code block tracking.
//!
//! Directive syntax inside ```` ``` ```` or `~~~` blocks is literal text.

/// Open fence: marker character and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    marker: char,
    len: usize,
}

/// Line-by-line code fence state.
///
/// A fence opens with three or more backticks or tildes and closes with a run
/// of the same character at least as long, followed only by whitespace.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<Fence>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed the next line. Returns `true` when the line opens or closes a fence.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let Some(run) = leading_run(line.trim_start()) else {
            return false;
        };

        match self.open {
            Some(open) => {
                let closes = run.marker == open.marker
                    && run.len >= open.len
                    && line.trim_start()[run.len..].trim().is_empty();
                if closes {
                    self.open = None;
                }
                closes
            }
            None => {
                self.open = Some(run);
                true
            }
        }
    }
}

/// Leading run of at least three fence markers.
fn leading_run(trimmed: &str) -> Option<Fence> {
    let marker = trimmed.chars().next().filter(|c| matches!(c, '`' | '~'))?;
    let len = trimmed.chars().take_while(|&c| c == marker).count();
    (len >= 3).then_some(Fence { marker, len })
}
