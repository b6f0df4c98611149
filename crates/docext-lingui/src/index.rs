//! Per-page index of declared objects.

use std::sync::{Arc, Mutex, PoisonError};

use crate::ObjectType;

/// One declared object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub object: ObjectType,
    /// Name as declared; the command word for CLI commands.
    pub name: String,
    /// Anchor id of the declaration.
    pub anchor: String,
    /// Line of the declaring directive.
    pub line: usize,
}

impl IndexEntry {
    /// The two index keys, `name; kind` and `kind; name`.
    ///
    /// ```
    /// use docext_lingui::{IndexEntry, ObjectType};
    ///
    /// let entry = IndexEntry {
    ///     object: ObjectType::CliCommand,
    ///     name: "extract".to_owned(),
    ///     anchor: "lingui-cli-extract".to_owned(),
    ///     line: 1,
    /// };
    /// assert_eq!(
    ///     entry.pair(),
    ///     ["extract; lingui-cli command".to_owned(), "lingui-cli command; extract".to_owned()]
    /// );
    /// ```
    #[must_use]
    pub fn pair(&self) -> [String; 2] {
        let kind = self.object.index_label();
        [
            format!("{}; {kind}", self.name),
            format!("{kind}; {}", self.name),
        ]
    }
}

/// Objects declared on a page, in declaration order.
///
/// Cloned into every object directive by [`register`](crate::register); the
/// caller keeps its own clone and reads [`entries`](Self::entries) after
/// processing.
#[derive(Debug, Clone, Default)]
pub struct ObjectIndex(Arc<Mutex<Vec<IndexEntry>>>);

impl ObjectIndex {
    pub(crate) fn record(&self, entry: IndexEntry) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> Vec<IndexEntry> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
