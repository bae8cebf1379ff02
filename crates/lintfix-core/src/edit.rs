//! Proposed edits.
//!
//! Strategies never touch the document. They return [`Edit`] descriptions that the host applies
//! through its own document API, or through [`apply_changes`] when it only holds the text.
//!
//! Semantics:
//! - every [`TextChange`] range addresses the text **before** the edit is applied;
//! - the changes of one edit never overlap, so they can be applied in any order as long as later
//!   offsets are applied first.

use crate::error::FixError;
use crate::range::TextRange;
use serde::Serialize;

/// Replace `range` with `new_text`. An empty range inserts, an empty text deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextChange {
    /// Pre-edit byte range to replace.
    pub range: TextRange,
    /// Replacement text (may contain newlines).
    pub new_text: String,
}

impl TextChange {
    /// Replace `range` with `new_text`.
    pub fn replace(range: TextRange, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Insert `text` at `offset`.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::replace(TextRange::empty(offset), text)
    }

    /// Delete `range`.
    pub fn delete(range: TextRange) -> Self {
        Self::replace(range, String::new())
    }
}

/// What applying an edit does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum EditAction {
    /// Rewrite the document.
    Changes(Vec<TextChange>),
    /// Open an explanation resource; the document is left untouched.
    OpenUrl(String),
}

/// One proposed fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    /// Short user-facing title (e.g. "Rename `x` to `_`").
    pub title: String,
    /// Range of the anchor the edit is about, if any.
    pub target: Option<TextRange>,
    /// The effect of the edit.
    pub action: EditAction,
}

impl Edit {
    /// An edit rewriting the document.
    pub fn changes(
        title: impl Into<String>,
        target: Option<TextRange>,
        changes: Vec<TextChange>,
    ) -> Self {
        Self {
            title: title.into(),
            target,
            action: EditAction::Changes(changes),
        }
    }

    /// The text changes of this edit (empty for URL edits).
    pub fn text_changes(&self) -> &[TextChange] {
        match &self.action {
            EditAction::Changes(changes) => changes,
            EditAction::OpenUrl(_) => &[],
        }
    }

    /// The URL this edit opens, if it is an explanation link.
    pub fn url(&self) -> Option<&str> {
        match &self.action {
            EditAction::OpenUrl(url) => Some(url),
            EditAction::Changes(_) => None,
        }
    }

    /// Apply this edit to `text`.
    pub fn apply(&self, text: &str) -> Result<String, FixError> {
        match &self.action {
            EditAction::Changes(changes) => apply_changes(text, changes),
            EditAction::OpenUrl(_) => Err(FixError::NotATextEdit(self.title.clone())),
        }
    }
}

/// Apply non-overlapping changes to `text`.
///
/// Changes are sorted and applied from the end so earlier changes don't shift later ones.
pub fn apply_changes(text: &str, changes: &[TextChange]) -> Result<String, FixError> {
    let mut sorted = changes.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|change| (change.range.start, change.range.end));

    for pair in sorted.windows(2) {
        let (first, second) = (pair[0].range, pair[1].range);
        // Two inserts at the same offset would be order-dependent.
        if first.end > second.start || (first == second && first.is_empty()) {
            return Err(FixError::OverlappingChanges { first, second });
        }
    }

    let mut out = text.to_string();
    for change in sorted.into_iter().rev() {
        let range = change.range;
        if range.end > out.len()
            || !out.is_char_boundary(range.start)
            || !out.is_char_boundary(range.end)
        {
            return Err(FixError::ChangeOutOfBounds {
                range,
                len: text.len(),
            });
        }
        out.replace_range(range.start..range.end, &change.new_text);
    }

    Ok(out)
}
