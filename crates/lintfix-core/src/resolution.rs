//! Outcome of resolving one diagnostic.

use crate::edit::Edit;
use crate::range::TextRange;
use serde::Serialize;

/// Why no anchor could be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Miss {
    /// The rule has no strategy (or is excluded from dispatch).
    UnknownRule,
    /// The effective line, column or line range lies outside the live document.
    OutOfBounds,
    /// No node of the expected kind near the reported position.
    NoAnchor,
    /// A fragment the rule embeds in its message could not be extracted.
    MalformedMessage,
    /// The anchor was found but its text differs from the name in the message.
    NameMismatch,
}

/// Result of resolving a diagnostic against the live tree.
///
/// The three outcomes are deliberately distinct: an empty edit list with a highlight is a valid
/// finding, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    /// The anchor could not be resolved.
    NotFound {
        /// Why resolution failed.
        reason: Miss,
    },
    /// The anchor was resolved but no edit is warranted.
    NoFix {
        /// Range to highlight, if meaningful.
        highlight: Option<TextRange>,
    },
    /// The anchor was resolved and at least one edit is proposed.
    Fix {
        /// Proposed edits, in presentation order. Never empty.
        edits: Vec<Edit>,
        /// Range to highlight, if meaningful.
        highlight: Option<TextRange>,
    },
}

impl Resolution {
    /// Resolution failed for `reason`.
    pub fn not_found(reason: Miss) -> Self {
        Self::NotFound { reason }
    }

    /// Found, nothing to propose.
    pub fn no_fix(highlight: Option<TextRange>) -> Self {
        Self::NoFix { highlight }
    }

    /// Found with edits. An empty edit list degrades to [`Resolution::NoFix`].
    pub fn fix(edits: Vec<Edit>, highlight: Option<TextRange>) -> Self {
        if edits.is_empty() {
            Self::NoFix { highlight }
        } else {
            Self::Fix { edits, highlight }
        }
    }

    /// Found with a single edit.
    pub fn single(edit: Edit, highlight: Option<TextRange>) -> Self {
        Self::Fix {
            edits: vec![edit],
            highlight,
        }
    }

    /// Returns `true` for [`Resolution::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The miss reason, if resolution failed.
    pub fn miss(&self) -> Option<Miss> {
        match self {
            Self::NotFound { reason } => Some(*reason),
            _ => None,
        }
    }

    /// Proposed edits (empty unless [`Resolution::Fix`]).
    pub fn edits(&self) -> &[Edit] {
        match self {
            Self::Fix { edits, .. } => edits,
            _ => &[],
        }
    }

    /// Range to highlight.
    pub fn highlight(&self) -> Option<TextRange> {
        match self {
            Self::NotFound { .. } => None,
            Self::NoFix { highlight } | Self::Fix { highlight, .. } => *highlight,
        }
    }

    /// Split into the `(edits, highlight)` pair hosts usually consume.
    pub fn into_parts(self) -> (Vec<Edit>, Option<TextRange>) {
        match self {
            Self::NotFound { .. } => (Vec::new(), None),
            Self::NoFix { highlight } => (Vec::new(), highlight),
            Self::Fix { edits, highlight } => (edits, highlight),
        }
    }
}
