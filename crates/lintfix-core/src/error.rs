use crate::range::TextRange;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced by the fix engine.
///
/// A missing anchor is never an error: it is reported as
/// [`Resolution::NotFound`](crate::Resolution::NotFound). Errors here signal a broken caller
/// contract or an edit that cannot be applied to the given text.
pub enum FixError {
    #[error("rule '{rule}' reports line spans but the diagnostic carries none")]
    /// A range-based rule was handed a diagnostic without a line range.
    MissingLineRange {
        /// The rule that requires the range.
        rule: String,
    },

    #[error("line range {from}..={to} is inverted")]
    /// A diagnostic line range had `from > to`.
    InvalidLineRange {
        /// First reported line.
        from: usize,
        /// Last reported line.
        to: usize,
    },

    #[error("change {range:?} falls outside the text (length {len}) or splits a character")]
    /// A text change does not address valid text.
    ChangeOutOfBounds {
        /// The offending range.
        range: TextRange,
        /// Length of the text the change was applied to.
        len: usize,
    },

    #[error("changes {first:?} and {second:?} overlap")]
    /// Two changes of the same edit overlap.
    OverlappingChanges {
        /// The earlier change.
        first: TextRange,
        /// The later change.
        second: TextRange,
    },

    #[error("edit '{0}' opens a resource and has no text changes")]
    /// Attempted to apply an edit that only opens a URL.
    NotATextEdit(String),

    #[error("invalid configuration: {0}")]
    /// Configuration could not be decoded.
    Config(#[from] serde_json::Error),
}
