//! Lint finding data model.
//!
//! A [`Diagnostic`] is one finding reported by an external analyzer (golangci-lint and the linters
//! it aggregates), already decoded from the analyzer's report format.
//!
//! Line numbers and columns are **1-based**, exactly as the analyzer reports them. A column of `0`
//! means the analyzer did not report one. Conversion to 0-based document lines happens through
//! [`LineShift`](crate::reconcile::LineShift), never by adjusting the record itself.

use serde::{Deserialize, Serialize};

/// A reported position (1-based line, 1-based byte column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line at the time of analysis.
    pub line: usize,
    /// 1-based byte column, or `0` when unknown.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// An inclusive range of reported lines (`from..=to`, 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRange {
    /// First line of the range.
    pub from: usize,
    /// Last line of the range (inclusive).
    pub to: usize,
}

impl LineRange {
    /// Create a new line range.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Returns `true` if `from <= to`.
    pub fn is_ordered(&self) -> bool {
        self.from <= self.to
    }
}

/// A single finding from the external analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Identifier of the linter that produced the finding (e.g. `"ineffassign"`).
    pub rule: String,
    /// Human-readable message. Some rules embed extractable fragments here.
    pub message: String,
    /// Position at the time of analysis.
    pub position: Position,
    /// Reported line span, only present for range-based rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_range: Option<LineRange>,
}

impl Diagnostic {
    /// Create a diagnostic without a line range.
    pub fn new(
        rule: impl Into<String>,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            position: Position::new(line, column),
            line_range: None,
        }
    }

    /// Attach a reported line span.
    pub fn with_line_range(mut self, from: usize, to: usize) -> Self {
        self.line_range = Some(LineRange::new(from, to));
        self
    }
}
