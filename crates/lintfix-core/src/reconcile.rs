//! Mapping reported lines onto the live document.
//!
//! The analyzer ran against an older version of the file. The caller tells us where the finding
//! lives *now* (the effective line); every other reported line is moved by the same amount.

use crate::diagnostic::{LineRange, Position};
use crate::line_index::LineDocument;
use crate::range::TextRange;

/// Signed distance between a reported (1-based) line and its live (0-based) document line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShift(isize);

impl LineShift {
    /// Shift that moves `reported_line` onto `effective_line`.
    ///
    /// `None` when either line does not fit a signed offset.
    pub fn new(reported_line: usize, effective_line: usize) -> Option<Self> {
        let reported = isize::try_from(reported_line).ok()?;
        let effective = isize::try_from(effective_line).ok()?;
        effective.checked_sub(reported).map(Self)
    }

    /// The raw signed offset.
    pub fn delta(self) -> isize {
        self.0
    }

    /// Live document line for a reported line, `None` if it would be negative.
    pub fn apply(self, reported_line: usize) -> Option<usize> {
        reported_line.checked_add_signed(self.0)
    }
}

/// How a live line looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    /// No characters besides the terminator.
    Empty,
    /// Only spaces and tabs.
    Blank,
    /// Anything else.
    Content,
}

/// Span of a live line, terminator excluded.
pub fn line_span(document: &dyn LineDocument, line: usize) -> Option<TextRange> {
    Some(TextRange::new(
        document.line_start(line)?,
        document.line_end(line)?,
    ))
}

/// Span of a live line including its terminator (up to the next line start).
pub fn line_span_with_terminator(document: &dyn LineDocument, line: usize) -> Option<TextRange> {
    let start = document.line_start(line)?;
    let end = match document.line_start(line + 1) {
        Some(next) => next,
        None => document.line_end(line)?,
    };
    Some(TextRange::new(start, end))
}

/// Classify a live line.
pub fn line_shape(source: &str, document: &dyn LineDocument, line: usize) -> Option<LineShape> {
    let span = line_span(document, line)?;
    if span.is_empty() {
        return Some(LineShape::Empty);
    }
    let text = source.get(span.start..span.end)?;
    if text.bytes().all(|b| b == b' ' || b == b'\t') {
        Some(LineShape::Blank)
    } else {
        Some(LineShape::Content)
    }
}

/// Byte offset of a reported column on a live line.
///
/// Column `0` (unknown) maps to the line start. Columns past the end of the line (terminator
/// position included) are rejected.
pub fn column_offset(document: &dyn LineDocument, line: usize, column: usize) -> Option<usize> {
    let span = line_span(document, line)?;
    let offset = span.start.checked_add(column.saturating_sub(1))?;
    (offset <= span.end).then_some(offset)
}

/// Byte offset of a reported position, given the live line it was mapped to.
pub fn position_offset(
    document: &dyn LineDocument,
    position: Position,
    effective_line: usize,
) -> Option<usize> {
    column_offset(document, effective_line, position.column)
}

/// Live lines covered by a reported range, `None` if any end falls outside the document.
pub fn shifted_lines(
    document: &dyn LineDocument,
    shift: LineShift,
    range: LineRange,
) -> Option<std::ops::RangeInclusive<usize>> {
    let from = shift.apply(range.from)?;
    let to = shift.apply(range.to)?;
    if to >= document.line_count() || from > to {
        return None;
    }
    Some(from..=to)
}

/// Span from the start of the first to the end of the last line of a reported range.
pub fn shifted_span(
    document: &dyn LineDocument,
    shift: LineShift,
    range: LineRange,
) -> Option<TextRange> {
    let lines = shifted_lines(document, shift, range)?;
    Some(TextRange::new(
        document.line_start(*lines.start())?,
        document.line_end(*lines.end())?,
    ))
}
