//! Live document line access.
//!
//! Strategies only need three things from the host document: the number of lines, and where each
//! line starts and ends. [`LineDocument`] captures exactly that; [`LineIndex`] is a Rope-backed
//! implementation for hosts that only have the text.
//!
//! All lines are **0-based** and all offsets are **byte** offsets, matching the syntax tree.
//! Only `\n` ends a line, as in Go; a `\r` before it belongs to the terminator.

use crate::range::TextRange;
use ropey::Rope;
use std::borrow::Cow;

/// Line-addressable view of the live document.
pub trait LineDocument {
    /// Total number of lines. A trailing newline starts a final empty line.
    fn line_count(&self) -> usize;

    /// Byte offset of the first byte of `line`, or `None` if out of range.
    fn line_start(&self, line: usize) -> Option<usize>;

    /// Byte offset just before the line terminator of `line`, or `None` if out of range.
    fn line_end(&self, line: usize) -> Option<usize>;
}

/// Logical line index backed by a Rope.
///
/// Rope provides O(log N) line lookup, and cheap in-place replacement when the host applies an
/// edit and wants to keep the index in sync.
#[derive(Debug, Clone)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an index over an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build the line index from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total byte count.
    pub fn byte_count(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Line span (start..end, terminator excluded).
    pub fn line_span(&self, line: usize) -> Option<TextRange> {
        Some(TextRange::new(self.line_start(line)?, self.line_end(line)?))
    }

    /// Text of `line` without its terminator.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let text: Cow<'_, str> = self.rope.line(line).into();
        Some(strip_terminator(&text).to_string())
    }

    /// Convert a byte offset into `(line, byte column)`. Offsets past the end clamp to the end.
    pub fn byte_to_point(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.rope.len_bytes());
        let line = self.rope.byte_to_line(offset);
        (line, offset - self.rope.line_to_byte(line))
    }

    /// Replace a byte range with `text`. Ranges are clamped to the document.
    pub fn replace(&mut self, range: TextRange, text: &str) {
        let len = self.rope.len_bytes();
        let start = self.rope.byte_to_char(range.start.min(len));
        let end = self.rope.byte_to_char(range.end.min(len));
        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
    }

    /// Get the complete text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDocument for LineIndex {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_start(&self, line: usize) -> Option<usize> {
        if line >= self.rope.len_lines() {
            return None;
        }
        Some(self.rope.line_to_byte(line))
    }

    fn line_end(&self, line: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let text: Cow<'_, str> = self.rope.line(line).into();
        Some(start + strip_terminator(&text).len())
    }
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}
