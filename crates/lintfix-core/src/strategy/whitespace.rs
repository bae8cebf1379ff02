use super::{FixContext, Resolve};
use crate::error::FixError;
use crate::reconcile::{LineShape, line_shape, line_span_with_terminator, shifted_lines, shifted_span};
use crate::resolution::{Miss, Resolution};
use crate::synth::{delete_ranges, insert_text};
use crate::syntax::SyntaxTree;

/// Unnecessary empty lines at the start or end of a block.
///
/// Only lines that are empty in the live document *and* whose terminator lies in whitespace
/// between tokens are removed. When the reported range holds no such line the finding is still
/// highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlankLines;

impl Resolve for BlankLines {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let range = cx.line_range()?;
        let Some(shift) = cx.shift() else {
            return Ok(Resolution::not_found(Miss::OutOfBounds));
        };
        let (Some(lines), Some(highlight)) = (
            shifted_lines(cx.document, shift, range),
            shifted_span(cx.document, shift, range),
        ) else {
            return Ok(Resolution::not_found(Miss::OutOfBounds));
        };

        let source = cx.tree.source();
        let removable = lines
            .filter(|line| line_shape(source, cx.document, *line) == Some(LineShape::Empty))
            .filter_map(|line| line_span_with_terminator(cx.document, line))
            .filter(|span| !span.is_empty())
            .filter(|span| {
                cx.tree
                    .whitespace_at(span.start)
                    .is_some_and(|gap| gap.contains_range(*span))
            })
            .filter(|span| {
                source
                    .get(span.start..span.end)
                    .is_some_and(|text| text.bytes().all(|b| b == b'\n' || b == b'\r'))
            })
            .collect::<Vec<_>>();

        Ok(match delete_ranges("Remove whitespace", removable) {
            Some(edit) => Resolution::single(edit, Some(highlight)),
            None => Resolution::no_fix(Some(highlight)),
        })
    }
}

/// A `return` that should be separated from the preceding statement by a blank line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewlineBeforeReturn;

impl Resolve for NewlineBeforeReturn {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let (Some(line_start), Some(offset)) =
            (cx.document.line_start(cx.effective_line), cx.offset())
        else {
            return Ok(Resolution::not_found(Miss::OutOfBounds));
        };
        if cx.tree.whitespace_at(line_start).is_none() {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        }

        let highlight = cx.tree.node_at(offset).map(|node| cx.tree.range(node));
        let edit = insert_text(line_start, "\n", "Insert new line before", highlight);
        Ok(Resolution::single(edit, highlight))
    }
}
