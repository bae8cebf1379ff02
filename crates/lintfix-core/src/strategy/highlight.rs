//! Findings that are located precisely but have no mechanical fix.

use super::{FixContext, Resolve};
use crate::error::FixError;
use crate::reconcile::{line_span, shifted_lines};
use crate::resolution::{Miss, Resolution};
use crate::syntax::{NodeKind, SyntaxTree};

/// Duplicated code blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuplicateLines;

impl Resolve for DuplicateLines {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let range = cx.line_range()?;
        let Some(shift) = cx.shift() else {
            return Ok(Resolution::not_found(Miss::OutOfBounds));
        };
        if shifted_lines(cx.document, shift, range).is_none() {
            return Ok(Resolution::not_found(Miss::OutOfBounds));
        }
        Ok(match line_span(cx.document, cx.effective_line) {
            Some(span) => Resolution::no_fix(Some(span)),
            None => Resolution::not_found(Miss::OutOfBounds),
        })
    }
}

/// Struct fields that could be reordered to use less memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructLayout;

impl Resolve for StructLayout {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        Ok(match cx.anchor(|kind| kind == NodeKind::StructType) {
            Some(node) => Resolution::no_fix(Some(cx.tree.range(node))),
            None => Resolution::not_found(Miss::NoAnchor),
        })
    }
}

/// Checkers that report on a whole statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementRange;

impl Resolve for StatementRange {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let statement = cx.anchor(|kind| {
            matches!(
                kind,
                NodeKind::Statement | NodeKind::SwitchStatement | NodeKind::FunctionDeclaration
            )
        });
        Ok(match statement {
            Some(node) => Resolution::no_fix(Some(cx.tree.range(node))),
            None => Resolution::not_found(Miss::NoAnchor),
        })
    }
}
