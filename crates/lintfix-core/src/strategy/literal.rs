use super::{FixContext, Resolve};
use crate::error::FixError;
use crate::resolution::{Miss, Resolution};
use crate::synth::introduce_constant;
use crate::syntax::{NodeKind, SyntaxTree};

/// A string literal repeated often enough to deserve a constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepeatedString;

impl Resolve for RepeatedString {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let Some(literal) = cx.anchor(|kind| kind == NodeKind::StringLiteral) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };
        let highlight = Some(cx.tree.range(literal));
        Ok(match introduce_constant(cx.tree, literal) {
            Some(edit) => Resolution::single(edit, highlight),
            None => Resolution::no_fix(highlight),
        })
    }
}

/// A magic number. Naming it is left to the author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MagicNumber;

impl Resolve for MagicNumber {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        Ok(
            match cx.anchor(|kind| kind == NodeKind::NumberLiteral) {
                Some(number) => Resolution::no_fix(Some(cx.tree.range(number))),
                None => Resolution::not_found(Miss::NoAnchor),
            },
        )
    }
}
