use super::{FixContext, Resolve};
use crate::error::FixError;
use crate::query::enclosing;
use crate::resolution::{Miss, Resolution};
use crate::synth::insert_suppression;
use crate::syntax::{NodeKind, SyntaxTree};

/// A parameter that always receives the same value.
///
/// Changing the signature is out of reach, so the enclosing function gets a `//nolint:unparam`
/// directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnusedParameter;

impl Resolve for UnusedParameter {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let tree = cx.tree;
        let Some(parameter) = cx.anchor(|kind| kind == NodeKind::ParameterDeclaration) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };
        let Some(function) = enclosing(tree, parameter, |kind| {
            kind == NodeKind::FunctionDeclaration
        }) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };

        let highlight = Some(tree.range(parameter));
        Ok(match insert_suppression(tree, function, "unparam") {
            Some(edit) => Resolution::single(edit, highlight),
            None => Resolution::no_fix(highlight),
        })
    }
}

/// A function-scoped complexity finding, silenced for the whole function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSuppression {
    linter: String,
}

impl FunctionSuppression {
    /// Suppress `linter` on the reported function.
    pub fn new(linter: impl Into<String>) -> Self {
        Self {
            linter: linter.into(),
        }
    }

    /// The linter named in the directive.
    pub fn linter(&self) -> &str {
        &self.linter
    }
}

impl Resolve for FunctionSuppression {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let Some(function) = cx.anchor(|kind| kind == NodeKind::FunctionDeclaration) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };
        Ok(match insert_suppression(cx.tree, function, &self.linter) {
            Some(edit) => Resolution::single(edit, None),
            None => Resolution::no_fix(None),
        })
    }
}
