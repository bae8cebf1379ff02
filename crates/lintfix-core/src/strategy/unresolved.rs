use super::{FixContext, Resolve};
use crate::error::FixError;
use crate::resolution::{Miss, Resolution};
use crate::syntax::SyntaxTree;

/// Fallback for rules without a strategy. Always [`Miss::UnknownRule`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unresolved;

impl Resolve for Unresolved {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        tracing::debug!(rule = %cx.diagnostic.rule, "no strategy for rule");
        Ok(Resolution::not_found(Miss::UnknownRule))
    }
}
