use super::{FixContext, Resolve};
use crate::error::FixError;
use crate::message::last_word;
use crate::resolution::{Miss, Resolution};
use crate::synth::{rename_to_placeholder, replace_text};
use crate::syntax::{NodeKind, Role, SyntaxTree};

/// A value assigned and never read: rename the target to the placeholder.
///
/// Message: `ineffectual assignment to <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IneffectualAssignment {
    placeholder: String,
}

impl IneffectualAssignment {
    /// Rename targets to `placeholder`.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

impl Default for IneffectualAssignment {
    fn default() -> Self {
        Self::new("_")
    }
}

impl Resolve for IneffectualAssignment {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let Some(name) = last_word(&cx.diagnostic.message) else {
            return Ok(Resolution::not_found(Miss::MalformedMessage));
        };
        let Some(reference) = cx.anchor(|kind| kind == NodeKind::Reference) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };
        if cx.tree.text(reference) != name {
            tracing::debug!(
                expected = name,
                found = cx.tree.text(reference),
                "assignment target does not match message"
            );
            return Ok(Resolution::not_found(Miss::NameMismatch));
        }

        let highlight = Some(cx.tree.range(reference));
        Ok(
            match rename_to_placeholder(cx.tree, reference, &self.placeholder) {
                Some(edit) => Resolution::single(edit, highlight),
                None => Resolution::no_fix(highlight),
            },
        )
    }
}

/// A parameter that could be narrowed to an interface.
///
/// Message: `` `<param>` can be `<type>` ``.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterType;

impl Resolve for ParameterType {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let Some(new_type) = last_word(&cx.diagnostic.message) else {
            return Ok(Resolution::not_found(Miss::MalformedMessage));
        };
        let tree = cx.tree;
        let Some(parameter) = cx.anchor(|kind| kind == NodeKind::ParameterDeclaration) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };
        let Some(current) = tree.child_by_role(parameter, Role::Type) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };

        let highlight = Some(tree.range(current));
        if tree.text(current) == new_type {
            return Ok(Resolution::no_fix(highlight));
        }
        let edit = replace_text(
            tree,
            current,
            new_type,
            format!("Replace `{}` with `{new_type}`", tree.text(current)),
        );
        Ok(Resolution::single(edit, highlight))
    }
}
