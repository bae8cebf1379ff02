use super::{FixContext, Resolve};
use crate::error::FixError;
use crate::query::{ancestors, expand_to_lines};
use crate::resolution::{Miss, Resolution};
use crate::synth::delete_ranges;
use crate::syntax::{NodeKind, Role, SyntaxTree};

/// An unused function, type, variable, constant or struct field: delete it.
///
/// A spec that is the only one of its `var`/`const`/`type` statement takes the statement with it.
/// Specs declaring several names are only highlighted, since the finding covers one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnusedDeclaration;

impl Resolve for UnusedDeclaration {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let tree = cx.tree;
        let Some(declaration) = cx.anchor(NodeKind::is_declaration) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };

        let names = tree.children_by_role(declaration, Role::Name);
        let name = cx
            .offset()
            .and_then(|offset| {
                names
                    .iter()
                    .copied()
                    .find(|name| tree.range(*name).contains(offset))
            })
            .or_else(|| names.first().copied());
        let highlight = Some(tree.range(name.unwrap_or(declaration)));
        if names.len() != 1 {
            return Ok(Resolution::no_fix(highlight));
        }

        let removed = sole_statement(tree, declaration).unwrap_or(declaration);
        let range = expand_to_lines(tree.source(), tree.range(removed));
        let title = format!(
            "Remove unused `{}`",
            name.map(|name| tree.text(name)).unwrap_or_default()
        );
        Ok(match delete_ranges(title, vec![range]) {
            Some(edit) => Resolution::single(edit, highlight),
            None => Resolution::no_fix(highlight),
        })
    }
}

/// The statement wrapping `spec` when `spec` is its only declaration.
fn sole_statement<T: SyntaxTree>(tree: &T, spec: T::Node) -> Option<T::Node> {
    if tree.kind(spec) != NodeKind::NamedDeclaration {
        return None;
    }
    // Grouped specs sit in an unclassified list node.
    let statement = ancestors(tree, spec)
        .skip(1)
        .find(|node| tree.kind(*node) != NodeKind::Other)
        .filter(|node| tree.kind(*node) == NodeKind::Statement)?;

    let specs = tree
        .children(statement)
        .into_iter()
        .flat_map(|child| match tree.kind(child) {
            NodeKind::Other => tree.children(child),
            _ => vec![child],
        })
        .filter(|child| tree.kind(*child) == NodeKind::NamedDeclaration)
        .count();
    (specs == 1).then_some(statement)
}
