use super::{FixContext, Resolve};
use crate::error::FixError;
use crate::message::case_labels;
use crate::resolution::{Miss, Resolution};
use crate::synth::insert_case_clause;
use crate::syntax::{NodeKind, Role, SyntaxTree};
use std::collections::HashSet;

/// A switch over an enum-like type that misses some of its values.
///
/// Message: `missing cases in switch of type <T>: <A>, <B>`. Labels already present as case
/// values are never inserted again, so resolving the same finding after the fix was applied
/// yields no further edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissingCases;

impl Resolve for MissingCases {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let tree = cx.tree;
        let Some(labels) = case_labels(&cx.diagnostic.message) else {
            return Ok(Resolution::not_found(Miss::MalformedMessage));
        };
        let Some(switch) = cx.anchor(|kind| kind == NodeKind::SwitchStatement) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };
        let highlight = tree
            .child_by_role(switch, Role::Value)
            .map(|value| tree.range(value));

        let clauses = tree
            .children(switch)
            .into_iter()
            .filter(|child| {
                matches!(
                    tree.kind(*child),
                    NodeKind::CaseClause | NodeKind::DefaultClause
                )
            })
            .collect::<Vec<_>>();
        if clauses
            .last()
            .is_some_and(|last| tree.kind(*last) == NodeKind::DefaultClause)
        {
            return Ok(Resolution::no_fix(highlight));
        }

        let present = clauses
            .iter()
            .flat_map(|clause| tree.children_by_role(*clause, Role::Value))
            .map(|value| tree.text(value))
            .collect::<HashSet<_>>();
        let missing = labels
            .into_iter()
            .filter(|label| !is_present(&present, label))
            .collect::<Vec<_>>();
        if missing.is_empty() {
            return Ok(Resolution::no_fix(highlight));
        }

        Ok(match insert_case_clause(tree, switch, &missing) {
            Some(edit) => Resolution::single(edit, highlight),
            None => Resolution::no_fix(highlight),
        })
    }
}

/// `pkg.Blue` in a message matches a `Blue` case written inside `pkg`.
fn is_present(present: &HashSet<&str>, label: &str) -> bool {
    present.contains(label)
        || label
            .rsplit_once('.')
            .is_some_and(|(_, short)| present.contains(short))
}
