use super::{FixContext, Resolve};
use crate::error::FixError;
use crate::message::naming_suggestion;
use crate::resolution::{Miss, Resolution};
use crate::synth::{rename_declaration, replace_text};
use crate::syntax::{NodeKind, Role, SyntaxTree};

/// Tests should live in the external `<name>_test` package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestPackage;

impl Resolve for TestPackage {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let tree = cx.tree;
        let Some(clause) = cx.anchor(|kind| kind == NodeKind::PackageClause) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };
        let Some(name) = tree.child_by_role(clause, Role::Name) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };

        let highlight = Some(tree.range(name));
        let current = tree.text(name);
        if current.ends_with("_test") {
            return Ok(Resolution::no_fix(highlight));
        }
        Ok(
            match rename_declaration(tree, clause, &format!("{current}_test")) {
                Some(edit) => Resolution::single(edit, highlight),
                None => Resolution::no_fix(highlight),
            },
        )
    }
}

/// A printf-like function whose name lacks the `f` suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintfName;

impl Resolve for PrintfName {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let tree = cx.tree;
        let Some(function) = cx.anchor(|kind| kind == NodeKind::FunctionDeclaration) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };
        let Some(name) = tree.child_by_role(function, Role::Name) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };

        let highlight = Some(tree.range(name));
        let current = tree.text(name);
        if current.ends_with('f') {
            return Ok(Resolution::no_fix(highlight));
        }
        Ok(
            match rename_declaration(tree, function, &format!("{current}f")) {
                Some(edit) => Resolution::single(edit, highlight),
                None => Resolution::no_fix(highlight),
            },
        )
    }
}

/// A name the naming linters want spelled differently.
///
/// Message: `... <old> should be <new>`. Only the declaring identifier is renamed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Naming;

impl Resolve for Naming {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let tree = cx.tree;
        let Some(suggestion) = naming_suggestion(&cx.diagnostic.message) else {
            return Ok(Resolution::not_found(Miss::MalformedMessage));
        };
        let Some(identifier) = cx.anchor_by(|node| {
            matches!(tree.kind(node), NodeKind::Identifier | NodeKind::Reference)
                && tree.text(node) == suggestion.from
        }) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };

        let highlight = Some(tree.range(identifier));
        let declaration = tree.parent(identifier).filter(|parent| {
            tree.kind(*parent).is_declaration()
                && tree.child_by_role(*parent, Role::Name) == Some(identifier)
        });
        let edit = match declaration {
            Some(declaration) => rename_declaration(tree, declaration, suggestion.to),
            None => Some(replace_text(
                tree,
                identifier,
                suggestion.to,
                format!("Rename `{}` to `{}`", suggestion.from, suggestion.to),
            )),
        };
        Ok(match edit {
            Some(edit) => Resolution::single(edit, highlight),
            None => Resolution::no_fix(highlight),
        })
    }
}
