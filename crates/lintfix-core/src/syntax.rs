//! Syntax tree capability interface.
//!
//! Resolution algorithms never see a concrete grammar. A parser integration (for example
//! `lintfix-treesitter`) implements [`SyntaxTree`] and maps its node types onto the small,
//! language-neutral [`NodeKind`] vocabulary the strategies reason about.

use crate::range::TextRange;
use serde::Serialize;

/// Language-neutral node classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    /// The root of a parsed file.
    File,
    /// `package <name>` clause.
    PackageClause,
    /// An import declaration (single or grouped).
    ImportDeclaration,
    /// A function or method declaration.
    FunctionDeclaration,
    /// One parameter declaration inside a parameter list.
    ParameterDeclaration,
    /// A named type/var/const spec or struct field declaration.
    NamedDeclaration,
    /// A struct type expression.
    StructType,
    /// An identifier in expression position (reads or plain assignment targets).
    Reference,
    /// Any other identifier: declaration names, field and type names.
    Identifier,
    /// A string literal.
    StringLiteral,
    /// An integer, float or imaginary literal.
    NumberLiteral,
    /// A line or block comment.
    Comment,
    /// A value switch statement.
    SwitchStatement,
    /// A non-default branch of a switch.
    CaseClause,
    /// The catch-all branch of a switch.
    DefaultClause,
    /// Any other statement or statement-level declaration.
    Statement,
    /// Anything else.
    Other,
}

impl NodeKind {
    /// Statement-level nodes bound the outward anchor search.
    pub fn is_boundary(self) -> bool {
        matches!(
            self,
            Self::File
                | Self::PackageClause
                | Self::ImportDeclaration
                | Self::FunctionDeclaration
                | Self::SwitchStatement
                | Self::Statement
        )
    }

    /// Kinds that introduce a named, removable declaration.
    pub fn is_declaration(self) -> bool {
        matches!(self, Self::FunctionDeclaration | Self::NamedDeclaration)
    }
}

/// Sub-node roles a strategy may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The declared name(s): function, package, parameter, spec or field names.
    Name,
    /// The declared type of a parameter, spec or field.
    Type,
    /// The value: a switch condition, or the label list of a case clause.
    Value,
}

/// A parsed, navigable syntax tree over the live source text.
///
/// Offsets are byte offsets into [`SyntaxTree::source`].
pub trait SyntaxTree {
    /// Node handle. Handles are only valid for the lifetime of the tree they came from.
    type Node: Copy + Eq + std::fmt::Debug;

    /// The full source text the tree was parsed from.
    fn source(&self) -> &str;

    /// The root node.
    fn root(&self) -> Self::Node;

    /// The smallest node covering `offset` (`start <= offset < end`).
    fn node_at(&self, offset: usize) -> Option<Self::Node>;

    /// Classify a node.
    fn kind(&self, node: Self::Node) -> NodeKind;

    /// Parent of a node, `None` for the root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Named children of a node in source order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Byte range of a node.
    fn range(&self, node: Self::Node) -> TextRange;

    /// Children playing `role` in `node`, in source order.
    fn children_by_role(&self, node: Self::Node, role: Role) -> Vec<Self::Node>;

    /// The whitespace run between two tokens that contains `offset`, if any.
    ///
    /// Whitespace inside tokens (raw strings, comments) is never reported.
    fn whitespace_at(&self, offset: usize) -> Option<TextRange>;

    /// First child playing `role`.
    fn child_by_role(&self, node: Self::Node, role: Role) -> Option<Self::Node> {
        self.children_by_role(node, role).into_iter().next()
    }

    /// Source text of a node.
    fn text(&self, node: Self::Node) -> &str {
        let range = self.range(node);
        self.source().get(range.start..range.end).unwrap_or_default()
    }
}
