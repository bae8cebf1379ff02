//! [`SyntaxTree`] over a tree-sitter-go parse tree.

use lintfix_core::{NodeKind, Role, SyntaxTree, TextRange};
use tree_sitter::{Node, Tree};

/// Tokens whose bytes are opaque: whitespace inside them is content.
const OPAQUE: [&str; 4] = [
    "comment",
    "interpreted_string_literal",
    "raw_string_literal",
    "rune_literal",
];

/// A borrowed view of a parsed Go file.
#[derive(Clone, Copy)]
pub struct GoSyntax<'a> {
    tree: &'a Tree,
    source: &'a str,
}

impl<'a> GoSyntax<'a> {
    /// View `tree`, which must have been parsed from `source`.
    pub fn new(tree: &'a Tree, source: &'a str) -> Self {
        Self { tree, source }
    }
}

impl std::fmt::Debug for GoSyntax<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoSyntax")
            .field("root", &self.tree.root_node().kind())
            .field("len", &self.source.len())
            .finish()
    }
}

/// Map a tree-sitter-go node onto the language-neutral vocabulary.
pub fn classify(node: Node<'_>) -> NodeKind {
    match node.kind() {
        "source_file" => NodeKind::File,
        "package_clause" => NodeKind::PackageClause,
        "import_declaration" => NodeKind::ImportDeclaration,
        "function_declaration" | "method_declaration" => NodeKind::FunctionDeclaration,
        "parameter_declaration" | "variadic_parameter_declaration" => {
            NodeKind::ParameterDeclaration
        }
        "type_spec" | "type_alias" | "var_spec" | "const_spec" | "field_declaration" => {
            NodeKind::NamedDeclaration
        }
        "struct_type" => NodeKind::StructType,
        "identifier" if is_binding(node) => NodeKind::Identifier,
        "identifier" => NodeKind::Reference,
        "field_identifier" | "type_identifier" | "package_identifier" | "label_name" => {
            NodeKind::Identifier
        }
        "interpreted_string_literal" | "raw_string_literal" => NodeKind::StringLiteral,
        "int_literal" | "float_literal" | "imaginary_literal" => NodeKind::NumberLiteral,
        "comment" => NodeKind::Comment,
        "expression_switch_statement" => NodeKind::SwitchStatement,
        "expression_case" => NodeKind::CaseClause,
        "default_case" => NodeKind::DefaultClause,
        "short_var_declaration" | "var_declaration" | "const_declaration" | "type_declaration" => {
            NodeKind::Statement
        }
        kind if kind.ends_with("_statement") => NodeKind::Statement,
        _ => NodeKind::Other,
    }
}

/// Whether an `identifier` introduces a name rather than referring to one.
fn is_binding(node: Node<'_>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    match parent.kind() {
        "parameter_declaration"
        | "variadic_parameter_declaration"
        | "var_spec"
        | "const_spec"
        | "function_declaration" => has_field_child(parent, "name", node),
        "expression_list" => {
            let Some(owner) = parent.parent() else {
                return false;
            };
            match owner.kind() {
                "short_var_declaration" => has_field_child(owner, "left", parent),
                "range_clause" | "receive_statement" => {
                    has_field_child(owner, "left", parent) && declares(owner)
                }
                "type_switch_statement" => has_field_child(owner, "alias", parent),
                _ => false,
            }
        }
        _ => false,
    }
}

fn has_field_child(parent: Node<'_>, field: &str, child: Node<'_>) -> bool {
    let mut cursor = parent.walk();
    parent
        .children_by_field_name(field, &mut cursor)
        .any(|candidate| candidate == child)
}

/// `:=` rather than `=` between the left and right side.
fn declares(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|child| child.kind() == ":=")
}

impl<'a> SyntaxTree for GoSyntax<'a> {
    type Node = Node<'a>;

    fn source(&self) -> &str {
        self.source
    }

    fn root(&self) -> Node<'a> {
        self.tree.root_node()
    }

    fn node_at(&self, offset: usize) -> Option<Node<'a>> {
        self.tree
            .root_node()
            .descendant_for_byte_range(offset, offset)
    }

    fn kind(&self, node: Node<'a>) -> NodeKind {
        classify(node)
    }

    fn parent(&self, node: Node<'a>) -> Option<Node<'a>> {
        node.parent()
    }

    fn children(&self, node: Node<'a>) -> Vec<Node<'a>> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor).collect()
    }

    fn range(&self, node: Node<'a>) -> TextRange {
        TextRange::new(node.start_byte(), node.end_byte())
    }

    fn children_by_role(&self, node: Node<'a>, role: Role) -> Vec<Node<'a>> {
        let mut cursor = node.walk();
        let field = match (node.kind(), role) {
            ("package_clause", Role::Name) => {
                return node
                    .named_children(&mut cursor)
                    .filter(|child| child.kind() == "package_identifier")
                    .collect();
            }
            (_, Role::Name) => "name",
            (_, Role::Type) => "type",
            (_, Role::Value) => "value",
        };

        let direct = node
            .children_by_field_name(field, &mut cursor)
            .collect::<Vec<_>>();
        // Case labels and initializers come wrapped in an expression list.
        direct
            .into_iter()
            .flat_map(|child| {
                if child.kind() == "expression_list" {
                    let mut cursor = child.walk();
                    child.named_children(&mut cursor).collect()
                } else {
                    vec![child]
                }
            })
            .collect()
    }

    fn whitespace_at(&self, offset: usize) -> Option<TextRange> {
        let bytes = self.source.as_bytes();
        if !bytes.get(offset)?.is_ascii_whitespace() {
            return None;
        }

        let container = self.node_at(offset)?;
        let inside = |node: Node<'_>| node.start_byte() <= offset && offset < node.end_byte();
        let mut ancestor = Some(container);
        while let Some(node) = ancestor {
            if inside(node) && (node.child_count() == 0 || OPAQUE.contains(&node.kind())) {
                return None;
            }
            ancestor = node.parent();
        }

        // A token merely touching the offset does not enclose the gap.
        let container = match container.parent() {
            Some(parent) if container.child_count() == 0 => parent,
            _ => container,
        };
        // Bounded by the neighbouring tokens of the smallest enclosing node.
        let (mut start, mut end) = match container.parent() {
            None => (0, bytes.len()),
            Some(_) => (container.start_byte(), container.end_byte()),
        };
        let mut cursor = container.walk();
        for child in container.children(&mut cursor) {
            if child.end_byte() <= offset {
                start = start.max(child.end_byte());
            } else if child.start_byte() > offset {
                end = end.min(child.start_byte());
                break;
            }
        }

        let mut gap_start = offset;
        while gap_start > start && bytes[gap_start - 1].is_ascii_whitespace() {
            gap_start -= 1;
        }
        let mut gap_end = offset;
        while gap_end < end && bytes[gap_end].is_ascii_whitespace() {
            gap_end += 1;
        }
        Some(TextRange::new(gap_start, gap_end))
    }
}
