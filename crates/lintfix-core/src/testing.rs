//! A whitespace-token tree for exercising strategies without a real grammar.
//!
//! Every non-blank line becomes a statement (or a package clause when it starts with `package`)
//! whose children are its tokens: `//` comments to end of line, `"..."` strings, numbers, words
//! (references) and punctuation runs.

use crate::range::TextRange;
use crate::syntax::{NodeKind, Role, SyntaxTree};

#[derive(Debug)]
struct FlatNode {
    kind: NodeKind,
    range: TextRange,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug)]
pub(crate) struct FlatTree {
    source: String,
    nodes: Vec<FlatNode>,
}

impl FlatTree {
    pub(crate) fn parse(source: &str) -> Self {
        let mut tree = Self {
            source: source.to_string(),
            nodes: vec![FlatNode {
                kind: NodeKind::File,
                range: TextRange::new(0, source.len()),
                parent: None,
                children: Vec::new(),
            }],
        };

        let mut line_start = 0;
        for line in source.split_inclusive('\n') {
            let tokens = tokenize(line, line_start);
            line_start += line.len();
            let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
                continue;
            };

            let is_package = &source[first.1.start..first.1.end] == "package";
            let line_id = tree.push(
                if is_package {
                    NodeKind::PackageClause
                } else {
                    NodeKind::Statement
                },
                TextRange::new(first.1.start, last.1.end),
                0,
            );
            for (index, (kind, range)) in tokens.iter().enumerate() {
                let kind = match (is_package, index) {
                    (true, 0) => NodeKind::Other,
                    (true, 1) => NodeKind::Identifier,
                    _ => *kind,
                };
                tree.push(kind, *range, line_id);
            }
        }
        tree
    }

    fn push(&mut self, kind: NodeKind, range: TextRange, parent: usize) -> usize {
        let id = self.nodes.len();
        self.nodes.push(FlatNode {
            kind,
            range,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    fn is_leaf(&self, id: usize) -> bool {
        self.nodes[id].children.is_empty() && id != 0
    }
}

fn tokenize(line: &str, base: usize) -> Vec<(NodeKind, TextRange)> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        let start = i;
        let kind = if b.is_ascii_whitespace() {
            i += 1;
            continue;
        } else if line[i..].starts_with("//") {
            i = line.trim_end().len();
            NodeKind::Comment
        } else if b == b'"' {
            i += 1;
            while i < bytes.len() && bytes[i] != b'"' {
                i += 1;
            }
            i = (i + 1).min(bytes.len());
            NodeKind::StringLiteral
        } else if b.is_ascii_alphanumeric() || b == b'_' {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            if b.is_ascii_digit() {
                NodeKind::NumberLiteral
            } else {
                NodeKind::Reference
            }
        } else {
            while i < bytes.len()
                && !bytes[i].is_ascii_whitespace()
                && !bytes[i].is_ascii_alphanumeric()
                && bytes[i] != b'"'
            {
                i += 1;
            }
            NodeKind::Other
        };
        tokens.push((kind, TextRange::new(base + start, base + i)));
    }
    tokens
}

impl SyntaxTree for FlatTree {
    type Node = usize;

    fn source(&self) -> &str {
        &self.source
    }

    fn root(&self) -> usize {
        0
    }

    fn node_at(&self, offset: usize) -> Option<usize> {
        (0..self.nodes.len())
            .rev()
            .find(|id| self.nodes[*id].range.contains(offset))
    }

    fn kind(&self, node: usize) -> NodeKind {
        self.nodes[node].kind
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    fn children(&self, node: usize) -> Vec<usize> {
        self.nodes[node].children.clone()
    }

    fn range(&self, node: usize) -> TextRange {
        self.nodes[node].range
    }

    fn children_by_role(&self, node: usize, role: Role) -> Vec<usize> {
        match (self.nodes[node].kind, role) {
            (NodeKind::PackageClause, Role::Name) => {
                self.nodes[node].children.get(1).copied().into_iter().collect()
            }
            _ => Vec::new(),
        }
    }

    fn whitespace_at(&self, offset: usize) -> Option<TextRange> {
        let bytes = self.source.as_bytes();
        if !bytes.get(offset)?.is_ascii_whitespace() {
            return None;
        }
        let inside_token = (0..self.nodes.len())
            .any(|id| self.is_leaf(id) && self.nodes[id].range.contains(offset));
        if inside_token {
            return None;
        }

        let mut start = offset;
        while start > 0 && bytes[start - 1].is_ascii_whitespace() {
            start -= 1;
        }
        let mut end = offset;
        while end < bytes.len() && bytes[end].is_ascii_whitespace() {
            end += 1;
        }
        Some(TextRange::new(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_tree_shape() {
        let tree = FlatTree::parse("package p\n\tx := \"a b\" // note\n");
        let kinds = (0..tree.nodes.len())
            .map(|id| tree.kind(id))
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                NodeKind::File,
                NodeKind::PackageClause,
                NodeKind::Other,
                NodeKind::Identifier,
                NodeKind::Statement,
                NodeKind::Reference,
                NodeKind::Other,
                NodeKind::StringLiteral,
                NodeKind::Comment,
            ]
        );
        assert_eq!(tree.text(7), "\"a b\"");
        assert_eq!(tree.whitespace_at(18), None);
        assert_eq!(tree.whitespace_at(10), Some(TextRange::new(9, 11)));
    }
}
