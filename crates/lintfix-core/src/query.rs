//! Tree query primitives shared by every strategy.

use crate::range::TextRange;
use crate::syntax::{NodeKind, SyntaxTree};

/// `node` followed by its ancestors up to the root.
pub fn ancestors<T: SyntaxTree>(tree: &T, node: T::Node) -> impl Iterator<Item = T::Node> + '_ {
    std::iter::successors(Some(node), move |n| tree.parent(*n))
}

/// Nearest strict ancestor of `node` accepted by `accept`. Not bounded: used for enclosing
/// declarations.
pub fn enclosing<T: SyntaxTree>(
    tree: &T,
    node: T::Node,
    accept: impl Fn(NodeKind) -> bool,
) -> Option<T::Node> {
    ancestors(tree, node)
        .skip(1)
        .find(|ancestor| accept(tree.kind(*ancestor)))
}

/// Pre-order walk of `node` and its named descendants.
pub fn descendants<T: SyntaxTree>(tree: &T, node: T::Node) -> Vec<T::Node> {
    let mut out = Vec::new();
    let mut stack = vec![node];
    while let Some(next) = stack.pop() {
        out.push(next);
        let mut children = tree.children(next);
        children.reverse();
        stack.extend(children);
    }
    out
}

/// First node under `node` (inclusive, pre-order) accepted by `accept`.
pub fn find_descendant<T: SyntaxTree>(
    tree: &T,
    node: T::Node,
    accept: impl Fn(T::Node) -> bool,
) -> Option<T::Node> {
    descendants(tree, node).into_iter().find(|n| accept(*n))
}

/// Locate the node of an accepted kind that a position refers to.
///
/// Starting from the node at `offset`, walk toward the root until an accepted node is found. The
/// walk stops at the first statement-level boundary; from there the boundary's descendants are
/// searched for the first accepted node that contains `offset` or starts between `offset` and
/// `line_end` (the end of the reported line).
pub fn find_anchor<T: SyntaxTree>(
    tree: &T,
    offset: usize,
    line_end: usize,
    accept: impl Fn(NodeKind) -> bool,
) -> Option<T::Node> {
    find_anchor_by(tree, offset, line_end, |node| accept(tree.kind(node)))
}

/// [`find_anchor`] with a predicate over the node itself, for anchors that must also match by
/// text.
pub fn find_anchor_by<T: SyntaxTree>(
    tree: &T,
    offset: usize,
    line_end: usize,
    accept: impl Fn(T::Node) -> bool,
) -> Option<T::Node> {
    let leaf = tree.node_at(offset).unwrap_or_else(|| tree.root());

    let mut boundary = tree.root();
    for node in ancestors(tree, leaf) {
        if accept(node) {
            tracing::trace!(kind = ?tree.kind(node), offset, "anchor found walking outward");
            return Some(node);
        }
        if tree.kind(node).is_boundary() {
            boundary = node;
            break;
        }
    }

    let window = TextRange::new(offset, line_end.max(offset));
    let found = find_descendant(tree, boundary, |node| {
        if !accept(node) {
            return false;
        }
        let range = tree.range(node);
        range.contains(offset) || (window.start <= range.start && range.start <= window.end)
    });
    if let Some(node) = found {
        tracing::trace!(kind = ?tree.kind(node), offset, "anchor found searching inward");
    }
    found
}

/// Indentation (leading spaces/tabs) of the line containing `offset`.
pub fn indentation_at(source: &str, offset: usize) -> &str {
    let offset = offset.min(source.len());
    let line_start = source.as_bytes()[..offset]
        .iter()
        .rposition(|b| *b == b'\n')
        .map_or(0, |i| i + 1);
    let line = &source[line_start..];
    let width = line
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    &line[..width]
}

/// Grow `range` to whole lines when only whitespace shares those lines with it.
///
/// The result includes the terminator of the last line, so deleting it removes the lines.
pub fn expand_to_lines(source: &str, range: TextRange) -> TextRange {
    let bytes = source.as_bytes();
    let end = range.end.min(bytes.len());

    let mut start = range.start.min(end);
    while start > 0 && matches!(bytes[start - 1], b' ' | b'\t') {
        start -= 1;
    }
    let owns_start = start == 0 || bytes[start - 1] == b'\n';

    let mut stop = end;
    while stop < bytes.len() && matches!(bytes[stop], b' ' | b'\t' | b'\r') {
        stop += 1;
    }
    let owns_end = stop == bytes.len() || bytes[stop] == b'\n';

    if owns_start && owns_end {
        TextRange::new(start, (stop + 1).min(bytes.len()))
    } else {
        range
    }
}
