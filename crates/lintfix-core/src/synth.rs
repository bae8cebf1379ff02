//! Edit synthesis primitives.
//!
//! Pure constructors: each takes live anchor node(s) and returns an [`Edit`] whose target range
//! is computed from those nodes at call time. Nothing here mutates the tree or the document.

use crate::edit::{Edit, EditAction, TextChange};
use crate::query::{ancestors, descendants, indentation_at};
use crate::range::TextRange;
use crate::syntax::{NodeKind, Role, SyntaxTree};
use std::collections::HashSet;

/// Rename a reference to `placeholder` (usually `_`).
///
/// Binding names are refused: renaming a declaration would break the uses that follow it, while
/// blanking one ineffectual assignment target cannot.
pub fn rename_to_placeholder<T: SyntaxTree>(
    tree: &T,
    node: T::Node,
    placeholder: &str,
) -> Option<Edit> {
    if tree.kind(node) != NodeKind::Reference {
        return None;
    }
    let range = tree.range(node);
    Some(Edit::changes(
        format!("Rename `{}` to `{placeholder}`", tree.text(node)),
        Some(range),
        vec![TextChange::replace(range, placeholder)],
    ))
}

/// Delete a set of ranges in one edit. `None` when there is nothing to delete.
pub fn delete_ranges(title: impl Into<String>, mut ranges: Vec<TextRange>) -> Option<Edit> {
    ranges.sort_by_key(|range| range.start);
    ranges.dedup();
    let target = ranges
        .iter()
        .copied()
        .reduce(|covered, range| covered.cover(range))?;
    Some(Edit::changes(
        title,
        Some(target),
        ranges.into_iter().map(TextChange::delete).collect(),
    ))
}

/// Replace the text of a subtree.
pub fn replace_text<T: SyntaxTree>(
    tree: &T,
    node: T::Node,
    new_text: &str,
    title: impl Into<String>,
) -> Edit {
    let range = tree.range(node);
    Edit::changes(
        title,
        Some(range),
        vec![TextChange::replace(range, new_text)],
    )
}

/// Rename a declaration. Only the name sub-node is rewritten.
pub fn rename_declaration<T: SyntaxTree>(
    tree: &T,
    declaration: T::Node,
    new_name: &str,
) -> Option<Edit> {
    let name = tree.child_by_role(declaration, Role::Name)?;
    let range = tree.range(name);
    Some(Edit::changes(
        format!("Rename `{}` to `{new_name}`", tree.text(name)),
        Some(range),
        vec![TextChange::replace(range, new_name)],
    ))
}

/// Insert `text` at `offset`.
pub fn insert_text(
    offset: usize,
    text: &str,
    title: impl Into<String>,
    target: Option<TextRange>,
) -> Edit {
    Edit::changes(title, target, vec![TextChange::insert(offset, text)])
}

/// Insert `text` right before `anchor`.
pub fn insert_before(anchor: TextRange, text: &str, title: impl Into<String>) -> Edit {
    insert_text(anchor.start, text, title, Some(anchor))
}

/// Link to a static explanation of a rule.
pub fn open_url(url: &str) -> Edit {
    Edit {
        title: "Show explanation".to_string(),
        target: None,
        action: EditAction::OpenUrl(url.to_string()),
    }
}

/// Introduce a named constant for a repeated string literal.
///
/// Two-part edit: a top-level `const` declaration after the imports (or the package clause), and
/// the replacement of every identical literal outside imports and struct tags.
pub fn introduce_constant<T: SyntaxTree>(tree: &T, literal: T::Node) -> Option<Edit> {
    if in_import_or_tag(tree, literal) {
        return None;
    }
    let value = tree.text(literal);
    let root = tree.root();

    let top_level = tree.children(root);
    let after = top_level
        .iter()
        .rev()
        .find(|node| tree.kind(**node) == NodeKind::ImportDeclaration)
        .or_else(|| {
            top_level
                .iter()
                .find(|node| tree.kind(**node) == NodeKind::PackageClause)
        })?;

    let name = unique_name(tree, &constant_name(value));
    let mut changes = vec![TextChange::insert(
        tree.range(*after).end,
        format!("\n\nconst {name} = {value}"),
    )];
    changes.extend(
        descendants(tree, root)
            .into_iter()
            .filter(|node| tree.kind(*node) == NodeKind::StringLiteral && tree.text(*node) == value)
            .filter(|node| !in_import_or_tag(tree, *node))
            .map(|node| TextChange::replace(tree.range(node), name.as_str())),
    );

    Some(Edit::changes(
        format!("Introduce constant `{name}`"),
        Some(tree.range(literal)),
        changes,
    ))
}

fn in_import_or_tag<T: SyntaxTree>(tree: &T, node: T::Node) -> bool {
    // Struct tags hang directly off their field declaration.
    let tag = tree
        .parent(node)
        .is_some_and(|parent| tree.kind(parent) == NodeKind::NamedDeclaration);
    tag || ancestors(tree, node).any(|n| tree.kind(n) == NodeKind::ImportDeclaration)
}

/// Go keywords, never usable as identifiers.
const KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var",
];

/// Predeclared identifiers. Legal to shadow, but a package-level constant named `string` or `nil`
/// breaks every other use in the package.
const PREDECLARED: [&str; 44] = [
    "any", "bool", "byte", "comparable", "complex64", "complex128", "error", "float32", "float64",
    "int", "int8", "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16",
    "uint32", "uint64", "uintptr", "true", "false", "iota", "nil", "append", "cap", "clear",
    "close", "complex", "copy", "delete", "imag", "len", "make", "max", "min", "new", "panic",
    "print", "println", "real", "recover",
];

/// Derive a camelCase identifier from a string literal.
///
/// `"application/json"` becomes `applicationJson`; literals without letters or digits become
/// `emptyString`, a leading digit gets a `str` prefix and a reserved word a `Str` suffix.
pub fn constant_name(literal: &str) -> String {
    let content = literal.trim_matches(|c| c == '"' || c == '`');
    let mut name = String::new();
    for word in content
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .take(4)
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if name.is_empty() {
                name.push(first.to_ascii_lowercase());
            } else {
                name.push(first.to_ascii_uppercase());
            }
            name.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }

    if name.is_empty() {
        "emptyString".to_string()
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("str{name}")
    } else if KEYWORDS.contains(&name.as_str()) || PREDECLARED.contains(&name.as_str()) {
        format!("{name}Str")
    } else {
        name
    }
}

fn unique_name<T: SyntaxTree>(tree: &T, base: &str) -> String {
    let taken = descendants(tree, tree.root())
        .into_iter()
        .filter(|node| matches!(tree.kind(*node), NodeKind::Identifier | NodeKind::Reference))
        .map(|node| tree.text(node))
        .collect::<HashSet<_>>();

    if !taken.contains(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base}{n}"))
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or_else(|| base.to_string())
}

/// Attach a `//nolint:<linter>` directive to a declaration.
///
/// The directive goes on its own line directly above the declaration, with the declaration's
/// indentation, so formatters keep it attached. An existing `//nolint:` directive on that line is
/// extended instead. Returns `None` when the linter is already suppressed there.
pub fn insert_suppression<T: SyntaxTree>(
    tree: &T,
    declaration: T::Node,
    linter: &str,
) -> Option<Edit> {
    let source = tree.source();
    let range = tree.range(declaration);
    let indent = indentation_at(source, range.start);
    let line_start = range.start.saturating_sub(indent.len());
    let name = tree
        .child_by_role(declaration, Role::Name)
        .map(|name| tree.text(name))
        .unwrap_or("function");

    if let Some((directive_start, directive)) = previous_line_directive(source, line_start) {
        let rest = &directive["//nolint".len()..];
        let Some(list) = rest.strip_prefix(':') else {
            // A bare `//nolint` already suppresses everything.
            return None;
        };
        let list_len = list
            .find(|c: char| c.is_whitespace())
            .unwrap_or(list.len());
        if list[..list_len].split(',').any(|entry| entry.trim() == linter) {
            return None;
        }
        let at = directive_start + "//nolint:".len() + list_len;
        return Some(insert_text(
            at,
            &format!(",{linter}"),
            format!("Suppress `{linter}` for `{name}`"),
            Some(range),
        ));
    }

    Some(insert_text(
        line_start,
        &format!("{indent}//nolint:{linter}\n"),
        format!("Suppress `{linter}` for `{name}`"),
        Some(range),
    ))
}

/// The `//nolint` directive occupying the line before `line_start`, with its byte offset.
fn previous_line_directive(source: &str, line_start: usize) -> Option<(usize, &str)> {
    let bytes = source.as_bytes();
    let prev_end = line_start.checked_sub(1)?;
    if bytes.get(prev_end) != Some(&b'\n') {
        return None;
    }
    let prev_start = bytes[..prev_end]
        .iter()
        .rposition(|b| *b == b'\n')
        .map_or(0, |i| i + 1);
    let line = source.get(prev_start..prev_end)?.trim_end_matches('\r');
    let trimmed = line.trim_start();
    let directive_start = prev_start + (line.len() - trimmed.len());
    let rest = trimmed.strip_prefix("//nolint")?;
    // `//nolintfoo` is an ordinary comment.
    if !(rest.is_empty() || rest.starts_with(':') || rest.starts_with(char::is_whitespace)) {
        return None;
    }
    Some((directive_start, trimmed))
}

/// Add a `case <labels>:` clause at the end of a switch.
pub fn insert_case_clause<T: SyntaxTree>(
    tree: &T,
    switch: T::Node,
    labels: &[&str],
) -> Option<Edit> {
    if labels.is_empty() {
        return None;
    }
    let source = tree.source();
    let range = tree.range(switch);
    let joined = labels.join(", ");
    let title = format!("Add `case {joined}`");

    let last_clause = tree.children(switch).into_iter().rev().find(|child| {
        matches!(
            tree.kind(*child),
            NodeKind::CaseClause | NodeKind::DefaultClause
        )
    });

    if let Some(last) = last_clause {
        // A clause may own the terminator after its last statement.
        let end = tree.range(last).start + tree.text(last).trim_end().len();
        let indent = indentation_at(source, tree.range(last).start);
        return Some(insert_text(
            end,
            &format!("\n{indent}case {joined}:"),
            title,
            Some(range),
        ));
    }

    let brace = range.end.checked_sub(1)?;
    if source.as_bytes().get(brace) != Some(&b'}') {
        return None;
    }
    let indent = indentation_at(source, range.start);
    Some(insert_text(
        brace,
        &format!("case {joined}:\n{indent}"),
        title,
        Some(range),
    ))
}
