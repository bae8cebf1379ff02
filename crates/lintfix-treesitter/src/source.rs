use crate::error::GoSyntaxError;
use crate::go::GoSyntax;
use lintfix_core::{
    Diagnostic, Edit, FixError, LineIndex, Registry, Resolution, TextRange, apply_changes,
};
use tree_sitter::{InputEdit, Parser, Point, Tree};

/// How the tree was produced by the last parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// First parse of the text.
    Initial,
    /// Updated by editing the previous tree and re-parsing incrementally.
    Incremental,
    /// The incremental parse failed and the text was parsed from scratch.
    FullReparse,
}

/// A Go file: its live text, line index and parse tree, kept in sync across applied fixes.
pub struct GoSource {
    parser: Parser,
    text: String,
    tree: Tree,
    line_index: LineIndex,
    last_update_mode: UpdateMode,
}

impl GoSource {
    /// Parse `text` as Go.
    pub fn parse(text: impl Into<String>) -> Result<Self, GoSyntaxError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| GoSyntaxError::Language(e.to_string()))?;

        let text = text.into();
        let tree = parser.parse(&text, None).ok_or(GoSyntaxError::Parse)?;
        let line_index = LineIndex::from_text(&text);
        Ok(Self {
            parser,
            text,
            tree,
            line_index,
            last_update_mode: UpdateMode::Initial,
        })
    }

    /// The live text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current parse tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Syntax view for resolution.
    pub fn syntax(&self) -> GoSyntax<'_> {
        GoSyntax::new(&self.tree, &self.text)
    }

    /// Line view of the live text.
    pub fn document(&self) -> &LineIndex {
        &self.line_index
    }

    /// Whether the tree contains syntax errors.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Mode of the last (re)parse.
    pub fn last_update_mode(&self) -> UpdateMode {
        self.last_update_mode
    }

    /// Resolve `diagnostic` against this file.
    pub fn fix(
        &self,
        registry: &Registry,
        diagnostic: &Diagnostic,
        effective_line: usize,
    ) -> Result<Resolution, FixError> {
        registry.fix(&self.syntax(), &self.line_index, diagnostic, effective_line)
    }

    /// Apply `edit` to the text and re-parse incrementally.
    ///
    /// The edit is validated as a whole before anything changes; on error the file is untouched.
    pub fn apply(&mut self, edit: &Edit) -> Result<(), GoSyntaxError> {
        if edit.url().is_some() {
            return Err(FixError::NotATextEdit(edit.title.clone()).into());
        }
        let changes = edit.text_changes();
        let expected = apply_changes(&self.text, changes)?;

        let mut ordered = changes.iter().collect::<Vec<_>>();
        ordered.sort_by_key(|change| std::cmp::Reverse((change.range.start, change.range.end)));
        for change in ordered {
            self.edit_range(change.range, &change.new_text);
        }
        debug_assert_eq!(self.text, expected);

        self.last_update_mode = match self.parser.parse(&self.text, Some(&self.tree)) {
            Some(tree) => {
                self.tree = tree;
                UpdateMode::Incremental
            }
            None => {
                self.tree = self
                    .parser
                    .parse(&self.text, None)
                    .ok_or(GoSyntaxError::Parse)?;
                UpdateMode::FullReparse
            }
        };
        tracing::trace!(
            title = %edit.title,
            mode = ?self.last_update_mode,
            "applied edit"
        );
        Ok(())
    }

    fn edit_range(&mut self, range: TextRange, inserted: &str) {
        let start_position = self.point_for_byte(range.start);
        let deleted = self.text.get(range.start..range.end).unwrap_or_default();
        let old_end_position = advance_point(start_position, deleted);
        let new_end_position = advance_point(start_position, inserted);

        self.tree.edit(&InputEdit {
            start_byte: range.start,
            old_end_byte: range.end,
            new_end_byte: range.start + inserted.len(),
            start_position,
            old_end_position,
            new_end_position,
        });

        self.text.replace_range(range.start..range.end, inserted);
        self.line_index.replace(range, inserted);
    }

    fn point_for_byte(&self, offset: usize) -> Point {
        let (row, column) = self.line_index.byte_to_point(offset);
        Point { row, column }
    }
}

impl std::fmt::Debug for GoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoSource")
            .field("len", &self.text.len())
            .field("last_update_mode", &self.last_update_mode)
            .finish()
    }
}

fn advance_point(mut point: Point, text: &str) -> Point {
    let mut parts = text.split('\n');
    let Some(first) = parts.next() else {
        return point;
    };

    point.column = point.column.saturating_add(first.len());
    for part in parts {
        point.row = point.row.saturating_add(1);
        point.column = part.len();
    }

    point
}
