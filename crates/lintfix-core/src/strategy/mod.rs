//! Fix strategies.
//!
//! Every registered rule maps onto one [`Strategy`]. The set is closed: strategies are enum
//! variants, each wrapping a small struct that holds only configuration strings. Resolution goes
//! through the sealed [`Resolve`] trait so hosts can call it without being able to add variants.

mod assignment;
mod comment;
mod explain;
mod highlight;
mod literal;
mod rename;
mod suppress;
mod switch;
mod unresolved;
mod unused;
mod whitespace;

pub use assignment::{IneffectualAssignment, ParameterType};
pub use comment::CommentPeriod;
pub use explain::Explanation;
pub use highlight::{DuplicateLines, StatementRange, StructLayout};
pub use literal::{MagicNumber, RepeatedString};
pub use rename::{Naming, PrintfName, TestPackage};
pub use suppress::{FunctionSuppression, UnusedParameter};
pub use switch::MissingCases;
pub use unresolved::Unresolved;
pub use unused::UnusedDeclaration;
pub use whitespace::{BlankLines, NewlineBeforeReturn};

use crate::diagnostic::{Diagnostic, LineRange};
use crate::error::FixError;
use crate::line_index::LineDocument;
use crate::query::{find_anchor, find_anchor_by};
use crate::reconcile::{LineShift, position_offset};
use crate::resolution::{Miss, Resolution};
use crate::syntax::{NodeKind, SyntaxTree};

mod private {
    pub trait Sealed {}
}

/// Everything a strategy may look at for one call.
///
/// The tree and the document must describe the same live text.
pub struct FixContext<'a, T: SyntaxTree> {
    /// Parsed live file.
    pub tree: &'a T,
    /// Line view of the same live text.
    pub document: &'a dyn LineDocument,
    /// The finding being resolved.
    pub diagnostic: &'a Diagnostic,
    /// 0-based live line the finding currently refers to.
    pub effective_line: usize,
}

impl<'a, T: SyntaxTree> FixContext<'a, T> {
    /// Bundle one resolution call.
    pub fn new(
        tree: &'a T,
        document: &'a dyn LineDocument,
        diagnostic: &'a Diagnostic,
        effective_line: usize,
    ) -> Self {
        Self {
            tree,
            document,
            diagnostic,
            effective_line,
        }
    }

    /// Shift from reported lines to live lines, `None` for lines no document can hold.
    pub fn shift(&self) -> Option<LineShift> {
        LineShift::new(self.diagnostic.position.line, self.effective_line)
    }

    /// Live byte offset of the reported position.
    pub fn offset(&self) -> Option<usize> {
        position_offset(self.document, self.diagnostic.position, self.effective_line)
    }

    /// End of the effective line, terminator excluded.
    pub fn line_end(&self) -> Option<usize> {
        self.document.line_end(self.effective_line)
    }

    /// Effective line exists and the column falls on it.
    pub fn in_bounds(&self) -> bool {
        self.offset().is_some()
    }

    /// The reported line range, required by range-based rules.
    pub fn line_range(&self) -> Result<LineRange, FixError> {
        let range = self
            .diagnostic
            .line_range
            .ok_or_else(|| FixError::MissingLineRange {
                rule: self.diagnostic.rule.clone(),
            })?;
        if !range.is_ordered() {
            return Err(FixError::InvalidLineRange {
                from: range.from,
                to: range.to,
            });
        }
        Ok(range)
    }

    /// Anchor of an accepted kind near the reported position.
    pub fn anchor(&self, accept: impl Fn(NodeKind) -> bool) -> Option<T::Node> {
        find_anchor(self.tree, self.offset()?, self.line_end()?, accept)
    }

    /// Anchor accepted by a node predicate near the reported position.
    pub fn anchor_by(&self, accept: impl Fn(T::Node) -> bool) -> Option<T::Node> {
        find_anchor_by(self.tree, self.offset()?, self.line_end()?, accept)
    }
}

/// Resolve a diagnostic against the live tree.
///
/// Sealed: implemented by [`Strategy`] and its variants only.
pub trait Resolve: private::Sealed {
    /// Produce a resolution. `Err` only signals a caller contract violation.
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError>;
}

macro_rules! strategies {
    ($($(#[$doc:meta])* $variant:ident),+ $(,)?) => {
        /// A rule-handling strategy.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Strategy {
            $($(#[$doc])* $variant($variant),)+
        }

        impl Strategy {
            /// Variant name, for logs.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)+
                }
            }

            fn dispatch<T: SyntaxTree>(
                &self,
                cx: &FixContext<'_, T>,
            ) -> Result<Resolution, FixError> {
                match self {
                    $(Self::$variant(strategy) => strategy.resolve(cx),)+
                }
            }
        }

        $(impl private::Sealed for $variant {})+
    };
}

strategies! {
    /// Default for unknown rules.
    Unresolved,
    /// `ineffassign`.
    IneffectualAssignment,
    /// `interfacer`.
    ParameterType,
    /// `whitespace`.
    BlankLines,
    /// `goconst`.
    RepeatedString,
    /// `godot`.
    CommentPeriod,
    /// `testpackage`.
    TestPackage,
    /// `goprintffuncname`.
    PrintfName,
    /// `gomnd`.
    MagicNumber,
    /// `dupl`.
    DuplicateLines,
    /// Rules answered with a static explanation page.
    Explanation,
    /// `unparam`.
    UnusedParameter,
    /// Function-scoped complexity linters.
    FunctionSuppression,
    /// `nlreturn`.
    NewlineBeforeReturn,
    /// Unused declaration linters.
    UnusedDeclaration,
    /// Naming linters.
    Naming,
    /// `maligned`.
    StructLayout,
    /// Statement-level checkers.
    StatementRange,
    /// `exhaustive`.
    MissingCases,
}

impl Strategy {
    /// Whether the strategy reads the reported position.
    pub fn uses_position(&self) -> bool {
        !matches!(self, Self::Unresolved(_) | Self::Explanation(_))
    }
}

impl private::Sealed for Strategy {}

impl Resolve for Strategy {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        if self.uses_position() && !cx.in_bounds() {
            tracing::debug!(
                strategy = self.name(),
                line = cx.effective_line,
                column = cx.diagnostic.position.column,
                "position outside the live document"
            );
            return Ok(Resolution::not_found(Miss::OutOfBounds));
        }
        self.dispatch(cx)
    }
}
