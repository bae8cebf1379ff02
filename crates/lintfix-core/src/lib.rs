#![warn(missing_docs)]
//! `lintfix-core` turns golangci-lint findings into syntax-anchored fixes.
//!
//! A finding ([`Diagnostic`]) only carries a rule name, a message and a line/column captured when
//! the analyzer ran. This crate relocates it in the *live* file and proposes edits:
//!
//! - [`Registry`] maps the rule onto a [`Strategy`];
//! - the strategy finds its anchor node through the language-neutral [`SyntaxTree`] interface,
//!   tolerating line drift via the caller-supplied effective line;
//! - edits are built by the primitives in [`synth`] and returned as data in a [`Resolution`].
//!
//! The crate never mutates the document and never performs I/O. A concrete grammar binding lives
//! in a separate crate (`lintfix-treesitter`).
//!
//! # Example
//!
//! ```
//! use lintfix_core::{Diagnostic, Registry, Resolution};
//!
//! let strategy = Registry::builtin().resolve("scopelint");
//! assert_eq!(strategy.name(), "Explanation");
//! assert!(!strategy.uses_position());
//!
//! let diagnostic = Diagnostic::new("no-such-linter", "whatever", 1, 1);
//! assert!(Registry::builtin().is_unknown(&diagnostic.rule));
//! # let _ = Resolution::no_fix(None);
//! ```

pub mod config;
pub mod diagnostic;
pub mod edit;
pub mod error;
pub mod line_index;
pub mod message;
pub mod query;
pub mod range;
pub mod reconcile;
pub mod registry;
pub mod resolution;
pub mod strategy;
pub mod synth;
pub mod syntax;

#[cfg(test)]
pub(crate) mod testing;

pub use config::FixConfig;
pub use diagnostic::{Diagnostic, LineRange, Position};
pub use edit::{Edit, EditAction, TextChange, apply_changes};
pub use error::FixError;
pub use line_index::{LineDocument, LineIndex};
pub use range::TextRange;
pub use reconcile::LineShift;
pub use registry::Registry;
pub use resolution::{Miss, Resolution};
pub use strategy::{FixContext, Resolve, Strategy};
pub use syntax::{NodeKind, Role, SyntaxTree};
