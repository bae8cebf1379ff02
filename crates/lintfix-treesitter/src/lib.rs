#![warn(missing_docs)]
//! Tree-sitter Go binding for `lintfix-core`.
//!
//! [`GoSource`] owns a Go file's text, its line index and its tree-sitter parse tree. It hands out
//! a [`GoSyntax`] view implementing [`lintfix_core::SyntaxTree`] for resolution, and applies the
//! resulting edits with incremental re-parsing so a file can be fixed several times in a row.
//!
//! ```
//! use lintfix_core::{Diagnostic, Registry};
//! use lintfix_treesitter::GoSource;
//!
//! let mut source = GoSource::parse("package main\n\nfunc f() {\n\tx := 1\n\tx = 2\n\t_ = x\n}\n")
//!     .unwrap();
//! let diagnostic = Diagnostic::new("ineffassign", "ineffectual assignment to x", 5, 2);
//!
//! let resolution = source.fix(Registry::builtin(), &diagnostic, 4).unwrap();
//! source.apply(&resolution.edits()[0]).unwrap();
//! assert!(source.text().contains("\t_ = 2\n"));
//! ```

mod error;
mod go;
mod source;

pub use error::GoSyntaxError;
pub use go::{GoSyntax, classify};
pub use source::{GoSource, UpdateMode};
