#![warn(missing_docs)]
//! `outline-core-classify` - Regex-based line classification for todo outlines.
//!
//! The merge engine in `outline-core` only knows about indentation and group headers. This crate
//! supplies the rest of the todo dialect: which lines are todos, which of them are finished, where
//! the archive section starts, and which tags a line carries.
//!
//! Patterns are generated from a [`TodoSyntax`](outline_core_lang::TodoSyntax); the built-in
//! symbols (`☐ ✔ ✘`) and markdown checkboxes are always recognized alongside configured ones.
//!
//! ```rust
//! use outline_core_classify::{LineKind, TodoClassifier};
//! use outline_core_lang::TodoSyntax;
//!
//! let classifier = TodoClassifier::new(TodoSyntax::default()).unwrap();
//! assert_eq!(classifier.classify("  ☐ buy milk @done(2025-01-01)"), LineKind::Done);
//! assert_eq!(classifier.group_name("Groceries: @weekly"), Some("Groceries"));
//! ```

mod classifier;
mod error;
pub mod tags;

pub use classifier::{LineKind, TodoClassifier};
pub use error::ClassifyError;
pub use tags::{FinishTag, finish_tag, tags};
