#![warn(missing_docs)]
//! Outline Core - Indentation-Defined Outlines and Archive Merging
//!
//! # Overview
//!
//! `outline-core` works on plain-text outlines whose hierarchy is expressed purely through
//! leading whitespace. It infers that hierarchy (indentation unit, levels, ancestors and
//! descendants) and merges "finished" entries into an archive outline, recreating the group
//! headers those entries belonged to without duplicating any of them.
//!
//! The engine is a pure, synchronous transformation: strings in, string out, no I/O. Callers
//! must not run two merges against the same archive text concurrently.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Merge Orchestrator (ArchiveMerger)         │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Insertion Planner                          │  ← Splice point + re-indent
//! ├─────────────────────────────────────────────┤
//! │  Group Chain Ensurer                        │  ← Missing headers
//! ├─────────────────────────────────────────────┤
//! │  Group Index                                │  ← Header records + ranges
//! ├─────────────────────────────────────────────┤
//! │  Hierarchy Walker                           │  ← Ancestors / descendants
//! ├─────────────────────────────────────────────┤
//! │  Indent Detection & Levels                  │  ← Whitespace → depth
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use outline_core::{MergeConfig, MergeItem, merge_items_into_content};
//!
//! let merged = merge_items_into_content(
//!     "",
//!     &[MergeItem::in_group("  ✔ ship it @done(2025-11-25)", ["Release"])],
//!     &MergeConfig::default(),
//! );
//!
//! assert_eq!(merged, "Release:\n  ✔ ship it @done(2025-11-25)");
//! ```
//!
//! # Module Description
//!
//! - [`indent`] - indentation unit detection, levels, optional memoization
//! - [`walk`] - hierarchy traversal over leveled lines
//! - [`groups`] - group header index
//! - [`chain`] - creation of missing group header chains
//! - [`planner`] - insertion point and re-indentation of moved blocks
//! - [`merge`] - the merge entry point
//! - [`syntax`] - injected header recognition and tag stripping
//! - [`line_index`] - line access (`Vec<String>` snapshots and a Rope-backed index)

pub mod chain;
pub mod groups;
pub mod indent;
pub mod line_ending;
pub mod line_index;
pub mod merge;
pub mod planner;
pub mod syntax;
mod text;
pub mod walk;

pub use chain::{ensure_group_chain, join_path};
pub use groups::{GroupHeader, GroupIndex, content_indent_unit};
pub use indent::{
    CachedIndent, IndentCache, IndentResolver, LineCountIndentCache, NoIndentCache,
    detect_indent_unit, detect_indent_unit_or, indent_level, indent_line, leading_whitespace,
};
pub use line_ending::LineEnding;
pub use line_index::{LineIndex, LineSource};
pub use merge::{ArchiveMerger, MergeItem, merge_items_into_content};
pub use outline_core_lang::{DEFAULT_INDENT_UNIT, DEFAULT_PATH_SEPARATOR, MergeConfig};
pub use planner::{InsertTarget, InsertedCounts, first_content_line, insert_block, reindent_block};
pub use syntax::{AssociationTags, ColonHeaders, HeaderSyntax, TagStripper};
pub use walk::{
    Direction, WalkOptions, WalkStep, ancestor_group_names, walk, walk_children, walk_down, walk_up,
};
