//! Archive merge orchestration.
//!
//! [`ArchiveMerger::merge`] is the public entry point of the engine: it takes the existing
//! archive text plus a batch of [`MergeItem`]s and returns the merged text. It never fails;
//! degenerate input degrades to "append at end" rather than dropping content.
//!
//! # Example
//!
//! ```rust
//! use outline_core::{ArchiveMerger, MergeConfig, MergeItem};
//!
//! let merger = ArchiveMerger::new(MergeConfig::default());
//! let merged = merger.merge(
//!     "Work:\n  ✔ old @done(2025-01-01)",
//!     &[MergeItem::in_group("  ✔ new @done(2025-02-01)", ["Work", "Reports"])],
//! );
//!
//! assert_eq!(merged, "Work:\n  Reports:\n    ✔ new @done(2025-02-01)\n  ✔ old @done(2025-01-01)");
//! ```

use crate::chain::{ensure_group_chain, join_path};
use crate::groups::GroupIndex;
use crate::line_ending::LineEnding;
use crate::planner::{InsertTarget, InsertedCounts, insert_block};
use crate::syntax::{AssociationTags, ColonHeaders, HeaderSyntax, TagStripper};
use crate::text::{split_lines, trim_blank_edges};
use outline_core_lang::MergeConfig;

/// A block of text to relocate into the archive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeItem {
    /// The block, possibly multi-line, with its original indentation.
    pub text: String,
    /// Names of the enclosing groups, root to leaf. `None` or empty means root content.
    pub projects: Option<Vec<String>>,
    /// Position of the item in the caller's ordering.
    pub source_order: usize,
}

impl MergeItem {
    /// An item without enclosing groups.
    pub fn root(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            projects: None,
            source_order: 0,
        }
    }

    /// An item belonging to the group path `projects`.
    pub fn in_group<I, S>(text: impl Into<String>, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            projects: Some(projects.into_iter().map(Into::into).collect()),
            source_order: 0,
        }
    }

    /// Set the caller's ordering position.
    pub fn with_source_order(mut self, source_order: usize) -> Self {
        self.source_order = source_order;
        self
    }

    /// The group path, or `None` for root content (absent and empty paths are equivalent).
    pub fn group_path(&self) -> Option<&[String]> {
        self.projects.as_deref().filter(|p| !p.is_empty())
    }
}

/// Merges items into archive outlines.
///
/// The header shape and the association tag are injected, so the engine stays independent of
/// the host's pattern language.
#[derive(Debug, Clone, Default)]
pub struct ArchiveMerger<H = ColonHeaders, T = AssociationTags> {
    config: MergeConfig,
    headers: H,
    tags: T,
}

impl ArchiveMerger {
    /// A merger using `Name:` headers and `@project(...)` association tags.
    pub fn new(config: MergeConfig) -> Self {
        Self {
            config,
            headers: ColonHeaders,
            tags: AssociationTags::default(),
        }
    }
}

impl<H: HeaderSyntax, T: TagStripper> ArchiveMerger<H, T> {
    /// A merger with custom header recognition and tag stripping.
    pub fn with_syntax(config: MergeConfig, headers: H, tags: T) -> Self {
        Self {
            config,
            headers,
            tags,
        }
    }

    /// The merge configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// The header syntax.
    pub fn headers(&self) -> &H {
        &self.headers
    }

    /// Merge `items` into `existing` and return the merged outline.
    ///
    /// Items are processed in the given order; callers sort by their own recency policy. The
    /// result uses the line ending of `existing`.
    pub fn merge(&self, existing: &str, items: &[MergeItem]) -> String {
        let line_ending = LineEnding::detect_in_text(existing);
        let mut lines = split_lines(&self.tags.strip(&LineEnding::normalize(existing)));
        trim_blank_edges(&mut lines);

        let mut counts = InsertedCounts::default();
        for item in items {
            self.merge_item(&mut lines, item, &mut counts);
        }

        line_ending.join(&lines)
    }

    fn merge_item(&self, lines: &mut Vec<String>, item: &MergeItem, counts: &mut InsertedCounts) {
        let Some(block) = self.prepare_block(&item.text) else {
            log::debug!("item {} has no content, skipping", item.source_order);
            return;
        };

        let Some(path) = item.group_path() else {
            let at = insert_block(lines, InsertTarget::Root, &block, counts, &self.config);
            log::debug!("item {} placed at root line {at}", item.source_order);
            return;
        };

        ensure_group_chain(lines, path, &self.config, &self.headers);

        let full_path = join_path(path, self.config.path_separator());
        let index = GroupIndex::parse(lines.as_slice(), &self.config, &self.headers);
        match index.find(&full_path) {
            Some(target) => {
                let at = insert_block(lines, InsertTarget::Group(target), &block, counts, &self.config);
                log::debug!("item {} placed in `{full_path}` at line {at}", item.source_order);
            }
            None => {
                log::warn!(
                    "group `{full_path}` could not be resolved, appending item {} at end",
                    item.source_order
                );
                lines.extend(block);
            }
        }
    }

    /// Strip tags, drop embedded header lines and trim blank edges. `None` for all-blank text.
    fn prepare_block(&self, text: &str) -> Option<Vec<String>> {
        let mut block: Vec<String> = split_lines(&self.tags.strip(&LineEnding::normalize(text)))
            .into_iter()
            .filter(|line| !self.headers.is_header(line))
            .collect();
        trim_blank_edges(&mut block);
        (!block.is_empty()).then_some(block)
    }
}

/// Merge `items` into `existing` with the default header syntax and association tag.
pub fn merge_items_into_content(existing: &str, items: &[MergeItem], config: &MergeConfig) -> String {
    ArchiveMerger::new(config.clone()).merge(existing, items)
}
