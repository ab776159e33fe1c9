//! Insertion planning.
//!
//! A block lands at the top of its target group's body, below whatever the current merge call
//! already put there, so repeated inserts into one group keep call order. Blocks are re-indented
//! to sit one level inside the header while keeping their own relative nesting, and are rendered
//! with the destination's indentation unit rather than their own.

use crate::groups::{GroupHeader, content_indent_unit};
use crate::indent::{detect_indent_unit_or, indent_level, indent_line};
use crate::text::is_blank;
use outline_core_lang::MergeConfig;
use std::collections::HashMap;

/// Where a block goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertTarget<'a> {
    /// Before the first line of the outline, outside every group.
    Root,
    /// Into the body of a group.
    Group(&'a GroupHeader),
}

/// Lines already placed per target during one merge call.
///
/// Every placed line counts, interior blank lines included. This departs from counting only
/// non-blank lines: with that rule a later block for the same target would be spliced into an
/// earlier block that has a blank line inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertedCounts {
    root: usize,
    groups: HashMap<String, usize>,
}

impl InsertedCounts {
    /// Lines already placed into `target`.
    pub fn get(&self, target: InsertTarget<'_>) -> usize {
        match target {
            InsertTarget::Root => self.root,
            InsertTarget::Group(group) => self.groups.get(&group.full_path).copied().unwrap_or(0),
        }
    }

    /// Record `count` more lines placed into `target`.
    pub fn add(&mut self, target: InsertTarget<'_>, count: usize) {
        match target {
            InsertTarget::Root => self.root += count,
            InsertTarget::Group(group) => {
                *self.groups.entry(group.full_path.clone()).or_insert(0) += count;
            }
        }
    }
}

/// Re-indent `block` so its shallowest line sits at `base_level`, rendered with `dest_unit`.
///
/// The block's own unit is detected from its non-blank lines (falling back to `fallback_unit`).
/// Relative nesting inside the block is preserved; blank lines become empty.
pub fn reindent_block<S: AsRef<str>>(
    block: &[S],
    base_level: usize,
    dest_unit: &str,
    fallback_unit: &str,
) -> Vec<String> {
    let block_unit = detect_indent_unit_or(block, fallback_unit);
    let block_min = block
        .iter()
        .filter_map(|line| {
            let line = line.as_ref();
            (!is_blank(line)).then(|| indent_level(line, &block_unit))
        })
        .min()
        .unwrap_or(0);

    block
        .iter()
        .map(|line| {
            let line = line.as_ref();
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return String::new();
            }
            let relative = indent_level(line, &block_unit).saturating_sub(block_min);
            indent_line(trimmed, dest_unit, base_level + relative)
        })
        .collect()
}

/// Index of the first non-blank line (the line count when every line is blank).
pub fn first_content_line<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .position(|l| !is_blank(l.as_ref()))
        .unwrap_or(lines.len())
}

/// Splice `block` into `lines` at `target` and update `counts`.
///
/// Group blocks are re-indented one level inside the header and inserted at
/// `min(start + 1 + already_inserted, end + 1)`. Root blocks are inserted unmodified before the
/// first content line, below earlier root blocks of the same call. Returns the splice index.
pub fn insert_block<S: AsRef<str>>(
    lines: &mut Vec<String>,
    target: InsertTarget<'_>,
    block: &[S],
    counts: &mut InsertedCounts,
    config: &MergeConfig,
) -> usize {
    let already = counts.get(target);

    let (at, rendered) = match target {
        InsertTarget::Group(group) => {
            let dest_unit = content_indent_unit(lines.as_slice(), config);
            let rendered = reindent_block(block, group.level + 1, &dest_unit, config.indent_unit());
            let at = (group.start + 1 + already).min(group.end + 1);
            (at, rendered)
        }
        InsertTarget::Root => {
            let rendered: Vec<String> = block.iter().map(|l| l.as_ref().to_string()).collect();
            let at = (first_content_line(lines.as_slice()) + already).min(lines.len());
            (at, rendered)
        }
    };
    let at = at.min(lines.len());

    let placed = rendered.len();
    lines.splice(at..at, rendered);
    counts.add(target, placed);
    at
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header(path: &str, level: usize, start: usize, end: usize) -> GroupHeader {
        GroupHeader {
            full_path: path.to_string(),
            name: path.rsplit('.').next().unwrap_or(path).to_string(),
            level,
            start,
            end,
        }
    }

    #[test]
    fn test_reindent_preserves_relative_nesting() {
        let block = ["\t\t<o> task", "\t\t\t- note", "", "\t\t<o> other"];
        let out = reindent_block(&block, 1, "  ", "  ");
        assert_eq!(out, vec!["  <o> task", "    - note", "", "  <o> other"]);
    }

    #[test]
    fn test_reindent_translates_unit() {
        let block = ["      <o> TASK2"];
        assert_eq!(reindent_block(&block, 3, "  ", "    "), vec!["      <o> TASK2"]);
        assert_eq!(reindent_block(&block, 1, "\t", "  "), vec!["\t<o> TASK2"]);
    }

    #[test]
    fn test_repeated_group_inserts_keep_call_order() {
        let mut lines: Vec<String> = vec!["A:".into(), "  old".into()];
        let mut counts = InsertedCounts::default();
        let config = MergeConfig::default();

        let a = header("A", 0, 0, 1);
        insert_block(&mut lines, InsertTarget::Group(&a), &["first"], &mut counts, &config);
        let a = header("A", 0, 0, 2);
        insert_block(&mut lines, InsertTarget::Group(&a), &["second"], &mut counts, &config);

        assert_eq!(lines, vec!["A:", "  first", "  second", "  old"]);
        assert_eq!(counts.get(InsertTarget::Group(&a)), 2);
    }

    #[test]
    fn test_group_insert_is_clamped_to_group_end() {
        let mut lines: Vec<String> = vec!["A:".into(), "B:".into()];
        let mut counts = InsertedCounts::default();
        counts.add(InsertTarget::Group(&header("A", 0, 0, 0)), 5);

        let at = insert_block(
            &mut lines,
            InsertTarget::Group(&header("A", 0, 0, 0)),
            &["x"],
            &mut counts,
            &MergeConfig::default(),
        );
        assert_eq!(at, 1);
        assert_eq!(lines, vec!["A:", "  x", "B:"]);
    }

    #[test]
    fn test_root_inserts_skip_leading_blank_lines() {
        let mut lines: Vec<String> = vec!["".into(), "A:".into()];
        let mut counts = InsertedCounts::default();
        let config = MergeConfig::default();
        insert_block(&mut lines, InsertTarget::Root, &["  one"], &mut counts, &config);
        insert_block(&mut lines, InsertTarget::Root, &["  two"], &mut counts, &config);
        assert_eq!(lines, vec!["", "  one", "  two", "A:"]);
    }
}
