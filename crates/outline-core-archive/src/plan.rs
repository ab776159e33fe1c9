//! Archive planning.
//!
//! Planning looks at the archivable region of a live outline (everything above the archive
//! header) and decides which lines leave it and which blocks go to the archive:
//!
//! 1. finished todos, each together with the comment lines directly below it;
//! 2. groups without any pending todo left, whose remaining loose lines are archived under the
//!    group's own path;
//! 3. blank lines beyond the allowed run length.
//!
//! Every archived block carries the names of its enclosing groups, so the merge engine can
//! recreate the same nesting inside the archive.

use std::collections::{BTreeSet, HashSet};
use std::ops::ControlFlow;

use chrono::NaiveDateTime;
use outline_core::{
    MergeItem, WalkOptions, ancestor_group_names, content_indent_unit, indent_level, walk_down,
};
use outline_core_classify::TodoClassifier;
use outline_core_lang::ArchiveConfig;

use crate::dates::{parse_finished_date, sort_newest_first};

/// Why a block is archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A finished todo and its attached comments.
    Finished,
    /// Loose lines of a group that no longer has pending todos.
    EmptyGroup,
}

/// A block leaving the live outline for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Why the block is archived.
    pub kind: EntryKind,
    /// Index of the first line of the block in the live outline.
    pub line: usize,
    /// Indices of every line of the block.
    pub lines: Vec<usize>,
    /// The block, with its original indentation.
    pub text: String,
    /// Enclosing group names, root to leaf.
    pub projects: Vec<String>,
    /// Parsed finish date. Empty-group blocks inherit the date of the block above them.
    pub finished: Option<NaiveDateTime>,
}

impl ArchiveEntry {
    fn to_merge_item(&self, source_order: usize) -> MergeItem {
        MergeItem {
            text: self.text.clone(),
            projects: (!self.projects.is_empty()).then(|| self.projects.clone()),
            source_order,
        }
    }
}

/// What one archive run removes and where it goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchivePlan {
    /// Lines to delete from the live outline, ascending.
    pub removed: Vec<usize>,
    /// Blocks to merge into the archive, in merge order.
    pub entries: Vec<ArchiveEntry>,
}

impl ArchivePlan {
    /// Returns `true` if the run changes nothing.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.entries.is_empty()
    }

    /// The entries as merge items, numbered in merge order.
    pub fn merge_items(&self) -> Vec<MergeItem> {
        self.entries
            .iter()
            .enumerate()
            .map(|(order, entry)| entry.to_merge_item(order))
            .collect()
    }
}

/// Compute the plan for `region`, the archivable lines of a live outline.
pub fn plan<S: AsRef<str>>(
    region: &[S],
    classifier: &TodoClassifier,
    config: &ArchiveConfig,
) -> ArchivePlan {
    let lines: Vec<&str> = region.iter().map(AsRef::as_ref).collect();
    let unit = content_indent_unit(&lines, &config.merge);

    let mut removed: BTreeSet<usize> = BTreeSet::new();
    let mut archived: HashSet<usize> = HashSet::new();
    let mut blocks: Vec<Vec<usize>> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !classifier.is_finished(line) {
            continue;
        }
        let mut block = vec![i];
        walk_down(&lines, Some(i), WalkOptions::default(), &unit, |step| {
            if classifier.is_comment(step.text) && step.start_level.is_some_and(|s| step.level >= s) {
                block.push(step.line);
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        });
        removed.extend(&block);
        archived.extend(&block);
        blocks.push(block);
    }

    let mut entries: Vec<ArchiveEntry> = blocks
        .into_iter()
        .map(|block| {
            let first = block[0];
            let finished = classifier
                .finished_date(lines[first])
                .and_then(|value| parse_finished_date(value, &config.finished_date_formats));
            ArchiveEntry {
                kind: EntryKind::Finished,
                line: first,
                text: join_lines(&lines, &block),
                projects: ancestor_group_names(&lines, first, &unit, classifier),
                lines: block,
                finished,
            }
        })
        .collect();

    if config.remove_empty_projects {
        entries.extend(empty_groups(&lines, &unit, classifier, &mut removed, &mut archived));
    }

    if config.collapses_empty_lines() {
        let allowed = usize::try_from(config.remove_empty_lines).unwrap_or(0);
        let mut streak = 0;
        for (i, line) in lines.iter().enumerate() {
            if removed.contains(&i) {
                continue;
            }
            if line.trim().is_empty() {
                streak += 1;
                if streak > allowed {
                    removed.insert(i);
                }
            } else {
                streak = 0;
            }
        }
    }

    entries.sort_by_key(|entry| entry.line);
    inherit_dates(&mut entries);
    if config.sort_by_date {
        sort_newest_first(&mut entries, |entry| entry.finished);
    }

    log::debug!(
        "archive plan: {} lines removed, {} blocks archived",
        removed.len(),
        entries.len()
    );

    ArchivePlan {
        removed: removed.into_iter().collect(),
        entries,
    }
}

/// Groups with no pending todo left: the whole subtree is removed and the group's loose lines
/// (neither archived already nor inside a nested group) become one entry under its path.
fn empty_groups(
    lines: &[&str],
    unit: &str,
    classifier: &TodoClassifier,
    removed: &mut BTreeSet<usize>,
    archived: &mut HashSet<usize>,
) -> Vec<ArchiveEntry> {
    let mut entries = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(name) = classifier.group_name(line) else {
            continue;
        };

        let mut subtree = Vec::new();
        let mut has_pending = false;
        walk_down(lines, Some(i), WalkOptions::default(), unit, |step| {
            if step.start_level == Some(step.level) {
                return ControlFlow::Break(());
            }
            if classifier.is_pending(step.text) {
                has_pending = true;
                return ControlFlow::Break(());
            }
            subtree.push(step.line);
            ControlFlow::Continue(())
        });
        if has_pending {
            continue;
        }

        log::debug!("group `{name}` at line {i} has no pending todos, removing it");
        removed.insert(i);
        removed.extend(&subtree);

        let own = own_lines(lines, &subtree, unit, classifier, archived);
        if own.is_empty() {
            continue;
        }
        archived.extend(&own);

        let mut projects = ancestor_group_names(lines, i, unit, classifier);
        projects.push(name.to_string());
        entries.push(ArchiveEntry {
            kind: EntryKind::EmptyGroup,
            line: own[0],
            text: join_lines(lines, &own),
            projects,
            lines: own,
            finished: None,
        });
    }

    entries
}

/// Lines of `subtree` that belong to the group itself rather than to a nested group.
fn own_lines(
    lines: &[&str],
    subtree: &[usize],
    unit: &str,
    classifier: &TodoClassifier,
    archived: &HashSet<usize>,
) -> Vec<usize> {
    let mut own = Vec::new();
    let mut nested_level: Option<usize> = None;

    for &k in subtree {
        let level = indent_level(lines[k], unit);
        if nested_level.is_some_and(|nested| level > nested) {
            continue;
        }
        nested_level = None;

        if classifier.is_group_header(lines[k]) {
            nested_level = Some(level);
            continue;
        }
        if !archived.contains(&k) {
            own.push(k);
        }
    }

    own
}

/// Empty-group blocks take the date of the block above them. Finished todos without a
/// parseable date keep `None` and sort last.
fn inherit_dates(entries: &mut [ArchiveEntry]) {
    let mut previous = None;
    for entry in entries.iter_mut() {
        if entry.kind == EntryKind::EmptyGroup {
            entry.finished = previous;
        }
        previous = entry.finished;
    }
}

fn join_lines(lines: &[&str], indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&k| lines[k])
        .collect::<Vec<_>>()
        .join("\n")
}
