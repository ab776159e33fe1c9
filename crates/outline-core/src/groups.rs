//! Group header index.
//!
//! A [`GroupIndex`] is a snapshot: it is built from the current line sequence and must be rebuilt
//! after every structural edit, because line indices shift. The merge engine does exactly that
//! at fixed points instead of patching indices incrementally.

use crate::indent::{detect_indent_unit_or, indent_level};
use crate::syntax::HeaderSyntax;
use crate::text::is_blank;
use outline_core_lang::MergeConfig;

/// Indentation unit of `lines`, or the configured unit when nothing is indented.
pub fn content_indent_unit<S: AsRef<str>>(lines: &[S], config: &MergeConfig) -> String {
    detect_indent_unit_or(lines, config.indent_unit())
}

/// A group header and the line range of its subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHeader {
    /// Names from the root to this group, joined by the path separator.
    pub full_path: String,
    /// This group's own name.
    pub name: String,
    /// Nesting level of the header line.
    pub level: usize,
    /// Index of the header line.
    pub start: usize,
    /// Index of the last line still inside the group (equals `start` for an empty group).
    pub end: usize,
}

impl GroupHeader {
    /// Returns `true` if `line` lies in the group's body (header excluded).
    pub fn contains_line(&self, line: usize) -> bool {
        line > self.start && line <= self.end
    }
}

/// Ordered group headers of a line sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupIndex {
    groups: Vec<GroupHeader>,
}

impl GroupIndex {
    /// Scan `lines` and record every group header.
    ///
    /// Levels are computed with `unit`; paths are joined with `separator`.
    pub fn build<S, H>(lines: &[S], unit: &str, separator: &str, headers: &H) -> Self
    where
        S: AsRef<str>,
        H: HeaderSyntax + ?Sized,
    {
        let last_line = lines.len().saturating_sub(1);
        let mut stack: Vec<&str> = Vec::new();
        let mut groups: Vec<GroupHeader> = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let Some(name) = headers.header_name(line) else {
                continue;
            };
            let level = indent_level(line, unit);

            stack.truncate(level);
            stack.push(name);

            groups.push(GroupHeader {
                full_path: stack.join(separator),
                name: name.to_string(),
                level,
                start: i,
                end: last_line,
            });
        }

        for i in 0..groups.len() {
            let (level, start) = (groups[i].level, groups[i].start);
            let mut end = last_line;

            if let Some(next) = groups[i + 1..].iter().find(|g| g.level <= level) {
                end = next.start - 1;
            }

            // Trailing content at the same or a lower level closes the group even when no
            // further header follows.
            let closing = (start + 1..lines.len()).find(|&k| {
                let line = lines[k].as_ref();
                !is_blank(line) && indent_level(line, unit) <= level
            });
            if let Some(k) = closing {
                end = end.min(k - 1);
            }

            groups[i].end = end;
        }

        Self { groups }
    }

    /// Build the index with the unit detected on `lines` and the configured separator.
    pub fn parse<S, H>(lines: &[S], config: &MergeConfig, headers: &H) -> Self
    where
        S: AsRef<str>,
        H: HeaderSyntax + ?Sized,
    {
        let unit = content_indent_unit(lines, config);
        Self::build(lines, &unit, config.path_separator(), headers)
    }

    /// The first group whose full path equals `path`.
    pub fn find(&self, path: &str) -> Option<&GroupHeader> {
        self.groups.iter().find(|g| g.full_path == path)
    }

    /// Returns `true` if a group with this full path exists.
    pub fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Smallest header level, `None` without headers.
    pub fn min_level(&self) -> Option<usize> {
        self.groups.iter().map(|g| g.level).min()
    }

    /// Innermost group whose body contains `line`.
    pub fn enclosing(&self, line: usize) -> Option<&GroupHeader> {
        self.groups
            .iter()
            .filter(|g| g.contains_line(line))
            .max_by_key(|g| g.start)
    }

    /// All groups in document order.
    pub fn groups(&self) -> &[GroupHeader] {
        &self.groups
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
