//! Hierarchy traversal over leveled lines.
//!
//! [`walk`] is the one traversal primitive the rest of the crate builds on: it visits lines
//! above or below a starting line, computes each visited line's level, and hands them to a
//! callback that decides what "ancestor" or "descendant" means for the caller.

use crate::indent::indent_level;
use crate::line_index::LineSource;
use crate::syntax::HeaderSyntax;
use std::ops::ControlFlow;

/// Traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the document.
    Up,
    /// Towards the end of the document.
    Down,
}

/// Traversal flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Do not report blank lines; they also do not take part in monotonicity checks.
    pub skip_empty_lines: bool,
    /// Only report lines strictly deeper (down) or shallower (up) than the last reported one.
    pub strictly_monotonic: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            skip_empty_lines: true,
            strictly_monotonic: false,
        }
    }
}

impl WalkOptions {
    /// Options for finding the direct ancestor chain (or direct-descendant spine).
    pub fn monotonic() -> Self {
        Self {
            skip_empty_lines: true,
            strictly_monotonic: true,
        }
    }

    /// Options that report every line, blank ones included.
    pub fn all_lines() -> Self {
        Self {
            skip_empty_lines: false,
            strictly_monotonic: false,
        }
    }
}

/// A visited line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkStep<'a> {
    /// Level of the starting line, `None` when the walk starts before the first line.
    pub start_level: Option<usize>,
    /// Index of the visited line.
    pub line: usize,
    /// Text of the visited line.
    pub text: &'a str,
    /// Level of the visited line.
    pub level: usize,
}

/// Walk from `start` in `direction`, reporting visited lines to `visit`.
///
/// `start == None` means "before the first line": the walk covers the whole document downward and
/// has no starting level. Walking down stops, without reporting, at the first line whose level
/// is below the starting level. Returning [`ControlFlow::Break`] stops the walk early.
pub fn walk<L, F>(
    source: &L,
    start: Option<usize>,
    direction: Direction,
    options: WalkOptions,
    unit: &str,
    mut visit: F,
) where
    L: LineSource + ?Sized,
    F: FnMut(&WalkStep<'_>) -> ControlFlow<()>,
{
    let line_count = source.line_count();
    let start_level = match start {
        Some(line) => match source.line_text(line) {
            Some(text) => Some(indent_level(&text, unit)),
            None => return,
        },
        None => None,
    };

    let mut prev_level = start_level;
    let mut next = match (start, direction) {
        (Some(line), Direction::Down) => line.checked_add(1),
        (Some(line), Direction::Up) => line.checked_sub(1),
        (None, Direction::Down) => Some(0),
        (None, Direction::Up) => None,
    };

    while let Some(line) = next.filter(|&l| l < line_count) {
        next = match direction {
            Direction::Down => line.checked_add(1),
            Direction::Up => line.checked_sub(1),
        };

        let Some(text) = source.line_text(line) else {
            break;
        };

        if options.skip_empty_lines && text.trim().is_empty() {
            continue;
        }

        let level = indent_level(&text, unit);

        if direction == Direction::Down && start_level.is_some_and(|start| level < start) {
            break;
        }

        if options.strictly_monotonic {
            let rejected = match (direction, prev_level) {
                (Direction::Down, Some(prev)) => level <= prev,
                (Direction::Up, Some(prev)) => level >= prev,
                (_, None) => false,
            };
            if rejected {
                continue;
            }
        }

        let step = WalkStep {
            start_level,
            line,
            text: text.as_ref(),
            level,
        };
        if visit(&step).is_break() {
            break;
        }

        prev_level = Some(level);
    }
}

/// Walk downward from `start`.
pub fn walk_down<L, F>(source: &L, start: Option<usize>, options: WalkOptions, unit: &str, visit: F)
where
    L: LineSource + ?Sized,
    F: FnMut(&WalkStep<'_>) -> ControlFlow<()>,
{
    walk(source, start, Direction::Down, options, unit, visit)
}

/// Walk upward from `start`.
pub fn walk_up<L, F>(source: &L, start: usize, options: WalkOptions, unit: &str, visit: F)
where
    L: LineSource + ?Sized,
    F: FnMut(&WalkStep<'_>) -> ControlFlow<()>,
{
    walk(source, Some(start), Direction::Up, options, unit, visit)
}

/// Visit the direct children of `start`: lines exactly one level deeper, up to the first line
/// at or above the starting level.
pub fn walk_children<L, F>(source: &L, start: usize, unit: &str, mut visit: F)
where
    L: LineSource + ?Sized,
    F: FnMut(&WalkStep<'_>) -> ControlFlow<()>,
{
    walk_down(source, Some(start), WalkOptions::default(), unit, |step| {
        let start_level = step.start_level.unwrap_or(0);
        if step.level <= start_level {
            return ControlFlow::Break(());
        }
        if step.level > start_level + 1 {
            return ControlFlow::Continue(());
        }
        visit(step)
    })
}

/// Names of the group headers enclosing `line`, ordered root to leaf.
///
/// Walks up strictly monotonically, so at most one header per level is collected and a
/// same-level sibling header is never mistaken for a parent.
pub fn ancestor_group_names<L, H>(source: &L, line: usize, unit: &str, headers: &H) -> Vec<String>
where
    L: LineSource + ?Sized,
    H: HeaderSyntax + ?Sized,
{
    let mut names = Vec::new();
    walk_up(source, line, WalkOptions::monotonic(), unit, |step| {
        if let Some(name) = headers.header_name(step.text) {
            names.push(name.to_string());
        }
        ControlFlow::Continue(())
    });
    names.reverse();
    names
}
