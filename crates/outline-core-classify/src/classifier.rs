//! Line classification for the todo dialect.

use crate::error::ClassifyError;
use crate::tags::{FinishTag, finish_tag};
use outline_core::HeaderSyntax;
use outline_core_lang::TodoSyntax;
use regex::Regex;

/// Markdown checkbox forms, which always count as todo markers.
const MARKDOWN_BOX: &str = r"-\s+\[\s?\]";
const MARKDOWN_DONE: &str = r"-\s+\[[xX]\]";

/// Built-in symbols, recognized alongside the configured ones.
const DEFAULT_BOX: &str = "☐";
const DEFAULT_DONE: &str = "✔";
const DEFAULT_CANCELLED: &str = "✘";

/// What a single line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only.
    Blank,
    /// A todo that is neither done nor cancelled.
    Pending,
    /// A done todo.
    Done,
    /// A cancelled todo.
    Cancelled,
    /// The archive section header.
    ArchiveHeader,
    /// A group ("project") header.
    Group,
    /// Anything else.
    Comment,
}

impl LineKind {
    /// Returns `true` for done and cancelled todos.
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

/// Regex-based classifier for one [`TodoSyntax`].
#[derive(Debug, Clone)]
pub struct TodoClassifier {
    syntax: TodoSyntax,
    any_marker: Regex,
    box_marker: Regex,
    done_marker: Regex,
    cancelled_marker: Regex,
    group: Regex,
    archive: Regex,
}

impl TodoClassifier {
    /// Compile the patterns for `syntax`.
    pub fn new(syntax: TodoSyntax) -> Result<Self, ClassifyError> {
        if syntax.archive_name.trim().is_empty() {
            return Err(ClassifyError::EmptyArchiveName);
        }

        let boxes = symbol_alternatives(DEFAULT_BOX, &syntax.box_symbol);
        let done = symbol_alternatives(DEFAULT_DONE, &syntax.done_symbol);
        let cancelled = symbol_alternatives(DEFAULT_CANCELLED, &syntax.cancelled_symbol);

        let mut any: Vec<String> = Vec::new();
        for symbol in boxes.iter().chain(&done).chain(&cancelled) {
            if !any.contains(symbol) {
                any.push(symbol.clone());
            }
        }
        any.push(MARKDOWN_BOX.to_string());
        any.push(MARKDOWN_DONE.to_string());

        let mut box_list = boxes;
        box_list.push(MARKDOWN_BOX.to_string());
        let mut done_list = done;
        done_list.push(MARKDOWN_DONE.to_string());

        Ok(Self {
            any_marker: marker_regex("todo", &any)?,
            box_marker: marker_regex("box", &box_list)?,
            done_marker: marker_regex("done", &done_list)?,
            cancelled_marker: marker_regex("cancelled", &cancelled)?,
            group: compile("group", r"^[^\S\n]*(.+?):[^\S\n]*(?:@[^\s*~(].*)?$".to_string())?,
            archive: compile(
                "archive",
                format!(r"^[^\S\n]*{}:", regex::escape(syntax.archive_name.trim())),
            )?,
            syntax,
        })
    }

    /// The dialect this classifier was built from.
    pub fn syntax(&self) -> &TodoSyntax {
        &self.syntax
    }

    /// Classify `line`.
    pub fn classify(&self, line: &str) -> LineKind {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }
        if self.is_todo(line) {
            if self.is_done(line) {
                return LineKind::Done;
            }
            if self.is_cancelled(line) {
                return LineKind::Cancelled;
            }
            return LineKind::Pending;
        }
        if self.archive.is_match(line) {
            return LineKind::ArchiveHeader;
        }
        if self.group.is_match(line) {
            return LineKind::Group;
        }
        LineKind::Comment
    }

    /// Starts with a todo marker followed by whitespace. Dash-rule lines never are.
    pub fn is_todo(&self, line: &str) -> bool {
        !starts_with_rule(line) && self.any_marker.is_match(line)
    }

    /// A box todo without a `@done` or `@cancelled` tag.
    pub fn is_pending(&self, line: &str) -> bool {
        self.classify(line) == LineKind::Pending
    }

    /// Done by symbol, or a box todo tagged `@done`.
    pub fn is_done(&self, line: &str) -> bool {
        if !self.is_todo(line) {
            return false;
        }
        self.done_marker.is_match(line)
            || (self.box_marker.is_match(line)
                && matches!(finish_tag(line), Some((FinishTag::Done, _))))
    }

    /// Cancelled by symbol, or a box todo tagged `@cancelled`.
    pub fn is_cancelled(&self, line: &str) -> bool {
        if !self.is_todo(line) {
            return false;
        }
        self.cancelled_marker.is_match(line)
            || (self.box_marker.is_match(line)
                && matches!(finish_tag(line), Some((FinishTag::Cancelled, _))))
    }

    /// Done or cancelled.
    pub fn is_finished(&self, line: &str) -> bool {
        self.classify(line).is_finished()
    }

    /// A `Name:` line that is not a todo. Only tags may follow the colon.
    pub fn is_group_header(&self, line: &str) -> bool {
        !self.is_todo(line) && self.group.is_match(line)
    }

    /// The name of a group header line.
    pub fn group_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        if self.is_todo(line) {
            return None;
        }
        let name = self.group.captures(line)?.get(1)?.as_str().trim();
        (!name.is_empty()).then_some(name)
    }

    /// The archive section header, e.g. `Archive:`.
    pub fn is_archive_header(&self, line: &str) -> bool {
        !self.is_todo(line) && self.archive.is_match(line)
    }

    /// Non-blank text that is neither a todo nor a header.
    pub fn is_comment(&self, line: &str) -> bool {
        self.classify(line) == LineKind::Comment
    }

    /// The argument of the finish tag of a finished todo, e.g. `2025-11-21 10:27 pm`.
    pub fn finished_date<'a>(&self, line: &'a str) -> Option<&'a str> {
        if !self.is_finished(line) {
            return None;
        }
        finish_tag(line).and_then(|(_, argument)| argument)
    }
}

impl HeaderSyntax for TodoClassifier {
    fn header_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.group_name(line)
    }
}

fn starts_with_rule(line: &str) -> bool {
    let trimmed = line.trim_start();
    ["--", "––", "——"].iter().any(|rule| trimmed.starts_with(rule))
}

fn symbol_alternatives(default: &str, configured: &str) -> Vec<String> {
    let mut out = vec![regex::escape(default)];
    let configured = configured.trim();
    if !configured.is_empty() && configured != default {
        out.push(regex::escape(configured));
    }
    out
}

fn marker_regex(role: &'static str, alternatives: &[String]) -> Result<Regex, ClassifyError> {
    compile(
        role,
        format!(r"^[^\S\n]*(?:{})\s", alternatives.join("|")),
    )
}

fn compile(role: &'static str, pattern: String) -> Result<Regex, ClassifyError> {
    Regex::new(&pattern).map_err(|source| ClassifyError::RegexCompile {
        role,
        pattern,
        source,
    })
}
