//! Line access for outline traversal.
//!
//! The walker and the ancestor queries read lines through the [`LineSource`] trait, so they run
//! equally over a plain `Vec<String>` snapshot (what the merge engine mutates) and over a
//! [`LineIndex`], a Rope-backed document with O(log N) line access and editing.

use crate::line_ending::LineEnding;
use ropey::Rope;
use std::borrow::Cow;

/// Read-only, index-addressed access to the lines of a document.
///
/// Line indices are positional in the current snapshot and carry no identity across edits.
pub trait LineSource {
    /// Number of lines.
    fn line_count(&self) -> usize;

    /// Text of the given line without its newline, or `None` if out of range.
    fn line_text(&self, line: usize) -> Option<Cow<'_, str>>;
}

impl<S: AsRef<str>> LineSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.get(line).map(|l| Cow::Borrowed(l.as_ref()))
    }
}

impl<S: AsRef<str>> LineSource for Vec<S> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.as_slice().line_text(line)
    }
}

/// Logical line index - implemented using Rope data structure
///
/// Rope provides O(log N) line access, insertion, and deletion, which keeps repeated line
/// removals on large outlines cheap. Only `\n` separates lines, matching `str::split('\n')`;
/// U+2028, U+2029, U+0085, VT and FF stay inside their line.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty line index
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build line index from text. CRLF and lone CR are normalized to LF.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(&LineEnding::normalize(text)),
        }
    }

    /// Get total line count. An empty document has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get text of the specified line (excluding newline)
    pub fn get_line_text(&self, line_number: usize) -> Option<String> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line_number).to_string();
        if text.ends_with('\n') {
            text.pop();
        }

        Some(text)
    }

    /// Insert a line before `line_number`; appends when past the end.
    pub fn insert_line(&mut self, line_number: usize, text: &str) {
        if line_number >= self.rope.len_lines() {
            let end = self.rope.len_chars();
            self.rope.insert(end, &format!("\n{text}"));
            return;
        }

        let at = self.rope.line_to_char(line_number);
        self.rope.insert(at, &format!("{text}\n"));
    }

    /// Delete the specified line together with its newline.
    pub fn delete_line(&mut self, line_number: usize) {
        let line_count = self.rope.len_lines();
        if line_number >= line_count {
            return;
        }

        let (start_char, end_char) = if line_number + 1 < line_count {
            (
                self.rope.line_to_char(line_number),
                self.rope.line_to_char(line_number + 1),
            )
        } else if line_number > 0 {
            // Last line: remove the newline that precedes it instead.
            (
                self.rope.line_to_char(line_number) - 1,
                self.rope.len_chars(),
            )
        } else {
            (0, self.rope.len_chars())
        };

        self.rope.remove(start_char..end_char);
    }

    /// Delete several lines, given as indices into the current snapshot.
    ///
    /// Duplicates and out-of-range indices are ignored.
    pub fn delete_lines(&mut self, line_numbers: &[usize]) {
        let mut sorted: Vec<usize> = line_numbers.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        for line in sorted.into_iter().rev() {
            self.delete_line(line);
        }
    }

    /// Collect every line into an owned vector.
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|i| self.get_line_text(i))
            .collect()
    }

    /// Get complete text
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }
}

impl LineSource for LineIndex {
    fn line_count(&self) -> usize {
        LineIndex::line_count(self)
    }

    fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        self.get_line_text(line).map(Cow::Owned)
    }
}
