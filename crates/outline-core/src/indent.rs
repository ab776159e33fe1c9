//! Indentation inference.
//!
//! Outlines carry no markup: nesting is whatever the leading whitespace says. This module
//! infers the indentation unit of a block of lines and turns a line's leading whitespace into
//! an integer nesting level.
//!
//! Detection results may be memoized per document through an [`IndentCache`]. The cache is an
//! optimization only; [`NoIndentCache`] is the default and every result must stay correct with it.

use crate::line_index::LineSource;
use std::cell::RefCell;
use std::collections::HashMap;

/// Leading whitespace of a line (never includes the newline).
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(line.len(), |(i, _)| i);
    &line[..end]
}

/// Infer the indentation unit of a set of lines.
///
/// Blank lines are ignored. If any leading-whitespace run contains a tab the unit is a single tab.
/// Otherwise it is a run of spaces as long as the shortest non-empty run. Returns `None` when
/// no line is indented.
pub fn detect_indent_unit<I, S>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut min_len: Option<usize> = None;

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        let ws = leading_whitespace(line);
        if ws.is_empty() {
            continue;
        }
        if ws.contains('\t') {
            return Some("\t".to_string());
        }
        let len = ws.chars().count();
        min_len = Some(min_len.map_or(len, |m| m.min(len)));
    }

    min_len.map(|len| " ".repeat(len))
}

/// Like [`detect_indent_unit`], falling back to `fallback` when nothing is indented.
pub fn detect_indent_unit_or<I, S>(lines: I, fallback: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    detect_indent_unit(lines).unwrap_or_else(|| fallback.to_string())
}

/// Nesting level of `line`: how many times `unit` can be consumed from its start.
///
/// Leading whitespace that is not a whole multiple of the unit is leveled by the whole units
/// that match. An empty unit yields level 0 for every line.
pub fn indent_level(line: &str, unit: &str) -> usize {
    if unit.is_empty() {
        return 0;
    }

    let mut level = 0;
    let mut rest = line;
    while let Some(stripped) = rest.strip_prefix(unit) {
        level += 1;
        rest = stripped;
    }
    level
}

/// Render `text` (already stripped of its indentation) at `level` using `unit`.
pub fn indent_line(text: &str, unit: &str, level: usize) -> String {
    let mut out = String::with_capacity(unit.len() * level + text.len());
    for _ in 0..level {
        out.push_str(unit);
    }
    out.push_str(text);
    out
}

/// A memoized indentation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedIndent {
    /// The detected unit.
    pub unit: String,
    /// Line count of the document when the unit was detected.
    pub line_count: usize,
    /// `true` if the unit was detected from indented content rather than the fallback.
    pub confident: bool,
}

/// Per-document memoization of indentation detection.
///
/// Keys identify documents (e.g. a file path). Implementations may drop entries at any time.
pub trait IndentCache {
    /// Look up a usable entry for `key` given the document's current line count.
    fn lookup(&self, key: &str, line_count: usize) -> Option<String>;

    /// Store a detection result.
    fn store(&self, key: &str, entry: CachedIndent);

    /// Forget a document.
    fn invalidate(&self, key: &str);
}

/// The cache that never remembers anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndentCache;

impl IndentCache for NoIndentCache {
    fn lookup(&self, _key: &str, _line_count: usize) -> Option<String> {
        None
    }

    fn store(&self, _key: &str, _entry: CachedIndent) {}

    fn invalidate(&self, _key: &str) {}
}

/// Cache invalidated by line count.
///
/// Confident entries are reused as-is; fallback entries are reused only while the line count is
/// unchanged. Edits that keep the line count constant are not noticed, so callers that rewrite
/// indentation in place should [`invalidate`](IndentCache::invalidate) explicitly.
#[derive(Debug, Default)]
pub struct LineCountIndentCache {
    entries: RefCell<HashMap<String, CachedIndent>>,
}

impl LineCountIndentCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of remembered documents.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing is remembered.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl IndentCache for LineCountIndentCache {
    fn lookup(&self, key: &str, line_count: usize) -> Option<String> {
        let entries = self.entries.borrow();
        let entry = entries.get(key)?;
        (entry.confident || entry.line_count == line_count).then(|| entry.unit.clone())
    }

    fn store(&self, key: &str, entry: CachedIndent) {
        self.entries.borrow_mut().insert(key.to_string(), entry);
    }

    fn invalidate(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Resolves the indentation unit of whole documents, consulting a cache first.
#[derive(Debug, Default)]
pub struct IndentResolver<C: IndentCache = NoIndentCache> {
    cache: C,
    fallback: String,
}

impl IndentResolver<NoIndentCache> {
    /// A resolver without memoization.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            cache: NoIndentCache,
            fallback: fallback.into(),
        }
    }
}

impl<C: IndentCache> IndentResolver<C> {
    /// A resolver backed by `cache`.
    pub fn with_cache(cache: C, fallback: impl Into<String>) -> Self {
        Self {
            cache,
            fallback: fallback.into(),
        }
    }

    /// The underlying cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// The unit used for documents without indentation.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Indentation unit of the document identified by `key`.
    pub fn resolve<L: LineSource + ?Sized>(&self, key: &str, source: &L) -> String {
        let line_count = source.line_count();
        if let Some(unit) = self.cache.lookup(key, line_count) {
            return unit;
        }

        let detected =
            detect_indent_unit((0..line_count).filter_map(|i| source.line_text(i)));
        let confident = detected.is_some();
        let unit = detected.unwrap_or_else(|| self.fallback.clone());

        self.cache.store(
            key,
            CachedIndent {
                unit: unit.clone(),
                line_count,
                confident,
            },
        );
        unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace("  \tx y"), "  \t");
        assert_eq!(leading_whitespace("x"), "");
        assert_eq!(leading_whitespace("   "), "   ");
    }

    #[test]
    fn test_indent_line() {
        assert_eq!(indent_line("x", "  ", 2), "    x");
        assert_eq!(indent_line("x", "\t", 0), "x");
    }

    #[test]
    fn test_line_count_cache_reuses_fallback_only_while_unchanged() {
        let cache = LineCountIndentCache::new();
        cache.store(
            "a.todo",
            CachedIndent {
                unit: "  ".to_string(),
                line_count: 3,
                confident: false,
            },
        );
        assert_eq!(cache.lookup("a.todo", 3).as_deref(), Some("  "));
        assert_eq!(cache.lookup("a.todo", 4), None);

        cache.store(
            "b.todo",
            CachedIndent {
                unit: "\t".to_string(),
                line_count: 3,
                confident: true,
            },
        );
        assert_eq!(cache.lookup("b.todo", 40).as_deref(), Some("\t"));

        cache.invalidate("b.todo");
        assert_eq!(cache.lookup("b.todo", 3), None);
        assert_eq!(cache.len(), 1);
    }
}
