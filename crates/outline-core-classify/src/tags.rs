//! `@tag` / `@tag(value)` tokens.

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-zA-Z0-9`])(@[^\s*~(]+(?:://[^\s*~(:]+)?(?:\([^)]*\))?)")
        .expect("valid tag regex")
});

static FINISHED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-zA-Z0-9])@(done|cancelled)(\(([^)]*)\))?([a-zA-Z])?")
        .expect("valid finished tag regex")
});

/// Every tag token on `line`, in order, including the leading `@`.
pub fn tags(line: &str) -> Vec<&str> {
    TAG.captures_iter(line)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Which finish tag a line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishTag {
    /// `@done`
    Done,
    /// `@cancelled`
    Cancelled,
}

/// The first `@done` / `@cancelled` tag on `line` and its argument, if any.
///
/// A bare tag must not run into further letters (`@donework` is not a finish tag).
pub fn finish_tag(line: &str) -> Option<(FinishTag, Option<&str>)> {
    FINISHED_TAG.captures_iter(line).find_map(|caps| {
        let argument = caps.get(3).map(|m| m.as_str());
        if caps.get(2).is_none() && caps.get(4).is_some() {
            return None;
        }
        let kind = match caps.get(1)?.as_str() {
            "done" => FinishTag::Done,
            _ => FinishTag::Cancelled,
        };
        Some((kind, argument))
    })
}
