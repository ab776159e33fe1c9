use crate::line_ending::LineEnding;

pub(crate) fn split_lines(text: &str) -> Vec<String> {
    // `str::split('\n')` preserves trailing empty segments (N newlines => N+1 lines); edge
    // blank lines are trimmed separately where it matters.
    LineEnding::normalize(text)
        .split('\n')
        .map(str::to_string)
        .collect()
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Drop leading and trailing blank lines in place.
pub(crate) fn trim_blank_edges(lines: &mut Vec<String>) {
    let trailing = lines.iter().rev().take_while(|l| is_blank(l)).count();
    lines.truncate(lines.len() - trailing);
    let leading = lines.iter().take_while(|l| is_blank(l)).count();
    lines.drain(..leading);
}
