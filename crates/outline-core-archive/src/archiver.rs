//! Applying archive plans.

use outline_core::{
    ArchiveMerger, AssociationTags, LineEnding, LineIndex, MergeItem, content_indent_unit,
    indent_level, indent_line,
};
use outline_core_classify::TodoClassifier;
use outline_core_lang::{ArchiveConfig, ArchivePlacement};

use crate::error::ArchiveError;
use crate::plan::{ArchivePlan, plan};

/// Result of archiving into a separate archive outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    /// The live outline without the archived lines.
    pub remaining: String,
    /// The archive outline, `None` when the archive lives inside `remaining`.
    pub archive: Option<String>,
}

/// Moves finished todos out of live outlines.
#[derive(Debug, Clone)]
pub struct Archiver {
    config: ArchiveConfig,
    classifier: TodoClassifier,
    tags: AssociationTags,
}

impl Archiver {
    /// Build an archiver for `config`.
    pub fn new(config: ArchiveConfig) -> Result<Self, ArchiveError> {
        let classifier = TodoClassifier::new(config.syntax.clone())?;
        let keyword = config.syntax.association_tag.clone();
        let tags = AssociationTags::new(&keyword)
            .map_err(|source| ArchiveError::AssociationTag { keyword, source })?;
        Ok(Self {
            config,
            classifier,
            tags,
        })
    }

    /// Build an archiver from the host's JSON settings.
    pub fn from_json(json: &str) -> Result<Self, ArchiveError> {
        Self::new(ArchiveConfig::from_json(json)?)
    }

    /// The settings.
    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// The line classifier built from the settings' dialect.
    pub fn classifier(&self) -> &TodoClassifier {
        &self.classifier
    }

    /// Plan an archive run over `text` without applying it.
    ///
    /// Only lines above the archive header (or all lines, without one) are considered.
    pub fn plan(&self, text: &str) -> ArchivePlan {
        let lines = LineIndex::from_text(text).lines();
        let end = self.archive_header_line(&lines).unwrap_or(lines.len());
        plan(&lines[..end], &self.classifier, &self.config)
    }

    /// Archive according to the configured placement.
    ///
    /// `existing_archive` is the current archive outline for the separate placements and is
    /// ignored for [`ArchivePlacement::SameFile`].
    pub fn archive(&self, text: &str, existing_archive: &str) -> ArchiveOutcome {
        match self.config.placement {
            ArchivePlacement::SameFile => ArchiveOutcome {
                remaining: self.archive_in_place(text),
                archive: None,
            },
            ArchivePlacement::SeparateFile | ArchivePlacement::PerSourceFile => {
                self.archive_into(text, existing_archive)
            }
        }
    }

    /// Move finished blocks of `text` into `existing_archive`.
    pub fn archive_into(&self, text: &str, existing_archive: &str) -> ArchiveOutcome {
        let plan = self.plan(text);
        if plan.is_empty() {
            return ArchiveOutcome {
                remaining: text.to_string(),
                archive: Some(existing_archive.to_string()),
            };
        }

        let archive = if plan.entries.is_empty() {
            existing_archive.to_string()
        } else {
            ArchiveMerger::with_syntax(self.config.merge.clone(), &self.classifier, &self.tags)
                .merge(existing_archive, &plan.merge_items())
        };

        log::debug!(
            "archived {} blocks into separate archive, removed {} lines",
            plan.entries.len(),
            plan.removed.len()
        );

        ArchiveOutcome {
            remaining: remove_lines(text, &plan.removed),
            archive: Some(archive),
        }
    }

    /// Move finished blocks of `text` under its own archive header, creating the header at the
    /// end of the outline when missing.
    pub fn archive_in_place(&self, text: &str) -> String {
        let plan = self.plan(text);
        if plan.is_empty() {
            return text.to_string();
        }

        let line_ending = LineEnding::detect_in_text(text);
        let mut normalized = LineEnding::normalize(text).into_owned();
        let mut lines = LineIndex::from_text(&normalized).lines();

        let header = match self.archive_header_line(&lines) {
            Some(header) => header,
            None => {
                let header = lines.len();
                normalized.push_str(&format!("\n{}:\n", self.config.syntax.archive_name.trim()));
                lines = LineIndex::from_text(&normalized).lines();
                log::debug!("created archive header at line {header}");
                header
            }
        };
        let trailing_newline = normalized.ends_with('\n');

        let unit = content_indent_unit(&lines, &self.config.merge);
        let archive_level = indent_level(&lines[header], &unit);
        let items = align_to_archive(&plan.merge_items(), &unit, archive_level + 1);

        let merge_config = self
            .config
            .merge
            .clone()
            .with_root_indent_level(archive_level + 1);
        let body = lines[header + 1..].join("\n");
        let merged = ArchiveMerger::with_syntax(merge_config, &self.classifier, &self.tags)
            .merge(&body, &items);

        let mut out = remove_lines(&lines[..=header].join("\n"), &plan.removed);
        if !merged.is_empty() {
            out.push('\n');
            out.push_str(&merged);
        }
        if trailing_newline {
            out.push('\n');
        }

        log::debug!(
            "archived {} blocks in place under line {header}, removed {} lines",
            plan.entries.len(),
            plan.removed.len()
        );

        match line_ending {
            LineEnding::Lf => out,
            LineEnding::Crlf => out.replace('\n', line_ending.as_str()),
        }
    }

    fn archive_header_line<S: AsRef<str>>(&self, lines: &[S]) -> Option<usize> {
        lines
            .iter()
            .position(|line| self.classifier.is_archive_header(line.as_ref()))
    }
}

/// Re-indent every item so the shallowest line across all items sits at `base_level`.
///
/// Root items are placed verbatim by the merge engine, so they need the archive body's depth
/// already. Relative indentation between and inside items is kept.
fn align_to_archive(items: &[MergeItem], unit: &str, base_level: usize) -> Vec<MergeItem> {
    let min_level = items
        .iter()
        .flat_map(|item| item.text.split('\n'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent_level(line, unit))
        .min()
        .unwrap_or(0);

    items
        .iter()
        .map(|item| {
            let text = item
                .text
                .split('\n')
                .map(|line| {
                    let trimmed = line.trim_start();
                    if trimmed.is_empty() {
                        return String::new();
                    }
                    let relative = indent_level(line, unit).saturating_sub(min_level);
                    indent_line(trimmed, unit, base_level + relative)
                })
                .collect::<Vec<_>>()
                .join("\n");
            MergeItem {
                text,
                ..item.clone()
            }
        })
        .collect()
}

/// `text` without the given lines, line endings preserved.
fn remove_lines(text: &str, removed: &[usize]) -> String {
    let line_ending = LineEnding::detect_in_text(text);
    let mut index = LineIndex::from_text(text);
    index.delete_lines(removed);
    let out = index.get_text();
    match line_ending {
        LineEnding::Lf => out,
        LineEnding::Crlf => out.replace('\n', line_ending.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_lines_keeps_crlf() {
        assert_eq!(remove_lines("a\r\nb\r\nc\r\n", &[1]), "a\r\nc\r\n");
        assert_eq!(remove_lines("a\nb", &[1]), "a");
        assert_eq!(remove_lines("a\nb", &[]), "a\nb");
    }

    #[test]
    fn test_align_to_archive_keeps_relative_depth() {
        let items = vec![
            MergeItem::in_group("    ✔ a\n      - note", ["P"]),
            MergeItem::root("  ✔ b"),
        ];
        let aligned = align_to_archive(&items, "  ", 1);
        assert_eq!(aligned[0].text, "    ✔ a\n      - note");
        assert_eq!(aligned[1].text, "  ✔ b");
        assert_eq!(aligned[0].projects, items[0].projects);
    }
}
