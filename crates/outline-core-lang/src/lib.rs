#![warn(missing_docs)]
//! `outline-core-lang` - data-driven configuration helpers for `outline-core`.
//!
//! This crate intentionally stays lightweight and does **not** depend on the merge engine or on
//! any regex machinery. It provides small structs that hosts can fill from their own settings
//! (usually JSON) to configure indentation, the todo dialect and the archiving behavior.

use serde::{Deserialize, Serialize};

/// Indentation unit used when neither the configuration nor the content provides one.
pub const DEFAULT_INDENT_UNIT: &str = "  ";

/// Separator joining group names into a dotted path.
pub const DEFAULT_PATH_SEPARATOR: &str = ".";

/// Indentation and path settings consumed by the merge engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeConfig {
    /// Configured indentation unit (e.g. `"  "`, `"    "`, `"\t"`).
    ///
    /// `None` or an empty string falls back to [`DEFAULT_INDENT_UNIT`].
    pub indent_unit: Option<String>,
    /// Separator used to join group names into a dotted path.
    pub path_separator: String,
    /// Nesting level at which top-level group headers are created.
    pub root_indent_level: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            indent_unit: None,
            path_separator: DEFAULT_PATH_SEPARATOR.to_string(),
            root_indent_level: 0,
        }
    }
}

impl MergeConfig {
    /// Set the configured indentation unit.
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = Some(unit.into());
        self
    }

    /// Set the dotted-path separator.
    pub fn with_path_separator(mut self, separator: impl Into<String>) -> Self {
        self.path_separator = separator.into();
        self
    }

    /// Set the level at which top-level group headers are created.
    pub fn with_root_indent_level(mut self, level: usize) -> Self {
        self.root_indent_level = level;
        self
    }

    /// The indentation unit, falling back to [`DEFAULT_INDENT_UNIT`] when absent or empty.
    pub fn indent_unit(&self) -> &str {
        match self.indent_unit.as_deref() {
            Some(unit) if !unit.is_empty() => unit,
            _ => DEFAULT_INDENT_UNIT,
        }
    }

    /// The path separator, falling back to [`DEFAULT_PATH_SEPARATOR`] when empty.
    pub fn path_separator(&self) -> &str {
        if self.path_separator.is_empty() {
            DEFAULT_PATH_SEPARATOR
        } else {
            &self.path_separator
        }
    }

    /// Parse a config from the host's JSON settings. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The todo dialect: symbols and names that line classifiers are built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TodoSyntax {
    /// Symbol opening a pending todo (e.g. `☐`).
    pub box_symbol: String,
    /// Symbol opening a done todo (e.g. `✔`).
    pub done_symbol: String,
    /// Symbol opening a cancelled todo (e.g. `✘`).
    pub cancelled_symbol: String,
    /// Name of the archive group header (`Archive:`).
    pub archive_name: String,
    /// Keyword of the inline association tag stripped during merges (`@project(...)`).
    pub association_tag: String,
}

impl Default for TodoSyntax {
    fn default() -> Self {
        Self {
            box_symbol: "☐".to_string(),
            done_symbol: "✔".to_string(),
            cancelled_symbol: "✘".to_string(),
            archive_name: "Archive".to_string(),
            association_tag: "project".to_string(),
        }
    }
}

impl TodoSyntax {
    /// Create a dialect with custom todo symbols and default names.
    pub fn with_symbols(
        box_symbol: impl Into<String>,
        done_symbol: impl Into<String>,
        cancelled_symbol: impl Into<String>,
    ) -> Self {
        Self {
            box_symbol: box_symbol.into(),
            done_symbol: done_symbol.into(),
            cancelled_symbol: cancelled_symbol.into(),
            ..Self::default()
        }
    }
}

/// Where archived entries end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArchivePlacement {
    /// Under the archive header inside the live document.
    #[serde(alias = "InSameFile")]
    SameFile,
    /// One archive outline shared by a whole workspace.
    #[serde(alias = "InSeparateFile")]
    SeparateFile,
    /// One `ARCHIVE.<name>` outline next to every live file.
    #[default]
    #[serde(alias = "InMultiSeparateFile")]
    PerSourceFile,
}

/// Settings of the archiving pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArchiveConfig {
    /// Indentation and path settings forwarded to the merge engine.
    pub merge: MergeConfig,
    /// The todo dialect.
    pub syntax: TodoSyntax,
    /// Where archived entries end up.
    pub placement: ArchivePlacement,
    /// Order archived entries by finish date, newest first.
    pub sort_by_date: bool,
    /// Archive groups that no longer contain pending todos.
    pub remove_empty_projects: bool,
    /// Maximum run of consecutive blank lines kept in the live outline; negative disables.
    pub remove_empty_lines: i32,
    /// `chrono` formats tried, in order, when parsing `@done(...)`/`@cancelled(...)` values.
    pub finished_date_formats: Vec<String>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            merge: MergeConfig::default(),
            syntax: TodoSyntax::default(),
            placement: ArchivePlacement::default(),
            sort_by_date: false,
            remove_empty_projects: true,
            remove_empty_lines: 1,
            finished_date_formats: vec![
                "%Y-%m-%d %I:%M:%S %p".to_string(),
                "%Y-%m-%d %I:%M %p".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M".to_string(),
                "%Y-%m-%d".to_string(),
            ],
        }
    }
}

impl ArchiveConfig {
    /// Parse archive settings from the host's JSON settings. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns `true` if blank-line runs should be collapsed.
    pub fn collapses_empty_lines(&self) -> bool {
        self.remove_empty_lines >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_indent_unit_falls_back() {
        let config = MergeConfig::default().with_indent_unit("");
        assert_eq!(config.indent_unit(), DEFAULT_INDENT_UNIT);
        assert_eq!(MergeConfig::default().indent_unit(), "  ");
        assert_eq!(
            MergeConfig::default().with_indent_unit("\t").indent_unit(),
            "\t"
        );
    }

    #[test]
    fn test_empty_separator_falls_back() {
        let config = MergeConfig::default().with_path_separator("");
        assert_eq!(config.path_separator(), ".");
    }

    #[test]
    fn test_merge_config_from_partial_json() {
        let config = MergeConfig::from_json(r#"{ "indentUnit": "    ", "rootIndentLevel": 1 }"#)
            .unwrap();
        assert_eq!(config.indent_unit(), "    ");
        assert_eq!(config.path_separator(), ".");
        assert_eq!(config.root_indent_level, 1);
    }

    #[test]
    fn test_archive_config_accepts_legacy_placement_names() {
        let config = ArchiveConfig::from_json(
            r#"{ "placement": "InSeparateFile", "sortByDate": true, "syntax": { "boxSymbol": "-" } }"#,
        )
        .unwrap();
        assert_eq!(config.placement, ArchivePlacement::SeparateFile);
        assert!(config.sort_by_date);
        assert_eq!(config.syntax.box_symbol, "-");
        assert_eq!(config.syntax.done_symbol, "✔");
        assert!(config.remove_empty_projects);
        assert!(config.collapses_empty_lines());
    }
}
