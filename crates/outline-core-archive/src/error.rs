use outline_core_classify::ClassifyError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while setting up an [`Archiver`](crate::Archiver).
///
/// Archiving itself never fails once the archiver exists.
pub enum ArchiveError {
    #[error("settings parse error: {0}")]
    /// The JSON settings could not be parsed.
    Settings(#[from] serde_json::Error),

    #[error("classifier error: {0}")]
    /// The todo dialect could not be compiled.
    Classify(#[from] ClassifyError),

    #[error("invalid association tag '{keyword}': {source}")]
    /// The association tag keyword produced an invalid pattern.
    AssociationTag {
        /// The configured keyword.
        keyword: String,
        /// The compiler error.
        #[source]
        source: regex::Error,
    },
}
