use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while building a [`TodoClassifier`](crate::TodoClassifier).
pub enum ClassifyError {
    #[error("regex compile error for {role} pattern '{pattern}': {source}")]
    /// A generated pattern failed to compile.
    RegexCompile {
        /// Which line kind the pattern recognizes.
        role: &'static str,
        /// The pattern string.
        pattern: String,
        /// The compiler error.
        #[source]
        source: regex::Error,
    },

    #[error("archive name must not be empty")]
    /// The configured archive section name was empty.
    EmptyArchiveName,
}
