#![warn(missing_docs)]
//! `outline-core-archive` - Archiving pipeline for todo outlines.
//!
//! Finished todos (and the comments attached to them) are removed from a live outline and merged
//! into an archive outline under the same chain of group headers they were nested in. The archive
//! is either a section at the end of the live outline ([`Archiver::archive_in_place`]) or a
//! separate outline ([`Archiver::archive_into`]); file naming for the latter follows
//! [`archive_file_name`].
//!
//! ```text
//!   live outline ──► plan (classify, walk, collect) ──► remove lines ──► remaining
//!                          │
//!                          └──► merge items ──► ArchiveMerger ──► archive
//! ```
//!
//! # Example
//!
//! ```rust
//! use outline_core_archive::Archiver;
//! use outline_core_lang::ArchiveConfig;
//!
//! let archiver = Archiver::new(ArchiveConfig::default()).unwrap();
//! let outcome = archiver.archive_into(
//!     "Home:\n  ☐ water plants\n  ✔ call plumber @done(2025-03-01)",
//!     "",
//! );
//!
//! assert_eq!(outcome.remaining, "Home:\n  ☐ water plants");
//! assert_eq!(
//!     outcome.archive.as_deref(),
//!     Some("Home:\n  ✔ call plumber @done(2025-03-01)")
//! );
//! ```

mod archiver;
pub mod dates;
mod error;
pub mod plan;

pub use archiver::{ArchiveOutcome, Archiver};
pub use error::ArchiveError;
pub use plan::{ArchiveEntry, ArchivePlan, EntryKind};

/// Name of the per-file archive for `source_file_name`: `ARCHIVE.<basename>`.
///
/// Directories are dropped and one leading dot of the basename is stripped, so `.todo` becomes
/// `ARCHIVE.todo` rather than `ARCHIVE..todo`.
pub fn archive_file_name(source_file_name: &str) -> String {
    let basename = source_file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(source_file_name);
    let basename = basename.strip_prefix('.').unwrap_or(basename);
    format!("ARCHIVE.{basename}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_file_name() {
        assert_eq!(archive_file_name("TODO"), "ARCHIVE.TODO");
        assert_eq!(archive_file_name("notes/work.todo"), "ARCHIVE.work.todo");
        assert_eq!(archive_file_name("C:\\todo\\.todo"), "ARCHIVE.todo");
        assert_eq!(archive_file_name("..hidden"), "ARCHIVE..hidden");
    }
}
