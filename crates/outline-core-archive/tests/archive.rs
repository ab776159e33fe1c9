use outline_core_archive::{ArchiveError, Archiver};
use outline_core_lang::{ArchiveConfig, ArchivePlacement, TodoSyntax};
use pretty_assertions::assert_eq;

fn archiver() -> Archiver {
    Archiver::new(ArchiveConfig::default()).unwrap()
}

#[test]
fn test_in_place_merges_into_existing_archive_section() {
    let text = [
        "Home:",
        "  ☐ water plants",
        "  ✔ call plumber @done(2025-03-01)",
        "    - ask about sink",
        "Work:",
        "  ✔ report @done(2025-03-02)",
        "",
        "Archive:",
        "  Home:",
        "    ✔ old @done(2025-01-01)",
    ]
    .join("\n");

    let archived = archiver().archive_in_place(&text);

    let expected = [
        "Home:",
        "  ☐ water plants",
        "",
        "Archive:",
        "  Home:",
        "    ✔ call plumber @done(2025-03-01)",
        "      - ask about sink",
        "    ✔ old @done(2025-01-01)",
        "  Work:",
        "    ✔ report @done(2025-03-02)",
    ]
    .join("\n");
    assert_eq!(archived, expected);
}

#[test]
fn test_in_place_creates_archive_section_at_end() {
    let text = "Home:\n  ☐ a\n  ✔ b @done(2025-01-01)\n";

    let archived = archiver().archive_in_place(text);

    assert_eq!(
        archived,
        "Home:\n  ☐ a\n\nArchive:\n  Home:\n    ✔ b @done(2025-01-01)\n"
    );
}

#[test]
fn test_in_place_keeps_crlf() {
    let text = "Home:\r\n  ☐ a\r\n  ✔ b @done(2025-01-01)\r\nArchive:\r\n";

    let archived = archiver().archive_in_place(text);

    assert_eq!(
        archived,
        "Home:\r\n  ☐ a\r\nArchive:\r\n  Home:\r\n    ✔ b @done(2025-01-01)\r\n"
    );
}

#[test]
fn test_in_place_keeps_unicode_line_separators_inside_lines() {
    let text = "☐ keep \u{2028}note\n✔ ship @done(2025-01-01)\n☐ other";

    let archived = archiver().archive_in_place(text);

    assert_eq!(
        archived,
        "☐ keep \u{2028}note\n☐ other\nArchive:\n  ✔ ship @done(2025-01-01)\n"
    );
}

#[test]
fn test_separate_archive_keeps_unicode_line_separators_inside_lines() {
    let text = [
        "Home:",
        "  ☐ keep \u{2028}note",
        "  ✔ ship @done(2025-01-01)",
        "  ☐ form\u{c}feed and \u{85}next line",
    ]
    .join("\n");

    let outcome = archiver().archive_into(&text, "");

    assert_eq!(
        outcome.remaining,
        "Home:\n  ☐ keep \u{2028}note\n  ☐ form\u{c}feed and \u{85}next line"
    );
    assert_eq!(
        outcome.archive.as_deref(),
        Some("Home:\n  ✔ ship @done(2025-01-01)")
    );
}

#[test]
fn test_lines_below_archive_header_are_never_archived_again() {
    let text = "☐ keep\nArchive:\n  ✔ archived long ago @done(2024-01-01)";
    assert_eq!(archiver().archive_in_place(text), text);
}

#[test]
fn test_nothing_finished_leaves_texts_unchanged() {
    let text = "Home:\n  ☐ a\n    - note";
    let outcome = archiver().archive_into(text, "Old:\n  ✔ x");

    assert_eq!(outcome.remaining, text);
    assert_eq!(outcome.archive.as_deref(), Some("Old:\n  ✔ x"));
}

#[test]
fn test_nested_groups_are_recreated_in_separate_archive() {
    let text = "Work:\n  Reports:\n    ✔ q1 @done(2025-01-01)\n  ☐ email";

    let outcome = archiver().archive_into(text, "");

    assert_eq!(outcome.remaining, "Work:\n  ☐ email");
    assert_eq!(
        outcome.archive.as_deref(),
        Some("Work:\n  Reports:\n    ✔ q1 @done(2025-01-01)")
    );
}

#[test]
fn test_empty_group_loose_lines_follow_the_group() {
    let text = "Trip:\n  - passport in drawer\n  ✔ book hotel @done(2025-01-01)\nHome:\n  ☐ a";

    let outcome = archiver().archive_into(text, "");

    assert_eq!(outcome.remaining, "Home:\n  ☐ a");
    assert_eq!(
        outcome.archive.as_deref(),
        Some("Trip:\n  - passport in drawer\n  ✔ book hotel @done(2025-01-01)")
    );
}

#[test]
fn test_empty_groups_can_be_kept() {
    let config = ArchiveConfig {
        remove_empty_projects: false,
        ..ArchiveConfig::default()
    };
    let text = "Trip:\n  - passport in drawer\n  ✔ book hotel @done(2025-01-01)\nHome:\n  ☐ a";

    let outcome = Archiver::new(config).unwrap().archive_into(text, "");

    assert_eq!(outcome.remaining, "Trip:\n  - passport in drawer\nHome:\n  ☐ a");
    assert_eq!(
        outcome.archive.as_deref(),
        Some("Trip:\n  ✔ book hotel @done(2025-01-01)")
    );
}

#[test]
fn test_sort_by_date_puts_newest_first_and_undated_last() {
    let config = ArchiveConfig {
        sort_by_date: true,
        ..ArchiveConfig::default()
    };
    let text = "✔ old @done(2025-01-01)\n✔ undated\n✔ new @done(2025-02-01 09:30)";

    let outcome = Archiver::new(config).unwrap().archive_into(text, "");

    assert_eq!(outcome.remaining, "");
    assert_eq!(
        outcome.archive.as_deref(),
        Some("✔ new @done(2025-02-01 09:30)\n✔ old @done(2025-01-01)\n✔ undated")
    );
}

#[test]
fn test_line_order_without_date_sorting() {
    let text = "A:\n  ✔ first @done(2025-01-01)\n  ✔ second @done(2025-02-01)\n  ☐ open";

    let outcome = archiver().archive_into(text, "A:\n  ✔ older @done(2024-01-01)");

    assert_eq!(
        outcome.archive.as_deref(),
        Some("A:\n  ✔ first @done(2025-01-01)\n  ✔ second @done(2025-02-01)\n  ✔ older @done(2024-01-01)")
    );
}

#[test]
fn test_association_tags_are_stripped_from_existing_archive() {
    let existing = "Home:\n  ✔ old @done(2024-01-01) @project(Home)";
    let text = "Home:\n  ✔ new @done(2025-01-01) @project(Home)\n  ☐ open";

    let outcome = archiver().archive_into(text, existing);

    assert_eq!(
        outcome.archive.as_deref(),
        Some("Home:\n  ✔ new @done(2025-01-01)\n  ✔ old @done(2024-01-01)")
    );
}

#[test]
fn test_custom_symbols() {
    let config = ArchiveConfig {
        syntax: TodoSyntax::with_symbols("<>", "<o>", "<x>"),
        ..ArchiveConfig::default()
    };
    let text = "P:\n  <> open\n  <o> done\n  <x> dropped";

    let outcome = Archiver::new(config).unwrap().archive_into(text, "");

    assert_eq!(outcome.remaining, "P:\n  <> open");
    assert_eq!(outcome.archive.as_deref(), Some("P:\n  <o> done\n  <x> dropped"));
}

#[test]
fn test_placement_from_json_settings() {
    let archiver = Archiver::from_json(r#"{ "placement": "InSameFile" }"#).unwrap();
    assert_eq!(archiver.config().placement, ArchivePlacement::SameFile);

    let outcome = archiver.archive("☐ a\n✔ b", "ignored");
    assert_eq!(outcome.archive, None);
    assert_eq!(outcome.remaining, "☐ a\nArchive:\n  ✔ b\n");
}

#[test]
fn test_invalid_settings_are_reported() {
    assert!(matches!(
        Archiver::from_json("{ not json"),
        Err(ArchiveError::Settings(_))
    ));

    let config = ArchiveConfig {
        syntax: TodoSyntax {
            archive_name: String::new(),
            ..TodoSyntax::default()
        },
        ..ArchiveConfig::default()
    };
    assert!(matches!(Archiver::new(config), Err(ArchiveError::Classify(_))));
}
