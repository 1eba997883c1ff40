//! End-to-end tagging of word list files on disk

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wordlevel_core::document::temp_path_for;
use wordlevel_core::{Document, ErrorKind, SaveOptions, TagError, TagOptions, Tagger, tag};

fn write_list(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_tags_missing_levels_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_list(
        &dir,
        "c2.json",
        r#"[{"word":"apple"}, {"word":"zebra","level":"b1"}]"#,
    );

    let report = tag(&path, "c2").unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.updated, 1);
    assert_eq!(
        read(&path),
        "[\n    {\n        \"word\": \"apple\",\n        \"level\": \"c2\"\n    },\n    {\n        \"word\": \"zebra\",\n        \"level\": \"b1\"\n    }\n]"
    );
}

#[test]
fn test_second_run_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_list(
        &dir,
        "c2.json",
        r#"[{"word":"abate","type":"v.","meaning":"ลดลง, บรรเทา"},{"word":"aberration","level":"c1"}]"#,
    );

    tag(&path, "c2").unwrap();
    let first = read(&path);

    let report = tag(&path, "c2").unwrap();
    let second = read(&path);

    assert!(report.is_unchanged());
    assert_eq!(report.already_tagged, 2);
    assert_eq!(first, second);
}

#[test]
fn test_order_and_non_ascii_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_list(
        &dir,
        "c2.json",
        r#"[{"word":"c","meaning":"ค"},{"word":"a","meaning":"ก"},{"word":"b","meaning":"ข"}]"#,
    );

    tag(&path, "c2").unwrap();

    let document = Document::load(&path).unwrap();
    let words: Vec<&str> = document
        .entries()
        .iter()
        .map(|e| e["word"].as_str().unwrap())
        .collect();
    assert_eq!(words, ["c", "a", "b"]);
    assert!(document.entries().iter().all(|e| e["level"] == "c2"));

    let raw = read(&path);
    assert!(raw.contains("\"meaning\": \"ก\""));
    assert!(!raw.contains("\\u"));
}

#[test]
fn test_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_list(&dir, "c2.json", "[]");

    let report = tag(&path, "c2").unwrap();

    assert_eq!(report.total, 0);
    assert_eq!(read(&path), "[]");
}

#[test]
fn test_malformed_input_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let truncated = r#"[{"word":"apple"}, {"word":"#;
    let path = write_list(&dir, "c2.json", truncated);

    let err = tag(&path, "c2").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert!(matches!(&err, TagError::MalformedJson { path: p, .. } if p == &path));
    assert_eq!(read(&path), truncated);
}

#[test]
fn test_non_object_entry_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let contents = r#"[{"word":"apple"}, ["zebra"]]"#;
    let path = write_list(&dir, "c2.json", contents);

    let err = tag(&path, "c2").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert!(matches!(err, TagError::NotAnObject { index: 1, found: "array", .. }));
    assert_eq!(read(&path), contents);
}

#[test]
fn test_missing_file_is_reported_before_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("c2.json");

    let err = tag(&path, "c2").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert!(!path.exists());
}

#[test]
fn test_atomic_write_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_list(&dir, "b2.json", r#"[{"word":"apple"}]"#);

    tag(&path, "b2").unwrap();

    assert!(!temp_path_for(&path).exists());
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, ["b2.json"]);
}

#[test]
fn test_direct_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_list(&dir, "a1.json", r#"[{"word":"about"}]"#);

    let tagger = Tagger::new("level", "a1").unwrap().with_options(TagOptions {
        save: SaveOptions {
            indent: 2,
            atomic_write: false,
        },
        dry_run: false,
    });
    tagger.tag_file(&path).unwrap();

    assert_eq!(
        read(&path),
        "[\n  {\n    \"word\": \"about\",\n    \"level\": \"a1\"\n  }\n]"
    );
}

#[test]
fn test_dry_run_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    let contents = r#"[{"word":"apple"}]"#;
    let path = write_list(&dir, "c2.json", contents);

    let tagger = Tagger::new("level", "c2").unwrap().with_options(TagOptions {
        dry_run: true,
        ..TagOptions::default()
    });
    let report = tagger.tag_file(&path).unwrap();

    assert_eq!(report.updated, 1);
    assert_eq!(read(&path), contents);
}

#[test]
fn test_large_numbers_are_written_back_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_list(
        &dir,
        "c2.json",
        r#"[{"id":123456789012345678901234567890,"level":123456789012345678901234567890},{"rank":18446744073709551616,"freq":1e5}]"#,
    );

    let report = tag(&path, "c2").unwrap();
    assert_eq!(report.updated, 1);

    let raw = read(&path);
    assert!(raw.contains("\"id\": 123456789012345678901234567890"));
    assert!(raw.contains("\"level\": 123456789012345678901234567890"));
    assert!(raw.contains("\"rank\": 18446744073709551616"));
    assert!(raw.contains("\"freq\": 1e5"));
    assert!(raw.contains("\"level\": \"c2\""));
}

#[test]
fn test_failed_atomic_write_keeps_original() {
    let dir = tempfile::tempdir().unwrap();
    let contents = r#"[{"word":"apple"}]"#;
    let path = write_list(&dir, "c2.json", contents);

    // Occupy the temporary sibling so it cannot be created as a file
    let blocker = temp_path_for(&path);
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("keep"), "x").unwrap();

    let err = tag(&path, "c2").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, TagError::Write { .. }));
    assert_eq!(read(&path), contents);
    assert!(blocker.is_dir());

    let mut names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    names.sort();
    assert_eq!(names, [".c2.json.tmp", "c2.json"]);
}

#[test]
fn test_failed_rename_removes_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("c2.json");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep"), "x").unwrap();

    let document = Document::from_json(r#"[{"word":"apple"}]"#).unwrap();
    let err = document.save(&target, SaveOptions::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!temp_path_for(&target).exists());
    assert!(target.is_dir());
    assert_eq!(read(&target.join("keep")), "x");
}

#[test]
fn test_unreadable_path_is_file_not_found_class() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("c2.json");
    fs::create_dir(&path).unwrap();

    let err = tag(&path, "c2").unwrap_err();

    assert!(matches!(err, TagError::Read { .. }));
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
}

#[cfg(unix)]
#[test]
fn test_atomic_write_follows_symlink() {
    let dir = tempfile::tempdir().unwrap();
    let real = write_list(&dir, "words-c2.json", r#"[{"word":"apple"}]"#);
    let link = dir.path().join("c2.json");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    tag(&link, "c2").unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert!(read(&real).contains("\"level\": \"c2\""));
    assert!(!temp_path_for(&real).exists());
}
