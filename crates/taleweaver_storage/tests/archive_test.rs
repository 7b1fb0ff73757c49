//! Tests for the transcript archive.

use chrono::{Local, TimeZone};
use taleweaver_error::{StorageErrorKind, TaleweaverErrorKind};
use taleweaver_storage::TranscriptArchive;
use tempfile::TempDir;

fn fixed_time() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 15, 14, 25, 30).unwrap()
}

#[test]
fn test_save_writes_timestamped_file() {
    let temp = TempDir::new().unwrap();
    let archive = TranscriptArchive::new(temp.path());

    let path = archive.save_at("用户: 雨夜\n\n助手: 故事开始了。", fixed_time()).unwrap();

    assert_eq!(path.file_name().unwrap(), "story_20240315_142530.txt");
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "用户: 雨夜\n\n助手: 故事开始了。");
}

#[test]
fn test_save_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("stories").join("archive");
    let archive = TranscriptArchive::new(&nested);

    let path = archive.save("A tale.").unwrap();

    assert!(nested.is_dir());
    assert!(path.starts_with(&nested));
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("story_"));
    assert!(name.ends_with(".txt"));
    // story_ + YYYYMMDD_HHMMSS + .txt
    assert_eq!(name.len(), 6 + 15 + 4);
}

#[test]
fn test_same_second_saves_do_not_overwrite() {
    let temp = TempDir::new().unwrap();
    let archive = TranscriptArchive::new(temp.path());

    let first = archive.save_at("first", fixed_time()).unwrap();
    let second = archive.save_at("second", fixed_time()).unwrap();

    assert_ne!(first, second);
    assert_eq!(second.file_name().unwrap(), "story_20240315_142530_1.txt");
    assert_eq!(std::fs::read_to_string(first).unwrap(), "first");
    assert_eq!(std::fs::read_to_string(second).unwrap(), "second");
}

#[test]
fn test_empty_text_is_refused_without_touching_disk() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("never-created");
    let archive = TranscriptArchive::new(&dir);

    let err = archive.save("  \n ").unwrap_err();

    match err.kind() {
        TaleweaverErrorKind::Storage(e) => assert_eq!(e.kind, StorageErrorKind::EmptyTranscript),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!dir.exists());
}

#[test]
fn test_unwritable_location_reports_directory_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("occupied");
    std::fs::write(&blocker, "not a directory").unwrap();
    let archive = TranscriptArchive::new(blocker.join("stories"));

    let err = archive.save("text").unwrap_err();

    assert!(matches!(
        err.kind(),
        TaleweaverErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::DirectoryCreation(_))
    ));
}
