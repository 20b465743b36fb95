// Tests for the hash report writer

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};
use hash_replicable::hash::{report_file_name, HashResult, HashUtilityError, ReportWriter};
use tempfile::tempdir;

fn sample_result(path: &str) -> HashResult {
    HashResult {
        file_path: PathBuf::from(path),
        hash: "ab".repeat(32),
        size: 3,
        blocks: 1,
    }
}

#[test]
fn test_report_file_name() {
    let ts = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
    assert_eq!(
        report_file_name(Path::new("/data/movie.final.mkv"), ts),
        "hash_movie.final_20240309_070501.txt"
    );
    assert_eq!(
        report_file_name(Path::new("archive"), ts),
        "hash_archive_20240309_070501.txt"
    );
}

#[test]
fn test_write_report_creates_directory() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("nested").join("reports");
    let writer = ReportWriter::new(&out);
    let ts = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let report = writer.write_at(&sample_result("/tmp/input.bin"), ts).unwrap();

    assert_eq!(report, out.join("hash_input_20250102_030405.txt"));
    let content = fs::read_to_string(&report).unwrap();
    assert_eq!(
        content,
        format!("File path: /tmp/input.bin\nGenerated hash: {}\n", "ab".repeat(32))
    );
}

#[test]
fn test_write_report_with_current_time() {
    let dir = tempdir().unwrap();
    let writer = ReportWriter::new(dir.path());

    let report = writer.write(&sample_result("notes.txt")).unwrap();

    assert_eq!(report.parent(), Some(dir.path()));
    let name = report.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("hash_notes_"));
    assert!(name.ends_with(".txt"));
}

#[test]
fn test_write_report_into_file_fails() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, b"x").unwrap();

    let writer = ReportWriter::new(&blocker);
    match writer.write(&sample_result("a.bin")) {
        Err(HashUtilityError::ReportWriteError { path, .. }) => assert_eq!(path, blocker),
        other => panic!("Expected ReportWriteError, got {:?}", other),
    }
}
