// Tests for error module

use hash_replicable::hash::HashUtilityError;
use std::error::Error;
use std::io;
use std::path::PathBuf;

#[test]
fn test_file_not_found_error_display() {
    let error = HashUtilityError::FileNotFound {
        path: PathBuf::from("/path/to/file.bin"),
    };
    let message = format!("{}", error);
    assert!(message.contains("File not found"));
    assert!(message.contains("/path/to/file.bin"));
    assert!(message.contains("Suggestion"));
}

#[test]
fn test_permission_denied_error_display() {
    let error = HashUtilityError::PermissionDenied {
        path: PathBuf::from("/protected/file.bin"),
        operation: "reading".to_string(),
    };
    let message = format!("{}", error);
    assert!(message.contains("Permission denied"));
    assert!(message.contains("reading"));
    assert!(message.contains("/protected/file.bin"));
}

#[test]
fn test_file_too_small_display_uses_human_sizes() {
    let error = HashUtilityError::FileTooSmall {
        path: PathBuf::from("tiny.bin"),
        size: 2048,
        minimum: 1024 * 1024,
    };
    let message = format!("{}", error);
    assert!(message.contains("tiny.bin"));
    assert!(message.contains("2 KiB"));
    assert!(message.contains("1 MiB"));
    assert!(message.contains("--min-size"));
}

#[test]
fn test_config_parse_error_display() {
    let error = HashUtilityError::ConfigParseError {
        path: PathBuf::from("config.toml"),
        reason: "expected a value".to_string(),
    };
    let message = format!("{}", error);
    assert!(message.contains("config.toml"));
    assert!(message.contains("expected a value"));
    assert!(message.contains("TOML"));
}

#[test]
fn test_io_error_with_path() {
    let io_err = io::Error::new(io::ErrorKind::Other, "disk full");
    let error = HashUtilityError::IoError {
        path: Some(PathBuf::from("input.bin")),
        operation: "reading".to_string(),
        source: io_err,
    };
    let message = format!("{}", error);
    assert!(message.contains("I/O error"));
    assert!(message.contains("reading"));
    assert!(message.contains("input.bin"));
    assert!(error.source().is_some());
}

#[test]
fn test_io_error_without_path() {
    let io_err = io::Error::new(io::ErrorKind::Other, "unknown error");
    let error = HashUtilityError::IoError {
        path: None,
        operation: "reading from stdin".to_string(),
        source: io_err,
    };
    let message = format!("{}", error);
    assert!(message.contains("I/O error while reading from stdin"));
    assert!(!message.contains("file /"));
}

#[test]
fn test_from_io_error_not_found() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");
    let error = HashUtilityError::from_io_error(io_err, "reading", Some(PathBuf::from("a.bin")));
    assert!(matches!(error, HashUtilityError::FileNotFound { .. }));
}

#[test]
fn test_from_io_error_permission_denied() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let error = HashUtilityError::from_io_error(io_err, "reading", Some(PathBuf::from("a.bin")));
    match error {
        HashUtilityError::PermissionDenied { operation, .. } => assert_eq!(operation, "reading"),
        other => panic!("Expected PermissionDenied, got {:?}", other),
    }
}

#[test]
fn test_from_io_error_without_path_keeps_source() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");
    let error = HashUtilityError::from_io_error(io_err, "reading from stdin", None);
    match error {
        HashUtilityError::IoError { path, source, .. } => {
            assert!(path.is_none());
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("Expected IoError, got {:?}", other),
    }
}

#[test]
fn test_from_trait() {
    let io_err = io::Error::new(io::ErrorKind::Other, "boom");
    let error: HashUtilityError = io_err.into();
    match error {
        HashUtilityError::IoError { operation, .. } => assert_eq!(operation, "unknown operation"),
        other => panic!("Expected IoError, got {:?}", other),
    }
}

#[test]
fn test_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<HashUtilityError>();
}
