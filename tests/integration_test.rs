//! Integration tests for hello-echo.

#![allow(clippy::expect_used)]

use hello_echo::echo::{self, EchoOptions};
use hello_echo::{Error, IoError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const CLOSING: &str = "\nHello, World!\n-From Rust\n";

/// Helper to create a temp input file with the given content.
fn write_input(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content).expect("Failed to write input");
    file.flush().expect("Failed to flush input");
    file
}

fn run_to_string(path: &Path, options: &EchoOptions) -> String {
    let mut out = Vec::new();
    echo::run(path, options, &mut out).expect("echo run failed");
    String::from_utf8(out).expect("output should be UTF-8")
}

#[test]
fn test_echoes_lines_in_order() {
    let file = write_input(b"foo\nbar\n");
    let output = run_to_string(file.path(), &EchoOptions::default());
    assert_eq!(output, format!("Input data:\nfoo\nbar\n{CLOSING}"));
}

#[test]
fn test_empty_file() {
    let file = write_input(b"");
    let output = run_to_string(file.path(), &EchoOptions::default());
    assert_eq!(output, format!("Input data:\n{CLOSING}"));
}

#[test]
fn test_idempotent_over_unmodified_file() {
    let file = write_input(b"alpha\nbeta\ngamma\n");
    let options = EchoOptions::default();
    let first = run_to_string(file.path(), &options);
    let second = run_to_string(file.path(), &options);
    assert_eq!(first, second);
}

#[test]
fn test_line_at_cap_prints_intact() {
    let line = "x".repeat(8);
    let file = write_input(format!("{line}\n").as_bytes());
    let options = EchoOptions::new(8).expect("valid cap");
    let output = run_to_string(file.path(), &options);
    assert_eq!(output, format!("Input data:\n{line}\n{CLOSING}"));
}

#[test]
fn test_line_over_cap_splits() {
    let line = "x".repeat(9);
    let file = write_input(format!("{line}\n").as_bytes());
    let options = EchoOptions::new(8).expect("valid cap");
    let output = run_to_string(file.path(), &options);
    assert_eq!(output, format!("Input data:\nxxxxxxxx\nx\n{CLOSING}"));
}

#[test]
fn test_unterminated_final_line() {
    let file = write_input(b"foo\nbar");
    let output = run_to_string(file.path(), &EchoOptions::default());
    assert_eq!(output, format!("Input data:\nfoo\nbar\n{CLOSING}"));
}

#[test]
fn test_unicode_content() {
    let file = write_input("héllo wörld\n世界\n".as_bytes());
    let output = run_to_string(file.path(), &EchoOptions::default());
    assert_eq!(output, format!("Input data:\nhéllo wörld\n世界\n{CLOSING}"));
}

#[test]
fn test_missing_file_is_open_error() {
    let mut out = Vec::new();
    let err = echo::run(
        Path::new("definitely-not-here.txt"),
        &EchoOptions::default(),
        &mut out,
    )
    .expect_err("missing file should fail");

    match err {
        Error::Io(IoError::OpenFailed { path, reason }) => {
            assert_eq!(path, "definitely-not-here.txt");
            assert!(!reason.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(out.is_empty());
}

#[test]
fn test_invalid_utf8_input_fails() {
    let file = write_input(&[b'o', b'k', b'\n', 0xFF, 0xFE, b'\n']);
    let mut out = Vec::new();
    let err = echo::run(file.path(), &EchoOptions::default(), &mut out)
        .expect_err("invalid UTF-8 should fail");
    assert!(matches!(err, Error::Io(IoError::InvalidUtf8 { offset: 3, .. })));
}
