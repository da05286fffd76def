//! The echo operation: header line, bounded line loop, closing greeting.
//!
//! Output goes to a caller-supplied [`Write`] sink so the operation is
//! testable without spawning a process; only the binary entry point
//! touches real stdout and the exit status.

use crate::error::{Error, IoError, Result};
use crate::io::reader::{DEFAULT_MAX_LINE_LEN, LineReader, MIN_LINE_CAP};
use std::io::{BufRead, Write};
use std::path::Path;

/// Header line printed before the echoed input.
pub const INPUT_HEADER: &str = "Input data:";

/// Closing greeting text.
pub const GREETING: &str = "Hello, World!";

/// Language name annotated under the greeting.
pub const LANGUAGE: &str = "Rust";

/// Input file used when the command line names none.
pub const DEFAULT_INPUT_PATH: &str = "input.txt";

/// Options for an echo run.
///
/// # Examples
///
/// ```
/// use hello_echo::echo::EchoOptions;
///
/// let options = EchoOptions::new(128).unwrap();
/// assert_eq!(options.max_line_len(), 128);
/// assert!(EchoOptions::new(0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoOptions {
    /// Maximum bytes of line content per read/print cycle.
    max_line_len: usize,
}

impl Default for EchoOptions {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl EchoOptions {
    /// Creates options with the given line cap.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the cap is below
    /// [`MIN_LINE_CAP`].
    pub fn new(max_line_len: usize) -> Result<Self> {
        if max_line_len < MIN_LINE_CAP {
            return Err(Error::Config {
                message: format!(
                    "max line length must be at least {MIN_LINE_CAP}, got {max_line_len}"
                ),
            });
        }
        Ok(Self { max_line_len })
    }

    /// Returns the line cap in bytes.
    #[must_use]
    pub const fn max_line_len(&self) -> usize {
        self.max_line_len
    }
}

/// Echoes the file at `path` to `out`, then writes the closing greeting.
///
/// The file handle lives only for the duration of the line loop and is
/// released on success and error paths alike.
///
/// # Errors
///
/// Returns [`IoError::OpenFailed`] when the file cannot be opened, and
/// read/write errors from the line loop.
pub fn run<W: Write>(path: &Path, options: &EchoOptions, out: &mut W) -> Result<()> {
    let reader = LineReader::open(path, options.max_line_len())?;
    echo_lines(reader, out)
}

/// Echoes an already-open line sequence to `out`.
///
/// Writes the [`INPUT_HEADER`] line, one output line per segment (so an
/// overlong input line prints split across several output lines), and
/// finally the greeting block.
///
/// # Errors
///
/// Propagates read errors from the sequence and write errors from `out`.
pub fn echo_lines<R: BufRead, W: Write>(lines: LineReader<R>, out: &mut W) -> Result<()> {
    write_line(out, INPUT_HEADER)?;
    for segment in lines {
        write_line(out, &segment?.text)?;
    }
    write_greeting(out)
}

/// Writes the fixed closing greeting block.
fn write_greeting<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "\n{GREETING}\n-From {LANGUAGE}\n").map_err(to_write_error)
}

fn write_line<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{text}").map_err(to_write_error)
}

fn to_write_error(source: std::io::Error) -> Error {
    IoError::WriteFailed { source }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn echo_str(input: &str, cap: usize) -> String {
        let mut out = Vec::new();
        let reader = LineReader::from_reader(Cursor::new(input.to_string()), cap);
        echo_lines(reader, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_two_line_scenario() {
        assert_eq!(
            echo_str("foo\nbar\n", 256),
            "Input data:\nfoo\nbar\n\nHello, World!\n-From Rust\n"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            echo_str("", 256),
            "Input data:\n\nHello, World!\n-From Rust\n"
        );
    }

    #[test]
    fn test_overlong_line_prints_as_two_lines() {
        assert_eq!(
            echo_str("xxxxx\n", 4),
            "Input data:\nxxxx\nx\n\nHello, World!\n-From Rust\n"
        );
    }

    #[test]
    fn test_options_validation() {
        assert!(EchoOptions::new(MIN_LINE_CAP).is_ok());
        let err = EchoOptions::new(3).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_default_options() {
        assert_eq!(EchoOptions::default().max_line_len(), DEFAULT_MAX_LINE_LEN);
    }

    #[test]
    fn test_run_missing_file() {
        let mut out = Vec::new();
        let err = run(
            Path::new("no-such-input.txt"),
            &EchoOptions::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io(IoError::OpenFailed { .. })));
        // nothing written before the failure
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_failure_surfaces() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "pipe closed",
                ))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let reader = LineReader::from_reader(Cursor::new("foo\n".to_string()), 256);
        let err = echo_lines(reader, &mut FailingSink).unwrap_err();
        assert!(err.is_broken_pipe());
    }
}
