//! # hello-echo
//!
//! Input echo utility for the HelloWorld challenge series.
//!
//! Opens a text file (path from the command line, else a compiled-in
//! default), echoes it line by line under an `Input data:` header, then
//! prints a fixed closing greeting annotated with the language name. On
//! open failure the OS error is reported and the process exits non-zero.
//!
//! ## Behavior notes
//!
//! - Line reading is lazy and bounded: each read/print cycle holds at
//!   most `max_line_len` bytes, and longer lines print split across
//!   multiple output lines, with cuts kept on UTF-8 grapheme boundaries.
//! - Library code never exits the process; everything returns [`Result`]
//!   up to the binary entry point.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod echo;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, IoError, Result};

// Re-export echo domain types
pub use echo::{DEFAULT_INPUT_PATH, EchoOptions, GREETING, INPUT_HEADER, LANGUAGE, run};

// Re-export I/O types
pub use io::{DEFAULT_MAX_LINE_LEN, LineReader, LineSegment, MIN_LINE_CAP};

// Re-export CLI types
pub use cli::{Cli, execute};
