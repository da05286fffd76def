//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::echo::DEFAULT_INPUT_PATH;
use crate::io::reader::DEFAULT_MAX_LINE_LEN;
use clap::Parser;
use std::path::PathBuf;

/// hello-echo: input echo utility for the HelloWorld challenge series.
///
/// Echoes a text file line by line under an `Input data:` header, then
/// prints the closing greeting. With no argument the compiled-in default
/// input file is used.
#[derive(Parser, Debug)]
#[command(name = "hello-echo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the input text file.
    ///
    /// Defaults to `input.txt` in the current directory.
    pub input: Option<PathBuf>,

    /// Maximum bytes of line content per output line.
    ///
    /// Lines longer than this print split across multiple output lines.
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LEN)]
    pub max_line_len: usize,
}

impl Cli {
    /// Returns the input path, using the default if none was given.
    #[must_use]
    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH))
    }
}
