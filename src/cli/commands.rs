//! CLI command implementation.
//!
//! Glue between the parsed arguments and the echo operation.

use crate::cli::parser::Cli;
use crate::echo::{self, EchoOptions};
use crate::error::Result;
use std::io::Write;

/// Executes the echo run described by the parsed arguments.
///
/// Resolves the input path, validates the options, and echoes the file
/// to `out`. A broken pipe on the output stream (e.g. the run is piped
/// into `head` and the reader went away) is reported as an error so the
/// entry point can decide to treat it as a clean early stop.
///
/// # Errors
///
/// Returns configuration errors for invalid option values and I/O errors
/// from the echo run.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let options = EchoOptions::new(cli.max_line_len)?;
    echo::run(&cli.input_path(), &options, out)
}
