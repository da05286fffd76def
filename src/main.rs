//! Binary entry point for hello-echo.
//!
//! Thin wrapper over the library: parse arguments, run the echo against
//! locked stdout, map the result to an exit status.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use hello_echo::cli::{Cli, execute};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match execute(&cli, &mut stdout) {
        Ok(()) => {
            // Handle broken pipe gracefully (e.g., when piped to `head`)
            if let Err(e) = stdout.flush()
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                eprintln!("Error: failed to write output: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
