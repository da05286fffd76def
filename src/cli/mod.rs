//! CLI layer for hello-echo.
//!
//! Provides the command-line interface using clap and the glue that runs
//! the echo operation from parsed arguments.

pub mod commands;
pub mod parser;

pub use commands::execute;
pub use parser::Cli;
