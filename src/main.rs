//! ackgen CLI entry point
//!
//! Parses arguments, runs the requested command and turns failures into a
//! readable message with a non-zero exit status.

use ackgen::cli;
use ackgen::core::user_friendly_error;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
