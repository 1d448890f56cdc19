//! Command-line interface for ackgen.
//!
//! Running `ackgen` without a subcommand generates the acknowledgements
//! document. This is how Xcode build phases and the package plugins invoke it,
//! with `SRCROOT` and `PROJECT_TEMP_DIR` set in the environment.
//!
//! # Usage
//!
//! ```bash
//! # Inside an Xcode build phase
//! ackgen
//!
//! # Explicit inputs and a Settings.bundle document
//! ackgen --source-root . --temp-dir "$PROJECT_TEMP_DIR" \
//!     --output Settings.bundle/Acknowledgements.plist --settings --title Licenses
//!
//! # Inspect a generated document
//! ackgen list Resources --licenses
//! ```
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Suppress all output except errors

mod generate;
mod list;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub use generate::GenerateCommand;
pub use list::{ListCommand, OutputFormat};

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter for the `ackgen` target
    pub log_level: String,

    /// Suppress informational output
    pub quiet: bool,
}

impl CliConfig {
    /// Install the tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the level chosen by the flags. Logs go
    /// to stderr so stdout stays clean for `list --format json`.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("ackgen={}", self.log_level))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}

/// Main CLI structure for ackgen.
#[derive(Parser)]
#[command(
    name = "ackgen",
    about = "Generate an acknowledgements plist from Swift Package Manager dependencies",
    version,
    long_about = "ackgen reads the license files of every package checked out by Swift Package Manager \
                  and writes them to a property list for an in-app acknowledgements screen or a Settings.bundle page."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateCommand,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the acknowledgements stored in a generated document
    List(ListCommand),
}

impl Cli {
    /// Execute the CLI with the parsed arguments.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(&config)
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            quiet: self.quiet,
        }
    }

    pub fn execute_with_config(self, config: &CliConfig) -> Result<()> {
        match self.command {
            Some(Commands::List(cmd)) => cmd.execute(self.generate.source_root()),
            None => self.generate.execute(config),
        }
    }
}
