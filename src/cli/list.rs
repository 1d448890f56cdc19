//! List the acknowledgements stored in a generated document.
//!
//! This is the command-line counterpart of an in-app acknowledgements screen:
//! it loads a document through [`crate::reader`] and prints its entries sorted
//! by title. Missing or unreadable documents produce an empty listing, never
//! a failure.
//!
//! # Examples
//!
//! ```bash
//! # <SRCROOT>/Acknowledgements.plist
//! ackgen list
//!
//! # Resources/Credits.plist with license bodies
//! ackgen list Resources --name Credits --licenses
//!
//! # Machine-readable output
//! ackgen list --format json
//! ```

use crate::constants::DEFAULT_DOCUMENT_NAME;
use crate::models::Acknowledgement;
use crate::reader::{DirectorySource, LoadOutcome, load_acknowledgements};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

/// Output format of `ackgen list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One title per line
    #[default]
    Text,
    /// JSON array of `{title, license}` objects
    Json,
}

/// Arguments of `ackgen list`.
#[derive(Args, Debug, Clone)]
pub struct ListCommand {
    /// Directory containing the document [default: SRCROOT or the current directory]
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Document name without the .plist extension
    #[arg(long, default_value = DEFAULT_DOCUMENT_NAME)]
    name: String,

    /// Print each license body under its title
    #[arg(long)]
    licenses: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl ListCommand {
    pub fn execute(self, source_root: Option<PathBuf>) -> Result<()> {
        let dir = self.dir.clone().or(source_root).unwrap_or_else(|| PathBuf::from("."));
        let source = DirectorySource::new(&dir);

        let acknowledgements = match load_acknowledgements(&self.name, &source) {
            LoadOutcome::Loaded(acknowledgements) => acknowledgements,
            LoadOutcome::Missing { .. } => {
                eprintln!(
                    "{} No acknowledgements document at {}",
                    "!".yellow(),
                    source.path_for(&self.name).display()
                );
                Vec::new()
            }
            LoadOutcome::Malformed { reason, .. } => {
                eprintln!(
                    "{} Could not read {}: {}",
                    "!".yellow(),
                    source.path_for(&self.name).display(),
                    reason
                );
                Vec::new()
            }
        };

        print!("{}", self.render(&acknowledgements)?);
        Ok(())
    }

    /// Render the listing in the selected format.
    pub fn render(&self, acknowledgements: &[Acknowledgement]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(acknowledgements)
                    .context("Failed to serialize acknowledgements as JSON")?;
                Ok(format!("{json}\n"))
            }
            OutputFormat::Text => {
                let mut output = String::new();
                for ack in acknowledgements {
                    output.push_str(&ack.title);
                    output.push('\n');
                    if self.licenses {
                        output.push('\n');
                        output.push_str(ack.license.trim_end());
                        output.push_str("\n\n");
                    }
                }
                Ok(output)
            }
        }
    }
}
