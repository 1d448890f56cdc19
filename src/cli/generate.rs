//! Generate the acknowledgements document.
//!
//! This is the default action of `ackgen`. Inputs come from flags, falling
//! back to the environment variables Xcode sets for build phases:
//!
//! | Flag | Environment | Purpose |
//! |------|-------------|---------|
//! | `--source-root` | `SRCROOT` | Project root, default output location |
//! | `--temp-dir` | `PROJECT_TEMP_DIR` | Locates `SourcePackages/checkouts` |
//!
//! # Examples
//!
//! ```bash
//! ackgen
//! ackgen -o Resources/Acknowledgements.plist
//! ackgen --settings --title Licenses -o Settings.bundle/Acknowledgements.plist
//! ```

use super::CliConfig;
use crate::config::GeneratorConfig;
use crate::constants::DEFAULT_GROUP_TITLE;
use crate::generator::generate;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Arguments of the generate action.
#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
    /// Project source root [default output: <SOURCE_ROOT>/Acknowledgements.plist]
    #[arg(long, env = "SRCROOT", value_name = "DIR")]
    source_root: Option<PathBuf>,

    /// Build temp directory containing a '/Build/' segment
    #[arg(long, env = "PROJECT_TEMP_DIR", value_name = "DIR")]
    temp_dir: Option<String>,

    /// Output path for the generated plist file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Generate Settings.bundle format
    #[arg(long)]
    settings: bool,

    /// Title for Settings.bundle (only used with --settings)
    #[arg(long, default_value = DEFAULT_GROUP_TITLE)]
    title: String,
}

impl GenerateCommand {
    /// Source root from flags or environment, if any.
    pub fn source_root(&self) -> Option<PathBuf> {
        self.source_root.clone()
    }

    /// Build the generator configuration from the parsed arguments.
    pub fn to_config(&self) -> crate::core::Result<GeneratorConfig> {
        let mut config = GeneratorConfig::new(self.source_root.clone(), self.temp_dir.clone())?;
        if let Some(output) = &self.output {
            config = config.with_output(output);
        }
        if self.settings {
            config = config.grouped(self.title.clone());
        }
        Ok(config)
    }

    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        if !cli.quiet {
            println!("Generating Acknowledgements file");
        }

        let config = self.to_config()?;
        let summary = generate(&config)?;

        tracing::info!(
            "Collected {} acknowledgements from {}",
            summary.count,
            summary.checkout_root.display()
        );

        // Plain prefix so Xcode's build log lists these as warnings
        for warning in &summary.warnings {
            eprintln!("warning: {warning}");
        }

        if !cli.quiet {
            println!(
                "{} Generated acknowledgements at: {}",
                "✓".green(),
                summary.output_path.display()
            );
        }

        Ok(())
    }
}
