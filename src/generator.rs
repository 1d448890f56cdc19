//! The acknowledgements pipeline: resolve, collect, encode.
//!
//! [`generate`] is a pure function of its [`GeneratorConfig`] and the files on
//! disk. It either writes a complete document or fails without touching the
//! output path.

use crate::collector::{DecodeWarning, collect_acknowledgements};
use crate::config::GeneratorConfig;
use crate::core::Result;
use crate::encoder::write_document;
use std::path::PathBuf;

/// Summary of a successful run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub output_path: PathBuf,
    pub checkout_root: PathBuf,
    /// Number of acknowledgements written
    pub count: usize,
    pub warnings: Vec<DecodeWarning>,
}

/// Generate the acknowledgements document described by `config`.
///
/// # Errors
///
/// - [`crate::core::AckGenError::ConfigurationError`] if the checkout root cannot be derived
/// - [`crate::core::AckGenError::DiscoveryError`] if the checkout root cannot be listed
/// - [`crate::core::AckGenError::NoAcknowledgements`] if no license was found
/// - [`crate::core::AckGenError::DocumentWriteError`] if the output cannot be written
pub fn generate(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let checkout_root = config.checkout_root()?;
    let output_path = config.output_path();
    tracing::debug!("Scanning {} for license files", checkout_root.display());

    let report = collect_acknowledgements(&checkout_root)?;
    write_document(&output_path, &report.acknowledgements, &config.shape)?;

    Ok(GenerationSummary {
        output_path,
        checkout_root,
        count: report.acknowledgements.len(),
        warnings: report.warnings,
    })
}
