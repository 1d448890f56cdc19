//! Generator configuration
//!
//! A [`GeneratorConfig`] holds every input of a run. The CLI fills it from
//! flags and the `SRCROOT` / `PROJECT_TEMP_DIR` environment variables that
//! Xcode build phases and package plugins provide; library callers and tests
//! construct it directly, so the pipeline never reads the process environment.
//!
//! # Example
//!
//! ```rust,no_run
//! use ackgen::config::GeneratorConfig;
//!
//! # fn example() -> ackgen::core::Result<()> {
//! let config = GeneratorConfig::new(
//!     Some("/Users/me/App".into()),
//!     Some("/Users/me/DerivedData/App-abc/Build/Intermediates.noindex/App.build".to_string()),
//! )?
//! .with_output("/Users/me/App/Resources/Acknowledgements.plist")
//! .grouped("Licenses");
//! # Ok(())
//! # }
//! ```

use crate::constants::{SOURCE_ROOT_ENV, TEMP_DIR_ENV};
use crate::core::{AckGenError, Result};
use crate::models::DocumentShape;
use crate::resolver;
use std::path::PathBuf;

/// Inputs of a single generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Project source root; the default output location
    pub source_root: PathBuf,
    /// Build temp directory, used only to locate the checkouts
    pub temp_dir: String,
    /// Explicit output file, overriding `<source_root>/Acknowledgements.plist`
    pub output_path: Option<PathBuf>,
    pub shape: DocumentShape,
}

impl GeneratorConfig {
    /// Validate the two required inputs.
    ///
    /// # Errors
    ///
    /// [`AckGenError::ConfigurationError`] if either input is missing or empty.
    pub fn new(source_root: Option<PathBuf>, temp_dir: Option<String>) -> Result<Self> {
        let source_root = source_root.filter(|p| !p.as_os_str().is_empty()).ok_or_else(|| {
            AckGenError::configuration(format!(
                "Could not detect the source root directory ({SOURCE_ROOT_ENV} environment variable not set)"
            ))
        })?;

        let temp_dir = temp_dir.filter(|t| !t.is_empty()).ok_or_else(|| {
            AckGenError::configuration(format!(
                "Could not detect the project's temp directory ({TEMP_DIR_ENV} environment variable not set)"
            ))
        })?;

        Ok(Self {
            source_root,
            temp_dir,
            output_path: None,
            shape: DocumentShape::Flat,
        })
    }

    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Switch to the grouped (Settings.bundle) shape with `title`.
    #[must_use]
    pub fn grouped(mut self, title: impl Into<String>) -> Self {
        self.shape = DocumentShape::Grouped {
            title: title.into(),
        };
        self
    }

    /// Checkout root derived from the temp directory.
    pub fn checkout_root(&self) -> Result<PathBuf> {
        resolver::checkout_root(&self.temp_dir)
    }

    /// Where the document will be written.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        resolver::output_path(&self.source_root, self.output_path.as_deref())
    }
}
