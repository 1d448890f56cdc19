//! License discovery inside the package checkout root.
//!
//! Every immediate, non-hidden subdirectory of the checkout root is one
//! dependency. Each dependency contributes at most one [`Acknowledgement`],
//! read from the first of [`LICENSE_CANDIDATES`] that exists and is valid
//! UTF-8 text. A candidate that cannot be decoded produces a [`DecodeWarning`]
//! and probing moves on to the next name; the run itself never fails because
//! of a single unreadable license.

use crate::constants::LICENSE_CANDIDATES;
use crate::core::{AckGenError, Result};
use crate::models::{Acknowledgement, sort_acknowledgements};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A license candidate that exists but could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeWarning {
    /// Dependency directory name
    pub dependency: String,
    /// Candidate file name, e.g. `LICENSE.txt`
    pub file: String,
    pub reason: String,
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipping {}/{} - {}", self.dependency, self.file, self.reason)
    }
}

/// License text selected for one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseFile {
    /// Which candidate was accepted
    pub file_name: &'static str,
    pub text: String,
}

/// Result of scanning a checkout root.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub checkout_root: PathBuf,
    /// One record per dependency, sorted by title
    pub acknowledgements: Vec<Acknowledgement>,
    /// Candidates that were skipped along the way
    pub warnings: Vec<DecodeWarning>,
}

/// Scan `checkout_root` and build one acknowledgement per dependency.
///
/// # Errors
///
/// - [`AckGenError::DiscoveryError`] if the checkout root cannot be listed
/// - [`AckGenError::NoAcknowledgements`] if no dependency has a usable license
pub fn collect_acknowledgements(checkout_root: &Path) -> Result<CollectionReport> {
    let dependencies = list_dependencies(checkout_root)?;
    tracing::debug!(
        "Found {} dependency directories in {}",
        dependencies.len(),
        checkout_root.display()
    );

    let mut acknowledgements = Vec::with_capacity(dependencies.len());
    let mut warnings = Vec::new();

    for dependency in dependencies {
        let dependency_dir = checkout_root.join(&dependency);
        match read_license(&dependency, &dependency_dir, &mut warnings) {
            Some(license) => {
                tracing::debug!("Using {}/{}", dependency, license.file_name);
                acknowledgements.push(Acknowledgement::new(dependency, license.text));
            }
            None => tracing::debug!("No usable license file in {}, skipping", dependency),
        }
    }

    if acknowledgements.is_empty() {
        return Err(AckGenError::NoAcknowledgements {
            path: checkout_root.display().to_string(),
        });
    }

    sort_acknowledgements(&mut acknowledgements);

    Ok(CollectionReport {
        checkout_root: checkout_root.to_path_buf(),
        acknowledgements,
        warnings,
    })
}

/// Find the license of a single dependency.
///
/// Candidates are probed in precedence order and probing stops at the first
/// one that decodes. Candidates that exist but cannot be read or decoded are
/// appended to `warnings` for the caller to report.
pub fn read_license(
    dependency: &str,
    dependency_dir: &Path,
    warnings: &mut Vec<DecodeWarning>,
) -> Option<LicenseFile> {
    for file_name in LICENSE_CANDIDATES {
        let path = dependency_dir.join(file_name);
        if !path.is_file() {
            continue;
        }

        let reason = match fs::read(&path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => {
                    return Some(LicenseFile {
                        file_name,
                        text,
                    });
                }
                Err(_) => "invalid UTF-8 encoding".to_string(),
            },
            Err(e) => e.to_string(),
        };

        let warning = DecodeWarning {
            dependency: dependency.to_string(),
            file: file_name.to_string(),
            reason,
        };
        tracing::debug!("{}", warning);
        warnings.push(warning);
    }

    None
}

/// Names of the dependency directories under `checkout_root`, sorted.
fn list_dependencies(checkout_root: &Path) -> Result<Vec<String>> {
    let discovery_error = |e: std::io::Error| AckGenError::DiscoveryError {
        path: checkout_root.display().to_string(),
        reason: e.to_string(),
    };

    let mut dependencies = Vec::new();
    for entry in fs::read_dir(checkout_root).map_err(discovery_error)? {
        let entry = entry.map_err(discovery_error)?;

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!("Skipping non UTF-8 entry {}", entry.path().display());
            continue;
        };

        if name.starts_with('.') || !entry.path().is_dir() {
            continue;
        }

        dependencies.push(name);
    }

    dependencies.sort();
    Ok(dependencies)
}
