//! Checkout root and output path resolution.
//!
//! Xcode places Swift Package Manager checkouts next to the build products of
//! a derived-data folder:
//!
//! ```text
//! ~/Library/Developer/Xcode/DerivedData/App-abc/
//! ├── Build/Intermediates.noindex/App.build      <- PROJECT_TEMP_DIR
//! └── SourcePackages/checkouts/                  <- checkout root
//!     ├── swift-log/
//!     └── Alamofire/
//! ```
//!
//! The checkout root is therefore derived from the build temp directory by
//! cutting at the last `/Build/` segment.

use crate::constants::{BUILD_SEGMENT, CHECKOUTS_SUFFIX, default_document_file_name};
use crate::core::{AckGenError, Result};
use std::path::{Path, PathBuf};

/// Derive the package checkout root from the build temp directory.
///
/// Splits on the **last** `/Build/` so that a user or project folder named
/// `Build` higher up in the path does not truncate the result.
///
/// # Errors
///
/// Returns [`AckGenError::ConfigurationError`] when `temp_dir` contains no
/// `/Build/` segment.
///
/// # Examples
///
/// ```rust
/// use ackgen::resolver::checkout_root;
/// use std::path::PathBuf;
///
/// let root = checkout_root("/Users/x/DerivedData/App-1/Build/Intermediates/App.build").unwrap();
/// assert_eq!(root, PathBuf::from("/Users/x/DerivedData/App-1/SourcePackages/checkouts"));
/// ```
pub fn checkout_root(temp_dir: &str) -> Result<PathBuf> {
    let Some(index) = temp_dir.rfind(BUILD_SEGMENT) else {
        return Err(AckGenError::configuration(format!(
            "cannot determine checkout root: no '{BUILD_SEGMENT}' segment in {temp_dir}"
        )));
    };

    let root = format!("{}{CHECKOUTS_SUFFIX}", &temp_dir[..index]);
    tracing::debug!("Resolved checkout root {} from {}", root, temp_dir);
    Ok(PathBuf::from(root))
}

/// Resolve where the generated document is written.
///
/// An explicit path wins; otherwise the document goes to
/// `<source_root>/Acknowledgements.plist`.
#[must_use]
pub fn output_path(source_root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => source_root.join(default_document_file_name()),
    }
}
