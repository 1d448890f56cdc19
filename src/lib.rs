//! ackgen - Acknowledgements generator for Swift Package Manager dependencies
//!
//! Apps must credit the open source packages they ship. ackgen collects the
//! license of every package Swift Package Manager has checked out for a
//! project and writes them into a single property list that an app can show
//! in an "Acknowledgements" screen or embed in its Settings.bundle.
//!
//! # Pipeline
//!
//! A run is a pure function of a [`config::GeneratorConfig`] and the
//! checkouts on disk:
//!
//! 1. [`resolver`] - derives `…/SourcePackages/checkouts` from the build temp directory
//! 2. [`collector`] - reads one license per dependency (`LICENSE`, `LICENSE.txt`, `LICENSE.md`)
//! 3. [`encoder`] - writes a flat or Settings.bundle plist atomically
//!
//! [`generator::generate`] chains the three stages. [`reader`] is the
//! consumer side: it loads a generated document back, sorted by title.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - Explicit run configuration
//! - [`constants`] - File names, path segments and plist keys
//! - [`core`] - Error types and user-facing error reporting
//! - [`models`] - Acknowledgement records and document shapes
//! - [`utils`] - Atomic file writes
//!
//! # Example
//!
//! ```rust,no_run
//! use ackgen::config::GeneratorConfig;
//! use ackgen::generator::generate;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GeneratorConfig::new(
//!     Some("/Users/me/App".into()),
//!     Some("/Users/me/DerivedData/App-abc/Build/Intermediates.noindex/App.build".to_string()),
//! )?;
//! let summary = generate(&config)?;
//! println!("Wrote {} acknowledgements to {}", summary.count, summary.output_path.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod constants;
pub mod core;
pub mod encoder;
pub mod generator;
pub mod models;
pub mod reader;
pub mod resolver;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
