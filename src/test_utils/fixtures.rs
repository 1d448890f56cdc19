//! Fixture for a derived-data folder with package checkouts.

use crate::config::GeneratorConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project and derived-data layout:
///
/// ```text
/// <tmp>/<parent>/App                                   source root
/// <tmp>/<parent>/DerivedData/App-1/Build/Intermediates.noindex/App.build   temp dir
/// <tmp>/<parent>/DerivedData/App-1/SourcePackages/checkouts
/// ```
pub struct DerivedDataFixture {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    source_root: PathBuf,
    temp_dir: PathBuf,
    checkouts: PathBuf,
}

impl DerivedDataFixture {
    /// Create the layout directly under a fresh temporary directory.
    pub fn new() -> Result<Self> {
        Self::under("work")
    }

    /// Create the layout below `parent`, e.g. `"Build/Projects"` to place a
    /// folder named `Build` above the derived-data folder.
    pub fn under(parent: &str) -> Result<Self> {
        let temp = TempDir::new().context("Failed to create temp directory")?;
        let base = temp.path().join(parent);
        let derived = base.join("DerivedData").join("App-1");
        let source_root = base.join("App");
        let temp_dir = derived.join("Build").join("Intermediates.noindex").join("App.build");
        let checkouts = derived.join("SourcePackages").join("checkouts");

        for dir in [&source_root, &temp_dir, &checkouts] {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        Ok(Self {
            _temp_dir: temp,
            source_root,
            temp_dir,
            checkouts,
        })
    }

    /// Write `file` with `content` into the checkout of package `name`.
    pub fn add_package(&self, name: &str, file: &str, content: &[u8]) -> Result<PathBuf> {
        let dir = self.checkouts.join(name);
        fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(file);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Create a package checkout without any license file.
    pub fn add_unlicensed_package(&self, name: &str) -> Result<PathBuf> {
        self.add_package(name, "Package.swift", b"// swift-tools-version:5.9\n")
    }

    /// Remove the checkouts directory entirely.
    pub fn remove_checkouts(&self) -> Result<()> {
        fs::remove_dir_all(&self.checkouts)
            .with_context(|| format!("Failed to remove {}", self.checkouts.display()))
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// The build temp directory as Xcode would pass it in `PROJECT_TEMP_DIR`.
    pub fn temp_dir(&self) -> String {
        self.temp_dir.display().to_string()
    }

    pub fn checkouts(&self) -> &Path {
        &self.checkouts
    }

    /// Default output location, `<source_root>/Acknowledgements.plist`.
    pub fn default_output(&self) -> PathBuf {
        self.source_root.join("Acknowledgements.plist")
    }

    /// Generator configuration for this layout.
    pub fn config(&self) -> crate::core::Result<GeneratorConfig> {
        GeneratorConfig::new(Some(self.source_root.clone()), Some(self.temp_dir()))
    }
}
