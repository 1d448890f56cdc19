//! Loading acknowledgements documents for display.
//!
//! Apps embed the generated plist and show its contents in an about screen.
//! Loading never raises: a missing or unreadable document simply means there
//! is nothing to show. The reason is still available through [`LoadOutcome`]
//! for callers that want to report it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ackgen::reader::{DirectorySource, all};
//!
//! let source = DirectorySource::new("Resources");
//! for ack in all("Acknowledgements", &source) {
//!     println!("{}", ack.title);
//! }
//! ```

use crate::constants::DOCUMENT_EXTENSION;
use crate::encoder::decode;
use crate::models::{Acknowledgement, sort_acknowledgements};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Where documents are loaded from.
pub trait DocumentSource {
    /// Raw bytes of the document called `name` (without extension).
    fn load(&self, name: &str) -> io::Result<Vec<u8>>;
}

/// Reads `<dir>/<name>.plist` from a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
        }
    }

    /// Path a document name resolves to.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{DOCUMENT_EXTENSION}"))
    }
}

impl DocumentSource for DirectorySource {
    fn load(&self, name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.path_for(name))
    }
}

/// In-memory documents keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_document(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(name.into(), bytes.into());
        self
    }
}

impl DocumentSource for MemorySource {
    fn load(&self, name: &str) -> io::Result<Vec<u8>> {
        self.documents.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no document named {name}"))
        })
    }
}

/// Result of loading a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Decoded records, sorted by title ignoring case
    Loaded(Vec<Acknowledgement>),
    /// The source has no such document
    Missing {
        name: String,
    },
    /// The document exists but could not be read or decoded
    Malformed {
        name: String,
        reason: String,
    },
}

impl LoadOutcome {
    /// Records to display; empty unless the document loaded.
    #[must_use]
    pub fn into_acknowledgements(self) -> Vec<Acknowledgement> {
        match self {
            Self::Loaded(acknowledgements) => acknowledgements,
            Self::Missing { .. } | Self::Malformed { .. } => Vec::new(),
        }
    }
}

/// Load and decode the document `name` from `source`.
pub fn load_acknowledgements(name: &str, source: &dyn DocumentSource) -> LoadOutcome {
    let bytes = match source.load(name) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("Acknowledgements document '{}' not found", name);
            return LoadOutcome::Missing {
                name: name.to_string(),
            };
        }
        Err(e) => {
            return LoadOutcome::Malformed {
                name: name.to_string(),
                reason: e.to_string(),
            };
        }
    };

    match decode(&bytes) {
        Ok(document) => {
            let mut acknowledgements = document.into_acknowledgements();
            sort_acknowledgements(&mut acknowledgements);
            LoadOutcome::Loaded(acknowledgements)
        }
        Err(e) => {
            tracing::debug!("Acknowledgements document '{}' is malformed: {}", name, e);
            LoadOutcome::Malformed {
                name: name.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

/// All acknowledgements of document `name`, sorted; empty on any failure.
#[must_use]
pub fn all(name: &str, source: &dyn DocumentSource) -> Vec<Acknowledgement> {
    load_acknowledgements(name, source).into_acknowledgements()
}
