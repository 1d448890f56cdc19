//! Data models for acknowledgement documents
//!
//! An [`Acknowledgement`] is one dependency's attribution entry. Documents come
//! in two shapes:
//!
//! - **Flat**: a plist array of `{title, license}` dictionaries
//! - **Grouped**: a Settings.bundle style [`StringsTable`] whose
//!   `PreferenceSpecifiers` array holds [`GroupEntry`] dictionaries
//!
//! The plist keys used here are read by apps at runtime and must stay stable.

use crate::constants::GROUP_ENTRY_TYPE;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One dependency's attribution entry.
///
/// Acknowledgements order case-insensitively by title. Titles that differ only
/// in case fall back to the exact title and then the license text, so the order
/// is total and agrees with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Dependency name, taken from its checkout directory
    pub title: String,
    /// Full license text
    pub license: String,
}

impl Acknowledgement {
    pub fn new(title: impl Into<String>, license: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            license: license.into(),
        }
    }
}

impl Ord for Acknowledgement {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_titles(&self.title, &other.title)
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.license.cmp(&other.license))
    }
}

impl PartialOrd for Acknowledgement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Case-insensitive title comparison used for every ordering in ackgen.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase))
}

/// Sort acknowledgements by title, ignoring case.
pub fn sort_acknowledgements(acknowledgements: &mut [Acknowledgement]) {
    acknowledgements.sort();
}

/// Entry of a grouped document, rendered by Settings.bundle as a group footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "FooterText")]
    pub license: String,
    #[serde(rename = "Type", default = "group_entry_type")]
    pub kind: String,
}

fn group_entry_type() -> String {
    GROUP_ENTRY_TYPE.to_string()
}

impl From<Acknowledgement> for GroupEntry {
    fn from(ack: Acknowledgement) -> Self {
        Self {
            title: ack.title,
            license: ack.license,
            kind: group_entry_type(),
        }
    }
}

impl From<GroupEntry> for Acknowledgement {
    fn from(entry: GroupEntry) -> Self {
        Self {
            title: entry.title,
            license: entry.license,
        }
    }
}

/// Settings.bundle wrapper of a grouped document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringsTable {
    /// Display title shown by the settings page
    #[serde(rename = "StringsTable")]
    pub name: String,
    #[serde(rename = "PreferenceSpecifiers")]
    pub entries: Vec<GroupEntry>,
}

impl StringsTable {
    pub fn new(name: impl Into<String>, acknowledgements: Vec<Acknowledgement>) -> Self {
        Self {
            name: name.into(),
            entries: acknowledgements.into_iter().map(GroupEntry::from).collect(),
        }
    }
}

/// Output shape selected for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocumentShape {
    /// Plain array of acknowledgements
    #[default]
    Flat,
    /// Settings.bundle table with the given display title
    Grouped {
        title: String,
    },
}

/// A decoded or to-be-encoded acknowledgements document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Flat(Vec<Acknowledgement>),
    Grouped(StringsTable),
}

impl Document {
    /// Build the document for `shape` from a list of acknowledgements.
    #[must_use]
    pub fn new(acknowledgements: Vec<Acknowledgement>, shape: &DocumentShape) -> Self {
        match shape {
            DocumentShape::Flat => Self::Flat(acknowledgements),
            DocumentShape::Grouped { title } => {
                Self::Grouped(StringsTable::new(title.clone(), acknowledgements))
            }
        }
    }

    /// Consume the document, returning its records in stored order.
    #[must_use]
    pub fn into_acknowledgements(self) -> Vec<Acknowledgement> {
        match self {
            Self::Flat(acknowledgements) => acknowledgements,
            Self::Grouped(table) => table.entries.into_iter().map(Acknowledgement::from).collect(),
        }
    }
}
