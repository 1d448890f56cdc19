//! Global constants used throughout the ackgen codebase.
//!
//! File names, path segments and plist keys that other tools depend on live
//! here so they are defined exactly once. Changing any of the consumer-visible
//! values is a breaking change for apps that read the generated document.

/// Environment variable carrying the project source root.
pub const SOURCE_ROOT_ENV: &str = "SRCROOT";

/// Environment variable carrying the build system's temp directory.
pub const TEMP_DIR_ENV: &str = "PROJECT_TEMP_DIR";

/// Path segment that separates the derived-data folder from build products.
///
/// The checkout root is derived from everything before the last occurrence.
pub const BUILD_SEGMENT: &str = "/Build/";

/// Location of the package checkouts relative to the derived-data folder.
pub const CHECKOUTS_SUFFIX: &str = "/SourcePackages/checkouts";

/// License file names probed in each dependency, highest precedence first.
pub const LICENSE_CANDIDATES: [&str; 3] = ["LICENSE", "LICENSE.txt", "LICENSE.md"];

/// Default document name, without extension.
pub const DEFAULT_DOCUMENT_NAME: &str = "Acknowledgements";

/// Extension of generated documents.
pub const DOCUMENT_EXTENSION: &str = "plist";

/// Default display title of the grouped (settings) document.
pub const DEFAULT_GROUP_TITLE: &str = "Acknowledgements";

/// Type tag carried by every entry of a grouped document.
pub const GROUP_ENTRY_TYPE: &str = "PSGroupSpecifier";

/// Plist key of the grouped document's display title.
pub const STRINGS_TABLE_KEY: &str = "StringsTable";

/// Plist key of the grouped document's entries.
pub const PREFERENCE_SPECIFIERS_KEY: &str = "PreferenceSpecifiers";

/// Returns the default file name of the generated document.
#[must_use]
pub fn default_document_file_name() -> String {
    format!("{DEFAULT_DOCUMENT_NAME}.{DOCUMENT_EXTENSION}")
}
