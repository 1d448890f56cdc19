//! Serialization of acknowledgements into XML property lists.
//!
//! Flat documents are a plist array of `title`/`license` dictionaries:
//!
//! ```xml
//! <array>
//!     <dict>
//!         <key>title</key>
//!         <string>Alamofire</string>
//!         <key>license</key>
//!         <string>MIT License...</string>
//!     </dict>
//! </array>
//! ```
//!
//! Grouped documents follow the Settings.bundle child pane format:
//!
//! ```xml
//! <dict>
//!     <key>StringsTable</key>
//!     <string>Acknowledgements</string>
//!     <key>PreferenceSpecifiers</key>
//!     <array>
//!         <dict>
//!             <key>Title</key>
//!             <string>Alamofire</string>
//!             <key>FooterText</key>
//!             <string>MIT License...</string>
//!             <key>Type</key>
//!             <string>PSGroupSpecifier</string>
//!         </dict>
//!     </array>
//! </dict>
//! ```

use crate::core::{AckGenError, Result};
use crate::models::{Acknowledgement, Document, DocumentShape, GroupEntry, StringsTable};
use crate::utils::fs::atomic_write;
use std::path::Path;

/// Encode acknowledgements as an XML plist in the requested shape.
///
/// Records are written in the order given.
pub fn encode_document(acknowledgements: &[Acknowledgement], shape: &DocumentShape) -> Result<Vec<u8>> {
    let document = Document::new(acknowledgements.to_vec(), shape);
    encode(&document)
}

/// Encode an already assembled [`Document`].
pub fn encode(document: &Document) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoded = match document {
        Document::Flat(acknowledgements) => plist::to_writer_xml(&mut buffer, acknowledgements),
        Document::Grouped(table) => plist::to_writer_xml(&mut buffer, table),
    };

    encoded.map_err(|e| AckGenError::DocumentEncodeError {
        reason: e.to_string(),
    })?;
    Ok(buffer)
}

/// Decode a document of either shape.
///
/// Flat arrays may use either the `title`/`license` keys or the grouped entry
/// keys (`Title`/`FooterText`).
pub fn decode(bytes: &[u8]) -> Result<Document> {
    if let Ok(acknowledgements) = plist::from_bytes::<Vec<Acknowledgement>>(bytes) {
        return Ok(Document::Flat(acknowledgements));
    }

    if let Ok(entries) = plist::from_bytes::<Vec<GroupEntry>>(bytes) {
        return Ok(Document::Flat(entries.into_iter().map(Acknowledgement::from).collect()));
    }

    plist::from_bytes::<StringsTable>(bytes).map(Document::Grouped).map_err(|e| {
        AckGenError::Other {
            message: format!("Not an acknowledgements document: {e}"),
        }
    })
}

/// Encode and atomically write the document to `path`, replacing any
/// existing file.
///
/// # Errors
///
/// [`AckGenError::DocumentWriteError`] if the file cannot be written. No
/// partial or temporary file is left behind in that case.
pub fn write_document(
    path: &Path,
    acknowledgements: &[Acknowledgement],
    shape: &DocumentShape,
) -> Result<()> {
    let bytes = encode_document(acknowledgements, shape)?;

    atomic_write(path, &bytes).map_err(|e| AckGenError::DocumentWriteError {
        path: path.display().to_string(),
        reason: format!("{e:#}"),
    })?;

    tracing::info!(
        "Wrote {} acknowledgements ({} bytes) to {}",
        acknowledgements.len(),
        bytes.len(),
        path.display()
    );
    Ok(())
}
