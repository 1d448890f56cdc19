//! Error handling for ackgen
//!
//! This module provides the error type shared by every stage of the
//! acknowledgement pipeline and the user-facing reporting built on top of it.
//! The error system is designed around two core principles:
//! 1. **Strongly-typed errors** so callers and tests can match on the failure kind
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`AckGenError`] - Enumerated error types for every fatal failure
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! Non-fatal conditions (a license file that is not valid UTF-8) are not errors;
//! they are reported as [`crate::collector::DecodeWarning`] values.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ackgen::core::{AckGenError, user_friendly_error};
//!
//! let error = AckGenError::NoAcknowledgements {
//!     path: "/tmp/SourcePackages/checkouts".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for ackgen operations.
///
/// Every variant is fatal: the run aborts, no output document is written and
/// the process exits with a non-zero status.
#[derive(Error, Debug)]
pub enum AckGenError {
    /// A required input is missing or the checkout root cannot be derived.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of what is missing or invalid
        message: String,
    },

    /// The checkout root does not exist or cannot be listed.
    #[error("Cannot list package checkouts at {path}")]
    DiscoveryError {
        /// Checkout root that was probed
        path: String,
        /// Underlying reason reported by the file system
        reason: String,
    },

    /// Discovery succeeded but no dependency had a readable license file.
    #[error("No license files found in {path}")]
    NoAcknowledgements {
        /// Checkout root that was scanned
        path: String,
    },

    /// The acknowledgements could not be serialized.
    #[error("Failed to encode acknowledgements document: {reason}")]
    DocumentEncodeError {
        /// Serializer error message
        reason: String,
    },

    /// The output document could not be written.
    #[error("Failed to write acknowledgements document to {path}")]
    DocumentWriteError {
        /// Target path of the document
        path: String,
        /// Underlying reason reported by the file system
        reason: String,
    },

    /// Generic error with a preformatted message.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl AckGenError {
    /// Shorthand for a [`AckGenError::ConfigurationError`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }
}

/// Error wrapper carrying a suggestion and details for the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: AckGenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: AckGenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colored labels.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for display.
///
/// [`AckGenError`]s get tailored suggestions. Everything else is reported with
/// its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<AckGenError>() {
        Ok(ackgen_error) => return create_error_context(ackgen_error),
        Err(error) => error,
    };

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(AckGenError::Other {
        message,
    })
}

fn create_error_context(error: AckGenError) -> ErrorContext {
    match error {
        AckGenError::ConfigurationError { message } => {
            ErrorContext::new(AckGenError::ConfigurationError { message })
                .with_suggestion(
                    "Run ackgen from an Xcode build phase or plugin, or pass --source-root and --temp-dir explicitly",
                )
                .with_details(
                    "SRCROOT and PROJECT_TEMP_DIR are set by Xcode. The temp directory must contain a '/Build/' segment",
                )
        }
        AckGenError::DiscoveryError { path, reason } => {
            let details = format!("The package checkouts directory could not be read: {reason}");
            ErrorContext::new(AckGenError::DiscoveryError { path, reason })
                .with_suggestion(
                    "Ensure Swift packages are resolved (Xcode → File → Packages → Resolve Package Versions)",
                )
                .with_details(details)
        }
        AckGenError::NoAcknowledgements { path } => {
            ErrorContext::new(AckGenError::NoAcknowledgements { path })
                .with_suggestion(
                    "Ensure SPM packages are resolved (Xcode → File → Packages → Resolve Package Versions)",
                )
                .with_details(
                    "None of the checked out packages contain a LICENSE, LICENSE.txt or LICENSE.md file with UTF-8 text",
                )
        }
        AckGenError::DocumentWriteError { path, reason } => {
            let details = reason.clone();
            ErrorContext::new(AckGenError::DocumentWriteError { path, reason })
                .with_suggestion(
                    "Check that the output directory exists and is writable, or pass a different --output path",
                )
                .with_details(details)
        }
        other => ErrorContext::new(other),
    }
}
