//! Core types shared by every stage of the pipeline.
//!
//! - [`error`] - [`AckGenError`], [`ErrorContext`] and user-facing error mapping

pub mod error;

pub use error::{AckGenError, ErrorContext, user_friendly_error};

/// Result alias used by the pipeline stages.
pub type Result<T, E = AckGenError> = std::result::Result<T, E>;
