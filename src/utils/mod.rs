//! Utilities and helpers
//!
//! - [`fs`] - File system operations with atomic writes

pub mod fs;

pub use fs::atomic_write;
