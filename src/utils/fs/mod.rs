//! File system utilities
//!
//! # Examples
//!
//! ```rust,no_run
//! use ackgen::utils::fs::atomic_write;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! atomic_write(Path::new("output/Acknowledgements.plist"), b"<plist/>")?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;

pub use atomic::atomic_write;
