//! Test utilities for ackgen
//!
//! This module provides helpers shared by unit and integration tests:
//! - Once-only tracing initialization that plays well with the test harness
//! - [`DerivedDataFixture`], a temporary Xcode derived-data layout with
//!   package checkouts
//!
//! # Example
//!
//! ```rust,no_run
//! use ackgen::test_utils::DerivedDataFixture;
//!
//! let fixture = DerivedDataFixture::new().unwrap();
//! fixture.add_package("swift-log", "LICENSE.txt", b"Apache License").unwrap();
//! let config = fixture.config().unwrap();
//! ```

pub mod fixtures;

pub use fixtures::DerivedDataFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. With `level` set that level is used;
/// otherwise `RUST_LOG` is honored, and without either nothing is logged.
///
/// ```bash
/// RUST_LOG=ackgen=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
