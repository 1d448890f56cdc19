//! Integration test suite for ackgen
//!
//! These tests run the compiled binary against temporary derived-data layouts.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: Document generation in both shapes
//! - **errors**: Exit status and messages for each failure kind
//! - **list**: Reading generated documents back

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod generate;
mod list;
