//! Common test utilities for ackgen integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use ackgen::test_utils::DerivedDataFixture;
use assert_cmd::Command;

/// Command for the `ackgen` binary with a clean environment.
///
/// Build-environment variables of the machine running the tests are removed
/// so that only what a test sets explicitly is visible.
pub fn ackgen() -> Command {
    let mut cmd = Command::cargo_bin("ackgen").unwrap();
    cmd.env_remove("SRCROOT")
        .env_remove("PROJECT_TEMP_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// `ackgen` invoked the way an Xcode build phase does, with `SRCROOT` and
/// `PROJECT_TEMP_DIR` pointing into `fixture`.
pub fn ackgen_in(fixture: &DerivedDataFixture) -> Command {
    let mut cmd = ackgen();
    cmd.env("SRCROOT", fixture.source_root()).env("PROJECT_TEMP_DIR", fixture.temp_dir());
    cmd
}
