use crate::common::{ackgen, ackgen_in};
use ackgen::models::Acknowledgement;
use ackgen::test_utils::DerivedDataFixture;
use predicates::prelude::*;
use std::fs;

fn generated_fixture(settings: bool) -> DerivedDataFixture {
    let fixture = DerivedDataFixture::new().unwrap();
    fixture.add_package("Zebra", "LICENSE", b"MIT License for Zebra package").unwrap();
    fixture.add_package("apple", "LICENSE", b"MIT License for apple package").unwrap();
    fixture.add_package("Banana", "LICENSE", b"MIT License for Banana package").unwrap();

    let mut cmd = ackgen_in(&fixture);
    if settings {
        cmd.arg("--settings");
    }
    cmd.assert().success();
    fixture
}

/// Test listing titles sorted case-insensitively
#[test]
fn test_list_titles() {
    let fixture = generated_fixture(false);

    ackgen_in(&fixture).arg("list").assert().success().stdout("apple\nBanana\nZebra\n");
}

/// Test listing a Settings.bundle document
#[test]
fn test_list_settings_document() {
    let fixture = generated_fixture(true);

    ackgen_in(&fixture).arg("list").assert().success().stdout("apple\nBanana\nZebra\n");
}

/// Test listing with license bodies
#[test]
fn test_list_with_licenses() {
    let fixture = generated_fixture(false);

    ackgen()
        .arg("list")
        .arg(fixture.source_root())
        .arg("--licenses")
        .assert()
        .success()
        .stdout(predicate::str::contains("Banana\n\nMIT License for Banana package\n"));
}

/// Test JSON output
#[test]
fn test_list_json() {
    let fixture = generated_fixture(false);

    let output = ackgen_in(&fixture).args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let acks: Vec<Acknowledgement> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(acks.len(), 3);
    assert_eq!(acks[0], Acknowledgement::new("apple", "MIT License for apple package"));
}

/// Test listing a custom document name
#[test]
fn test_list_named_document() {
    let fixture = DerivedDataFixture::new().unwrap();
    fixture.add_package("Lib", "LICENSE", b"MIT").unwrap();
    let output = fixture.source_root().join("Credits.plist");
    ackgen_in(&fixture).arg("-o").arg(&output).assert().success();

    ackgen()
        .arg("list")
        .arg(fixture.source_root())
        .args(["--name", "Credits"])
        .assert()
        .success()
        .stdout("Lib\n");
}

/// Test missing document degrades to an empty listing
#[test]
fn test_list_missing_document() {
    let fixture = DerivedDataFixture::new().unwrap();

    ackgen()
        .arg("list")
        .arg(fixture.source_root())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No acknowledgements document"));
}

/// Test malformed document degrades to an empty listing
#[test]
fn test_list_malformed_document() {
    let fixture = DerivedDataFixture::new().unwrap();
    fs::write(fixture.default_output(), [0xffu8, 0xfe, 0x00]).unwrap();

    ackgen_in(&fixture)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("Could not read"));
}
