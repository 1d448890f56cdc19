use crate::common::ackgen_in;
use ackgen::models::{Acknowledgement, StringsTable};
use ackgen::reader::{DirectorySource, all};
use ackgen::test_utils::DerivedDataFixture;
use predicates::prelude::*;
use std::fs;

fn fixture_with_packages() -> DerivedDataFixture {
    let fixture = DerivedDataFixture::new().unwrap();
    fixture.add_package("swift-log", "LICENSE.txt", b"Apache License 2.0").unwrap();
    fixture.add_package("Alamofire", "LICENSE", b"MIT License").unwrap();
    fixture.add_package("swift-collections", "LICENSE.md", b"# Apache License").unwrap();
    fixture
}

/// Test generating the default document from build-phase environment
#[test]
fn test_generate_default_document() {
    let fixture = fixture_with_packages();

    ackgen_in(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating Acknowledgements file"))
        .stdout(predicate::str::contains("Generated acknowledgements at:"))
        .stdout(predicate::str::contains("Acknowledgements.plist"));

    let acks = all("Acknowledgements", &DirectorySource::new(fixture.source_root()));
    assert_eq!(
        acks,
        vec![
            Acknowledgement::new("Alamofire", "MIT License"),
            Acknowledgement::new("swift-collections", "# Apache License"),
            Acknowledgement::new("swift-log", "Apache License 2.0"),
        ]
    );
}

/// Test that the document is written in sorted order
#[test]
fn test_generated_document_is_sorted() {
    let fixture = DerivedDataFixture::new().unwrap();
    fixture.add_package("zlib", "LICENSE", b"zlib").unwrap();
    fixture.add_package("Bolts", "LICENSE", b"BSD").unwrap();
    fixture.add_package("alpha", "LICENSE", b"MIT").unwrap();

    ackgen_in(&fixture).assert().success();

    let xml = fs::read_to_string(fixture.default_output()).unwrap();
    let alpha = xml.find("<string>alpha</string>").unwrap();
    let bolts = xml.find("<string>Bolts</string>").unwrap();
    let zlib = xml.find("<string>zlib</string>").unwrap();
    assert!(alpha < bolts && bolts < zlib);
}

/// Test explicit output path
#[test]
fn test_generate_to_explicit_output() {
    let fixture = fixture_with_packages();
    let output = fixture.source_root().join("Resources");
    fs::create_dir_all(&output).unwrap();
    let output = output.join("Credits.plist");

    ackgen_in(&fixture)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Credits.plist"));

    assert!(output.exists());
    assert!(!fixture.default_output().exists());
}

/// Test Settings.bundle output with a custom title
#[test]
fn test_generate_settings_document() {
    let fixture = DerivedDataFixture::new().unwrap();
    fixture.add_package("Lib", "LICENSE", b"MIT").unwrap();

    ackgen_in(&fixture).args(["--settings", "--title", "Credits"]).assert().success();

    let table: StringsTable = plist::from_file(fixture.default_output()).unwrap();
    assert_eq!(table.name, "Credits");
    assert_eq!(table.entries.len(), 1);
    assert_eq!(table.entries[0].title, "Lib");
    assert_eq!(table.entries[0].license, "MIT");
    assert_eq!(table.entries[0].kind, "PSGroupSpecifier");
}

/// Test Settings.bundle output uses the default title
#[test]
fn test_generate_settings_default_title() {
    let fixture = DerivedDataFixture::new().unwrap();
    fixture.add_package("Lib", "LICENSE", b"MIT").unwrap();

    ackgen_in(&fixture).arg("--settings").assert().success();

    let table: StringsTable = plist::from_file(fixture.default_output()).unwrap();
    assert_eq!(table.name, "Acknowledgements");
}

/// Test flags override the environment
#[test]
fn test_flags_override_environment() {
    let fixture = fixture_with_packages();
    let other = DerivedDataFixture::new().unwrap();

    ackgen_in(&other)
        .arg("--source-root")
        .arg(fixture.source_root())
        .arg("--temp-dir")
        .arg(fixture.temp_dir())
        .assert()
        .success();

    assert!(fixture.default_output().exists());
    assert!(!other.default_output().exists());
}

/// Test the last '/Build/' segment is used when a parent folder is named Build
#[test]
fn test_parent_folder_named_build() {
    let fixture = DerivedDataFixture::under("Build/Projects").unwrap();
    fixture.add_package("Lib", "LICENSE", b"MIT").unwrap();

    ackgen_in(&fixture).assert().success();

    assert_eq!(
        all("Acknowledgements", &DirectorySource::new(fixture.source_root())),
        vec![Acknowledgement::new("Lib", "MIT")]
    );
}

/// Test one entry per package when several license files exist
#[test]
fn test_multiple_license_files_single_entry() {
    let fixture = DerivedDataFixture::new().unwrap();
    fixture.add_package("TestPackage", "LICENSE", b"from LICENSE").unwrap();
    fixture.add_package("TestPackage", "LICENSE.txt", b"from LICENSE.txt").unwrap();
    fixture.add_package("TestPackage", "LICENSE.md", b"from LICENSE.md").unwrap();

    ackgen_in(&fixture).assert().success();

    let xml = fs::read_to_string(fixture.default_output()).unwrap();
    assert_eq!(xml.matches("<string>TestPackage</string>").count(), 1);
    assert!(xml.contains("from LICENSE<"));
    assert!(!xml.contains("from LICENSE.txt"));
}

/// Test invalid UTF-8 license is skipped with a warning
#[test]
fn test_invalid_utf8_license_warns_and_continues() {
    let fixture = DerivedDataFixture::new().unwrap();
    fixture.add_package("Broken", "LICENSE", &[0xff, 0xfe, 0xfd]).unwrap();
    fixture.add_package("Broken", "LICENSE.txt", b"fallback license").unwrap();
    fixture.add_package("Good", "LICENSE", b"MIT").unwrap();

    ackgen_in(&fixture)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: Skipping Broken/LICENSE - invalid UTF-8 encoding\n",
        ));

    assert_eq!(
        all("Acknowledgements", &DirectorySource::new(fixture.source_root())),
        vec![
            Acknowledgement::new("Broken", "fallback license"),
            Acknowledgement::new("Good", "MIT"),
        ]
    );
}

/// Test skipped licenses are reported as plain build warnings even in quiet mode
#[test]
fn test_quiet_still_reports_skipped_licenses() {
    let fixture = DerivedDataFixture::new().unwrap();
    fixture.add_package("Broken", "LICENSE", &[0xff, 0xfe]).unwrap();
    fixture.add_package("Good", "LICENSE", b"MIT").unwrap();

    ackgen_in(&fixture)
        .arg("--quiet")
        .env_remove("NO_COLOR")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr("warning: Skipping Broken/LICENSE - invalid UTF-8 encoding\n");
}

/// Test hidden directories and packages without licenses are skipped
#[test]
fn test_skips_hidden_and_unlicensed_packages() {
    let fixture = DerivedDataFixture::new().unwrap();
    fixture.add_package(".build", "LICENSE", b"hidden").unwrap();
    fixture.add_unlicensed_package("NoLicense").unwrap();
    fixture.add_package("Lib", "LICENSE", b"MIT").unwrap();

    ackgen_in(&fixture).assert().success();

    let acks = all("Acknowledgements", &DirectorySource::new(fixture.source_root()));
    assert_eq!(acks, vec![Acknowledgement::new("Lib", "MIT")]);
}

/// Test an existing document is replaced
#[test]
fn test_overwrites_existing_document() {
    let fixture = fixture_with_packages();
    fs::write(fixture.default_output(), "old content").unwrap();

    ackgen_in(&fixture).assert().success();

    let xml = fs::read_to_string(fixture.default_output()).unwrap();
    assert!(!xml.contains("old content"));
    assert!(xml.contains("Alamofire"));
}

/// Test quiet mode prints nothing on success
#[test]
fn test_quiet_success() {
    let fixture = fixture_with_packages();

    ackgen_in(&fixture).arg("--quiet").assert().success().stdout(predicate::str::is_empty());

    assert!(fixture.default_output().exists());
}
