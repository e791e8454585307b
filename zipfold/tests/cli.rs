use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn packages_a_directory() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("docs");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.txt"), "alpha").unwrap();

    Command::cargo_bin("zipfold")
        .unwrap()
        .args([
            src.to_str().unwrap(),
            tmp.path().to_str().unwrap(),
            "docs.zip",
        ])
        .assert()
        .success();

    let archive = fs::read(tmp.path().join("docs.zip")).unwrap();
    assert_eq!(&archive[..2], b"PK");
}

#[test]
fn reports_archive_size_when_verbose() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("docs");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.txt"), "alpha").unwrap();

    Command::cargo_bin("zipfold")
        .unwrap()
        .arg("-v")
        .args([
            src.to_str().unwrap(),
            tmp.path().to_str().unwrap(),
            "docs.zip",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("docs.zip"));
}

#[test]
fn fails_when_destination_missing() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("docs");
    fs::create_dir(&src).unwrap();

    Command::cargo_bin("zipfold")
        .unwrap()
        .args([
            src.to_str().unwrap(),
            tmp.path().join("no-such-dir").to_str().unwrap(),
            "docs.zip",
        ])
        .assert()
        .failure();
}

#[test]
fn refuses_destination_inside_source() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("docs");
    fs::create_dir(&src).unwrap();

    Command::cargo_bin("zipfold")
        .unwrap()
        .args([src.to_str().unwrap(), src.to_str().unwrap(), "docs.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing"));
}
