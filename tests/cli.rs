//! End-to-end coverage of the `tdmsync` binary's `prepare` / `update`
//! contract (§6), driven against real files through `assert_cmd` rather
//! than calling the library crates directly.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn tdmsync() -> Command {
    Command::cargo_bin("tdmsync").expect("tdmsync binary should build")
}

#[test]
fn prepare_writes_a_signature_file() {
    let dir = tempfile::tempdir().unwrap();
    let data_path = dir.path().join("remote.bin");
    fs::write(&data_path, (0u8..=255).cycle().take(5_000).collect::<Vec<u8>>()).unwrap();

    tdmsync()
        .arg("prepare")
        .arg(&data_path)
        .arg("512")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("block"));

    let sig_path = dir.path().join("remote.bin.tdmsync");
    assert!(sig_path.exists());
    let bytes = fs::read(&sig_path).unwrap();
    assert_eq!(&bytes[0..8], b"tdmsync.");
    assert_eq!(&bytes[bytes.len() - 8..], b"tdmsync.");
}

#[test]
fn update_with_identical_local_file_reuses_everything() {
    let dir = tempfile::tempdir().unwrap();
    let remote_path = dir.path().join("remote.bin");
    let data: Vec<u8> = (0u8..=255).cycle().take(8_192).collect();
    fs::write(&remote_path, &data).unwrap();

    tdmsync()
        .arg("prepare")
        .arg(&remote_path)
        .arg("256")
        .assert()
        .success();

    let local_path = dir.path().join("local.bin");
    fs::write(&local_path, &data).unwrap();

    tdmsync()
        .arg("update")
        .arg("--file")
        .arg(&remote_path)
        .arg(&local_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 bytes remote"));

    let updated_path = dir.path().join("local.bin.updated");
    let updated = fs::read(&updated_path).unwrap();
    assert_eq!(updated, data);
}

#[test]
fn update_with_stale_local_file_downloads_only_the_changed_tail() {
    let dir = tempfile::tempdir().unwrap();
    let remote_path = dir.path().join("remote.bin");
    let remote: Vec<u8> = (0u8..=255).cycle().take(4_096).collect();
    fs::write(&remote_path, &remote).unwrap();

    tdmsync()
        .arg("prepare")
        .arg(&remote_path)
        .arg("256")
        .assert()
        .success();

    let mut local = remote.clone();
    local.truncate(3_000);
    local.extend(std::iter::repeat(0xAAu8).take(500));
    let local_path = dir.path().join("local.bin");
    fs::write(&local_path, &local).unwrap();

    tdmsync()
        .arg("update")
        .arg("--file")
        .arg(&remote_path)
        .arg(&local_path)
        .assert()
        .success();

    let updated_path = dir.path().join("local.bin.updated");
    let updated = fs::read(&updated_path).unwrap();
    assert_eq!(updated, remote);
}

#[test]
fn update_with_url_reports_unsupported_transport() {
    let dir = tempfile::tempdir().unwrap();
    let local_path = dir.path().join("local.bin");
    fs::write(&local_path, b"irrelevant").unwrap();

    tdmsync()
        .arg("update")
        .arg("--url")
        .arg("https://example.invalid/remote.bin")
        .arg(&local_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Downloader"));
}

#[test]
fn update_requires_exactly_one_source() {
    let dir = tempfile::tempdir().unwrap();
    let local_path = dir.path().join("local.bin");
    fs::write(&local_path, b"irrelevant").unwrap();

    tdmsync().arg("update").arg(&local_path).assert().failure();
}
