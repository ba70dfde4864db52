use tempfile::tempdir;

#[allow(deprecated)]
fn cargo_bin() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("lease_config").expect("binary not built")
}

#[test]
fn write_then_read_prints_configured_bounds() {
    let dir = tempdir().unwrap();

    cargo_bin()
        .arg("--root")
        .arg(dir.path())
        .arg("write")
        .arg("--lease")
        .arg("90m")
        .arg("--lease-max")
        .arg("24h")
        .assert()
        .success();

    let assert = cargo_bin()
        .arg("--root")
        .arg(dir.path())
        .arg("read")
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, "lease = 1h30m0s\nlease_max = 24h0m0s\n");
}

#[test]
fn read_without_a_record_reports_unconfigured() {
    let dir = tempdir().unwrap();

    let assert = cargo_bin()
        .arg("--root")
        .arg(dir.path())
        .arg("read")
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, "unconfigured\n");
}

#[test]
fn invalid_duration_fails_and_names_the_field() {
    let dir = tempdir().unwrap();

    let assert = cargo_bin()
        .arg("--root")
        .arg(dir.path())
        .arg("write")
        .arg("--lease")
        .arg("1d")
        .arg("--lease-max")
        .arg("24h")
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("invalid 'lease'"), "{stderr}");

    // The failed write must not have created a record.
    let assert = cargo_bin()
        .arg("--root")
        .arg(dir.path())
        .arg("read")
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, "unconfigured\n");
}
