use assert_cmd::Command;
use origen_version::version;
use predicates::prelude::*;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_origen-version"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("origen-version"));
}

#[test]
fn prints_rendered_version() {
    let expected = format!("{}\n", version::current().render());
    bin().assert().success().stdout(expected);
}

#[test]
fn version_flag_prints_banner_line() {
    let expected = format!("origen {}\n", version::current());
    bin().arg("--version").assert().success().stdout(expected.clone());
    bin().arg("-V").assert().success().stdout(expected);
}

#[test]
fn pre_flag_appends_dev_suffix() {
    bin()
        .args(["--pre", "3"])
        .assert()
        .success()
        .stdout("0.7.47.pre3\n");
}

#[test]
fn release_flag_drops_dev_suffix() {
    bin().arg("--release").assert().success().stdout("0.7.47\n");
}

#[test]
fn json_report() {
    let out = bin()
        .args(["--format", "json", "--release"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["version"], "0.7.47");
    assert_eq!(value["major"], 0);
    assert_eq!(value["minor"], 7);
    assert_eq!(value["bugfix"], 47);
    assert!(value["dev_iteration"].is_null());
    assert_eq!(value["release"], true);
    assert!(value.get("comparison").is_none());
}

#[test]
fn yaml_report_with_comparison() {
    let out = bin()
        .args(["--format", "yaml", "--release", "--compare", "0.8.0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
    assert_eq!(value["version"].as_str(), Some("0.7.47"));
    assert_eq!(value["comparison"]["against"].as_str(), Some("0.8.0"));
    assert_eq!(value["comparison"]["relation"].as_str(), Some("older"));
}

#[test]
fn text_comparison_line() {
    bin()
        .args(["--pre", "2", "--compare", "0.7.47"])
        .assert()
        .success()
        .stdout("0.7.47.pre2\n0.7.47.pre2 is older than 0.7.47\n");
}

#[test]
fn invalid_compare_value_fails() {
    bin()
        .args(["--compare", "0.7"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("invalid --compare value"));
}

#[test]
fn invalid_log_filter_fails() {
    bin()
        .args(["--log", "foo=notalevel"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("error: failed to initialise logging"))
        .stderr(predicate::str::contains("Invalid CLI value: --log"));
}

#[test]
fn pre_and_release_conflict() {
    bin().args(["--pre", "1", "--release"]).assert().failure();
}

#[test]
fn banner_is_logged_to_stderr() {
    bin()
        .args(["--log", "info", "--release"])
        .assert()
        .success()
        .stdout("0.7.47\n")
        .stderr(predicate::str::contains(format!("origen v{}", version::current())));
}

#[test]
fn writes_report_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("version.json");
    bin()
        .args(["--format", "json", "--pre", "5", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");
    let written = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["version"], "0.7.47.pre5");
    assert_eq!(value["dev_iteration"], 5);
    assert_eq!(value["release"], false);
}

#[test]
fn unwritable_output_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("version.txt");
    bin()
        .arg("--output")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write file"));
}
