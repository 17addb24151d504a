use assert_cmd::Command;
use predicates::prelude::*;

fn clusterctl() -> Command {
    Command::cargo_bin("clusterctl").unwrap()
}

fn write_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("cluster.json");
    std::fs::write(
        &path,
        r#"{"metadata":{"name":"it-demo","region":"us-west-2"},
            "nodeGroups":[{"name":"workers","instanceType":"m5.large","desiredCapacity":2}]}"#,
    )
    .unwrap();
    path
}

#[test]
fn info_prints_three_lines() {
    let output = clusterctl().arg("info").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("clusterctl version: "));
    assert!(lines[1].starts_with("provisioner version: "));
    assert!(lines[2].starts_with("OS: "));
}

#[test]
fn info_json_is_parseable() {
    let output = clusterctl().args(["info", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(value["clusterctlVersion"].is_string());
    assert!(value["provisionerVersion"].is_string());
    assert!(value["os"].is_string());
}

#[test]
fn info_rejects_unknown_output_value() {
    clusterctl()
        .args(["info", "-o", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn info_rejects_positional_arguments() {
    clusterctl().args(["info", "extra"]).assert().failure();
}

#[test]
fn version_prints_a_version() {
    clusterctl()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_json_is_parseable() {
    let output = clusterctl()
        .args(["version", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(value["version"].is_string());
}

#[test]
fn unknown_subcommand_fails() {
    clusterctl().arg("frobnicate").assert().failure();
}

#[test]
fn bare_create_reports_missing_resource_and_prints_help() {
    clusterctl()
        .arg("create")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error: please provide a valid resource for \"create\"",
        ))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn create_with_unknown_resource_names_it() {
    clusterctl()
        .args(["create", "bogus"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error: unknown resource type \"bogus\"",
        ));
}

#[test]
fn anywhere_is_recognized_but_asks_for_a_resource() {
    clusterctl()
        .arg("anywhere")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "please provide a valid resource for \"anywhere\"",
        ));
}

#[test]
fn create_cluster_succeeds_with_a_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir);
    clusterctl()
        .args(["create", "cluster", "-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("it-demo"))
        .stdout(predicate::str::contains("[✔]"));
}

#[test]
fn create_cluster_fails_on_missing_config() {
    clusterctl()
        .args(["create", "cluster", "-f", "/no/such/config.json"])
        .assert()
        .failure();
}

#[test]
fn default_verbosity_excludes_debug_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir);
    clusterctl()
        .args(["create", "cluster", "-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[▶]").not());
}

#[test]
fn verbosity_four_includes_debug_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir);
    clusterctl()
        .args(["create", "cluster", "-f", path.to_str().unwrap(), "-v", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[▶]"));
}

#[test]
fn fabulous_color_mode_emits_escape_sequences() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir);
    clusterctl()
        .args([
            "create",
            "cluster",
            "-f",
            path.to_str().unwrap(),
            "-C",
            "fabulous",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[38;5;"));
}

#[test]
fn color_false_emits_plain_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir);
    clusterctl()
        .args([
            "create",
            "cluster",
            "-f",
            path.to_str().unwrap(),
            "-C",
            "false",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}
