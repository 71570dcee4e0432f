//! Integration tests for the `zz` binary.
//!
//! Each test points `--config` at a temp dir so the user's own config
//! never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Fixtures
// =============================================================================

/// A `zz` invocation isolated from the user's environment.
struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn config_path(&self) -> std::path::PathBuf {
        self.dir.path().join("config.toml")
    }

    fn zz(&self) -> Command {
        let mut cmd = Command::cargo_bin("zz").expect("binary should build");
        cmd.env_remove("RUST_LOG")
            .env_remove("ZIGZAG_CONFIG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }
}

// =============================================================================
// demo
// =============================================================================

#[test]
fn demo_prints_ranks() {
    let env = TestEnv::new();
    env.zz()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "generation: Victoria -> George VI -> Elizabeth II -> Ann",
        ))
        .stdout(predicate::str::contains(
            "sibling: Charles -> Ann -> Andrew -> Edward",
        ));
}

#[test]
fn demo_delete_splices_rank() {
    let env = TestEnv::new();
    env.zz()
        .args(["demo", "--delete", "Andrew"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "sibling: Charles -> Ann -> Edward",
        ));
}

#[test]
fn demo_negative_direction() {
    let env = TestEnv::new();
    env.zz()
        .args(["demo", "--direction", "negative"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "sibling: Edward -> Andrew -> Ann -> Charles",
        ));
}

#[test]
fn demo_unknown_name_fails() {
    let env = TestEnv::new();
    env.zz()
        .args(["demo", "--delete", "Diana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No cell named 'Diana'"));
}

#[test]
fn demo_deleting_twice_fails() {
    let env = TestEnv::new();
    env.zz()
        .args(["demo", "--delete", "Ann", "--delete", "Ann"])
        .assert()
        .failure();
}

#[test]
fn demo_json_report() {
    let env = TestEnv::new();
    let output = env
        .zz()
        .args(["demo", "--json", "--delete", "Andrew"])
        .output()
        .expect("zz should run");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["cells"], 6);
    assert_eq!(report["direction"], "positive");
    assert_eq!(report["verify"]["ok"], true);
    assert_eq!(report["deleted"][0], "Andrew");
}

#[test]
fn demo_quiet_prints_nothing() {
    let env = TestEnv::new();
    env.zz()
        .args(["demo", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// config
// =============================================================================

#[test]
fn config_set_then_get() {
    let env = TestEnv::new();
    env.zz()
        .args(["config", "set", "direction", "neg"])
        .assert()
        .success();
    assert!(env.config_path().exists());

    env.zz()
        .args(["config", "get", "direction"])
        .assert()
        .success()
        .stdout("negative\n");
}

#[test]
fn config_direction_applies_to_demo() {
    let env = TestEnv::new();
    std::fs::write(env.config_path(), "direction = \"negative\"\n").unwrap();

    env.zz()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("generation: Ann -> Elizabeth II"));
}

#[test]
fn config_list_shows_defaults() {
    let env = TestEnv::new();
    env.zz()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("verify = true"))
        .stdout(predicate::str::contains("json = false"))
        .stdout(predicate::str::contains("direction = positive"));
}

#[test]
fn config_unknown_key_fails() {
    let env = TestEnv::new();
    env.zz()
        .args(["config", "get", "trunk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn invalid_config_file_fails() {
    let env = TestEnv::new();
    std::fs::write(env.config_path(), "direction = \"up\"\n").unwrap();

    env.zz().arg("demo").assert().failure();
}

// =============================================================================
// completion
// =============================================================================

#[test]
fn completion_bash() {
    let env = TestEnv::new();
    env.zz()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zz"));
}
