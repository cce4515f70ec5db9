use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::{TempDir, tempdir};

/// Isolated environment: empty config file, knowledge base in a tempdir.
struct CliEnv {
    dir: TempDir,
    config: PathBuf,
    db: PathBuf,
}

impl CliEnv {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        let db = dir.path().join("knowledge.db");
        Self { dir, config, db }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("proclens").unwrap();
        cmd.env("PROCLENS_CONFIG", &self.config)
            .env("PROCLENS_DB", &self.db)
            .env_remove("PROCLENS_SEED_ON_OPEN")
            .env_remove("PROCLENS_SEARCH_LIMIT")
            .env_remove("RUST_LOG");
        cmd
    }

    fn robot(&self, args: &[&str]) -> (bool, Value) {
        let output = self.cmd().arg("--robot").args(args).output().unwrap();
        let json = serde_json::from_slice(&output.stdout).unwrap_or(Value::Null);
        (output.status.success(), json)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn write_json(path: &Path, value: &Value) {
    std::fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("proclens").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("proclens").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_normalize_prints_base_name() {
    let env = CliEnv::new();
    env.cmd()
        .args([
            "normalize",
            "GoogleUpdaterTask144.0.7547.0{3B1A6C4F-0A2E-4B9E-8C2D-1A2B3C4D5E6F}",
        ])
        .assert()
        .success()
        .stdout("GoogleUpdater\n");
}

#[test]
fn test_normalize_does_not_create_database() {
    let env = CliEnv::new();
    env.cmd().args(["normalize", "electron.app.Slack"]).assert().success();
    assert!(!env.db.exists());
}

#[test]
fn test_identify_by_executable_robot() {
    let env = CliEnv::new();
    let (ok, json) = env.robot(&[
        "identify",
        "--exe",
        r"C:\Program Files (x86)\Steam\steam.exe",
        "--name",
        "Discord",
    ]);
    assert!(ok);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["strategy"], "executable");
    assert_eq!(json["data"]["entry"]["name"], "Steam");
}

#[test]
fn test_identify_by_base_name_human() {
    let env = CliEnv::new();
    env.cmd()
        .args(["identify", "--name", "GoogleUpdaterTaskMachineCore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Google Updater"))
        .stdout(predicate::str::contains("base_name"));
}

#[test]
fn test_identify_generic_publisher_not_found() {
    let env = CliEnv::new();
    let (ok, json) = env.robot(&["identify", "--publisher", "Microsoft Windows Desktop Runtime"]);
    assert!(ok);
    assert_eq!(json["status"], "not_found");
}

#[test]
fn test_identify_empty_query_is_structured_error() {
    let env = CliEnv::new();
    let (ok, json) = env.robot(&["identify", "--name", "  "]);
    assert!(!ok);
    assert_eq!(json["error"], Value::Bool(true));
    assert_eq!(json["code"], "QUERY_INVALID");
    assert_eq!(json["numeric_code"], 401);
}

#[test]
fn test_search_orders_and_limits() {
    let env = CliEnv::new();
    let (ok, json) = env.robot(&["search", "", "--limit", "5"]);
    assert!(ok);
    let results = json["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 5);
    let names: Vec<String> = results
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_lowercase())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_search_negative_limit_is_empty() {
    let env = CliEnv::new();
    let (ok, json) = env.robot(&["search", "steam", "--limit", "-3"]);
    assert!(ok);
    assert_eq!(json["data"]["count"], 0);
}

#[test]
fn test_search_limit_from_env() {
    let env = CliEnv::new();
    let output = env
        .cmd()
        .env("PROCLENS_SEARCH_LIMIT", "2")
        .args(["--robot", "search", ""])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["count"], 2);
}

#[test]
fn test_show_missing_entry_fails() {
    let env = CliEnv::new();
    env.cmd()
        .args(["show", "424242"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_add_then_identify_and_show() {
    let env = CliEnv::new();
    env.cmd()
        .env("PROCLENS_SEED_ON_OPEN", "0")
        .args([
            "add",
            "--name",
            "Zoom Workplace",
            "--short-description",
            "Video meetings",
            "--category",
            "communication",
            "--executables",
            "zoom.exe",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    let output = env
        .cmd()
        .env("PROCLENS_SEED_ON_OPEN", "0")
        .args(["--robot", "identify", "--exe", "/opt/zoom/Zoom.exe"])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["entry"]["name"], "Zoom Workplace");
    assert_eq!(json["data"]["entry"]["id"], 1);

    env.cmd()
        .env("PROCLENS_SEED_ON_OPEN", "0")
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Video meetings"));
}

#[test]
fn test_import_export_roundtrip() {
    let env = CliEnv::new();
    let input = env.path("in.json");
    write_json(
        &input,
        &serde_json::json!([
            {"name": "Alpha Sync", "short_description": "Sync tool", "category": "cloud_sync"},
            {"name": "Beta Chat", "short_description": "Chat tool", "category": "communication"}
        ]),
    );

    let output = env
        .cmd()
        .env("PROCLENS_SEED_ON_OPEN", "false")
        .args(["--robot", "import"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["imported"], 2);

    let exported = env.path("out.json");
    env.cmd()
        .env("PROCLENS_SEED_ON_OPEN", "false")
        .args(["export", "--output"])
        .arg(&exported)
        .assert()
        .success();

    let dumped: Value = serde_json::from_str(&std::fs::read_to_string(&exported).unwrap()).unwrap();
    let names: Vec<&str> = dumped
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Alpha Sync", "Beta Chat"]);

    let fresh = CliEnv::new();
    let output = fresh
        .cmd()
        .env("PROCLENS_SEED_ON_OPEN", "false")
        .args(["--robot", "import"])
        .arg(&exported)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stdout));
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["imported"], 2);

    let output = fresh
        .cmd()
        .env("PROCLENS_SEED_ON_OPEN", "false")
        .args(["--robot", "identify", "--name", "Beta Chat"])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["entry"]["name"], "Beta Chat");
}

#[test]
fn test_import_rejects_invalid_file() {
    let env = CliEnv::new();
    let input = env.path("bad.json");
    std::fs::write(&input, r#"[{"name": "", "short_description": "x"}]"#).unwrap();

    let (ok, json) = env.robot(&["import", input.to_str().unwrap()]);
    assert!(!ok);
    assert_eq!(json["code"], "IMPORT_FAILED");
}

#[test]
fn test_seed_is_idempotent() {
    let env = CliEnv::new();
    let (ok, first) = {
        let output = env
            .cmd()
            .env("PROCLENS_SEED_ON_OPEN", "0")
            .args(["--robot", "seed"])
            .output()
            .unwrap();
        (
            output.status.success(),
            serde_json::from_slice::<Value>(&output.stdout).unwrap(),
        )
    };
    assert!(ok);
    assert!(first["data"]["inserted"].as_u64().unwrap() > 0);

    let (ok, second) = env.robot(&["seed"]);
    assert!(ok);
    assert_eq!(second["data"]["inserted"], 0);
    assert_eq!(second["data"]["total"], first["data"]["total"]);
}

#[test]
fn test_categories_counts_and_listing() {
    let env = CliEnv::new();
    let (ok, json) = env.robot(&["categories"]);
    assert!(ok);
    assert!(json["data"]["categories"]["updater"].as_u64().unwrap() >= 1);
    assert_eq!(json["data"]["categories"].as_object().unwrap().len(), 14);

    let (ok, json) = env.robot(&["categories", "cloud-sync"]);
    assert!(ok);
    assert_eq!(json["data"]["category"], "cloud_sync");
    assert!(json["data"]["count"].as_u64().unwrap() >= 1);
}

#[test]
fn test_invalid_config_value_fails() {
    let env = CliEnv::new();
    env.cmd()
        .env("PROCLENS_MIN_EXECUTABLE_LEN", "many")
        .args(["search", "steam"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PROCLENS_MIN_EXECUTABLE_LEN"));
}
