use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mlp(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mlp").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("MLP__LOGGING__CONSOLE", "false");
    cmd
}

#[test]
fn no_arguments_prints_help() {
    let temp = TempDir::new().unwrap();
    mlp(&temp).assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn mkdirs_creates_nested_directories_and_logs_them() {
    let temp = TempDir::new().unwrap();

    mlp(&temp).args(["mkdirs", "artifacts/model", "artifacts/model"]).assert().success();

    assert!(temp.path().join("artifacts/model").is_dir());
    let log = fs::read_to_string(temp.path().join("logs/running_logs.log")).unwrap();
    assert!(log.contains("created directory at: artifacts/model"));
}

#[test]
fn quiet_mkdirs_does_not_log_paths() {
    let temp = TempDir::new().unwrap();

    mlp(&temp).args(["mkdirs", "-q", "data"]).assert().success();

    assert!(temp.path().join("data").is_dir());
    let log = fs::read_to_string(temp.path().join("logs/running_logs.log")).unwrap();
    assert!(!log.contains("created directory at"));
}

#[test]
fn size_prints_kilobytes() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.csv"), vec![b'x'; 2048]).unwrap();

    mlp(&temp).args(["size", "data.csv"]).assert().success().stdout("~ 2 KB\n");
}

#[test]
fn size_of_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    mlp(&temp)
        .args(["size", "absent.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn show_config_prints_a_key() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("params.yaml"), "elasticnet:\n  alpha: 0.2\n  target: quality\n")
        .unwrap();

    mlp(&temp)
        .args(["show-config", "params.yaml", "--key", "elasticnet.target"])
        .assert()
        .success()
        .stdout("quality\n");
    mlp(&temp)
        .args(["show-config", "params.yaml", "-k", "elasticnet.beta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing key"));
}

#[test]
fn show_config_rejects_empty_yaml() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("schema.yaml"), "").unwrap();

    mlp(&temp)
        .args(["show-config", "schema.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml file is empty"));
}

#[test]
fn requirements_strip_the_editable_marker() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), "pandas\nnumpy\n-e .\n").unwrap();

    mlp(&temp).args(["requirements", "requirements.txt"]).assert().success().stdout("pandas\nnumpy\n");
}

#[test]
fn info_prints_metadata() {
    let temp = TempDir::new().unwrap();

    mlp(&temp)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"repo_name\": \"end-end-MLP-with-MLFlow\""));
}

#[test]
fn settings_file_and_environment_are_layered() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("settings.yaml"), "logging:\n  dir: run_logs\n  level: warn\n").unwrap();

    mlp(&temp)
        .args(["--config", "settings.yaml", "mkdirs", "out"])
        .env("MLP__LOGGING__LEVEL", "info")
        .assert()
        .success();

    let log = fs::read_to_string(temp.path().join("run_logs/running_logs.log")).unwrap();
    assert!(log.contains("created directory at: out"));
    assert!(!temp.path().join("logs").exists());
}

#[test]
fn invalid_log_level_is_reported() {
    let temp = TempDir::new().unwrap();

    mlp(&temp)
        .arg("info")
        .env("MLP__LOGGING__LEVEL", "loud")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level 'loud'"));
}
