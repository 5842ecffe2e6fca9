use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const KEY_VAR: &str = "TRELLO_DEVELOPER_PUBLIC_KEY";
const TOKEN_VAR: &str = "TRELLO_MEMBER_TOKEN";

/// A command run from an empty directory with no credentials in the environment.
fn ytrello_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ytrello"));
    cmd.current_dir(dir.path())
        .env_remove(KEY_VAR)
        .env_remove(TOKEN_VAR)
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    ytrello_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bugzilla"));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    ytrello_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ytrello"));
}

// =============================================================================
// Credential check
// =============================================================================

fn assert_missing_credentials(cmd: &mut Command) {
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(KEY_VAR))
        .stderr(predicate::str::contains(TOKEN_VAR));
}

#[test]
fn test_check_without_credentials() {
    let temp_dir = TempDir::new().unwrap();
    assert_missing_credentials(ytrello_cmd(&temp_dir).arg("check"));
}

#[test]
fn test_check_with_key_only() {
    let temp_dir = TempDir::new().unwrap();
    assert_missing_credentials(ytrello_cmd(&temp_dir).arg("check").env(KEY_VAR, "key"));
}

#[test]
fn test_check_with_token_only() {
    let temp_dir = TempDir::new().unwrap();
    assert_missing_credentials(ytrello_cmd(&temp_dir).arg("check").env(TOKEN_VAR, "token"));
}

#[test]
fn test_check_with_empty_key() {
    let temp_dir = TempDir::new().unwrap();
    assert_missing_credentials(
        ytrello_cmd(&temp_dir)
            .arg("check")
            .env(KEY_VAR, "")
            .env(TOKEN_VAR, "token"),
    );
}

#[test]
fn test_check_with_both_credentials() {
    let temp_dir = TempDir::new().unwrap();
    ytrello_cmd(&temp_dir)
        .arg("check")
        .env(KEY_VAR, "key")
        .env(TOKEN_VAR, "token")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://bugzilla.suse.com"))
        .stdout(predicate::str::contains("https://api.trello.com/1"))
        .stdout(predicate::str::contains("15"));
}

#[test]
fn test_verbose_check_prints_debug() {
    let temp_dir = TempDir::new().unwrap();
    ytrello_cmd(&temp_dir)
        .args(["check", "--verbose"])
        .env(KEY_VAR, "key")
        .env(TOKEN_VAR, "token")
        .assert()
        .success()
        .stderr(predicate::str::contains("Trello credentials present"));
}

#[test]
fn test_quiet_check_prints_no_debug() {
    let temp_dir = TempDir::new().unwrap();
    ytrello_cmd(&temp_dir)
        .arg("check")
        .env(KEY_VAR, "key")
        .env(TOKEN_VAR, "token")
        .assert()
        .success()
        .stderr(predicate::str::contains("Trello credentials present").not());
}

#[test]
fn test_trello_commands_require_credentials() {
    let temp_dir = TempDir::new().unwrap();
    assert_missing_credentials(ytrello_cmd(&temp_dir).arg("report"));
    assert_missing_credentials(ytrello_cmd(&temp_dir).arg("verify"));
}

// =============================================================================
// Checked lists
// =============================================================================

#[test]
fn test_lists_grouped_by_board() {
    let temp_dir = TempDir::new().unwrap();
    ytrello_cmd(&temp_dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("Agile YaST Incoming Board"))
        .stdout(predicate::str::contains("Agile YaST: Team 1"))
        .stdout(predicate::str::contains("Agile YaST: Team A"))
        .stdout(predicate::str::contains("557833dde4f1218b7d1cf831"));
}

#[test]
fn test_lists_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = ytrello_cmd(&temp_dir)
        .args(["lists", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let lists = json.as_array().unwrap();
    assert_eq!(lists.len(), 15);
    assert_eq!(lists[0]["id"], "5502d691d05c3b3817317566");
    assert_eq!(lists[0]["board"], "5507f013b863aa041618871d");
}

#[test]
fn test_lists_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".ytrello.yml"),
        "checked_lists:\n  - board: myboard\n    id: mylist\n    name: Review\n",
    )
    .unwrap();

    ytrello_cmd(&temp_dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("mylist"))
        .stdout(predicate::str::contains("Review"))
        .stdout(predicate::str::contains("5502d691d05c3b3817317566").not());
}

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("other.yml");
    std::fs::write(
        &config,
        "checked_lists:\n  - board: b\n    id: only-this-one\n",
    )
    .unwrap();

    ytrello_cmd(&temp_dir)
        .args(["lists", "--json", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("only-this-one"));
}

#[test]
fn test_verbose_reports_loaded_config() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".ytrello.yml"),
        "checked_lists:\n  - board: b\n    id: l\n",
    )
    .unwrap();

    ytrello_cmd(&temp_dir)
        .args(["lists", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded configuration"));
}

#[test]
fn test_unusable_log_dir_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    ytrello_cmd(&temp_dir)
        .args(["lists", "--log-file"])
        .arg(blocker.join("ytrello.log"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to set up logging"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".ytrello.yml"), "checked_lists: []\n").unwrap();

    ytrello_cmd(&temp_dir)
        .arg("lists")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_bug_rejects_non_numeric_id() {
    let temp_dir = TempDir::new().unwrap();
    ytrello_cmd(&temp_dir)
        .args(["bug", "bsc#123"])
        .assert()
        .failure();
}
