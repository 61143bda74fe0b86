//! End-to-end tests for the beankeeper binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command isolated from the user's config and environment
fn beankeeper(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("beankeeper").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("NO_COLOR", "1")
        .env_remove("BEANKEEPER_DOCUMENT")
        .env_remove("BEANKEEPER_DEFAULT_PAGE")
        .env_remove("RUST_LOG");
    cmd
}

const TASKS_MARKUP: &str = r#"<html><body>
    <nav>
        <button class="tab" data-page="inbox">Inbox</button>
        <button class="tab" data-page="done">Done</button>
    </nav>
    <section class="page" data-page="inbox"><h2>Inbox</h2></section>
    <section class="page" data-page="done" hidden="hidden"><h2>Done</h2></section>
</body></html>"#;

#[test]
fn test_pages_lists_builtin_document() {
    let dir = TempDir::new().unwrap();
    beankeeper(dir.path())
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("home"))
        .stdout(predicate::str::contains("beans"))
        .stdout(predicate::str::contains("brews"))
        .stdout(predicate::str::contains("settings"))
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn test_navigate_prints_state() {
    let dir = TempDir::new().unwrap();
    beankeeper(dir.path())
        .args(["navigate", "beans", "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→ beans"))
        .stdout(predicate::str::contains("Visible: beans"))
        .stdout(predicate::str::contains("Active: settings"))
        .stderr(predicate::str::contains("Beankeeper is brewing"))
        .stderr(predicate::str::is_match("Navigated to: .*Settings").unwrap());
}

#[test]
fn test_navigate_json_output() {
    let dir = TempDir::new().unwrap();
    let output = beankeeper(dir.path())
        .args(["navigate", "--json", "brews"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let steps: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(steps[0]["key"], "brews");
    assert_eq!(steps[0]["found"], true);
    assert_eq!(steps[0]["snapshot"]["visible_pages"], serde_json::json!(["brews"]));
    assert_eq!(steps[0]["snapshot"]["active_triggers"], serde_json::json!(["brews"]));
    assert_eq!(steps[0]["snapshot"]["viewport"]["y"], 0);
}

#[test]
fn test_navigate_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    beankeeper(dir.path())
        .args(["navigate", "espresso"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Visible: (none)"))
        .stderr(predicate::str::contains("Page 'espresso' not found"))
        .stderr(predicate::str::contains("Unknown page key(s): espresso"));
}

#[test]
fn test_unknown_default_page_still_navigates() {
    let dir = TempDir::new().unwrap();
    beankeeper(dir.path())
        .args(["--default-page", "missing", "navigate", "home"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Page 'missing' not found"))
        .stdout(predicate::str::contains("Visible: home"));
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("site")).unwrap();
    fs::write(dir.path().join("site/tasks.html"), TASKS_MARKUP).unwrap();
    fs::write(
        dir.path().join("beankeeper.json"),
        r#"{
            "document": "site/tasks.html",
            "default_page": "inbox",
            "selectors": { "nav_class": "tab" }
        }"#,
    )
    .unwrap();

    beankeeper(dir.path())
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("inbox"))
        .stdout(predicate::str::contains("done"))
        .stdout(predicate::str::contains("beans").not());

    beankeeper(dir.path())
        .args(["navigate", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active: done"));
}

#[test]
fn test_document_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let document = dir.path().join("tasks.html");
    fs::write(&document, TASKS_MARKUP).unwrap();

    beankeeper(dir.path())
        .args(["--default-page", "inbox", "--document"])
        .arg(&document)
        .args(["navigate", "inbox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visible: inbox"))
        // The document's triggers use another class, so none is marked
        .stdout(predicate::str::contains("Active: (none)"));
}

#[test]
fn test_missing_document_is_an_error() {
    let dir = TempDir::new().unwrap();
    beankeeper(dir.path())
        .args(["--document", "nope.html", "pages"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read document"));
}

#[test]
fn test_navigate_requires_a_key() {
    let dir = TempDir::new().unwrap();
    beankeeper(dir.path()).arg("navigate").assert().failure();
}
