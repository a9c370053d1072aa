//! End-to-end tests for the commands that need no browser.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn waypoint() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("waypoint"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write_suite(dir: &Path, file: &str, id: &str, viewports: usize) {
    let mut text = format!(
        r#"
[manifest]
id = "{id}"
name = "{id} test"
description = "Tests navigation for {id}"

[target]
url = "https://www.{id}.example"
nav_selector = "a[href$='news']"
title_pattern = "News"
destination_url_pattern = "/news"
"#
    );
    for i in 0..viewports {
        text.push_str(&format!(
            "\n[[viewports]]\nname = \"v{i}\"\nwidth = {}\nheight = 600\n",
            800 + i * 100
        ));
    }
    let path = dir.join(file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

#[test]
fn test_help_lists_commands() {
    waypoint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_list_prints_suites_in_path_order() {
    let temp = TempDir::new().unwrap();
    write_suite(temp.path(), "b/cbc.toml", "cbc", 1);
    write_suite(temp.path(), "a/bloomberg.toml", "bloomberg", 3);
    fs::write(temp.path().join("waypoint.toml"), "output_dir = \"shots\"\n").unwrap();

    let output = waypoint()
        .arg("list")
        .arg(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let bloomberg = stdout.find("bloomberg  bloomberg test  (3 viewport(s))").unwrap();
    let cbc = stdout.find("cbc  cbc test  (1 viewport(s))").unwrap();
    assert!(bloomberg < cbc);
    assert!(!stdout.contains("shots"));
}

#[test]
fn test_check_valid_suites() {
    let temp = TempDir::new().unwrap();
    write_suite(temp.path(), "cbc.toml", "cbc", 2);

    waypoint()
        .arg("check")
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("cbc"))
        .stderr(predicate::str::contains("4 assertion(s)"))
        .stderr(predicate::str::contains("1 suite(s) valid"));
}

#[test]
fn test_check_reports_every_invalid_suite() {
    let temp = TempDir::new().unwrap();
    write_suite(temp.path(), "good.toml", "good", 1);
    fs::write(
        temp.path().join("bad-pattern.toml"),
        r#"
[manifest]
id = "bad-pattern"
name = "Bad pattern"
description = "Unclosed group"

[target]
url = "https://example.com"
nav_selector = "a"
title_pattern = "("
destination_url_pattern = "x"
"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("bad-url.toml"),
        r#"
[manifest]
id = "bad-url"
name = "Bad url"
description = "Relative target"

[target]
url = "example.com"
nav_selector = "a"
title_pattern = "x"
destination_url_pattern = "x"
"#,
    )
    .unwrap();

    waypoint()
        .arg("check")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad-pattern.toml"))
        .stderr(predicate::str::contains("bad-url.toml"))
        .stderr(predicate::str::contains("2 invalid suite file(s)"));
}

#[test]
fn test_check_empty_directory_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.toml"), "title = \"not a suite\"\n").unwrap();

    waypoint()
        .arg("check")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No suites found"));
}

#[test]
fn test_init_writes_checkable_suite() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("suites");

    waypoint().arg("init").arg(&dir).assert().success();

    let suite = dir.join("waypoint.suite.toml");
    assert!(suite.exists());

    waypoint().arg("check").arg(&suite).assert().success();
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    let suite = temp.path().join("waypoint.suite.toml");
    fs::write(&suite, "# mine\n").unwrap();

    waypoint()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&suite).unwrap(), "# mine\n");

    waypoint()
        .arg("init")
        .arg(temp.path())
        .arg("--force")
        .assert()
        .success();
    assert!(fs::read_to_string(&suite).unwrap().contains("[manifest]"));
}

#[test]
fn test_run_missing_path_fails_before_browser_launch() {
    let temp = TempDir::new().unwrap();

    waypoint()
        .current_dir(temp.path())
        .arg("run")
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing"));
}
