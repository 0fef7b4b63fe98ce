use assert_cmd::Command;
use depcalc_core::config::CONFIG_FILE;
use depcalc_util::fs::find_ancestor_with;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn depcalc_cmd() -> Command {
    let mut cmd = Command::cargo_bin("depcalc").unwrap();
    cmd.env_remove("DEPCALC_ROOT").env_remove("RUST_LOG");
    cmd
}

const MODULE_MAP: &str = r#"{
    "yui-base": {},
    "oop": { "requires": ["yui-base"] },
    "yql": { "requires": ["oop"] },
    "yql-jsonp": { "condition": { "name": "yql-jsonp", "trigger": "yql" } },
    "autocomplete-sources": { "optional": ["yql"] }
}"#;

fn write_descriptor(root: &Path, name: &str, builds: &[&str]) {
    let dir = root.join("src").join(name);
    fs::create_dir_all(&dir).unwrap();
    let builds: Vec<String> = builds.iter().map(|b| format!("\"{b}\": {{}}")).collect();
    fs::write(
        dir.join("build.json"),
        format!(r#"{{ "name": "{name}", "builds": {{ {} }} }}"#, builds.join(", ")),
    )
    .unwrap();
}

/// A root laid out the way a YUI checkout is.
fn yui_root() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let loader = root.join("src").join("loader").join("js");
    fs::create_dir_all(&loader).unwrap();
    fs::write(loader.join("yui3.json"), MODULE_MAP).unwrap();
    fs::write(root.join("depcalc.toml"), "").unwrap();

    write_descriptor(root, "yui", &["yui-base"]);
    write_descriptor(root, "oop", &["oop"]);
    write_descriptor(root, "yql", &["yql", "yql-jsonp"]);
    write_descriptor(root, "autocomplete", &["autocomplete-sources"]);
    tmp
}

#[test]
fn test_no_modules_fails() {
    let tmp = yui_root();

    depcalc_cmd()
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No modules specified"));
}

#[test]
fn test_without_root_fails() {
    let tmp = TempDir::new().unwrap();
    if find_ancestor_with(tmp.path(), CONFIG_FILE).is_some() {
        // A stray marker above the temp dir would be picked up as the root.
        return;
    }

    depcalc_cmd()
        .current_dir(tmp.path())
        .arg("yql")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration missing"))
        .stderr(predicate::str::contains(
            "Unable to determine the module-map root",
        ));
}

#[test]
fn test_root_that_is_not_a_directory_fails() {
    let tmp = TempDir::new().unwrap();

    depcalc_cmd()
        .args(["--root"])
        .arg(tmp.path().join("missing"))
        .arg("yql")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_json_output() {
    let tmp = yui_root();

    let output = depcalc_cmd()
        .current_dir(tmp.path())
        .args(["--json", "yql"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["source"], serde_json::json!(["yql"]));
    assert_eq!(
        tree["upstream"]["modules"],
        serde_json::json!(["oop", "yql", "yql-jsonp", "yui-base"])
    );
    assert_eq!(
        tree["upstream"]["components"],
        serde_json::json!(["oop", "yql", "yui"])
    );
    assert_eq!(
        tree["downstream"]["modules"],
        serde_json::json!(["autocomplete-sources", "yql"])
    );
    assert_eq!(
        tree["downstream"]["components"],
        serde_json::json!(["autocomplete", "yql"])
    );
}

#[test]
fn test_json_uses_four_space_indent() {
    let tmp = yui_root();

    depcalc_cmd()
        .current_dir(tmp.path())
        .args(["--json", "oop"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "{\n    \"source\": [\n        \"oop\"\n    ],",
        ));
}

#[test]
fn test_tree_output() {
    let tmp = yui_root();

    depcalc_cmd()
        .current_dir(tmp.path())
        .arg("yql")
        .assert()
        .success()
        .stdout(predicate::str::contains("┌─── Upstream"))
        .stdout(predicate::str::contains("├─ Source(s): yql"))
        .stdout(predicate::str::contains("└─── Downstream"))
        .stdout(predicate::str::contains("├─── Modules (4)"))
        .stdout(predicate::str::contains("|    └─ yql"));
}

#[test]
fn test_root_found_from_subdirectory() {
    let tmp = yui_root();

    depcalc_cmd()
        .current_dir(tmp.path().join("src").join("yql"))
        .args(["--json", "yui-base"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"yui-base\""));
}

#[test]
fn test_root_from_env() {
    let tmp = yui_root();
    let elsewhere = TempDir::new().unwrap();

    depcalc_cmd()
        .current_dir(elsewhere.path())
        .env("DEPCALC_ROOT", tmp.path())
        .args(["--json", "oop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"yui-base\""));
}

#[test]
fn test_component_mode() {
    let tmp = yui_root();

    let output = depcalc_cmd()
        .current_dir(tmp.path())
        .args(["--json", "--component", "yql"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["source"], serde_json::json!(["yql", "yql-jsonp"]));
}

#[test]
fn test_modules_from_stdin() {
    let tmp = yui_root();

    let output = depcalc_cmd()
        .current_dir(tmp.path())
        .args(["--json", "--stdin", "oop"])
        .write_stdin("yql-jsonp\n  yui-base\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        tree["source"],
        serde_json::json!(["oop", "yql-jsonp", "yui-base"])
    );
}

#[test]
fn test_unknown_module_warns() {
    let tmp = yui_root();

    depcalc_cmd()
        .current_dir(tmp.path())
        .args(["--json", "nope"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not in the module map"));
}

#[test]
fn test_unknown_module_fails_when_strict() {
    let tmp = yui_root();

    depcalc_cmd()
        .current_dir(tmp.path())
        .args(["--strict", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown module: nope"));
}

#[test]
fn test_malformed_module_map_fails() {
    let tmp = yui_root();
    fs::write(
        tmp.path().join("src").join("loader").join("js").join("yui3.json"),
        "{ not json",
    )
    .unwrap();

    depcalc_cmd()
        .current_dir(tmp.path())
        .arg("yql")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
