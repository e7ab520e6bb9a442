//! Integration tests for `factory-finder paths`.

mod common;

use common::{Layout, finder_cmd};
use predicates::prelude::*;

#[test]
fn test_paths_reports_missing_files() {
    let layout = Layout::new();
    let expected = layout.home().join("conf").join("factories.properties");

    finder_cmd()
        .arg("--home")
        .arg(layout.home())
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{} (missing)",
            expected.display()
        )))
        .stdout(predicate::str::contains("Modules root:       disabled"));
}

#[test]
fn test_paths_json_reports_existing_files() {
    let layout = Layout::new();
    let written = layout.write_config("conf", "a.b.C=x.y.Z\n");

    let output = layout
        .cmd()
        .args(["--output", "json", "paths"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["config_file"]["path"],
        written.to_string_lossy().as_ref()
    );
    assert_eq!(value["config_file"]["exists"], true);
    assert_eq!(value["legacy_config_file"]["exists"], false);
    assert_eq!(value["resource_roots"].as_array().unwrap().len(), 1);
    assert_eq!(value["modules_root"]["exists"], true);
    assert_eq!(value["module_name"], "impl");
}

#[test]
fn test_custom_config_file_name() {
    let layout = Layout::new();

    finder_cmd()
        .arg("--home")
        .arg(layout.home())
        .args(["--config-file", "jaxm.properties", "paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jaxm.properties"));
}

#[test]
fn test_config_file_name_with_separator_rejected() {
    finder_cmd()
        .args(["--config-file", "conf/factories.properties", "paths"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a path"));
}
