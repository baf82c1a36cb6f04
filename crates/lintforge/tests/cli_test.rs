use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), manifest).unwrap();
    temp
}

fn lintforge(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lintforge").unwrap();
    cmd.arg("generate")
        .arg("--directory")
        .arg(temp.path())
        .arg("--skip-runtime-check")
        .arg("--yes");
    cmd
}

#[test]
fn test_generate_eslint_prettier_non_interactive() {
    let temp = project(r#"{"name": "demo", "version": "1.0.0"}"#);

    lintforge(&temp)
        .args(["-f", "node", "-l", "eslint,prettier", "-m", "esm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "npm install -D eslint @eslint/js globals typescript typescript-eslint eslint-plugin-prettier prettier",
        ));

    let eslint = fs::read_to_string(temp.path().join("eslint.config.js")).unwrap();
    assert!(eslint.contains("export default tseslint.config("));
    assert!(eslint.contains("...globals.node"));

    let prettier = fs::read_to_string(temp.path().join("prettier.config.js")).unwrap();
    assert!(prettier.starts_with("export default {"));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["scripts"]["eslint"], "eslint --fix .");
    assert_eq!(manifest["scripts"]["prettier"], "prettier --write .");
}

#[test]
fn test_generate_from_preset() {
    let temp = project("{}");
    let preset = temp.path().join("lintforge.yaml");
    fs::write(
        &preset,
        "framework: vue\nlinters: [stylelint, commitlint, lintstaged]\nmodule_type: cjs\nstyle_processor: less\npackage_manager: pnpm\n",
    )
    .unwrap();

    lintforge(&temp)
        .arg("--preset")
        .arg(&preset)
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm run prepare"));

    let stylelint = fs::read_to_string(temp.path().join("stylelint.config.js")).unwrap();
    assert!(stylelint.starts_with("module.exports = {"));
    assert!(stylelint.contains("postcss-less"));
    assert!(stylelint.contains("postcss-html"));
    assert!(temp.path().join("commitlint.config.js").is_file());
    assert!(temp.path().join(".husky/commit-msg").is_file());
    assert!(temp.path().join(".husky/pre-commit").is_file());
}

#[test]
fn test_missing_manifest_fails() {
    let temp = TempDir::new().unwrap();

    lintforge(&temp)
        .args(["-f", "react", "-l", "eslint", "-m", "esm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No package.json found"));

    assert!(!temp.path().join("eslint.config.js").exists());
}

#[test]
fn test_malformed_manifest_fails() {
    let temp = project("{ \"name\": ");

    lintforge(&temp)
        .args(["-f", "react", "-l", "prettier", "-m", "esm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_unknown_linter_fails() {
    let temp = project("{}");

    lintforge(&temp)
        .args(["-l", "eslint,jshint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported linter: jshint"));
}
