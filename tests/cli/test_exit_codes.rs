// Exit codes: 0 clean, 1 violations, 2 usage or input errors.

use super::common::{create_project, run_imeta, BROKEN_MANIFEST, CLEAN_MANIFEST};

#[test]
fn test_exit_code_0_clean() {
    let (_dir, root) = create_project(&[("store.json", CLEAN_MANIFEST)]);
    assert_eq!(run_imeta(&root, &["check", "--strict", "store.json"]).status.code(), Some(0));
}

#[test]
fn test_exit_code_0_warnings_without_strict() {
    let (_dir, root) = create_project(&[("store.json", BROKEN_MANIFEST)]);
    assert_eq!(run_imeta(&root, &["check", "store.json"]).status.code(), Some(0));
}

#[test]
fn test_exit_code_1_strict_warnings() {
    let (_dir, root) = create_project(&[("store.json", BROKEN_MANIFEST)]);
    assert_eq!(run_imeta(&root, &["check", "--strict", "store.json"]).status.code(), Some(1));
}

#[test]
fn test_exit_code_2_missing_path() {
    let (_dir, root) = create_project(&[]);
    let out = run_imeta(&root, &["check", "nowhere.json"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("nowhere.json"));
}

#[test]
fn test_exit_code_2_malformed_manifest() {
    let (_dir, root) = create_project(&[("bad.json", "{ not json")]);
    assert_eq!(run_imeta(&root, &["check", "bad.json"]).status.code(), Some(2));
}

#[test]
fn test_exit_code_2_unknown_base() {
    let (_dir, root) = create_project(&[(
        "orphan.json",
        r#"{"classes": [{"name": "Orphan", "bases": ["Missing"]}]}"#,
    )]);
    let out = run_imeta(&root, &["check", "orphan.json"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Missing"));
}

#[test]
fn test_exit_code_2_unsupported_shell() {
    let (_dir, root) = create_project(&[]);
    assert_eq!(run_imeta(&root, &["completion", "tcsh"]).status.code(), Some(2));
}

#[test]
fn test_completion_bash() {
    let (_dir, root) = create_project(&[]);
    let out = run_imeta(&root, &["completion", "bash"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("imeta"));
}
