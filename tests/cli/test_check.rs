use super::common::{create_project, run_imeta, BROKEN_MANIFEST, CLEAN_MANIFEST, FIXTURE_MANIFEST};

#[test]
fn test_clean_check_is_silent() {
    let (_dir, root) = create_project(&[("store.json", CLEAN_MANIFEST)]);
    let out = run_imeta(&root, &["check", "store.json"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_check_reports_warnings() {
    let (_dir, root) = create_project(&[("fixture.json", FIXTURE_MANIFEST)]);
    let out = run_imeta(&root, &["check", "fixture.json"]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("warning[E001]"), "got: {stdout}");
    assert!(stdout.contains("--> SubBase._split_method"));
    assert!(stdout.contains("--> SubBase.mro_documented"));
    assert!(stdout.contains("0 error(s), 2 warning(s) in 2 class(es)"));
}

#[test]
fn test_check_json() {
    let (_dir, root) = create_project(&[("store.json", BROKEN_MANIFEST)]);
    let out = run_imeta(&root, &["--json", "check", "store.json"]);
    assert_eq!(out.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["command"], "check");
    assert_eq!(json["status"], "warning");
    assert_eq!(json["classes_checked"], serde_json::json!(["Store", "MemoryStore"]));
    assert_eq!(json["warnings"][0]["code"], "E003");
    assert_eq!(json["warnings"][0]["severity"], "WARNING");
    assert_eq!(json["warnings"][0]["base"], "Store");
}

#[test]
fn test_check_raise_stops_manifest() {
    let (_dir, root) = create_project(&[("store.json", BROKEN_MANIFEST)]);
    let out = run_imeta(&root, &["--json", "check", "--raise", "store.json"]);
    assert_eq!(out.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["errors"][0]["code"], "E003");
    assert_eq!(json["errors"][0]["severity"], "ERROR");
    assert_eq!(json["warnings"], serde_json::json!([]));
}

#[test]
fn test_check_directory() {
    let (_dir, root) = create_project(&[
        ("interfaces/a_store.json", CLEAN_MANIFEST),
        ("interfaces/nested/b_fixture.json", FIXTURE_MANIFEST),
        ("interfaces/imeta.json", "{\"explicit_overrides\": false}"),
        ("interfaces/README.md", "not a manifest"),
    ]);
    let out = run_imeta(&root, &["--json", "check", "interfaces"]);
    assert_eq!(out.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let sources: Vec<_> = json["sources"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap().replace('\\', "/"))
        .collect();
    assert_eq!(sources.len(), 2);
    assert!(sources[0].ends_with("interfaces/a_store.json"));
    assert!(sources[1].ends_with("interfaces/nested/b_fixture.json"));
}

#[test]
fn test_config_file_relaxes_overrides() {
    let (_dir, root) = create_project(&[
        ("fixture.json", FIXTURE_MANIFEST),
        ("imeta.json", "{\"explicit_overrides\": false}"),
    ]);
    let out = run_imeta(&root, &["check", "fixture.json"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty(), "got: {}", String::from_utf8_lossy(&out.stdout));
}

#[test]
fn test_explicit_config_flag() {
    let (_dir, root) = create_project(&[
        ("fixture.json", FIXTURE_MANIFEST),
        ("settings/strict.json", "{\"raise_on_violation\": true}"),
    ]);
    let out = run_imeta(&root, &["--config", "settings/strict.json", "check", "fixture.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("error[E001]"));
}
