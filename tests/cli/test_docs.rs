use super::common::{create_project, run_imeta, FIXTURE_MANIFEST};

#[test]
fn test_docs_for_member() {
    let (_dir, root) = create_project(&[("fixture.json", FIXTURE_MANIFEST)]);
    let out = run_imeta(
        &root,
        &["docs", "fixture.json", "--class", "SubBase", "--member", "regular_method"],
    );
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("SubBase  [root: Base, mro: SubBase -> Base]\n"));
    assert!(stdout.contains("SubBase.regular_method(self, a, b, c)  [method, from SubBase]\n"));
    assert!(stdout.contains(
        "    Regular Method\n\n    SubBase Quirks:\n        Subclass Regular Method\n"
    ));
    assert!(!stdout.contains("static_method"));
}

#[test]
fn test_docs_json() {
    let (_dir, root) = create_project(&[("fixture.json", FIXTURE_MANIFEST)]);
    let out = run_imeta(&root, &["--json", "docs", "fixture.json", "--class", "SubBase"]);
    assert_eq!(out.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let class = &json["classes"][0];
    assert_eq!(json["classes"].as_array().unwrap().len(), 1);
    assert_eq!(class["name"], "SubBase");
    assert_eq!(class["mro"], serde_json::json!(["SubBase", "Base"]));
    assert_eq!(
        class["doc"],
        "SubBase class\n\nAttributes inherited from Base:\n    ATTRIBUTE (str): An attribute."
    );

    let members = class["members"].as_array().unwrap();
    let split = members.iter().find(|m| m["name"] == "split_method").unwrap();
    assert_eq!(split["kind"], "method");
    assert_eq!(split["defined_in"], "SubBase");
    assert_eq!(
        split["doc"],
        "Split Method\n\nSubBase Quirks:\n    Subclass split_method quirks"
    );
    let forced = members.iter().find(|m| m["name"] == "class_method").unwrap();
    assert_eq!(forced["kind"], "classmethod");
    assert_eq!(forced["doc"], "Subclass Class Method");
}

#[test]
fn test_docs_unknown_class() {
    let (_dir, root) = create_project(&[("fixture.json", FIXTURE_MANIFEST)]);
    let out = run_imeta(&root, &["docs", "fixture.json", "--class", "Missing"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Missing"));
}
