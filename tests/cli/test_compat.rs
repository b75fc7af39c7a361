use super::common::run_imeta;

fn compat(candidate: &str, reference: &str) -> std::process::Output {
    let dir = tempfile::tempdir().unwrap();
    run_imeta(dir.path(), &["compat", candidate, reference])
}

#[test]
fn test_compatible_extension() {
    let out = compat("(self, a, b=1, *args, **kwargs)", "(self, a)");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "compatible: `(self, a, b=1, *args, **kwargs)` conforms to `(self, a)`\n"
    );
}

#[test]
fn test_incompatible_rename() {
    let out = compat("(self, x)", "(self, a)");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("incompatible:"));
}

#[test]
fn test_compat_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_imeta(dir.path(), &["--json", "compat", "(a, *, b=2)", "(a)"]);
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["command"], "compat");
    assert_eq!(json["compatible"], true);
}

#[test]
fn test_invalid_signature() {
    let out = compat("(a=1, b)", "(a, b)");
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid candidate signature"));
}
