use imeta_core::{Callable, ClassDecl, ConfigOverrides, InterfaceConfig, Member};
use imeta_enforce::ledger::OverrideExt;
use imeta_enforce::types::{SEVERITY_ERROR, SEVERITY_WARNING};
use imeta_registry::{InterfaceRegistry, RegistryError};

use super::common::{base_decl, sub_decl};

fn method(sig: &str) -> Member {
    Member::method(Callable::new("m", sig.parse().unwrap()))
}

#[test]
fn test_fixture_warnings() {
    let mut registry = InterfaceRegistry::new();
    assert!(registry.register(base_decl()).unwrap().violations.is_empty());

    let reg = registry.register(sub_decl()).unwrap();
    let found: Vec<_> = reg
        .violations
        .iter()
        .map(|v| (v.code.as_str(), v.member.as_str()))
        .collect();
    assert_eq!(found, vec![("E001", "_split_method"), ("E001", "mro_documented")]);
    assert!(reg.violations.iter().all(|v| v.severity == SEVERITY_WARNING));
    assert_eq!(reg.violations[0].base.as_deref(), Some("Base"));
}

#[test]
fn test_fixture_raises_when_configured() {
    let mut registry = InterfaceRegistry::with_defaults(InterfaceConfig {
        raise_on_violation: true,
        ..Default::default()
    });
    registry.register(base_decl()).unwrap();

    let err = registry.register(sub_decl()).unwrap_err();
    let RegistryError::Conformance(e) = err else {
        panic!("expected a conformance error");
    };
    assert_eq!(e.violation().member, "_split_method");
    assert_eq!(e.violation().severity, SEVERITY_ERROR);
    assert!(!registry.contains("SubBase"));
}

#[test]
fn test_every_violation_kind() {
    let mut registry = InterfaceRegistry::new();
    registry
        .register(
            ClassDecl::new("Base")
                .member("run", method("(self, a)"))
                .member("LIMIT", Member::data("int", Some("3"))),
        )
        .unwrap();

    let reg = registry
        .register(
            ClassDecl::new("Sub")
                .base("Base")
                .member("run", method("(self)").overriding())
                .member("LIMIT", method("(self)"))
                .member("extra", method("(self)").overriding())
                .member("plain", method("(self)")),
        )
        .unwrap();

    let mut codes: Vec<_> = reg.violations.iter().map(|v| v.code.clone()).collect();
    codes.sort();
    assert_eq!(codes, vec!["E002", "E003", "E004"]);
}

#[test]
fn test_skipped_names_are_not_checked() {
    let mut registry = InterfaceRegistry::new();
    registry
        .register(
            ClassDecl::new("Base")
                .member("run", method("(self, a)"))
                .config(ConfigOverrides {
                    skipped_names: Some(["run".to_string()].into_iter().collect()),
                    ..Default::default()
                }),
        )
        .unwrap();
    let reg = registry
        .register(ClassDecl::new("Sub").base("Base").member("run", method("(self)")))
        .unwrap();
    assert!(reg.violations.is_empty());
}

#[test]
fn test_three_level_override() {
    let mut registry = InterfaceRegistry::new();
    registry
        .register(ClassDecl::new("Base").member("run", method("(self, a, b=1)")))
        .unwrap();
    registry
        .register(
            ClassDecl::new("Mid")
                .base("Base")
                .member("run", method("(self, a, b=1, c=2)").overriding()),
        )
        .unwrap();
    // checked against the nearest definition, which takes `c`
    let reg = registry
        .register(
            ClassDecl::new("Leaf")
                .base("Mid")
                .member("run", method("(self, a, b=1)").overriding()),
        )
        .unwrap();
    assert_eq!(reg.violations.len(), 1);
    assert_eq!(reg.violations[0].code, "E003");
    assert_eq!(reg.violations[0].base.as_deref(), Some("Mid"));
}
