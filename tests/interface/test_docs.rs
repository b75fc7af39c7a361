use imeta_registry::InterfaceRegistry;

use super::common::{base_decl, sub_decl};

fn registry() -> InterfaceRegistry {
    let mut registry = InterfaceRegistry::new();
    registry.register(base_decl()).unwrap();
    registry.register(sub_decl()).unwrap();
    registry
}

#[test]
fn test_class_docs() {
    let registry = registry();
    assert_eq!(
        registry.get("Base").unwrap().doc.as_deref(),
        Some("Base class\n\nAttributes:\n    ATTRIBUTE (str): An attribute.")
    );
    assert_eq!(
        registry.get("SubBase").unwrap().doc.as_deref(),
        Some("SubBase class\n\nAttributes inherited from Base:\n    ATTRIBUTE (str): An attribute.")
    );
}

#[test]
fn test_member_docs() {
    let registry = registry();
    let doc = |name| registry.member_docs("SubBase", name);

    assert_eq!(doc("__init__"), Some("Subclass Constructor"));
    assert_eq!(doc("property_method"), Some("Property Method"));
    assert_eq!(
        doc("regular_method"),
        Some("Regular Method\n\nSubBase Quirks:\n    Subclass Regular Method")
    );
    assert_eq!(
        doc("static_method"),
        Some("Static Method\n\nSubBase Quirks:\n    Subclass Static Method")
    );
    assert_eq!(doc("class_method"), Some("Subclass Class Method"));
    assert_eq!(
        doc("split_method"),
        Some("Split Method\n\nSubBase Quirks:\n    Subclass split_method quirks")
    );
    assert_eq!(doc("mro_documented"), Some("Documentation in SubBase"));
}

#[test]
fn test_base_is_untouched() {
    let registry = registry();
    assert_eq!(registry.member_docs("Base", "regular_method"), Some("Regular Method"));
    assert_eq!(registry.member_docs("Base", "split_method"), Some("Split Method"));
}

#[test]
fn test_member_kinds_survive_composition() {
    let registry = registry();
    let sub = registry.get("SubBase").unwrap();
    let base = registry.get("Base").unwrap();
    for (name, member) in &base.members {
        if let Some(own) = sub.member(name) {
            assert_eq!(own.kind(), member.kind(), "{name} changed kind");
        }
    }
}

#[test]
fn test_original_docs_are_kept() {
    let registry = registry();
    let (owner, member) = registry.resolve_member("SubBase", "regular_method").unwrap();
    assert_eq!(owner.name, "SubBase");
    assert_eq!(member.docs(true), Some("Subclass Regular Method"));
}
