/// Shared test helpers for all imeta integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use imeta_core::{Callable, ClassDecl, Member};
use imeta_enforce::ledger::OverrideExt;
use tempfile::TempDir;

fn callable(sig: &str, doc: Option<&str>) -> Callable {
    let c = Callable::new("f", sig.parse().unwrap());
    match doc {
        Some(d) => c.with_doc(d),
        None => c,
    }
}

/// The reference interface: a root exercising every member kind.
#[allow(dead_code)]
pub fn base_decl() -> ClassDecl {
    ClassDecl::new("Base")
        .doc("Base class")
        .attributes_doc("\n    ATTRIBUTE (str): An attribute.\n    ")
        .member("ATTRIBUTE", Member::data("str", Some("class attribute")))
        .member("__init__", Member::method(callable("(self, a, b, c)", Some("Constructor"))))
        .member("property_method", Member::property(callable("(self)", Some("Property Method"))))
        .member(
            "regular_method",
            Member::method(callable("(self, a, b, c)", Some("Regular Method"))),
        )
        .member(
            "static_method",
            Member::static_method(callable("(a, b, c)", Some("Static Method"))),
        )
        .member(
            "class_method",
            Member::class_method(callable("(cls, a, b, c)", Some("Class Method"))),
        )
        .member(
            "split_method",
            Member::method(callable("(self, a, b, c)", Some("Split Method")))
                .with_quirk_docs(Some("_split_method"), true),
        )
        .member("_split_method", Member::method(callable("(self, a, b, c)", None)))
        .member(
            "mro_documented",
            Member::method(callable("(self, a, b, c)", Some("Documentation in Base"))),
        )
}

/// An implementation of [`base_decl`] mixing tagged, forced and untagged overrides.
#[allow(dead_code)]
pub fn sub_decl() -> ClassDecl {
    ClassDecl::new("SubBase")
        .base("Base")
        .doc("SubBase class")
        .member("ATTRIBUTE", Member::data("str", Some("subclass attribute")))
        .member(
            "__init__",
            Member::method(callable("(self, a, b, c)", Some("Subclass Constructor"))),
        )
        .member(
            "regular_method",
            Member::method(callable("(self, a, b, c)", Some("Subclass Regular Method")))
                .overriding(),
        )
        .member(
            "static_method",
            Member::static_method(callable("(a, b, c)", Some("Subclass Static Method")))
                .overriding(),
        )
        .member(
            "class_method",
            Member::class_method(callable("(cls, a, b, c)", Some("Subclass Class Method")))
                .force_override(),
        )
        .member(
            "_split_method",
            Member::method(callable("(self, a, b, c)", Some("Subclass split_method quirks"))),
        )
        .member(
            "mro_documented",
            Member::method(callable("(self, a, b, c)", Some("Documentation in SubBase")))
                .with_quirk_docs(None, false),
        )
}

/// [`base_decl`] and [`sub_decl`] as a JSON manifest.
#[allow(dead_code)]
pub const FIXTURE_MANIFEST: &str = r#"{
  "classes": [
    {
      "name": "Base",
      "doc": "Base class",
      "attributes_doc": "\n    ATTRIBUTE (str): An attribute.\n    ",
      "members": {
        "ATTRIBUTE": { "kind": "data", "type": "str", "value": "class attribute" },
        "__init__": { "kind": "method", "signature": "(self, a, b, c)", "doc": "Constructor" },
        "property_method": { "kind": "property", "doc": "Property Method" },
        "regular_method": { "kind": "method", "signature": "(self, a, b, c)", "doc": "Regular Method" },
        "static_method": { "kind": "staticmethod", "signature": "(a, b, c)", "doc": "Static Method" },
        "class_method": { "kind": "classmethod", "signature": "(cls, a, b, c)", "doc": "Class Method" },
        "split_method": {
          "kind": "method",
          "signature": "(self, a, b, c)",
          "doc": "Split Method",
          "quirk_docs": { "method": "_split_method" }
        },
        "_split_method": { "kind": "method", "signature": "(self, a, b, c)" },
        "mro_documented": { "kind": "method", "signature": "(self, a, b, c)", "doc": "Documentation in Base" }
      }
    },
    {
      "name": "SubBase",
      "bases": ["Base"],
      "doc": "SubBase class",
      "members": {
        "ATTRIBUTE": { "kind": "data", "type": "str", "value": "subclass attribute" },
        "__init__": { "kind": "method", "signature": "(self, a, b, c)", "doc": "Subclass Constructor" },
        "regular_method": {
          "kind": "method",
          "signature": "(self, a, b, c)",
          "doc": "Subclass Regular Method",
          "override": true
        },
        "static_method": {
          "kind": "staticmethod",
          "signature": "(a, b, c)",
          "doc": "Subclass Static Method",
          "override": true
        },
        "class_method": {
          "kind": "classmethod",
          "signature": "(cls, a, b, c)",
          "doc": "Subclass Class Method",
          "force": true
        },
        "_split_method": {
          "kind": "method",
          "signature": "(self, a, b, c)",
          "doc": "Subclass split_method quirks"
        },
        "mro_documented": {
          "kind": "method",
          "signature": "(self, a, b, c)",
          "doc": "Documentation in SubBase",
          "quirk_docs": { "mro": false }
        }
      }
    }
  ]
}
"#;

/// A manifest whose only subclass conforms cleanly.
#[allow(dead_code)]
pub const CLEAN_MANIFEST: &str = r#"{
  "classes": [
    {
      "name": "Store",
      "doc": "Key-value store",
      "members": {
        "get": { "kind": "method", "signature": "(self, key, default=None)", "doc": "Fetch a value." }
      }
    },
    {
      "name": "MemoryStore",
      "bases": ["Store"],
      "members": {
        "get": {
          "kind": "method",
          "signature": "(self, key, default=None, *, copy=False)",
          "doc": "Values are returned by reference unless `copy` is set.",
          "override": true
        }
      }
    }
  ]
}
"#;

/// A manifest whose subclass narrows an interface signature.
#[allow(dead_code)]
pub const BROKEN_MANIFEST: &str = r#"{
  "classes": [
    {
      "name": "Store",
      "members": {
        "get": { "kind": "method", "signature": "(self, key, default=None)" }
      }
    },
    {
      "name": "MemoryStore",
      "bases": ["Store"],
      "members": {
        "get": { "kind": "method", "signature": "(self, key)", "override": true }
      }
    }
  ]
}
"#;

/// Create a directory of files.
///
/// Each entry in `files` is `(relative_path, content)`.
/// Returns (TempDir, root). Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn create_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full_path = dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }
    let root = dir.path().to_path_buf();
    (dir, root)
}

/// Get path to compiled imeta binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn imeta_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("imeta");
    if !path.exists() {
        let status = Command::new("cargo")
            .args(["build", "-p", "imeta-cli"])
            .current_dir(env!("CARGO_MANIFEST_DIR"))
            .status()
            .expect("Failed to build imeta");
        assert!(status.success(), "Failed to build imeta binary");
    }
    path
}

/// Run imeta in `dir` with logging silenced.
#[allow(dead_code)]
pub fn run_imeta(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(imeta_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("IMETA_CONFIG")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run imeta")
}
