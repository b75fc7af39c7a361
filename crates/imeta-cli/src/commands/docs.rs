use std::path::{Path, PathBuf};

use imeta_enforce::types::{ClassDocs, DocsResult, MemberDocs};
use imeta_output::OutputFormatter;
use imeta_registry::{manifest, InterfaceRegistry};

use super::sources::{load_defaults, manifest_files};

/// Run `imeta docs <paths>` -- print the composed documentation of registered classes.
pub fn run(
    formatter: &dyn OutputFormatter,
    config: Option<&Path>,
    paths: Vec<PathBuf>,
    class: Option<String>,
    member: Option<String>,
) -> i32 {
    let defaults = load_defaults(config);
    let files = match manifest_files(&paths) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("imeta docs: {}", e);
            return 2;
        }
    };

    let mut result = DocsResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "docs".to_string(),
        classes: Vec::new(),
    };

    for file in &files {
        let registry = match manifest::load(file).and_then(|m| m.register(&defaults)) {
            Ok((registry, _)) => registry,
            Err(e) => {
                eprintln!("imeta docs: {}: {}", file.display(), e);
                return 2;
            }
        };
        for descriptor in registry.classes() {
            if class.as_deref().is_some_and(|c| c != descriptor.name) {
                continue;
            }
            if let Some(docs) = class_docs(&registry, &descriptor.name, member.as_deref()) {
                result.classes.push(docs);
            }
        }
    }

    if let Some(name) = &class {
        if result.classes.is_empty() {
            eprintln!("imeta docs: no class named '{}' found", name);
            return 2;
        }
    }
    if let Some(name) = &member {
        if result.classes.iter().all(|c| c.members.is_empty()) {
            eprintln!("imeta docs: no member named '{}' found", name);
            return 2;
        }
    }

    print!("{}", formatter.format_docs(&result));
    0
}

fn class_docs(registry: &InterfaceRegistry, name: &str, only: Option<&str>) -> Option<ClassDocs> {
    let hierarchy = registry.hierarchy(name)?;
    let class = hierarchy.class();

    let members = hierarchy
        .member_names()
        .into_iter()
        .filter(|n| only.map_or(true, |o| o == *n))
        .filter_map(|n| {
            let (owner, m) = hierarchy.resolve(n)?;
            Some(MemberDocs {
                name: n.to_string(),
                kind: m.kind().to_string(),
                defined_in: owner.name.clone(),
                signature: m.signature().map(ToString::to_string),
                doc: m.docs(false).map(str::to_string),
                doc_orig: m.docs(true).map(str::to_string),
            })
        })
        .collect();

    Some(ClassDocs {
        name: class.name.clone(),
        interface_root: class.interface_root.clone(),
        mro: class.mro.clone(),
        doc: class.doc.clone(),
        members,
    })
}
