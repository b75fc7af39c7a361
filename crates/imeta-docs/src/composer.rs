//! Documentation composition.
//!
//! When a class is registered, its docstring gains an attributes section for
//! every class in its interface chain that documents attributes, and every
//! member visible on it gets one merged docstring: the documentation of the
//! most ancestral declaration first, then one `<Class> Quirks:` section per
//! descendant that added different documentation.
//!
//! Composition only reads the hierarchy. The result is a set of per-class
//! member copies, so ancestors' members are never touched.

use std::collections::BTreeMap;

use imeta_core::class::{ClassDescriptor, Hierarchy};
use imeta_core::member::Member;
use imeta_core::text::cleandoc;
use imeta_enforce::ledger::{
    has_forced_override, has_quirk_docs_method, quirk_docs_method, quirk_docs_mro,
};

use crate::join::{join, DocNode};

/// Documentation computed for a class, ready to install.
#[derive(Debug, Clone, Default)]
pub struct ComposedDocs {
    pub class_doc: Option<String>,
    /// Per-class member copies carrying composed docs, by member name.
    pub members: BTreeMap<String, Member>,
}

impl ComposedDocs {
    /// Install the composed docs on the class they were computed for.
    pub fn apply(self, class: &mut ClassDescriptor) {
        class.doc = self.class_doc;
        class.members.extend(self.members);
    }
}

/// Compose the class docstring and every member docstring.
pub fn compose(hierarchy: &Hierarchy<'_>) -> ComposedDocs {
    ComposedDocs {
        class_doc: compose_class_doc(hierarchy),
        members: compose_member_docs(hierarchy),
    }
}

/// The class's own docstring followed by the attribute documentation of
/// every class in its chain.
pub fn compose_class_doc(hierarchy: &Hierarchy<'_>) -> Option<String> {
    let class = hierarchy.class();
    let mut nodes = vec![DocNode::from(class.doc_orig.clone())];
    for klass in hierarchy.chain() {
        let Some(attributes) = &klass.attributes_doc else {
            continue;
        };
        let header = if klass.name == class.name {
            "Attributes:".to_string()
        } else {
            format!("Attributes inherited from {}:", klass.name)
        };
        nodes.push(DocNode::section(header, vec![DocNode::text(cleandoc(attributes))]));
    }
    let doc = join(&nodes);
    (!doc.is_empty()).then_some(doc)
}

/// Member copies with composed documentation for every member visible on
/// the class that has anything to document.
pub fn compose_member_docs(hierarchy: &Hierarchy<'_>) -> BTreeMap<String, Member> {
    let mut composed = BTreeMap::new();
    for name in hierarchy.member_names() {
        if let Some(member) = compose_member_doc(hierarchy, name) {
            composed.insert(name.to_string(), member);
        }
    }
    composed
}

/// A copy of the member `name` resolves to, documented for this class.
///
/// `None` when the member is skipped or nothing in the chain documents it.
pub fn compose_member_doc(hierarchy: &Hierarchy<'_>, name: &str) -> Option<Member> {
    let class = hierarchy.class();
    let (_, member) = hierarchy.resolve(name)?;

    if !member.has_updatable_docs()
        || member.is_abstract()
        || has_forced_override(member)
        || (class.config.skipped_names.contains(name) && !has_quirk_docs_method(member))
    {
        return None;
    }

    let entries = member_doc_entries(hierarchy, name, member);
    if entries.is_empty() {
        return None;
    }

    let nodes: Vec<DocNode> = entries
        .into_iter()
        .enumerate()
        .map(|(i, (source, docs))| {
            if i == 0 {
                DocNode::Text(docs)
            } else {
                DocNode::section(format!("{source} Quirks:"), vec![DocNode::Text(docs)])
            }
        })
        .collect();
    let rendered = join(&nodes);

    let mut copy = member.functional_copy();
    copy.set_docs((!rendered.is_empty()).then_some(rendered));
    tracing::trace!(class = %class.name, member = name, "composed member docs");
    Some(copy)
}

/// Documentation recorded per class for `name`, most ancestral first.
///
/// A level is recorded when it declares the member with documentation that
/// differs from the previous recorded level. The first level is recorded
/// even without documentation text. With quirk collection limited to the
/// current class, only the class itself is visited.
fn member_doc_entries(
    hierarchy: &Hierarchy<'_>,
    name: &str,
    member: &Member,
) -> Vec<(String, String)> {
    let class = hierarchy.class();
    let levels: Vec<&ClassDescriptor> = if quirk_docs_mro(member) {
        hierarchy.chain().iter().rev().copied().collect()
    } else {
        vec![class]
    };

    let mut entries: Vec<(String, String)> = Vec::new();
    let mut last: Option<&str> = None;
    for (i, klass) in levels.into_iter().enumerate() {
        let Some(klass_member) = klass.member(name) else {
            continue;
        };
        let docs = klass_member.docs(true);
        let documented = docs.is_some_and(|d| !d.is_empty());
        if (i == 0 || documented) && docs != last {
            if let Some(d) = docs {
                entries.push((klass.name.clone(), d.to_string()));
            }
            last = docs;
        }
    }

    let quirk = quirk_docs_method(member)
        .filter(|quirk_name| class.declares(quirk_name))
        .and_then(|quirk_name| class.member(quirk_name))
        .and_then(|m| m.docs(true))
        .filter(|d| !d.is_empty());
    if let Some(quirk) = quirk {
        match entries.iter_mut().find(|(source, _)| *source == class.name) {
            Some((_, existing)) => {
                *existing = format!("{}\n\n{}", cleandoc(existing), cleandoc(quirk));
            }
            None => entries.push((class.name.clone(), quirk.to_string())),
        }
    }

    entries
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
