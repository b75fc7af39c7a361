//! Class declarations, finalized class descriptors, and the borrowed
//! [`Hierarchy`] view used while a class is being finalized.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{ConfigOverrides, InterfaceConfig};
use crate::hook::{HookHandle, ImplementationHook};
use crate::member::Member;

/// A class body as written: what gets handed to the registry.
#[derive(Debug, Clone, Default)]
pub struct ClassDecl {
    pub name: String,
    /// Direct bases, by registered name, in declaration order.
    pub bases: Vec<String>,
    pub doc: Option<String>,
    /// Free-form text describing the class attributes.
    pub attributes_doc: Option<String>,
    pub members: BTreeMap<String, Member>,
    pub config: ConfigOverrides,
    pub hook: Option<HookHandle>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attributes_doc(mut self, doc: impl Into<String>) -> Self {
        self.attributes_doc = Some(doc.into());
        self
    }

    /// Declare a member. Its callables are renamed to `name` and qualified
    /// with the class name.
    pub fn member(mut self, name: impl Into<String>, mut member: Member) -> Self {
        let name = name.into();
        let qualname = format!("{}.{}", self.name, name);
        match &mut member {
            Member::Method(c) | Member::ClassMethod(c) | Member::StaticMethod(c) => {
                c.name = name.clone();
                c.qualname = qualname;
            }
            Member::Property { fget, fset, fdel } => {
                for c in std::iter::once(fget).chain(fset.iter_mut()).chain(fdel.iter_mut()) {
                    c.name = name.clone();
                    c.qualname = qualname.clone();
                }
            }
            Member::Data { .. } | Member::Opaque { .. } => {}
        }
        self.members.insert(name, member);
        self
    }

    pub fn config(mut self, config: ConfigOverrides) -> Self {
        self.config = config;
        self
    }

    pub fn hook(mut self, hook: impl ImplementationHook + 'static) -> Self {
        self.hook = Some(HookHandle::new(hook));
        self
    }
}

/// A registered class: conformance-checked, documentation composed.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    pub name: String,
    pub bases: Vec<String>,
    /// Linearized ancestors, this class first.
    pub mro: Vec<String>,
    /// The most ancestral class of the interface this class belongs to.
    pub interface_root: String,
    pub config: InterfaceConfig,
    pub config_overrides: ConfigOverrides,
    /// Composed class documentation.
    pub doc: Option<String>,
    /// Class documentation as declared.
    pub doc_orig: Option<String>,
    pub attributes_doc: Option<String>,
    /// Members declared in the class body plus per-class copies of
    /// inherited members carrying composed documentation.
    pub members: BTreeMap<String, Member>,
    /// Names declared in the class body itself.
    pub declared: BTreeSet<String>,
    /// Hook declared by this class itself; see [`Hierarchy::hook`].
    pub hook: Option<HookHandle>,
}

impl ClassDescriptor {
    /// An unfinished descriptor holding only what the class body declared.
    pub fn from_decl(
        decl: ClassDecl,
        mro: Vec<String>,
        interface_root: String,
        config: InterfaceConfig,
    ) -> Self {
        let declared = decl.members.keys().cloned().collect();
        Self {
            name: decl.name,
            bases: decl.bases,
            mro,
            interface_root,
            config,
            config_overrides: decl.config,
            doc: decl.doc.clone(),
            doc_orig: decl.doc,
            attributes_doc: decl.attributes_doc,
            members: decl.members,
            declared,
            hook: decl.hook,
        }
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Whether the class's own member table holds `name`.
    pub fn defines(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Whether `name` was written in the class body (as opposed to installed
    /// during documentation composition).
    pub fn declares(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    pub fn is_interface_root(&self) -> bool {
        self.interface_root == self.name
    }
}

/// A class together with its borrowed, linearized ancestors.
#[derive(Debug, Clone)]
pub struct Hierarchy<'a> {
    mro: Vec<&'a ClassDescriptor>,
}

impl<'a> Hierarchy<'a> {
    /// `class` followed by its ancestors in method resolution order.
    pub fn new(class: &'a ClassDescriptor, ancestors: Vec<&'a ClassDescriptor>) -> Self {
        let mut mro = Vec::with_capacity(ancestors.len() + 1);
        mro.push(class);
        mro.extend(ancestors);
        Self { mro }
    }

    pub fn class(&self) -> &'a ClassDescriptor {
        self.mro[0]
    }

    pub fn mro(&self) -> &[&'a ClassDescriptor] {
        &self.mro
    }

    pub fn ancestors(&self) -> &[&'a ClassDescriptor] {
        &self.mro[1..]
    }

    /// MRO prefix ending at the interface root (inclusive).
    pub fn chain(&self) -> &[&'a ClassDescriptor] {
        let root = &self.class().interface_root;
        let end = self
            .mro
            .iter()
            .position(|c| &c.name == root)
            .map_or(self.mro.len(), |i| i + 1);
        &self.mro[..end]
    }

    /// The member `name` resolves to on this class, and where it lives.
    pub fn resolve(&self, name: &str) -> Option<(&'a ClassDescriptor, &'a Member)> {
        self.mro
            .iter()
            .find_map(|&c| c.member(name).map(|m| (c, m)))
    }

    /// The ancestor member that `name` on this class shadows.
    pub fn resolve_inherited(&self, name: &str) -> Option<(&'a ClassDescriptor, &'a Member)> {
        self.ancestors()
            .iter()
            .find_map(|&c| c.member(name).map(|m| (c, m)))
    }

    /// The hook of the nearest class in the MRO that declares one.
    pub fn hook(&self) -> Option<&'a HookHandle> {
        self.mro.iter().find_map(|&c| c.hook.as_ref())
    }

    /// Every member name visible on the class.
    pub fn member_names(&self) -> BTreeSet<&'a str> {
        self.mro
            .iter()
            .flat_map(|&c| c.members.keys().map(String::as_str))
            .collect()
    }
}
