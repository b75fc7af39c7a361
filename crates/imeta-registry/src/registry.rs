use std::collections::BTreeMap;

use imeta_core::class::{ClassDecl, ClassDescriptor, Hierarchy};
use imeta_core::config::InterfaceConfig;
use imeta_core::member::Member;
use imeta_docs::composer::compose;
use imeta_enforce::types::Violation;
use imeta_enforce::violations::check_class;

use crate::error::RegistryError;
use crate::mro;

/// Outcome of registering one class.
#[derive(Debug, Clone)]
pub struct Registration {
    pub class: String,
    /// Violations reported as warnings. Empty in raise mode, where the
    /// first violation fails registration instead.
    pub violations: Vec<Violation>,
}

/// Every registered interface class, by name.
///
/// Registering a class resolves its ancestors, checks it for conformance,
/// composes its documentation and runs its implementation hook. Registered
/// classes never change afterwards.
#[derive(Debug, Default)]
pub struct InterfaceRegistry {
    defaults: InterfaceConfig,
    classes: BTreeMap<String, ClassDescriptor>,
    order: Vec<String>,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose classes fall back to `defaults` for unset settings.
    pub fn with_defaults(defaults: InterfaceConfig) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    pub fn defaults(&self) -> &InterfaceConfig {
        &self.defaults
    }

    pub fn register(&mut self, decl: ClassDecl) -> Result<Registration, RegistryError> {
        if self.classes.contains_key(&decl.name) {
            return Err(RegistryError::DuplicateClass(decl.name));
        }

        let mut base_mros: Vec<&[String]> = Vec::with_capacity(decl.bases.len());
        for base in &decl.bases {
            let Some(descriptor) = self.classes.get(base) else {
                return Err(RegistryError::UnknownBase {
                    class: decl.name.clone(),
                    base: base.clone(),
                });
            };
            base_mros.push(&descriptor.mro);
        }
        let mro = mro::linearize(&decl.name, &decl.bases, &base_mros)?;

        let ancestors: Vec<&ClassDescriptor> = mro[1..]
            .iter()
            .filter_map(|name| self.classes.get(name))
            .collect();
        let interface_root = ancestors
            .first()
            .map_or_else(|| decl.name.clone(), |a| a.interface_root.clone());
        let config = self
            .defaults
            .resolve(&decl.config, ancestors.iter().map(|a| &a.config_overrides));

        let mut class = ClassDescriptor::from_decl(decl, mro, interface_root, config);

        let hierarchy = Hierarchy::new(&class, ancestors.clone());
        let violations = check_class(&hierarchy)?;
        let composed = compose(&hierarchy);
        composed.apply(&mut class);

        if let Some(hook) = Hierarchy::new(&class, ancestors).hook() {
            hook.call(&class);
        }

        tracing::debug!(
            class = %class.name,
            root = %class.interface_root,
            violations = violations.len(),
            "registered interface class"
        );

        let name = class.name.clone();
        self.order.push(name.clone());
        self.classes.insert(name.clone(), class);
        Ok(Registration {
            class: name,
            violations,
        })
    }

    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// The registered class together with its registered ancestors.
    pub fn hierarchy(&self, name: &str) -> Option<Hierarchy<'_>> {
        let class = self.classes.get(name)?;
        let ancestors = class.mro[1..]
            .iter()
            .filter_map(|n| self.classes.get(n))
            .collect();
        Some(Hierarchy::new(class, ancestors))
    }

    /// The member `member` resolves to on `class`, and the class holding it.
    pub fn resolve_member(&self, class: &str, member: &str) -> Option<(&ClassDescriptor, &Member)> {
        self.hierarchy(class)?.resolve(member)
    }

    /// Public documentation of `member` as seen on `class`.
    pub fn member_docs(&self, class: &str, member: &str) -> Option<&str> {
        self.resolve_member(class, member)
            .and_then(|(_, m)| m.docs(false))
    }

    /// Registered classes in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.order.iter().filter_map(|n| self.classes.get(n))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
