//! JSON interface manifests.
//!
//! A manifest describes a hierarchy of classes, ancestors first:
//!
//! ```json
//! {
//!   "defaults": { "raise_on_violation": false },
//!   "classes": [
//!     {
//!       "name": "Base",
//!       "doc": "Base class",
//!       "attributes_doc": "ATTRIBUTE (str): An attribute.",
//!       "members": {
//!         "run": { "kind": "method", "signature": "(self, a)", "doc": "Run" }
//!       }
//!     },
//!     {
//!       "name": "Sub",
//!       "bases": ["Base"],
//!       "members": {
//!         "run": { "kind": "method", "signature": "(self, a)", "override": true }
//!       }
//!     }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use imeta_core::class::ClassDecl;
use imeta_core::config::{ConfigOverrides, InterfaceConfig};
use imeta_core::member::{Callable, Member};
use imeta_core::types::Signature;
use imeta_enforce::ledger::{mark_override, quirk_docs};

use crate::error::RegistryError;
use crate::registry::{InterfaceRegistry, Registration};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Settings applied on top of the caller's defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<ConfigOverrides>,
    #[serde(default)]
    pub classes: Vec<ManifestClass>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestClass {
    pub name: String,
    #[serde(default)]
    pub bases: Vec<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub attributes_doc: Option<String>,
    #[serde(default)]
    pub config: ConfigOverrides,
    #[serde(default)]
    pub members: BTreeMap<String, ManifestMember>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestKind {
    Method,
    Property,
    Classmethod,
    Staticmethod,
    Data,
    /// Any descriptor type imeta cannot inspect.
    Descriptor,
}

impl ManifestKind {
    /// Signature assumed when a callable member omits one.
    fn default_signature(&self) -> &'static str {
        match self {
            ManifestKind::Method | ManifestKind::Property => "(self)",
            ManifestKind::Classmethod => "(cls)",
            _ => "()",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMember {
    pub kind: ManifestKind,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default, rename = "override")]
    pub is_override: bool,
    #[serde(default)]
    pub force: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub quirk_docs: Option<ManifestQuirkDocs>,
    /// Property setter signature.
    #[serde(default)]
    pub setter: Option<String>,
    /// Property deleter signature.
    #[serde(default)]
    pub deleter: Option<String>,
    /// Type of a data or descriptor member.
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestQuirkDocs {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default = "default_true")]
    pub mro: bool,
}

fn default_true() -> bool {
    true
}

/// Read and parse a manifest file.
pub fn load(path: &Path) -> Result<Manifest, RegistryError> {
    let content = std::fs::read_to_string(path).map_err(|source| RegistryError::ManifestIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse manifest text; `path` is only used in errors.
pub fn parse(content: &str, path: &Path) -> Result<Manifest, RegistryError> {
    serde_json::from_str(content).map_err(|source| RegistryError::ManifestParse {
        path: PathBuf::from(path),
        source,
    })
}

impl Manifest {
    /// Resolve the manifest's defaults on top of `base`.
    pub fn config(&self, base: &InterfaceConfig) -> InterfaceConfig {
        match &self.defaults {
            Some(overrides) => base.merged(overrides),
            None => base.clone(),
        }
    }

    /// Convert every class to a declaration, in manifest order.
    pub fn into_decls(self) -> Result<Vec<ClassDecl>, RegistryError> {
        self.classes.into_iter().map(ManifestClass::into_decl).collect()
    }

    /// Register every class into a fresh registry using `defaults` under the
    /// manifest's own defaults.
    pub fn register(
        self,
        defaults: &InterfaceConfig,
    ) -> Result<(InterfaceRegistry, Vec<Registration>), RegistryError> {
        let mut registry = InterfaceRegistry::with_defaults(self.config(defaults));
        let mut registrations = Vec::with_capacity(self.classes.len());
        for decl in self.into_decls()? {
            registrations.push(registry.register(decl)?);
        }
        Ok((registry, registrations))
    }
}

impl ManifestClass {
    pub fn into_decl(self) -> Result<ClassDecl, RegistryError> {
        let mut decl = ClassDecl::new(&self.name).config(self.config);
        decl.bases = self.bases;
        decl.doc = self.doc;
        decl.attributes_doc = self.attributes_doc;
        for (name, member) in self.members {
            let member = member.into_member(&self.name, &name)?;
            decl = decl.member(name, member);
        }
        Ok(decl)
    }
}

impl ManifestMember {
    pub fn into_member(self, class: &str, name: &str) -> Result<Member, RegistryError> {
        let parse = |text: &str| -> Result<Signature, RegistryError> {
            text.parse().map_err(|source| RegistryError::Signature {
                class: class.to_string(),
                member: name.to_string(),
                source,
            })
        };
        let callable = |text: Option<&str>| -> Result<Callable, RegistryError> {
            let signature = parse(text.unwrap_or(self.kind.default_signature()))?;
            Ok(Callable::new(name, signature))
        };

        let mut member = match self.kind {
            ManifestKind::Data => Member::Data {
                type_name: self.type_name.clone().unwrap_or_else(|| "object".to_string()),
                value: self.value.as_ref().map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                }),
            },
            ManifestKind::Descriptor => {
                Member::opaque(self.type_name.clone().unwrap_or_else(|| "descriptor".to_string()))
            }
            ManifestKind::Property => {
                let mut fget = callable(self.signature.as_deref())?;
                if let Some(doc) = &self.doc {
                    fget = fget.with_doc(doc.as_str());
                }
                fget.is_abstract = self.is_abstract;
                let fset = self
                    .setter
                    .as_deref()
                    .map(|s| callable(Some(s)))
                    .transpose()?;
                let fdel = self
                    .deleter
                    .as_deref()
                    .map(|s| callable(Some(s)))
                    .transpose()?;
                Member::Property { fget, fset, fdel }
            }
            kind => {
                let mut c = callable(self.signature.as_deref())?;
                if let Some(doc) = &self.doc {
                    c = c.with_doc(doc.as_str());
                }
                c.is_abstract = self.is_abstract;
                match kind {
                    ManifestKind::Classmethod => Member::ClassMethod(c),
                    ManifestKind::Staticmethod => Member::StaticMethod(c),
                    _ => Member::Method(c),
                }
            }
        };

        let ledger_error = |source| RegistryError::Ledger {
            class: class.to_string(),
            member: name.to_string(),
            source,
        };
        if self.is_override || self.force {
            mark_override(&mut member, self.force).map_err(ledger_error)?;
        }
        if let Some(q) = &self.quirk_docs {
            quirk_docs(&mut member, q.method.as_deref(), q.mro).map_err(ledger_error)?;
        }
        Ok(member)
    }
}
