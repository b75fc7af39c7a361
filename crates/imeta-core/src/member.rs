//! Functional member classification.
//!
//! A class member is one of a handful of shapes: plain method, property,
//! class-bound method, static method, plain data, or a descriptor type we do
//! not understand. [`Member`] normalizes the four callable shapes into one
//! "functional member" view: attribute access, signatures and documentation
//! always go through the underlying [`Callable`] (the property getter for
//! properties), never the wrapper.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Signature;

/// Well-known callable attribute names.
pub mod attrs {
    pub const DOC: &str = "__doc__";
    pub const DOC_ORIG: &str = "__doc_orig__";
    pub const OVERRIDE: &str = "__override__";
    pub const OVERRIDE_FORCE: &str = "__override_force__";
    pub const QUIRKS_METHOD: &str = "_quirks_method";
    pub const QUIRKS_MRO: &str = "_quirks_mro";
}

/// Value stored in a callable's attribute table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Text(String),
    Null,
}

impl AttrValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness: `false`, empty text and null are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Bool(b) => *b,
            AttrValue::Text(s) => !s.is_empty(),
            AttrValue::Null => false,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Null, Into::into)
    }
}

/// A declared callable: its shape and its metadata, never its body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callable {
    pub name: String,
    /// `Class.name` of the declaration this callable came from.
    pub qualname: String,
    pub signature: Signature,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    attrs: BTreeMap<String, AttrValue>,
    /// Qualname of the callable this one forwards to, for functional copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wraps: Option<String>,
}

impl Callable {
    pub fn new(name: impl Into<String>, signature: Signature) -> Self {
        let name = name.into();
        Self {
            qualname: name.clone(),
            name,
            signature,
            is_abstract: false,
            attrs: BTreeMap::new(),
            wraps: None,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        let doc: String = doc.into();
        self.set_attr(attrs::DOC, doc);
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<AttrValue> {
        self.attrs.remove(name)
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn doc(&self) -> Option<&str> {
        self.attr(attrs::DOC).and_then(AttrValue::as_text)
    }

    /// Qualname of the original callable a copy forwards to.
    pub fn wraps(&self) -> Option<&str> {
        self.wraps.as_deref()
    }

    /// The declaration every call ultimately reaches.
    pub fn origin(&self) -> &str {
        self.wraps.as_deref().unwrap_or(&self.qualname)
    }

    /// A new callable forwarding to this one, with its own attribute table.
    pub fn wrapper(&self) -> Callable {
        Callable {
            name: self.name.clone(),
            qualname: self.qualname.clone(),
            signature: self.signature.clone(),
            is_abstract: self.is_abstract,
            attrs: self.attrs.clone(),
            wraps: Some(self.origin().to_string()),
        }
    }
}

/// The member shapes a class body can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Method(Callable),
    Property {
        fget: Callable,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fset: Option<Callable>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fdel: Option<Callable>,
    },
    #[serde(rename = "classmethod")]
    ClassMethod(Callable),
    #[serde(rename = "staticmethod")]
    StaticMethod(Callable),
    /// A plain class attribute.
    Data {
        type_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    /// A descriptor of a type this crate cannot inspect.
    Opaque { type_name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    Property,
    ClassMethod,
    StaticMethod,
    Data,
    Opaque,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Method => "method",
            MemberKind::Property => "property",
            MemberKind::ClassMethod => "classmethod",
            MemberKind::StaticMethod => "staticmethod",
            MemberKind::Data => "data",
            MemberKind::Opaque => "opaque",
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Member {
    pub fn method(callable: Callable) -> Self {
        Member::Method(callable)
    }

    pub fn class_method(callable: Callable) -> Self {
        Member::ClassMethod(callable)
    }

    pub fn static_method(callable: Callable) -> Self {
        Member::StaticMethod(callable)
    }

    pub fn property(fget: Callable) -> Self {
        Member::Property {
            fget,
            fset: None,
            fdel: None,
        }
    }

    pub fn data(type_name: impl Into<String>, value: Option<&str>) -> Self {
        Member::Data {
            type_name: type_name.into(),
            value: value.map(str::to_string),
        }
    }

    pub fn opaque(type_name: impl Into<String>) -> Self {
        Member::Opaque {
            type_name: type_name.into(),
        }
    }

    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Method(_) => MemberKind::Method,
            Member::Property { .. } => MemberKind::Property,
            Member::ClassMethod(_) => MemberKind::ClassMethod,
            Member::StaticMethod(_) => MemberKind::StaticMethod,
            Member::Data { .. } => MemberKind::Data,
            Member::Opaque { .. } => MemberKind::Opaque,
        }
    }

    /// The underlying callable: the function itself, or the property getter.
    pub fn callable(&self) -> Option<&Callable> {
        match self {
            Member::Method(c) | Member::ClassMethod(c) | Member::StaticMethod(c) => Some(c),
            Member::Property { fget, .. } => Some(fget),
            Member::Data { .. } | Member::Opaque { .. } => None,
        }
    }

    pub fn callable_mut(&mut self) -> Option<&mut Callable> {
        match self {
            Member::Method(c) | Member::ClassMethod(c) | Member::StaticMethod(c) => Some(c),
            Member::Property { fget, .. } => Some(fget),
            Member::Data { .. } | Member::Opaque { .. } => None,
        }
    }

    /// Methods, class methods and static methods.
    pub fn is_functional(&self) -> bool {
        matches!(
            self,
            Member::Method(_) | Member::ClassMethod(_) | Member::StaticMethod(_)
        )
    }

    /// Whether documentation can be attached to this member.
    pub fn has_updatable_docs(&self) -> bool {
        self.callable().is_some()
    }

    /// Whether conformance checking knows how to handle this member.
    pub fn type_understood(&self) -> bool {
        !matches!(self, Member::Opaque { .. })
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.callable().map(|c| &c.signature)
    }

    pub fn is_abstract(&self) -> bool {
        self.callable().is_some_and(|c| c.is_abstract)
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.callable().and_then(|c| c.attr(name))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.callable().is_some_and(|c| c.has_attr(name))
    }

    /// Set an attribute on the underlying callable. Returns `false` when the
    /// member has no callable to carry it.
    pub fn set_attr(&mut self, name: &str, value: impl Into<AttrValue>) -> bool {
        match self.callable_mut() {
            Some(c) => {
                c.set_attr(name, value);
                true
            }
            None => false,
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<AttrValue> {
        self.callable_mut().and_then(|c| c.remove_attr(name))
    }

    /// Member documentation. With `orig`, the text as declared, before any
    /// composed documentation replaced it.
    pub fn docs(&self, orig: bool) -> Option<&str> {
        if orig && self.has_attr(attrs::DOC_ORIG) {
            return self.attr(attrs::DOC_ORIG).and_then(AttrValue::as_text);
        }
        self.attr(attrs::DOC).and_then(AttrValue::as_text)
    }

    /// Replace the public documentation, keeping the first original text.
    pub fn set_docs(&mut self, docs: Option<String>) {
        let Some(callable) = self.callable_mut() else {
            return;
        };
        if !callable.has_attr(attrs::DOC_ORIG) {
            let current = callable.attr(attrs::DOC).cloned().unwrap_or(AttrValue::Null);
            callable.set_attr(attrs::DOC_ORIG, current);
        }
        callable.set_attr(attrs::DOC, docs);
    }

    /// A copy of this member whose callable forwards to the original but owns
    /// its attributes, so rewriting its docs never touches the original.
    /// Property setters and deleters are shared as-is.
    pub fn functional_copy(&self) -> Member {
        match self {
            Member::Method(c) => Member::Method(c.wrapper()),
            Member::ClassMethod(c) => Member::ClassMethod(c.wrapper()),
            Member::StaticMethod(c) => Member::StaticMethod(c.wrapper()),
            Member::Property { fget, fset, fdel } => Member::Property {
                fget: fget.wrapper(),
                fset: fset.clone(),
                fdel: fdel.clone(),
            },
            other => other.clone(),
        }
    }
}

#[cfg(test)]
#[path = "member_tests.rs"]
mod tests;
