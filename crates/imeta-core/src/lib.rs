//! Core model for imeta.
//!
//! This crate provides the data structures shared by all imeta crates:
//! - [`types`] - Parameters, signatures and signature errors
//! - [`signature`] - Signature validation, parsing and rendering
//! - [`member`] - The functional member view over methods, properties,
//!   class methods and static methods
//! - [`class`] - Class declarations, descriptors and hierarchies
//! - [`config`] - Inheritable interface settings and `imeta.json` loading
//! - [`hook`] - Per-class implementation registration hooks
//! - [`text`] - Docstring whitespace normalization
//! - [`hash`] - Deterministic member fingerprints (base62 of xxhash64)

pub mod class;
pub mod config;
pub mod hash;
pub mod hook;
pub mod member;
pub mod signature;
pub mod text;
pub mod types;

pub use class::{ClassDecl, ClassDescriptor, Hierarchy};
pub use config::{ConfigOverrides, InterfaceConfig};
pub use member::{AttrValue, Callable, Member, MemberKind};
pub use types::{Parameter, ParameterKind, Signature, SignatureError};
