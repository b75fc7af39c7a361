//! Interface registration for imeta.
//!
//! [`InterfaceRegistry::register`] turns a [`ClassDecl`](imeta_core::ClassDecl)
//! into a finalized [`ClassDescriptor`](imeta_core::ClassDescriptor):
//! C3 linearization, interface root and configuration inheritance,
//! conformance checking, documentation composition, then the implementation
//! hook. [`manifest`] loads class declarations from JSON.

pub mod error;
pub mod manifest;
pub mod mro;
pub mod registry;

pub use error::RegistryError;
pub use manifest::Manifest;
pub use registry::{InterfaceRegistry, Registration};
