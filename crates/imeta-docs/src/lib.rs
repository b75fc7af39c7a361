//! Documentation composition for imeta interfaces.
//!
//! - [`join`] renders nested [`DocNode`] fragments into one docstring
//! - [`composer`] merges class and member docs across an interface chain

pub mod composer;
pub mod join;

pub use composer::{compose, ComposedDocs};
pub use join::{join, DocNode};
