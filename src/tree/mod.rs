//! Tree listing conversion
//!
//! Input model for flat tree listings, output model for nested nodes, and
//! the builder that folds one into the other.

pub mod builder;
pub mod entry;
pub mod node;
