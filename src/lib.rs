//! Treeify: flat tree listing to nested tree conversion
//!
//! Converts the flat, path-tagged entry list produced by a tree-listing API
//! into a nested forest of file and directory nodes mirroring filesystem
//! structure.

pub mod cli;
pub mod error;
pub mod logging;
pub mod tree;
