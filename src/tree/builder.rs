//! Tree builder: folds a flat entry list into a nested forest.

use crate::error::ConvertError;
use crate::tree::entry::{Entry, EntryKind};
use crate::tree::node::{DirNode, FileNode, Node};
use tracing::{debug, instrument, trace};

/// Builds a nested forest from a flat tree listing.
///
/// Entries are folded in input order; sibling order is first-encountered
/// order. Intermediate directory segments are deduplicated by a linear scan
/// of the current sibling set, final-segment `tree` entries are always
/// appended fresh (duplicates co-exist as siblings).
pub struct TreeBuilder {
    entries: Vec<Entry>,
}

impl TreeBuilder {
    /// Create a new builder over the given listing entries.
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Fold all entries into the output forest.
    ///
    /// Fails with [`ConvertError::PathCollision`] when an intermediate
    /// segment lands on a node already materialized as a file.
    #[instrument(skip(self), fields(entry_count = self.entries.len()))]
    pub fn build(&self) -> Result<Vec<Node>, ConvertError> {
        let mut forest = Vec::new();

        for entry in &self.entries {
            let segments: Vec<&str> = entry.path.split('/').collect();
            insert(&mut forest, &segments, entry)?;
        }

        debug!(root_count = forest.len(), "Forest built");
        Ok(forest)
    }
}

/// Walk one entry's segments down from `siblings`, materializing
/// intermediate directories as needed and placing the leaf at the end.
fn insert(siblings: &mut Vec<Node>, segments: &[&str], entry: &Entry) -> Result<(), ConvertError> {
    match segments {
        [] => Ok(()),
        [last] => {
            match entry.kind {
                EntryKind::Blob => siblings.push(Node::File(FileNode {
                    name: (*last).to_string(),
                    full_path: entry.path.clone(),
                })),
                // Always appended fresh: a same-named directory from an
                // earlier entry is not reused for final segments.
                EntryKind::Tree => siblings.push(Node::Dir(DirNode::new(*last))),
                EntryKind::Other => {
                    trace!(path = %entry.path, "Dropping entry with unrecognized type");
                }
            }
            Ok(())
        }
        [head, rest @ ..] => {
            let idx = match siblings.iter().position(|node| node.name() == *head) {
                Some(idx) => idx,
                None => {
                    siblings.push(Node::Dir(DirNode::new(*head)));
                    siblings.len() - 1
                }
            };
            match &mut siblings[idx] {
                Node::Dir(dir) => insert(&mut dir.files, rest, entry),
                Node::File(_) => Err(ConvertError::PathCollision {
                    path: entry.path.clone(),
                    segment: (*head).to_string(),
                }),
            }
        }
    }
}
