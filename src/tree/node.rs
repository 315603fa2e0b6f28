//! Output model: nested file and directory nodes.

use serde::{Deserialize, Serialize};

/// Leaf node. `full_path` is the originating entry's whole path, serialized
/// as `fullPath` to match the listing consumers' wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    #[serde(rename = "fullPath")]
    pub full_path: String,
}

/// Directory node. `files` holds children in first-encountered order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirNode {
    pub name: String,
    pub files: Vec<Node>,
}

impl DirNode {
    /// New empty directory, ready to receive children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }
}

/// One output element. Untagged on the wire: files carry `fullPath`,
/// directories carry `files`, which is enough to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    File(FileNode),
    Dir(DirNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Dir(dir) => &dir.name,
        }
    }
}
