//! Filesystem nodes.

use std::collections::BTreeMap;

use ninesh_types::EntryKind;

/// One entry in the tree.
///
/// A file never has children and a directory never has content; the enum
/// makes the other combinations unrepresentable. `BTreeMap` keeps children
/// unique by name and iterates them in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File { content: String },
    Directory { children: BTreeMap<String, Node> },
}

impl Node {
    /// A file with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    /// A directory with no children.
    pub fn empty_dir() -> Self {
        Node::Directory {
            children: BTreeMap::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Node::File { .. } => EntryKind::File,
            Node::Directory { .. } => EntryKind::Directory,
        }
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }

    /// Children in ascending name order, `None` for files.
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children()
            .map(|children| {
                children
                    .values()
                    .map(|child| 1 + child.descendant_count())
                    .sum()
            })
            .unwrap_or(0)
    }
}
