//! The session's filesystem tree and path resolution against it.

use std::collections::BTreeMap;

use ninesh_types::{DirEntry, VfsPath};
use thiserror::Error;

use super::node::Node;

/// Result type for VFS operations.
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS operation errors.
///
/// Tools translate these into shell-style messages; the variants carry the
/// path as the user would recognise it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("is a directory: {0}")]
    IsADirectory(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
}

/// A successfully resolved path and the node it denotes.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    /// Absolute, normalized path.
    pub path: VfsPath,
    /// File or directory at that path.
    pub node: &'a Node,
}

/// In-memory filesystem owned by one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vfs {
    root: Node,
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vfs {
    /// Create a filesystem containing only an empty root directory.
    pub fn new() -> Self {
        Self {
            root: Node::empty_dir(),
        }
    }

    /// The root directory node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolve user input against `cwd`.
    ///
    /// The input is normalized lexically first, then walked from the root.
    /// Every intermediate segment must be an existing directory; the final
    /// segment may be either kind. Returns the normalized absolute path and
    /// the node, or `NotFound`.
    pub fn resolve(&self, cwd: &VfsPath, input: &str) -> VfsResult<Resolved<'_>> {
        let path = cwd.join_lexical(input);
        let node = self.lookup(&path)?;
        Ok(Resolved { path, node })
    }

    /// Look up an already-absolute path.
    pub fn lookup(&self, path: &VfsPath) -> VfsResult<&Node> {
        let mut current = &self.root;
        for segment in path.segments() {
            current = current
                .children()
                .and_then(|children| children.get(segment))
                .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        }
        Ok(current)
    }

    fn lookup_mut(&mut self, path: &VfsPath) -> VfsResult<&mut Node> {
        let mut current = &mut self.root;
        for segment in path.segments() {
            current = current
                .children_mut()
                .and_then(|children| children.get_mut(segment))
                .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        }
        Ok(current)
    }

    /// Children of the directory at `path`, in ascending name order.
    pub fn list(&self, path: &VfsPath) -> VfsResult<Vec<DirEntry>> {
        let node = self.lookup(path)?;
        let children = node
            .children()
            .ok_or_else(|| VfsError::NotADirectory(path.to_string()))?;

        Ok(children
            .iter()
            .map(|(name, child)| {
                if child.is_dir() {
                    DirEntry::directory(name)
                } else {
                    DirEntry::file(name)
                }
            })
            .collect())
    }

    /// Create an empty directory `name` inside `dir`.
    ///
    /// Fails with `AlreadyExists` if any entry with that name is present.
    pub fn mkdir(&mut self, dir: &VfsPath, name: &str) -> VfsResult<()> {
        let children = self.dir_children_mut(dir)?;
        if children.contains_key(name) {
            return Err(VfsError::AlreadyExists(name.to_string()));
        }
        children.insert(name.to_string(), Node::empty_dir());
        Ok(())
    }

    /// Create an empty file `name` inside `dir` unless something by that
    /// name already exists. Returns whether a file was created.
    pub fn touch(&mut self, dir: &VfsPath, name: &str) -> VfsResult<bool> {
        let children = self.dir_children_mut(dir)?;
        if children.contains_key(name) {
            return Ok(false);
        }
        children.insert(name.to_string(), Node::file(""));
        Ok(true)
    }

    /// Remove the child `name` of `dir`.
    ///
    /// Directories (empty or not) are only removed when `recursive` is set.
    /// All checks run before the tree is touched.
    pub fn remove(&mut self, dir: &VfsPath, name: &str, recursive: bool) -> VfsResult<Node> {
        let children = self.dir_children_mut(dir)?;
        let is_dir = match children.get(name) {
            Some(node) => node.is_dir(),
            None => return Err(VfsError::NotFound(name.to_string())),
        };
        if is_dir && !recursive {
            return Err(VfsError::IsADirectory(name.to_string()));
        }
        children
            .remove(name)
            .ok_or_else(|| VfsError::NotFound(name.to_string()))
    }

    /// Write a file at an absolute path, creating missing parent directories.
    ///
    /// Overwrites an existing file; refuses to replace a directory.
    pub fn write_file(&mut self, path: &VfsPath, content: impl Into<String>) -> VfsResult<()> {
        let Some(name) = path.file_name() else {
            return Err(VfsError::IsADirectory(path.to_string()));
        };
        let parent = path.parent();
        self.create_dir_all(&parent)?;
        let children = self.dir_children_mut(&parent)?;
        if children.get(name).is_some_and(Node::is_dir) {
            return Err(VfsError::IsADirectory(path.to_string()));
        }
        children.insert(name.to_string(), Node::file(content));
        Ok(())
    }

    /// Create `path` and every missing ancestor.
    pub fn create_dir_all(&mut self, path: &VfsPath) -> VfsResult<()> {
        let mut current = &mut self.root;
        for segment in path.segments() {
            let children = current
                .children_mut()
                .ok_or_else(|| VfsError::NotADirectory(path.to_string()))?;
            current = children
                .entry(segment.clone())
                .or_insert_with(Node::empty_dir);
        }
        if current.is_dir() {
            Ok(())
        } else {
            Err(VfsError::NotADirectory(path.to_string()))
        }
    }

    fn dir_children_mut(&mut self, dir: &VfsPath) -> VfsResult<&mut BTreeMap<String, Node>> {
        self.lookup_mut(dir)?
            .children_mut()
            .ok_or_else(|| VfsError::NotADirectory(dir.to_string()))
    }
}
