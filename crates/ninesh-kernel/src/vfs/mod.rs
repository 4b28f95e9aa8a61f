//! Virtual Filesystem (VFS) for ninesh.
//!
//! The VFS is a strict ownership tree: every directory owns a map of its
//! children and nothing is shared. There are no parent pointers; `..` is
//! handled lexically by [`VfsPath::join_lexical`](ninesh_types::VfsPath::join_lexical)
//! before the tree is walked.
//!
//! ```text
//! /
//! ├── home/<user>/   # seeded dotfiles, documents, scripts, logs
//! ├── etc/           # hostname, os-release, resolv.conf
//! ├── var/           # log/syslog, www/index.html
//! └── tmp/           # empty
//! ```
//!
//! A fresh tree is built from the seed every time a session opens and is
//! dropped with it.

mod node;
mod seed;
mod tree;

pub use node::Node;
pub use seed::{home_dir, seeded};
pub use tree::{Resolved, Vfs, VfsError, VfsResult};
