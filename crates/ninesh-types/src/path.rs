//! Absolute VFS paths and lexical resolution.
//!
//! A [`VfsPath`] is an ordered list of segments below `/`. Joining a user
//! supplied string onto it is purely lexical: `.` is dropped, `..` pops the
//! last segment (never above the root), and repeated or trailing slashes
//! collapse. Whether the result exists is the filesystem's business.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An absolute path inside the virtual filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct VfsPath {
    segments: Vec<String>,
}

impl VfsPath {
    /// The root directory `/`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse an absolute path. Relative input is treated as relative to `/`.
    pub fn parse(path: &str) -> Self {
        Self::root().join_lexical(path)
    }

    /// Resolve `input` against `self`.
    ///
    /// Input starting with `/` ignores `self` entirely.
    pub fn join_lexical(&self, input: &str) -> Self {
        let mut segments = if input.starts_with('/') {
            Vec::new()
        } else {
            self.segments.clone()
        };

        for part in input.split('/').filter(|s| !s.is_empty()) {
            match part {
                "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }

        Self { segments }
    }

    /// Append a single child name.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// The parent directory; the root is its own parent.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Path segments below the root.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if `self` is `other` or lies below it.
    pub fn starts_with(&self, other: &VfsPath) -> bool {
        self.segments.starts_with(&other.segments)
    }
}

impl fmt::Display for VfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl From<VfsPath> for String {
    fn from(path: VfsPath) -> Self {
        path.to_string()
    }
}

impl From<String> for VfsPath {
    fn from(path: String) -> Self {
        VfsPath::parse(&path)
    }
}

impl From<&str> for VfsPath {
    fn from(path: &str) -> Self {
        VfsPath::parse(path)
    }
}
