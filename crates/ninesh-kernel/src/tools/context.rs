//! Execution context for tools.

use ninesh_types::{Distro, VfsPath};
use rand::rngs::StdRng;

use crate::vfs::{Resolved, Vfs, VfsResult};

use super::traits::ToolSchema;

/// Execution context passed to tools.
///
/// Borrows the session for the duration of one command. The filesystem is
/// the only thing a tool mutates in place; working directory and distro
/// changes go back through the result's state delta.
pub struct ExecContext<'a> {
    /// The session's filesystem.
    pub vfs: &'a mut Vfs,
    /// Current working directory.
    pub cwd: &'a VfsPath,
    /// The user's home directory.
    pub home: &'a VfsPath,
    /// Login name.
    pub user: &'a str,
    /// Machine name.
    pub host: &'a str,
    /// Current display preset.
    pub distro: Distro,
    /// Session randomness (ping addresses and timings).
    pub rng: &'a mut StdRng,
    /// Tool schemas for help command.
    pub tool_schemas: Vec<ToolSchema>,
}

impl ExecContext<'_> {
    /// Expand a leading `~` to the home directory.
    ///
    /// `~` and `~/rest` expand; `~other` is left alone.
    pub fn expand_home(&self, input: &str) -> String {
        if input == "~" {
            return self.home.to_string();
        }
        match input.strip_prefix("~/") {
            Some(rest) => format!("{}/{}", self.home, rest),
            None => input.to_string(),
        }
    }

    /// Resolve user input against the working directory.
    pub fn resolve(&self, input: &str) -> VfsResult<Resolved<'_>> {
        let expanded = self.expand_home(input);
        self.vfs.resolve(self.cwd, &expanded)
    }
}
