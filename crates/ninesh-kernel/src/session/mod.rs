//! Per-session state.
//!
//! A session is created when the terminal opens and dropped when it closes.
//! Nothing survives between sessions.

mod boot;
mod history;
mod transcript;

pub use boot::{BootSequence, BootStep};
pub use history::History;
pub use transcript::Transcript;

use ninesh_types::{Distro, StateDelta, VfsPath};

use crate::config::KernelConfig;
use crate::vfs::{Vfs, VfsResult, seeded};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Playing the banner; input is not accepted.
    Booting,
    /// Accepting command lines.
    Interactive,
    /// Torn down; input is not accepted.
    Closed,
}

/// Everything a command can read or change.
#[derive(Debug)]
pub struct Session {
    pub(crate) vfs: Vfs,
    pub(crate) cwd: VfsPath,
    pub(crate) home: VfsPath,
    pub(crate) history: History,
    pub(crate) distro: Distro,
    pub(crate) phase: Phase,
    pub(crate) transcript: Transcript,
    pub(crate) boot: BootSequence,
}

impl Session {
    /// Fresh session: seeded tree, home cwd, empty history, booting.
    pub fn new(config: &KernelConfig) -> VfsResult<Self> {
        let home = config.home();
        Ok(Self {
            vfs: seeded(&config.user, &config.host)?,
            cwd: home.clone(),
            home,
            history: History::new(),
            distro: config.distro,
            phase: Phase::Booting,
            transcript: Transcript::new(),
            boot: BootSequence::for_config(config),
        })
    }

    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    pub fn cwd(&self) -> &VfsPath {
        &self.cwd
    }

    pub fn home(&self) -> &VfsPath {
        &self.home
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn distro(&self) -> Distro {
        self.distro
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// `~` for the home directory itself, the full path otherwise.
    pub fn cwd_display(&self) -> String {
        if self.cwd == self.home {
            "~".to_string()
        } else {
            self.cwd.to_string()
        }
    }

    /// Apply the state changes a command asked for.
    pub(crate) fn apply(&mut self, delta: StateDelta) {
        if let Some(cwd) = delta.cwd {
            tracing::trace!(cwd = %cwd, "cwd changed");
            self.cwd = cwd;
        }
        if let Some(distro) = delta.distro {
            tracing::trace!(%distro, "distro changed");
            self.distro = distro;
        }
    }
}
