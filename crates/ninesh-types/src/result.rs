//! ExecResult — the structured result of every command.
//!
//! Commands never print and never touch session state directly. They hand
//! back what to show ([`Outcome`]) and what to change ([`StateDelta`]); the
//! kernel applies both.

use serde::{Deserialize, Serialize};

use crate::distro::Distro;
use crate::path::VfsPath;

/// What the host should do with a command's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "lines", rename_all = "snake_case")]
pub enum Outcome {
    /// Append these lines to the scrollback.
    Output(Vec<String>),
    /// Empty the scrollback.
    ClearScreen,
    /// End the session.
    CloseSession,
}

/// Session fields a command asks to change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDelta {
    /// New working directory.
    pub cwd: Option<VfsPath>,
    /// New display preset.
    pub distro: Option<Distro>,
}

impl StateDelta {
    pub fn is_empty(&self) -> bool {
        self.cwd.is_none() && self.distro.is_none()
    }
}

/// The result of executing one command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// What to show.
    pub outcome: Outcome,
    /// What to change.
    #[serde(default)]
    pub delta: StateDelta,
}

impl ExecResult {
    /// Create a successful result with output lines.
    pub fn success<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code: 0,
            outcome: Outcome::Output(lines.into_iter().map(Into::into).collect()),
            delta: StateDelta::default(),
        }
    }

    /// Create a successful result with a single line.
    pub fn line(line: impl Into<String>) -> Self {
        Self::success([line.into()])
    }

    /// Create a successful result with no output.
    pub fn empty() -> Self {
        Self::success(Vec::<String>::new())
    }

    /// Create a failed result with a single error line.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self::failure_lines(code, [err.into()])
    }

    /// Create a failed result with several error lines.
    pub fn failure_lines<I, S>(code: i64, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code,
            outcome: Outcome::Output(lines.into_iter().map(Into::into).collect()),
            delta: StateDelta::default(),
        }
    }

    /// Ask the host to clear the screen.
    pub fn clear_screen() -> Self {
        Self {
            code: 0,
            outcome: Outcome::ClearScreen,
            delta: StateDelta::default(),
        }
    }

    /// Ask the host to close the session.
    pub fn close_session() -> Self {
        Self {
            code: 0,
            outcome: Outcome::CloseSession,
            delta: StateDelta::default(),
        }
    }

    /// Attach a working directory change.
    pub fn with_cwd(mut self, cwd: VfsPath) -> Self {
        self.delta.cwd = Some(cwd);
        self
    }

    /// Attach a display preset change.
    pub fn with_distro(mut self, distro: Distro) -> Self {
        self.delta.distro = Some(distro);
        self
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// Output lines, empty for host signals.
    pub fn lines(&self) -> &[String] {
        match &self.outcome {
            Outcome::Output(lines) => lines,
            Outcome::ClearScreen | Outcome::CloseSession => &[],
        }
    }
}
