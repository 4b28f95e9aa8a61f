//! The Kernel: the single entry point a host talks to.
//!
//! A kernel owns one session. It plays the boot banner, accepts command
//! lines once interactive, dispatches them to tools, applies their results
//! and records everything in the transcript.
//!
//! ```text
//! host ──submit(line)──▶ Kernel ──execute──▶ Tool
//!   ▲                      │
//!   └──── transcript ◀─────┘ (outcome + state delta applied)
//! ```

use std::sync::Arc;
use std::time::Duration;

use ninesh_types::{Distro, ExecResult, Outcome, VfsPath};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::config::{ConfigError, KernelConfig};
use crate::session::{BootStep, Phase, Session, Transcript};
use crate::tools::{ExecContext, ToolArgs, ToolRegistry, register_builtins};
use crate::vfs::VfsError;

/// Errors surfaced to the host.
///
/// Command failures are not errors; they come back as an [`ExecResult`] with
/// a non-zero code.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("session is still booting")]
    Booting,
    #[error("session is closed")]
    Closed,
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to seed filesystem: {0}")]
    Seed(#[from] VfsError),
}

/// Exit code for an unknown command.
pub const COMMAND_NOT_FOUND: i64 = 127;

/// One simulated terminal session.
pub struct Kernel {
    config: KernelConfig,
    session: Session,
    tools: Arc<ToolRegistry>,
    rng: StdRng,
}

impl Kernel {
    /// Open a session with entropy-seeded randomness.
    pub fn new(config: KernelConfig) -> Result<Self, KernelError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Open a session whose random output (ping, boot jitter) is reproducible.
    pub fn with_seed(config: KernelConfig, seed: u64) -> Result<Self, KernelError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// A default session with the banner already flushed and no delays.
    ///
    /// For one-shot runs and tests that only care about commands.
    pub fn transient() -> Result<Self, KernelError> {
        let mut kernel = Self::new(KernelConfig::default().without_delays())?;
        kernel.finish_boot();
        Ok(kernel)
    }

    fn with_rng(config: KernelConfig, rng: StdRng) -> Result<Self, KernelError> {
        config.validate()?;
        let session = Session::new(&config)?;
        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);

        tracing::debug!(user = %config.user, host = %config.host, distro = %config.distro, "session opened");

        Ok(Self {
            config,
            session,
            tools: Arc::new(tools),
            rng,
        })
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tools(&self) -> Arc<ToolRegistry> {
        Arc::clone(&self.tools)
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn cwd(&self) -> &VfsPath {
        &self.session.cwd
    }

    pub fn distro(&self) -> Distro {
        self.session.distro
    }

    pub fn transcript(&self) -> &Transcript {
        &self.session.transcript
    }

    /// How long the host should keep the closing message up after `exit`.
    pub fn exit_delay(&self) -> Duration {
        self.config.exit_delay()
    }

    /// `user@host:dir$ ` for the current working directory.
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$ ",
            self.config.user,
            self.config.host,
            self.session.cwd_display()
        )
    }

    // ═══════════════════════════════════════════════════════════════════
    // Boot
    // ═══════════════════════════════════════════════════════════════════

    /// Hand out the next banner line and append it to the transcript.
    ///
    /// Returns `None` once the banner is done, at which point the session is
    /// interactive. Outside the booting phase this always returns `None`.
    pub fn next_boot_step(&mut self) -> Option<BootStep> {
        if self.session.phase != Phase::Booting {
            return None;
        }
        let step = self.session.boot.next_step(&mut self.rng);
        match &step {
            Some(step) => {
                tracing::trace!(delay_ms = step.delay.as_millis() as u64, line = %step.line, "boot step");
                self.session.transcript.push_output(step.line.clone());
                if self.session.boot.is_finished() {
                    self.enter_interactive();
                }
            }
            None => self.enter_interactive(),
        }
        step
    }

    /// Flush the rest of the banner at once and become interactive.
    ///
    /// Returns the lines that had not been handed out yet.
    pub fn finish_boot(&mut self) -> Vec<String> {
        if self.session.phase != Phase::Booting {
            return Vec::new();
        }
        let rest = self.session.boot.drain();
        self.session.transcript.extend_output(rest.iter().cloned());
        self.enter_interactive();
        rest
    }

    fn enter_interactive(&mut self) {
        tracing::trace!("boot finished");
        self.session.phase = Phase::Interactive;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Commands
    // ═══════════════════════════════════════════════════════════════════

    /// Run one command line.
    ///
    /// The line is echoed into the transcript with the prompt as it was
    /// before the command ran. Blank lines produce no output and are not
    /// recorded in history.
    #[tracing::instrument(level = "debug", skip(self, line), fields(input_len = line.len()))]
    pub async fn submit(&mut self, line: &str) -> Result<ExecResult, KernelError> {
        match self.session.phase {
            Phase::Booting => return Err(KernelError::Booting),
            Phase::Closed => {
                tracing::warn!("submit after close");
                return Err(KernelError::Closed);
            }
            Phase::Interactive => {}
        }

        self.session.history.record(line);
        let prompt = self.prompt();
        self.session.transcript.push_input(prompt, line);

        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(ExecResult::empty());
        };
        let args = ToolArgs::from_tokens(tokens);

        let result = self.dispatch(name, args).await;
        tracing::debug!(command = name, code = result.code, "dispatched");
        self.apply(result.clone());
        Ok(result)
    }

    async fn dispatch(&mut self, name: &str, args: ToolArgs) -> ExecResult {
        let Some(tool) = self.tools.get(name) else {
            return ExecResult::failure(
                COMMAND_NOT_FOUND,
                format!(
                    "-bash: {}: command not found. Type 'help' for available commands.",
                    name
                ),
            );
        };

        let session = &mut self.session;
        let mut ctx = ExecContext {
            vfs: &mut session.vfs,
            cwd: &session.cwd,
            home: &session.home,
            user: &self.config.user,
            host: &self.config.host,
            distro: session.distro,
            rng: &mut self.rng,
            tool_schemas: self.tools.schemas(),
        };
        tool.execute(args, &mut ctx).await
    }

    fn apply(&mut self, result: ExecResult) {
        self.session.apply(result.delta);
        match result.outcome {
            Outcome::Output(lines) => self.session.transcript.extend_output(lines),
            Outcome::ClearScreen => self.clear_screen(),
            Outcome::CloseSession => self.close(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Host signals
    // ═══════════════════════════════════════════════════════════════════

    /// Arrow up: the next older history entry, or `None` with no history.
    pub fn history_prev(&mut self) -> Option<String> {
        self.session.history.older().map(str::to_string)
    }

    /// Arrow down: the next newer entry, or an empty line past the newest.
    pub fn history_next(&mut self) -> String {
        self.session.history.newer().to_string()
    }

    /// Empty the transcript (the `clear` command and Ctrl-L).
    pub fn clear_screen(&mut self) {
        self.session.transcript.clear();
    }

    /// Close the session. Idempotent.
    pub fn close(&mut self) {
        if self.session.phase == Phase::Closed {
            return;
        }
        self.session
            .transcript
            .push_output(format!("Connection to {} closed.", self.config.host));
        self.session.phase = Phase::Closed;
        tracing::debug!("session closed");
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("config", &self.config)
            .field("phase", &self.session.phase)
            .field("cwd", &self.session.cwd)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninesh_types::TermLine;

    fn booted() -> Kernel {
        let mut kernel = Kernel::with_seed(KernelConfig::default().without_delays(), 1).unwrap();
        kernel.finish_boot();
        kernel.clear_screen();
        kernel
    }

    #[test]
    fn test_new_kernel_is_booting() {
        let kernel = Kernel::new(KernelConfig::default()).unwrap();
        assert_eq!(kernel.phase(), Phase::Booting);
        assert_eq!(kernel.prompt(), "9data@9data-main:~$ ");
        assert!(kernel.transcript().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Kernel::new(KernelConfig::default().with_user("a b")).unwrap_err();
        assert!(matches!(err, KernelError::Config(_)));
    }

    #[test]
    fn test_boot_steps_fill_transcript() {
        let mut kernel = Kernel::with_seed(KernelConfig::default(), 9).unwrap();
        let mut count = 0;
        while let Some(step) = kernel.next_boot_step() {
            count += 1;
            assert_eq!(
                kernel.transcript().lines().last(),
                Some(&TermLine::output(step.line))
            );
        }
        assert_eq!(count, 12);
        assert_eq!(kernel.phase(), Phase::Interactive);
        assert!(kernel.next_boot_step().is_none());
    }

    #[test]
    fn test_finish_boot_mid_way() {
        let mut kernel = Kernel::with_seed(KernelConfig::default(), 9).unwrap();
        kernel.next_boot_step();
        kernel.next_boot_step();
        let rest = kernel.finish_boot();
        assert_eq!(rest.len(), 10);
        assert_eq!(kernel.transcript().len(), 12);
        assert_eq!(kernel.phase(), Phase::Interactive);
        assert!(kernel.finish_boot().is_empty());
    }

    #[tokio::test]
    async fn test_submit_while_booting_is_rejected() {
        let mut kernel = Kernel::new(KernelConfig::default()).unwrap();
        kernel.next_boot_step();
        let before = kernel.transcript().len();
        assert!(matches!(kernel.submit("ls").await, Err(KernelError::Booting)));
        assert_eq!(kernel.transcript().len(), before);
        assert!(kernel.session().history().is_empty());
    }

    #[tokio::test]
    async fn test_submit_echoes_prompt_before_command() {
        let mut kernel = booted();
        kernel.submit("cd /etc").await.unwrap();
        kernel.submit("pwd").await.unwrap();
        let lines = kernel.transcript().lines();
        assert_eq!(lines[0], TermLine::input("9data@9data-main:~$ ", "cd /etc"));
        assert_eq!(lines[1], TermLine::input("9data@9data-main:/etc$ ", "pwd"));
        assert_eq!(lines[2], TermLine::output("/etc"));
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut kernel = booted();
        let result = kernel.submit("frobnicate --now").await.unwrap();
        assert_eq!(result.code, COMMAND_NOT_FOUND);
        assert_eq!(
            result.lines(),
            ["-bash: frobnicate: command not found. Type 'help' for available commands."]
        );
        assert_eq!(kernel.phase(), Phase::Interactive);
    }

    #[tokio::test]
    async fn test_commands_are_case_sensitive() {
        let mut kernel = booted();
        let result = kernel.submit("LS").await.unwrap();
        assert_eq!(result.code, COMMAND_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blank_line() {
        let mut kernel = booted();
        let result = kernel.submit("   ").await.unwrap();
        assert!(result.ok());
        assert!(result.lines().is_empty());
        assert_eq!(kernel.transcript().len(), 1);
        assert!(kernel.transcript().lines()[0].is_input());
        assert!(kernel.session().history().is_empty());
    }

    #[tokio::test]
    async fn test_clear_empties_transcript() {
        let mut kernel = booted();
        kernel.submit("ls").await.unwrap();
        kernel.submit("clear").await.unwrap();
        assert!(kernel.transcript().is_empty());
        assert_eq!(kernel.session().history().len(), 2);
    }

    #[tokio::test]
    async fn test_exit_closes() {
        let mut kernel = booted();
        let result = kernel.submit("exit").await.unwrap();
        assert_eq!(result.outcome, Outcome::CloseSession);
        assert_eq!(kernel.phase(), Phase::Closed);
        assert_eq!(
            kernel.transcript().lines().last(),
            Some(&TermLine::output("Connection to 9data-main closed."))
        );
        assert!(matches!(kernel.submit("ls").await, Err(KernelError::Closed)));
        kernel.close();
        assert_eq!(kernel.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_history_recall() {
        let mut kernel = booted();
        assert_eq!(kernel.history_prev(), None);
        for line in ["ls", "pwd", "whoami"] {
            kernel.submit(line).await.unwrap();
        }
        let before = kernel.transcript().len();
        assert_eq!(kernel.history_prev().as_deref(), Some("whoami"));
        assert_eq!(kernel.history_prev().as_deref(), Some("pwd"));
        assert_eq!(kernel.history_prev().as_deref(), Some("ls"));
        assert_eq!(kernel.history_prev().as_deref(), Some("ls"));
        assert_eq!(kernel.history_next(), "pwd");
        assert_eq!(kernel.history_next(), "whoami");
        assert_eq!(kernel.history_next(), "");
        // recall never runs anything
        assert_eq!(kernel.transcript().len(), before);
    }

    #[tokio::test]
    async fn test_setdistro_changes_fetch_and_prompt_unchanged() {
        let mut kernel = booted();
        kernel.submit("setdistro ubuntu").await.unwrap();
        assert_eq!(kernel.distro(), Distro::Ubuntu);
        let result = kernel.submit("neofetch").await.unwrap();
        assert!(result.lines()[2].ends_with("OS: Ubuntu Linux x86_64"));
        assert_eq!(kernel.prompt(), "9data@9data-main:~$ ");
    }

    #[tokio::test]
    async fn test_seeded_ping_is_reproducible() {
        let mut a = booted();
        let mut b = booted();
        let first = a.submit("ping relay-02").await.unwrap();
        let second = b.submit("ping relay-02").await.unwrap();
        assert_eq!(first, second);
    }
}
