//! ninesh REPL — a terminal host for the simulated SSH session.
//!
//! The host owns a [`Kernel`] and a tokio runtime. It:
//! - plays the boot banner on the kernel's cadence
//! - reads lines with rustyline and submits them
//! - prints output lines, clears the screen, and closes on request
//! - offers a one-shot mode for scripting and tests

pub mod config;

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{
    Cmd, ConditionalEventHandler, Editor, Event, EventContext, EventHandler, KeyCode, KeyEvent,
    Modifiers, Movement, RepeatCount,
};
use serde::Serialize;
use tokio::runtime::Runtime;

use ninesh_kernel::{History, Kernel, KernelConfig, Phase};
use ninesh_types::{ExecResult, Outcome, TermLine};

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Print these lines and keep reading.
    Continue(Vec<String>),
    /// Clear the terminal and keep reading.
    Clear,
    /// Print these lines, wait, and leave.
    Exit(Vec<String>),
}

/// The result of a one-shot run.
#[derive(Debug, Clone, Serialize)]
pub struct OneShot {
    /// Command exit code.
    pub code: i64,
    /// Transcript lines the command produced, input echo included.
    pub transcript: Vec<TermLine>,
}

impl OneShot {
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// Output lines only, as they would appear on screen.
    pub fn output(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|line| match line {
                TermLine::Output { text } => Some(text.as_str()),
                TermLine::Input { .. } => None,
            })
            .collect()
    }
}

/// REPL state: one kernel and the runtime that drives it.
pub struct Repl {
    kernel: Kernel,
    runtime: Runtime,
}

impl Repl {
    /// Create a REPL with a custom kernel configuration.
    pub fn with_config(config: KernelConfig) -> Result<Self> {
        let kernel = Kernel::new(config).context("Failed to create kernel")?;
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self { kernel, runtime })
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Play the banner, sleeping between lines, printing each as it arrives.
    pub fn play_boot(&mut self, out: &mut impl Write) -> Result<()> {
        while let Some(step) = self.kernel.next_boot_step() {
            self.runtime.block_on(tokio::time::sleep(step.delay));
            writeln!(out, "{}", step.line)?;
            out.flush()?;
        }
        Ok(())
    }

    /// Empty the kernel transcript, as `clear` does.
    pub fn clear_screen(&mut self) {
        self.kernel.clear_screen();
    }

    /// Print the banner at once.
    pub fn skip_boot(&mut self, out: &mut impl Write) -> Result<()> {
        for line in self.kernel.finish_boot() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Submit one line and translate the result for the loop.
    pub fn process_line(&mut self, line: &str) -> Result<LineOutcome> {
        let result = self.runtime.block_on(self.kernel.submit(line))?;
        Ok(match result.outcome {
            Outcome::Output(lines) => LineOutcome::Continue(lines),
            Outcome::ClearScreen => LineOutcome::Clear,
            Outcome::CloseSession => LineOutcome::Exit(self.closing_lines()),
        })
    }

    /// Close the session (Ctrl-D) and return what to print.
    pub fn hang_up(&mut self) -> Vec<String> {
        self.kernel.close();
        self.closing_lines()
    }

    fn closing_lines(&self) -> Vec<String> {
        self.kernel
            .transcript()
            .lines()
            .last()
            .filter(|_| self.kernel.phase() == Phase::Closed)
            .map(|line| vec![line.rendered()])
            .unwrap_or_default()
    }

    /// Wait out the exit delay so the closing line stays visible.
    pub fn linger(&self) {
        self.runtime.block_on(tokio::time::sleep(self.kernel.exit_delay()));
    }
}

/// Run one line in a fresh session without the banner.
pub fn run_once(config: KernelConfig, line: &str) -> Result<OneShot> {
    let mut kernel = Kernel::new(config.without_delays()).context("Failed to create kernel")?;
    kernel.finish_boot();
    kernel.clear_screen();

    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    let result: ExecResult = runtime.block_on(kernel.submit(line))?;
    tracing::debug!(code = result.code, "one-shot finished");

    Ok(OneShot {
        code: result.code,
        transcript: kernel.transcript().lines().to_vec(),
    })
}

/// Ctrl-L handler: rustyline repaints, the kernel forgets the transcript
/// once the current line is done.
#[derive(Debug, Clone, Default)]
struct ScreenClears(Arc<AtomicBool>);

impl ScreenClears {
    fn mark(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether Ctrl-L was pressed since the last call.
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::Relaxed)
    }
}

impl ConditionalEventHandler for ScreenClears {
    fn handle(&self, _: &Event, _: RepeatCount, _: bool, _: &EventContext) -> Option<Cmd> {
        self.mark();
        Some(Cmd::ClearScreen)
    }
}

/// Up/Down handler: walks a copy of the kernel's history taken before each
/// prompt, so recall follows the kernel's cursor rules and never submits.
#[derive(Debug, Clone)]
struct HistoryKeys {
    history: Arc<Mutex<History>>,
    older: bool,
}

impl HistoryKeys {
    fn pair(history: &Arc<Mutex<History>>) -> (Self, Self) {
        let up = Self {
            history: Arc::clone(history),
            older: true,
        };
        let down = Self {
            history: Arc::clone(history),
            older: false,
        };
        (up, down)
    }

    /// The line to put in the editor, or `None` to leave it alone.
    fn recall(&self) -> Option<String> {
        let mut history = self.history.lock().ok()?;
        if self.older {
            history.older().map(str::to_string)
        } else {
            Some(history.newer().to_string())
        }
    }
}

impl ConditionalEventHandler for HistoryKeys {
    fn handle(&self, _: &Event, _: RepeatCount, _: bool, _: &EventContext) -> Option<Cmd> {
        match self.recall() {
            Some(line) => Some(Cmd::Replace(Movement::WholeLine, Some(line))),
            None => Some(Cmd::Noop),
        }
    }
}

/// Run the interactive REPL.
pub fn run(config: KernelConfig, play_boot: bool) -> Result<()> {
    let mut repl = Repl::with_config(config)?;
    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("Failed to create editor")?;
    let clears = ScreenClears::default();
    rl.bind_sequence(
        KeyEvent::ctrl('L'),
        EventHandler::Conditional(Box::new(clears.clone())),
    );
    let recall = Arc::new(Mutex::new(History::new()));
    let (up, down) = HistoryKeys::pair(&recall);
    rl.bind_sequence(
        KeyEvent(KeyCode::Up, Modifiers::NONE),
        EventHandler::Conditional(Box::new(up)),
    );
    rl.bind_sequence(
        KeyEvent(KeyCode::Down, Modifiers::NONE),
        EventHandler::Conditional(Box::new(down)),
    );

    let mut stdout = std::io::stdout();
    if play_boot {
        repl.play_boot(&mut stdout)?;
    } else {
        repl.skip_boot(&mut stdout)?;
    }

    loop {
        let prompt = repl.kernel().prompt();

        if let Ok(mut shared) = recall.lock() {
            *shared = repl.kernel().session().history().clone();
        }

        let read = rl.readline(&prompt);
        if clears.take() {
            repl.clear_screen();
        }

        match read {
            Ok(line) => {
                match repl.process_line(&line)? {
                    LineOutcome::Continue(lines) => {
                        for l in lines {
                            println!("{}", l);
                        }
                    }
                    LineOutcome::Clear => {
                        if let Err(e) = rl.clear_screen() {
                            tracing::warn!("Failed to clear screen: {}", e);
                        }
                    }
                    LineOutcome::Exit(lines) => {
                        for l in lines {
                            println!("{}", l);
                        }
                        repl.linger();
                        return Ok(());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("logout");
                for l in repl.hang_up() {
                    println!("{}", l);
                }
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repl() -> Repl {
        let mut repl = Repl::with_config(KernelConfig::default().without_delays()).unwrap();
        repl.skip_boot(&mut Vec::new()).unwrap();
        repl
    }

    #[test]
    fn test_play_boot_writes_banner() {
        let mut repl = Repl::with_config(KernelConfig::default().without_delays()).unwrap();
        let mut out = Vec::new();
        repl.play_boot(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Connecting to 9data-main...\n"));
        assert_eq!(text.lines().count(), 12);
        assert_eq!(repl.kernel().phase(), Phase::Interactive);
    }

    #[test]
    fn test_process_line_output() {
        let mut repl = repl();
        assert_eq!(
            repl.process_line("whoami").unwrap(),
            LineOutcome::Continue(vec!["9data".to_string()])
        );
    }

    #[test]
    fn test_process_line_clear_and_exit() {
        let mut repl = repl();
        assert_eq!(repl.process_line("clear").unwrap(), LineOutcome::Clear);
        assert_eq!(
            repl.process_line("exit").unwrap(),
            LineOutcome::Exit(vec!["Connection to 9data-main closed.".to_string()])
        );
        assert!(repl.process_line("ls").is_err());
    }

    #[test]
    fn test_clear_screen_empties_transcript() {
        let mut repl = repl();
        repl.process_line("whoami").unwrap();
        assert!(!repl.kernel().transcript().lines().is_empty());
        repl.clear_screen();
        assert!(repl.kernel().transcript().lines().is_empty());
        assert_eq!(repl.kernel().phase(), Phase::Interactive);
    }

    #[test]
    fn test_screen_clears_flag() {
        let clears = ScreenClears::default();
        let seen_by_editor = clears.clone();
        assert!(!clears.take());
        seen_by_editor.mark();
        assert!(clears.take());
        assert!(!clears.take());
    }

    #[test]
    fn test_history_keys_follow_kernel() {
        let mut repl = repl();
        repl.process_line("pwd").unwrap();
        repl.process_line("whoami").unwrap();

        let recall = Arc::new(Mutex::new(repl.kernel().session().history().clone()));
        let (up, down) = HistoryKeys::pair(&recall);
        assert_eq!(up.recall().as_deref(), Some("whoami"));
        assert_eq!(up.recall().as_deref(), Some("pwd"));
        assert_eq!(up.recall().as_deref(), Some("pwd"));
        assert_eq!(down.recall().as_deref(), Some("whoami"));
        assert_eq!(down.recall().as_deref(), Some(""));
        // recall does not touch the kernel
        assert_eq!(repl.kernel().session().history().len(), 2);
    }

    #[test]
    fn test_history_keys_empty() {
        let recall = Arc::new(Mutex::new(History::new()));
        let (up, down) = HistoryKeys::pair(&recall);
        assert_eq!(up.recall(), None);
        assert_eq!(down.recall().as_deref(), Some(""));
    }

    #[test]
    fn test_hang_up() {
        let mut repl = repl();
        assert_eq!(repl.hang_up(), ["Connection to 9data-main closed."]);
        assert_eq!(repl.kernel().phase(), Phase::Closed);
    }
}
