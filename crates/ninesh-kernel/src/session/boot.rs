//! The scripted login banner.
//!
//! The kernel hands out one line at a time together with how long the host
//! should wait before showing it. The script cannot be interrupted; a host
//! that does not want the pacing can ignore the delays.

use std::time::Duration;

use ninesh_types::Distro;
use rand::Rng;

use crate::KERNEL_RELEASE;
use crate::config::KernelConfig;

/// One line of the banner and the pause before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootStep {
    pub delay: Duration,
    pub line: String,
}

/// Cursor over the banner lines.
#[derive(Debug, Clone)]
pub struct BootSequence {
    lines: Vec<String>,
    next: usize,
    initial_delay: Duration,
    line_delay: Duration,
    jitter_ms: u64,
}

impl BootSequence {
    /// Banner for the configured host and starting distro.
    pub fn for_config(config: &KernelConfig) -> Self {
        Self {
            lines: script(&config.host, config.distro),
            next: 0,
            initial_delay: Duration::from_millis(config.boot_initial_delay_ms),
            line_delay: Duration::from_millis(config.boot_line_delay_ms),
            jitter_ms: config.boot_line_jitter_ms,
        }
    }

    /// The next line, or `None` once the banner is exhausted.
    pub fn next_step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<BootStep> {
        let line = self.lines.get(self.next)?.clone();
        let delay = if self.next == 0 {
            self.initial_delay
        } else if self.jitter_ms > 0 {
            self.line_delay + Duration::from_millis(rng.gen_range(0..self.jitter_ms))
        } else {
            self.line_delay
        };
        self.next += 1;
        Some(BootStep { delay, line })
    }

    /// Every line not yet handed out, without delays.
    pub fn drain(&mut self) -> Vec<String> {
        let rest = self.lines.get(self.next..).unwrap_or(&[]).to_vec();
        self.next = self.lines.len();
        rest
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.lines.len()
    }

    pub fn remaining(&self) -> usize {
        self.lines.len().saturating_sub(self.next)
    }
}

fn script(host: &str, distro: Distro) -> Vec<String> {
    vec![
        format!("Connecting to {host}..."),
        "SSH-2.0-OpenSSH_9.6".to_string(),
        "Authenticating with public key...".to_string(),
        "Authentication successful.".to_string(),
        String::new(),
        "Last login: Mon Feb 10 08:12:34 2026 from 10.0.0.1".to_string(),
        String::new(),
        "  Welcome to 9Data.US Infrastructure".to_string(),
        "  -----------------------------------".to_string(),
        format!(
            "  {} Linux {} | 128 cores | 32GB RAM",
            distro.pretty_name(),
            KERNEL_RELEASE
        ),
        "  Type 'help' for available commands.".to_string(),
        String::new(),
    ]
}
