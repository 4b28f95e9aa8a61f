//! ninesh CLI entry point.
//!
//! Usage:
//!   ninesh                      # Interactive session with boot banner
//!   ninesh --no-boot            # Interactive session, banner printed at once
//!   ninesh -c <line>            # Run one line in a fresh session and exit
//!   ninesh -c <line> --json     # Same, transcript as JSON

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ninesh_kernel::KernelConfig;
use ninesh_types::Distro;

/// A simulated SSH session into 9Data infrastructure.
#[derive(Debug, Parser)]
#[command(name = "ninesh", version, about)]
struct Cli {
    /// Run one command line and exit
    #[arg(short = 'c', value_name = "LINE")]
    command: Option<String>,

    /// With -c, print the transcript as JSON
    #[arg(long, requires = "command")]
    json: bool,

    /// Print the boot banner without pauses
    #[arg(long)]
    no_boot: bool,

    /// Login name
    #[arg(long)]
    user: Option<String>,

    /// Machine name
    #[arg(long)]
    host: Option<String>,

    /// Starting display preset (arch, debian, ubuntu, fedora, gentoo)
    #[arg(long)]
    distro: Option<Distro>,

    /// Config file (default: ~/.config/ninesh/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// File configuration with flags applied on top.
    fn kernel_config(&self) -> Result<KernelConfig> {
        let mut config = match &self.config {
            Some(path) => ninesh_repl::config::load_from(path)?,
            None => ninesh_repl::config::load()?,
        };
        if let Some(user) = &self.user {
            config = config.with_user(user);
        }
        if let Some(host) = &self.host {
            config = config.with_host(host);
        }
        if let Some(distro) = self.distro {
            config = config.with_distro(distro);
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    // Diagnostics go to stderr so they never mix with the session
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli.kernel_config()?;

    let Some(line) = &cli.command else {
        ninesh_repl::run(config, !cli.no_boot)?;
        return Ok(ExitCode::SUCCESS);
    };

    let shot = ninesh_repl::run_once(config, line)?;
    if cli.json {
        let json = serde_json::to_string_pretty(&shot).context("Failed to serialize transcript")?;
        println!("{json}");
    } else {
        for text in shot.output() {
            println!("{text}");
        }
    }

    if shot.ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
