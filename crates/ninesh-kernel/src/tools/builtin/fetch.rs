//! fastfetch, neofetch — Logo beside a system summary.

use async_trait::async_trait;
use ninesh_types::{Distro, ExecResult};

use crate::logos;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::KERNEL_RELEASE;

/// Columns between the widest logo row and the info block.
const GUTTER: usize = 4;

/// Fetch tool: registered as both `fastfetch` and `neofetch`.
pub struct Fetch {
    name: &'static str,
}

impl Fetch {
    pub fn fastfetch() -> Self {
        Self { name: "fastfetch" }
    }

    pub fn neofetch() -> Self {
        Self { name: "neofetch" }
    }
}

#[async_trait]
impl Tool for Fetch {
    fn name(&self) -> &str {
        self.name
    }

    fn schema(&self) -> ToolSchema {
        let summary = if self.name == "fastfetch" {
            "System info with ASCII art"
        } else {
            "Alias for fastfetch"
        };
        ToolSchema::new(self.name, summary)
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let logo = logos::logo(ctx.distro);
        let info = info_block(ctx.user, ctx.host, ctx.distro);
        ExecResult::success(side_by_side(logo, &info))
    }
}

fn package_manager(distro: Distro) -> &'static str {
    match distro {
        Distro::Arch => "pacman",
        Distro::Debian | Distro::Ubuntu => "dpkg",
        Distro::Fedora => "rpm",
        Distro::Gentoo => "emerge",
    }
}

fn info_block(user: &str, host: &str, distro: Distro) -> Vec<String> {
    let title = format!("{user}@{host}");
    let rule = "-".repeat(title.chars().count().max(18));
    vec![
        title,
        rule,
        format!("OS: {} Linux x86_64", distro.pretty_name()),
        "Host: 9Data Bare Metal Server".to_string(),
        format!("Kernel: {KERNEL_RELEASE}"),
        "Uptime: 142 days, 3 hours, 41 mins".to_string(),
        format!("Packages: 847 ({})", package_manager(distro)),
        "Shell: bash 5.2.26".to_string(),
        "Terminal: 9data-ssh".to_string(),
        "CPU: AMD EPYC 7763 (128) @ 3.529GHz".to_string(),
        "GPU: N/A (headless)".to_string(),
        "Memory: 4301MiB / 32768MiB".to_string(),
        "Disk: 234G / 2.0T (13%)".to_string(),
        "Network: 10Gbps bonded".to_string(),
        "Locale: en_US.UTF-8".to_string(),
    ]
}

/// Zip logo rows with info rows; the shorter side is padded with blanks.
fn side_by_side(logo: &[&str], info: &[String]) -> Vec<String> {
    let column = logos::width(logo) + GUTTER;
    let rows = logo.len().max(info.len());
    (0..rows)
        .map(|i| {
            let left = logo.get(i).copied().unwrap_or("");
            let right = info.get(i).map(String::as_str).unwrap_or("");
            format!("{left:<column$}{right}")
        })
        .collect()
}
