//! setdistro — Switch the display preset.

use async_trait::async_trait;
use ninesh_types::{Distro, ExecResult};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Setdistro tool: pick which logo `fastfetch` shows.
pub struct SetDistro;

#[async_trait]
impl Tool for SetDistro {
    fn name(&self) -> &str {
        "setdistro"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "setdistro",
            "Change ASCII logo (arch/debian/ubuntu/fedora/gentoo)",
        )
        .usage("setdistro <name>")
    }

    async fn execute(&self, args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        let requested = args.get_positional(0).unwrap_or("");
        match requested.parse::<Distro>() {
            Ok(distro) => ExecResult::line(format!("Distro set to {}.", distro)).with_distro(distro),
            Err(unknown) => ExecResult::failure_lines(
                1,
                [
                    format!("Unknown distro: '{}'", unknown.0),
                    format!("Available: {}", Distro::valid_names()),
                ],
            ),
        }
    }
}
