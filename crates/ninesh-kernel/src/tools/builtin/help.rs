//! help — List available commands.

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Help tool: one line per listed tool, in registration order.
pub struct Help;

#[async_trait]
impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "Show this list").unlisted()
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let mut lines = vec!["Available commands:".to_string()];
        lines.extend(
            ctx.tool_schemas
                .iter()
                .filter(|schema| schema.listed)
                .map(ToolSchema::help_line),
        );
        lines.push(String::new());
        lines.push("Tab through your command history with Arrow Up/Down.".to_string());
        ExecResult::success(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::TestEnv;

    #[tokio::test]
    async fn test_help_layout() {
        let mut env = TestEnv::new();
        let result = env.run(&Help, "").await;
        assert!(result.ok());
        let lines = result.lines();
        assert_eq!(lines[0], "Available commands:");
        assert_eq!(lines[1], "  ls [path]        - List directory contents");
        assert_eq!(lines[lines.len() - 2], "");
        assert_eq!(
            lines[lines.len() - 1],
            "Tab through your command history with Arrow Up/Down."
        );
    }

    #[tokio::test]
    async fn test_help_lists_setdistro_and_exit() {
        let mut env = TestEnv::new();
        let result = env.run(&Help, "").await;
        let lines = result.lines();
        assert!(lines.contains(
            &"  setdistro <name> - Change ASCII logo (arch/debian/ubuntu/fedora/gentoo)".to_string()
        ));
        assert!(lines.contains(&"  exit             - Close terminal".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("  help")));
        assert!(!lines.iter().any(|l| l.starts_with("  htop")));
    }
}
