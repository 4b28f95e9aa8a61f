//! clear, exit — Signals for the host.

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Clear tool: ask the host to empty the scrollback.
pub struct Clear;

#[async_trait]
impl Tool for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("clear", "Clear terminal")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::clear_screen()
    }
}

/// Exit tool: ask the host to close the session.
pub struct Exit;

#[async_trait]
impl Tool for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("exit", "Close terminal")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::close_session()
    }
}
