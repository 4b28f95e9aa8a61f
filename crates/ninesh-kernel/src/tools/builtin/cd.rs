//! cd — Change working directory.

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Cd tool: change the working directory.
pub struct Cd;

#[async_trait]
impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change directory").usage("cd [path]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let target = args.get_positional(0).unwrap_or("~");

        match ctx.resolve(target) {
            Ok(resolved) if resolved.node.is_dir() => ExecResult::empty().with_cwd(resolved.path),
            Ok(_) => ExecResult::failure(1, format!("cd: not a directory: {}", target)),
            Err(_) => ExecResult::failure(1, format!("cd: no such file or directory: {}", target)),
        }
    }
}
