//! cat — Display file contents.

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Cat tool: print a file line by line.
pub struct Cat;

#[async_trait]
impl Tool for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cat", "Display file contents").usage("cat <file>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(target) = args.get_positional(0) else {
            return ExecResult::failure(1, "cat: missing operand");
        };

        let resolved = match ctx.resolve(target) {
            Ok(r) => r,
            Err(_) => {
                return ExecResult::failure(1, format!("cat: {}: No such file or directory", target));
            }
        };

        match resolved.node.content() {
            Some(content) => ExecResult::success(content.split('\n')),
            None => ExecResult::failure(1, format!("cat: {}: Is a directory", target)),
        }
    }
}
