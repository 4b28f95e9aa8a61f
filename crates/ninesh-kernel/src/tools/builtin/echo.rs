//! echo — Print arguments.

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Echo tool: print the raw argument tokens joined by single spaces.
///
/// No flag handling; `echo -n hi` prints `-n hi`.
pub struct Echo;

#[async_trait]
impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("echo", "Print text").usage("echo <text>")
    }

    async fn execute(&self, args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::line(args.raw.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::TestEnv;

    #[tokio::test]
    async fn test_echo_collapses_whitespace() {
        let mut env = TestEnv::new();
        let result = env.run(&Echo, "hello    world").await;
        assert_eq!(result.lines(), ["hello world"]);
    }

    #[tokio::test]
    async fn test_echo_keeps_flags() {
        let mut env = TestEnv::new();
        assert_eq!(env.run(&Echo, "-n hi").await.lines(), ["-n hi"]);
    }

    #[tokio::test]
    async fn test_echo_empty() {
        let mut env = TestEnv::new();
        assert_eq!(env.run(&Echo, "").await.lines(), [""]);
    }
}
