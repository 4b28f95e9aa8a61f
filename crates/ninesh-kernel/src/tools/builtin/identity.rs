//! whoami, hostname — Session identity.

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Whoami tool: print the login name.
pub struct Whoami;

#[async_trait]
impl Tool for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("whoami", "Display current user")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::line(ctx.user)
    }
}

/// Hostname tool: print the machine name.
pub struct Hostname;

#[async_trait]
impl Tool for Hostname {
    fn name(&self) -> &str {
        "hostname"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("hostname", "Display hostname")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::line(ctx.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::TestEnv;

    #[tokio::test]
    async fn test_whoami() {
        let mut env = TestEnv::new();
        assert_eq!(env.run(&Whoami, "").await.lines(), ["9data"]);
    }

    #[tokio::test]
    async fn test_hostname_ignores_args() {
        let mut env = TestEnv::new();
        assert_eq!(env.run(&Hostname, "-f").await.lines(), ["9data-main"]);
    }
}
