//! rm — Remove an entry from the working directory.

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::VfsError;

/// Rm tool: remove a direct child of the cwd.
///
/// Only the first non-flag argument is considered. Directories need `-r`
/// (or any flag bundle containing `r`, such as `-rf`).
pub struct Rm;

#[async_trait]
impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rm", "Remove a file or directory").usage("rm [-r] <name>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(target) = args.get_positional(0) else {
            return ExecResult::failure(1, "rm: missing operand");
        };
        let recursive = args.has_flag("r");

        match ctx.vfs.remove(ctx.cwd, target, recursive) {
            Ok(removed) => {
                tracing::trace!(name = target, entries = removed.descendant_count() + 1, "rm");
                ExecResult::empty()
            }
            Err(VfsError::IsADirectory(_)) => {
                ExecResult::failure(1, format!("rm: cannot remove '{}': Is a directory", target))
            }
            Err(_) => ExecResult::failure(
                1,
                format!("rm: cannot remove '{}': No such file or directory", target),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::TestEnv;
    use ninesh_types::VfsPath;
    use rstest::rstest;

    #[tokio::test]
    async fn test_rm_file() {
        let mut env = TestEnv::new();
        let result = env.run(&Rm, ".bashrc").await;
        assert!(result.ok());
        assert!(env.vfs.lookup(&VfsPath::parse("/home/9data/.bashrc")).is_err());
        assert_eq!(env.vfs.list(&env.cwd).unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_rm_dir_without_recursive() {
        let mut env = TestEnv::new();
        let before = env.vfs.clone();
        let result = env.run(&Rm, "logs").await;
        assert_eq!(result.code, 1);
        assert_eq!(result.lines(), ["rm: cannot remove 'logs': Is a directory"]);
        assert_eq!(env.vfs, before);
    }

    #[rstest]
    #[case::r("-r logs")]
    #[case::rf("-rf logs")]
    #[case::flag_after("logs -r")]
    #[tokio::test]
    async fn test_rm_dir_recursive(#[case] line: &str) {
        let mut env = TestEnv::new();
        let result = env.run(&Rm, line).await;
        assert!(result.ok());
        assert!(env.vfs.lookup(&VfsPath::parse("/home/9data/logs")).is_err());
    }

    #[tokio::test]
    async fn test_rm_missing_target() {
        let mut env = TestEnv::new();
        let before = env.vfs.clone();
        let result = env.run(&Rm, "ghost").await;
        assert_eq!(
            result.lines(),
            ["rm: cannot remove 'ghost': No such file or directory"]
        );
        assert_eq!(env.vfs, before);
    }

    #[tokio::test]
    async fn test_rm_is_not_a_path() {
        let mut env = TestEnv::new();
        let result = env.run(&Rm, "logs/error.log").await;
        assert_eq!(result.code, 1);
        assert!(env.vfs.lookup(&VfsPath::parse("/home/9data/logs/error.log")).is_ok());
    }

    #[rstest]
    #[case::nothing("")]
    #[case::only_flags("-rf")]
    #[tokio::test]
    async fn test_rm_missing_operand(#[case] line: &str) {
        let mut env = TestEnv::new();
        assert_eq!(env.run(&Rm, line).await.lines(), ["rm: missing operand"]);
    }
}
