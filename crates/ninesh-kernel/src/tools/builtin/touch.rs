//! touch — Create an empty file in the working directory.

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::VfsError;

use super::{is_dot_entry, strip_slashes};

/// Touch tool: create an empty file under the cwd if nothing has that name.
pub struct Touch;

#[async_trait]
impl Tool for Touch {
    fn name(&self) -> &str {
        "touch"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("touch", "Create an empty file").usage("touch <name>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(raw) = args.get_positional(0) else {
            return ExecResult::failure(1, "touch: missing operand");
        };
        let name = strip_slashes(raw);
        if name.is_empty() {
            return ExecResult::failure(1, format!("touch: cannot touch '{}': Invalid name", raw));
        }
        if is_dot_entry(&name) {
            return ExecResult::empty();
        }

        match ctx.vfs.touch(ctx.cwd, &name) {
            Ok(created) => {
                tracing::trace!(name = %name, created, "touch");
                ExecResult::empty()
            }
            Err(VfsError::NotFound(_)) => ExecResult::failure(
                1,
                format!("touch: cannot touch '{}': No such file or directory", name),
            ),
            Err(e) => ExecResult::failure(1, format!("touch: {}: {}", name, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::TestEnv;
    use ninesh_types::VfsPath;

    #[tokio::test]
    async fn test_touch_creates_empty_file() {
        let mut env = TestEnv::new();
        let result = env.run(&Touch, "notes.md").await;
        assert!(result.ok());
        let node = env.vfs.lookup(&VfsPath::parse("/home/9data/notes.md")).unwrap();
        assert_eq!(node.content(), Some(""));
    }

    #[tokio::test]
    async fn test_touch_existing_keeps_content() {
        let mut env = TestEnv::new();
        let path = VfsPath::parse("/home/9data/.bashrc");
        let before = env.vfs.lookup(&path).unwrap().clone();
        let result = env.run(&Touch, ".bashrc").await;
        assert!(result.ok());
        assert_eq!(env.vfs.lookup(&path).unwrap(), &before);
    }

    #[tokio::test]
    async fn test_touch_existing_dir_untouched() {
        let mut env = TestEnv::new();
        assert!(env.run(&Touch, "logs").await.ok());
        assert!(env.vfs.lookup(&VfsPath::parse("/home/9data/logs")).unwrap().is_dir());
    }

    #[tokio::test]
    async fn test_touch_dot_entries_are_noop() {
        let mut env = TestEnv::new().at("/tmp");
        for name in [".", ".."] {
            assert!(env.run(&Touch, name).await.ok());
        }
        assert!(env.vfs.list(&VfsPath::parse("/tmp")).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_touch_in_removed_cwd() {
        let mut env = TestEnv::new().at("/tmp");
        env.vfs.remove(&VfsPath::root(), "tmp", true).unwrap();
        let result = env.run(&Touch, "x").await;
        assert_eq!(result.code, 1);
        assert_eq!(
            result.lines(),
            ["touch: cannot touch 'x': No such file or directory"]
        );
    }

    #[tokio::test]
    async fn test_touch_missing_operand() {
        let mut env = TestEnv::new();
        let result = env.run(&Touch, "").await;
        assert_eq!(result.code, 1);
        assert_eq!(result.lines(), ["touch: missing operand"]);
    }
}
