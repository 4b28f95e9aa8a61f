//! tree — Draw a directory tree.

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::Node;

/// Tree tool: depth-first listing with ASCII connectors.
pub struct Tree;

#[async_trait]
impl Tool for Tree {
    fn name(&self) -> &str {
        "tree"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("tree", "Directory tree").usage("tree [path]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let target = args.get_positional(0).unwrap_or(".");
        let resolved = match ctx.resolve(target) {
            Ok(r) if r.node.is_dir() => r,
            _ => return ExecResult::failure(1, format!("tree: '{}' is not a directory", target)),
        };

        let mut lines = vec![resolved.path.to_string()];
        walk(resolved.node, "", &mut lines);
        ExecResult::success(lines)
    }
}

fn walk(node: &Node, prefix: &str, lines: &mut Vec<String>) {
    let Some(children) = node.children() else {
        return;
    };
    let count = children.len();
    for (i, (name, child)) in children.iter().enumerate() {
        let last = i + 1 == count;
        let connector = if last { "`-- " } else { "|-- " };
        let suffix = if child.is_dir() { "/" } else { "" };
        lines.push(format!("{prefix}{connector}{name}{suffix}"));
        if child.is_dir() {
            let extension = if last { "    " } else { "|   " };
            walk(child, &format!("{prefix}{extension}"), lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::TestEnv;

    #[tokio::test]
    async fn test_tree_ssh() {
        let mut env = TestEnv::new();
        let result = env.run(&Tree, ".ssh").await;
        assert!(result.ok());
        assert_eq!(
            result.lines(),
            ["/home/9data/.ssh", "|-- authorized_keys", "`-- config"]
        );
    }

    #[tokio::test]
    async fn test_tree_nested_prefixes() {
        let mut env = TestEnv::new().at("/");
        let result = env.run(&Tree, "/var").await;
        assert_eq!(
            result.lines(),
            [
                "/var",
                "|-- log/",
                "|   `-- syslog",
                "`-- www/",
                "    `-- index.html",
            ]
        );
    }

    #[tokio::test]
    async fn test_tree_is_deterministic() {
        let mut env = TestEnv::new();
        let first = env.run(&Tree, "/").await;
        let second = env.run(&Tree, "/").await;
        assert_eq!(first, second);
        assert_eq!(first.lines()[0], "/");
        let descendants = env.vfs.root().descendant_count();
        assert_eq!(first.lines().len(), descendants + 1);
    }

    #[tokio::test]
    async fn test_tree_empty_dir() {
        let mut env = TestEnv::new();
        assert_eq!(env.run(&Tree, "/tmp").await.lines(), ["/tmp"]);
    }

    #[tokio::test]
    async fn test_tree_rejects_file_and_missing() {
        let mut env = TestEnv::new();
        let file = env.run(&Tree, ".bashrc").await;
        assert_eq!(file.code, 1);
        assert_eq!(file.lines(), ["tree: '.bashrc' is not a directory"]);
        let missing = env.run(&Tree, "ghost").await;
        assert_eq!(missing.lines(), ["tree: 'ghost' is not a directory"]);
    }
}
