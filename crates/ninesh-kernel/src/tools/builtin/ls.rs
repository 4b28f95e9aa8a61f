//! ls — List directory contents.

use async_trait::async_trait;
use ninesh_types::{DirEntry, ExecResult};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

const DIR_MODE: &str = "drwxr-xr-x";
const FILE_MODE: &str = "-rw-r--r--";

/// Ls tool: list a directory, or echo a file path.
pub struct Ls;

#[async_trait]
impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List directory contents").usage("ls [path]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let target = args.get_positional(0).unwrap_or(".");
        let show_all = args.has_flag("a");

        let resolved = match ctx.resolve(target) {
            Ok(r) => r,
            Err(_) => {
                return ExecResult::failure(
                    1,
                    format!("ls: cannot access '{}': No such file or directory", target),
                );
            }
        };
        if resolved.node.is_file() {
            return ExecResult::line(target);
        }

        let entries = match ctx.vfs.list(&resolved.path) {
            Ok(e) => e,
            Err(e) => return ExecResult::failure(1, format!("ls: {}: {}", target, e)),
        };

        let mut lines = Vec::with_capacity(entries.len() + 2);
        if show_all {
            lines.push(format!("{DIR_MODE}  ./"));
            lines.push(format!("{DIR_MODE}  ../"));
        }
        lines.extend(entries.iter().map(format_entry));

        if lines.is_empty() {
            return ExecResult::line("(empty)");
        }
        ExecResult::success(lines)
    }
}

fn format_entry(entry: &DirEntry) -> String {
    if entry.is_dir() {
        format!("{DIR_MODE}  {}/", entry.name)
    } else {
        format!("{FILE_MODE}  {}", entry.name)
    }
}
