//! mkdir — Create a directory in the working directory.

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::VfsError;

use super::{is_dot_entry, strip_slashes};

/// Mkdir tool: create an empty directory under the cwd.
///
/// Slashes are removed from the name, so `mkdir a/b` creates `ab`.
pub struct Mkdir;

#[async_trait]
impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mkdir", "Create a directory").usage("mkdir <name>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(raw) = args.get_positional(0) else {
            return ExecResult::failure(1, "mkdir: missing operand");
        };
        let name = strip_slashes(raw);
        if name.is_empty() {
            return ExecResult::failure(1, format!("mkdir: cannot create directory '{}': Invalid name", raw));
        }
        if is_dot_entry(&name) {
            return ExecResult::failure(
                1,
                format!("mkdir: cannot create directory '{}': File exists", name),
            );
        }

        match ctx.vfs.mkdir(ctx.cwd, &name) {
            Ok(()) => ExecResult::empty(),
            Err(VfsError::AlreadyExists(_)) => ExecResult::failure(
                1,
                format!("mkdir: cannot create directory '{}': File exists", name),
            ),
            Err(VfsError::NotFound(_)) => ExecResult::failure(
                1,
                format!("mkdir: cannot create directory '{}': No such file or directory", name),
            ),
            Err(e) => ExecResult::failure(1, format!("mkdir: {}: {}", name, e)),
        }
    }
}
