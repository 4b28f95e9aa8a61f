//! date — Display current date and time.

use async_trait::async_trait;
use chrono::Local;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Browser-style local timestamp, e.g. `Tue Feb 10 2026 08:12:34 GMT+0100`.
const FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Date tool: display current date/time.
pub struct Date;

#[async_trait]
impl Tool for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("date", "Current date/time")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::line(Local::now().format(FORMAT).to_string())
    }
}
