//! uname — Print system identification.
//!
//! ```text
//! uname         # → Linux
//! uname -a      # → Linux 9data-main 6.7.4-arch1-1 #1 SMP PREEMPT_DYNAMIC x86_64 GNU/Linux
//! uname -nr     # → 9data-main 6.7.4-arch1-1
//! ```

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::KERNEL_RELEASE;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Uname tool: print system identification.
pub struct Uname;

/// All six uname fields in GNU order.
struct UnameInfo<'a> {
    sysname: &'a str,
    nodename: &'a str,
    release: &'a str,
    version: &'a str,
    machine: &'a str,
    os: &'a str,
}

impl<'a> UnameInfo<'a> {
    fn for_host(host: &'a str) -> Self {
        Self {
            sysname: "Linux",
            nodename: host,
            release: KERNEL_RELEASE,
            version: "#1 SMP PREEMPT_DYNAMIC",
            machine: "x86_64",
            os: "GNU/Linux",
        }
    }

    /// Fields selected by the flag set; `-a` selects all, none selects `-s`.
    fn select(&self, args: &ToolArgs) -> Vec<&'a str> {
        let all = args.has_flag("a");
        let fields = [
            ("s", self.sysname),
            ("n", self.nodename),
            ("r", self.release),
            ("v", self.version),
            ("m", self.machine),
            ("o", self.os),
        ];
        let picked: Vec<_> = fields
            .iter()
            .filter(|(flag, _)| all || args.has_flag(flag))
            .map(|(_, value)| *value)
            .collect();
        if picked.is_empty() {
            vec![self.sysname]
        } else {
            picked
        }
    }
}

#[async_trait]
impl Tool for Uname {
    fn name(&self) -> &str {
        "uname"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("uname", "System information").usage("uname [-a]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let info = UnameInfo::for_host(ctx.host);
        ExecResult::line(info.select(&args).join(" "))
    }
}
