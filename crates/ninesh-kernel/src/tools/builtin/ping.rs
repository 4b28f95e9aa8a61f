//! ping — Pretend to reach a host.

use async_trait::async_trait;
use ninesh_types::ExecResult;
use rand::Rng;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

const PACKETS: u32 = 3;

/// Ping tool: three fake echo replies from a made-up 10.0.1.x address.
pub struct Ping;

#[async_trait]
impl Tool for Ping {
    fn name(&self) -> &str {
        "ping"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ping", "Simulate ping").usage("ping <host>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(host) = args.get_positional(0) else {
            return ExecResult::failure(1, "ping: missing host operand");
        };

        let octet: u8 = ctx.rng.gen_range(1..=254);
        let mut lines = vec![format!("PING {host} (10.0.1.{octet}) 56(84) bytes of data.")];
        for seq in 1..=PACKETS {
            let tenths: u8 = ctx.rng.gen_range(0..=8);
            let hundredths: u8 = ctx.rng.gen_range(0..=8);
            lines.push(format!(
                "64 bytes from {host}: icmp_seq={seq} ttl=64 time=1.{tenths}{hundredths} ms"
            ));
        }
        lines.push(String::new());
        lines.push(format!("--- {host} ping statistics ---"));
        lines.push(format!(
            "{PACKETS} packets transmitted, {PACKETS} received, 0% packet loss, time 2003ms"
        ));
        lines.push("rtt min/avg/max/mdev = 1.12/1.34/1.56/0.18 ms".to_string());
        ExecResult::success(lines)
    }
}
