//! uptime, df, free, top, ps — Fixed snapshots of a busy server.
//!
//! The numbers never change. Arguments are accepted and ignored so that
//! habits like `df -h` or `ps aux` still work.

use async_trait::async_trait;
use ninesh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Who owns a row in the process tables.
#[derive(Clone, Copy)]
enum Owner {
    Root,
    Session,
}

impl Owner {
    fn name<'a>(self, user: &'a str) -> &'a str {
        match self {
            Owner::Root => "root",
            Owner::Session => user,
        }
    }
}

/// Uptime tool.
pub struct Uptime;

#[async_trait]
impl Tool for Uptime {
    fn name(&self) -> &str {
        "uptime"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("uptime", "System uptime")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::line(" 08:25:14 up 142 days, 3:41,  2 users,  load average: 0.12, 0.08, 0.06")
    }
}

/// Df tool: disk usage table.
pub struct Df;

#[async_trait]
impl Tool for Df {
    fn name(&self) -> &str {
        "df"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("df", "Disk usage").usage("df [-h]")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success([
            "Filesystem      Size  Used Avail Use% Mounted on",
            "/dev/nvme0n1p2  2.0T  234G  1.7T  13% /",
            "/dev/nvme0n1p1  512M   64M  448M  13% /boot",
            "/dev/sda1       8.0T  2.1T  5.9T  27% /mnt/data",
            "/dev/sdb1       8.0T  1.8T  6.2T  23% /mnt/backups",
            "tmpfs            16G  1.2M   16G   1% /tmp",
        ])
    }
}

/// Free tool: memory usage table.
pub struct Free;

#[async_trait]
impl Tool for Free {
    fn name(&self) -> &str {
        "free"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("free", "Memory usage").usage("free [-h]")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success([
            "               total        used        free      shared  buff/cache   available",
            "Mem:            32Gi       4.2Gi        18Gi       312Mi       9.8Gi        27Gi",
            "Swap:           8.0Gi         0B       8.0Gi",
        ])
    }
}

/// (pid, owner, resources, command) rows shown by `top`.
const TOP_ROWS: &[(u32, Owner, &str, &str)] = &[
    (1204, Owner::Session, "842344 124520  42880 S   1.2   0.4", "9data-core"),
    (1205, Owner::Session, "524288  89120  31440 S   0.8   0.3", "relay-proxy"),
    (1312, Owner::Session, "412564  62340  22100 S   0.4   0.2", "wireguard"),
    (1401, Owner::Root, "321456  45200  18800 S   0.2   0.1", "nginx"),
    (1502, Owner::Session, "256128  38400  14200 S   0.1   0.1", "data-pipeline"),
    (1644, Owner::Root, "184320  28800  12400 S   0.1   0.1", "sshd"),
    (1780, Owner::Session, "142560  22100   9800 S   0.0   0.1", "backup-daemon"),
    (1893, Owner::Root, " 98304  15600   7200 S   0.0   0.0", "crond"),
];

/// Top tool: one frame of a process monitor. Also registered as `htop`.
pub struct Top {
    name: &'static str,
}

impl Top {
    pub fn top() -> Self {
        Self { name: "top" }
    }

    pub fn htop() -> Self {
        Self { name: "htop" }
    }
}

#[async_trait]
impl Tool for Top {
    fn name(&self) -> &str {
        self.name
    }

    fn schema(&self) -> ToolSchema {
        let schema = ToolSchema::new(self.name, "Process snapshot");
        if self.name == "top" { schema } else { schema.unlisted() }
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let mut lines = vec![
            "top - 08:25:14 up 142 days,  2 users,  load average: 0.12, 0.08, 0.06".to_string(),
            "Tasks: 142 total,   1 running, 141 sleeping,   0 stopped,   0 zombie".to_string(),
            "%Cpu(s):  2.3 us,  0.8 sy,  0.0 ni, 96.4 id,  0.3 wa,  0.0 hi,  0.2 si".to_string(),
            "MiB Mem :  32768.0 total,  18534.2 free,   4301.8 used,   9932.0 buff".to_string(),
            String::new(),
            "    PID USER      PR  NI    VIRT    RES    SHR S  %CPU  %MEM     COMMAND".to_string(),
        ];
        lines.extend(TOP_ROWS.iter().map(|(pid, owner, resources, command)| {
            format!(
                "{:>7} {:<9} 20   0  {}     {}",
                pid,
                owner.name(ctx.user),
                resources,
                command
            )
        }));
        ExecResult::success(lines)
    }
}

/// (owner, pid, usage, command) rows shown by `ps`.
const PS_ROWS: &[(Owner, u32, &str, &str)] = &[
    (Owner::Root, 1, "0.0  0.0 169344 12800", "/sbin/init"),
    (Owner::Root, 412, "0.0  0.0  98304  8400", "/usr/lib/systemd/systemd-journald"),
    (Owner::Session, 1204, "1.2  0.4 842344 124520", "/opt/9data/bin/9data-core"),
    (Owner::Session, 1205, "0.8  0.3 524288  89120", "/opt/9data/bin/relay-proxy"),
    (Owner::Session, 1312, "0.4  0.2 412564  62340", "/usr/bin/wireguard"),
    (Owner::Root, 1401, "0.2  0.1 321456  45200", "/usr/sbin/nginx"),
    (Owner::Session, 1502, "0.1  0.1 256128  38400", "/opt/9data/bin/data-pipeline"),
    (Owner::Root, 1644, "0.1  0.1 184320  28800", "/usr/sbin/sshd"),
    (Owner::Session, 1780, "0.0  0.1 142560  22100", "/opt/9data/bin/backup-daemon"),
    (Owner::Session, 2041, "0.0  0.0  12288   3200", "-bash"),
];

/// Ps tool: process list.
pub struct Ps;

#[async_trait]
impl Tool for Ps {
    fn name(&self) -> &str {
        "ps"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ps", "Process list").usage("ps aux")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let mut lines = vec!["USER       PID %CPU %MEM    VSZ   RSS COMMAND".to_string()];
        lines.extend(PS_ROWS.iter().map(|(owner, pid, usage, command)| {
            format!("{:<8}{:>6}  {} {}", owner.name(ctx.user), pid, usage, command)
        }));
        ExecResult::success(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::TestEnv;

    #[tokio::test]
    async fn test_uptime() {
        let mut env = TestEnv::new();
        let result = env.run(&Uptime, "").await;
        assert!(result.lines()[0].starts_with(" 08:25:14 up 142 days"));
    }

    #[tokio::test]
    async fn test_df_ignores_flags() {
        let mut env = TestEnv::new();
        let plain = env.run(&Df, "").await;
        let human = env.run(&Df, "-h").await;
        assert_eq!(plain, human);
        assert_eq!(plain.lines().len(), 6);
    }

    #[tokio::test]
    async fn test_free() {
        let mut env = TestEnv::new();
        let result = env.run(&Free, "-h").await;
        assert_eq!(result.lines().len(), 3);
        assert!(result.lines()[1].starts_with("Mem:"));
    }

    #[tokio::test]
    async fn test_top_rows() {
        let mut env = TestEnv::new();
        let result = env.run(&Top::top(), "").await;
        let lines = result.lines();
        assert_eq!(lines.len(), 14);
        assert_eq!(
            lines[6],
            "   1204 9data     20   0  842344 124520  42880 S   1.2   0.4     9data-core"
        );
        assert_eq!(
            lines[9],
            "   1401 root      20   0  321456  45200  18800 S   0.2   0.1     nginx"
        );
        assert_eq!(
            lines[13],
            "   1893 root      20   0   98304  15600   7200 S   0.0   0.0     crond"
        );
    }

    #[tokio::test]
    async fn test_htop_matches_top() {
        let mut env = TestEnv::new();
        let top = env.run(&Top::top(), "").await;
        let htop = env.run(&Top::htop(), "").await;
        assert_eq!(top, htop);
        assert!(!Top::htop().schema().listed);
    }

    #[tokio::test]
    async fn test_ps_rows() {
        let mut env = TestEnv::new();
        let result = env.run(&Ps, "aux").await;
        let lines = result.lines();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "root         1  0.0  0.0 169344 12800 /sbin/init");
        assert_eq!(
            lines[3],
            "9data     1204  1.2  0.4 842344 124520 /opt/9data/bin/9data-core"
        );
        assert_eq!(lines[10], "9data     2041  0.0  0.0  12288   3200 -bash");
    }
}
