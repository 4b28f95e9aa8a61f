//! The fixed layout every session starts from.

use ninesh_types::VfsPath;

use super::tree::{Vfs, VfsResult};

/// Files under the user's home directory, relative to it.
const HOME_FILES: &[(&str, &str)] = &[
    (
        ".bashrc",
        "# ~/.bashrc\n\
         export PS1=\"\\u@9data:\\w$ \"\n\
         export EDITOR=vim\n\
         alias ll=\"ls -la\"\n\
         alias cls=\"clear\"\n\
         \n\
         # 9Data environment\n\
         export NODE_ENV=production\n\
         export DATA_CENTER=US-EAST-1",
    ),
    (
        ".ssh/authorized_keys",
        "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIN9... admin@9data.us\n\
         ssh-rsa AAAAB3NzaC1yc2EAAAA... deploy@relay-01",
    ),
    (
        ".ssh/config",
        "Host relay-*\n  User 9data\n  IdentityFile ~/.ssh/id_ed25519\n  StrictHostKeyChecking no\n\n\
         Host main-server\n  HostName 10.0.1.1\n  User root\n  Port 2222",
    ),
    (
        "documents/welcome.txt",
        "=================================\n\
         \x20 Welcome to 9Data.US SSH Demo\n\
         =================================\n\
         \n\
         This is a simulated SSH session.\n\
         You can explore the filesystem,\n\
         run commands, and see how our\n\
         infrastructure operates.\n\
         \n\
         Type 'help' for available commands.",
    ),
    (
        "documents/network-map.txt",
        "9Data.US Network Topology\n\
         ========================\n\
         \n\
         [CLIENT] ---> [RELAY-01] ---> [MAIN-SERVER]\n\
         \x20                 |                  |\n\
         \x20             [RELAY-02] -----> [BACKUP-01]\n\
         \x20                 |                  |\n\
         \x20             [RELAY-03] -----> [BACKUP-02]\n\
         \n\
         All connections encrypted via WireGuard\n\
         Latency: <2ms between nodes",
    ),
    (
        "documents/sla.txt",
        "Service Level Agreement\n\
         ======================\n\
         Uptime Guarantee: 99.99%\n\
         DDoS Mitigation: <10s response\n\
         Support Response: <1hr\n\
         Data Redundancy: 3x replication\n\
         Backup Frequency: Every 6 hours\n\
         Encryption: AES-256 at rest, TLS 1.3 in transit",
    ),
    (
        "scripts/health-check.sh",
        "#!/bin/bash\n\
         # 9Data Health Check Script\n\
         echo \"Running health check...\"\n\
         echo \"CPU: OK (12% usage)\"\n\
         echo \"RAM: OK (4.2GB / 32GB)\"\n\
         echo \"Disk: OK (234GB / 2TB)\"\n\
         echo \"Network: OK (1.2Gbps)\"\n\
         echo \"Services: All 14 running\"\n\
         echo \"---\"\n\
         echo \"Health check passed.\"",
    ),
    (
        "scripts/deploy.sh",
        "#!/bin/bash\n\
         # Deployment script\n\
         set -e\n\
         \n\
         echo \"Pulling latest from main...\"\n\
         echo \"Building containers...\"\n\
         echo \"Running migrations...\"\n\
         echo \"Restarting services...\"\n\
         echo \"Deployment complete.\"",
    ),
    (
        "scripts/backup.sh",
        "#!/bin/bash\n\
         # Automated backup script\n\
         DATE=$(date +%Y%m%d_%H%M%S)\n\
         BACKUP_DIR=\"/mnt/backups/$DATE\"\n\
         \n\
         echo \"Creating backup: $BACKUP_DIR\"\n\
         echo \"Dumping databases...\"\n\
         echo \"Compressing files...\"\n\
         echo \"Encrypting archive...\"\n\
         echo \"Uploading to offsite storage...\"\n\
         echo \"Backup complete: 2.4GB\"",
    ),
    (
        "logs/access.log",
        "[2026-02-10 08:12:34] CONNECT relay-01 -> main-server OK\n\
         [2026-02-10 08:12:35] DATA_RECV 1.2GB from client-vaultmc\n\
         [2026-02-10 08:13:01] PROCESS batch-4421 started\n\
         [2026-02-10 08:14:22] PROCESS batch-4421 complete (81s)\n\
         [2026-02-10 08:14:23] DATA_SEND 0.8GB to client-vaultmc\n\
         [2026-02-10 08:15:00] HEALTH_CHECK all nodes OK\n\
         [2026-02-10 08:20:00] BACKUP incremental started\n\
         [2026-02-10 08:22:14] BACKUP incremental complete",
    ),
    (
        "logs/error.log",
        "[2026-02-09 23:44:01] WARN: High latency to relay-03 (45ms)\n\
         [2026-02-09 23:44:02] INFO: Rerouting through relay-02\n\
         [2026-02-09 23:44:02] INFO: Latency normalized (2ms)",
    ),
    (
        "logs/firewall.log",
        "[2026-02-10 03:21:11] BLOCKED: SYN flood from 192.168.x.x (2.1Gbps)\n\
         [2026-02-10 03:21:12] MITIGATION: Activated DDoS scrubbing\n\
         [2026-02-10 03:21:15] BLOCKED: Traffic normalized\n\
         [2026-02-10 06:45:33] BLOCKED: Port scan from 10.x.x.x\n\
         [2026-02-10 06:45:33] ACTION: IP blacklisted for 24h",
    ),
];

/// Files outside the home directory, by absolute path.
const SYSTEM_FILES: &[(&str, &str)] = &[
    (
        "/etc/os-release",
        "NAME=\"Arch Linux\"\n\
         PRETTY_NAME=\"Arch Linux\"\n\
         ID=arch\n\
         BUILD_ID=rolling\n\
         ANSI_COLOR=\"38;2;23;147;209\"",
    ),
    (
        "/etc/resolv.conf",
        "# Generated by 9Data\n\
         nameserver 1.1.1.1\n\
         nameserver 8.8.8.8\n\
         search 9data.internal",
    ),
    (
        "/var/log/syslog",
        "Feb 10 08:00:01 9data-main systemd[1]: Started 9Data Core Service.\n\
         Feb 10 08:00:02 9data-main kernel: [ 0.000000] Linux version 6.7.4-arch1-1\n\
         Feb 10 08:00:03 9data-main wireguard: wg0: Peer connected from relay-01",
    ),
    (
        "/var/www/index.html",
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>9Data.US</title></head>\n\
         <body>\n\
         \x20 <h1>9Data.US - Private Infrastructure</h1>\n\
         \x20 <p>This server is not publicly accessible.</p>\n\
         </body>\n\
         </html>",
    ),
];

/// Directories that exist even though nothing is seeded inside them.
const EMPTY_DIRS: &[&str] = &["/tmp"];

/// The home directory of `user`: `/home/<user>`.
pub fn home_dir(user: &str) -> VfsPath {
    VfsPath::root().child("home").child(user)
}

/// Build the starting tree for a session of `user` on `host`.
pub fn seeded(user: &str, host: &str) -> VfsResult<Vfs> {
    let mut vfs = Vfs::new();
    let home = home_dir(user);

    for (relative, content) in HOME_FILES {
        vfs.write_file(&home.join_lexical(relative), *content)?;
    }
    for (absolute, content) in SYSTEM_FILES {
        vfs.write_file(&VfsPath::parse(absolute), *content)?;
    }
    vfs.write_file(&VfsPath::parse("/etc/hostname"), host)?;
    for dir in EMPTY_DIRS {
        vfs.create_dir_all(&VfsPath::parse(dir))?;
    }

    Ok(vfs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_layout() {
        let vfs = seeded("9data", "9data-main").unwrap();
        let names: Vec<_> = vfs
            .list(&VfsPath::root())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["etc", "home", "tmp", "var"]);
    }

    #[test]
    fn home_is_populated() {
        let vfs = seeded("9data", "9data-main").unwrap();
        let names: Vec<_> = vfs
            .list(&home_dir("9data"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(
            names,
            [".bashrc", ".ssh", "documents", "logs", "scripts"]
        );
    }

    #[test]
    fn hostname_file_follows_host() {
        let vfs = seeded("ops", "edge-7").unwrap();
        let node = vfs.lookup(&VfsPath::parse("/etc/hostname")).unwrap();
        assert_eq!(node.content(), Some("edge-7"));
        assert!(vfs.lookup(&VfsPath::parse("/home/ops/.bashrc")).is_ok());
    }

    #[test]
    fn tmp_starts_empty() {
        let vfs = seeded("9data", "9data-main").unwrap();
        assert!(vfs.list(&VfsPath::parse("/tmp")).unwrap().is_empty());
    }

    #[test]
    fn welcome_text_keeps_indentation() {
        let vfs = seeded("9data", "9data-main").unwrap();
        let node = vfs
            .lookup(&VfsPath::parse("/home/9data/documents/welcome.txt"))
            .unwrap();
        let second = node.content().and_then(|c| c.lines().nth(1));
        assert_eq!(second, Some("  Welcome to 9Data.US SSH Demo"));
    }
}
