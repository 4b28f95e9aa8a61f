//! Session configuration.
//!
//! Every field has a default, so an empty TOML table (or no file at all)
//! yields the stock 9Data demo.

use std::time::Duration;

use ninesh_types::{Distro, VfsPath};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vfs::home_dir;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must not contain '/' or whitespace: {value:?}")]
    InvalidName { field: &'static str, value: String },
}

/// Configuration for one simulated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Login name; also decides the home directory `/home/<user>`.
    #[serde(default = "default_user")]
    pub user: String,

    /// Machine name shown in the prompt and by `hostname`.
    #[serde(default = "default_host")]
    pub host: String,

    /// Display preset at session start.
    #[serde(default)]
    pub distro: Distro,

    /// Pause before the first boot line.
    #[serde(default = "default_boot_initial_delay")]
    pub boot_initial_delay_ms: u64,

    /// Base pause between boot lines.
    #[serde(default = "default_boot_line_delay")]
    pub boot_line_delay_ms: u64,

    /// Upper bound (exclusive) of the random extra pause between boot lines.
    #[serde(default = "default_boot_line_jitter")]
    pub boot_line_jitter_ms: u64,

    /// How long the host keeps the closing message on screen after `exit`.
    #[serde(default = "default_exit_delay")]
    pub exit_delay_ms: u64,
}

fn default_user() -> String {
    "9data".to_string()
}

fn default_host() -> String {
    "9data-main".to_string()
}

fn default_boot_initial_delay() -> u64 {
    300
}

fn default_boot_line_delay() -> u64 {
    40
}

fn default_boot_line_jitter() -> u64 {
    30
}

fn default_exit_delay() -> u64 {
    800
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            distro: Distro::default(),
            boot_initial_delay_ms: default_boot_initial_delay(),
            boot_line_delay_ms: default_boot_line_delay(),
            boot_line_jitter_ms: default_boot_line_jitter(),
            exit_delay_ms: default_exit_delay(),
        }
    }
}

impl KernelConfig {
    /// Set the login name.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Set the machine name.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the starting display preset.
    pub fn with_distro(mut self, distro: Distro) -> Self {
        self.distro = distro;
        self
    }

    /// Zero every timer. Used by tests and one-shot runs.
    pub fn without_delays(mut self) -> Self {
        self.boot_initial_delay_ms = 0;
        self.boot_line_delay_ms = 0;
        self.boot_line_jitter_ms = 0;
        self.exit_delay_ms = 0;
        self
    }

    /// The user's home directory.
    pub fn home(&self) -> VfsPath {
        home_dir(&self.user)
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    /// Check that names can serve as path segments and prompt parts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_name("user", &self.user)?;
        validate_name("host", &self.host)
    }
}

fn validate_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Empty { field });
    }
    if value.contains('/') || value.chars().any(char::is_whitespace) || value == "." || value == ".." {
        return Err(ConfigError::InvalidName {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KernelConfig::default();
        assert_eq!(config.user, "9data");
        assert_eq!(config.host, "9data-main");
        assert_eq!(config.distro, Distro::Arch);
        assert_eq!(config.exit_delay(), Duration::from_millis(800));
        assert_eq!(config.home().to_string(), "/home/9data");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
user = "ops"
host = "edge-7"
distro = "gentoo"
boot_initial_delay_ms = 10
boot_line_delay_ms = 5
boot_line_jitter_ms = 0
exit_delay_ms = 100
"#;
        let config: KernelConfig = toml::from_str(toml).expect("parse failed");
        assert_eq!(config.user, "ops");
        assert_eq!(config.host, "edge-7");
        assert_eq!(config.distro, Distro::Gentoo);
        assert_eq!(config.boot_line_jitter_ms, 0);
        assert_eq!(config.home().to_string(), "/home/ops");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: KernelConfig = toml::from_str("").expect("parse failed");
        assert_eq!(config, KernelConfig::default());
    }

    #[test]
    fn test_without_delays() {
        let config = KernelConfig::default().without_delays();
        assert_eq!(config.boot_initial_delay_ms, 0);
        assert_eq!(config.exit_delay(), Duration::ZERO);
    }

    #[test]
    fn test_rejects_bad_names() {
        let config = KernelConfig::default().with_user("");
        assert_eq!(config.validate(), Err(ConfigError::Empty { field: "user" }));

        let config = KernelConfig::default().with_host("a/b");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidName { field: "host", .. })
        ));

        let config = KernelConfig::default().with_user("..");
        assert!(config.validate().is_err());
    }
}
