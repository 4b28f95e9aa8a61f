//! Loading the session configuration from disk.
//!
//! Configuration is read from `~/.config/ninesh/config.toml` unless a path
//! is given explicitly. Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use ninesh_kernel::KernelConfig;

/// Get the default config file path.
pub fn config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "ninesh").context("Could not determine config directory")?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Load configuration from the default path.
///
/// If the config file doesn't exist, returns default configuration.
pub fn load() -> Result<KernelConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(KernelConfig::default());
    }
    load_from(&path)
}

/// Load configuration from a specific path. The file must exist.
pub fn load_from(path: &Path) -> Result<KernelConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninesh_types::Distro;

    fn scratch(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ninesh-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let path = scratch("full.toml", "host = \"edge-7\"\ndistro = \"debian\"\n");
        let config = load_from(&path).unwrap();
        assert_eq!(config.host, "edge-7");
        assert_eq!(config.distro, Distro::Debian);
        assert_eq!(config.user, "9data");
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let path = std::env::temp_dir().join("ninesh-definitely-missing.toml");
        let err = load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_load_from_bad_toml_errors() {
        let path = scratch("bad.toml", "distro = \"beos\"\n");
        let err = load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_config_path_file_name() {
        if let Ok(path) = config_path() {
            assert!(path.ends_with("ninesh/config.toml") || path.ends_with("config.toml"));
        }
    }
}
