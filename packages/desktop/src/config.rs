//! Loads `roster.toml` from the platform config directory.
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/roster/roster.toml` |
//! | Linux | `~/.config/roster/roster.toml` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\roster\roster.toml` |
//!
//! A missing file means defaults. An unreadable or invalid file is logged and
//! also falls back to defaults, so a bad edit never keeps the app from starting.

use std::path::{Path, PathBuf};

use store::ClientConfig;

/// Where the desktop app looks for its config.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roster")
        .join(ClientConfig::filename())
}

pub fn load_default() -> ClientConfig {
    load(&config_path())
}

pub fn load(path: &Path) -> ClientConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config at {}, using defaults", path.display());
            return ClientConfig::default();
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return ClientConfig::default();
        }
    };

    match ClientConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Invalid config {}: {}", path.display(), e);
            ClientConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("roster.toml"));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_reads_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://localhost:3000\"\n").unwrap();

        assert_eq!(load(&path).base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        assert_eq!(load(&path), ClientConfig::default());
    }

    #[test]
    fn test_config_path_ends_with_filename() {
        assert!(config_path().ends_with("roster/roster.toml"));
    }
}
