//! Host configuration for the watchface runtime.
//!
//! Loaded from an optional `cwf.toml`. Every field has a default so an empty
//! or partial file is valid.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CwfError, Result};

/// Runtime configuration supplied by the host.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchfaceConfig {
    /// Display width in pixels. Drives the zoom factor.
    #[serde(default = "default_device_width")]
    pub device_width: u32,
    /// User preference gating the seconds display.
    #[serde(default = "yes")]
    pub show_seconds: bool,
    /// Skin document to apply.
    #[serde(default = "default_skin_path")]
    pub skin_path: PathBuf,
    /// Directory holding raw platform resources (`watchface_custom.png`, ...).
    #[serde(default = "default_resources_dir")]
    pub resources_dir: PathBuf,
    /// Name under which the active skin is persisted.
    #[serde(default = "default_skin_name")]
    pub skin_name: String,
}

fn default_device_width() -> u32 {
    400
}
fn yes() -> bool {
    true
}
fn default_skin_path() -> PathBuf {
    PathBuf::from("skins/default.json")
}
fn default_resources_dir() -> PathBuf {
    PathBuf::from("resources")
}
fn default_skin_name() -> String {
    "custom".to_string()
}

impl Default for WatchfaceConfig {
    fn default() -> Self {
        Self {
            device_width: default_device_width(),
            show_seconds: true,
            skin_path: default_skin_path(),
            resources_dir: default_resources_dir(),
            skin_name: default_skin_name(),
        }
    }
}

impl WatchfaceConfig {
    /// Parse a TOML string.
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| CwfError::Config(format!("cwf.toml: {e}")))
    }

    /// Load from a file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::debug!("{} not found -- using default config", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg = WatchfaceConfig::from_toml("").unwrap();
        assert_eq!(cfg.device_width, 400);
        assert!(cfg.show_seconds);
        assert_eq!(cfg.skin_path, PathBuf::from("skins/default.json"));
        assert_eq!(cfg.skin_name, "custom");
    }

    #[test]
    fn partial_toml_overrides() {
        let cfg = WatchfaceConfig::from_toml(
            r#"
device_width = 454
show_seconds = false
"#,
        )
        .unwrap();
        assert_eq!(cfg.device_width, 454);
        assert!(!cfg.show_seconds);
        assert_eq!(cfg.resources_dir, PathBuf::from("resources"));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = WatchfaceConfig::from_toml("device_width = \"wide\"").unwrap_err();
        assert!(matches!(err, CwfError::Config(_)));
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = WatchfaceConfig::load_or_default(&dir.path().join("cwf.toml")).unwrap();
        assert_eq!(cfg.device_width, 400);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cwf.toml");
        std::fs::write(&path, "device_width = 320\nskin_name = \"night\"\n").unwrap();
        let cfg = WatchfaceConfig::load_or_default(&path).unwrap();
        assert_eq!(cfg.device_width, 320);
        assert_eq!(cfg.skin_name, "night");
    }
}
