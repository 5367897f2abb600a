//! Sender entry-module configuration persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Persisted sender configuration: where the two sender families' entry
/// modules live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderConfig {
    /// Entry module injected into the target context for tab/screen casts.
    #[serde(default = "default_mirroring_module")]
    pub mirroring_module: String,
    /// Entry module loaded into the extension context for file casts.
    #[serde(default = "default_local_media_module")]
    pub local_media_module: String,
    /// Path to config file (not serialized).
    #[serde(skip)]
    pub config_path: PathBuf,
}

fn default_mirroring_module() -> String {
    "senders/mirroring.js".into()
}
fn default_local_media_module() -> String {
    "senders/media.js".into()
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            mirroring_module: default_mirroring_module(),
            local_media_module: default_local_media_module(),
            config_path: PathBuf::new(),
        }
    }
}

impl SenderConfig {
    /// Load config from a JSON file, or return defaults.
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join("sender.json");
        let mut config: SenderConfig = std::fs::read_to_string(&config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();
        config.config_path = config_path;
        config
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(&self.config_path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SenderConfig::default();
        assert_eq!(config.mirroring_module, "senders/mirroring.js");
        assert_eq!(config.local_media_module, "senders/media.js");
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SenderConfig::load(dir.path());
        assert_eq!(config.mirroring_module, "senders/mirroring.js");
        assert_eq!(config.config_path, dir.path().join("sender.json"));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SenderConfig::load(dir.path());
        config.mirroring_module = "senders/mirroring-v2.js".into();
        config.save().unwrap();

        let reloaded = SenderConfig::load(dir.path());
        assert_eq!(reloaded.mirroring_module, "senders/mirroring-v2.js");
        assert_eq!(reloaded.local_media_module, "senders/media.js");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("sender.json"),
            r#"{"mirroring_module": "custom/mirroring.js"}"#,
        )
        .unwrap();
        let config = SenderConfig::load(dir.path());
        assert_eq!(config.mirroring_module, "custom/mirroring.js");
        assert_eq!(config.local_media_module, "senders/media.js");
    }
}
