use std::{fs, path::Path};

use super::EditorConfig;

impl EditorConfig {
    pub fn from_yaml(content: &str) -> color_eyre::Result<Self> {
        // An empty document deserializes to unit, not to an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: EditorConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Reads the file, applies environment overrides, then validates.
    /// A missing file falls back to defaults.
    pub fn load_from_path(path: &Path) -> color_eyre::Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            Self::from_yaml(&content)?
        } else {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }
}
