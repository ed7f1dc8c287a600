//! Engine configuration persistence
//!
//! Stores user preferences in `~/.config/quill/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theme::{DEFAULT_FONT, DEFAULT_FONT_SIZE};

/// Engine configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Selected theme id (e.g., "default-light", "default-dark")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Whether documents publish highlighted styles or all-plain styles
    #[serde(default = "default_true")]
    pub syntax_highlighting: bool,

    /// Maximum undo steps kept per document (unbounded when absent)
    #[serde(default)]
    pub history_limit: Option<usize>,

    #[serde(default = "default_font_face")]
    pub font_face: String,

    #[serde(default = "default_font_size")]
    pub font_size: u16,
}

fn default_theme() -> String {
    "default-light".to_string()
}

fn default_true() -> bool {
    true
}

fn default_font_face() -> String {
    DEFAULT_FONT.to_string()
}

fn default_font_size() -> u16 {
    DEFAULT_FONT_SIZE
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            syntax_highlighting: true,
            history_limit: None,
            font_face: default_font_face(),
            font_size: default_font_size(),
        }
    }
}

impl EngineConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
