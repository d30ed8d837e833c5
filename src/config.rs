use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::card::Accent;

/// Top-level application configuration, persisted as TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default)]
    pub save: SaveConfig,
}

/// Defaults applied to a fresh card session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    /// Palette name preselected as the accent color ("blue", "red", ...).
    #[serde(default = "default_accent_name")]
    pub default_accent: String,
}

fn default_accent_name() -> String {
    "blue".to_string()
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            default_accent: default_accent_name(),
        }
    }
}

/// Where saved cards are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveConfig {
    /// Override for the save directory; defaults to the config directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// The configured default accent; unknown names fall back to Blue.
    pub fn default_accent(&self) -> Accent {
        Accent::from_name(&self.card.default_accent).unwrap_or_default()
    }
}

/// Returns the vistcard config directory path (`~/.config/vistcard/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME not set")?;
    Ok(PathBuf::from(home).join(".config").join("vistcard"))
}

/// Returns the config file path (`~/.config/vistcard/config.toml`).
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load the config from disk. Returns `Ok(None)` if the file does not exist.
pub fn load_config() -> Result<Option<AppConfig>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: AppConfig = toml::from_str(&content).context("Failed to parse config.toml")?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_serialization() {
        let config = AppConfig {
            card: CardConfig {
                default_accent: "purple".to_string(),
            },
            save: SaveConfig {
                dir: Some(PathBuf::from("/tmp/cards")),
            },
        };
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");

        assert_eq!(parsed.card.default_accent, "purple");
        assert_eq!(parsed.save.dir, Some(PathBuf::from("/tmp/cards")));
        assert_eq!(parsed.default_accent(), Accent::Purple);
    }

    #[test]
    fn defaults_applied_when_fields_omitted() {
        let config: AppConfig = toml::from_str("").expect("parse empty config");
        assert_eq!(config.card.default_accent, "blue");
        assert!(config.save.dir.is_none());
        assert_eq!(config.default_accent(), Accent::Blue);
    }

    #[test]
    fn unknown_accent_name_falls_back_to_blue() {
        let config: AppConfig = toml::from_str("[card]\ndefault_accent = \"chartreuse\"\n")
            .expect("parse config");
        assert_eq!(config.default_accent(), Accent::Blue);
    }

    #[test]
    fn partial_card_section_parses() {
        let config: AppConfig = toml::from_str("[card]\ndefault_accent = \"black\"\n")
            .expect("parse config");
        assert_eq!(config.default_accent(), Accent::Black);
        assert!(config.save.dir.is_none());
    }
}
