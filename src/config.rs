//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treekin/treekin.toml`
//! 3. Local config: `<dir>/.treekin.toml`
//! 4. Environment variables: `TREEKIN__RENDER__*`

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{SettingsError, SettingsResult};

/// How trees and cursors are drawn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Prefix of the focused node's label
    pub focus_marker: String,
    /// Levels below the root to draw; deeper subtrees collapse into `…`.
    /// The branch leading to the focus is always drawn.
    pub max_depth: Option<usize>,
    /// Append the focus address to its label
    pub show_location: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            focus_marker: "> ".into(),
            max_depth: None,
            show_location: false,
        }
    }
}

/// Raw render settings for intermediate parsing.
///
/// `None` means "not specified in this layer, inherit from below".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub focus_marker: Option<String>,
    pub max_depth: Option<usize>,
    pub show_location: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub render: RawRenderSettings,
}

impl RenderSettings {
    fn merge(&self, overlay: &RawRenderSettings) -> Self {
        Self {
            focus_marker: overlay
                .focus_marker
                .clone()
                .unwrap_or_else(|| self.focus_marker.clone()),
            max_depth: overlay.max_depth.or(self.max_depth),
            show_location: overlay.show_location.unwrap_or(self.show_location),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
}

/// Get the XDG config directory for treekin.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treekin").map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treekin.toml"))
}

pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".treekin.toml")
}

fn load_raw_settings(path: &Path) -> SettingsResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// `Ok(None)` when the key is absent; a present but malformed value is an error.
fn lookup<V: DeserializeOwned>(config: &Config, key: &str) -> SettingsResult<Option<V>> {
    match config.get::<V>(key) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Settings {
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            render: self.render.merge(&overlay.render),
        }
    }

    /// Load settings with full layering.
    ///
    /// `local_dir` is the directory searched for `.treekin.toml`.
    pub fn load(local_dir: Option<&Path>) -> SettingsResult<Self> {
        Self::load_from(global_config_path().as_deref(), local_dir)
    }

    /// Like [`Settings::load`] with an explicit global config file.
    /// Missing files are skipped; unreadable or malformed ones are errors.
    #[instrument(level = "debug")]
    pub fn load_from(global: Option<&Path>, local_dir: Option<&Path>) -> SettingsResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!(path = %global_path.display(), "applying global settings");
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!(path = %local_path.display(), "applying local settings");
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        current.apply_env_overrides()
    }

    /// Environment variables have the highest precedence, e.g.
    /// `TREEKIN__RENDER__MAX_DEPTH=3`.
    fn apply_env_overrides(self) -> SettingsResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TREEKIN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let overlay = RawSettings {
            render: RawRenderSettings {
                focus_marker: lookup(&config, "render.focus_marker")?,
                max_depth: lookup(&config, "render.max_depth")?,
                show_location: lookup(&config, "render.show_location")?,
            },
        };
        Ok(self.merge_with(&overlay))
    }

    pub fn to_toml(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Commented template for a new config file.
    pub fn template() -> String {
        r#"# treekin configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treekin/treekin.toml
#   Local:  <dir>/.treekin.toml
#   Env:    TREEKIN__RENDER__* environment variables

[render]
# Prefix of the focused node's label
# focus_marker = "> "

# Levels below the root to draw (unset: draw everything)
# max_depth = 3

# Append the focus address (child indices from the root) to its label
# show_location = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.render.focus_marker, "> ");
        assert_eq!(settings.render.max_depth, None);
        assert!(!settings.render.show_location);
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let base = Settings::default();
        let overlay: RawSettings = toml::from_str("[render]\nmax_depth = 2\n").unwrap();
        let merged = base.merge_with(&overlay);
        assert_eq!(merged.render.max_depth, Some(2));
        assert_eq!(merged.render.focus_marker, "> ");
    }

    #[test]
    fn test_template_parses() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.render.focus_marker.is_none());
    }

    #[test]
    fn test_to_toml_round_trip() {
        let mut settings = Settings::default();
        settings.render.show_location = true;
        let text = settings.to_toml().unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_local_config_path() {
        assert_eq!(
            local_config_path(Path::new("/work")),
            PathBuf::from("/work/.treekin.toml")
        );
    }
}
