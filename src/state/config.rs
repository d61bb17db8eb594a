use bevy::log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default margin for panel content (in virtual units, scaled by ui_scale)
pub const DEFAULT_PANEL_MARGIN: f32 = 8.0;

pub const MIN_UI_SCALE: f32 = 0.75;
pub const MAX_UI_SCALE: f32 = 2.0;

pub fn default_ui_scale() -> f32 {
    1.0
}

pub fn default_toast_seconds() -> f32 {
    3.0
}

pub const MIN_TOAST_SECONDS: f32 = 0.5;
pub const MAX_TOAST_SECONDS: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

/// App configuration stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_ui_scale")]
    pub ui_scale: f32,
    #[serde(default)]
    pub theme: ThemePreference,
    /// JSON catalog replacing the built-in dishes
    #[serde(default)]
    pub catalog_path: Option<String>,
    /// How long toasts stay on screen
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui_scale: default_ui_scale(),
            theme: ThemePreference::default(),
            catalog_path: None,
            toast_seconds: default_toast_seconds(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(|appdata| {
                PathBuf::from(appdata)
                    .join("RestaurantShowcase")
                    .join("config.json")
            })
        }
        #[cfg(not(target_os = "windows"))]
        {
            std::env::var("HOME").ok().map(|home| {
                PathBuf::from(home)
                    .join(".config")
                    .join("restaurant-showcase")
                    .join("config.json")
            })
        }
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(&path).ok())
            .map(|json| Self::from_json(&json))
            .unwrap_or_default()
    }

    /// Parse a config document, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<AppConfig>(json) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                warn!("ignoring malformed config: {}", e);
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.ui_scale = self.ui_scale.clamp(MIN_UI_SCALE, MAX_UI_SCALE);
        if self.toast_seconds.is_nan() || self.toast_seconds <= 0.0 {
            self.toast_seconds = default_toast_seconds();
        }
        self.toast_seconds = self.toast_seconds.clamp(MIN_TOAST_SECONDS, MAX_TOAST_SECONDS);
        self
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    /// Write the config to `path`, creating parent directories. Failures are
    /// logged; returns whether the file was written.
    fn save_to(&self, path: &Path) -> bool {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("failed to create config directory {}: {}", parent.display(), e);
                return false;
            }
        }
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize config: {}", e);
                return false;
            }
        };
        match fs::write(path, json) {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to write config {}: {}", path.display(), e);
                false
            }
        }
    }

    pub fn increase_ui_scale(&mut self) -> bool {
        self.set_ui_scale((self.ui_scale + 0.25).min(MAX_UI_SCALE))
    }

    pub fn decrease_ui_scale(&mut self) -> bool {
        self.set_ui_scale((self.ui_scale - 0.25).max(MIN_UI_SCALE))
    }

    pub fn reset_ui_scale(&mut self) -> bool {
        self.set_ui_scale(default_ui_scale())
    }

    /// Returns true when the value changed
    fn set_ui_scale(&mut self, scale: f32) -> bool {
        if scale == self.ui_scale {
            return false;
        }
        self.ui_scale = scale;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let config = AppConfig::from_json("{}");
        assert_eq!(config.ui_scale, 1.0);
        assert_eq!(config.theme, ThemePreference::Light);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.toast_seconds, 3.0);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let config = AppConfig::from_json("ui_scale = 3");
        assert_eq!(config.ui_scale, 1.0);
    }

    #[test]
    fn test_values_are_sanitized() {
        let config = AppConfig::from_json(
            r#"{ "ui_scale": 9.0, "theme": "dark", "toast_seconds": -1.0, "catalog_path": "/tmp/menu.json" }"#,
        );
        assert_eq!(config.ui_scale, MAX_UI_SCALE);
        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(config.toast_seconds, 3.0);
        assert_eq!(config.catalog_path.as_deref(), Some("/tmp/menu.json"));
    }

    #[test]
    fn test_toast_seconds_clamped() {
        let config = AppConfig::from_json(r#"{ "toast_seconds": 1e20 }"#);
        assert_eq!(config.toast_seconds, MAX_TOAST_SECONDS);
        let config = AppConfig::from_json(r#"{ "toast_seconds": 0.01 }"#);
        assert_eq!(config.toast_seconds, MIN_TOAST_SECONDS);
    }

    #[test]
    fn test_save_to_round_trip_and_unwritable_dir() {
        let dir = std::env::temp_dir().join(format!("restaurant-showcase-{}", std::process::id()));
        let path = dir.join("nested").join("config.json");
        let config = AppConfig {
            theme: ThemePreference::Dark,
            ..AppConfig::default()
        };
        assert!(config.save_to(&path));
        let saved = AppConfig::from_json(&fs::read_to_string(&path).unwrap());
        assert_eq!(saved.theme, ThemePreference::Dark);

        // A regular file where a directory is needed
        let blocked = path.join("config.json");
        assert!(!config.save_to(&blocked));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_ui_scale_steps() {
        let mut config = AppConfig::default();
        assert!(config.increase_ui_scale());
        assert_eq!(config.ui_scale, 1.25);
        for _ in 0..10 {
            config.increase_ui_scale();
        }
        assert!(!config.increase_ui_scale());
        assert_eq!(config.ui_scale, MAX_UI_SCALE);
        assert!(config.reset_ui_scale());
        assert!(!config.reset_ui_scale());
        config.decrease_ui_scale();
        assert!(!config.decrease_ui_scale());
        assert_eq!(config.ui_scale, MIN_UI_SCALE);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    }
}
