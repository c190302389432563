use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Frontend presentation settings, persisted to
/// `~/.config/glance/settings.json`.
///
/// The `#[serde(default)]` on the struct ensures that any fields missing
/// from an existing settings file are filled in with their `Default`
/// values, making it safe to add new fields without breaking old files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background color of preview panels (`#hex`, `rgb()` or `rgba()`).
    pub preview_background: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview_background: glance_editor::preview::DEFAULT_BACKGROUND.to_string(),
        }
    }
}

fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glance")
        .join("settings.json")
}

pub fn load() -> Settings {
    let path = settings_path();
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => {
            // First run: write the defaults so the file is discoverable.
            let settings = Settings::default();
            save(&settings);
            settings
        }
    }
}

pub fn save(settings: &Settings) {
    let path = settings_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(json) = serde_json::to_string_pretty(settings) {
        let _ = std::fs::write(&path, json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(
            settings.preview_background,
            glance_editor::preview::DEFAULT_BACKGROUND
        );
    }

    #[test]
    fn round_trips_through_json() {
        let settings = Settings {
            preview_background: "#224466".to_string(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.preview_background, "#224466");
    }
}
