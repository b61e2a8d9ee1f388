//! Optional settings file, read once at startup.
//!
//! A `pocket_cube.toml` next to the executable's working directory can
//! override the defaults; missing file or fields fall back silently, a
//! malformed file logs a warning and falls back.

use bevy::prelude::*;
use serde::Deserialize;

use crate::utils::constants::game_constants::IDLE_SPIN_DEGREES_PER_SEC;

#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_PATH: &str = "pocket_cube.toml";

#[derive(Resource, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Settings {
    /// Window title.
    pub window_title: String,
    /// Spin the whole cube continuously instead of sitting still between
    /// face turns.
    pub idle_spin: bool,
    /// Idle spin speed in degrees per second.
    pub idle_spin_degrees_per_sec: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Pocket Cube".to_string(),
            idle_spin: false,
            idle_spin_degrees_per_sec: IDLE_SPIN_DEGREES_PER_SEC,
        }
    }
}

impl Settings {
    /// Loads settings from `pocket_cube.toml`, falling back to defaults.
    /// On wasm there is no filesystem, so defaults are always used.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(contents) = std::fs::read_to_string(SETTINGS_PATH) {
            match toml::from_str(&contents) {
                Ok(settings) => return settings,
                Err(error) => warn!("ignoring malformed {SETTINGS_PATH}: {error}"),
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_idle_spin_off() {
        let settings = Settings::default();
        assert!(!settings.idle_spin);
        assert_eq!(settings.window_title, "Pocket Cube");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let settings: Settings = toml::from_str("idle_spin = true").unwrap();
        assert!(settings.idle_spin);
        assert_eq!(
            settings.idle_spin_degrees_per_sec,
            IDLE_SPIN_DEGREES_PER_SEC
        );
    }
}
