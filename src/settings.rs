//! Demo settings
//!
//! Persisted as JSON in LocalStorage. Missing fields fall back to the
//! built-in defaults, so a partial object is a valid override.

use serde::{Deserialize, Serialize};

use crate::consts::{RECT_A, RECT_B};
use crate::renderer::Palette;
use crate::sim::{BounceTuning, Rect, RippleTuning};

/// Demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Starting geometry of rectangle A
    pub rect_a: Rect,
    /// Starting geometry of rectangle B
    pub rect_b: Rect,

    // === Animation ===
    pub bounce: BounceTuning,
    pub ripple: RippleTuning,

    // === Colors ===
    pub palette: Palette,

    /// Console log level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rect_a: Rect::from_array(RECT_A),
            rect_b: Rect::from_array(RECT_B),
            bounce: BounceTuning::default(),
            ripple: RippleTuning::default(),
            palette: Palette::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bounce_rects_settings";

    /// Parse settings from JSON, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Configured log level, `Info` when unrecognized
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Max level filter for `log::set_max_level`
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level().to_level_filter()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let s = Settings::default();
        assert_eq!(s.rect_a, Rect::new(10.0, 10.0, 50.0, 50.0));
        assert_eq!(s.rect_b, Rect::new(60.0, 100.0, 160.0, 220.0));
        assert_eq!(s.bounce.grab_ticks, 27);
        assert_eq!(s.ripple.start_radius, 40.0);
        assert_eq!(s.log_level(), log::Level::Info);
    }

    #[test]
    fn test_partial_json_override() {
        let s = Settings::from_json(
            r#"{"rect_a": {"x": 1, "y": 2, "width": 3, "height": 4}, "log_level": "debug"}"#,
        );
        assert_eq!(s.rect_a, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(s.rect_b, Settings::default().rect_b);
        assert_eq!(s.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_malformed_json_uses_defaults() {
        assert_eq!(Settings::from_json("{not json"), Settings::default());
    }

    #[test]
    fn test_log_filter_follows_level() {
        let s = Settings {
            log_level: "warn".to_string(),
            ..Default::default()
        };
        assert_eq!(s.log_filter(), log::LevelFilter::Warn);
        assert_eq!(Settings::default().log_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_load_is_read_only_default_natively() {
        assert_eq!(Settings::load(), Settings::default());
    }

    #[test]
    fn test_unknown_log_level() {
        let s = Settings {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(s.log_level(), log::Level::Info);
    }
}
