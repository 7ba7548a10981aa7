//! Runtime capability flags
//!
//! Touch vs keyboard control and the debug panel are decided when the page
//! boots, not at compile time. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// How the player drives the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlScheme {
    /// Arrow keys only
    #[default]
    Keyboard,
    /// Arrow keys plus touch drag
    Touch,
}

impl ControlScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlScheme::Keyboard => "keyboard",
            ControlScheme::Touch => "touch",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keyboard" | "keys" => Some(ControlScheme::Keyboard),
            "touch" | "mobile" => Some(ControlScheme::Touch),
            _ => None,
        }
    }

    /// Title screen hint
    pub fn play_hint(&self) -> &'static str {
        match self {
            ControlScheme::Keyboard => "press [<] and [>] to play",
            ControlScheme::Touch => "drag the paddle to play",
        }
    }

    /// Game over hint
    pub fn replay_hint(&self) -> &'static str {
        match self {
            ControlScheme::Keyboard => "press [space] to play again",
            ControlScheme::Touch => "tap to play again",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub control: ControlScheme,
    /// Show the JSON state dump next to the playfield
    pub show_debug: bool,
    /// Tone volume (0.0 - 1.0)
    pub volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_control(ControlScheme::Keyboard)
    }
}

impl Settings {
    /// Defaults for a control scheme; the debug panel is desktop-only
    pub fn for_control(control: ControlScheme) -> Self {
        Self {
            control,
            show_debug: control == ControlScheme::Keyboard,
            volume: 0.8,
            muted: false,
        }
    }

    /// Set volume (0.0 - 1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Playback volume; zero when muted
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Apply `key=value` overrides from a URL query string
    /// (`?control=touch&debug=0&mute=1`)
    pub fn apply_query(&mut self, query: &str) {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "1")));

        for (key, value) in pairs {
            let on = !matches!(value, "0" | "false" | "off");
            match key {
                "control" => {
                    if let Some(control) = ControlScheme::from_str(value) {
                        self.control = control;
                    }
                }
                "debug" => self.show_debug = on,
                "mute" => self.muted = on,
                "volume" => {
                    if let Ok(volume) = value.parse::<f32>() {
                        self.set_volume(volume);
                    }
                }
                _ => log::debug!("Ignoring unknown setting {key}"),
            }
        }
    }

    /// Detect touch support and read URL overrides (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let control = if window.navigator().max_touch_points() > 0 {
            ControlScheme::Touch
        } else {
            ControlScheme::Keyboard
        };
        let mut settings = Self::for_control(control);

        if let Ok(query) = window.location().search() {
            settings.apply_query(&query);
        }

        log::info!(
            "Control scheme: {}, debug panel: {}",
            settings.control.as_str(),
            settings.show_debug
        );
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_scheme() {
        let desktop = Settings::default();
        assert_eq!(desktop.control, ControlScheme::Keyboard);
        assert!(desktop.show_debug);

        let mobile = Settings::for_control(ControlScheme::Touch);
        assert!(!mobile.show_debug);
    }

    #[test]
    fn test_query_overrides() {
        let mut settings = Settings::default();
        settings.apply_query("?control=touch&debug=0&volume=2.5&mute");
        assert_eq!(settings.control, ControlScheme::Touch);
        assert!(!settings.show_debug);
        assert_eq!(settings.volume, 1.0);
        assert!(settings.muted);
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_effective_volume() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_volume(), 0.8);
        settings.apply_query("volume=0.25");
        assert_eq!(settings.effective_volume(), 0.25);
        settings.apply_query("mute=1");
        assert_eq!(settings.effective_volume(), 0.0);
        settings.apply_query("mute=off");
        assert_eq!(settings.effective_volume(), 0.25);
    }

    #[test]
    fn test_query_ignores_garbage() {
        let mut settings = Settings::default();
        settings.apply_query("?control=joystick&&volume=loud&x=y");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_scheme_parsing() {
        assert_eq!(ControlScheme::from_str("Touch"), Some(ControlScheme::Touch));
        assert_eq!(ControlScheme::from_str("keys"), Some(ControlScheme::Keyboard));
        assert_eq!(ControlScheme::from_str("mouse"), None);
        assert_eq!(ControlScheme::Touch.as_str(), "touch");
    }
}
