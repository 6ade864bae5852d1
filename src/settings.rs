//! Host settings and preferences
//!
//! Persisted as a small JSON file next to the game. The simulation never
//! reads these; they shape how the host presents it.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Host preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Particle effects on/off
    pub particles: bool,
    /// Cap on rendered particles (the sim keeps its own hard cap)
    pub max_particles: usize,
    /// Screen shake on impacts
    pub screen_shake: bool,
    /// Reduced motion (minimize shake and flashes)
    pub reduced_motion: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particles: true,
            max_particles: 256,
            screen_shake: true,
            reduced_motion: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective particle count cap
    pub fn effective_max_particles(&self) -> usize {
        if self.particles { self.max_particles } else { 0 }
    }

    /// Load settings from a JSON file, falling back to defaults on any
    /// failure (missing file, bad JSON). Never an error.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as JSON. Failures are logged, not propagated.
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("failed to save settings: {err}");
                } else {
                    log::info!("settings saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.particles);
        assert!(s.effective_screen_shake());
        assert_eq!(s.effective_max_particles(), 256);
    }

    #[test]
    fn test_reduced_motion_overrides_shake() {
        let s = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert!(!s.effective_screen_shake());
    }

    #[test]
    fn test_particles_off_zeroes_cap() {
        let s = Settings {
            particles: false,
            ..Settings::default()
        };
        assert_eq!(s.effective_max_particles(), 0);
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            show_fps: true,
            max_particles: 64,
            ..Settings::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.show_fps, s.show_fps);
        assert_eq!(back.max_particles, 64);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let s = Settings::load_from(Path::new("/nonexistent/paddy-run-settings.json"));
        assert_eq!(s.max_particles, Settings::default().max_particles);
    }
}
