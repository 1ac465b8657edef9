//! Data-driven game balance.
//!
//! Everything here is a feel knob rather than a structural constant. The
//! defaults are the shipped values; a JSON file can override any subset.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Viewport-center offset applied per wall or ceiling bounce (world units).
    pub bump_distance: f64,
    /// Downward acceleration on burst particles (world units per ns^2).
    pub particle_gravity: f64,
    /// Particles spawned when a ball falls out.
    pub ball_burst: u32,
    /// Particles spawned when a brick is destroyed.
    pub brick_burst: u32,
    /// Particle lifetime in nanoseconds.
    pub particle_lifetime_ns: u64,
    /// Fraction of the paddle's horizontal speed transferred to the ball on
    /// contact. Nonzero values launch the ball at absurd speeds, so this
    /// ships disabled.
    pub paddle_transfer_coeff: f64,
    /// Per-frame multiplicative decay of the camera spring velocity.
    pub camera_damping: f64,
    /// Chance that a generated brick row is skipped entirely.
    pub row_skip_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            bump_distance: 20.0,
            particle_gravity: 0.00000000000004,
            ball_burst: 400,
            brick_burst: 10,
            particle_lifetime_ns: 3_000_000_000,
            paddle_transfer_coeff: 0.0,
            camera_damping: 0.95,
            row_skip_chance: 0.3,
        }
    }
}

impl Tuning {
    /// Load from a JSON file, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::info!("No tuning file at {} ({err}), using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_values() {
        let tuning = Tuning::default();
        assert_eq!(tuning.bump_distance, 20.0);
        assert_eq!(tuning.ball_burst, 400);
        assert_eq!(tuning.brick_burst, 10);
        assert_eq!(tuning.particle_lifetime_ns, 3_000_000_000);
        assert_eq!(tuning.paddle_transfer_coeff, 0.0);
        assert_eq!(tuning.camera_damping, 0.95);
        assert_eq!(tuning.row_skip_chance, 0.3);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"ball_burst": 16}"#).unwrap();
        assert_eq!(tuning.ball_burst, 16);
        assert_eq!(tuning.brick_burst, Tuning::default().brick_burst);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let tuning = Tuning::load_or_default(Path::new("/nonexistent/tuning.json"));
        assert_eq!(tuning.ball_burst, Tuning::default().ball_burst);
    }

    #[test]
    fn test_roundtrip() {
        let tuning = Tuning {
            bump_distance: 35.0,
            ..Tuning::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bump_distance, 35.0);
    }
}
