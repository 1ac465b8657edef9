//! Break Bricks - a brick-breaker simulation core
//!
//! Core modules:
//! - `sim`: simulation (entities, physics, collisions, camera spring)
//! - `render`: world-to-screen mapping and the drawing seam
//! - `platform`: monotonic nanosecond clock
//! - `rng`: seeded uniform random source
//! - `tuning`: data-driven game balance

pub mod platform;
pub mod render;
pub mod rng;
pub mod sim;
pub mod tuning;

pub use rng::GameRng;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::DVec2;

    /// Entity store starting capacities; each doubles when full
    pub const BALLS_INITIAL_CAPACITY: usize = 64;
    pub const BRICKS_INITIAL_CAPACITY: usize = 128;
    pub const PARTICLES_INITIAL_CAPACITY: usize = 16384;
    /// At most this many shared brick textures are kept
    pub const BRICK_TEX_POOL_CAPACITY: usize = 10;

    /// Play area (world units, centered on the origin)
    pub const PLAY_AREA_ORIGIN: DVec2 = DVec2::new(0.0, 0.0);
    pub const PLAY_AREA_SIZE: DVec2 = DVec2::new(3000.0, 4000.0);

    /// Camera viewport, slightly larger than the play area
    pub const VIEWPORT_SIZE: DVec2 = DVec2::new(3200.0, 4200.0);
    pub const CAMERA_MASS: f64 = 1.0;
    pub const CAMERA_SPRING_CONSTANT: f64 = 0.0001;

    /// Paddle placement (top-left corner, y up) and size
    pub const PADDLE_POS: DVec2 = DVec2::new(-300.0, -1700.0);
    pub const PADDLE_SIZE: DVec2 = DVec2::new(600.0, 100.0);

    /// Ball spawn state; velocity is world units per nanosecond
    pub const BALL_START_POS: DVec2 = DVec2::new(0.0, -1300.0);
    pub const BALL_START_VEL: DVec2 = DVec2::new(0.000002, 0.000003);
    pub const BALL_SIZE: DVec2 = DVec2::new(137.9257, 300.0);
}

/// Wrap a value into [0, 1]: values above one keep their fractional part,
/// negatives are shifted up by whole steps. Exactly 1.0 stays 1.0.
#[inline]
pub fn wrap_unit(mut value: f64) -> f64 {
    if value > 1.0 {
        return value % 1.0;
    }
    while value < 0.0 {
        value += 1.0;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_unit_in_range_unchanged() {
        assert_eq!(wrap_unit(0.0), 0.0);
        assert_eq!(wrap_unit(0.5), 0.5);
        assert_eq!(wrap_unit(1.0), 1.0);
    }

    #[test]
    fn test_wrap_unit_above_one_takes_fraction() {
        assert_eq!(wrap_unit(1.25), 0.25);
        assert_eq!(wrap_unit(2.5), 0.5);
    }

    #[test]
    fn test_wrap_unit_negative_shifts_up() {
        assert_eq!(wrap_unit(-0.25), 0.75);
        assert_eq!(wrap_unit(-2.25), 0.75);
    }
}
