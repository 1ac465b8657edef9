//! Camera viewport with spring recentering.
//!
//! Wall bounces shove the viewport center off the play-area origin; a
//! spring pulls it back over the following frames, which reads as screen
//! shake.

use glam::DVec2;

/// The fixed play field: center and dimensions in world units.
#[derive(Debug, Clone, Copy)]
pub struct PlayArea {
    pub origin: DVec2,
    pub size: DVec2,
}

impl PlayArea {
    #[inline]
    pub fn left(&self) -> f64 {
        self.origin.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.origin.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.origin.y + self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.origin.y - self.size.y / 2.0
    }
}

/// What the viewport shows, plus the spring that drags it back home.
#[derive(Debug, Clone)]
pub struct Camera {
    /// World coordinate at the center of the screen.
    pub center: DVec2,
    /// World-unit extent of what the screen shows.
    pub size: DVec2,
    pub mass: f64,
    pub spring_constant: f64,
    pub vel: DVec2,
}

impl Camera {
    pub fn new(size: DVec2, mass: f64, spring_constant: f64) -> Self {
        Self {
            center: DVec2::ZERO,
            size,
            mass,
            spring_constant,
            vel: DVec2::ZERO,
        }
    }

    /// Instantaneous positional shove; the spring sorts it out later.
    pub fn bump(&mut self, offset: DVec2) {
        self.center += offset;
    }

    /// Re-center on `origin` and kill any spring motion.
    pub fn snap_to(&mut self, origin: DVec2) {
        self.center = origin;
        self.vel = DVec2::ZERO;
    }

    /// One spring step toward `origin`.
    ///
    /// Runs per frame, not per nanosecond: velocity gains `-k*x/m`, the
    /// center integrates, then velocity decays by `damping`. The pull-back
    /// rate therefore depends on frame rate.
    pub fn spring_step(&mut self, origin: DVec2, damping: f64) {
        let accel = -self.spring_constant * (self.center - origin) / self.mass;
        self.vel += accel;
        self.center += self.vel;
        self.vel *= damping;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_offsets_center() {
        let mut camera = Camera::new(DVec2::new(3200.0, 4200.0), 1.0, 0.0001);
        camera.bump(DVec2::new(20.0, 0.0));
        camera.bump(DVec2::new(0.0, -20.0));
        assert_eq!(camera.center, DVec2::new(20.0, -20.0));
    }

    #[test]
    fn test_snap_recenters_and_stops() {
        let mut camera = Camera::new(DVec2::new(100.0, 100.0), 1.0, 0.0001);
        camera.bump(DVec2::new(50.0, 10.0));
        camera.spring_step(DVec2::ZERO, 0.95);
        assert!(camera.vel != DVec2::ZERO);

        camera.snap_to(DVec2::new(3.0, 4.0));
        assert_eq!(camera.center, DVec2::new(3.0, 4.0));
        assert_eq!(camera.vel, DVec2::ZERO);
    }

    #[test]
    fn test_spring_pulls_center_home_without_overshoot() {
        let mut camera = Camera::new(DVec2::new(100.0, 100.0), 1.0, 0.0001);
        camera.bump(DVec2::new(100.0, 0.0));

        // Heavily damped relative to the spring rate: the offset shrinks
        // every frame and never swings past the origin.
        let mut prev = camera.center.x;
        for _ in 0..10_000 {
            camera.spring_step(DVec2::ZERO, 0.95);
            assert!(camera.center.x >= 0.0, "overshot the origin");
            assert!(camera.center.x <= prev, "moved away from the origin");
            prev = camera.center.x;
        }
        assert!(camera.center.x < 0.001, "still {} away", camera.center.x);
    }

    #[test]
    fn test_spring_step_is_frame_rate_based() {
        // Two cameras, same shove: step counts alone decide the pull-back.
        let mut a = Camera::new(DVec2::new(100.0, 100.0), 1.0, 0.0001);
        let mut b = a.clone();
        a.bump(DVec2::new(40.0, 0.0));
        b.bump(DVec2::new(40.0, 0.0));

        a.spring_step(DVec2::ZERO, 0.95);
        b.spring_step(DVec2::ZERO, 0.95);
        assert_eq!(a.center, b.center);
    }
}
