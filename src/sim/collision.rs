//! Rectangle overlap and side-of-impact classification.
//!
//! Everything in the world is an axis-aligned rectangle, top-left anchored
//! in a y-up space: `pos` is the top-left corner and the bottom edge sits
//! at `pos.y - size.y`.

use glam::DVec2;

use crate::rng::GameRng;

/// Axis-aligned rectangle, top-left anchored, y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(pos: DVec2, size: DVec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    /// Bottom edge; y is up, so this lies below `pos.y`.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y - self.size.y
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            self.pos.x + self.size.x * 0.5,
            self.pos.y - self.size.y * 0.5,
        )
    }
}

/// Which face of the first rectangle the second one struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Strict overlap test: projections must overlap on both axes, edge
/// contact does not count.
#[inline]
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y > b.bottom() && a.bottom() < b.pos.y
}

/// Classify which face of `a` was struck by `b`, or `None` when the two
/// do not touch.
///
/// The tricky part: a corner overlap is ambiguous, so the center deltas are
/// scaled by the combined half-extents and compared. Exact ties resolve to
/// `Bottom` over `Right` and `Left` over `Top`.
pub fn collide(a: Rect, b: Rect) -> Option<Side> {
    let half_w = 0.5 * (a.size.x + b.size.x);
    let half_h = 0.5 * (a.size.y + b.size.y);

    let delta = a.center() - b.center();
    if delta.x.abs() > half_w || delta.y.abs() > half_h {
        return None;
    }

    let wy = half_w * delta.y;
    let hx = half_h * delta.x;

    let side = if wy >= hx {
        if wy > -hx { Side::Bottom } else { Side::Right }
    } else if wy >= -hx {
        Side::Left
    } else {
        Side::Top
    };
    Some(side)
}

/// Random rectangle fully inside `parent`, each side spanning 5% to 95%
/// of the parent's.
pub fn rand_rect_inside(rng: &mut GameRng, parent: Rect) -> Rect {
    let size = DVec2::new(
        rng.range(parent.size.x * 0.05, parent.size.x * 0.95),
        rng.range(parent.size.y * 0.05, parent.size.y * 0.95),
    );
    let pos = DVec2::new(
        rng.range(parent.pos.x, parent.right() - size.x),
        rng.range(parent.bottom() + size.y, parent.pos.y),
    );
    Rect::new(pos, size)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(DVec2::new(x, y), DVec2::new(w, h))
    }

    #[test]
    fn test_rects_overlap() {
        let a = rect(0.0, 10.0, 10.0, 10.0);
        assert!(rects_overlap(a, rect(5.0, 15.0, 10.0, 10.0)));
        assert!(rects_overlap(a, rect(2.0, 8.0, 2.0, 2.0)));

        // Separated on x, then on y.
        assert!(!rects_overlap(a, rect(20.0, 10.0, 10.0, 10.0)));
        assert!(!rects_overlap(a, rect(0.0, 40.0, 10.0, 10.0)));

        // Edge contact is not overlap.
        assert!(!rects_overlap(a, rect(10.0, 10.0, 10.0, 10.0)));
        assert!(!rects_overlap(a, rect(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_collide_classifies_each_side() {
        // Unit-ish square centered at (1, 1).
        let a = rect(0.0, 2.0, 2.0, 2.0);

        // b overlapping from above strikes the top, and so on around.
        assert_eq!(collide(a, rect(0.5, 2.8, 1.0, 1.0)), Some(Side::Top));
        assert_eq!(collide(a, rect(0.5, 0.2, 1.0, 1.0)), Some(Side::Bottom));
        assert_eq!(collide(a, rect(1.8, 1.5, 1.0, 1.0)), Some(Side::Right));
        assert_eq!(collide(a, rect(-0.8, 1.5, 1.0, 1.0)), Some(Side::Left));
    }

    #[test]
    fn test_collide_misses_when_apart() {
        let a = rect(0.0, 2.0, 2.0, 2.0);
        assert_eq!(collide(a, rect(10.0, 2.0, 2.0, 2.0)), None);
        assert_eq!(collide(a, rect(0.0, 20.0, 2.0, 2.0)), None);
    }

    #[test]
    fn test_collide_corner_tie_goes_to_bottom() {
        // Equal squares offset diagonally down-left by the same amount on
        // each axis: w*dy == h*dx exactly.
        let a = rect(0.0, 2.0, 2.0, 2.0);
        let b = rect(-0.5, 1.5, 2.0, 2.0);
        assert_eq!(collide(a, b), Some(Side::Bottom));
    }

    #[test]
    fn test_collide_corner_tie_goes_to_left() {
        // Mirrored diagonal: w*dy == -h*dx exactly.
        let a = rect(0.0, 2.0, 2.0, 2.0);
        let b = rect(-0.5, 2.5, 2.0, 2.0);
        assert_eq!(collide(a, b), Some(Side::Left));
    }

    #[test]
    fn test_rand_rect_inside_stays_inside() {
        let mut rng = GameRng::seed_from_u64(42);
        let parent = rect(-50.0, 30.0, 80.0, 60.0);
        for _ in 0..200 {
            let r = rand_rect_inside(&mut rng, parent);
            assert!(r.pos.x >= parent.pos.x);
            assert!(r.right() <= parent.right());
            assert!(r.pos.y <= parent.pos.y);
            assert!(r.bottom() >= parent.bottom());
            assert!(r.size.x > 0.0 && r.size.y > 0.0);
        }
    }

    proptest! {
        /// Overlapping rectangles always classify to exactly one side.
        #[test]
        fn prop_overlap_always_classifies(
            ax in -100.0..100.0f64, ay in -100.0..100.0f64,
            aw in 0.1..50.0f64, ah in 0.1..50.0f64,
            bx in -100.0..100.0f64, by in -100.0..100.0f64,
            bw in 0.1..50.0f64, bh in 0.1..50.0f64,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            if rects_overlap(a, b) {
                prop_assert!(collide(a, b).is_some());
            }
        }

        /// The classifier touches iff the center deltas fit the combined
        /// half-extents (edge contact included).
        #[test]
        fn prop_collide_matches_extent_test(
            ax in -100.0..100.0f64, ay in -100.0..100.0f64,
            aw in 0.1..50.0f64, ah in 0.1..50.0f64,
            bx in -100.0..100.0f64, by in -100.0..100.0f64,
            bw in 0.1..50.0f64, bh in 0.1..50.0f64,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            let delta = a.center() - b.center();
            let touches = delta.x.abs() <= 0.5 * (aw + bw) && delta.y.abs() <= 0.5 * (ah + bh);
            prop_assert_eq!(collide(a, b).is_some(), touches);
        }
    }
}
