//! Game state and core entity types.
//!
//! Everything the simulation mutates lives here. The state never touches a
//! renderer or the OS clock; texture handles are opaque tokens owned by the
//! host.

use glam::DVec2;

use super::camera::{Camera, PlayArea};
use super::collision::Rect;
use super::pool::EntityPool;
use crate::consts::*;
use crate::rng::GameRng;
use crate::tuning::Tuning;

/// Non-owning handle to a host-owned texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A ball in flight. Removed when it falls below the play area.
#[derive(Debug, Clone)]
pub struct Ball {
    /// Top-left corner, y up.
    pub pos: DVec2,
    /// World units per nanosecond.
    pub vel: DVec2,
    pub size: DVec2,
    /// Shared with every other ball.
    pub tex: TextureId,
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// The player's paddle. Never destroyed; input slides it horizontally.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: DVec2,
    pub size: DVec2,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A destroyable brick showing a scrolling window into a shared texture.
#[derive(Debug, Clone)]
pub struct Brick {
    pub pos: DVec2,
    pub size: DVec2,
    /// One entry of the shared texture pool; the brick never releases it.
    pub inner_tex: TextureId,
    /// Scroll offset into the texture, each axis wrapped into [0, 1].
    pub scroll: DVec2,
    /// Scroll advance per nanosecond.
    pub scroll_speed: DVec2,
    /// Crop window in texture pixels, aspect-matched to the brick.
    pub crop_w: i32,
    pub crop_h: i32,
}

impl Brick {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A burst fragment. The color is fixed at spawn and never fades; expiry
/// is strictly by age.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: DVec2,
    pub lifetime_ns: u64,
    pub age_ns: u64,
    pub color: Rgba,
}

impl Particle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Complete simulation state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub balls: EntityPool<Ball>,
    pub bricks: EntityPool<Brick>,
    pub particles: EntityPool<Particle>,
    /// Shared brick texture pool; outlives every brick borrowing from it.
    pub brick_texs: Vec<TextureId>,
    pub ball_tex: TextureId,
    pub paddle: Paddle,
    pub camera: Camera,
    pub play_area: PlayArea,
    /// True between `setup` and `desetup`.
    pub is_setup: bool,
    pub rng: GameRng,
    pub tuning: Tuning,
}

impl GameState {
    /// One-time construction. Call [`GameState::setup`] before the first
    /// frame; until then there are no entities.
    pub fn new(
        seed: u64,
        tuning: Tuning,
        mut brick_texs: Vec<TextureId>,
        ball_tex: TextureId,
    ) -> Self {
        assert!(!brick_texs.is_empty(), "brick texture pool must not be empty");
        brick_texs.truncate(BRICK_TEX_POOL_CAPACITY);

        Self {
            balls: EntityPool::with_capacity(BALLS_INITIAL_CAPACITY),
            bricks: EntityPool::with_capacity(BRICKS_INITIAL_CAPACITY),
            particles: EntityPool::with_capacity(PARTICLES_INITIAL_CAPACITY),
            brick_texs,
            ball_tex,
            paddle: Paddle {
                pos: PADDLE_POS,
                size: PADDLE_SIZE,
            },
            camera: Camera::new(VIEWPORT_SIZE, CAMERA_MASS, CAMERA_SPRING_CONSTANT),
            play_area: PlayArea {
                origin: PLAY_AREA_ORIGIN,
                size: PLAY_AREA_SIZE,
            },
            is_setup: false,
            rng: GameRng::seed_from_u64(seed),
            tuning,
        }
    }

    /// Round lost: every ball gone and the bursts have finished.
    pub fn is_dead(&self) -> bool {
        self.balls.is_empty() && self.particles.is_empty()
    }

    /// Round won: every brick gone and the bursts have finished.
    pub fn is_cleared(&self) -> bool {
        self.bricks.is_empty() && self.particles.is_empty()
    }

    /// Uniformly scale every live ball's velocity (speed up / slow down
    /// keys). Does not touch particles or the camera.
    pub fn scale_ball_velocities(&mut self, factor: f64) {
        for ball in self.balls.iter_mut() {
            ball.vel *= factor;
        }
    }

    /// (Re)build the level: recenter the camera, lay out a fresh brick
    /// grid, and serve one ball. Tears down the previous level first, so
    /// calling it mid-round is the "restart" operation.
    pub fn setup(&mut self) {
        if self.is_setup {
            self.desetup();
        }
        self.is_setup = true;

        self.bricks.clear();
        self.balls.clear();
        self.particles.clear();

        self.camera.snap_to(self.play_area.origin);

        // Brick dimensions are rolled once per level.
        let brick_size = DVec2::new(
            360.0 + self.rng.range(0.0, 50.0),
            170.0 + self.rng.range(0.0, 50.0),
        );
        let brick_margin = DVec2::new(10.0, 10.0);
        let stride = brick_size + 2.0 * brick_margin;

        // Rows fill the upper play area down to just below the middle.
        let max_y = self.play_area.origin.y + self.play_area.size.y * 0.45;
        let min_y = self.play_area.origin.y - self.play_area.size.y * 0.12 + brick_size.y;

        let max_x = self.play_area.origin.x + self.play_area.size.x * 0.45 - stride.x;
        let half_num_columns = (max_x / stride.x) as i32;

        let num_brick_texs = self.brick_texs.len() as i32;

        let mut y = max_y;
        while y > min_y {
            // Maybe skip a row
            if self.rng.unit() < self.tuning.row_skip_chance {
                y -= stride.y;
                continue;
            }

            let mut x = -((half_num_columns + 1) as f64) * stride.x;
            // +1.0 absorbs accumulated floating point error in the stride.
            let last_x = half_num_columns as f64 * stride.x + 1.0;
            while x <= last_x {
                let tex_index = self.rng.int_range(0, num_brick_texs - 1) as usize;
                let scroll = DVec2::new(self.rng.unit(), self.rng.unit());

                let crop_w = self.rng.int_range(200, 400);
                let crop_h = (f64::from(crop_w) * brick_size.y / brick_size.x) as i32;

                // Squaring the unit draws biases scroll toward slow; the
                // signed draw picks the direction.
                let scroll_speed = DVec2::new(
                    self.rng.unit() * self.rng.unit() * self.rng.range(-1.0, 1.0) * 0.0000000009,
                    self.rng.unit() * self.rng.unit() * self.rng.range(-1.0, 1.0) * 0.0000000009,
                );

                self.bricks.push(Brick {
                    pos: DVec2::new(x + brick_margin.x, y - brick_margin.y),
                    size: brick_size,
                    inner_tex: self.brick_texs[tex_index],
                    scroll,
                    scroll_speed,
                    crop_w,
                    crop_h,
                });

                x += stride.x;
            }

            y -= stride.y;
        }

        self.balls.push(Ball {
            pos: BALL_START_POS,
            vel: BALL_START_VEL,
            size: BALL_SIZE,
            tex: self.ball_tex,
        });
    }

    /// Tear down all entities. Until the next `setup` the state holds no
    /// balls, bricks, or particles.
    pub fn desetup(&mut self) {
        if !self.is_setup {
            return;
        }
        self.is_setup = false;

        self.bricks.clear();
        self.balls.clear();
        self.particles.clear();
    }
}
