//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Variable timestep, fully applied each frame
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod pool;
pub mod state;
pub mod tick;

pub use camera::{Camera, PlayArea};
pub use collision::{Rect, Side, collide, rand_rect_inside, rects_overlap};
pub use pool::EntityPool;
pub use state::{Ball, Brick, GameState, Paddle, Particle, Rgba, TextureId};
pub use tick::{FrameInput, tick};
