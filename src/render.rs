//! Backend-agnostic frame drawing.
//!
//! The simulation knows nothing about pixels; this module is the bridge.
//! A host implements [`RenderBackend`] over whatever actually blits, and
//! [`draw_frame`] walks the state and emits one frame of draw calls in
//! back-to-front order.
//!
//! World space is y-up with rectangle positions at the top-left corner.
//! Screen space is y-down. The y mapping lands world rows on screen rows
//! 1..=px_h rather than 0..px_h; the off-by-one cancels out as long as
//! every draw goes through the same mapping.

use glam::DVec2;

use crate::sim::state::{GameState, Rgba, TextureId};

/// Solid fill behind everything.
pub const BACKGROUND_COLOR: Rgba = Rgba::new(27, 60, 20, 255);
/// The playable field.
pub const PLAY_AREA_COLOR: Rgba = Rgba::new(55, 120, 40, 255);
/// Painted under each brick; only the border survives the inner blit.
pub const BRICK_BORDER_COLOR: Rgba = Rgba::new(255, 255, 0, 255);
pub const PADDLE_COLOR: Rgba = Rgba::new(255, 255, 255, 255);

/// Brick border thickness in screen pixels, camera-independent.
pub const BRICK_BORDER_PX: i32 = 4;

/// Axis-aligned rectangle in screen pixels, y down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PxRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Drawing operations the host must provide.
///
/// Textures stay host-owned; the simulation only ever passes back the
/// [`TextureId`]s it was constructed with.
pub trait RenderBackend {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: PxRect, color: Rgba);
    /// Copy `src` (or the whole texture when `None`) into `dst`, scaling.
    fn blit(&mut self, tex: TextureId, src: Option<PxRect>, dst: PxRect);
    /// Full pixel dimensions of `tex`.
    fn texture_size(&self, tex: TextureId) -> (i32, i32);
}

/// Map a world x coordinate to a screen column.
pub fn x_world_to_screen(val: f64, center_x: f64, viewport_w: f64, px_w: i32) -> i32 {
    let left = center_x - viewport_w / 2.0;
    ((val - left) / viewport_w * f64::from(px_w - 1)).round() as i32
}

/// Map a world y coordinate to a screen row, flipping the axis.
pub fn y_world_to_screen(val: f64, center_y: f64, viewport_h: f64, px_h: i32) -> i32 {
    let bottom = center_y - viewport_h / 2.0;
    ((val - bottom) / viewport_h * -f64::from(px_h - 1)).round() as i32 + px_h
}

/// Map a screen column back to a world x coordinate. Used for pointer
/// input, so it has no y counterpart.
pub fn x_screen_to_world(screen_x: i32, center_x: f64, viewport_w: f64, px_w: i32) -> f64 {
    f64::from(screen_x) / f64::from(px_w - 1) * viewport_w + center_x - viewport_w / 2.0
}

/// Map a world-space length to a pixel count.
pub fn length_to_screen(length: f64, viewport_len: f64, px: i32) -> i32 {
    (length * f64::from(px) / viewport_len).round() as i32
}

/// Map a world rectangle (top-left anchored, y up) to screen pixels.
fn world_rect(
    center: DVec2,
    view: DVec2,
    surface_px: (i32, i32),
    pos: DVec2,
    size: DVec2,
) -> PxRect {
    PxRect {
        x: x_world_to_screen(pos.x, center.x, view.x, surface_px.0),
        y: y_world_to_screen(pos.y, center.y, view.y, surface_px.1),
        w: length_to_screen(size.x, view.x, surface_px.0),
        h: length_to_screen(size.y, view.y, surface_px.1),
    }
}

/// Fill a world rectangle through the camera of `state`.
pub fn fill_rect_world(
    backend: &mut impl RenderBackend,
    state: &GameState,
    surface_px: (i32, i32),
    pos: DVec2,
    size: DVec2,
    color: Rgba,
) {
    let rect = world_rect(state.camera.center, state.camera.size, surface_px, pos, size);
    backend.fill_rect(rect, color);
}

/// Draw one complete frame: background, play area, bricks, balls, paddle,
/// then particles on top of everything.
pub fn draw_frame(state: &GameState, surface_px: (i32, i32), backend: &mut impl RenderBackend) {
    let center = state.camera.center;
    let view = state.camera.size;

    backend.clear(BACKGROUND_COLOR);

    let field_pos = DVec2::new(state.play_area.left(), state.play_area.top());
    backend.fill_rect(
        world_rect(center, view, surface_px, field_pos, state.play_area.size),
        PLAY_AREA_COLOR,
    );

    for brick in &state.bricks {
        let outer = world_rect(center, view, surface_px, brick.pos, brick.size);
        backend.fill_rect(outer, BRICK_BORDER_COLOR);

        let inner = PxRect {
            x: outer.x + BRICK_BORDER_PX,
            y: outer.y + BRICK_BORDER_PX,
            w: outer.w - 2 * BRICK_BORDER_PX,
            h: outer.h - 2 * BRICK_BORDER_PX,
        };

        // The crop window slides across the slack between the texture and
        // the window itself, so scroll 1.0 lines up with the far edge.
        let (tex_w, tex_h) = backend.texture_size(brick.inner_tex);
        let src = PxRect {
            x: (brick.scroll.x * f64::from(tex_w - brick.crop_w)) as i32,
            y: (brick.scroll.y * f64::from(tex_h - brick.crop_h)) as i32,
            w: brick.crop_w,
            h: brick.crop_h,
        };

        backend.blit(brick.inner_tex, Some(src), inner);
    }

    for ball in &state.balls {
        let dst = world_rect(center, view, surface_px, ball.pos, ball.size);
        backend.blit(ball.tex, None, dst);
    }

    backend.fill_rect(
        world_rect(center, view, surface_px, state.paddle.pos, state.paddle.size),
        PADDLE_COLOR,
    );

    for particle in &state.particles {
        backend.fill_rect(
            world_rect(center, view, surface_px, particle.pos, particle.size),
            particle.color,
        );
    }
}
