//! Per-frame simulation update.
//!
//! One `tick` fully applies a frame: paddle input, particle aging, ball
//! integration and collision response, the camera spring, then brick
//! texture scroll. Each stage completes before the next starts. The
//! timestep is whatever the clock measured; there is no sub-stepping, so a
//! stalled frame applies its whole delta at once and a fast ball can cross
//! a thin obstacle.

use glam::DVec2;

use super::collision::{Rect, Side, collide, rand_rect_inside};
use super::pool::EntityPool;
use super::state::{GameState, Particle, Rgba};
use crate::rng::GameRng;
use crate::tuning::Tuning;
use crate::wrap_unit;

/// Host-sourced input for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// New paddle left edge, already clamped to the play area by the host.
    pub paddle_x: Option<f64>,
}

/// Advance the simulation by `dt_ns` nanoseconds.
pub fn tick(state: &mut GameState, input: &FrameInput, dt_ns: u64) {
    if dt_ns == 0 {
        // A zero delta would turn the paddle-speed term into NaN.
        return;
    }
    let dt = dt_ns as f64;

    // Paddle moves first so collision below sees the new position.
    let mut paddle_dx = 0.0;
    if let Some(x) = input.paddle_x {
        paddle_dx = x - state.paddle.pos.x;
        state.paddle.pos.x = x;
    }

    update_particles(state, dt_ns, dt);
    update_balls(state, dt, paddle_dx);

    state
        .camera
        .spring_step(state.play_area.origin, state.tuning.camera_damping);

    scroll_brick_textures(state, dt);
}

/// Age, expire, and integrate burst particles.
fn update_particles(state: &mut GameState, dt_ns: u64, dt: f64) {
    let gravity = state.tuning.particle_gravity;

    let mut i = 0;
    while i < state.particles.len() {
        let particle = &mut state.particles[i];
        particle.age_ns += dt_ns;

        if particle.age_ns > particle.lifetime_ns {
            // Swap-remove pulls the last particle into this slot, so the
            // same index gets re-checked next pass.
            state.particles.remove(i);
            continue;
        }

        particle.vel.y -= gravity * dt;
        particle.pos += particle.vel * dt;
        i += 1;
    }
}

/// Integrate balls and resolve wall, floor, paddle, and brick contacts.
fn update_balls(state: &mut GameState, dt: f64, paddle_dx: f64) {
    let bump = state.tuning.bump_distance;

    let left = state.play_area.left();
    let right = state.play_area.right();
    let top = state.play_area.top();
    let bottom = state.play_area.bottom();

    let mut i = 0;
    while i < state.balls.len() {
        let ball = &mut state.balls[i];

        ball.pos += ball.vel * dt;

        // Edge snapshots from the integrated position, before any clamping:
        // a huge step can trip more than one boundary in the same frame.
        let ball_right = ball.pos.x + ball.size.x;
        let ball_bottom = ball.pos.y - ball.size.y;

        // Bounce off the walls and the ceiling, shoving the camera away
        // from the struck edge each time.
        if ball.pos.x < left {
            ball.pos.x = left;
            ball.vel.x = -ball.vel.x;
            state.camera.bump(DVec2::new(bump, 0.0));
        }

        if ball_right > right {
            ball.pos.x = right - ball.size.x;
            ball.vel.x = -ball.vel.x;
            state.camera.bump(DVec2::new(-bump, 0.0));
        }

        if ball.pos.y > top {
            ball.pos.y = top;
            ball.vel.y = -ball.vel.y;
            state.camera.bump(DVec2::new(0.0, -bump));
        }

        // The floor does not bounce. The ball dies in a shower of confetti.
        let mut remove_ball = false;
        if ball_bottom < bottom {
            remove_ball = true;
            let source = ball.rect();
            spawn_ball_burst(&mut state.particles, &mut state.rng, &state.tuning, source);
        }

        if !remove_ball {
            match collide(state.paddle.rect(), ball.rect()) {
                Some(side) => {
                    let diff_x = paddle_dx / dt * state.tuning.paddle_transfer_coeff;
                    match side {
                        Side::Top => {
                            ball.pos.y = state.paddle.pos.y + ball.size.y;
                            ball.vel.y = -ball.vel.y;
                            ball.vel.x += diff_x;
                        }
                        Side::Left => {
                            ball.pos.x = state.paddle.pos.x - ball.size.x;
                            ball.vel.x = -ball.vel.x + diff_x;
                        }
                        Side::Right => {
                            ball.pos.x = state.paddle.pos.x + state.paddle.size.x;
                            ball.vel.x = -ball.vel.x + diff_x;
                        }
                        // Coming up through the paddle's underside gets no
                        // response, but still suppresses brick checks.
                        Side::Bottom => {}
                    }
                }
                None => {
                    // First brick hit wins; the rest wait for later frames.
                    for b in 0..state.bricks.len() {
                        let Some(side) = collide(state.bricks[b].rect(), ball.rect()) else {
                            continue;
                        };

                        match side {
                            Side::Top => {
                                ball.pos.y = state.bricks[b].pos.y + ball.size.y;
                                ball.vel.y = -ball.vel.y;
                            }
                            Side::Bottom => {
                                ball.pos.y = state.bricks[b].pos.y - state.bricks[b].size.y;
                                ball.vel.y = -ball.vel.y;
                            }
                            Side::Left => {
                                ball.pos.x = state.bricks[b].pos.x - ball.size.x;
                                ball.vel.x = -ball.vel.x;
                            }
                            Side::Right => {
                                ball.pos.x = state.bricks[b].pos.x + state.bricks[b].size.x;
                                ball.vel.x = -ball.vel.x;
                            }
                        }

                        // Fragments carry most of the ball's speed, flipped
                        // back on the struck axis since the reflection above
                        // already mirrored it.
                        let mut base_vel = ball.vel * 0.7;
                        match side {
                            Side::Left | Side::Right => base_vel.x = -base_vel.x,
                            Side::Top | Side::Bottom => base_vel.y = -base_vel.y,
                        }

                        let source = state.bricks[b].rect();
                        spawn_brick_burst(
                            &mut state.particles,
                            &mut state.rng,
                            &state.tuning,
                            source,
                            base_vel,
                        );

                        state.bricks.remove(b);
                        break;
                    }
                }
            }
        }

        if remove_ball {
            state.balls.remove(i);
            continue;
        }
        i += 1;
    }
}

/// Confetti burst filling a dying ball's rectangle: slight sideways
/// spread, always some upward kick.
fn spawn_ball_burst(
    particles: &mut EntityPool<Particle>,
    rng: &mut GameRng,
    tuning: &Tuning,
    source: Rect,
) {
    for _ in 0..tuning.ball_burst {
        let rect = rand_rect_inside(rng, source);
        let vel = DVec2::new(
            rng.range(-0.000008, 0.000008),
            rng.range(0.000008, 0.000020),
        );
        particles.push(Particle {
            pos: rect.pos,
            vel,
            size: rect.size,
            lifetime_ns: tuning.particle_lifetime_ns,
            age_ns: 0,
            color: Rgba::new(rng.channel(), rng.channel(), rng.channel(), rng.channel()),
        });
    }
}

/// Fragment burst filling a destroyed brick's rectangle, drifting along
/// `base_vel` with per-fragment jitter.
fn spawn_brick_burst(
    particles: &mut EntityPool<Particle>,
    rng: &mut GameRng,
    tuning: &Tuning,
    source: Rect,
    base_vel: DVec2,
) {
    for _ in 0..tuning.brick_burst {
        let rect = rand_rect_inside(rng, source);
        let vel = DVec2::new(
            base_vel.x + rng.range(-0.0000012, 0.0000012),
            base_vel.y + rng.range(-0.0000008, 0.0000016),
        );
        particles.push(Particle {
            pos: rect.pos,
            vel,
            size: rect.size,
            lifetime_ns: tuning.particle_lifetime_ns,
            age_ns: 0,
            color: Rgba::new(rng.channel(), rng.channel(), rng.channel(), rng.channel()),
        });
    }
}

/// Advance each brick's texture window, wrapping the offsets into [0, 1].
fn scroll_brick_textures(state: &mut GameState, dt: f64) {
    for brick in state.bricks.iter_mut() {
        brick.scroll += brick.scroll_speed * dt;
        brick.scroll.x = wrap_unit(brick.scroll.x);
        brick.scroll.y = wrap_unit(brick.scroll.y);
    }
}
