//! Break Bricks headless demo.
//!
//! Drives the simulation at roughly 60 Hz with a scripted paddle and a
//! draw backend that only counts calls. Useful for soak-testing round
//! turnover and for profiling without a window.

use std::env;
use std::path::Path;
use std::thread;
use std::time::Duration;

use break_bricks::platform::{Clock, time_seed};
use break_bricks::render::{PxRect, RenderBackend, draw_frame};
use break_bricks::sim::{FrameInput, GameState, Rgba, TextureId, tick};
use break_bricks::tuning::Tuning;

/// Matches the 640x840 window the game ships with.
const SURFACE_PX: (i32, i32) = (640, 840);

/// Draw backend that discards pixels and keeps call counts.
#[derive(Debug, Default)]
struct CountingBackend {
    clears: u64,
    fills: u64,
    blits: u64,
}

impl RenderBackend for CountingBackend {
    fn clear(&mut self, _color: Rgba) {
        self.clears += 1;
    }

    fn fill_rect(&mut self, _rect: PxRect, _color: Rgba) {
        self.fills += 1;
    }

    fn blit(&mut self, _tex: TextureId, _src: Option<PxRect>, _dst: PxRect) {
        self.blits += 1;
    }

    fn texture_size(&self, _tex: TextureId) -> (i32, i32) {
        (800, 600)
    }
}

/// Keep the paddle centered under the first ball, clamped to the play
/// area the same way mouse input is.
fn tracking_paddle_x(game: &GameState) -> Option<f64> {
    let ball = game.balls.as_slice().first()?;
    let target = ball.pos.x + ball.size.x / 2.0 - game.paddle.size.x / 2.0;
    let left = game.play_area.left();
    let max_right = game.play_area.right() - game.paddle.size.x;
    Some(target.clamp(left, max_right))
}

fn main() {
    env_logger::init();

    // Usage: break-bricks [frames] [tuning.json]
    let mut args = env::args().skip(1);
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(Path::new(&path)),
        None => Tuning::default(),
    };

    let seed = time_seed();
    log::info!("Break Bricks starting with seed: {}", seed);

    let brick_texs: Vec<TextureId> = (0..5).map(TextureId).collect();
    let mut game = GameState::new(seed, tuning, brick_texs, TextureId(5));
    game.setup();
    log::info!("Level built with {} bricks", game.bricks.len());

    let mut backend = CountingBackend::default();
    let clock = Clock::start();
    let mut last_ns = clock.now_ns();
    let mut rounds: u64 = 0;

    for _ in 0..frames {
        let now_ns = clock.now_ns();
        let dt_ns = now_ns - last_ns;
        last_ns = now_ns;

        // Same turnover rule as the windowed game: a lost or cleared round
        // rebuilds the level once the burst particles have settled.
        if game.is_dead() || game.is_cleared() {
            rounds += 1;
            log::info!("Round {} over, rebuilding level", rounds);
            game.setup();
        }

        let input = FrameInput {
            paddle_x: tracking_paddle_x(&game),
        };
        tick(&mut game, &input, dt_ns);

        draw_frame(&game, SURFACE_PX, &mut backend);

        thread::sleep(Duration::from_millis(16));
    }

    log::info!(
        "Done after {} frames: {} rounds, {} bricks and {} balls left, {} draw calls",
        frames,
        rounds,
        game.bricks.len(),
        game.balls.len(),
        backend.clears + backend.fills + backend.blits
    );
}
