/// Spawner — decides when balloons and arrows come into existence.
///
/// The difficulty curve is a pure function of the elapsed clock reading;
/// the only state kept between frames is the clock value at which the next
/// balloon is due (`GameState::next_balloon_ms`).

use log::{debug, trace};
use rand::Rng;

use crate::config::{BalloonConfig, SpawnConfig};
use crate::entities::{Arrow, Balloon, GameState, Heading};
use crate::geometry::Rect;

/// Delay before the next balloon: `base - floor(elapsed / scale)`, clamped
/// to `min_delay_ms` (1 ms by default) once the subtraction bottoms out.
pub fn spawn_delay_ms(cfg: &SpawnConfig, elapsed_ms: u64, scale: u64) -> u64 {
    let shrink = elapsed_ms / scale.max(1);
    cfg.base_delay_ms
        .saturating_sub(shrink)
        .max(cfg.min_delay_ms)
}

/// Clock reading at which the first balloon appears.
pub fn first_balloon_at(cfg: &SpawnConfig) -> u64 {
    spawn_delay_ms(cfg, 0, cfg.initial_scale)
}

pub fn balloon_due(state: &GameState) -> bool {
    state.elapsed_ms >= state.next_balloon_ms
}

/// A fresh balloon entering from the right, not yet active.
pub fn new_balloon(cfg: &BalloonConfig, rng: &mut impl Rng) -> Balloon {
    let x = rng.gen_range(cfg.spawn_x_min..=cfg.spawn_x_max);
    Balloon::new(
        Rect::new(x, cfg.spawn_y, cfg.width, cfg.height),
        Heading::Left,
        cfg.speed,
    )
}

/// Spawn one balloon and re-arm the timer from the current clock reading.
pub fn spawn_balloon(state: &GameState, rng: &mut impl Rng) -> GameState {
    let balloon = new_balloon(&state.rules.balloon, rng);
    let spawn = &state.rules.spawn;
    let delay = spawn_delay_ms(spawn, state.elapsed_ms, spawn.ramp_scale);
    debug!(
        "balloon spawned at x={} (t={}ms, next in {}ms)",
        balloon.rect.x, state.elapsed_ms, delay
    );

    let mut balloons = state.balloons.clone();
    balloons.push(balloon);
    GameState {
        balloons,
        next_balloon_ms: state.elapsed_ms + delay,
        ..state.clone()
    }
}

/// Fire an arrow from the player's top-centre — capped at
/// `arrow.max_on_screen` simultaneous arrows.  At the cap this is a no-op.
pub fn fire_arrow(state: &GameState) -> GameState {
    let cfg = &state.rules.arrow;
    if state.arrows.len() >= cfg.max_on_screen {
        trace!("fire ignored: {} arrows already live", state.arrows.len());
        return state.clone();
    }
    let arrow = Arrow {
        rect: Rect::from_mid_top(state.player.rect.mid_top(), cfg.width, cfg.height),
        speed: cfg.speed,
    };
    let mut arrows = state.arrows.clone();
    arrows.push(arrow);
    GameState {
        arrows,
        ..state.clone()
    }
}
