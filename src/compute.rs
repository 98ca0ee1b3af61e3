/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG and logging.

use log::info;
use rand::Rng;

use crate::collision::resolve_collisions;
use crate::config::{BalloonConfig, Rules};
use crate::entities::{Arrow, Balloon, Direction, GameState, GameStatus, Heading, Player};
use crate::geometry::Rect;
use crate::spawn::{balloon_due, fire_arrow, first_balloon_at, spawn_balloon};

/// Everything the frame driver hands the core for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    /// A fire key press arrived since the previous tick.
    pub fire: bool,
    /// Monotonic milliseconds since the game started.
    pub elapsed_ms: u64,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: one player on the ground, nothing else,
/// balloon timer armed.
pub fn init_state(rules: Rules) -> GameState {
    let p = &rules.player;
    GameState {
        player: Player {
            rect: Rect::from_mid_bottom((p.spawn_x, p.spawn_bottom), p.width, p.height)
                .clamped_within(&rules.screen_rect()),
            direction: Direction::Stationary,
            speed: p.speed,
        },
        balloons: Vec::new(),
        arrows: Vec::new(),
        status: GameStatus::Running,
        popped: 0,
        frame: 0,
        elapsed_ms: 0,
        next_balloon_ms: first_balloon_at(&rules.spawn),
        rules,
    }
}

// ── Per-entity update rules ──────────────────────────────────────────────────

/// Steer, move, and keep the whole player rectangle on screen.
pub fn update_player(player: &Player, direction: Direction, screen: &Rect) -> Player {
    let moved = Rect {
        x: player.rect.x + direction.sign() * player.speed,
        ..player.rect
    };
    Player {
        rect: moved.clamped_within(screen),
        direction,
        ..player.clone()
    }
}

/// Zig-zag step: slide sideways, and once fully on screen, drop one row and
/// turn around whenever the centre leaves the interior band.
pub fn update_balloon(balloon: &Balloon, screen: &Rect, cfg: &BalloonConfig) -> Balloon {
    let mut rect = Rect {
        x: balloon.rect.x + balloon.heading.sign() * balloon.speed,
        ..balloon.rect
    };
    let active = balloon.active || screen.contains(&rect);
    let mut heading = balloon.heading;

    if active {
        let cx = rect.center_x();
        let exited = match heading {
            Heading::Left => cx < cfg.band_left,
            Heading::Right => cx >= cfg.band_right,
        };
        if exited {
            heading = heading.reversed();
            rect.y += rect.height;
        }
    }

    Balloon {
        rect,
        heading,
        active,
        ..balloon.clone()
    }
}

/// Move up; `None` once the arrow no longer overlaps the screen.
pub fn update_arrow(arrow: &Arrow, screen: &Rect) -> Option<Arrow> {
    let rect = Rect {
        y: arrow.rect.y - arrow.speed,
        ..arrow.rect
    };
    screen.intersects(&rect).then(|| Arrow { rect, ..arrow.clone() })
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
/// A finished game is returned unchanged.
pub fn tick(state: &GameState, input: &FrameInput, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    // ── 1. Clock & spawns ────────────────────────────────────────────────────
    let mut state = GameState {
        frame: state.frame + 1,
        elapsed_ms: input.elapsed_ms.max(state.elapsed_ms),
        ..state.clone()
    };
    if balloon_due(&state) {
        state = spawn_balloon(&state, rng);
    }
    if input.fire {
        state = fire_arrow(&state);
    }

    // ── 2. Move everything ───────────────────────────────────────────────────
    let screen = state.rules.screen_rect();
    let player = update_player(
        &state.player,
        Direction::from_keys(input.left, input.right),
        &screen,
    );
    let balloons: Vec<Balloon> = state
        .balloons
        .iter()
        .map(|b| update_balloon(b, &screen, &state.rules.balloon))
        .collect();
    let arrows: Vec<Arrow> = state
        .arrows
        .iter()
        .filter_map(|a| update_arrow(a, &screen))
        .collect();

    // ── 3. Collisions ────────────────────────────────────────────────────────
    let outcome = resolve_collisions(&player, balloons, arrows);
    let status = if outcome.player_hit {
        info!(
            "game over at frame {} ({}ms): {} balloons popped",
            state.frame,
            state.elapsed_ms,
            state.popped + outcome.popped
        );
        GameStatus::GameOver
    } else {
        GameStatus::Running
    };

    GameState {
        player,
        balloons: outcome.balloons,
        arrows: outcome.arrows,
        popped: state.popped + outcome.popped,
        status,
        ..state
    }
}
