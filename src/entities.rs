/// All game entity types — pure data, no logic.

use crate::config::Rules;
use crate::geometry::Rect;

/// Horizontal travel of the player, recomputed from input every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    Left = -1,
    #[default]
    Stationary = 0,
    Right = 1,
}

impl Direction {
    /// Right minus left, as read from two held-key flags.
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => Direction::Left,
            (false, true) => Direction::Right,
            _ => Direction::Stationary,
        }
    }

    pub fn sign(self) -> i32 {
        self as i32
    }
}

/// Horizontal travel of a balloon.  Balloons never stand still.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Left = -1,
    Right = 1,
}

impl Heading {
    pub fn sign(self) -> i32 {
        self as i32
    }

    pub fn reversed(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub direction: Direction,
    pub speed: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Balloon {
    pub rect: Rect,
    pub heading: Heading,
    pub speed: i32,
    /// Set the first frame the balloon is fully on screen; never cleared.
    pub active: bool,
    /// Width at creation, kept for layout.
    pub width: i32,
}

impl Balloon {
    pub fn new(rect: Rect, heading: Heading, speed: i32) -> Self {
        Balloon {
            rect,
            heading,
            speed,
            active: false,
            width: rect.width,
        }
    }
}

/// Travels straight up; no horizontal component.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub rect: Rect,
    pub speed: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub balloons: Vec<Balloon>,
    pub arrows: Vec<Arrow>,
    pub status: GameStatus,
    /// Balloons destroyed by arrows so far.
    pub popped: u32,
    pub frame: u64,
    /// Milliseconds since the game started, as last reported by the clock.
    pub elapsed_ms: u64,
    /// Clock reading at which the next balloon spawns.
    pub next_balloon_ms: u64,
    pub rules: Rules,
}
