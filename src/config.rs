//! Tunable game parameters.
//!
//! Every value has a default matching the classic 800×600 layout, so an
//! empty or missing config file yields a playable game.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Rect;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "POP_MY_BALLOONS_CONFIG";

/// Largest accepted screen dimension, in world pixels.
pub const MAX_SCREEN_DIM: i32 = 1 << 16;
/// Spawn coordinates must lie within `±MAX_SPAWN_COORD`.
pub const MAX_SPAWN_COORD: i32 = 1 << 20;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig { width: 800, height: 600 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub speed: i32,
    pub width: i32,
    pub height: i32,
    /// Horizontal centre of the player's feet at spawn.
    pub spawn_x: i32,
    /// Ground line the player stands on.
    pub spawn_bottom: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            speed: 3,
            width: 48,
            height: 64,
            spawn_x: 300,
            spawn_bottom: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalloonConfig {
    pub speed: i32,
    pub width: i32,
    pub height: i32,
    pub spawn_x_min: i32,
    pub spawn_x_max: i32,
    pub spawn_y: i32,
    /// Inclusive left edge of the interior band checked against the
    /// balloon's horizontal centre.
    pub band_left: i32,
    /// Exclusive right edge of the interior band.
    pub band_right: i32,
}

impl Default for BalloonConfig {
    fn default() -> Self {
        BalloonConfig {
            speed: 4,
            width: 50,
            height: 64,
            spawn_x_min: 800,
            spawn_x_max: 1000,
            spawn_y: 10,
            band_left: 15,
            band_right: 785,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowConfig {
    pub speed: i32,
    pub width: i32,
    pub height: i32,
    pub max_on_screen: usize,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        ArrowConfig {
            speed: 5,
            width: 8,
            height: 40,
            max_on_screen: 3,
        }
    }
}

/// Balloon spawn timer: `base_delay_ms - elapsed_ms / scale`, never below
/// `min_delay_ms` once that would reach zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub base_delay_ms: u64,
    /// Scale used for the very first arming at game start.
    pub initial_scale: u64,
    /// Scale used on every re-arm after a balloon spawns.
    pub ramp_scale: u64,
    pub min_delay_ms: u64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        SpawnConfig {
            base_delay_ms: 900,
            initial_scale: 1000,
            ramp_scale: 100,
            min_delay_ms: 1,
        }
    }
}

/// Everything the simulation needs.  `Copy` so it can ride along inside
/// `GameState` without cloning cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub screen: ScreenConfig,
    pub player: PlayerConfig,
    pub balloon: BalloonConfig,
    pub arrow: ArrowConfig,
    pub spawn: SpawnConfig,
}

impl Rules {
    pub fn screen_rect(&self) -> Rect {
        Rect::new(0, 0, self.screen.width, self.screen.height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub framerate: u32,
    pub log_file: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { framerate: 60, log_file: None }
    }
}

impl DisplayConfig {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("pop_my_balloons.log"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    #[serde(flatten)]
    pub rules: Rules,
    pub display: DisplayConfig,
}

impl GameConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load from `$POP_MY_BALLOONS_CONFIG`, else `~/.pop_my_balloons.toml`.
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let path = config_path();
        Self::load_from(&path).map(|config| (config, path))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.rules;
        let positive = [
            ("screen.width", r.screen.width),
            ("screen.height", r.screen.height),
            ("player.speed", r.player.speed),
            ("player.width", r.player.width),
            ("player.height", r.player.height),
            ("balloon.speed", r.balloon.speed),
            ("balloon.width", r.balloon.width),
            ("balloon.height", r.balloon.height),
            ("arrow.speed", r.arrow.speed),
            ("arrow.width", r.arrow.width),
            ("arrow.height", r.arrow.height),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, v)| *v <= 0) {
            return Err(invalid(format!("{name} must be positive")));
        }
        let (sw, sh) = (r.screen.width, r.screen.height);
        if sw > MAX_SCREEN_DIM || sh > MAX_SCREEN_DIM {
            return Err(invalid(format!(
                "screen {sw}x{sh} exceeds {MAX_SCREEN_DIM}x{MAX_SCREEN_DIM}"
            )));
        }
        let sizes = [
            ("player", r.player.width, r.player.height),
            ("balloon", r.balloon.width, r.balloon.height),
            ("arrow", r.arrow.width, r.arrow.height),
        ];
        if let Some((name, w, h)) = sizes.iter().find(|(_, w, h)| *w > sw || *h > sh) {
            return Err(invalid(format!(
                "{name} size {w}x{h} does not fit the {sw}x{sh} screen"
            )));
        }
        let speeds = [
            ("player.speed", r.player.speed, sw),
            ("balloon.speed", r.balloon.speed, sw),
            ("arrow.speed", r.arrow.speed, sh),
        ];
        if let Some((name, v, limit)) = speeds.iter().find(|(_, v, limit)| v > limit) {
            return Err(invalid(format!("{name} {v} exceeds {limit}")));
        }
        let coords = [
            ("player.spawn_x", r.player.spawn_x),
            ("player.spawn_bottom", r.player.spawn_bottom),
            ("balloon.spawn_x_min", r.balloon.spawn_x_min),
            ("balloon.spawn_x_max", r.balloon.spawn_x_max),
            ("balloon.spawn_y", r.balloon.spawn_y),
        ];
        if let Some((name, _)) = coords.iter().find(|(_, v)| v.abs() > MAX_SPAWN_COORD) {
            return Err(invalid(format!("{name} is outside ±{MAX_SPAWN_COORD}")));
        }
        if r.arrow.max_on_screen == 0 {
            return Err(invalid("arrow.max_on_screen must be at least 1".into()));
        }
        if r.spawn.initial_scale == 0 || r.spawn.ramp_scale == 0 {
            return Err(invalid("spawn scales must be non-zero".into()));
        }
        if r.spawn.min_delay_ms == 0 {
            return Err(invalid("spawn.min_delay_ms must be non-zero".into()));
        }
        if r.balloon.spawn_x_min > r.balloon.spawn_x_max {
            return Err(invalid("balloon.spawn_x_min exceeds balloon.spawn_x_max".into()));
        }
        if r.balloon.band_left < 0
            || r.balloon.band_right > r.screen.width
            || r.balloon.band_left >= r.balloon.band_right
        {
            return Err(invalid(format!(
                "balloon band [{}, {}) must be non-empty and inside the screen",
                r.balloon.band_left, r.balloon.band_right
            )));
        }
        if self.display.framerate == 0 {
            return Err(invalid("display.framerate must be non-zero".into()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".pop_my_balloons.toml")
}
