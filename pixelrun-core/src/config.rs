//! Game tuning configuration
//!
//! Every constant that shapes the game feel lives here. The defaults are
//! the shipped tuning; boards may override them with a postcard blob read
//! from storage (requires the `serde` feature).

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column the runner occupies
pub const PLAYER_X: i32 = 2;

/// Obstacle lane at the runner's head height (ducking avoids it)
pub const HIGH_LANE: i32 = 5;

/// Obstacle lane at the runner's feet (jumping avoids it)
pub const LOW_LANE: i32 = 7;

/// Rows obstacles spawn in
pub const LANES: [i32; 2] = [HIGH_LANE, LOW_LANE];

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Jump ceiling is not above the ground
    InvalidJumpRange,
    /// Ascent or fall rate is not positive
    InvalidRate,
    /// Base speed is not positive or the bonus cap is negative
    InvalidSpeed,
    /// Stored blob could not be decoded
    Deserialize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidJumpRange => f.write_str("jump ceiling must be above the ground"),
            ConfigError::InvalidRate => f.write_str("ascent and fall rates must be positive"),
            ConfigError::InvalidSpeed => f.write_str("obstacle speed settings out of range"),
            ConfigError::Deserialize => f.write_str("config blob could not be decoded"),
        }
    }
}

/// Runner movement tuning
///
/// Rows grow downward, so the ceiling is the smaller value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerConfig {
    /// Column of the runner
    pub x: i32,
    /// Top row of the runner while standing on the ground
    pub ground_y: f32,
    /// Highest top row reachable by a jump
    pub ceiling_y: f32,
    /// Ascent rate while the jump button is held (rows/s)
    pub ascent_rate: f32,
    /// Fall rate (rows/s)
    pub fall_rate: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: PLAYER_X,
            ground_y: 5.0,
            ceiling_y: 3.0,
            ascent_rate: 8.0,
            fall_rate: 6.0,
        }
    }
}

/// Obstacle spawn and speed tuning
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObstacleConfig {
    /// Column new obstacles appear at (just right of the matrix)
    pub spawn_x: f32,
    /// Speed at score 0 (columns/s)
    pub base_speed: f32,
    /// Largest speed bonus earned from score (columns/s)
    pub max_bonus: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            spawn_x: 16.0,
            base_speed: 4.0,
            max_bonus: 8.0,
        }
    }
}

impl ObstacleConfig {
    /// Horizontal speed at a given score
    ///
    /// Every two points add one column per second, up to `max_bonus`.
    pub fn speed_for_score(&self, score: u32) -> f32 {
        let bonus = score as f32 / 2.0;
        self.base_speed + bonus.min(self.max_bonus)
    }
}

/// Complete game tuning
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub obstacle: ObstacleConfig,
}

impl GameConfig {
    /// Check the tuning for values the state machines cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.player;
        if !(p.ceiling_y < p.ground_y) {
            return Err(ConfigError::InvalidJumpRange);
        }
        if !(p.ascent_rate > 0.0 && p.fall_rate > 0.0) {
            return Err(ConfigError::InvalidRate);
        }

        let o = &self.obstacle;
        if !(o.base_speed > 0.0 && o.max_bonus >= 0.0) {
            return Err(ConfigError::InvalidSpeed);
        }

        Ok(())
    }

    /// Decode and validate a postcard-serialized configuration
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: GameConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }
}
