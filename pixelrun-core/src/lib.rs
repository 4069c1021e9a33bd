//! Board-agnostic core logic for the Pixelrun game
//!
//! This crate contains all game logic that does not depend on a specific
//! board:
//!
//! - Double-buffered pixel-diff renderer
//! - Button edge detection
//! - Player, obstacle and game state machines
//! - Tuning configuration
//! - The tick loop that drives everything from a monotonic clock
//!
//! Peripherals come from the `pixelrun-hal` traits.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod canvas;
pub mod config;
pub mod game;
pub mod input;
pub mod obstacle;
pub mod player;
pub mod point;
pub mod rng;
pub mod runner;

pub use canvas::Canvas;
pub use config::{ConfigError, GameConfig, ObstacleConfig, PlayerConfig};
pub use game::{Game, GameState};
pub use input::{Buttons, Controls, EdgeButton};
pub use obstacle::Obstacle;
pub use player::{Cue, Player, PlayerState};
pub use point::Point;
pub use rng::{LaneRng, XorShift32};
pub use runner::Runner;
