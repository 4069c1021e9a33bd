//! Game orchestrator
//!
//! The game is a small state machine around the runner:
//!
//! ```text
//!   Title ──start──▶ Playing ──start──▶ Paused
//!     ▲                │   ▲              │
//!     │ duck/jump      │   └────start─────┘
//!     │                ▼
//!   Score ◀──collision─┘        Score ──start──▶ Playing
//! ```
//!
//! Each tick [`Game::update`] advances the buttons and the current state,
//! then [`Game::draw`] renders it. Only `Playing` goes through the canvas;
//! the other screens use the display's own text and image primitives.

use core::fmt::Write;

use heapless::String;
use pixelrun_hal::{InputPin, PixelDisplay, Speaker};

use crate::canvas::Canvas;
use crate::config::{ConfigError, GameConfig};
use crate::input::{Buttons, Controls};
use crate::obstacle::Obstacle;
use crate::player::{Cue, Player};
use crate::rng::LaneRng;

/// Text shown on the title screen
pub const TITLE_TEXT: &str = "run";

/// Pause glyph (two vertical bars)
pub const PAUSED_IMAGE: &str = "00007e7e7e7e000000007e7e7e7e0000";

/// Game screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Waiting for start
    Title,
    /// Run in progress
    Playing,
    /// Run frozen, pause glyph shown
    Paused,
    /// Run over, score shown
    Score,
}

/// Top-level game state
pub struct Game<P, R> {
    state: GameState,
    score: u32,
    obstacle: Option<Obstacle>,
    player: Player,
    canvas: Canvas,
    buttons: Buttons<P>,
    rng: R,
    config: GameConfig,
}

impl<P: InputPin, R: LaneRng> Game<P, R> {
    /// Create a game on the title screen with the default tuning
    pub fn new(buttons: Buttons<P>, rng: R) -> Self {
        let config = GameConfig::default();
        Self {
            state: GameState::Title,
            score: 0,
            obstacle: None,
            player: Player::new(config.player),
            canvas: Canvas::new(),
            buttons,
            rng,
            config,
        }
    }

    /// Create a game with custom tuning
    pub fn with_config(
        buttons: Buttons<P>,
        rng: R,
        config: GameConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut game = Self::new(buttons, rng);
        game.player = Player::new(config.player);
        game.config = config;
        Ok(game)
    }

    /// Current screen
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Obstacles passed in the current (or last) run
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Obstacle in flight, if any
    pub fn obstacle(&self) -> Option<&Obstacle> {
        self.obstacle.as_ref()
    }

    /// The runner
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The playfield canvas
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Active tuning
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current obstacle speed in columns per second
    pub fn obstacle_speed(&self) -> f32 {
        self.config.obstacle.speed_for_score(self.score)
    }

    /// Advance the game by `dt` seconds
    ///
    /// Samples the buttons exactly once, so it must be called exactly once
    /// per tick.
    pub fn update<D, S>(&mut self, dt: f32, display: &mut D, speaker: &mut S)
    where
        D: PixelDisplay,
        S: Speaker,
    {
        let controls = self.buttons.update();
        let start_pressed = self.buttons.start.was_just_pressed();

        match self.state {
            GameState::Title | GameState::Score => {
                if controls.any() {
                    self.set_state(GameState::Title);
                }
                if start_pressed {
                    self.start_run(display);
                }
            }
            GameState::Playing => {
                if start_pressed {
                    self.set_state(GameState::Paused);
                    return;
                }
                self.play(dt, controls, speaker);
            }
            GameState::Paused => {
                if start_pressed {
                    self.set_state(GameState::Playing);
                    self.clear_display(display);
                    return;
                }
                display.show_image(PAUSED_IMAGE);
            }
        }
    }

    /// Render the current screen
    ///
    /// The title and score screens block inside the display driver until
    /// their text has scrolled.
    pub fn draw<D: PixelDisplay>(&mut self, display: &mut D) {
        match self.state {
            GameState::Title => display.show(TITLE_TEXT, true),
            GameState::Playing => {
                self.player.draw(&mut self.canvas);
                if let Some(obstacle) = &self.obstacle {
                    obstacle.draw(&mut self.canvas);
                }
                self.canvas.draw(display);
            }
            GameState::Score => {
                let mut text: String<10> = String::new();
                // u32::MAX has 10 digits
                let _ = write!(text, "{}", self.score);
                display.show(&text, true);
            }
            GameState::Paused => {}
        }
    }

    fn start_run<D: PixelDisplay>(&mut self, display: &mut D) {
        self.set_state(GameState::Playing);
        self.score = 0;
        self.obstacle = None;
        self.clear_display(display);
    }

    fn play<S: Speaker>(&mut self, dt: f32, controls: Controls, speaker: &mut S) {
        for cue in self.player.update(dt, controls) {
            speaker.play_melody(cue.asset());
        }

        let distance = dt * self.obstacle_speed();
        let spawn_x = self.config.obstacle.spawn_x;
        let rng = &mut self.rng;
        let obstacle = self.obstacle.get_or_insert_with(|| {
            let spawned = Obstacle::spawn(spawn_x, rng);
            #[cfg(feature = "defmt")]
            defmt::debug!("Obstacle spawned in lane {}", spawned.lane());
            spawned
        });
        obstacle.advance(distance);

        let hit = obstacle.point();
        if self.player.is_colliding(hit.x, hit.y) {
            speaker.play_melody(Cue::Hurt.asset());
            self.set_state(GameState::Score);
        } else if !obstacle.is_visible() {
            self.obstacle = None;
            self.score = self.score.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::debug!("Obstacle cleared, score {}", self.score);
        }
    }

    /// Clear the hardware and tell the canvas it no longer matches
    fn clear_display<D: PixelDisplay>(&mut self, display: &mut D) {
        display.clear();
        self.canvas.invalidate();
    }

    fn set_state(&mut self, state: GameState) {
        if state != self.state {
            #[cfg(feature = "defmt")]
            defmt::info!("Game: {} -> {} (score {})", self.state, state, self.score);
            self.state = state;
        }
    }
}
