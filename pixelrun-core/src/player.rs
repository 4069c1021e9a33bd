//! Runner state machine
//!
//! The runner occupies one column and is three pixels tall. Its top row
//! `y` is a real number integrated from the elapsed time while jumping
//! and falling, and is floored only when drawn.

use crate::canvas::Canvas;
use crate::config::{PlayerConfig, HIGH_LANE, LOW_LANE};
use crate::input::Controls;

/// Audio cues played on state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    /// Runner started ducking
    Duck,
    /// Runner started a jump
    Jump,
    /// Runner hit an obstacle
    Hurt,
}

impl Cue {
    /// Melody asset played for this cue
    pub const fn asset(self) -> &'static str {
        match self {
            Cue::Duck => "exhaust.wav",
            Cue::Jump => "jump.wav",
            Cue::Hurt => "hurt.wav",
        }
    }
}

/// Runner states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerState {
    /// On the ground
    Running,
    /// On the ground, only the lowest pixel shown
    Ducking,
    /// Rising while the jump button is held
    Jumping,
    /// Dropping back to the ground
    Falling,
    /// Declared for completeness; no transition enters it
    Dead,
}

/// Cues raised during one update (at most duck and jump together)
pub type Cues = heapless::Vec<Cue, 2>;

/// The runner
#[derive(Debug, Clone)]
pub struct Player {
    state: PlayerState,
    y: f32,
    config: PlayerConfig,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl Player {
    /// Create a runner standing on the ground
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            state: PlayerState::Running,
            y: config.ground_y,
            config,
        }
    }

    /// Current state
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Top row (real valued)
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Advance the runner by `dt` seconds
    ///
    /// The checks run in a fixed order and a state entered by an earlier
    /// check is handled by the later ones in the same call: starting a
    /// jump also rises this tick, and reaching the ceiling also starts
    /// falling this tick.
    pub fn update(&mut self, dt: f32, controls: Controls) -> Cues {
        let mut cues = Cues::new();

        if self.state == PlayerState::Running {
            if controls.duck {
                self.state = PlayerState::Ducking;
                let _ = cues.push(Cue::Duck);
            }
            if controls.jump {
                self.state = PlayerState::Jumping;
                let _ = cues.push(Cue::Jump);
            }
        }

        if self.state == PlayerState::Ducking && !controls.duck {
            self.state = PlayerState::Running;
        }

        if self.state == PlayerState::Jumping {
            if !controls.jump {
                self.state = PlayerState::Falling;
            } else {
                self.y -= self.config.ascent_rate * dt;
                if self.y <= self.config.ceiling_y {
                    self.state = PlayerState::Falling;
                    self.y = self.config.ceiling_y;
                }
            }
        }

        if self.state == PlayerState::Falling {
            self.y += self.config.fall_rate * dt;
            if self.y >= self.config.ground_y {
                self.state = PlayerState::Running;
                self.y = self.config.ground_y;
            }
        }

        cues
    }

    /// Paint the runner onto the canvas
    ///
    /// A ducking runner turns its upper two pixels off and keeps only the
    /// lowest one.
    pub fn draw(&self, canvas: &mut Canvas) {
        let x = self.config.x as f32;
        let standing = self.state != PlayerState::Ducking;
        canvas.set_pixel(x, self.y, standing);
        canvas.set_pixel(x, self.y + 1.0, standing);
        canvas.set_pixel(x, self.y + 2.0, true);
    }

    /// Check whether an obstacle at (`x`, `lane`) hits the runner
    ///
    /// Only obstacles in the runner's column count. A ducking runner is
    /// hit only by the foot-level lane (row 7) and an airborne one only by
    /// the head-height lane (row 5). These rules are fixed game balance
    /// and do not follow the drawn pixels exactly.
    pub fn is_colliding(&self, x: i32, lane: i32) -> bool {
        if x != self.config.x {
            return false;
        }

        match self.state {
            PlayerState::Running => true,
            PlayerState::Ducking => lane == LOW_LANE,
            PlayerState::Jumping | PlayerState::Falling => lane == HIGH_LANE,
            PlayerState::Dead => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    const HELD_JUMP: Controls = Controls {
        duck: false,
        jump: true,
    };
    const HELD_DUCK: Controls = Controls {
        duck: true,
        jump: false,
    };
    const RELEASED: Controls = Controls {
        duck: false,
        jump: false,
    };

    fn approx(a: f32, b: f32) -> bool {
        let d = a - b;
        d < 1e-4 && d > -1e-4
    }

    #[test]
    fn test_starts_running_on_ground() {
        let player = Player::default();
        assert_eq!(player.state(), PlayerState::Running);
        assert_eq!(player.y(), 5.0);
    }

    #[test]
    fn test_duck_and_release() {
        let mut player = Player::default();

        let cues = player.update(0.1, HELD_DUCK);
        assert_eq!(player.state(), PlayerState::Ducking);
        assert_eq!(cues.as_slice(), &[Cue::Duck]);

        // Still held: no repeated cue
        let cues = player.update(0.1, HELD_DUCK);
        assert_eq!(player.state(), PlayerState::Ducking);
        assert!(cues.is_empty());

        player.update(0.1, RELEASED);
        assert_eq!(player.state(), PlayerState::Running);
        assert_eq!(player.y(), 5.0);
    }

    #[test]
    fn test_jump_rises_on_first_tick() {
        let mut player = Player::default();

        let cues = player.update(0.1, HELD_JUMP);
        assert_eq!(player.state(), PlayerState::Jumping);
        assert_eq!(cues.as_slice(), &[Cue::Jump]);
        assert!(approx(player.y(), 4.2));
    }

    #[test]
    fn test_jump_clamps_at_ceiling_and_falls() {
        let mut player = Player::default();

        player.update(0.1, HELD_JUMP); // 4.2
        player.update(0.1, HELD_JUMP); // 3.4
        assert_eq!(player.state(), PlayerState::Jumping);

        // Crosses the ceiling: pinned to 3, then falls in the same tick
        player.update(0.1, HELD_JUMP);
        assert_eq!(player.state(), PlayerState::Falling);
        assert!(approx(player.y(), 3.6));
    }

    #[test]
    fn test_release_starts_fall_without_clamp() {
        let mut player = Player::default();
        player.update(0.1, HELD_JUMP); // 4.2

        player.update(0.05, RELEASED);
        assert_eq!(player.state(), PlayerState::Falling);
        assert!(approx(player.y(), 4.5));
    }

    #[test]
    fn test_fall_lands_on_ground() {
        let mut player = Player::default();
        player.update(0.1, HELD_JUMP); // 4.2
        player.update(0.1, RELEASED); // 4.8

        player.update(0.1, RELEASED);
        assert_eq!(player.state(), PlayerState::Running);
        assert_eq!(player.y(), 5.0);
    }

    #[test]
    fn test_duck_and_jump_same_tick() {
        let mut player = Player::default();
        let both = Controls {
            duck: true,
            jump: true,
        };

        let cues = player.update(0.1, both);
        assert_eq!(cues.as_slice(), &[Cue::Duck, Cue::Jump]);
        assert_eq!(player.state(), PlayerState::Jumping);
    }

    #[test]
    fn test_draw_standing() {
        let mut player = Player::default();
        player.update(0.1, HELD_JUMP); // y = 4.2

        let mut canvas = Canvas::new();
        player.draw(&mut canvas);
        let back = canvas.back();
        assert_eq!(back.len(), 3);
        assert!(back.contains(&Point::new(2, 4)));
        assert!(back.contains(&Point::new(2, 5)));
        assert!(back.contains(&Point::new(2, 6)));
    }

    #[test]
    fn test_draw_ducking() {
        let mut player = Player::default();
        player.update(0.1, HELD_DUCK);

        let mut canvas = Canvas::new();
        // Stale pixels from the same frame are switched off
        canvas.set_pixel(2.0, 5.0, true);
        player.draw(&mut canvas);
        let back = canvas.back();
        assert_eq!(back.len(), 1);
        assert!(back.contains(&Point::new(2, 7)));
    }

    #[test]
    fn test_collision_only_in_player_column() {
        let player = Player::default();
        assert!(!player.is_colliding(3, 5));
        assert!(!player.is_colliding(1, 7));
    }

    #[test]
    fn test_running_collides_with_both_lanes() {
        let player = Player::default();
        assert!(player.is_colliding(2, 5));
        assert!(player.is_colliding(2, 7));
    }

    #[test]
    fn test_ducking_collides_only_low_lane() {
        let mut player = Player::default();
        player.update(0.1, HELD_DUCK);
        assert!(player.is_colliding(2, 7));
        assert!(!player.is_colliding(2, 5));
    }

    #[test]
    fn test_airborne_collides_only_high_lane() {
        let mut player = Player::default();
        player.update(0.1, HELD_JUMP);
        assert_eq!(player.state(), PlayerState::Jumping);
        assert!(player.is_colliding(2, 5));
        assert!(!player.is_colliding(2, 7));

        player.update(0.1, RELEASED);
        assert_eq!(player.state(), PlayerState::Falling);
        assert!(player.is_colliding(2, 5));
        assert!(!player.is_colliding(2, 7));
    }
}
