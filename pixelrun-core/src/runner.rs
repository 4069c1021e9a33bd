//! Tick loop
//!
//! The runner owns the game and every peripheral. One tick samples the
//! clock, advances the game by the time elapsed since the previous tick
//! and draws the result. A board's start-up code builds a [`Runner`] and
//! calls [`Runner::run`], which never returns.

use pixelrun_hal::timer::elapsed_secs;
use pixelrun_hal::{Clock, InputPin, PixelDisplay, Speaker};

use crate::game::Game;
use crate::rng::LaneRng;

/// Game loop driver
pub struct Runner<P, R, D, S, C> {
    game: Game<P, R>,
    display: D,
    speaker: S,
    clock: C,
    last_ms: u32,
}

impl<P, R, D, S, C> Runner<P, R, D, S, C>
where
    P: InputPin,
    R: LaneRng,
    D: PixelDisplay,
    S: Speaker,
    C: Clock,
{
    /// Take ownership of the game and peripherals
    ///
    /// The first tick measures time from this call.
    pub fn new(game: Game<P, R>, display: D, speaker: S, clock: C) -> Self {
        let last_ms = clock.now_ms();
        Self {
            game,
            display,
            speaker,
            clock,
            last_ms,
        }
    }

    /// Run one tick
    ///
    /// Returns the elapsed time the game was advanced by, in seconds.
    pub fn tick(&mut self) -> f32 {
        let now_ms = self.clock.now_ms();
        let dt = elapsed_secs(self.last_ms, now_ms);
        self.last_ms = now_ms;

        self.game.update(dt, &mut self.display, &mut self.speaker);
        self.game.draw(&mut self.display);
        dt
    }

    /// Tick forever
    ///
    /// Blocking display calls (title and score text) stall the loop; the
    /// time they take is folded into the next tick's dt.
    pub fn run(mut self) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("Pixelrun tick loop started");

        loop {
            self.tick();
        }
    }

    /// The game being driven
    pub fn game(&self) -> &Game<P, R> {
        &self.game
    }

    /// The display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The speaker
    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    /// Release the game and peripherals
    pub fn into_parts(self) -> (Game<P, R>, D, S, C) {
        (self.game, self.display, self.speaker, self.clock)
    }
}
