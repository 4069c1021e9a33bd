//! Obstacles
//!
//! One obstacle is in flight at a time. It enters at the right edge in
//! one of the two lanes and slides left until it leaves the matrix or
//! hits the runner.

use crate::canvas::Canvas;
use crate::config::LANES;
use crate::point::{floor_to_i32, Point};
use crate::rng::LaneRng;

/// A single obstacle pixel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Obstacle {
    x: f32,
    lane: i32,
}

impl Obstacle {
    /// Create an obstacle at column `x` in row `lane`
    pub const fn new(x: f32, lane: i32) -> Self {
        Self { x, lane }
    }

    /// Create an obstacle at column `x` in a randomly chosen lane
    pub fn spawn<R: LaneRng>(x: f32, rng: &mut R) -> Self {
        Self::new(x, LANES[usize::from(rng.coin_flip())])
    }

    /// Column (real valued)
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Row
    pub fn lane(&self) -> i32 {
        self.lane
    }

    /// Pixel the obstacle covers
    pub fn point(&self) -> Point {
        Point::new(floor_to_i32(self.x), self.lane)
    }

    /// Move left by `distance` columns
    pub fn advance(&mut self, distance: f32) {
        self.x -= distance;
    }

    /// Still on or right of the left edge
    pub fn is_visible(&self) -> bool {
        self.x >= 0.0
    }

    /// Paint the obstacle onto the canvas
    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.set_pixel(self.x, self.lane as f32, true);
    }
}
