//! Double-buffered pixel-diff renderer
//!
//! Each tick the game declares the pixels it wants lit by calling
//! [`Canvas::set_pixel`]. [`Canvas::draw`] then compares that frame with
//! the one already on the hardware and issues writes only for pixels
//! whose state changes.
//!
//! The work per frame is linear in the number of lit pixels of the two
//! frames, never in the display area.

use heapless::FnvIndexSet;
use pixelrun_hal::PixelDisplay;

use crate::point::Point;

/// Maximum lit pixels per frame (one per pixel of a 16x8 matrix)
pub const MAX_LIT_PIXELS: usize = 128;

/// Set of lit pixels
pub type PixelSet = FnvIndexSet<Point, MAX_LIT_PIXELS>;

/// Double-buffered pixel set
#[derive(Debug, Default)]
pub struct Canvas {
    /// Pixels currently lit on the hardware
    front: PixelSet,
    /// Frame being assembled
    back: PixelSet,
}

impl Canvas {
    /// Create an empty canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a pixel of the next frame
    ///
    /// Coordinates are truncated toward negative infinity. Turning off a
    /// pixel that was never turned on is a no-op.
    pub fn set_pixel(&mut self, x: f32, y: f32, on: bool) {
        let point = Point::from_real(x, y);
        if on {
            if self.back.insert(point).is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("Canvas full, dropping pixel {}", point);
            }
        } else {
            self.back.remove(&point);
        }
    }

    /// Reconcile the hardware with the assembled frame
    ///
    /// Pixels lit last frame but not this one are turned off first, then
    /// newly lit pixels are turned on. Afterwards the assembled frame
    /// becomes the realized one and a fresh empty frame is started.
    ///
    /// Returns the number of hardware writes issued.
    pub fn draw<D: PixelDisplay>(&mut self, display: &mut D) -> usize {
        let mut writes = 0;

        for point in self.front.iter().filter(|p| !self.back.contains(*p)) {
            display.set_pixel(point.x, point.y, false);
            writes += 1;
        }
        for point in self.back.iter().filter(|p| !self.front.contains(*p)) {
            display.set_pixel(point.x, point.y, true);
            writes += 1;
        }

        self.front = core::mem::take(&mut self.back);
        writes
    }

    /// Forget what the hardware shows
    ///
    /// Call after the display was cleared or overwritten behind the
    /// canvas' back, so the next draw lights every declared pixel again.
    pub fn invalidate(&mut self) {
        self.front.clear();
    }

    /// Pixels realized by the last draw
    pub fn front(&self) -> &PixelSet {
        &self.front
    }

    /// Pixels declared for the next draw
    pub fn back(&self) -> &PixelSet {
        &self.back
    }
}
