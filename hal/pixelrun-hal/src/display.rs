//! Pixel matrix display abstraction
//!
//! The display is a small single-bit LED matrix. Pixels are addressed by
//! column `x` (0 at the left) and row `y` (0 at the top). Drivers ignore
//! writes outside the matrix.

/// Matrix width in pixels
pub const DISPLAY_WIDTH: i32 = 16;

/// Matrix height in pixels
pub const DISPLAY_HEIGHT: i32 = 8;

/// Single-bit pixel display
///
/// Writes are comparatively slow on the target hardware, so callers are
/// expected to touch only pixels whose state actually changes.
pub trait PixelDisplay {
    /// Light or clear one pixel
    fn set_pixel(&mut self, x: i32, y: i32, on: bool);

    /// Turn every pixel off
    fn clear(&mut self);

    /// Show text (a word or a number)
    ///
    /// When `wait` is true the call blocks until the text has finished
    /// scrolling.
    fn show(&mut self, text: &str, wait: bool);

    /// Show a full-screen bitmap
    ///
    /// `hex` is a fixed-length hexadecimal string; each digit encodes four
    /// pixels of the matrix.
    fn show_image(&mut self, hex: &str);
}

impl<D: PixelDisplay + ?Sized> PixelDisplay for &mut D {
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        D::set_pixel(self, x, y, on)
    }

    fn clear(&mut self) {
        D::clear(self)
    }

    fn show(&mut self, text: &str, wait: bool) {
        D::show(self, text, wait)
    }

    fn show_image(&mut self, hex: &str) {
        D::show_image(self, hex)
    }
}
