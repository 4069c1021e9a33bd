//! Integer pixel coordinates

/// A pixel on the matrix
///
/// Points are throwaway snapshots: the canvas stores them by value and
/// compares them by `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point from integer coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from real coordinates, truncating toward negative
    /// infinity
    pub fn from_real(x: f32, y: f32) -> Self {
        Self::new(floor_to_i32(x), floor_to_i32(y))
    }
}

/// Truncate toward negative infinity
///
/// `f32::floor` lives in std, so the rounding is done by hand: `as`
/// truncates toward zero (saturating at the `i32` range), which is one
/// too high for negative non-integers. Values beyond the `i32` range
/// clamp to `i32::MIN` / `i32::MAX`.
pub fn floor_to_i32(value: f32) -> i32 {
    let truncated = value as i32;
    if (truncated as f32) > value {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}
