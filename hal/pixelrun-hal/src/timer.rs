//! Monotonic timer abstraction

/// Monotonic millisecond clock
///
/// The counter wraps at `u32::MAX`; consumers compute deltas with
/// `wrapping_sub`.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        C::now_ms(self)
    }
}

/// Elapsed seconds between two clock samples, tolerating wrap-around
pub fn elapsed_secs(earlier_ms: u32, later_ms: u32) -> f32 {
    later_ms.wrapping_sub(earlier_ms) as f32 / 1000.0
}
