//! Lane selection randomness
//!
//! Obstacles pick one of two lanes uniformly. The source is a trait so
//! boards can feed a hardware RNG and tests can script the sequence.

/// Source of random bits for lane selection
pub trait LaneRng {
    /// Next pseudo-random 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Pick one of two choices with equal probability
    fn coin_flip(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

/// Marsaglia xorshift32 generator
///
/// Small, allocation-free and good enough for a coin flip. The state must
/// never be zero, so a zero seed is replaced with a fixed constant.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Replacement for a zero seed
    pub const DEFAULT_SEED: u32 = 0x2545_F491;

    /// Create a generator from a seed
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { Self::DEFAULT_SEED } else { seed };
        Self { state }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl LaneRng for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    // Low bits of xorshift are weak; use the top bit
    fn coin_flip(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence() {
        let mut rng = XorShift32::new(1);
        assert_eq!(rng.next_u32(), 270_369);
        assert_eq!(rng.next_u32(), 67_634_689);
    }

    #[test]
    fn test_zero_seed_is_replaced() {
        let mut zero = XorShift32::new(0);
        let mut default = XorShift32::default();
        assert_ne!(zero.next_u32(), 0);
        assert_eq!(zero.next_u32(), {
            default.next_u32();
            default.next_u32()
        });
    }

    #[test]
    fn test_coin_flip_hits_both_sides() {
        let mut rng = XorShift32::new(42);
        let heads = (0..1000).filter(|_| rng.coin_flip()).count();
        assert!(heads > 400 && heads < 600, "heads = {heads}");
    }
}
