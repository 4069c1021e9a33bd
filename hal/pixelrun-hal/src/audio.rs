//! Audio output abstraction

/// Speaker that plays stored melodies by asset name
///
/// Playback is fire-and-forget: the call returns immediately and an
/// unknown asset is the driver's concern.
pub trait Speaker {
    /// Start playing the named melody
    fn play_melody(&mut self, name: &str);
}

impl<S: Speaker + ?Sized> Speaker for &mut S {
    fn play_melody(&mut self, name: &str) {
        S::play_melody(self, name)
    }
}
