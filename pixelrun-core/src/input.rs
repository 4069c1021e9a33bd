//! Button input handling
//!
//! Movement buttons are read as levels: holding duck keeps the runner
//! ducked. The start button is read through an [`EdgeButton`] so a single
//! press toggles pause exactly once, no matter how long it is held.
//! [`Buttons`] samples all three once per tick.

use pixelrun_hal::InputPin;

/// Rising-edge detector around a button pin
///
/// [`EdgeButton::update`] must be called exactly once per tick, before
/// anything reads the button. Updating twice in one tick swallows the
/// edge; skipping a tick may report a stale one.
pub struct EdgeButton<P> {
    pin: P,
    pressed: bool,
    just_pressed: bool,
}

impl<P: InputPin> EdgeButton<P> {
    /// Wrap a pin, sampling its current level
    ///
    /// A button already held at construction does not count as a press.
    pub fn new(mut pin: P) -> Self {
        let pressed = pin.is_high();
        Self {
            pin,
            pressed,
            just_pressed: false,
        }
    }

    /// Sample the pin once for this tick
    pub fn update(&mut self) {
        let pressed = self.pin.is_high();
        self.just_pressed = pressed && !self.pressed;
        self.pressed = pressed;
    }

    /// Level seen by the last update
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// True only on the tick the button went from released to pressed
    pub fn was_just_pressed(&self) -> bool {
        self.just_pressed
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

/// Movement buttons sampled for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controls {
    /// Duck button held
    pub duck: bool,
    /// Jump button held
    pub jump: bool,
}

impl Controls {
    /// Read both movement pins
    pub fn sample<P: InputPin>(duck: &mut P, jump: &mut P) -> Self {
        Self {
            duck: duck.is_high(),
            jump: jump.is_high(),
        }
    }

    /// Either movement button is held
    pub fn any(&self) -> bool {
        self.duck || self.jump
    }
}

/// The three game buttons
pub struct Buttons<P> {
    /// Duck (held)
    pub duck: P,
    /// Jump (held)
    pub jump: P,
    /// Start / pause (edge triggered)
    pub start: EdgeButton<P>,
}

impl<P: InputPin> Buttons<P> {
    /// Bundle the button pins
    pub fn new(duck: P, jump: P, start: P) -> Self {
        Self {
            duck,
            jump,
            start: EdgeButton::new(start),
        }
    }

    /// Advance the start button's edge detector and read the movement
    /// buttons for this tick
    pub fn update(&mut self) -> Controls {
        self.start.update();
        Controls::sample(&mut self.duck, &mut self.jump)
    }
}
