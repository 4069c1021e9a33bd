//! GPIO input abstractions
//!
//! Buttons are read as plain digital inputs. A pressed button reads high;
//! active-low wiring is handled with [`Inverted`].

/// Digital input pin
///
/// Implementations read the pin level from the chip. Reads take `&mut self`
/// so that pins from embedded-hal 1.0 can be wrapped without interior
/// mutability.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

impl<P: InputPin + ?Sized> InputPin for &mut P {
    fn is_high(&mut self) -> bool {
        P::is_high(self)
    }
}

/// Active-low input
///
/// Buttons wired to ground with a pull-up read low when pressed.
/// Wrapping the pin flips the level so the rest of the code can treat
/// high as pressed.
pub struct Inverted<P> {
    pin: P,
}

impl<P: InputPin> Inverted<P> {
    /// Wrap an active-low pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> InputPin for Inverted<P> {
    fn is_high(&mut self) -> bool {
        self.pin.is_low()
    }
}

/// Adapter for embedded-hal 1.0 input pins
///
/// A failed read is reported as low, so a flaky button reads as released.
pub struct EmbeddedHalInput<P> {
    pin: P,
}

impl<P: embedded_hal::digital::InputPin> EmbeddedHalInput<P> {
    /// Wrap an embedded-hal input pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::InputPin> InputPin for EmbeddedHalInput<P> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }
}
