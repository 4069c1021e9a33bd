//! Pixelrun Hardware Abstraction Layer
//!
//! This crate defines the peripheral traits the game core is driven
//! through. A board crate implements them for its display, speaker,
//! buttons and timer, then hands them to the core's tick loop.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Board crate (entry point, drivers)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pixelrun-core (game logic, tick loop)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pixelrun-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Button inputs
//! - [`display::PixelDisplay`] - Single-bit pixel matrix
//! - [`audio::Speaker`] - Named melody playback
//! - [`timer::Clock`] - Monotonic millisecond timer

#![no_std]
#![deny(unsafe_code)]

pub mod audio;
pub mod display;
pub mod gpio;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use audio::Speaker;
pub use display::{PixelDisplay, DISPLAY_HEIGHT, DISPLAY_WIDTH};
pub use gpio::{EmbeddedHalInput, InputPin, Inverted};
pub use timer::Clock;
