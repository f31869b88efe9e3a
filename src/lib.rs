//! HT1621 Segment LCD Driver
//!
//! A driver for the HT1621 RAM-mapped LCD controller driving numeric and
//! alphanumeric segment panels with up to 16 positions.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support (SPI bus or bit-banged GPIO)
//! - Generic and 4-digit clock panel wirings
//! - Decimal, hexadecimal, text, raw, clock and date rendering
//! - Battery indicator support
//! - Full HT1621 command set
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use ht1621::{Builder, Display, Interface, Layout};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let spi = MockSpi;
//! # let cs = MockPin;
//! let interface = Interface::new(spi, cs);
//! let config = Builder::new().layout(Layout::Clock).build();
//!
//! let mut display = Display::new(interface, config);
//! if display.init(4).is_err() {
//!     return;
//! }
//! let _ = display.render_clock(12, 34, true);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Segment buffer with bounds-checked setters
pub mod buffer;
/// HT1621 command definitions
pub mod command;
/// Driver configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Display data write framing
pub mod frame;
/// Segment glyph tables
pub mod glyphs;
/// Hardware interface abstraction
pub mod interface;

pub use buffer::SegmentBuffer;
pub use command::{Command, TimebaseFrequency, ToneFrequency};
pub use config::{
    Bias, Builder, ClockSource, Commons, Config, DEFAULT_COMMAND_TIMEOUT_MS,
    DEFAULT_WRITE_TIMEOUT_MS, Layout, MAX_DIGITS, MIN_DIGITS,
};
pub use display::Display;
pub use error::Error;
pub use glyphs::GlyphSet;
pub use interface::{BitBangInterface, DEFAULT_HALF_PERIOD_NS, DisplayInterface, Interface};
pub use interface::InterfaceError;
