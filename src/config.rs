//! Display configuration types and builder

use crate::glyphs::{CLOCK_GLYPHS, GENERIC_GLYPHS, GlyphSet};

/// Smallest number of digit positions a display can be configured with
pub const MIN_DIGITS: u8 = 2;

/// Largest number of digit positions the HT1621 RAM can hold (32x4 bits)
pub const MAX_DIGITS: u8 = 16;

/// Default transmit timeout for 2-byte command frames in milliseconds
pub const DEFAULT_COMMAND_TIMEOUT_MS: u32 = 100;

/// Default transmit timeout for full display writes in milliseconds
pub const DEFAULT_WRITE_TIMEOUT_MS: u32 = 500;

/// Physical wiring of the LCD panel segments to the HT1621 outputs
///
/// The wiring decides which bit of a position byte lights which segment,
/// so each layout carries its own glyph tables.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Layout {
    /// Generic numeric panel, one decimal point per digit
    #[default]
    Generic,
    /// Four digit "clock" panel with a colon in the middle
    Clock,
}

impl Layout {
    /// Glyph tables matching this wiring
    pub fn glyphs(self) -> &'static GlyphSet {
        match self {
            Self::Generic => &GENERIC_GLYPHS,
            Self::Clock => &CLOCK_GLYPHS,
        }
    }
}

/// LCD bias ratio
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum Bias {
    /// 1/2 bias
    Half = 0b0,
    /// 1/3 bias
    #[default]
    Third = 0b1,
}

/// Number of common (backplane) electrodes driven by the chip
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum Commons {
    /// COM0-COM1
    Two = 0b00,
    /// COM0-COM2
    Three = 0b01,
    /// COM0-COM3
    #[default]
    Four = 0b10,
}

/// System clock source
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ClockSource {
    /// External 32.768 kHz crystal
    Crystal32k,
    /// On-chip 256 kHz RC oscillator
    #[default]
    Rc256k,
    /// External 256 kHz clock on the OSCI pin
    External256k,
}

/// Driver configuration
///
/// Use [`Builder`] to create a `Config`.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Panel wiring (selects the glyph tables)
    pub layout: Layout,
    /// LCD bias ratio sent during init
    pub bias: Bias,
    /// Number of commons sent during init
    pub commons: Commons,
    /// Oscillator selected during init
    pub clock_source: ClockSource,
    /// Timeout for command frames in milliseconds
    pub command_timeout_ms: u32,
    /// Timeout for display data writes in milliseconds
    pub write_timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing driver configuration
///
/// # Example
///
/// ```
/// use ht1621::{Builder, Layout};
///
/// let config = Builder::new().layout(Layout::Clock).build();
/// assert_eq!(config.layout, Layout::Clock);
/// assert_eq!(config.write_timeout_ms, 500);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    layout: Layout,
    bias: Bias,
    commons: Commons,
    clock_source: ClockSource,
    command_timeout_ms: Option<u32>,
    write_timeout_ms: Option<u32>,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel wiring
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the LCD bias ratio
    pub fn bias(mut self, bias: Bias) -> Self {
        self.bias = bias;
        self
    }

    /// Set the number of commons
    pub fn commons(mut self, commons: Commons) -> Self {
        self.commons = commons;
        self
    }

    /// Set the system clock source
    pub fn clock_source(mut self, source: ClockSource) -> Self {
        self.clock_source = source;
        self
    }

    /// Set the command frame timeout in milliseconds
    pub fn command_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.command_timeout_ms = Some(timeout_ms);
        self
    }

    /// Set the display write timeout in milliseconds
    pub fn write_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.write_timeout_ms = Some(timeout_ms);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            layout: self.layout,
            bias: self.bias,
            commons: self.commons,
            clock_source: self.clock_source,
            command_timeout_ms: self
                .command_timeout_ms
                .unwrap_or(DEFAULT_COMMAND_TIMEOUT_MS),
            write_timeout_ms: self.write_timeout_ms.unwrap_or(DEFAULT_WRITE_TIMEOUT_MS),
        }
    }
}

/// Clamp a requested digit count into `[MIN_DIGITS, MAX_DIGITS]`
pub fn clamp_digits(requested: u8) -> u8 {
    requested.clamp(MIN_DIGITS, MAX_DIGITS)
}
