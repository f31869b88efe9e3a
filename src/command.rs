//! HT1621 command definitions
//!
//! This module defines the command set of the HT1621 segment LCD
//! controller. Commands are sent over the 3-wire bus while CS is low.
//!
//! ## Command Structure
//!
//! Every command frame is 12 bits long:
//! 1. The mode marker `100`
//! 2. An 8-bit command code
//! 3. A don't-care bit (`X`)
//!
//! The frame is padded with four zero bits to fill two bytes, which the
//! chip ignores once CS is released.
//!
//! ## Example
//!
//! ```
//! use ht1621::Command;
//!
//! // 100 0000-0011-X, turn on the LCD bias generator
//! assert_eq!(Command::LcdOn.code(), 0x03);
//! assert_eq!(Command::LcdOn.encode(), [0x80, 0x60]);
//! ```

use crate::config::{Bias, ClockSource, Commons};

/// Mode marker for command frames (`100` in the top three bits)
pub const COMMAND_MODE: u8 = 0b1000_0000;

/// Length in bytes of an encoded command frame
pub const COMMAND_FRAME_LEN: usize = 2;

/// Buzzer tone frequency
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToneFrequency {
    /// 4 kHz tone
    Khz4,
    /// 2 kHz tone
    Khz2,
}

/// Time base clock output frequency
///
/// Also selects the watchdog time-out period (4 s at 1 Hz down to
/// 1/32 s at 128 Hz).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(u8)]
pub enum TimebaseFrequency {
    /// 1 Hz, WDT time-out after 4 s
    Hz1 = 0,
    /// 2 Hz, WDT time-out after 2 s
    Hz2 = 1,
    /// 4 Hz, WDT time-out after 1 s
    Hz4 = 2,
    /// 8 Hz, WDT time-out after 1/2 s
    Hz8 = 3,
    /// 16 Hz, WDT time-out after 1/4 s
    Hz16 = 4,
    /// 32 Hz, WDT time-out after 1/8 s
    Hz32 = 5,
    /// 64 Hz, WDT time-out after 1/16 s
    Hz64 = 6,
    /// 128 Hz, WDT time-out after 1/32 s
    Hz128 = 7,
}

/// HT1621 command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Turn off both system oscillator and LCD bias generator
    SystemDisable,
    /// Turn on system oscillator
    SystemEnable,
    /// Turn off LCD bias generator
    LcdOff,
    /// Turn on LCD bias generator
    LcdOn,
    /// Disable time base output
    TimebaseDisable,
    /// Disable WDT time-out flag output
    WatchdogDisable,
    /// Enable time base output
    TimebaseEnable,
    /// Enable WDT time-out flag output
    WatchdogEnable,
    /// Turn off tone outputs
    ToneOff,
    /// Turn on tone outputs
    ToneOn,
    /// Clear the contents of the time base generator
    ClearTimebase,
    /// Clear the contents of the WDT stage
    ClearWatchdog,
    /// Select the system clock source
    ClockSource(ClockSource),
    /// Select LCD bias and number of commons
    BiasCommons(Bias, Commons),
    /// Select the tone frequency
    ToneFrequency(ToneFrequency),
    /// Disable IRQ output
    IrqDisable,
    /// Enable IRQ output
    IrqEnable,
    /// Select the time base / WDT clock frequency
    TimebaseFrequency(TimebaseFrequency),
    /// Test mode, factory use only
    TestMode,
    /// Normal mode
    NormalMode,
}

impl Command {
    /// 8-bit command code (the 9-bit command without its don't-care bit)
    pub const fn code(self) -> u8 {
        match self {
            Self::SystemDisable => 0x00,
            Self::SystemEnable => 0x01,
            Self::LcdOff => 0x02,
            Self::LcdOn => 0x03,
            Self::TimebaseDisable => 0x04,
            Self::WatchdogDisable => 0x05,
            Self::TimebaseEnable => 0x06,
            Self::WatchdogEnable => 0x07,
            Self::ToneOff => 0x08,
            Self::ToneOn => 0x09,
            Self::ClearTimebase => 0x0C,
            Self::ClearWatchdog => 0x0E,
            Self::ClockSource(ClockSource::Crystal32k) => 0x14,
            Self::ClockSource(ClockSource::Rc256k) => 0x18,
            Self::ClockSource(ClockSource::External256k) => 0x1C,
            // 0010-abX c: ab = commons, c = bias
            Self::BiasCommons(bias, commons) => 0x20 | ((commons as u8) << 2) | bias as u8,
            Self::ToneFrequency(ToneFrequency::Khz4) => 0x40,
            Self::ToneFrequency(ToneFrequency::Khz2) => 0x60,
            Self::IrqDisable => 0x80,
            Self::IrqEnable => 0x88,
            Self::TimebaseFrequency(freq) => 0xA0 | freq as u8,
            Self::TestMode => 0xE0,
            Self::NormalMode => 0xE3,
        }
    }

    /// Encode the command into its 2-byte wire frame
    ///
    /// Byte 0 holds the `100` marker and the top five code bits, byte 1
    /// the remaining three code bits followed by the don't-care bit and
    /// four zero padding bits.
    pub const fn encode(self) -> [u8; COMMAND_FRAME_LEN] {
        let code = self.code();
        [COMMAND_MODE | (code >> 3), code << 5]
    }
}
