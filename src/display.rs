//! Core display operations

use log::{debug, trace};

use crate::buffer::SegmentBuffer;
use crate::command::Command;
use crate::config::{Config, Layout, MAX_DIGITS};
use crate::error::Error;
use crate::glyphs::GlyphSet;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Number of positions used by the clock and date layouts
const CLOCK_DIGITS: u8 = 4;

/// Core display driver for HT1621
///
/// Owns the transport and the segment buffer. Renderers clear the buffer,
/// fill it from their input and write it to the chip in one transfer.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Driver configuration
    config: Config,
    /// Segment state for the next write
    buffer: SegmentBuffer,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The display assumes the full 16 positions until [`Display::init`]
    /// sets the panel size.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            buffer: SegmentBuffer::new(MAX_DIGITS),
        }
    }

    /// Configure the controller and set the number of positions
    ///
    /// Sends bias/commons, clock source, system disable, WDT disable,
    /// system enable and LCD on, then stores `digits` clamped to `2..=16`.
    pub fn init(&mut self, digits: u8) -> DisplayResult<I> {
        self.send_command(Command::BiasCommons(self.config.bias, self.config.commons))?;
        self.send_command(Command::ClockSource(self.config.clock_source))?;
        self.send_command(Command::SystemDisable)?;
        self.send_command(Command::WatchdogDisable)?;
        self.send_command(Command::SystemEnable)?;
        self.send_command(Command::LcdOn)?;

        self.buffer.resize(digits);
        if self.buffer.digits() != digits {
            debug!(
                "ht1621: display size {} clamped to {}",
                digits,
                self.buffer.digits()
            );
        }
        debug!(
            "ht1621: initialized {} positions, {:?} layout",
            self.buffer.digits(),
            self.config.layout
        );
        Ok(())
    }

    /// Turn on the LCD bias generator
    pub fn power_on(&mut self) -> DisplayResult<I> {
        debug!("ht1621: LCD on");
        self.send_command(Command::LcdOn)
    }

    /// Turn off the LCD bias generator
    ///
    /// Display RAM is kept; [`Display::power_on`] shows the same content again.
    pub fn power_off(&mut self) -> DisplayResult<I> {
        debug!("ht1621: LCD off");
        self.send_command(Command::LcdOff)
    }

    /// Send a single command frame
    ///
    /// CS is released even if the transfer fails.
    pub fn send_command(&mut self, command: Command) -> DisplayResult<I> {
        let frame = command.encode();
        trace!("ht1621: command {:?} frame {:02x?}", command, frame);
        self.transfer(&frame, self.config.command_timeout_ms)
    }

    /// Blank every position
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.prepare();
        self.show()
    }

    /// Zero the segment buffer
    pub fn prepare(&mut self) {
        self.buffer.prepare();
    }

    /// Put hex digit `digit` at position `seg` (0 is the rightmost)
    ///
    /// Ignored if `seg` or `digit` is out of range.
    pub fn set_digit(&mut self, seg: u8, digit: u8, dot: bool) {
        let glyphs = self.glyphs();
        self.buffer.set_digit(glyphs, seg, digit, dot);
    }

    /// Put ASCII character `sym` at position `seg`
    ///
    /// Ignored if `seg` is out of range or `sym` is outside `'('..='_'`.
    pub fn set_char(&mut self, seg: u8, sym: u8, dot: bool) {
        let glyphs = self.glyphs();
        self.buffer.set_char(glyphs, seg, sym, dot);
    }

    /// Put a raw segment pattern at position `seg`
    pub fn set_raw(&mut self, seg: u8, raw: u8) {
        self.buffer.set_raw(seg, raw);
    }

    /// Write the segment buffer to the display
    ///
    /// The buffer is rewritten into the wire format in place, so call
    /// [`Display::prepare`] before filling it again.
    pub fn show(&mut self) -> DisplayResult<I> {
        let timeout_ms = self.config.write_timeout_ms;
        let frame = self.buffer.to_write_frame();
        trace!("ht1621: write frame {:02x?}", frame);
        transfer(&mut self.interface, frame, timeout_ms)
    }

    /// Show a signed decimal number
    ///
    /// # Arguments
    ///
    /// * `value` - Number to show, right aligned
    /// * `dec_point` - Position that gets the decimal point; 0 for none
    /// * `leading_zeros` - Pad every position with zeros instead of
    ///   stopping at the most significant digit (ignored for negatives)
    /// * `battery` - Battery level, 0..=3
    pub fn render_decimal(
        &mut self,
        value: i32,
        dec_point: u8,
        leading_zeros: bool,
        battery: u8,
    ) -> DisplayResult<I> {
        self.prepare();
        let glyphs = self.glyphs();
        let digits = self.buffer.digits();
        let negative = value < 0;
        let mut magnitude = value.unsigned_abs();

        for seg in 0..digits {
            self.buffer.set_digit(glyphs, seg, (magnitude % 10) as u8, false);
            magnitude /= 10;
            if magnitude == 0 {
                if negative {
                    self.buffer.set_raw(seg + 1, glyphs.minus());
                    break;
                } else if !leading_zeros {
                    break;
                }
            }
        }

        if dec_point > 0 && dec_point < digits {
            self.buffer.or_raw(dec_point - 1, glyphs.dot());
        }
        self.buffer.set_battery(battery);
        self.show()
    }

    /// Show an unsigned hexadecimal number
    ///
    /// See [`Display::render_decimal`] for `leading_zeros` and `battery`.
    pub fn render_hex(&mut self, value: u32, leading_zeros: bool, battery: u8) -> DisplayResult<I> {
        self.prepare();
        let glyphs = self.glyphs();
        let mut value = value;

        for seg in 0..self.buffer.digits() {
            self.buffer.set_digit(glyphs, seg, (value & 0x0F) as u8, false);
            value >>= 4;
            if value == 0 && !leading_zeros {
                break;
            }
        }

        self.buffer.set_battery(battery);
        self.show()
    }

    /// Show a text, right aligned
    ///
    /// Only the first `digits` bytes are used. Bytes without a glyph
    /// (lowercase, non-ASCII) leave their position blank.
    pub fn render_string(&mut self, text: &str, battery: u8) -> DisplayResult<I> {
        self.prepare();
        let glyphs = self.glyphs();
        let bytes = text.as_bytes();
        let len = bytes.len().min(self.buffer.digits() as usize);

        for (seg, sym) in bytes[..len].iter().rev().enumerate() {
            self.buffer.set_char(glyphs, seg as u8, *sym, false);
        }

        self.buffer.set_battery(battery);
        self.show()
    }

    /// Show raw segment patterns
    ///
    /// Copies `min(count, data.len(), digits)` bytes to positions 0.. without
    /// glyph translation.
    pub fn render_raw(&mut self, data: &[u8], count: usize) -> DisplayResult<I> {
        self.prepare();
        let count = count.min(self.buffer.digits() as usize);
        for (seg, raw) in data.iter().take(count).enumerate() {
            self.buffer.set_raw(seg as u8, *raw);
        }
        self.show()
    }

    /// Show a time as `HH:MM` on the first four positions
    ///
    /// `separator` lights the colon, which shares its segment bit with the
    /// dot of the rightmost position.
    pub fn render_clock(&mut self, hours: u8, minutes: u8, separator: bool) -> DisplayResult<I> {
        self.prepare();
        self.set_pairs(hours, minutes);
        if separator {
            let dot = self.glyphs().dot();
            self.buffer.or_raw(0, dot);
        }
        self.show()
    }

    /// Show a date as `DD.MM` on the first four positions
    pub fn render_date(&mut self, day: u8, month: u8) -> DisplayResult<I> {
        self.prepare();
        self.set_pairs(day, month);
        let dot = self.glyphs().dot();
        self.buffer.or_raw(2, dot);
        self.show()
    }

    /// Place two 2-digit numbers, `high` on the left and `low` on the right
    fn set_pairs(&mut self, high: u8, low: u8) {
        let glyphs = self.glyphs();
        let values = [low % 10, low / 10, high % 10, high / 10];
        for (seg, value) in (0..CLOCK_DIGITS).zip(values) {
            self.buffer.set_digit(glyphs, seg, value, false);
        }
    }

    /// Current segment buffer, including header and trailer bytes
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Number of display positions
    pub fn digits(&self) -> u8 {
        self.buffer.digits()
    }

    /// Panel wiring in use
    pub fn layout(&self) -> Layout {
        self.config.layout
    }

    /// Driver configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the hardware interface
    pub fn release(self) -> I {
        self.interface
    }

    fn glyphs(&self) -> &'static GlyphSet {
        self.config.layout.glyphs()
    }

    fn transfer(&mut self, bytes: &[u8], timeout_ms: u32) -> DisplayResult<I> {
        transfer(&mut self.interface, bytes, timeout_ms)
    }
}

/// Send `bytes` framed by chip-select
///
/// CS is released even when the transfer fails; the transfer error wins.
fn transfer<I: DisplayInterface>(
    interface: &mut I,
    bytes: &[u8],
    timeout_ms: u32,
) -> DisplayResult<I> {
    interface.select(true).map_err(Error::Interface)?;
    let sent = interface.transmit(bytes, timeout_ms);
    let released = interface.select(false);
    sent.map_err(Error::Interface)?;
    released.map_err(Error::Interface)
}
