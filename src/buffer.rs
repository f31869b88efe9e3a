//! Segment buffer
//!
//! The buffer mirrors the HT1621 display RAM as one byte per position,
//! framed by a reserved header byte and a zero trailer:
//!
//! | Index | Content |
//! |-------|---------|
//! | 0 | command/address header, rewritten on every write |
//! | 1..=digits | segment pattern of position `index - 1` |
//! | digits + 1 | trailer, receives the bits shifted out of the last position |

use crate::config::{MAX_DIGITS, clamp_digits};
use crate::frame::shift_for_write;
use crate::glyphs::{BATTERY_MASK, GlyphSet, MAX_BATTERY_LEVEL};

const CAPACITY: usize = MAX_DIGITS as usize + 2;

/// Fixed-capacity segment buffer
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentBuffer {
    bytes: [u8; CAPACITY],
    digits: u8,
}

impl Default for SegmentBuffer {
    fn default() -> Self {
        Self::new(MAX_DIGITS)
    }
}

impl SegmentBuffer {
    /// Create a zeroed buffer for `digits` positions (clamped to `2..=16`)
    pub fn new(digits: u8) -> Self {
        Self {
            bytes: [0; CAPACITY],
            digits: clamp_digits(digits),
        }
    }

    /// Number of display positions
    pub fn digits(&self) -> u8 {
        self.digits
    }

    /// Change the number of positions (clamped to `2..=16`) and zero the buffer
    pub fn resize(&mut self, digits: u8) {
        self.digits = clamp_digits(digits);
        self.prepare();
    }

    /// Zero the header, every position and the trailer
    pub fn prepare(&mut self) {
        self.as_mut_slice().fill(0);
    }

    /// Header, positions and trailer (`digits + 2` bytes)
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.bytes[..len]
    }

    /// Length of the framed buffer in bytes
    pub fn len(&self) -> usize {
        self.digits as usize + 2
    }

    /// Always false; the buffer holds at least two positions
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Pattern at position `seg`, if it exists
    pub fn get(&self, seg: u8) -> Option<u8> {
        if seg >= self.digits {
            return None;
        }
        Some(self.bytes[seg as usize + 1])
    }

    /// Store a raw pattern at position `seg`; ignored if out of range
    pub fn set_raw(&mut self, seg: u8, raw: u8) {
        if seg >= self.digits {
            return;
        }
        self.bytes[seg as usize + 1] = raw;
    }

    /// OR bits into position `seg`; ignored if out of range
    pub fn or_raw(&mut self, seg: u8, bits: u8) {
        if seg >= self.digits {
            return;
        }
        self.bytes[seg as usize + 1] |= bits;
    }

    /// Store the glyph of hex digit `digit` at `seg`
    ///
    /// Ignored if `seg` is out of range or `digit > 15`.
    pub fn set_digit(&mut self, glyphs: &GlyphSet, seg: u8, digit: u8, dot: bool) {
        if let Some(pattern) = glyphs.digit(digit) {
            self.set_glyph(glyphs, seg, pattern, dot);
        }
    }

    /// Store the glyph of ASCII code `sym` at `seg`
    ///
    /// Ignored if `seg` is out of range or `sym` is outside `40..=95`.
    pub fn set_char(&mut self, glyphs: &GlyphSet, seg: u8, sym: u8, dot: bool) {
        if let Some(pattern) = glyphs.character(sym) {
            self.set_glyph(glyphs, seg, pattern, dot);
        }
    }

    fn set_glyph(&mut self, glyphs: &GlyphSet, seg: u8, pattern: u8, dot: bool) {
        let pattern = if dot { pattern | glyphs.dot() } else { pattern };
        self.set_raw(seg, pattern);
    }

    /// Light `level` battery segments (clamped to `0..=3`)
    pub fn set_battery(&mut self, level: u8) {
        for seg in 0..level.min(MAX_BATTERY_LEVEL) {
            self.or_raw(seg, BATTERY_MASK);
        }
    }

    /// Rewrite the buffer into a write frame and return it
    ///
    /// The positions hold shifted data afterwards, so the buffer must be
    /// prepared again before new content is placed.
    pub fn to_write_frame(&mut self) -> &[u8] {
        shift_for_write(self.as_mut_slice());
        self.as_slice()
    }
}
