//! Segment glyph tables
//!
//! Each position of the display is driven by one byte of HT1621 RAM. Which
//! bit lights which LCD segment depends on how the panel is wired, so there
//! is one complete [`GlyphSet`] per [`Layout`](crate::Layout).
//!
//! ## Example
//!
//! ```
//! use ht1621::Layout;
//!
//! let glyphs = Layout::Generic.glyphs();
//! assert_eq!(glyphs.digit(8), Some(0b0111_1111));
//! assert_eq!(glyphs.character(b'8'), glyphs.digit(8));
//! assert_eq!(glyphs.digit(16), None);
//! assert_eq!(glyphs.character(b'a'), None);
//! ```

/// First ASCII code covered by the character table (`'('`)
pub const FIRST_CHAR: u8 = 40;

/// Last ASCII code covered by the character table (`'_'`)
pub const LAST_CHAR: u8 = 95;

/// Battery icon segment bit, shared with the first three positions
pub const BATTERY_MASK: u8 = 0x80;

/// Highest battery level the icon can show
pub const MAX_BATTERY_LEVEL: u8 = 3;

const CHAR_COUNT: usize = (LAST_CHAR - FIRST_CHAR + 1) as usize;

/// Glyph lookup tables for one panel wiring
#[derive(Debug, PartialEq)]
pub struct GlyphSet {
    digits: [u8; 16],
    chars: [u8; CHAR_COUNT],
    dot: u8,
    minus: u8,
}

impl GlyphSet {
    /// Pattern for a hex digit `0..=15`
    pub fn digit(&self, value: u8) -> Option<u8> {
        self.digits.get(value as usize).copied()
    }

    /// Pattern for an ASCII code in `FIRST_CHAR..=LAST_CHAR`
    ///
    /// Codes inside the range without a drawable shape map to a blank
    /// pattern; codes outside the range have no pattern at all.
    pub fn character(&self, sym: u8) -> Option<u8> {
        if !(FIRST_CHAR..=LAST_CHAR).contains(&sym) {
            return None;
        }
        self.chars.get((sym - FIRST_CHAR) as usize).copied()
    }

    /// Decimal point (or colon, on the clock panel) segment bit
    pub fn dot(&self) -> u8 {
        self.dot
    }

    /// Minus sign pattern
    pub fn minus(&self) -> u8 {
        self.minus
    }
}

/// Glyphs for the generic numeric panel
#[rustfmt::skip]
pub static GENERIC_GLYPHS: GlyphSet = GlyphSet {
    digits: [
        0b0111_1101, 0b0110_0000, 0b0011_1110, 0b0111_1010, // 0-3
        0b0110_0011, 0b0101_1011, 0b0101_1111, 0b0111_0000, // 4-7
        0b0111_1111, 0b0111_1011, 0b0111_0111, 0b0100_1111, // 8-B
        0b0001_1101, 0b0110_1110, 0b0001_1111, 0b0001_0111, // C-F
    ],
    chars: [
        // '(' ')' '*' '+' ',' '-' '.' '/'
        0, 0, 0, 0, 0b1000_0000, 0b0000_0010, 0b1000_0000, 0,
        // '0'-'7'
        0b0111_1101, 0b0110_0000, 0b0011_1110, 0b0111_1010,
        0b0110_0011, 0b0101_1011, 0b0101_1111, 0b0111_0000,
        // '8' '9' ':' ';' '<' '=' '>' '?'
        0b0111_1111, 0b0111_1011, 0, 0, 0, 0, 0, 0,
        // '@'-'G'
        0, 0b0111_0111, 0b0100_1111, 0b0001_1101,
        0b0110_1110, 0b0001_1111, 0b0001_0111, 0,
        // 'H'-'O'
        0b0110_0111, 0, 0, 0, 0b0000_1101, 0, 0, 0b0111_1101,
        // 'P'-'W'
        0b0011_0111, 0, 0, 0, 0, 0, 0, 0,
        // 'X'-'_'
        0, 0, 0, 0, 0, 0, 0, 0b0000_1000,
    ],
    dot: 0x80,
    minus: 0b0000_0010,
};

/// Glyphs for the four digit clock panel
#[rustfmt::skip]
pub static CLOCK_GLYPHS: GlyphSet = GlyphSet {
    digits: [
        0b1010_1111, 0b1010_0000, 0b1100_1011, 0b1110_1001, // 0-3
        0b1110_0100, 0b0110_1101, 0b0110_1111, 0b1010_1000, // 4-7
        0b1110_1111, 0b1110_1101, 0b1110_1110, 0b0110_0111, // 8-B
        0b0000_1111, 0b1110_0011, 0b0100_1111, 0b0100_1110, // C-F
    ],
    chars: [
        // '(' ')' '*' '+' ',' '-' '.' '/'
        0, 0, 0, 0, 0b0001_0000, 0b0100_0000, 0b0001_0000, 0,
        // '0'-'7'
        0b1010_1111, 0b1010_0000, 0b1100_1011, 0b1110_1001,
        0b1110_0100, 0b0110_1101, 0b0110_1111, 0b1010_1000,
        // '8' '9' ':' ';' '<' '=' '>' '?'
        0b1110_1111, 0b1110_1101, 0, 0, 0, 0, 0, 0,
        // '@'-'G'
        0, 0b1110_1110, 0b0110_0111, 0b0000_1111,
        0b1110_0011, 0b0100_1111, 0b0100_1110, 0,
        // 'H'-'O'
        0b1110_0110, 0, 0, 0, 0b0000_0111, 0, 0, 0b1010_1111,
        // 'P'-'W'
        0b1100_1110, 0, 0, 0, 0, 0, 0, 0,
        // 'X'-'_'
        0, 0, 0, 0, 0, 0, 0, 0b0000_0001,
    ],
    dot: 0x10,
    minus: 0b0100_0000,
};
