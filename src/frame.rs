//! Display data write framing
//!
//! A successive-address write is one continuous bitstream: the `101` write
//! marker, a 6-bit start address, then 8 data bits per position. The segment
//! buffer keeps its data byte-aligned, so before transmission every bit is
//! moved one place to the right to make room for the sixth address bit, and
//! byte 0 is overwritten with the marker and the top five address bits.
//!
//! ```text
//! byte 0      byte 1      byte 2
//! 101 AAAAA   A DDDDDDD   D DDDDDDD ...
//! ```
//!
//! ## Example
//!
//! ```
//! use ht1621::frame::shift_for_write;
//!
//! let mut frame = [0x00, 0xFF, 0x0F, 0x00];
//! shift_for_write(&mut frame);
//! assert_eq!(frame, [0xA0, 0x7F, 0x87, 0x80]);
//! ```

/// Write marker `101` followed by a zero start address
pub const WRITE_HEADER: u8 = 0b1010_0000;

/// Lowest address bit, which lands in the MSB of byte 1
const ADDRESS_LSB: u8 = 0x80;

/// Shift `frame` right by one bit in place and prepend the write header
///
/// Byte 0 of the input is ignored; the last byte should be a zero trailer
/// that receives the bits pushed out of the last position.
pub fn shift_for_write(frame: &mut [u8]) {
    let mut window: u16 = 0;
    for i in (1..frame.len()).rev() {
        window >>= 8;
        window |= u16::from(frame[i - 1]) << 8;
        frame[i] = (window >> 1) as u8;
    }

    if let Some(header) = frame.first_mut() {
        *header = WRITE_HEADER;
    }
    if let Some(first) = frame.get_mut(1) {
        *first &= !ADDRESS_LSB;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_known_vector() {
        let mut frame = [0x00, 0xFF, 0x0F, 0x00];
        shift_for_write(&mut frame);
        assert_eq!(frame, [0xA0, 0x7F, 0x87, 0x80]);
    }

    #[test]
    fn test_shift_carries_lsb_into_next_byte() {
        let mut frame = [0x00, 0x01, 0x00, 0x00];
        shift_for_write(&mut frame);
        assert_eq!(frame, [WRITE_HEADER, 0x00, 0x80, 0x00]);
    }

    #[test]
    fn test_shift_last_position_spills_into_trailer() {
        let mut frame = [0x00, 0x00, 0x03, 0x00];
        shift_for_write(&mut frame);
        assert_eq!(frame, [WRITE_HEADER, 0x00, 0x01, 0x80]);
    }

    #[test]
    fn test_shift_discards_stale_header() {
        let mut frame = [0xFF, 0x00, 0x00, 0x00];
        shift_for_write(&mut frame);
        // Bit 0 of the old header would land in the address bit
        assert_eq!(frame, [WRITE_HEADER, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_shift_full_sixteen_positions() {
        let mut frame = [0xAA_u8; 18];
        frame[0] = 0;
        frame[17] = 0;
        shift_for_write(&mut frame);
        assert_eq!(frame[0], WRITE_HEADER);
        assert_eq!(frame[1], 0x55);
        for byte in &frame[2..17] {
            assert_eq!(*byte, 0x55);
        }
        assert_eq!(frame[17], 0x00);
    }

    #[test]
    fn test_shift_short_frames() {
        let mut empty: [u8; 0] = [];
        shift_for_write(&mut empty);

        let mut single = [0x12];
        shift_for_write(&mut single);
        assert_eq!(single, [WRITE_HEADER]);
    }
}
