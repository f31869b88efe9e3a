//! Property tests for command framing, the write shifter and the setters

use ht1621::command::{COMMAND_MODE, Command};
use ht1621::frame::{WRITE_HEADER, shift_for_write};
use ht1621::{Bias, ClockSource, Commons, Layout, SegmentBuffer, TimebaseFrequency, ToneFrequency};
use proptest::prelude::*;
use proptest::sample::select;

fn any_command() -> impl Strategy<Value = Command> {
    let simple = select(vec![
        Command::SystemDisable,
        Command::SystemEnable,
        Command::LcdOff,
        Command::LcdOn,
        Command::TimebaseDisable,
        Command::WatchdogDisable,
        Command::TimebaseEnable,
        Command::WatchdogEnable,
        Command::ToneOff,
        Command::ToneOn,
        Command::ClearTimebase,
        Command::ClearWatchdog,
        Command::ClockSource(ClockSource::Crystal32k),
        Command::ClockSource(ClockSource::Rc256k),
        Command::ClockSource(ClockSource::External256k),
        Command::ToneFrequency(ToneFrequency::Khz4),
        Command::ToneFrequency(ToneFrequency::Khz2),
        Command::IrqDisable,
        Command::IrqEnable,
        Command::TestMode,
        Command::NormalMode,
    ]);
    let bias = (
        select(vec![Bias::Half, Bias::Third]),
        select(vec![Commons::Two, Commons::Three, Commons::Four]),
    )
        .prop_map(|(bias, commons)| Command::BiasCommons(bias, commons));
    let timebase = select(vec![
        TimebaseFrequency::Hz1,
        TimebaseFrequency::Hz2,
        TimebaseFrequency::Hz4,
        TimebaseFrequency::Hz8,
        TimebaseFrequency::Hz16,
        TimebaseFrequency::Hz32,
        TimebaseFrequency::Hz64,
        TimebaseFrequency::Hz128,
    ])
    .prop_map(Command::TimebaseFrequency);
    prop_oneof![simple, bias, timebase]
}

/// Reassemble the wire bitstream as a big-endian integer
fn bits(frame: &[u8]) -> u128 {
    frame
        .iter()
        .fold(0u128, |acc, byte| (acc << 8) | u128::from(*byte))
}

proptest! {
    #[test]
    fn command_frame_layout(command in any_command()) {
        let code = command.code();
        let frame = command.encode();
        prop_assert_eq!(frame[0], COMMAND_MODE | (code >> 3));
        prop_assert_eq!(frame[1], code << 5);
        // 100 CCCCCCCC X 0000
        let word = u16::from_be_bytes(frame);
        prop_assert_eq!(word >> 13, 0b100);
        prop_assert_eq!((word >> 5) & 0xFF, u16::from(code));
        prop_assert_eq!(word & 0x1F, 0);
    }

    // 15 positions plus the trailer fill the 128 bits of `bits`
    #[test]
    fn write_frame_is_buffer_shifted_by_one_bit(
        positions in proptest::collection::vec(any::<u8>(), 2..=15),
    ) {
        let mut frame = vec![0u8; positions.len() + 2];
        frame[1..=positions.len()].copy_from_slice(&positions);
        let data = bits(&frame[1..]);

        shift_for_write(&mut frame);

        prop_assert_eq!(frame[0], WRITE_HEADER);
        prop_assert_eq!(frame[1] & 0x80, 0);
        prop_assert_eq!(bits(&frame[1..]), data >> 1);
    }

    #[test]
    fn setters_out_of_range_are_noops(
        digits in 2u8..=16,
        offset in 0u8..=200,
        value in any::<u8>(),
        dot in any::<bool>(),
        clock in any::<bool>(),
    ) {
        let glyphs = if clock { Layout::Clock.glyphs() } else { Layout::Generic.glyphs() };
        let seg = digits.saturating_add(offset);
        let mut buffer = SegmentBuffer::new(digits);
        buffer.set_raw(0, 0x5A);
        let before = buffer.clone();

        buffer.set_digit(glyphs, seg, value, dot);
        buffer.set_char(glyphs, seg, value, dot);
        buffer.set_raw(seg, value);

        prop_assert_eq!(buffer, before);
    }

    #[test]
    fn invalid_glyph_values_are_noops(
        seg in 0u8..16,
        digit in 16u8..,
        sym in prop_oneof![0u8..40, 96u8..],
    ) {
        let glyphs = Layout::Generic.glyphs();
        let mut buffer = SegmentBuffer::new(16);
        buffer.set_raw(seg, 0xA5);
        let before = buffer.clone();

        buffer.set_digit(glyphs, seg, digit, true);
        buffer.set_char(glyphs, seg, sym, true);

        prop_assert_eq!(buffer, before);
    }
}
