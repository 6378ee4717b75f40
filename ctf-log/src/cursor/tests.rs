//! Tests for the bit cursor

use super::*;
use crate::test_utils::BitWriter;

#[test]
fn test_read_bit_msb_first() {
    let data = [0b1010_0001u8];
    let mut cursor = BitCursor::new(&data);
    let bits: Vec<bool> = (0..8).map(|_| cursor.read_bit()).collect();
    assert_eq!(
        bits,
        [true, false, true, false, false, false, false, true]
    );
    assert_eq!(cursor.position(), 8);
}

#[test]
fn test_read_past_end_yields_zero_and_advances() {
    let data = [0xFFu8];
    let mut cursor = BitCursor::new(&data);
    assert_eq!(cursor.read_fixed(8), 0xFF);
    assert!(cursor.is_at_end());

    assert!(!cursor.read_bit());
    assert_eq!(cursor.position(), 9);
    assert_eq!(cursor.read_fixed(7), 0);
    assert_eq!(cursor.position(), 16);
    assert_eq!(cursor.remaining_bits(), 0);
}

#[test]
fn test_end_is_byte_granular() {
    let data = [0x00u8, 0x00];
    let mut cursor = BitCursor::new(&data);
    cursor.read_fixed(9);
    // Bit 9 is inside the last byte
    assert!(!cursor.is_at_end());
    cursor.read_fixed(6);
    assert!(!cursor.is_at_end());
    cursor.read_bit();
    assert!(cursor.is_at_end());
}

#[test]
fn test_empty_buffer_is_at_end() {
    let cursor = BitCursor::new(&[]);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.len_bits(), 0);
}

#[test]
fn test_read_fixed_matches_bit_decomposition() {
    let samples = [0u32, 1, 0x5A5A_5A5A, 0xDEAD_BEEF, u32::MAX, 0x8000_0001];
    for bits in 1..=32u32 {
        for &sample in &samples {
            let value = if bits == 32 {
                sample
            } else {
                sample & ((1 << bits) - 1)
            };
            let mut writer = BitWriter::new();
            writer.fixed(value, bits);
            let data = writer.finish();

            let mut fixed = BitCursor::new(&data);
            assert_eq!(fixed.read_fixed(bits), value, "width {bits}");

            let mut single = BitCursor::new(&data);
            let mut composed = 0u32;
            for _ in 0..bits {
                composed = (composed << 1) | u32::from(single.read_bit());
            }
            assert_eq!(composed, value, "width {bits}");
            assert_eq!(fixed.position(), single.position());
        }
    }
}

#[test]
fn test_read_fixed_zero_width() {
    let data = [0xFFu8];
    let mut cursor = BitCursor::new(&data);
    assert_eq!(cursor.read_fixed(0), 0);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_read_tally() {
    for n in 0..40u32 {
        let mut writer = BitWriter::new();
        writer.tally(n).fixed(1, 1);
        let data = writer.finish();

        let mut cursor = BitCursor::new(&data);
        assert_eq!(cursor.read_tally(), n);
        assert_eq!(cursor.position(), u64::from(n) + 1);
        assert!(cursor.read_bit(), "marker after tally {n}");
    }
}

#[test]
fn test_read_tally_stops_at_end() {
    let data = [0xFFu8];
    let mut cursor = BitCursor::new(&data);
    assert_eq!(cursor.read_tally(), 8);
    assert_eq!(cursor.position(), 9);
}

#[test]
fn test_footer_aligned_start() {
    // Aligned: size class 0 leaves 6 free bits
    let data = [0b00_101010u8];
    let mut cursor = BitCursor::new(&data);
    assert_eq!(cursor.read_footer(), 42);
    assert_eq!(cursor.position(), 8);

    // Class 1 with 6 free bits: 14 payload bits on top of a bias of 64
    let data = [0b01_000000u8, 0b0000_0001];
    let mut cursor = BitCursor::new(&data);
    assert_eq!(cursor.read_footer(), 65);
    assert_eq!(cursor.position(), 16);
}

#[test]
fn test_footer_with_no_free_bits() {
    // Six bits consumed, size class 0 lands exactly on the boundary
    let data = [0b000000_00u8];
    let mut cursor = BitCursor::new(&data);
    cursor.read_fixed(6);
    assert_eq!(cursor.read_footer(), 0);
    assert_eq!(cursor.position(), 8);

    // Class 1 from the same spot: one full byte, bias of 1
    let data = [0b000000_01u8, 0xFF];
    let mut cursor = BitCursor::new(&data);
    cursor.read_fixed(6);
    assert_eq!(cursor.read_footer(), 256);
    assert_eq!(cursor.position(), 16);
}

#[test]
fn test_footer_classes_are_contiguous() {
    for free in 0..8u32 {
        let mut previous_max: Option<u64> = None;
        for class in 0..4u32 {
            let size = class * 8 + free;
            let minimum = u64::from(footer_minimum(free, size));
            let maximum = minimum + (1u64 << size) - 1;
            if let Some(previous) = previous_max {
                assert_eq!(previous + 1, minimum, "free {free} class {class}");
            } else {
                assert_eq!(minimum, 0);
            }
            previous_max = Some(maximum);
        }
    }
}

#[test]
fn test_footer_leaves_cursor_aligned() {
    let values = [0u32, 1, 3, 127, 128, 255, 256, 65_535, 70_000, 16_777_216];
    for lead in 0..8u32 {
        for &value in &values {
            let mut writer = BitWriter::new();
            writer.fixed(0, lead).footer(value).fixed(0b1011, 4);
            let data = writer.finish();

            let mut cursor = BitCursor::new(&data);
            cursor.read_fixed(lead);
            assert_eq!(cursor.read_footer(), value, "lead {lead}");
            assert!(cursor.is_aligned(), "lead {lead} value {value}");
            assert_eq!(cursor.read_fixed(4), 0b1011);
        }
    }
}

#[test]
fn test_footer_maximum_value() {
    // Seven-bit lead plus the size class leaves 7 free bits: 31 payload bits
    let mut writer = BitWriter::new();
    writer.fixed(0, 7).fixed(3, 2).fixed(u32::MAX >> 1, 31);
    let data = writer.finish();

    let mut cursor = BitCursor::new(&data);
    cursor.read_fixed(7);
    let expected = (u32::MAX >> 1) + (1 << 7) + (1 << 15) + (1 << 23);
    assert_eq!(cursor.read_footer(), expected);
    assert!(cursor.is_aligned());
}

#[test]
fn test_footer_past_end_reads_zero() {
    let mut cursor = BitCursor::new(&[]);
    assert_eq!(cursor.read_footer(), 0);
    assert!(cursor.is_aligned());
}
