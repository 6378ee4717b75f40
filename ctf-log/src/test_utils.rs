//! Shared test utilities for unit tests
//!
//! The crate only decodes, so tests build their input with this MSB-first
//! writer, which mirrors the encoder's codings.

use crate::cursor::BitCursor;

/// MSB-first bit writer producing zero-padded bytes
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    position: u64,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bit(&mut self, bit: bool) -> &mut Self {
        let index = (self.position >> 3) as usize;
        if index == self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[index] |= 0x80 >> (self.position & 7);
        }
        self.position += 1;
        self
    }

    pub fn bits(&mut self, bits: &[u8]) -> &mut Self {
        for &b in bits {
            self.bit(b != 0);
        }
        self
    }

    pub fn fixed(&mut self, value: u32, bits: u32) -> &mut Self {
        for shift in (0..bits).rev() {
            self.bit((value >> shift) & 1 == 1);
        }
        self
    }

    pub fn tally(&mut self, value: u32) -> &mut Self {
        for _ in 0..value {
            self.bit(true);
        }
        self.bit(false)
    }

    /// Write `value` with the smallest footer size class that holds it
    pub fn footer(&mut self, value: u32) -> &mut Self {
        let free = ((8 - ((self.position + 2) & 7)) & 7) as u32;
        let mut minimum = 0u64;
        for class in 0..4u32 {
            let size = class * 8 + free;
            let capacity = 1u64 << size;
            if u64::from(value) < minimum + capacity {
                self.fixed(class, 2);
                return self.fixed((u64::from(value) - minimum) as u32, size);
            }
            minimum += capacity;
        }
        panic!("footer value {value} out of range");
    }

    pub fn finish(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

#[test]
fn test_writer_matches_cursor() {
    let mut writer = BitWriter::new();
    writer.fixed(0b101, 3).tally(4).footer(1000).fixed(0xBEEF, 16);
    let data = writer.finish();

    let mut cursor = BitCursor::new(&data);
    assert_eq!(cursor.read_fixed(3), 0b101);
    assert_eq!(cursor.read_tally(), 4);
    assert_eq!(cursor.read_footer(), 1000);
    assert_eq!(cursor.read_fixed(16), 0xBEEF);
}
