//! Bit-granular reader shared by every log decoder
//!
//! Bits are read most-significant first within each byte. The end of the
//! buffer is judged by byte index, not bit index: once `position >> 3`
//! reaches the buffer length every further read yields zero while the
//! position keeps advancing.
//!
//! # Integer codings
//!
//! ```text
//! fixed(n)  n bits, MSB first
//! tally     n one-bits then a zero bit           (n+1 bits for value n)
//! footer    2-bit size class c, then c*8 + free bits, where free is the
//!           number of bits left in the current byte after the size class;
//!           biased so each class covers its own disjoint range
//! ```

/// Read position over an immutable byte buffer
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    position: u64,
}

impl<'a> BitCursor<'a> {
    /// Create a cursor positioned at the first bit of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current bit offset from the start of the buffer
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Buffer length in bits
    pub fn len_bits(&self) -> u64 {
        self.data.len() as u64 * 8
    }

    /// Bits left before the logical end (zero once past it)
    pub fn remaining_bits(&self) -> u64 {
        self.len_bits().saturating_sub(self.position)
    }

    /// Whether the position sits on a byte boundary
    pub fn is_aligned(&self) -> bool {
        self.position & 7 == 0
    }

    /// Whether the byte holding the current position lies past the buffer
    #[inline]
    pub fn is_at_end(&self) -> bool {
        (self.position >> 3) >= self.data.len() as u64
    }

    /// Read one bit, or zero past the end
    #[inline]
    pub fn read_bit(&mut self) -> bool {
        let bit = match self.data.get((self.position >> 3) as usize) {
            Some(byte) => (byte >> (7 - (self.position & 7))) & 1 == 1,
            None => false,
        };
        self.position += 1;
        bit
    }

    /// Read `bits` bits (at most 32) as an unsigned integer, MSB first
    pub fn read_fixed(&mut self, bits: u32) -> u32 {
        debug_assert!(bits <= 32, "read_fixed supports at most 32 bits");
        let mut result = 0u32;
        for _ in 0..bits {
            result = (result << 1) | u32::from(self.read_bit());
        }
        result
    }

    /// Read a unary code: the number of one-bits before the first zero
    pub fn read_tally(&mut self) -> u32 {
        let mut result = 0;
        while self.read_bit() {
            result += 1;
        }
        result
    }

    /// Read a footer code, leaving the cursor byte-aligned
    ///
    /// The size class is read first; the free bits are counted from the
    /// position after it. Class `c` stores `c * 8 + free` bits on top of the
    /// sum of every smaller class's capacity, so the classes never overlap.
    pub fn read_footer(&mut self) -> u32 {
        let class = self.read_fixed(2);
        let free = footer_free_bits(self.position);
        let size = class * 8 + free;
        self.read_fixed(size) + footer_minimum(free, size)
    }
}

/// Bits left in the current byte, zero when aligned
fn footer_free_bits(position: u64) -> u32 {
    ((8 - (position & 7)) & 7) as u32
}

/// Smallest value a footer of `size` payload bits can hold
fn footer_minimum(free: u32, size: u32) -> u32 {
    let mut minimum = 0;
    let mut width = free;
    while width < size {
        minimum += 1 << width;
        width += 8;
    }
    minimum
}

#[cfg(test)]
mod tests;
