//! Fixed-size bit array backing the Bloom filter
//!
//! Backed by a `BitVec<u8>`: bit `x` lives in byte `x >> 3` under mask
//! `1 << (x % 8)`, so the byte layout is LSB-first and independent of the host.

use bit_vec::BitVec;

/// An owned, zero-initialized bit array that never changes size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    bits: BitVec<u8>,
}

impl BitArray {
    /// Allocate a zeroed array of `bytes` bytes
    pub fn zeroed(bytes: usize) -> Self {
        let mut bits = BitVec::default();
        bits.grow(bytes << 3, false);
        BitArray { bits }
    }

    /// Returns `true` if bit `x` is set.
    ///
    /// Panics if `x >= self.bits()`.
    #[inline]
    pub fn test(&self, x: usize) -> bool {
        match self.bits.get(x) {
            Some(bit) => bit,
            None => panic!("bit index {} out of range for {} bits", x, self.bits.len()),
        }
    }

    /// Sets bit `x` and returns whether it was already set before the call.
    ///
    /// Panics if `x >= self.bits()`.
    #[inline]
    pub fn test_and_set(&mut self, x: usize) -> bool {
        if self.test(x) {
            return true;
        }
        self.bits.set(x, true);
        false
    }

    /// Reset every bit to zero, keeping the length
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Number of addressable bits, always `bytes * 8`
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Size of the backing buffer in bytes
    pub fn len_bytes(&self) -> usize {
        self.bits.storage().len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bits.storage()
    }

    pub fn count_ones(&self) -> usize {
        self.as_bytes().iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn count_zeros(&self) -> usize {
        self.bits() - self.count_ones()
    }
}
