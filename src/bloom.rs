//! Standard Bloom filter implementation
//!
//! A space-efficient probabilistic data structure for membership testing over
//! byte-string keys. Answers are either "possibly present" or "definitely
//! absent"; a key that was inserted is never reported absent.

use crate::bit_array::BitArray;
use crate::error::{BloomError, Result};
use crate::hash::{KeyHasher, Murmur2};
use tracing::debug;

/// Seed of the first hash evaluation. The second evaluation is seeded with
/// the output of the first.
pub const SEED: u32 = 0x9747b28c;

/// Largest buffer whose bit positions fit both the 32-bit probe arithmetic
/// and `usize`
const MAX_BYTES: usize = {
    let probe_limit = 1 << 29;
    let index_limit = usize::MAX >> 3;
    if probe_limit < index_limit {
        probe_limit
    } else {
        index_limit
    }
};

/// A standard Bloom filter
///
/// Probe positions follow Kirsch–Mitzenmacher double hashing:
/// `x_i = (a + i * b) mod bits` where `a = hash(key, SEED)` and
/// `b = hash(key, a)`.
///
/// # Examples
///
/// ```
/// use murmur_bloom::BloomFilter;
///
/// let mut filter = BloomFilter::new(16, 3).unwrap();
///
/// assert!(!filter.contains(b"alpha"));
/// filter.insert(b"alpha");
/// assert!(filter.contains(b"alpha"));
///
/// filter.clear();
/// assert!(!filter.contains(b"alpha"));
/// assert_eq!(filter.bits(), 128);
/// ```
#[derive(Debug, Clone)]
pub struct BloomFilter<H = Murmur2> {
    /// Bit array storing the filter data
    buffer: BitArray,
    /// Number of probe positions per key
    hashes: u32,
    hasher: H,
}

impl BloomFilter {
    /// Create a new Bloom filter backed by `bytes` bytes that sets `hashes`
    /// bits per key, hashing with MurmurHash2.
    ///
    /// # Arguments
    /// * `bytes` - Size of the bit buffer in bytes; the filter holds `bytes * 8` bits
    /// * `hashes` - Number of probe positions per key
    pub fn new(bytes: usize, hashes: u32) -> Result<Self> {
        Self::with_hasher(bytes, hashes, Murmur2)
    }
}

impl<H: KeyHasher> BloomFilter<H> {
    /// Create a Bloom filter that derives its probes from `hasher`
    pub fn with_hasher(bytes: usize, hashes: u32, hasher: H) -> Result<Self> {
        if bytes == 0 || hashes == 0 || bytes > MAX_BYTES {
            return Err(BloomError::InvalidCapacity { bytes, hashes });
        }

        let buffer = BitArray::zeroed(bytes);
        debug!(
            bytes,
            bits = buffer.bits(),
            hashes,
            hasher = %hasher.name(),
            "created bloom filter"
        );

        Ok(BloomFilter {
            buffer,
            hashes,
            hasher,
        })
    }

    /// Probe positions for `key`, in probe order.
    ///
    /// Costs two hash evaluations regardless of `hashes`.
    pub fn probes(&self, key: &[u8]) -> Probes {
        let a = self.hasher.hash(key, SEED);
        let b = self.hasher.hash(key, a);
        Probes {
            a,
            b,
            i: 0,
            hashes: self.hashes,
            bits: self.buffer.bits() as u64,
        }
    }

    /// Insert a key into the filter.
    ///
    /// Every probed bit is set whether or not it was set before, so inserting
    /// the same key again leaves the buffer unchanged.
    pub fn insert(&mut self, key: &[u8]) {
        for x in self.probes(key) {
            self.buffer.test_and_set(x);
        }
    }

    /// Check if a key might be in the filter
    /// Returns true if the key might be present (with possible false positives)
    /// Returns false if the key is definitely not present
    pub fn contains(&self, key: &[u8]) -> bool {
        let hits = self
            .probes(key)
            .filter(|&x| self.buffer.test(x))
            .count();
        hits == self.hashes as usize
    }

    /// Clear all bits in the filter. Size and probe count are kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
        debug!(bytes = self.buffer.len_bytes(), "cleared bloom filter");
    }

    /// Get the capacity in bits
    pub fn bits(&self) -> usize {
        self.buffer.bits()
    }

    /// Get the size of the bit buffer in bytes
    pub fn bytes(&self) -> usize {
        self.buffer.len_bytes()
    }

    /// Get the number of probes per key
    pub fn hashes(&self) -> u32 {
        self.hashes
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Read-only view of the bit buffer
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn count_ones(&self) -> usize {
        self.buffer.count_ones()
    }

    pub fn count_zeros(&self) -> usize {
        self.buffer.count_zeros()
    }

    /// Returns `true` if no bit is set
    pub fn is_empty(&self) -> bool {
        self.count_ones() == 0
    }

    /// Get the current load factor (fraction of bits set)
    pub fn load_factor(&self) -> f64 {
        self.count_ones() as f64 / self.bits() as f64
    }

    /// Get the estimated false positive rate
    pub fn estimated_fpr(&self) -> f64 {
        self.load_factor().powi(self.hashes as i32)
    }

    /// Get statistics about the filter
    pub fn stats(&self) -> BloomStats {
        BloomStats {
            bits: self.bits(),
            bytes: self.bytes(),
            hashes: self.hashes,
            hasher: self.hasher.name(),
            set_bits: self.count_ones(),
            load_factor: self.load_factor(),
            estimated_fpr: self.estimated_fpr(),
        }
    }
}

/// Iterator over the probe positions of one key
#[derive(Debug, Clone, Copy)]
pub struct Probes {
    a: u32,
    b: u32,
    i: u32,
    hashes: u32,
    bits: u64,
}

impl Iterator for Probes {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.hashes {
            return None;
        }
        // 32-bit wrapping arithmetic, then reduced to the bit range.
        let x = self.a.wrapping_add(self.i.wrapping_mul(self.b)) as u64 % self.bits;
        self.i += 1;
        Some(x as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.hashes - self.i) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Probes {}

/// Statistics about a Bloom filter
#[derive(Debug, Clone)]
pub struct BloomStats {
    pub bits: usize,
    pub bytes: usize,
    pub hashes: u32,
    pub hasher: String,
    pub set_bits: usize,
    pub load_factor: f64,
    pub estimated_fpr: f64,
}

impl std::fmt::Display for BloomStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter Stats:\n\
             - Capacity: {} bits ({} bytes)\n\
             - Hash probes: {} ({})\n\
             - Set bits: {}\n\
             - Load factor: {:.3}\n\
             - Estimated FPR: {:.6}",
            self.bits,
            self.bytes,
            self.hashes,
            self.hasher,
            self.set_bits,
            self.load_factor,
            self.estimated_fpr
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::murmurhash2;

    #[test]
    fn test_bloom_filter_basic() {
        let mut bloom = BloomFilter::new(128, 3).unwrap();

        bloom.insert(b"42");
        bloom.insert(b"1337");
        bloom.insert(b"9999");

        assert!(bloom.contains(b"42"));
        assert!(bloom.contains(b"1337"));
        assert!(bloom.contains(b"9999"));

        assert!(bloom.load_factor() > 0.0);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert_eq!(
            BloomFilter::new(0, 3).unwrap_err(),
            BloomError::InvalidCapacity {
                bytes: 0,
                hashes: 3
            }
        );
        assert_eq!(
            BloomFilter::new(16, 0).unwrap_err(),
            BloomError::InvalidCapacity {
                bytes: 16,
                hashes: 0
            }
        );
        assert!(BloomFilter::new(MAX_BYTES + 1, 3).is_err());
    }

    #[test]
    fn test_max_bytes_bit_count_fits() {
        let bits = MAX_BYTES.checked_mul(8).expect("bit count overflows usize");

        assert!(bits > 0);
        assert!(bits as u64 <= u32::MAX as u64 + 1);
        assert!(matches!(
            BloomFilter::new(MAX_BYTES + 1, 1),
            Err(BloomError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn test_probes_follow_double_hashing() {
        let bloom = BloomFilter::new(16, 5).unwrap();
        let key = b"probe me";

        let a = murmurhash2(key, SEED);
        let b = murmurhash2(key, a);
        let expected: Vec<usize> = (0..5u32)
            .map(|i| (a.wrapping_add(i.wrapping_mul(b)) % 128) as usize)
            .collect();

        let probes = bloom.probes(key);
        assert_eq!(probes.len(), 5);
        assert_eq!(probes.collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_alpha_probe_positions() {
        let mut bloom = BloomFilter::new(16, 3).unwrap();

        assert_eq!(bloom.probes(b"alpha").collect::<Vec<_>>(), vec![40, 109, 50]);

        bloom.insert(b"alpha");
        let mut expected = [0u8; 16];
        expected[5] = 0b0000_0001;
        expected[6] = 0b0000_0100;
        expected[13] = 0b0010_0000;
        assert_eq!(bloom.as_bytes(), &expected);
        assert_eq!(bloom.count_ones(), 3);
    }

    #[test]
    fn test_buffer_matches_bit_vec_layout() {
        let mut bloom = BloomFilter::new(16, 3).unwrap();
        let mut expected: bit_vec::BitVec<u8> = bit_vec::BitVec::default();
        expected.grow(128, false);

        for x in bloom.probes(b"alpha") {
            expected.set(x, true);
        }
        bloom.insert(b"alpha");

        assert_eq!(bloom.as_bytes(), expected.storage());
    }

    #[test]
    fn test_contains_does_not_mutate() {
        let mut bloom = BloomFilter::new(32, 4).unwrap();
        bloom.insert(b"present");
        let snapshot = bloom.as_bytes().to_vec();

        for key in [&b"present"[..], &b"absent"[..], &b""[..]] {
            let _ = bloom.contains(key);
        }
        assert_eq!(bloom.as_bytes(), &snapshot[..]);
    }

    #[test]
    fn test_empty_key() {
        let mut bloom = BloomFilter::new(16, 4).unwrap();

        assert!(!bloom.contains(b""));
        bloom.insert(b"");
        assert!(bloom.contains(b""));
    }

    #[test]
    fn test_insert_is_not_a_presence_check() {
        let mut bloom = BloomFilter::new(64, 4).unwrap();
        bloom.insert(b"key");
        let after_first = bloom.as_bytes().to_vec();

        bloom.insert(b"key");
        assert_eq!(bloom.as_bytes(), &after_first[..]);
        assert!(bloom.contains(b"key"));
    }

    #[test]
    fn test_bloom_filter_stats() {
        let mut bloom = BloomFilter::new(256, 5).unwrap();

        for i in 0..100u32 {
            bloom.insert(&i.to_le_bytes());
        }

        let stats = bloom.stats();
        assert_eq!(stats.bits, 2048);
        assert_eq!(stats.bytes, 256);
        assert_eq!(stats.hashes, 5);
        assert_eq!(stats.hasher, "murmur2");
        assert!(stats.set_bits > 0 && stats.set_bits <= 500);
        assert!(stats.load_factor > 0.0);
        assert!(stats.estimated_fpr > 0.0);
        assert!(stats.to_string().contains("2048 bits"));
    }

    #[test]
    fn test_bloom_filter_clear() {
        let mut bloom = BloomFilter::new(128, 3).unwrap();

        bloom.insert(b"42");
        assert!(bloom.contains(b"42"));
        assert!(!bloom.is_empty());

        bloom.clear();
        assert!(!bloom.contains(b"42"));
        assert!(bloom.is_empty());
        assert_eq!(bloom.load_factor(), 0.0);
        assert_eq!(bloom.bits(), 1024);
        assert_eq!(bloom.hashes(), 3);
    }
}
