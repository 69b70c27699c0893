//! # Murmur Bloom
//!
//! A compact Bloom filter over byte-string keys. Probe positions are derived
//! from two chained MurmurHash2 evaluations using Kirsch–Mitzenmacher double
//! hashing, so any number of probes costs exactly two hash computations.
//!
//! ```
//! use murmur_bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(16, 3).unwrap();
//! filter.insert(b"alpha");
//! assert!(filter.contains(b"alpha"));
//! ```
//!
//! A filter is a plain owned value: `insert` and `clear` take `&mut self`, so
//! sharing one between threads needs an external lock such as a `Mutex`.

pub mod bit_array;
pub mod bloom;
pub mod error;
pub mod hash;
pub mod utils;

pub use bit_array::BitArray;
pub use bloom::{BloomFilter, BloomStats, Probes, SEED};
pub use error::{BloomError, Result};
pub use hash::{murmurhash2, Fnv1a, KeyHasher, Murmur2};
pub use utils::{optimal_bloom_parameters, theoretical_fpr, BloomParameters};

// Python bindings
#[cfg(feature = "python")]
pub mod python_module;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_bloom_filter() {
        let mut bloom = BloomFilter::new(1000, 10).unwrap();

        bloom.insert(b"42");
        bloom.insert(b"1337");
        bloom.insert(b"9999");

        assert!(bloom.contains(b"42"));
        assert!(bloom.contains(b"1337"));
        assert!(bloom.contains(b"9999"));
    }

    #[test]
    fn test_custom_hasher_filter() {
        let mut bloom = BloomFilter::with_hasher(1000, 10, Fnv1a).unwrap();

        bloom.insert(b"42");
        bloom.insert(b"1337");

        assert!(bloom.contains(b"42"));
        assert!(bloom.contains(b"1337"));
        assert_eq!(bloom.hasher().name(), "fnv1a");
    }
}
