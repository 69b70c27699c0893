//! Hash functions for Bloom filters
//!
//! Seeded 32-bit hashes over byte buffers. The filter only needs two
//! evaluations per key, so the quality of the mix matters more than its cost.

use fnv::FnvHasher;
use std::hash::Hasher;

/// Trait for hash functions used to derive probe positions
pub trait KeyHasher: Send + Sync {
    /// Hash `key` with the given seed
    fn hash(&self, key: &[u8], seed: u32) -> u32;

    /// Get a name/identifier for this hash function
    fn name(&self) -> String;
}

const M: u32 = 0x5bd1e995;
const R: u32 = 24;

/// MurmurHash2, 32-bit variant.
///
/// Blocks are read little-endian so the result does not depend on the host.
/// An empty key hashes to a value derived from the seed alone.
pub fn murmurhash2(key: &[u8], seed: u32) -> u32 {
    let mut h = seed ^ key.len() as u32;

    let mut blocks = key.chunks_exact(4);
    for block in &mut blocks {
        let mut k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h = h.wrapping_mul(M);
        h ^= k;
    }

    let tail = blocks.remainder();
    if tail.len() >= 3 {
        h ^= (tail[2] as u32) << 16;
    }
    if tail.len() >= 2 {
        h ^= (tail[1] as u32) << 8;
    }
    if !tail.is_empty() {
        h ^= tail[0] as u32;
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;
    h
}

/// The default hasher: MurmurHash2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Murmur2;

impl KeyHasher for Murmur2 {
    #[inline]
    fn hash(&self, key: &[u8], seed: u32) -> u32 {
        murmurhash2(key, seed)
    }

    fn name(&self) -> String {
        "murmur2".to_string()
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;

/// FNV-1a with the seed folded into the offset basis, truncated to 32 bits.
///
/// Weaker avalanche than MurmurHash2 on short keys; mostly useful as a point
/// of comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1a;

impl KeyHasher for Fnv1a {
    fn hash(&self, key: &[u8], seed: u32) -> u32 {
        let mut hasher = FnvHasher::with_key(FNV_OFFSET_BASIS ^ seed as u64);
        hasher.write(key);
        let full = hasher.finish();
        ((full >> 32) as u32) ^ (full as u32)
    }

    fn name(&self) -> String {
        "fnv1a".to_string()
    }
}
