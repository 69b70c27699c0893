//! Basic usage examples for murmur-bloom

use murmur_bloom::{optimal_bloom_parameters, BloomFilter, Fnv1a};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Murmur Bloom Filter Examples ===\n");

    // Example 1: Basic Bloom Filter
    println!("1. Basic Bloom Filter:");
    let mut bloom = BloomFilter::new(16, 3)?;

    let test_data: [&[u8]; 4] = [b"alpha", b"gamma", b"delta", b"epsilon"];
    for item in test_data {
        bloom.insert(item);
    }

    for item in test_data {
        println!(
            "  {:?} in filter: {}",
            String::from_utf8_lossy(item),
            bloom.contains(item)
        );
    }

    // Items never inserted are usually, but not always, reported absent
    for item in [&b"beta"[..], b"zeta", b"eta"] {
        println!(
            "  {:?} in filter: {}",
            String::from_utf8_lossy(item),
            bloom.contains(item)
        );
    }

    println!("  {}", bloom.stats());
    println!();

    // Example 2: Sizing a filter
    println!("2. Sized for 10,000 keys at 1% FPR:");
    let params = optimal_bloom_parameters(10_000, 0.01)?;
    println!(
        "  bytes={}, hashes={}, expected FPR={:.4}",
        params.bytes, params.hashes, params.expected_fpr
    );

    let mut sized = BloomFilter::new(params.bytes, params.hashes)?;
    for i in 0..10_000u32 {
        sized.insert(&i.to_le_bytes());
    }
    let false_positives = (10_000..20_000u32)
        .filter(|i| sized.contains(&i.to_le_bytes()))
        .count();
    println!(
        "  measured FPR over 10,000 absent keys: {:.4}",
        false_positives as f64 / 10_000.0
    );
    println!();

    // Example 3: Alternative hasher and reset
    println!("3. FNV-1a hasher and clear:");
    let mut fnv = BloomFilter::with_hasher(64, 4, Fnv1a)?;
    fnv.insert(b"session-1234");
    println!("  before clear: {}", fnv.contains(b"session-1234"));
    fnv.clear();
    println!("  after clear:  {}", fnv.contains(b"session-1234"));

    Ok(())
}
