use clap::{Parser, ValueEnum};
use murmur_bloom::{theoretical_fpr, BloomFilter, Fnv1a, KeyHasher, Murmur2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HasherKind {
    Murmur2,
    Fnv1a,
}

/// Measure insert/query throughput and the empirical false positive rate
#[derive(Debug, Parser)]
#[command(name = "bloom_benchmark")]
struct Cli {
    /// Filter size in bytes
    #[arg(long, default_value_t = 1024)]
    bytes: usize,
    /// Probes per key
    #[arg(long, default_value_t = 4)]
    hashes: u32,
    /// Keys to insert
    #[arg(long, default_value_t = 200)]
    elements: usize,
    /// Keys (not inserted) to probe for false positives
    #[arg(long, default_value_t = 10_000)]
    queries: usize,
    /// RNG seed for key generation
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = HasherKind::Murmur2)]
    hasher: HasherKind,
}

fn random_keys(rng: &mut StdRng, count: usize, exclude: &HashSet<[u8; 16]>) -> Vec<[u8; 16]> {
    let mut keys = Vec::with_capacity(count);
    while keys.len() < count {
        let key: [u8; 16] = rng.gen();
        if !exclude.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

fn run<H: KeyHasher>(cli: &Cli, mut filter: BloomFilter<H>) {
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let inserted: HashSet<[u8; 16]> = random_keys(&mut rng, cli.elements, &HashSet::new())
        .into_iter()
        .collect();
    let queries = random_keys(&mut rng, cli.queries, &inserted);

    // Insert benchmark
    let start = Instant::now();
    for key in &inserted {
        filter.insert(key);
    }
    let insert_time = start.elapsed().as_secs_f64();

    // Query benchmark (successful lookups)
    let start = Instant::now();
    let hits = inserted.iter().filter(|key| filter.contains(&key[..])).count();
    let hit_query_time = start.elapsed().as_secs_f64();

    // Query benchmark (false positive test)
    let start = Instant::now();
    let false_positives = queries.iter().filter(|key| filter.contains(&key[..])).count();
    let fp_query_time = start.elapsed().as_secs_f64();

    let rate = |count: usize, secs: f64| {
        if secs > 0.0 {
            count as f64 / secs
        } else {
            f64::INFINITY
        }
    };
    let measured_fpr = if queries.is_empty() {
        0.0
    } else {
        false_positives as f64 / queries.len() as f64
    };
    let expected_fpr = theoretical_fpr(filter.bits(), filter.hashes(), inserted.len());

    info!(
        inserted = inserted.len(),
        hits, false_positives, "benchmark finished"
    );

    println!("{}", filter.stats());
    println!();
    println!("elements,queries,insert_rate,hit_query_rate,fp_query_rate,hits,false_positives,measured_fpr,theoretical_fpr");
    println!(
        "{},{},{:.0},{:.0},{:.0},{},{},{:.6},{:.6}",
        inserted.len(),
        queries.len(),
        rate(inserted.len(), insert_time),
        rate(inserted.len(), hit_query_time),
        rate(queries.len(), fp_query_time),
        hits,
        false_positives,
        measured_fpr,
        expected_fpr
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.hasher {
        HasherKind::Murmur2 => run(&cli, BloomFilter::with_hasher(cli.bytes, cli.hashes, Murmur2)?),
        HasherKind::Fnv1a => run(&cli, BloomFilter::with_hasher(cli.bytes, cli.hashes, Fnv1a)?),
    }

    Ok(())
}
