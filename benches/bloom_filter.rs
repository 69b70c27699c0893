use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use murmur_bloom::{murmurhash2, BloomFilter};

fn bench_insert(c: &mut Criterion) {
    let mut initial_items = 0u32;
    while initial_items < 1024 {
        c.bench_function(&format!("bench insert {}", initial_items), |b| {
            b.iter_batched_ref(
                || {
                    let mut filter = BloomFilter::new(1024, 7).unwrap();
                    for i in 0..initial_items {
                        filter.insert(&i.to_le_bytes());
                    }
                    filter
                },
                |filter| filter.insert(&0xDEADBEEFu32.to_le_bytes()),
                BatchSize::PerIteration,
            )
        });
        initial_items += 256;
    }
}

fn bench_contains(c: &mut Criterion) {
    let mut filter = BloomFilter::new(1024, 7).unwrap();
    for i in 0..512u32 {
        filter.insert(&i.to_le_bytes());
    }

    c.bench_function("bench contains present", |b| {
        b.iter(|| filter.contains(&100u32.to_le_bytes()))
    });
    c.bench_function("bench contains absent", |b| {
        b.iter(|| filter.contains(&0xDEADBEEFu32.to_le_bytes()))
    });
}

fn bench_murmurhash2(c: &mut Criterion) {
    let key = [0xABu8; 64];
    c.bench_function("bench murmurhash2 64 bytes", |b| {
        b.iter(|| murmurhash2(&key, 0x9747b28c))
    });
}

criterion_group!(benches, bench_insert, bench_contains, bench_murmurhash2);
criterion_main!(benches);
