use bucket_table::{demo::PRODUCTS, FixedBucketTable};
use criterion::{criterion_group, BenchmarkId, Criterion};
use rand::prelude::*;

fn keys(n: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..n)
        .map(|_| format!("P{:04}", rng.gen_range(0..10_000)))
        .collect()
}

pub fn demo_products(c: &mut Criterion) {
    c.bench_function("insert_products", |b| {
        b.iter(|| {
            let mut table = FixedBucketTable::default();
            for (k, v) in PRODUCTS {
                table.insert(k, v).unwrap();
            }
            table
        })
    });
}

pub fn random_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");
    let keys = keys(1000);
    for capacity in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            capacity,
            |b, &capacity| {
                b.iter(|| {
                    let mut table = FixedBucketTable::new(capacity).unwrap();
                    for (i, k) in keys.iter().enumerate() {
                        table.insert(k, i).unwrap();
                    }
                    table
                })
            },
        );
    }
    group.finish()
}

criterion_group!(inserts, demo_products, random_keys);
