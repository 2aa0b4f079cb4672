use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phf::PerfectHashTable;

fn distinct_keys(n: usize) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..n as u32)
        .map(|i| i.wrapping_mul(2_654_435_761))
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

fn bench_build(c: &mut Criterion) {
    let keys = distinct_keys(10_000);
    c.bench_function("phf_build_10k", |b| {
        b.iter(|| PerfectHashTable::build_seeded(black_box(&keys), black_box(1)).unwrap());
    });

    let table = PerfectHashTable::build_seeded(&keys, 1).unwrap();
    c.bench_function("phf_evaluate", |b| {
        b.iter(|| black_box(table.evaluate(black_box(keys[keys.len() / 2]))));
    });
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
