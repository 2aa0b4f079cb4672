use criterion::{black_box, criterion_group, criterion_main, Criterion};
use planner::Planner;
use signature::Signer;
use sync_io::MemStream;

fn bench_scan(c: &mut Criterion) {
    let remote: Vec<u8> = (0u8..=255).cycle().take(4 * 1024 * 1024).collect();
    let mut remote_stream = MemStream::from_bytes(remote.clone());
    let sig = Signer::compute_from_stream(&mut remote_stream, remote.len() as i64, 4096).unwrap();

    let mut local = remote.clone();
    local.splice(1000..1000, std::iter::repeat(0xAAu8).take(137));

    c.bench_function("planner_scan_4mb", |b| {
        b.iter(|| {
            let mut local_stream = MemStream::from_bytes(black_box(local.clone()));
            Planner::create_update_plan(black_box(&sig), &mut local_stream).unwrap()
        });
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
