//! Throughput benchmarks for the masking transform.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mask_core::cipher::{encrypt_decrypt, encrypt_decrypt_parallel};
use mask_core::parallelism::ParallelismProfile;
use rand::RngCore;

fn bench_transform(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let key = b"bench key";

    let mut group = c.benchmark_group("encrypt_decrypt");
    for size in [1024usize, 64 * 1024, 1024 * 1024] {
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &data, |b, data| {
            b.iter(|| black_box(encrypt_decrypt(black_box(data), key)));
        });

        let profile = ParallelismProfile::dynamic();
        group.bench_with_input(BenchmarkId::new("parallel", size), &data, |b, data| {
            b.iter(|| black_box(encrypt_decrypt_parallel(black_box(data), key, &profile)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
