use chainxor_codec::chained;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Test data sizes
const SIZES: &[usize] = &[
    64,      // small message
    1024,    // 1 KB
    16384,   // 16 KB
    65536,   // 64 KB
    1048576, // 1 MB
];

const KEY: &[u8] = &[0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70];

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ChainedXor/encrypt");

    for &size in SIZES {
        let data = vec![0xA5u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let sealed = chained::encrypt(black_box(data), black_box(KEY)).unwrap();
                black_box(sealed);
            });
        });
    }

    group.finish();
}

fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ChainedXor/decrypt");

    for &size in SIZES {
        let sealed = chained::encrypt(&vec![0xA5u8; size], KEY).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &sealed, |b, sealed| {
            b.iter(|| {
                let opened = chained::decrypt(black_box(sealed), black_box(KEY)).unwrap();
                black_box(opened);
            });
        });
    }

    group.finish();
}

fn bench_encrypt_in_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("ChainedXor/encrypt_in_place");

    for &size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut buf = vec![0xA5u8; size];
            b.iter(|| {
                chained::encrypt_in_place(black_box(&mut buf), black_box(KEY)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encrypt,
    bench_decrypt,
    bench_encrypt_in_place
);
criterion_main!(benches);
