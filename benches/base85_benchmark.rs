use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use base85_rs::base85::{self, Variant};

/// Create test data of the given size for benchmarking.
fn make_test_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

fn size_label(size: usize) -> String {
    if size >= 1024 * 1024 {
        format!("{}MB", size / (1024 * 1024))
    } else {
        format!("{}KB", size / 1024)
    }
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("base85_encode");
    for size in [1024, 64 * 1024, 1024 * 1024] {
        let data = make_test_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        for variant in Variant::ALL {
            group.bench_with_input(
                BenchmarkId::new(variant.name(), size_label(size)),
                &data,
                |b, data| b.iter(|| variant.encoder().encode(black_box(data))),
            );
        }
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("base85_decode");
    for size in [1024, 64 * 1024, 1024 * 1024] {
        let data = make_test_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        for variant in Variant::ALL {
            let encoded = variant.encoder().encode(&data);
            group.bench_with_input(
                BenchmarkId::new(variant.name(), size_label(size)),
                &encoded,
                |b, encoded| b.iter(|| variant.decoder().decode(black_box(encoded))),
            );
        }
    }
    group.finish();
}

fn bench_ascii85_runs(c: &mut Criterion) {
    // Sparse data: mostly zero groups, which collapse to `z`
    let mut data = vec![0u8; 1024 * 1024];
    for (i, b) in data.iter_mut().enumerate().step_by(64) {
        *b = (i % 251) as u8;
    }
    let encoded = base85::ascii85_encoder().encode(&data);

    let mut group = c.benchmark_group("ascii85_runs");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| base85::ascii85_encoder().encode(black_box(&data)))
    });
    group.bench_function("decode", |b| {
        b.iter(|| base85::ascii85_decoder().decode(black_box(&encoded)))
    });
    group.finish();
}

fn bench_block_reverse(c: &mut Criterion) {
    let addr: [u8; 16] = [
        0x10, 0x80, 0, 0, 0, 0, 0, 0, 0, 0x08, 0x08, 0x00, 0x20, 0x0C, 0x41, 0x7A,
    ];
    let encoded = base85::rfc1924_encoder().encode_block_reverse(&addr);

    c.bench_function("rfc1924_ipv6_encode", |b| {
        b.iter(|| base85::rfc1924_encoder().encode_block_reverse(black_box(&addr)))
    });
    c.bench_function("rfc1924_ipv6_decode", |b| {
        b.iter(|| base85::rfc1924_decoder().decode_block_reverse(black_box(&encoded)))
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_ascii85_runs,
    bench_block_reverse
);
criterion_main!(benches);
