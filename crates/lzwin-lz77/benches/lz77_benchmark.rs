//! Benchmarks for the LZ77 match finder, encoder and decoder.
//!
//! Run with: `cargo bench -p lzwin-lz77`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lzwin_core::{Compressor, Decompressor, WindowConfig};
use lzwin_lz77::{decode, encode, Lz77Codec};

/// Generate test data with varying compressibility.
fn generate_test_data(size: usize, compressibility: f64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = Vec::with_capacity(size);

    if compressibility > 0.9 {
        // Highly repetitive data
        let pattern = b"ABCDEFGHIJKLMNOP";
        while data.len() < size {
            data.extend_from_slice(pattern);
        }
        data.truncate(size);
    } else if compressibility > 0.5 {
        // Mixed data - some phrases, some noise
        let phrases: &[&[u8]] = &[
            b"Peter Piper picked a peck of pickled peppers. ",
            b"Pack my box with five dozen liquor jugs! ",
            b"How vexingly quick daft zebras jump!! ",
        ];
        while data.len() < size {
            if rng.gen_bool(compressibility) {
                let phrase = phrases[rng.gen_range(0..phrases.len())];
                data.extend_from_slice(phrase);
            } else {
                data.push(rng.gen_range(0..128u8));
            }
        }
        data.truncate(size);
    } else {
        // Unstructured 7-bit symbols
        data.extend((0..size).map(|_| rng.gen_range(0..128u8)));
    }

    data
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_encode");
    let config = WindowConfig::new(4096, 255);

    for size in [4 * 1024, 16 * 1024, 64 * 1024] {
        let data = generate_test_data(size, 0.7);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}KB", size / 1024)),
            &data,
            |b, data| b.iter(|| encode(black_box(data), &config).unwrap()),
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_decode");
    let config = WindowConfig::new(4096, 255);

    for size in [4 * 1024, 16 * 1024, 64 * 1024] {
        let data = generate_test_data(size, 0.7);
        let triples = encode(&data, &config).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}KB", size / 1024)),
            &triples,
            |b, triples| b.iter(|| decode(black_box(triples)).unwrap()),
        );
    }

    group.finish();
}

fn bench_window_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_window");

    let size = 16 * 1024;
    let data = generate_test_data(size, 0.7);

    for window in [256, 1024, 4096, 16384] {
        let config = WindowConfig::new(window, 255);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(window), &data, |b, data| {
            b.iter(|| encode(black_box(data), &config).unwrap())
        });
    }

    group.finish();
}

fn bench_lookahead_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_lookahead");

    let size = 16 * 1024;
    let data = generate_test_data(size, 0.95);

    for lookahead in [8, 32, 128, 255, 2048] {
        let config = WindowConfig::new(4096, lookahead);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lookahead), &data, |b, data| {
            b.iter(|| encode(black_box(data), &config).unwrap())
        });
    }

    group.finish();
}

fn bench_unstructured(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_unstructured");
    let config = WindowConfig::new(4096, 255);

    let size = 16 * 1024;
    let data = generate_test_data(size, 0.0);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&data), &config).unwrap())
    });

    group.finish();
}

fn bench_codec_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_codec_roundtrip");

    let codec = Lz77Codec::with_window(WindowConfig::new(4096, 255)).unwrap();

    for size in [4 * 1024, 16 * 1024] {
        let data = generate_test_data(size, 0.7);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}KB", size / 1024)),
            &data,
            |b, data| {
                b.iter(|| {
                    let compressed = codec.compress(black_box(data)).unwrap();
                    codec.decompress(black_box(&compressed)).unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_window_sizes,
    bench_lookahead_sizes,
    bench_unstructured,
    bench_codec_roundtrip,
);

criterion_main!(benches);
