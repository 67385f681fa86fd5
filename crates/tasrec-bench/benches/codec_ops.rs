//! Criterion micro-benchmarks for the recording codec, hashing and comparison.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tasrec_bench::reference_profile;
use tasrec_codec::{
    compare_recordings, decode_frame, encode_frame, format_float, from_text, recording_hash,
    to_text, LineReader,
};
use tasrec_test_utils::sample_frame;

/// Benchmark: Encode a frame with 8 projectiles.
fn bench_codec_encode_frame(c: &mut Criterion) {
    let frame = sample_frame(42, 8);

    c.bench_function("codec_encode_frame", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(1024);
            encode_frame(&mut buf, &frame).unwrap();
            black_box(&buf);
        });
    });
}

/// Benchmark: Decode the same frame.
fn bench_codec_decode_frame(c: &mut Criterion) {
    let frame = sample_frame(42, 8);

    // Pre-encode the frame into a buffer.
    let mut encoded = Vec::with_capacity(1024);
    encode_frame(&mut encoded, &frame).unwrap();

    c.bench_function("codec_decode_frame", |b| {
        b.iter(|| {
            let mut lines = LineReader::new(encoded.as_slice());
            let decoded = decode_frame(&mut lines).unwrap();
            black_box(&decoded);
        });
    });
}

/// Benchmark: Format a float at file precision.
fn bench_format_float(c: &mut Criterion) {
    c.bench_function("format_float", |b| {
        b.iter(|| black_box(format_float(black_box(-1234.56789))));
    });
}

/// Benchmark: Encode and decode the 3000-frame reference recording.
fn bench_reference_recording(c: &mut Criterion) {
    let rec = reference_profile();
    let text = to_text(&rec);

    c.bench_function("reference_to_text", |b| {
        b.iter(|| black_box(to_text(&rec)));
    });
    c.bench_function("reference_from_text", |b| {
        b.iter(|| black_box(from_text(&text).unwrap()));
    });
}

/// Benchmark: Hash and compare the reference recording against a copy.
fn bench_reference_compare(c: &mut Criterion) {
    let rec = reference_profile();
    let copy = rec.clone();

    c.bench_function("reference_recording_hash", |b| {
        b.iter(|| black_box(recording_hash(&rec)));
    });
    c.bench_function("reference_compare_identical", |b| {
        b.iter(|| black_box(compare_recordings(&rec, &copy)));
    });
}

criterion_group!(
    benches,
    bench_codec_encode_frame,
    bench_codec_decode_frame,
    bench_format_float,
    bench_reference_recording,
    bench_reference_compare
);
criterion_main!(benches);
