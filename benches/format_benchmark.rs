//! Row rendering benchmark: Measure hex + printable formatting cost.
//!
//! Target: well under the shortest practical tick interval

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scroller::format::{write_hex, write_printable, write_row};

fn row_by_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_row");
    for width in [1usize, 2, 8, 32] {
        let bytes: Vec<u8> = (0..width * 8).map(|i| (i % 256) as u8).collect();
        let mut out = Vec::with_capacity(width * 40);
        group.bench_with_input(BenchmarkId::from_parameter(width), &bytes, |b, bytes| {
            b.iter(|| {
                out.clear();
                write_row(&mut out, black_box(bytes), width);
            });
        });
    }
    group.finish();
}

fn hex_only(c: &mut Criterion) {
    let bytes = [0xa5u8; 16];
    let mut out = Vec::with_capacity(64);
    c.bench_function("write_hex_16", |b| {
        b.iter(|| {
            out.clear();
            write_hex(&mut out, black_box(&bytes));
        });
    });
}

fn printable_only(c: &mut Criterion) {
    let bytes = *b"line one\nline\ttwo\r\n ";
    let mut out = Vec::with_capacity(32);
    c.bench_function("write_printable_mixed", |b| {
        b.iter(|| {
            out.clear();
            write_printable(&mut out, black_box(&bytes));
        });
    });
}

criterion_group!(benches, row_by_width, hex_only, printable_only);
criterion_main!(benches);
