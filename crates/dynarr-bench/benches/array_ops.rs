//! Criterion micro-benchmarks for push growth, range deletion, and
//! typed versus raw slot access.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dynarr::{Array, RawArray};
use dynarr_bench::{deletion_ranges, filled_raw, filled_u64};

const ELEMENTS: usize = 10_000;

/// Push 10K elements starting from a 4-slot block, paying every doubling.
fn bench_push_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_growth");

    group.bench_function("raw_8_byte", |b| {
        b.iter(|| {
            let mut arr = RawArray::with_capacity(8, 4).expect("alloc");
            let payload = [0xA5u8; 8];
            for _ in 0..ELEMENTS {
                arr.push(black_box(&payload)).expect("push");
            }
            black_box(arr.len())
        })
    });

    group.bench_function("typed_u64", |b| {
        b.iter(|| {
            let mut arr: Array<u64> = Array::with_capacity(4).expect("alloc");
            for v in 0..ELEMENTS as u64 {
                arr.push(black_box(v)).expect("push");
            }
            black_box(arr.len())
        })
    });

    group.finish();
}

/// Repeated mid-array range deletions, dominated by tail compaction.
fn bench_delete_range(c: &mut Criterion) {
    let base = filled_raw(8, ELEMENTS, 7);
    let ranges = deletion_ranges(ELEMENTS, 64, 11);

    c.bench_function("delete_range_compaction", |b| {
        b.iter(|| {
            let mut arr = base.clone();
            for &(start, len) in &ranges {
                arr.delete_range(start, len).expect("in-bounds range");
            }
            black_box(arr.len())
        })
    });
}

/// Sequential reads through the typed decode path and the raw slice path.
fn bench_access(c: &mut Criterion) {
    let typed = filled_u64(ELEMENTS, 3);
    let raw = filled_raw(8, ELEMENTS, 3);
    let mut group = c.benchmark_group("sequential_get");

    group.bench_function("typed_u64", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for i in 0..typed.len() {
                acc = acc.wrapping_add(typed.get(i).expect("in bounds"));
            }
            black_box(acc)
        })
    });

    group.bench_function("raw_slice", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for i in 0..raw.len() {
                let slot = raw.get(i).expect("in bounds");
                acc = acc.wrapping_add(slot[0] as u64);
            }
            black_box(acc)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_push_growth, bench_delete_range, bench_access);
criterion_main!(benches);
