//! Benchmark fixtures for the dynarr containers.
//!
//! Inputs are generated from a seeded ChaCha stream so every run (and
//! every machine) benchmarks identical data.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::{Array, RawArray};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A typed `u64` array pre-filled with `count` seeded random values.
pub fn filled_u64(count: usize, seed: u64) -> Array<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut arr = Array::with_capacity(count).expect("bench allocation");
    for _ in 0..count {
        arr.push(rng.random::<u64>()).expect("bench push");
    }
    arr
}

/// A raw array of `count` seeded random elements, `width` bytes each.
pub fn filled_raw(width: usize, count: usize, seed: u64) -> RawArray {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut arr = RawArray::with_capacity(width, count).expect("bench allocation");
    let mut payload = vec![0u8; width];
    for _ in 0..count {
        rng.fill(payload.as_mut_slice());
        arr.push(&payload).expect("bench push");
    }
    arr
}

/// Seeded `(start, len)` deletion ranges, each valid for an array of
/// `size` elements shrinking by `len` per deletion.
pub fn deletion_ranges(mut size: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ranges = Vec::with_capacity(count);
    for _ in 0..count {
        if size < 2 {
            break;
        }
        let start = rng.random_range(0..size - 1);
        let len = rng.random_range(1..=(size - start).min(size / 8).max(1));
        ranges.push((start, len));
        size -= len;
    }
    ranges
}
