//! Micro-benchmarks for bounded index construction and guarded array access.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench access
//! ```

use std::hint;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use inrange_core::{ArrayIndex, FixedArray};

const LEN: usize = 256;

fn bench_index_new(c: &mut Criterion) {
    c.bench_function("array_index_new", |b| {
        b.iter(|| {
            let mut accepted = 0_usize;
            for raw in 0..LEN * 2 {
                if ArrayIndex::<LEN>::new(hint::black_box(raw)).is_ok() {
                    accepted += 1;
                }
            }
            hint::black_box(accepted)
        });
    });
}

fn bench_guarded_access(c: &mut Criterion) {
    let indices: Vec<ArrayIndex<LEN>> = ArrayIndex::<LEN>::all().collect();

    c.bench_function("fixed_array_guarded_write", |b| {
        b.iter_batched_ref(
            FixedArray::<u64, LEN>::new,
            |array| {
                for &i in &indices {
                    array[i] = hint::black_box(i.get() as u64);
                }
            },
            BatchSize::SmallInput,
        );
    });

    let raw: Vec<usize> = (0..LEN).collect();
    c.bench_function("slice_checked_write", |b| {
        b.iter_batched_ref(
            || [0_u64; LEN],
            |array| {
                for &i in &raw {
                    array[hint::black_box(i)] = i as u64;
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_index_new, bench_guarded_access);
criterion_main!(benches);
