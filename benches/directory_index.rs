// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for directory index maintenance.
//!
//! Measures the performance of:
//! - Building an index from a large listing
//! - Applying create/delete/rename events
//! - Cursor navigation

use criterion::{criterion_group, criterion_main, Criterion};
use iced_glance::directory_index::DirectoryIndex;
use std::hint::black_box;
use std::path::PathBuf;

const ENTRIES: usize = 10_000;

fn listing() -> Vec<PathBuf> {
    (0..ENTRIES)
        .map(|i| PathBuf::from(format!("/photos/img_{i:05}.jpg")))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory_index");
    let paths = listing();

    group.bench_function("from_paths", |b| {
        b.iter(|| black_box(DirectoryIndex::from_paths(paths.iter().cloned())));
    });

    group.finish();
}

fn bench_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory_index");
    let index = DirectoryIndex::from_paths(listing());
    let created = PathBuf::from("/photos/img_04999a.jpg");
    let removed = PathBuf::from("/photos/img_05000.jpg");
    let renamed = PathBuf::from("/photos/zz_05000.jpg");

    group.bench_function("insert_remove", |b| {
        b.iter(|| {
            let mut index = index.clone();
            black_box(index.insert(&created));
            black_box(index.remove(&created));
        });
    });

    group.bench_function("rename", |b| {
        b.iter(|| {
            let mut index = index.clone();
            black_box(index.rename(&removed, &renamed));
        });
    });

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory_index");
    let mut index = DirectoryIndex::from_paths(listing());

    group.bench_function("advance", |b| {
        b.iter(|| {
            black_box(index.advance());
        });
    });

    group.bench_function("retreat", |b| {
        b.iter(|| {
            black_box(index.retreat());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_events, bench_navigate);
criterion_main!(benches);
