// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for directory listing.
//!
//! Measures scanning a flat directory with a mix of image and non-image files,
//! and the extension lookup on its own.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_folio::directory_scanner::list_images;
use iced_folio::media::SupportedExtensions;
use std::fs;
use std::hint::black_box;
use std::path::Path;
use tempfile::TempDir;

/// Creates `count` files, alternating supported and unsupported extensions.
fn populate(count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let extensions = ["png", "JPG", "txt", "gif", "json", "jpeg"];
    for i in 0..count {
        let name = format!("file_{i:05}.{}", extensions[i % extensions.len()]);
        fs::write(dir.path().join(name), b"").unwrap();
    }
    dir
}

fn bench_list_images(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory_listing");
    let extensions = SupportedExtensions::default();

    for count in [100, 1_000, 5_000] {
        let dir = populate(count);
        group.bench_with_input(BenchmarkId::new("list_images", count), &dir, |b, dir| {
            b.iter(|| {
                let list = list_images(dir.path(), &extensions).unwrap();
                black_box(list.len());
            });
        });
    }

    group.finish();
}

fn bench_extension_lookup(c: &mut Criterion) {
    let extensions = SupportedExtensions::default();
    let paths = [
        Path::new("a.png"),
        Path::new("B.JPEG"),
        Path::new("notes.txt"),
        Path::new("README"),
    ];

    c.bench_function("extension_lookup", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(extensions.matches(black_box(path)));
            }
        });
    });
}

criterion_group!(benches, bench_list_images, bench_extension_lookup);
criterion_main!(benches);
