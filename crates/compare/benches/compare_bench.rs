//! Comparison and hashing benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fingerprint_compare::{
    hash_bytes, hash_fingerprints, ChangeDetectorVisitor, CollectingChangeVisitor, CompareStrategy,
    Fingerprint, FingerprintMap,
};

fn collection(root: &str, count: usize, salt: &str) -> FingerprintMap {
    (0..count)
        .map(|index| {
            let name = format!("src/module_{}/file_{}.rs", index % 64, index);
            let content = format!("{}{}", salt, index);
            let fingerprint = Fingerprint::file(name.as_str(), hash_bytes(content.as_bytes()));
            (format!("{}/{}", root, name), fingerprint)
        })
        .collect()
}

/// `count` copies of one generated directory, each under its own parent
fn identical_directories(root: &str, count: usize) -> FingerprintMap {
    let content = hash_bytes(b"generated");
    (0..count)
        .map(|index| {
            let path = format!("{}/build/variant_{}/generated", root, index);
            (path, Fingerprint::directory("generated", content))
        })
        .collect()
}

fn bench_unchanged(c: &mut Criterion) {
    let mut group = c.benchmark_group("unchanged");
    for size in [100, 10_000] {
        let previous = collection("/workspace", size, "");
        let current = previous.clone();
        for strategy in CompareStrategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.identifier(), size), &size, |b, _| {
                b.iter(|| {
                    let mut detector = ChangeDetectorVisitor::new();
                    black_box(strategy.visit_changes_since(
                        &mut detector,
                        &current,
                        &previous,
                        "p",
                        true,
                    ))
                });
            });
        }
    }
    group.finish();
}

fn bench_relocated_root(c: &mut Criterion) {
    // Same files under a new root: no fast path applies
    let mut group = c.benchmark_group("relocated_root");
    for size in [100, 10_000] {
        let previous = collection("/old-checkout", size, "");
        let current = collection("/new-checkout", size, "");
        for strategy in [CompareStrategy::Normalized, CompareStrategy::IgnoredPath] {
            group.bench_with_input(BenchmarkId::new(strategy.identifier(), size), &size, |b, _| {
                b.iter(|| {
                    let mut visitor = CollectingChangeVisitor::new();
                    black_box(strategy.visit_changes_since(
                        &mut visitor,
                        &current,
                        &previous,
                        "p",
                        true,
                    ))
                });
            });
        }
    }
    group.finish();
}

fn bench_identical_directories(c: &mut Criterion) {
    // Every entry shares one fingerprint, so all of them land in a single bucket
    let mut group = c.benchmark_group("identical_directories");
    for size in [1_000, 20_000] {
        let previous = identical_directories("/old-checkout", size);
        let current = identical_directories("/new-checkout", size);
        for strategy in [CompareStrategy::Normalized, CompareStrategy::IgnoredPath] {
            let id = BenchmarkId::new(strategy.identifier(), size);
            group.bench_with_input(id, &size, |b, _| {
                b.iter(|| {
                    let mut visitor = CollectingChangeVisitor::new();
                    black_box(strategy.visit_changes_since(
                        &mut visitor,
                        &current,
                        &previous,
                        "p",
                        true,
                    ))
                });
            });
        }
    }
    group.finish();
}

fn bench_everything_changed(c: &mut Criterion) {
    let mut group = c.benchmark_group("everything_changed");
    let previous = collection("/workspace", 1_000, "old");
    let current = collection("/workspace", 1_000, "new");
    for strategy in CompareStrategy::ALL {
        group.bench_function(strategy.identifier(), |b| {
            b.iter(|| {
                let mut visitor = CollectingChangeVisitor::new();
                black_box(strategy.visit_changes_since(
                    &mut visitor,
                    &current,
                    &previous,
                    "p",
                    true,
                ))
            });
        });
    }
    group.finish();
}

fn bench_collection_hash(c: &mut Criterion) {
    let fingerprints = collection("/workspace", 10_000, "");
    c.bench_function("hash_fingerprints_10k", |b| {
        b.iter(|| black_box(hash_fingerprints(&fingerprints)));
    });
}

criterion_group!(
    benches,
    bench_unchanged,
    bench_relocated_root,
    bench_identical_directories,
    bench_everything_changed,
    bench_collection_hash
);
criterion_main!(benches);
