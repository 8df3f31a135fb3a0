//! Performance benchmarks for fusion, ranking and the full pipeline
//!
//! Run with: cargo bench --bench fusion_benchmarks

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fokal::config::{CatalogConfig, SearchConfig};
use fokal::models::{Photo, PhotoBuilder};
use fokal::search::{QueryParams, ScoredCandidate, SearchEngine, fuse, rank};
use fokal::catalog::InMemoryCatalog;
use std::sync::Arc;

/// Candidate list with overlapping ids so fusion has work to do
fn create_signal(len: usize, stride: i64, offset: i64) -> Vec<ScoredCandidate> {
    (0..len as i64)
        .map(|i| ScoredCandidate::new(i * stride + offset, 1.0 / (i + 1) as f64))
        .collect()
}

fn create_catalog(size: i64) -> Vec<Photo> {
    const WORDS: [&str; 6] = ["harbour", "sunset", "forest", "bridge", "dunes", "fog"];
    const COLORS: [&str; 4] = ["ff8800", "228b22", "1e90ff", "f5f5dc"];

    (0..size)
        .map(|id| {
            let i = id as usize;
            PhotoBuilder::new(id)
                .title(format!("{} {}", WORDS[i % 6], WORDS[(i / 6) % 6]))
                .color(COLORS[i % 4], 0.3)
                .location(59.0 + (id % 100) as f64 * 0.01, 10.0 + (id / 100) as f64 * 0.01)
                .views(id as u64)
                .build()
        })
        .collect()
}

fn bench_fusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("fusion");

    for size in [100, 500, 5_000] {
        let text = create_signal(size, 1, 0);
        let color = create_signal(size, 2, 0);
        let geo = create_signal(size, 3, 1);

        group.bench_with_input(BenchmarkId::new("fuse_three", size), &size, |b, _| {
            b.iter(|| {
                black_box(fuse([
                    text.as_slice(),
                    color.as_slice(),
                    geo.as_slice(),
                ]))
            });
        });

        let fused = fuse([text.as_slice(), color.as_slice(), geo.as_slice()]);
        group.bench_with_input(BenchmarkId::new("rank", size), &size, |b, &size| {
            b.iter(|| black_box(rank(fused.clone(), size / 2)));
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let catalog = InMemoryCatalog::new(create_catalog(10_000), &CatalogConfig::default());
    let engine = SearchEngine::from_backend(Arc::new(catalog), SearchConfig::default());

    let mut group = c.benchmark_group("pipeline");

    let text_only = QueryParams::from_pairs([("q", "harbour fog"), ("limit", "100")]);
    group.bench_function("text_only", |b| {
        b.to_async(&runtime)
            .iter(|| async { black_box(engine.search(&text_only).await.unwrap()) });
    });

    let all_signals = QueryParams::from_pairs([
        ("q", "harbour fog"),
        ("hex", "ff8800"),
        ("lat", "59.5"),
        ("lng", "10.2"),
        ("radius", "25000"),
        ("limit", "100"),
    ]);
    group.bench_function("all_signals", |b| {
        b.to_async(&runtime)
            .iter(|| async { black_box(engine.search(&all_signals).await.unwrap()) });
    });

    group.finish();
}

criterion_group!(benches, bench_fusion, bench_pipeline);
criterion_main!(benches);
