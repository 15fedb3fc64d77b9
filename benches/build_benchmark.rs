//! Benchmarks for worksheet building and rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spiritual_homework::render::{to_markdown, to_text};
use spiritual_homework::RenderOptions;

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_worksheet", |b| {
        b.iter(|| black_box(spiritual_homework::build()))
    });
}

fn bench_render(c: &mut Criterion) {
    let doc = spiritual_homework::build();
    let options = RenderOptions::default();

    let mut group = c.benchmark_group("render");

    #[cfg(feature = "docx")]
    group.bench_function("docx", |b| {
        b.iter(|| spiritual_homework::render::to_docx(black_box(&doc), &options))
    });
    #[cfg(feature = "docx")]
    group.bench_function("docx_stored", |b| {
        let stored = RenderOptions::new().with_compression(false);
        b.iter(|| spiritual_homework::render::to_docx(black_box(&doc), &stored))
    });
    group.bench_function("markdown", |b| {
        b.iter(|| to_markdown(black_box(&doc), &options))
    });
    group.bench_function("text", |b| b.iter(|| to_text(black_box(&doc), &options)));

    group.finish();
}

criterion_group!(benches, bench_build, bench_render);
criterion_main!(benches);
