//! Build throughput benchmarks
//!
//! Measures a full build (load + render pass) with varying:
//! - Record counts (1, 10, 100, 1000)
//! - Backends (LaTeX, HTML, Markdown)
//!
//! Run benchmarks: `cargo bench --bench render_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::{Value, json};
use vitae::{Builder, HtmlContext, JobModule, LatexContext, MarkdownContext, TalkModule};

/// Jobs split over two declared groups, plus one talk per job over ten years.
fn generate_input(count: usize) -> Value {
    let jobs: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "start": format!("{}-01-01", 2000 + i % 20),
                "end": "Present",
                "title": format!("Position {}", i),
                "organization": "Benchmark **Inc.**",
                "description": "Did *many* things:\n\n* one\n* two"
            })
        })
        .collect();
    let (current, past) = jobs.split_at(count / 2);
    let talks: Vec<Value> = (0..count)
        .map(|i| json!({"title": format!("Talk {}", i), "date": 2010 + i % 10, "conference": "BenchConf"}))
        .collect();
    json!({
        "personal": {"name": "Bench", "position": "Marker", "organization": "Criterion"},
        "jobs": {"order": ["Current", "Past"], "Current": current, "Past": past},
        "talks": talks
    })
}

fn builder() -> Builder {
    Builder::new()
        .register_default_module(Some("jobs"), Box::new(JobModule::new()))
        .register_default_module(Some("talks"), Box::new(TalkModule::new()))
}

fn benchmark_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_throughput");

    for count in [1, 10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64 * 2));
        let input = generate_input(count);

        group.bench_with_input(BenchmarkId::new("latex", count), &input, |b, input| {
            let mut builder = builder().register_backend(LatexContext::new());
            b.iter(|| builder.build(input).expect("build failed"));
        });
        group.bench_with_input(BenchmarkId::new("html", count), &input, |b, input| {
            let mut builder = builder().register_backend(HtmlContext::new());
            b.iter(|| builder.build(input).expect("build failed"));
        });
        group.bench_with_input(BenchmarkId::new("markdown", count), &input, |b, input| {
            let mut builder = builder().register_backend(MarkdownContext::new());
            b.iter(|| builder.build(input).expect("build failed"));
        });
    }

    group.finish();
}

/// All three backends in one build; compare with and without `parallel-render`.
fn benchmark_all_backends(c: &mut Criterion) {
    let input = generate_input(500);
    let mut builder = builder()
        .register_backend(LatexContext::new())
        .register_backend(HtmlContext::new())
        .register_backend(MarkdownContext::new());
    c.bench_function("all_backends_500", |b| {
        b.iter(|| builder.build(&input).expect("build failed"))
    });
}

criterion_group!(benches, benchmark_backends, benchmark_all_backends);
criterion_main!(benches);
