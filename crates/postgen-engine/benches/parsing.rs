use criterion::{Criterion, criterion_group, criterion_main};
use postgen_engine::markdown_to_html;
use postgen_engine::parsing::inline::render_inline;
mod common;

fn bench_markdown_to_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("markdown_to_html", |b| {
        b.iter(|| {
            let html = markdown_to_html(std::hint::black_box(&content));
            std::hint::black_box(html);
        });
    });

    let line = common::generate_link_heavy_line(200);
    group.bench_function("render_inline", |b| {
        b.iter(|| {
            let html = render_inline(std::hint::black_box(&line));
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_markdown_to_html);
criterion_main!(benches);
