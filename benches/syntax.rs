//! Benchmarks for the C-like highlighter
//!
//! Run with: cargo bench --bench syntax

use quill::model::Document;
use quill::syntax::Highlighter;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const C_SAMPLE: &str = include_str!("../samples/sample.c");

fn generate_large_c(copies: usize) -> String {
    C_SAMPLE.repeat(copies)
}

// ============================================================================
// Full rescans
// ============================================================================

#[divan::bench]
fn recompute_sample() {
    let styles = Highlighter::new().recompute(divan::black_box(C_SAMPLE));
    divan::black_box(styles);
}

#[divan::bench(args = [10, 100, 1000])]
fn recompute_large(bencher: divan::Bencher, copies: usize) {
    let source = generate_large_c(copies);
    let highlighter = Highlighter::new();

    bencher.bench_local(|| divan::black_box(highlighter.recompute(&source)));
}

#[divan::bench(args = [10, 100, 1000])]
fn recompute_from_rope(bencher: divan::Bencher, copies: usize) {
    let rope = ropey::Rope::from_str(&generate_large_c(copies));
    let highlighter = Highlighter::new();

    bencher.bench_local(|| divan::black_box(highlighter.recompute_chars(rope.chars())));
}

#[divan::bench(args = [10, 100, 1000])]
fn runs_from_styles(bencher: divan::Bencher, copies: usize) {
    let styles = Highlighter::new().recompute(&generate_large_c(copies));

    bencher.bench_local(|| divan::black_box(styles.runs()));
}

// ============================================================================
// Rescans driven by edits
// ============================================================================

#[divan::bench(args = [1, 10, 100])]
fn type_char_rescans(bencher: divan::Bencher, copies: usize) {
    bencher
        .with_inputs(|| Document::with_text(&generate_large_c(copies)))
        .bench_local_values(|mut doc| {
            let mid = doc.len_chars() / 2;
            doc.type_char(mid, 'x');
            doc
        });
}
