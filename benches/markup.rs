//! Benchmarks for markup parsing and stripping
//!
//! Run with: cargo bench markup

use aurum::markup::{parse_document, strip_markup, stripped_len, BOLD_MARKER, ITALIC_MARKER};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn styled_document(lines: usize) -> String {
    format!(
        "{}Title words here\n{}quoted text and plain words\nplain line with\ttabs\n",
        BOLD_MARKER, ITALIC_MARKER
    )
    .repeat(lines / 3)
}

// ============================================================================
// Parsing (runs every frame)
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn parse_document_lines(lines: usize) {
    let text = styled_document(lines);
    divan::black_box(parse_document(divan::black_box(&text)));
}

#[divan::bench]
fn parse_plain_document_1k_lines() {
    let text = "foo bar baz\n".repeat(1_000);
    divan::black_box(parse_document(divan::black_box(&text)));
}

// ============================================================================
// Stripping (runs on every save)
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn strip_document_lines(lines: usize) {
    let text = styled_document(lines);
    divan::black_box(strip_markup(divan::black_box(&text)));
}

#[divan::bench]
fn stripped_len_10k_lines() {
    let text = styled_document(10_000);
    divan::black_box(stripped_len(divan::black_box(&text)));
}
