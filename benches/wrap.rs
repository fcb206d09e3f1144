//! Measurement, wrapping and cursor prediction benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use termlayout::text::{CursorPoint, LayoutConfig, TextLayout, WrapMode};
use std::hint::black_box;

const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog. \
    Pack my box with five dozen liquor jugs. ";

fn measure(c: &mut Criterion) {
    let layout = TextLayout::new(LayoutConfig::default());

    let ascii = "x".repeat(1000);
    c.bench_function("measure_ascii_1000", |b| {
        b.iter(|| layout.measure(black_box(&ascii)));
    });

    let cjk = "中文测试字符串这是一个很长的中文文本".repeat(20);
    c.bench_function("measure_cjk", |b| {
        b.iter(|| layout.measure(black_box(&cjk)));
    });

    let styled = "\x1b[1;31merror\x1b[0m: \x1b[4mfile.rs\x1b[0m line 42 ".repeat(20);
    c.bench_function("measure_styled", |b| {
        b.iter(|| layout.measure(black_box(&styled)));
    });
}

fn wrap(c: &mut Criterion) {
    let layout = TextLayout::new(LayoutConfig::default());
    let text = PARAGRAPH.repeat(50);

    c.bench_function("char_wrap_80", |b| {
        b.iter(|| layout.wrap(black_box(&text), WrapMode::Char, 80, 0));
    });

    c.bench_function("word_wrap_80", |b| {
        b.iter(|| layout.wrap(black_box(&text), WrapMode::Word, 80, 0));
    });

    let mixed = "Hello, 世界! \x1b[32mgreen\x1b[0m café ".repeat(50);
    c.bench_function("word_wrap_mixed_40", |b| {
        b.iter(|| layout.wrap(black_box(&mixed), WrapMode::Word, 40, 4));
    });
}

fn predict(c: &mut Criterion) {
    let layout = TextLayout::new(LayoutConfig::default());
    let log: String = (0..200).map(|i| format!("[{i:03}] {PARAGRAPH}\n")).collect();

    c.bench_function("predict_position_log", |b| {
        b.iter(|| layout.predict_position(black_box(&log), true, CursorPoint::ORIGIN, 80, 24));
    });
}

criterion_group!(benches, measure, wrap, predict);
criterion_main!(benches);
