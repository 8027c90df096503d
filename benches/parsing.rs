//! Criterion benchmarks for JID parsing, escaping and construction.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use xmpp_jid::{Jid, JidBuilder, Prep, create, equal, escape, parse, unescape};

/// Benchmark: parse with varying address shapes
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let test_cases = [
        ("domain", "example.com"),
        ("bare", "romeo@example.com"),
        ("full", "romeo@example.com/Home"),
        ("escaped", r"d\27artagnan@musketeers.lit/Sword"),
        ("trailing_dot", "romeo@example.com./Home"),
        ("punycode", "user@xn--mnchen-3ya.de/Home"),
        ("non_ascii", "jürgen@münchen.de/Küche"),
    ];

    for (name, raw) in test_cases {
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::new("detected", name), &raw, |b, raw| {
            b.iter(|| parse(black_box(raw), false));
        });

        let fallback = Prep::fallback();
        group.bench_with_input(BenchmarkId::new("fallback", name), &raw, |b, raw| {
            b.iter(|| fallback.parse(black_box(raw), false));
        });
    }

    group.finish();
}

/// Benchmark: escape and unescape of local parts
fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");

    let test_cases = [
        ("plain", "juliet"),
        ("spaces", "call me ishmael"),
        ("reserved", "\"at&t\" <d'artagnan>/c:@host"),
        ("look_alikes", r"c:\5commas\20and\40more"),
    ];

    for (name, local) in test_cases {
        group.bench_with_input(BenchmarkId::new("escape", name), &local, |b, local| {
            b.iter(|| escape(black_box(local)));
        });

        let escaped = escape(local);
        group.bench_with_input(BenchmarkId::new("unescape", name), &escaped, |b, escaped| {
            b.iter(|| unescape(black_box(escaped)));
        });
    }

    group.finish();
}

/// Benchmark: construction from parts
fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");

    group.bench_function("create", |b| {
        b.iter(|| create(black_box("d'artagnan"), black_box("musketeers.lit"), Some("Sword")));
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            JidBuilder::new()
                .local(black_box("d'artagnan"))
                .domain(black_box("musketeers.lit"))
                .resource(black_box("Sword"))
                .build()
        });
    });

    group.finish();
}

/// Benchmark: comparing raw strings against a prepared JID
fn bench_equal(c: &mut Criterion) {
    let mut group = c.benchmark_group("equal");

    let jid = Jid::parse("romeo@example.com/Home").expect("valid test JID");

    group.bench_function("jid_vs_jid", |b| {
        b.iter(|| equal(black_box(&jid), black_box(&jid), None));
    });

    group.bench_function("raw_vs_jid", |b| {
        b.iter(|| equal(black_box("Romeo@Example.com/Home"), black_box(&jid), None));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_escape, bench_create, bench_equal);
criterion_main!(benches);
