//! Benchmarks for minxml generation performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use minxml::{escape_attr, escape_text, Document, Element};

/// Builds a flat document with `elements` children carrying `attributes`
/// attributes each, mirroring the shape of spreadsheet-style output.
fn build_document(elements: usize, attributes: usize) -> Document {
    let mut doc = Document::new(1, Some("UTF-8"), Some(true));
    let root = doc.add_element("data").unwrap();
    root.reserve_children(elements);
    for i in 0..elements {
        let element = root.add_child(Element::new_unchecked("item"));
        element.reserve_attributes(attributes + 1);
        element.add_int_attribute("id", i as i64);
        for a in 0..attributes {
            element.add_raw_attribute("attr", if a % 2 == 0 { "value" } else { "other" });
        }
        element.set_raw_text("payload");
    }
    doc
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &elements in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(elements as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(elements),
            &elements,
            |b, &elements| {
                b.iter(|| black_box(build_document(elements, 4)));
            },
        );
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    for &elements in &[100usize, 1_000, 10_000] {
        let mut doc = build_document(elements, 4);
        let bytes = doc.serialize().len() as u64;
        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(
            BenchmarkId::from_parameter(elements),
            &elements,
            |b, _| {
                b.iter(|| black_box(doc.serialize().len()));
            },
        );
    }
    group.finish();
}

fn bench_escape(c: &mut Criterion) {
    let clean = "The quick brown fox jumps over the lazy dog".repeat(8);
    let dirty = "<item value=\"a & b\">text</item>".repeat(8);

    let mut group = c.benchmark_group("escape");
    group.throughput(Throughput::Bytes(clean.len() as u64));
    group.bench_function("text_clean", |b| {
        b.iter(|| black_box(escape_text(black_box(&clean)).len()));
    });
    group.throughput(Throughput::Bytes(dirty.len() as u64));
    group.bench_function("text_dirty", |b| {
        b.iter(|| black_box(escape_text(black_box(&dirty)).len()));
    });
    group.bench_function("attr_dirty", |b| {
        b.iter(|| black_box(escape_attr(black_box(&dirty)).len()));
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_serialize, bench_escape);
criterion_main!(benches);
