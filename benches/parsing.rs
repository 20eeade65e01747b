use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use json_tree::{from_str, json, to_string_styled, JsonValue, Style};

fn record(id: u32) -> JsonValue {
    let doc = json!({
        "id": 1,
        "name": "Alice",
        "email": "alice@example.com",
        "active": true,
        "score": 9.5,
        "tags": ["admin", "staff"]
    });
    if let JsonValue::Object(map) = &doc {
        map.insert("id".to_string(), JsonValue::from(i64::from(id)));
    }
    doc
}

fn documents() -> Vec<(usize, String)> {
    [10usize, 100, 1000]
        .iter()
        .map(|&size| {
            let array = json_tree::JsonArray::new();
            for id in 0..size {
                array.push(record(id as u32));
            }
            let doc = JsonValue::Array(array);
            (size, to_string_styled(&doc, Style::Compact))
        })
        .collect()
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_records");
    for (size, text) in documents() {
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_records");
    for (size, text) in documents() {
        let doc = from_str(&text).unwrap();
        for style in [Style::Compact, Style::Spaced, Style::Indented] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", style), size),
                &doc,
                |b, doc| b.iter(|| to_string_styled(black_box(doc), style)),
            );
        }
    }
    group.finish();
}

fn benchmark_scalars(c: &mut Criterion) {
    c.bench_function("parse_number_heavy", |b| {
        let text = to_string_styled(
            &JsonValue::Array((0..512).map(|i| JsonValue::from(i as f64 * 0.5)).collect()),
            Style::Compact,
        );
        b.iter(|| from_str(black_box(&text)))
    });

    c.bench_function("parse_string_heavy", |b| {
        let text = to_string_styled(
            &JsonValue::Array(
                (0..512)
                    .map(|i| JsonValue::from(format!("value-{i}-\"quoted\"\n")))
                    .collect(),
            ),
            Style::Compact,
        );
        b.iter(|| from_str(black_box(&text)))
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_serialize,
    benchmark_scalars
);
criterion_main!(benches);
