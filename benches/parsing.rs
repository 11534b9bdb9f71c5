use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rawlit::{from_literal, parse_mapping, parse_sequence, to_literal, Parser};
use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;

fn int_literal(size: usize) -> String {
    let items: Vec<String> = (0..size).map(|i| i.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn benchmark_parse_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sequence");

    for size in [10, 100, 1000].iter() {
        let literal = int_literal(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &literal, |b, literal| {
            let parser = Parser::default();
            b.iter(|| parse_sequence(black_box(literal), |t| parser.scalar::<i64>(t)))
        });
    }

    group.finish();
}

fn benchmark_parse_nested(c: &mut Criterion) {
    let grid = "[[[1, 2, 3], [2], [3, 4, 5]], [[2]], [[3]]]";
    let nested_map = "[5:[10:100, 1:1000], 6:[100:1000, 10:10000]]";

    let mut group = c.benchmark_group("parse_nested");

    group.bench_function("closures", |b| {
        let parser = Parser::default();
        b.iter(|| {
            parse_sequence(black_box(grid), |outer| {
                parse_sequence(outer, |inner| {
                    parse_sequence(inner, |t| parser.scalar::<i32>(t))
                })
            })
        })
    });

    group.bench_function("from_literal", |b| {
        b.iter(|| from_literal::<Vec<Vec<Vec<i32>>>>(black_box(grid)))
    });

    group.bench_function("nested_mapping", |b| {
        let parser = Parser::default();
        b.iter(|| {
            parse_mapping(
                black_box(nested_map),
                |k| parser.scalar::<i32>(k),
                |v| parse_mapping(v, |k| parser.scalar::<i32>(k), |v| parser.scalar::<i32>(v)),
            )
        })
    });

    group.finish();
}

fn benchmark_parse_text(c: &mut Criterion) {
    let words: Vec<String> = (0..100).map(|i| format!("'word {}, quoted'", i)).collect();
    let literal = format!("[{}]", words.join(", "));

    c.bench_function("parse_quoted_text", |b| {
        b.iter(|| from_literal::<Vec<String>>(black_box(&literal)))
    });
}

fn benchmark_parse_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_range");

    group.bench_function("integer", |b| {
        b.iter(|| from_literal::<RangeInclusive<i64>>(black_box("1...3")))
    });

    group.bench_function("float_infinite", |b| {
        b.iter(|| from_literal::<RangeInclusive<f64>>(black_box("1.0...inf")))
    });

    group.finish();
}

fn benchmark_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    let grid: Vec<Vec<i32>> = (0..50).map(|i| (0..i % 7).collect()).collect();
    group.bench_function("nested_sequence", |b| b.iter(|| to_literal(black_box(&grid))));

    let map: BTreeMap<String, RangeInclusive<u32>> = (0..50)
        .map(|i| (format!("band {}", i), i..=i + 10))
        .collect();
    group.bench_function("mapping_of_ranges", |b| b.iter(|| to_literal(black_box(&map))));

    group.finish();
}

fn benchmark_duplicate_check(c: &mut Criterion) {
    let entries: Vec<String> = (0..500).map(|i| format!("{}: {}", i, i * 2)).collect();
    let literal = format!("[{}]", entries.join(", "));

    c.bench_function("parse_mapping_500", |b| {
        b.iter(|| from_literal::<HashMap<u32, u32>>(black_box(&literal)))
    });
}

criterion_group!(
    benches,
    benchmark_parse_sequence,
    benchmark_parse_nested,
    benchmark_parse_text,
    benchmark_parse_range,
    benchmark_write,
    benchmark_duplicate_check
);

criterion_main!(benches);
