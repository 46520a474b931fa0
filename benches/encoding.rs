use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_packstream::{encode, to_value, to_vec, Dictionary, Node, Value};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_vec(black_box(&user)))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let products = products(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_vec(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_encode_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_value");

    for size in [10, 100, 500].iter() {
        let value = to_value(&products(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| encode(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_integer_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_tiers");

    let tiny: Vec<i64> = (0..100).collect();
    let wide: Vec<i64> = (0..100).map(|i| i64::MAX - i).collect();
    let mixed: Vec<i64> = (0..100).map(|i| (i - 50) * 1_000_003).collect();

    group.bench_function("tiny", |b| b.iter(|| encode(black_box(&tiny))));
    group.bench_function("wide", |b| b.iter(|| encode(black_box(&wide))));
    group.bench_function("mixed", |b| b.iter(|| encode(black_box(&mixed))));

    group.finish();
}

fn benchmark_nodes(c: &mut Criterion) {
    let nodes: Vec<Node> = (0..100)
        .map(|i| {
            let mut properties = Dictionary::new();
            properties.insert("name".to_string(), Value::from(format!("node-{}", i)));
            properties.insert("rank".to_string(), Value::from(i));
            Node::new(i64::from(i), vec!["Item".to_string()], properties)
        })
        .collect();

    c.bench_function("encode_nodes", |b| b.iter(|| encode(black_box(&nodes))));
    c.bench_function("serialize_nodes", |b| b.iter(|| to_vec(black_box(&nodes))));
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_serialize_array,
    benchmark_encode_value,
    benchmark_integer_tiers,
    benchmark_nodes
);
criterion_main!(benches);
