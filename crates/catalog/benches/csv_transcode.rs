use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use fibertech_catalog::csv;
use fibertech_catalog::product::Product;
use fibertech_core::ProductId;

fn sample_catalog(len: usize) -> Vec<Product> {
    (0..len)
        .map(|i| Product {
            id: ProductId::new(format!("product-{i}")),
            title: format!("Fiber \"Pro\" Patch Cable {i}"),
            code: format!("FPC-{i:04}"),
            description: "Duplex LC/UPC patch cable, bend-insensitive, 3m length.".to_string(),
            image_url: "https://example.com/images/patch-cable.jpg".to_string(),
            category: "fiber-cables".to_string(),
            published: i % 3 != 0,
            full_description: Some("Factory terminated and individually tested, with insertion loss under 0.3 dB.".to_string()),
            specifications: Vec::new(),
            features: Vec::new(),
            documents: Vec::new(),
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_encode");
    for len in [10usize, 100, 1000] {
        let catalog = sample_catalog(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &catalog, |b, catalog| {
            b.iter(|| csv::encode(black_box(catalog)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_decode");
    for len in [10usize, 100, 1000] {
        let text = csv::encode(&sample_catalog(len));
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| csv::decode(black_box(text)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
