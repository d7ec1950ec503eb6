//! Benchmarks for geo crate distance calculations.

use asteria_geo::{distance, within_radius, Coordinate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

fn create_test_items(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            // Grid over the Tampico metro area
            let lat = 22.15 + (i as f64 * 0.001) % 0.2;
            let lng = -97.95 + (i as f64 * 0.0007) % 0.2;
            json!({
                "name": format!("Negocio {}", i),
                "address": {"coordinates": {"lat": lat, "lng": lng}}
            })
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let centro = Coordinate::new(22.2354, -97.8606);
    let zona_dorada = Coordinate::new(22.2486, -97.8642);

    c.bench_function("haversine_single", |b| {
        b.iter(|| distance(black_box(&centro), black_box(&zona_dorada)))
    });
}

fn bench_radius_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("within_radius");
    let origin = Coordinate::new(22.25, -97.85);

    for size in [10, 100, 1000, 10000].iter() {
        let items = create_test_items(*size);

        group.bench_with_input(BenchmarkId::new("json", size), size, |b, _| {
            b.iter(|| within_radius(black_box(&origin), black_box(&items), black_box(10.0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_radius_search);
criterion_main!(benches);
