//! Benchmarks for geo crate distance calculations.

use candyfinder_geo::{distances_from, haversine_miles, within_range, Coordinate, LocatedItem};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_test_items(count: usize) -> Vec<LocatedItem> {
    (0..count)
        .map(|i| {
            // Generate points in a grid around lower Manhattan
            let lat = 40.70 + (i as f64 * 0.001) % 0.2;
            let lng = -74.02 + (i as f64 * 0.001) % 0.2;
            LocatedItem {
                id: format!("house-{i}"),
                latitude: lat,
                longitude: lng,
            }
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let new_york = Coordinate::new(40.7128, -74.0060);
    let los_angeles = Coordinate::new(34.0522, -118.2437);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_miles(black_box(&new_york), black_box(&los_angeles)))
    });
}

fn bench_batch_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_distances");
    let origin = Coordinate::new(40.7128, -74.0060);

    for size in [10, 100, 1000, 10000].iter() {
        let items = create_test_items(*size);

        group.bench_with_input(BenchmarkId::new("distances_from", size), size, |b, _| {
            b.iter(|| distances_from(black_box(&origin), black_box(&items)))
        });
    }

    group.finish();
}

fn bench_range_filter(c: &mut Criterion) {
    let origin = Coordinate::new(40.7128, -74.0060);
    let items = create_test_items(1000);

    c.bench_function("within_range_1000", |b| {
        b.iter(|| within_range(black_box(&origin), black_box(&items), black_box(5.0)))
    });
}

criterion_group!(
    benches,
    bench_single_distance,
    bench_batch_distances,
    bench_range_filter
);
criterion_main!(benches);
