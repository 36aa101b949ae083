//! Enumeration Benchmarks
//!
//! Measures product enumeration across distortion orders and carrier
//! counts, and sequential vs parallel fan-out.
//!
//! Run with: cargo bench -p intermod-core --features parallel --bench enumerate_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use intermod_core::enumerate_imd_products;

/// GSM-900 downlink carriers, evenly spaced.
fn carriers(count: usize) -> Vec<f64> {
    (0..count).map(|i| 935.2 + 0.2 * i as f64).collect()
}

/// Benchmark enumeration as the distortion order grows
fn bench_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_by_order");

    let freqs = carriers(4);
    for order in [3, 5, 7, 9].iter() {
        let count = enumerate_imd_products(&freqs, *order).unwrap().len();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(order), &freqs, |b, freqs| {
            b.iter(|| enumerate_imd_products(black_box(freqs), *order))
        });
    }

    group.finish();
}

/// Benchmark enumeration as the carrier count grows
fn bench_carrier_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_by_carrier_count");

    for count in [2, 4, 8, 12].iter() {
        let freqs = carriers(*count);
        let products = enumerate_imd_products(&freqs, 5).unwrap().len();
        group.throughput(Throughput::Elements(products as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &freqs, |b, freqs| {
            b.iter(|| enumerate_imd_products(black_box(freqs), 5))
        });
    }

    group.finish();
}

/// Benchmark sequential vs parallel enumeration
#[cfg(feature = "parallel")]
fn bench_parallel_speedup(c: &mut Criterion) {
    use intermod_core::enumerate_imd_products_parallel;
    use std::time::Duration;

    let mut group = c.benchmark_group("enumerate_parallel");
    group.measurement_time(Duration::from_secs(10));

    for count in [4, 8, 12].iter() {
        let freqs = carriers(*count);
        let products = enumerate_imd_products(&freqs, 7).unwrap().len();
        group.throughput(Throughput::Elements(products as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &freqs,
            |b, freqs| b.iter(|| enumerate_imd_products(black_box(freqs), 7)),
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", count),
            &freqs,
            |b, freqs| b.iter(|| enumerate_imd_products_parallel(black_box(freqs), 7)),
        );
    }

    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(
    benches,
    bench_orders,
    bench_carrier_counts,
    bench_parallel_speedup
);
#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_orders, bench_carrier_counts);
criterion_main!(benches);
