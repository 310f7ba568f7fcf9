use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};


fn bench_shape(c: &mut Criterion) {
    shape_bench::benchmark_tick(c);
    shape_bench::benchmark_full_sweep(c);
    shape_bench::benchmark_plan_sampling(c);
}

fn bench_http(c: &mut Criterion) {
    http_bench::benchmark_endpoints(c);
    http_bench::benchmark_concurrent_requests(c);
}

criterion_group! {
    name = shape_benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(100);
    targets = bench_shape
}

criterion_group! {
    name = http_benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(50);
    targets = bench_http
}

criterion_main!(shape_benches, http_benches);
