use criterion::{Criterion, black_box, criterion_group, criterion_main};

use riccati_bessel::{riccati_j, riccati_jn, riccati_jn_into};

fn bench_buffer_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("riccati_jn_into");
    for n in [10usize, 100, 1000] {
        let mut psi = vec![0.0; n + 1];
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| riccati_jn_into(black_box(&mut psi), black_box(n), black_box(123.4)))
        });
    }
    group.finish();
}

fn bench_allocating(c: &mut Criterion) {
    c.bench_function("riccati_jn n=100", |b| {
        b.iter(|| riccati_jn(black_box(100), black_box(123.4)))
    });
}

fn bench_single_order(c: &mut Criterion) {
    c.bench_function("riccati_j n=100", |b| {
        b.iter(|| riccati_j(black_box(100), black_box(123.4)))
    });
}

criterion_group!(
    benches,
    bench_buffer_fill,
    bench_allocating,
    bench_single_order
);
criterion_main!(benches);
