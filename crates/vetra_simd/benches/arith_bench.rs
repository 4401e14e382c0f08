use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vetra_simd::*;

fn bench_arith(c: &mut Criterion) {
    let a = Vector::<u8>::splat(3);
    let b = Vector::<u8>::splat(200);
    c.bench_function("add_u8", |bch| {
        bch.iter(|| black_box(black_box(a) + black_box(b)))
    });

    let a = Vector::<f32>::splat(1.5);
    let b = Vector::<f32>::splat(-0.25);
    c.bench_function("mul_f32", |bch| {
        bch.iter(|| black_box(black_box(a) * black_box(b)))
    });

    let a = Vector::<i16>::splat(-3000);
    let b = Vector::<i16>::splat(1234);
    c.bench_function("mul_high_i16", |bch| {
        bch.iter(|| black_box(black_box(a).mul_high(black_box(b))))
    });
}

fn bench_convert(c: &mut Criterion) {
    let v = Vector::<u8>::splat(100);
    c.bench_function("extend_compress_u8", |bch| {
        bch.iter(|| {
            let lo = black_box(v).extend_lower();
            let hi = black_box(v).extend_upper();
            black_box(Vector::<u8>::compress(lo, hi))
        })
    });
}

criterion_group!(benches, bench_arith, bench_convert);
criterion_main!(benches);
