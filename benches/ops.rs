//! Throughput benchmarks for the core lane-wise operations, comparing
//! the vector API against plain scalar loops over the same data.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use softsimd::{F32x4, I16x8, I32x4, I8x16};

const VECTOR_COUNTS: &[usize] = &[256, 4_096, 65_536];

fn f32_test_data(vectors: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..vectors * 4).map(|_| rng.random::<f32>() * 100.0).collect()
}

fn i32_test_data(vectors: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..vectors * 4).map(|_| rng.random()).collect()
}

fn benchmark_float_mul_add(c: &mut Criterion) {
    for &count in VECTOR_COUNTS {
        let mut group = c.benchmark_group(format!("f32 mul-add {count} vectors"));
        group.throughput(Throughput::Bytes((count * 16) as u64));

        let data = f32_test_data(count);
        let slice = data.as_slice();

        group.bench_with_input(BenchmarkId::new("Scalar", count), slice, |b, input| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for chunk in input.chunks_exact(4) {
                    for &x in chunk {
                        acc += x * x;
                    }
                }
                black_box(acc)
            })
        });

        group.bench_with_input(BenchmarkId::new("Vector", count), slice, |b, input| {
            b.iter(|| {
                let mut acc = F32x4::splat(0.0);
                for i in 0..input.len() / 4 {
                    let v = F32x4::load(input, (i * 4) as i32).unwrap();
                    acc = acc + v * v;
                }
                black_box(acc)
            })
        });

        group.finish();
    }
}

fn benchmark_int_wrapping_mul(c: &mut Criterion) {
    for &count in VECTOR_COUNTS {
        let mut group = c.benchmark_group(format!("i32 wrapping mul {count} vectors"));
        group.throughput(Throughput::Bytes((count * 16) as u64));

        let data = i32_test_data(count);
        let slice = data.as_slice();

        group.bench_with_input(BenchmarkId::new("Scalar", count), slice, |b, input| {
            b.iter(|| {
                let mut acc = 0i32;
                for &x in input {
                    acc = acc.wrapping_add(x.wrapping_mul(x));
                }
                black_box(acc)
            })
        });

        group.bench_with_input(BenchmarkId::new("Vector", count), slice, |b, input| {
            b.iter(|| {
                let mut acc = I32x4::splat(0);
                for i in 0..input.len() / 4 {
                    let v = I32x4::load(input, (i * 4) as i32).unwrap();
                    acc = acc + v * v;
                }
                black_box(acc)
            })
        });

        group.finish();
    }
}

fn benchmark_narrow_saturation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let a: Vec<i8> = (0..65_536).map(|_| rng.random()).collect();
    let b: Vec<i8> = (0..65_536).map(|_| rng.random()).collect();

    let mut group = c.benchmark_group("i8 saturating add 64 KiB");
    group.throughput(Throughput::Bytes(a.len() as u64));

    group.bench_function("Scalar", |bench| {
        bench.iter(|| {
            let out: Vec<i8> = a
                .iter()
                .zip(b.iter())
                .map(|(&x, &y)| x.saturating_add(y))
                .collect();
            black_box(out)
        })
    });

    group.bench_function("Vector", |bench| {
        bench.iter(|| {
            let mut out = vec![0i8; a.len()];
            for i in 0..a.len() / 16 {
                let index = (i * 16) as i32;
                let va = I8x16::load(a.as_slice(), index).unwrap();
                let vb = I8x16::load(b.as_slice(), index).unwrap();
                va.add_saturate(vb).store(out.as_mut_slice(), index).unwrap();
            }
            black_box(out)
        })
    });

    group.finish();
}

fn benchmark_shift_and_permute(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let data: Vec<i16> = (0..65_536).map(|_| rng.random()).collect();

    let mut group = c.benchmark_group("i16 shift and reverse 128 KiB");
    group.throughput(Throughput::Bytes((data.len() * 2) as u64));

    group.bench_function("Vector", |bench| {
        bench.iter(|| {
            let mut acc = I16x8::splat(0);
            for i in 0..data.len() / 8 {
                let v = I16x8::load(data.as_slice(), (i * 8) as i32).unwrap();
                let shifted = v.shift_right_arithmetic_by_scalar(3);
                let reversed = shifted.swizzle([7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
                acc = acc ^ reversed;
            }
            black_box(acc)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_float_mul_add,
    benchmark_int_wrapping_mul,
    benchmark_narrow_saturation,
    benchmark_shift_and_permute
);
criterion_main!(benches);
