// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use staircase::{DomainMerge, StepFunction};
use std::hint::black_box;

const SIZES: [usize; 4] = [16, 256, 4096, 65536];

/// Builds a random step function with roughly `n` breakpoints spread over a
/// domain four times as wide, so operands share some but not all points.
fn random_step_function(rng: &mut StdRng, n: usize) -> StepFunction<i64, i64> {
    let span = (4 * n) as i64;
    let mut breakpoints: Vec<i64> = (0..n).map(|_| rng.random_range(0..span)).collect();
    breakpoints.sort_unstable();
    let values: Vec<i64> = (0..=n).map(|_| rng.random_range(-1000..1000)).collect();
    StepFunction::try_from_values(breakpoints, values)
        .unwrap_or_else(|e| panic!("generated invalid step function: {e}"))
}

fn bench_binary_ops(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("binary_ops");

    for &n in &SIZES {
        let f = random_step_function(&mut rng, n);
        let g = random_step_function(&mut rng, n);
        group.throughput(Throughput::Elements((f.num_breakpoints() + g.num_breakpoints()) as u64));

        group.bench_with_input(BenchmarkId::new("add", n), &(&f, &g), |b, (f, g)| {
            b.iter(|| black_box(*f) + black_box(*g))
        });
        group.bench_with_input(BenchmarkId::new("sub", n), &(&f, &g), |b, (f, g)| {
            b.iter(|| black_box(*f) - black_box(*g))
        });
    }
    group.finish();
}

fn bench_nary_sum(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("nary_sum");

    for &k in &[2usize, 4, 8, 16] {
        let functions: Vec<StepFunction<i64, i64>> =
            (0..k).map(|_| random_step_function(&mut rng, 1024)).collect();
        let total: usize = functions.iter().map(StepFunction::num_breakpoints).sum();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::new("sum", k), &functions, |b, functions| {
            b.iter(|| StepFunction::sum(black_box(functions).iter()))
        });
        group.bench_with_input(BenchmarkId::new("fold_add", k), &functions, |b, functions| {
            b.iter(|| {
                black_box(functions)
                    .iter()
                    .fold(StepFunction::constant(0_i64), |acc, f| &acc + f)
            })
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let mut group = c.benchmark_group("domain_merge");

    for &n in &SIZES {
        let sources: Vec<Vec<i64>> = (0..4)
            .map(|_| random_step_function(&mut rng, n).breakpoints().to_vec())
            .collect();
        let total: usize = sources.iter().map(Vec::len).sum();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::new("four_sources", n), &sources, |b, sources| {
            b.iter(|| {
                DomainMerge::new(black_box(sources).iter().map(Vec::as_slice)).count()
            })
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let mut group = c.benchmark_group("evaluate");

    for &n in &SIZES {
        let f = random_step_function(&mut rng, n);
        let queries: Vec<i64> = (0..(4 * n) as i64).collect();
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_with_input(BenchmarkId::new("binary_search", n), &queries, |b, queries| {
            b.iter(|| queries.iter().map(|&x| *f.evaluate(black_box(x))).sum::<i64>())
        });
        group.bench_with_input(BenchmarkId::new("sweep", n), &queries, |b, queries| {
            b.iter(|| f.sweep(black_box(queries).iter().copied()).sum::<i64>())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_binary_ops, bench_nary_sum, bench_merge, bench_evaluate);
criterion_main!(benches);
