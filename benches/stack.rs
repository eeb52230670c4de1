// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use genstack::{find_all, find_all_in, push_all, Stack};

const SIZES: &[usize] = &[1024, 4096, 16384, 65536];

pub fn push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("push", size), size, |b, &size| {
            b.iter_batched_ref(
                || Stack::with_capacity(size),
                |stack| {
                    for i in 0..size {
                        stack.push(i);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("pop", size), size, |b, &size| {
            b.iter_batched_ref(
                || (0..size).collect::<Stack<usize>>(),
                |stack| {
                    while let Some(value) = stack.pop() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("push_all", size), size, |b, &size| {
            b.iter_batched_ref(
                Stack::new,
                |stack| push_all(stack, 0..size),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

pub fn transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    for size in SIZES {
        let stack: Stack<usize> = (0..*size).collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("map", size), &stack, |b, stack| {
            b.iter(|| black_box(stack.map(|value| value * 2)))
        });
        group.bench_with_input(BenchmarkId::new("filter", size), &stack, |b, stack| {
            b.iter(|| black_box(stack.filter(|value| value % 3 == 0)))
        });
        group.bench_with_input(BenchmarkId::new("iter", size), &stack, |b, stack| {
            b.iter(|| black_box(stack.iter().sum::<usize>()))
        });
    }
    group.finish();
}

pub fn search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in SIZES {
        let values: Vec<usize> = (0..*size).map(|value| value % 7).collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("find_all", size), &values, |b, values| {
            b.iter(|| black_box(find_all(values, &3)))
        });
        group.bench_with_input(BenchmarkId::new("find_all_in", size), &values, |b, values| {
            b.iter(|| black_box(find_all_in(values, &3)))
        });
    }
    group.finish();
}

criterion_group!(stack, push_pop, transform, search);
criterion_main!(stack);
