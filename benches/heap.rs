use array_heap::{algo, Max, MaxHeap};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::BinaryHeap;

fn bench_heap(c: &mut Criterion) {
    let n = 1024;
    {
        let mut group = c.benchmark_group("BinaryHeap vs MaxHeap (Push 1024)");
        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                let mut h = BinaryHeap::new();
                for i in 0..n {
                    h.push(black_box(i as i32));
                }
                h
            })
        });

        group.bench_function("array_heap::MaxHeap", |b| {
            b.iter(|| {
                let mut h: MaxHeap<i32> = MaxHeap::new();
                for i in 0..n {
                    h.push(black_box(i as i32));
                }
                h
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("BinaryHeap vs MaxHeap (Drain 1024)");
        let seed: Vec<i32> = (0..n as i32).rev().collect();

        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                let mut h = BinaryHeap::from(black_box(seed.clone()));
                while let Some(v) = h.pop() {
                    black_box(v);
                }
            })
        });

        group.bench_function("array_heap::MaxHeap", |b| {
            b.iter(|| {
                let mut h = MaxHeap::from(black_box(seed.clone()));
                while let Ok(v) = h.pop() {
                    black_box(v);
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("slice::sort_unstable vs heap_sort (1024)");
        let seed: Vec<i32> = (0..n as i32).rev().collect();

        group.bench_function("slice::sort_unstable", |b| {
            b.iter(|| {
                let mut data = black_box(seed.clone());
                data.sort_unstable();
                data
            })
        });

        group.bench_function("array_heap::algo::heap_sort", |b| {
            b.iter(|| {
                let mut data = black_box(seed.clone());
                algo::heap_sort::<Max, _>(&mut data);
                data
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_heap);
criterion_main!(benches);
