//! Baseline benchmarks for the container family.
//!
//! These establish the cost profile the design signs up for:
//! - Stack push/pop: amortized O(1) with doubling growth
//! - Queue dequeue: O(n) front shift by design (no ring buffer)
//! - Array mid insert: O(n) shift within reserved capacity
//!
//! Benchmarks use fixed element counts to keep runs comparable.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use trivec::{Array, Queue, Stack};

const ELEMENTS: u64 = 1024;

// =============================================================================
// STACK BENCHMARKS
// =============================================================================

fn bench_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");
    group.throughput(Throughput::Elements(ELEMENTS));

    group.bench_function("push_1024", |b| {
        b.iter(|| {
            let mut stack = Stack::new().unwrap();
            for n in 0..ELEMENTS {
                stack.push(black_box(n)).unwrap();
            }
            stack
        });
    });

    group.bench_function("push_pop_cycle_1024", |b| {
        b.iter(|| {
            let mut stack = Stack::new().unwrap();
            for n in 0..ELEMENTS {
                stack.push(black_box(n)).unwrap();
            }
            while let Ok(n) = stack.pop() {
                black_box(n);
            }
            stack
        });
    });

    group.finish();
}

// =============================================================================
// QUEUE BENCHMARKS
// =============================================================================

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");
    group.throughput(Throughput::Elements(ELEMENTS));

    // The drain half is quadratic in total: each dequeue shifts the
    // remaining elements. That is the documented trade; measure it.
    group.bench_function("enqueue_dequeue_churn_1024", |b| {
        b.iter(|| {
            let mut queue = Queue::new().unwrap();
            for n in 0..ELEMENTS {
                queue.enqueue(black_box(n)).unwrap();
            }
            while let Ok(n) = queue.dequeue() {
                black_box(n);
            }
            queue
        });
    });

    group.finish();
}

// =============================================================================
// ARRAY BENCHMARKS
// =============================================================================

fn bench_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("array");
    group.throughput(Throughput::Elements(ELEMENTS));

    group.bench_function("mid_insert_1024", |b| {
        b.iter(|| {
            let mut array = Array::new().unwrap();
            for n in 0..ELEMENTS {
                array.insert(array.len() / 2, black_box(n)).unwrap();
            }
            array
        });
    });

    group.bench_function("indexed_read_1024", |b| {
        let mut array = Array::new().unwrap();
        for n in 0..ELEMENTS {
            array.push(n).unwrap();
        }
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..array.len() {
                sum = sum.wrapping_add(array.get(i).unwrap());
            }
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_stack, bench_queue, bench_array);
criterion_main!(benches);
