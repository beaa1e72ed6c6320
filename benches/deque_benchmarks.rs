//! Benchmarks for the anchored deque
//!
//! Compares bideque against the obvious alternatives:
//! - std::collections::VecDeque behind a Mutex (the lock-based baseline)
//! - crossbeam::queue::SegQueue (a lock-free single-ended baseline)
//!
//! The comparisons are not apples-to-apples on semantics (SegQueue is FIFO-only),
//! but they bracket the cost of the anchor protocol from both sides.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::VecDeque;
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

use bideque::AnchoredDeque;
use crossbeam::queue::SegQueue;

const SMALL: usize = 100;
const MEDIUM: usize = 1_000;
const LARGE: usize = 10_000;

fn bench_single_thread_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_thread_push_pop");

    for size in [SMALL, MEDIUM, LARGE].iter() {
        group.bench_with_input(BenchmarkId::new("bideque", size), size, |b, &size| {
            b.iter(|| {
                let deque = AnchoredDeque::new();
                for i in 0..size {
                    deque.push_right(black_box(i));
                }
                for _ in 0..size {
                    black_box(deque.try_pop_left());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("mutex_vecdeque", size), size, |b, &size| {
            b.iter(|| {
                let deque = Mutex::new(VecDeque::new());
                for i in 0..size {
                    deque.lock().unwrap().push_back(black_box(i));
                }
                for _ in 0..size {
                    black_box(deque.lock().unwrap().pop_front());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("crossbeam_seg", size), size, |b, &size| {
            b.iter(|| {
                let queue = SegQueue::new();
                for i in 0..size {
                    queue.push(black_box(i));
                }
                for _ in 0..size {
                    black_box(queue.pop());
                }
            })
        });
    }

    group.finish();
}

fn bench_mixed_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_ends");

    for size in [SMALL, MEDIUM, LARGE].iter() {
        group.bench_with_input(BenchmarkId::new("bideque", size), size, |b, &size| {
            b.iter(|| {
                let deque = AnchoredDeque::new();
                for i in 0..size {
                    if i % 2 == 0 {
                        deque.push_right(black_box(i));
                    } else {
                        deque.push_left(black_box(i));
                    }
                }
                for i in 0..size {
                    if i % 2 == 0 {
                        black_box(deque.try_pop_left());
                    } else {
                        black_box(deque.try_pop_right());
                    }
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("mutex_vecdeque", size), size, |b, &size| {
            b.iter(|| {
                let deque = Mutex::new(VecDeque::new());
                for i in 0..size {
                    if i % 2 == 0 {
                        deque.lock().unwrap().push_back(black_box(i));
                    } else {
                        deque.lock().unwrap().push_front(black_box(i));
                    }
                }
                for i in 0..size {
                    if i % 2 == 0 {
                        black_box(deque.lock().unwrap().pop_front());
                    } else {
                        black_box(deque.lock().unwrap().pop_back());
                    }
                }
            })
        });
    }

    group.finish();
}

fn bench_multi_thread_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_thread_throughput");
    group.sample_size(10);

    const ITEMS_PER_THREAD: usize = 10_000;

    for num_threads in [2usize, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("bideque", num_threads),
            num_threads,
            |b, &num_threads| {
                b.iter(|| {
                    let deque = Arc::new(AnchoredDeque::new());
                    let barrier = Arc::new(Barrier::new(num_threads * 2));
                    let mut handles = vec![];

                    for _ in 0..num_threads {
                        let deque = Arc::clone(&deque);
                        let barrier = Arc::clone(&barrier);
                        handles.push(thread::spawn(move || {
                            barrier.wait();
                            for i in 0..ITEMS_PER_THREAD {
                                deque.push_right(i);
                            }
                        }));
                    }
                    for _ in 0..num_threads {
                        let deque = Arc::clone(&deque);
                        let barrier = Arc::clone(&barrier);
                        handles.push(thread::spawn(move || {
                            barrier.wait();
                            let mut received = 0;
                            while received < ITEMS_PER_THREAD {
                                if deque.try_pop_left().is_some() {
                                    received += 1;
                                } else {
                                    thread::yield_now();
                                }
                            }
                        }));
                    }

                    for handle in handles {
                        handle.join().unwrap();
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("crossbeam_seg", num_threads),
            num_threads,
            |b, &num_threads| {
                b.iter(|| {
                    let queue = Arc::new(SegQueue::new());
                    let barrier = Arc::new(Barrier::new(num_threads * 2));
                    let mut handles = vec![];

                    for _ in 0..num_threads {
                        let queue = Arc::clone(&queue);
                        let barrier = Arc::clone(&barrier);
                        handles.push(thread::spawn(move || {
                            barrier.wait();
                            for i in 0..ITEMS_PER_THREAD {
                                queue.push(i);
                            }
                        }));
                    }
                    for _ in 0..num_threads {
                        let queue = Arc::clone(&queue);
                        let barrier = Arc::clone(&barrier);
                        handles.push(thread::spawn(move || {
                            barrier.wait();
                            let mut received = 0;
                            while received < ITEMS_PER_THREAD {
                                if queue.pop().is_some() {
                                    received += 1;
                                } else {
                                    thread::yield_now();
                                }
                            }
                        }));
                    }

                    for handle in handles {
                        handle.join().unwrap();
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_thread_push_pop,
    bench_mixed_ends,
    bench_multi_thread_throughput
);
criterion_main!(benches);
