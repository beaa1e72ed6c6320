//! Property-based tests for the anchored deque using proptest
//!
//! These tests verify that the deque maintains its invariants across arbitrary
//! operation sequences, using `std::collections::VecDeque` as the sequential model.

use super::anchored::AnchoredDeque;
use proptest::prelude::*;
use std::collections::VecDeque;
use std::sync::Arc;
use std::thread;

/// One deque operation, as generated by proptest.
#[derive(Debug, Clone, Copy)]
enum Op {
    PushLeft(i32),
    PushRight(i32),
    PopLeft,
    PopRight,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushLeft),
        any::<i32>().prop_map(Op::PushRight),
        Just(Op::PopLeft),
        Just(Op::PopRight),
    ]
}

mod sequential_properties {
    use super::*;

    proptest! {
        /// The deque agrees with VecDeque on every operation of any sequence.
        #[test]
        fn test_matches_vecdeque_model(ops in prop::collection::vec(op_strategy(), 1..200)) {
            let deque = AnchoredDeque::new();
            let mut model = VecDeque::new();

            for op in ops {
                match op {
                    Op::PushLeft(value) => {
                        deque.push_left(value);
                        model.push_front(value);
                    }
                    Op::PushRight(value) => {
                        deque.push_right(value);
                        model.push_back(value);
                    }
                    Op::PopLeft => prop_assert_eq!(deque.try_pop_left(), model.pop_front()),
                    Op::PopRight => prop_assert_eq!(deque.try_pop_right(), model.pop_back()),
                }
                prop_assert_eq!(deque.is_empty(), model.is_empty());
            }

            // Whatever is left drains out in model order from the left.
            while let Some(expected) = model.pop_front() {
                prop_assert_eq!(deque.try_pop_left(), Some(expected));
            }
            prop_assert!(deque.is_empty());
        }

        /// Draining from the right is the mirror of draining from the left.
        #[test]
        fn test_right_drain_matches_model(ops in prop::collection::vec(op_strategy(), 1..100)) {
            let deque = AnchoredDeque::new();
            let mut model = VecDeque::new();

            for op in ops {
                match op {
                    Op::PushLeft(value) => {
                        deque.push_left(value);
                        model.push_front(value);
                    }
                    Op::PushRight(value) => {
                        deque.push_right(value);
                        model.push_back(value);
                    }
                    Op::PopLeft => {
                        deque.try_pop_left();
                        model.pop_front();
                    }
                    Op::PopRight => {
                        deque.try_pop_right();
                        model.pop_back();
                    }
                }
            }

            while let Some(expected) = model.pop_back() {
                prop_assert_eq!(deque.try_pop_right(), Some(expected));
            }
            prop_assert!(deque.is_empty());
        }

        /// Popping an empty deque any number of times changes nothing.
        #[test]
        fn test_empty_pops_change_nothing(value in any::<i32>(), attempts in 1usize..20) {
            let deque = AnchoredDeque::new();

            for _ in 0..attempts {
                prop_assert_eq!(deque.try_pop_left(), None);
                prop_assert_eq!(deque.try_pop_right(), None);
                prop_assert!(deque.is_empty());
            }

            deque.push_right(value);
            prop_assert_eq!(deque.try_pop_left(), Some(value));
            prop_assert!(deque.is_empty());
        }

        /// Every pushed payload is dropped exactly once, popped or not.
        #[test]
        fn test_no_payload_leaks(values in prop::collection::vec(any::<i32>(), 1..100)) {
            use std::sync::atomic::{AtomicUsize, Ordering};

            static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

            #[derive(Debug)]
            struct DropTracker {
                _id: i32,
            }

            impl Drop for DropTracker {
                fn drop(&mut self) {
                    DROP_COUNT.fetch_add(1, Ordering::Relaxed);
                }
            }

            let before = DROP_COUNT.load(Ordering::Relaxed);
            {
                let deque = AnchoredDeque::new();
                for &value in &values {
                    if value % 2 == 0 {
                        deque.push_left(DropTracker { _id: value });
                    } else {
                        deque.push_right(DropTracker { _id: value });
                    }
                }

                // Pop about half; the rest is reclaimed when the deque drops.
                for _ in 0..values.len() / 2 {
                    drop(deque.try_pop_right());
                }
            }
            let dropped = DROP_COUNT.load(Ordering::Relaxed) - before;
            prop_assert_eq!(dropped, values.len());
        }
    }
}

mod concurrent_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// The multiset of popped values equals the multiset of pushed values.
        #[test]
        fn test_multiset_conservation(
            num_threads in 2usize..5,
            items_per_thread in 10usize..50
        ) {
            let deque = Arc::new(AnchoredDeque::<usize>::new());
            let mut handles = vec![];

            for thread_id in 0..num_threads {
                let deque = Arc::clone(&deque);
                handles.push(thread::spawn(move || {
                    for i in 0..items_per_thread {
                        let value = thread_id * items_per_thread + i;
                        if thread_id % 2 == 0 {
                            deque.push_right(value);
                        } else {
                            deque.push_left(value);
                        }
                    }
                    Vec::new()
                }));
            }

            for _ in 0..num_threads {
                let deque = Arc::clone(&deque);
                handles.push(thread::spawn(move || {
                    let mut received = Vec::new();
                    while received.len() < items_per_thread {
                        if let Some(value) = deque.try_pop_left() {
                            received.push(value);
                        } else {
                            thread::yield_now();
                        }
                    }
                    received
                }));
            }

            let mut all_received = Vec::new();
            for handle in handles {
                all_received.extend(handle.join().unwrap());
            }

            let expected_total = num_threads * items_per_thread;
            prop_assert_eq!(all_received.len(), expected_total);

            let mut sorted = all_received.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), expected_total);

            prop_assert!(deque.is_empty());
        }
    }
}
