//! Basic usage example for bideque
//!
//! This example walks through the deque's operations: both ends in a single
//! thread, concurrent producers and consumers, and reading the metrics.

use bideque::{AnchoredDeque, MetricsCollector};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("Bideque Basic Usage Example");
    println!("===========================");

    let deque: Arc<AnchoredDeque<i32>> = Arc::new(AnchoredDeque::new());

    // Basic push/pop at both ends
    println!("\n1. Basic Operations:");
    deque.push_right(2);
    deque.push_right(3);
    deque.push_left(1);

    println!("   Pushed: 1 on the left, 2 and 3 on the right");
    println!("   Pop left:  {:?}", deque.try_pop_left()); // Some(1)
    println!("   Pop right: {:?}", deque.try_pop_right()); // Some(3)
    println!("   Pop left:  {:?}", deque.try_pop_left()); // Some(2)
    println!("   Pop left:  {:?} (empty is not an error)", deque.try_pop_left());

    // Multi-producer scenario: pushes never fail, so producers need no retry loop
    println!("\n2. Multi-Producer:");
    let producer_handles: Vec<_> = (0..4)
        .map(|i| {
            let deque = Arc::clone(&deque);
            thread::spawn(move || {
                for j in 0..25 {
                    let value = i * 25 + j;
                    if i % 2 == 0 {
                        deque.push_right(value);
                    } else {
                        deque.push_left(value);
                    }
                }
                println!("   Producer {} finished with 25 items", i);
                25
            })
        })
        .collect();

    let mut total_produced = 0;
    for handle in producer_handles {
        total_produced += handle.join().unwrap();
    }

    // Multi-consumer scenario: consumers drain from both ends concurrently
    println!("\n3. Multi-Consumer:");
    let consumer_handles: Vec<_> = (0..4)
        .map(|i| {
            let deque = Arc::clone(&deque);
            thread::spawn(move || {
                let mut consumed = 0;
                let mut sum: i64 = 0;
                while consumed < 25 {
                    let popped = if i % 2 == 0 {
                        deque.try_pop_left()
                    } else {
                        deque.try_pop_right()
                    };
                    match popped {
                        Some(value) => {
                            consumed += 1;
                            sum += i64::from(value);
                        }
                        None => thread::yield_now(),
                    }
                }
                println!("   Consumer {} finished: {} items, sum: {}", i, consumed, sum);
                (consumed, sum)
            })
        })
        .collect();

    let mut total_consumed = 0;
    let mut total_sum = 0;
    for handle in consumer_handles {
        let (consumed, sum) = handle.join().unwrap();
        total_consumed += consumed;
        total_sum += sum;
    }

    println!("\n4. Results:");
    println!("   Produced:  {}", total_produced);
    println!("   Consumed:  {}", total_consumed);
    println!("   Sum:       {} (expected {})", total_sum, (0..100).sum::<i64>());
    println!("   Empty:     {}", deque.is_empty());

    // Metrics collected along the way
    println!("\n5. Metrics:");
    let metrics = deque.metrics();
    println!("   Total operations:   {}", metrics.total_operations);
    println!("   Success rate:       {:.2}%", metrics.success_rate());
    println!("   Contention rate:    {:.2}%", metrics.contention_rate());
    println!("   Avg operation time: {:?}", metrics.avg_operation_time());

    assert_eq!(total_consumed, total_produced);
    assert_eq!(total_sum, (0..100).sum::<i64>());
    assert!(deque.is_empty());
}
