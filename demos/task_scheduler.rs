//! Task scheduler example for bideque
//!
//! A deque with symmetric ends supports two dispatch disciplines at once:
//! a dispatcher appends tasks on the right and workers take from the left
//! (FIFO fairness), while a worker that produces follow-up tasks can push
//! them on the left and immediately take them back (LIFO locality).

use bideque::AnchoredDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug)]
enum Task {
    Root(usize),
    FollowUp(usize),
}

fn main() {
    println!("Bideque Task Scheduler Example");
    println!("==============================");

    let queue: Arc<AnchoredDeque<Task>> = Arc::new(AnchoredDeque::new());
    let completed = Arc::new(AtomicUsize::new(0));

    const ROOT_TASKS: usize = 200;
    const FOLLOW_UPS_PER_ROOT: usize = 3;
    const TOTAL: usize = ROOT_TASKS * (1 + FOLLOW_UPS_PER_ROOT);

    // Dispatcher: fair FIFO dispatch through the right end.
    println!("\n1. Dispatching {} root tasks...", ROOT_TASKS);
    let dispatcher = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            for id in 0..ROOT_TASKS {
                queue.push_right(Task::Root(id));
            }
        })
    };

    // Workers: take from the left; follow-up tasks go back on the left so the
    // worker pool handles them while their data is still warm.
    println!("2. Starting 4 workers...");
    let workers: Vec<_> = (0..4)
        .map(|worker_id| {
            let queue = Arc::clone(&queue);
            let completed = Arc::clone(&completed);
            thread::spawn(move || {
                let mut handled = 0;
                while completed.load(Ordering::Relaxed) < TOTAL {
                    match queue.try_pop_left() {
                        Some(Task::Root(id)) => {
                            for sub in 0..FOLLOW_UPS_PER_ROOT {
                                queue.push_left(Task::FollowUp(id * FOLLOW_UPS_PER_ROOT + sub));
                            }
                            completed.fetch_add(1, Ordering::Relaxed);
                            handled += 1;
                        }
                        Some(Task::FollowUp(_)) => {
                            completed.fetch_add(1, Ordering::Relaxed);
                            handled += 1;
                        }
                        None => thread::yield_now(),
                    }
                }
                println!("   Worker {} handled {} tasks", worker_id, handled);
                handled
            })
        })
        .collect();

    dispatcher.join().unwrap();
    let handled_total: usize = workers.into_iter().map(|w| w.join().unwrap()).sum();

    println!("\n3. Results:");
    println!("   Tasks completed: {}", completed.load(Ordering::Relaxed));
    println!("   Tasks handled:   {}", handled_total);
    println!("   Queue empty:     {}", queue.is_empty());

    assert_eq!(handled_total, TOTAL);
    assert!(queue.is_empty());
}
