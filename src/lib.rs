//! # Bideque
//!
//! A lock-free concurrent double-ended queue for high-performance concurrent programming in Rust.
//!
//! ## 🚀 Features
//!
//! - **Anchored Deque**: push and pop at both ends from any number of threads, with no
//!   mutual-exclusion primitive anywhere on the hot path
//! - **Single-word linearization**: every state change is one compare-and-swap on a single
//!   atomic anchor that publishes both end pointers and a transient push status
//! - **Cooperative stabilization**: a stalled push is completed by whichever thread touches
//!   the deque next, so no operation ever waits on a specific other thread
//! - **Safe reclamation**: epoch-based memory reclamation keeps detached nodes alive exactly
//!   as long as a concurrent observer might still reach them
//! - **Performance Metrics**: operation and contention accounting through the
//!   [`MetricsCollector`] trait
//!
//! ## 🎯 Philosophy
//!
//! Bideque focuses on providing:
//! - Lock-freedom: system-wide progress no matter how any individual thread is scheduled
//! - Strict correctness through pointer-identity CAS and epoch-deferred reuse
//! - An API that cannot be misused: pushes are infallible, empty pops are `None`, not errors
//! - Real-world test coverage: model conformance, exhaustive interleavings, and stress runs
//!
//! ## ⚡ Quick Start
//!
//! ```rust
//! use bideque::AnchoredDeque;
//!
//! let deque = AnchoredDeque::new();
//! deque.push_right(2);
//! deque.push_left(1);
//!
//! assert_eq!(deque.try_pop_left(), Some(1));
//! assert_eq!(deque.try_pop_right(), Some(2));
//! assert!(deque.is_empty());
//! ```
//!
//! ## 🔒 Thread Safety
//!
//! [`AnchoredDeque`] is safe to share across threads without additional synchronization.
//! All operations are linearizable at a successful anchor CAS; `is_empty` is a racy but
//! well-defined snapshot of the anchor.
//!
//! ## 📊 Performance
//!
//! Bideque is optimized for modern multi-core processors with careful attention to:
//! - A single contended word, cache-line padded so its neighbors never false-share with it
//! - Acquire/release memory orderings, no stronger than the algorithm requires
//! - Exponential backoff between CAS retries under contention
//! - Helping instead of waiting whenever a partially published push is observed

pub mod deque;
pub mod metrics;

pub use crate::deque::AnchoredDeque;
pub use crate::metrics::{MetricsCollector, PerformanceMetrics};
