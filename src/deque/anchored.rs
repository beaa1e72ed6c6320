//! Anchored Lock-Free Deque Implementation
//!
//! This module implements a lock-free double-ended queue in which every operation is
//! linearized through a single atomic word, the *anchor*. The anchor is an immutable
//! triple of the leftmost node, the rightmost node, and a status tag; each state change
//! allocates a fresh anchor and installs it with one compare-and-swap.
//!
//! ## Design
//!
//! Nodes form a doubly-linked chain reachable from either anchor end:
//! - A push publishes its node by swinging the anchor to a `LeftPush`/`RightPush`
//!   state, then *stabilizes* by repairing the previous end node's outward link
//! - Any thread that observes a non-stable anchor performs the stabilization itself
//!   before proceeding, so a stalled pusher never blocks the rest of the system
//! - A pop of a multi-node deque requires a stable anchor; the inward link it follows
//!   is guaranteed consistent by the stabilization protocol
//!
//! ## Memory Ordering
//!
//! - Anchor loads use `Acquire`; anchor CAS uses `AcqRel` on success
//! - Node links written before publication use plain `Relaxed` stores; the publishing
//!   anchor CAS releases them
//! - Node links mutated after publication use CAS with `AcqRel`/`Acquire`
//!
//! ## Memory Reclamation
//!
//! Superseded anchors and popped nodes are retired through epoch-based reclamation.
//! Every operation pins the epoch before its first anchor load, so an address is never
//! reused while a concurrent observer may still hold it. Pointer-identity CAS is
//! therefore ABA-safe.
//!
//! ## Performance Characteristics
//!
//! - **push**: O(1), lock-free, never fails
//! - **pop**: O(1), lock-free, `None` on empty
//! - **is_empty**: O(1) racy snapshot

use std::fmt;
use std::mem::ManuallyDrop;
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crossbeam_epoch::{self as epoch, Atomic, Guard, Owned, Shared};
use crossbeam_utils::{Backoff, CachePadded};

use crate::metrics::{AtomicMetrics, MetricsCollector};

/// Status tag carried by the anchor.
///
/// `LeftPush`/`RightPush` mark the window between a push's publishing CAS and the
/// repair of the previous end node's outward link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Stable,
    LeftPush,
    RightPush,
}

/// A node in the deque.
///
/// The payload is written once at creation. The neighbor links are plain-stored only
/// while the node is still private to the pushing thread; after publication they are
/// mutated exclusively by CAS.
struct Node<T> {
    value: ManuallyDrop<T>,
    left: Atomic<Node<T>>,
    right: Atomic<Node<T>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value: ManuallyDrop::new(value),
            left: Atomic::null(),
            right: Atomic::null(),
        }
    }
}

/// The anchor: both end pointers plus the push status, replaced atomically as a unit.
///
/// An anchor is immutable once published. CAS equality is pointer identity, so two
/// anchors with equal fields are still distinct witnesses; this is what lets helpers
/// detect that the state they read has been superseded.
struct Anchor<T> {
    left: Atomic<Node<T>>,
    right: Atomic<Node<T>>,
    status: Status,
}

impl<T> Anchor<T> {
    fn empty() -> Self {
        Self {
            left: Atomic::null(),
            right: Atomic::null(),
            status: Status::Stable,
        }
    }
}

/// Moves the payload out of a node that has just been detached by a successful CAS.
///
/// The caller must be the unique detacher of `node` and must retire it afterwards;
/// `ManuallyDrop` keeps the later node destruction from dropping the payload again.
unsafe fn take_value<T>(node: Shared<'_, Node<T>>) -> T {
    ManuallyDrop::into_inner(ptr::read(&node.deref().value))
}

/// A lock-free double-ended queue linearized through a single atomic anchor
///
/// Any number of threads may push and pop at either end concurrently. Every operation
/// is a CAS-retry loop on the anchor word; a successful CAS is the operation's
/// linearization point.
///
/// # Type Parameters
///
/// * `T` - The type of elements stored in the deque
///
/// # Examples
///
/// ```rust
/// use bideque::AnchoredDeque;
///
/// let deque = AnchoredDeque::new();
///
/// deque.push_right(2);
/// deque.push_right(3);
/// deque.push_left(1);
///
/// assert_eq!(deque.try_pop_left(), Some(1));
/// assert_eq!(deque.try_pop_right(), Some(3));
/// assert_eq!(deque.try_pop_left(), Some(2));
/// assert_eq!(deque.try_pop_left(), None);
/// ```
pub struct AnchoredDeque<T> {
    /// The single shared mutable cell. Padded so that nothing else shares its line.
    anchor: CachePadded<Atomic<Anchor<T>>>,
    /// Performance metrics
    metrics: AtomicMetrics,
    /// Metrics enabled flag
    metrics_enabled: AtomicUsize,
}

unsafe impl<T: Send> Send for AnchoredDeque<T> {}
unsafe impl<T: Send> Sync for AnchoredDeque<T> {}

impl<T> AnchoredDeque<T> {
    /// Create a new empty deque
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bideque::AnchoredDeque;
    ///
    /// let deque: AnchoredDeque<i32> = AnchoredDeque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            anchor: CachePadded::new(Atomic::new(Anchor::empty())),
            metrics: AtomicMetrics::default(),
            metrics_enabled: AtomicUsize::new(1), // Enabled by default
        }
    }

    /// Push a value onto the right end of the deque
    ///
    /// This operation is lock-free and always succeeds. It returns once the value is
    /// linearized into the deque and stabilization has been initiated; another thread
    /// may finish the stabilization on this thread's behalf.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bideque::AnchoredDeque;
    ///
    /// let deque = AnchoredDeque::new();
    /// deque.push_right(42);
    /// assert_eq!(deque.try_pop_right(), Some(42));
    /// ```
    #[inline]
    pub fn push_right(&self, value: T) {
        let start = self.op_timer();
        let guard = &epoch::pin();
        let backoff = Backoff::new();
        let node = Owned::new(Node::new(value)).into_shared(guard);

        loop {
            let a = self.anchor.load(Ordering::Acquire, guard);
            let anchor = unsafe { a.deref() };
            let right = anchor.right.load(Ordering::Relaxed, guard);

            if right.is_null() {
                // Empty deque: the new node becomes both ends. There is no previous
                // end node to repair, so no stabilization is needed.
                let next = Owned::new(Anchor {
                    left: Atomic::from(node),
                    right: Atomic::from(node),
                    status: anchor.status,
                });
                match self
                    .anchor
                    .compare_exchange(a, next, Ordering::AcqRel, Ordering::Acquire, guard)
                {
                    Ok(_) => {
                        unsafe { guard.defer_destroy(a) };
                        self.record_success(start);
                        return;
                    }
                    Err(_) => {
                        self.record_contention(start);
                        backoff.spin();
                    }
                }
            } else if anchor.status == Status::Stable {
                // The node is still private, so its back link may be plain-stored.
                unsafe { node.deref() }.left.store(right, Ordering::Relaxed);
                let next = Owned::new(Anchor {
                    left: Atomic::from(anchor.left.load(Ordering::Relaxed, guard)),
                    right: Atomic::from(node),
                    status: Status::RightPush,
                });
                match self
                    .anchor
                    .compare_exchange(a, next, Ordering::AcqRel, Ordering::Acquire, guard)
                {
                    Ok(published) => {
                        unsafe { guard.defer_destroy(a) };
                        self.stabilize_right(published, guard);
                        self.record_success(start);
                        return;
                    }
                    Err(_) => {
                        self.record_contention(start);
                        backoff.spin();
                    }
                }
            } else {
                // Another push is mid-flight. Help it finish, then retry.
                self.stabilize(a, guard);
            }
        }
    }

    /// Push a value onto the left end of the deque
    ///
    /// Mirror of [`push_right`](Self::push_right): lock-free, infallible, returns
    /// after the publishing CAS with stabilization initiated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bideque::AnchoredDeque;
    ///
    /// let deque = AnchoredDeque::new();
    /// deque.push_left(42);
    /// assert_eq!(deque.try_pop_left(), Some(42));
    /// ```
    #[inline]
    pub fn push_left(&self, value: T) {
        let start = self.op_timer();
        let guard = &epoch::pin();
        let backoff = Backoff::new();
        let node = Owned::new(Node::new(value)).into_shared(guard);

        loop {
            let a = self.anchor.load(Ordering::Acquire, guard);
            let anchor = unsafe { a.deref() };
            let left = anchor.left.load(Ordering::Relaxed, guard);

            if left.is_null() {
                let next = Owned::new(Anchor {
                    left: Atomic::from(node),
                    right: Atomic::from(node),
                    status: anchor.status,
                });
                match self
                    .anchor
                    .compare_exchange(a, next, Ordering::AcqRel, Ordering::Acquire, guard)
                {
                    Ok(_) => {
                        unsafe { guard.defer_destroy(a) };
                        self.record_success(start);
                        return;
                    }
                    Err(_) => {
                        self.record_contention(start);
                        backoff.spin();
                    }
                }
            } else if anchor.status == Status::Stable {
                unsafe { node.deref() }.right.store(left, Ordering::Relaxed);
                let next = Owned::new(Anchor {
                    left: Atomic::from(node),
                    right: Atomic::from(anchor.right.load(Ordering::Relaxed, guard)),
                    status: Status::LeftPush,
                });
                match self
                    .anchor
                    .compare_exchange(a, next, Ordering::AcqRel, Ordering::Acquire, guard)
                {
                    Ok(published) => {
                        unsafe { guard.defer_destroy(a) };
                        self.stabilize_left(published, guard);
                        self.record_success(start);
                        return;
                    }
                    Err(_) => {
                        self.record_contention(start);
                        backoff.spin();
                    }
                }
            } else {
                self.stabilize(a, guard);
            }
        }
    }

    /// Pop a value from the right end of the deque
    ///
    /// This operation is lock-free. A pop that observes an in-progress push first
    /// helps complete it: updating the anchor past the right end requires the
    /// predecessor chain the stabilization repairs.
    ///
    /// # Returns
    ///
    /// * `Some(value)` if a node was removed from the right end
    /// * `None` if the deque was observed empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bideque::AnchoredDeque;
    ///
    /// let deque = AnchoredDeque::new();
    /// assert_eq!(deque.try_pop_right(), None);
    ///
    /// deque.push_right(1);
    /// deque.push_right(2);
    /// assert_eq!(deque.try_pop_right(), Some(2));
    /// assert_eq!(deque.try_pop_right(), Some(1));
    /// ```
    #[inline]
    pub fn try_pop_right(&self) -> Option<T> {
        let start = self.op_timer();
        let guard = &epoch::pin();
        let backoff = Backoff::new();

        loop {
            let a = self.anchor.load(Ordering::Acquire, guard);
            let anchor = unsafe { a.deref() };
            let right = anchor.right.load(Ordering::Relaxed, guard);

            if right.is_null() {
                self.record_failure(start);
                return None;
            }

            let left = anchor.left.load(Ordering::Relaxed, guard);
            if right == left {
                // Singleton: swing the anchor straight to empty.
                let next = Owned::new(Anchor::empty());
                match self
                    .anchor
                    .compare_exchange(a, next, Ordering::AcqRel, Ordering::Acquire, guard)
                {
                    Ok(_) => unsafe {
                        let value = take_value(right);
                        guard.defer_destroy(right);
                        guard.defer_destroy(a);
                        self.record_success(start);
                        return Some(value);
                    },
                    Err(_) => {
                        self.record_contention(start);
                        backoff.spin();
                    }
                }
            } else if anchor.status == Status::Stable {
                // The back link of the rightmost node is consistent in a stable
                // anchor; its target becomes the new right end.
                let prev = unsafe { right.deref() }.left.load(Ordering::Acquire, guard);
                let next = Owned::new(Anchor {
                    left: Atomic::from(left),
                    right: Atomic::from(prev),
                    status: Status::Stable,
                });
                match self
                    .anchor
                    .compare_exchange(a, next, Ordering::AcqRel, Ordering::Acquire, guard)
                {
                    Ok(_) => unsafe {
                        let value = take_value(right);
                        guard.defer_destroy(right);
                        guard.defer_destroy(a);
                        self.record_success(start);
                        return Some(value);
                    },
                    Err(_) => {
                        self.record_contention(start);
                        backoff.spin();
                    }
                }
            } else {
                self.stabilize(a, guard);
            }
        }
    }

    /// Pop a value from the left end of the deque
    ///
    /// Mirror of [`try_pop_right`](Self::try_pop_right).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bideque::AnchoredDeque;
    ///
    /// let deque = AnchoredDeque::new();
    /// deque.push_right(1);
    /// deque.push_right(2);
    /// assert_eq!(deque.try_pop_left(), Some(1));
    /// assert_eq!(deque.try_pop_left(), Some(2));
    /// assert_eq!(deque.try_pop_left(), None);
    /// ```
    #[inline]
    pub fn try_pop_left(&self) -> Option<T> {
        let start = self.op_timer();
        let guard = &epoch::pin();
        let backoff = Backoff::new();

        loop {
            let a = self.anchor.load(Ordering::Acquire, guard);
            let anchor = unsafe { a.deref() };
            let left = anchor.left.load(Ordering::Relaxed, guard);

            if left.is_null() {
                self.record_failure(start);
                return None;
            }

            let right = anchor.right.load(Ordering::Relaxed, guard);
            if left == right {
                let next = Owned::new(Anchor::empty());
                match self
                    .anchor
                    .compare_exchange(a, next, Ordering::AcqRel, Ordering::Acquire, guard)
                {
                    Ok(_) => unsafe {
                        let value = take_value(left);
                        guard.defer_destroy(left);
                        guard.defer_destroy(a);
                        self.record_success(start);
                        return Some(value);
                    },
                    Err(_) => {
                        self.record_contention(start);
                        backoff.spin();
                    }
                }
            } else if anchor.status == Status::Stable {
                let next_left = unsafe { left.deref() }.right.load(Ordering::Acquire, guard);
                let next = Owned::new(Anchor {
                    left: Atomic::from(next_left),
                    right: Atomic::from(right),
                    status: Status::Stable,
                });
                match self
                    .anchor
                    .compare_exchange(a, next, Ordering::AcqRel, Ordering::Acquire, guard)
                {
                    Ok(_) => unsafe {
                        let value = take_value(left);
                        guard.defer_destroy(left);
                        guard.defer_destroy(a);
                        self.record_success(start);
                        return Some(value);
                    },
                    Err(_) => {
                        self.record_contention(start);
                        backoff.spin();
                    }
                }
            } else {
                self.stabilize(a, guard);
            }
        }
    }

    /// Check if the deque is empty
    ///
    /// This is a snapshot of the current anchor. It is linearizable with respect to
    /// the anchor load but says nothing about the deque an instant later.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bideque::AnchoredDeque;
    ///
    /// let deque = AnchoredDeque::new();
    /// assert!(deque.is_empty());
    ///
    /// deque.push_left(7);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        let guard = &epoch::pin();
        let anchor = unsafe { self.anchor.load(Ordering::Acquire, guard).deref() };
        let left = anchor.left.load(Ordering::Relaxed, guard);
        // Both ends are absent or present together.
        debug_assert_eq!(
            left.is_null(),
            anchor.right.load(Ordering::Relaxed, guard).is_null()
        );
        left.is_null()
    }

    /// Completes the stabilization of whatever push `a` published, if any.
    fn stabilize<'g>(&self, a: Shared<'g, Anchor<T>>, guard: &'g Guard) {
        match unsafe { a.deref() }.status {
            Status::RightPush => self.stabilize_right(a, guard),
            Status::LeftPush => self.stabilize_left(a, guard),
            Status::Stable => {}
        }
    }

    /// Repairs the old rightmost node's forward link, then flips `a` to stable.
    ///
    /// Nodes hanging off `a` may only be dereferenced after confirming `a` is still
    /// the live anchor: while it is, no pop has detached them.
    fn stabilize_right<'g>(&self, a: Shared<'g, Anchor<T>>, guard: &'g Guard) {
        if self.anchor.load(Ordering::Acquire, guard) != a {
            return;
        }
        let anchor = unsafe { a.deref() };
        let node = anchor.right.load(Ordering::Relaxed, guard);
        let prev = unsafe { node.deref() }.left.load(Ordering::Acquire, guard);
        let prev_next = unsafe { prev.deref() }.right.load(Ordering::Acquire, guard);

        if prev_next != node {
            // If the anchor has moved on, `node` may already have been popped and
            // `prev` may no longer be its predecessor; writing into `prev` then would
            // corrupt the chain of a newer state. An unchanged anchor rules that out.
            if self.anchor.load(Ordering::Acquire, guard) != a {
                return;
            }
            // Failure is benign: another helper already advanced the link.
            let _ = unsafe { prev.deref() }.right.compare_exchange(
                prev_next,
                node,
                Ordering::AcqRel,
                Ordering::Acquire,
                guard,
            );
        }

        let stable = Owned::new(Anchor {
            left: Atomic::from(anchor.left.load(Ordering::Relaxed, guard)),
            right: Atomic::from(node),
            status: Status::Stable,
        });
        // Failure is benign here too; whoever won installed an equivalent anchor.
        if self
            .anchor
            .compare_exchange(a, stable, Ordering::AcqRel, Ordering::Acquire, guard)
            .is_ok()
        {
            unsafe { guard.defer_destroy(a) };
        }
    }

    /// Mirror of [`stabilize_right`](Self::stabilize_right).
    fn stabilize_left<'g>(&self, a: Shared<'g, Anchor<T>>, guard: &'g Guard) {
        if self.anchor.load(Ordering::Acquire, guard) != a {
            return;
        }
        let anchor = unsafe { a.deref() };
        let node = anchor.left.load(Ordering::Relaxed, guard);
        let prev = unsafe { node.deref() }.right.load(Ordering::Acquire, guard);
        let prev_prev = unsafe { prev.deref() }.left.load(Ordering::Acquire, guard);

        if prev_prev != node {
            if self.anchor.load(Ordering::Acquire, guard) != a {
                return;
            }
            let _ = unsafe { prev.deref() }.left.compare_exchange(
                prev_prev,
                node,
                Ordering::AcqRel,
                Ordering::Acquire,
                guard,
            );
        }

        let stable = Owned::new(Anchor {
            left: Atomic::from(node),
            right: Atomic::from(anchor.right.load(Ordering::Relaxed, guard)),
            status: Status::Stable,
        });
        if self
            .anchor
            .compare_exchange(a, stable, Ordering::AcqRel, Ordering::Acquire, guard)
            .is_ok()
        {
            unsafe { guard.defer_destroy(a) };
        }
    }

    #[inline]
    fn op_timer(&self) -> Option<Instant> {
        if self.is_metrics_enabled() {
            Some(Instant::now())
        } else {
            None
        }
    }

    #[inline]
    fn record_success(&self, start: Option<Instant>) {
        if let Some(start) = start {
            self.metrics.record_success(start.elapsed());
        }
    }

    #[inline]
    fn record_failure(&self, start: Option<Instant>) {
        if start.is_some() {
            self.metrics.record_failure();
        }
    }

    #[inline]
    fn record_contention(&self, start: Option<Instant>) {
        if start.is_some() {
            self.metrics.record_contention();
        }
    }
}

impl<T> Default for AnchoredDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AnchoredDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = &epoch::pin();
        let anchor = unsafe { self.anchor.load(Ordering::Acquire, guard).deref() };
        f.debug_struct("AnchoredDeque")
            .field("status", &anchor.status)
            .field(
                "is_empty",
                &anchor.left.load(Ordering::Relaxed, guard).is_null(),
            )
            .finish()
    }
}

impl<T> Drop for AnchoredDeque<T> {
    fn drop(&mut self) {
        // Exclusive access: no other thread can observe the deque anymore.
        unsafe {
            let guard = epoch::unprotected();
            let a = self.anchor.load(Ordering::Relaxed, guard);
            let anchor = a.deref();

            // Walk the direction whose links are consistent in the final anchor
            // state. End nodes' outward links may still point at long-retired
            // nodes, so the far end node terminates the walk, not a null link.
            let (start, end, forward) = match anchor.status {
                Status::LeftPush => (
                    anchor.left.load(Ordering::Relaxed, guard),
                    anchor.right.load(Ordering::Relaxed, guard),
                    true,
                ),
                _ => (
                    anchor.right.load(Ordering::Relaxed, guard),
                    anchor.left.load(Ordering::Relaxed, guard),
                    false,
                ),
            };

            let mut curr = start;
            while !curr.is_null() {
                let at_end = curr == end;
                let next = if forward {
                    curr.deref().right.load(Ordering::Relaxed, guard)
                } else {
                    curr.deref().left.load(Ordering::Relaxed, guard)
                };
                let mut node = curr.into_owned();
                ManuallyDrop::drop(&mut node.value);
                drop(node);
                if at_end {
                    break;
                }
                curr = next;
            }

            drop(a.into_owned());
        }
    }
}

impl<T> MetricsCollector for AnchoredDeque<T> {
    fn metrics(&self) -> crate::metrics::PerformanceMetrics {
        self.metrics.snapshot()
    }

    fn reset_metrics(&self) {
        self.metrics.reset();
    }

    fn set_metrics_enabled(&self, enabled: bool) {
        self.metrics_enabled
            .store(enabled as usize, Ordering::Relaxed);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics_enabled.load(Ordering::Relaxed) != 0
    }
}

#[cfg(test)]
mod basic_tests {
    use super::*;

    #[test]
    fn test_push_pop_right() {
        let deque = AnchoredDeque::new();

        assert!(deque.is_empty());
        assert_eq!(deque.try_pop_right(), None);

        deque.push_right(1);
        deque.push_right(2);
        deque.push_right(3);
        assert!(!deque.is_empty());

        assert_eq!(deque.try_pop_right(), Some(3));
        assert_eq!(deque.try_pop_right(), Some(2));
        assert_eq!(deque.try_pop_right(), Some(1));
        assert_eq!(deque.try_pop_right(), None);
        assert!(deque.is_empty());
    }

    #[test]
    fn test_push_pop_left() {
        let deque = AnchoredDeque::new();

        deque.push_left(1);
        deque.push_left(2);
        deque.push_left(3);

        assert_eq!(deque.try_pop_left(), Some(3));
        assert_eq!(deque.try_pop_left(), Some(2));
        assert_eq!(deque.try_pop_left(), Some(1));
        assert_eq!(deque.try_pop_left(), None);
    }

    #[test]
    fn test_opposite_ends_are_fifo() {
        let deque = AnchoredDeque::new();

        deque.push_right('a');
        deque.push_right('b');
        deque.push_right('c');

        assert_eq!(deque.try_pop_left(), Some('a'));
        assert_eq!(deque.try_pop_left(), Some('b'));
        assert_eq!(deque.try_pop_left(), Some('c'));
        assert_eq!(deque.try_pop_left(), None);
    }

    #[test]
    fn test_singleton_crosses_ends() {
        let deque = AnchoredDeque::new();

        deque.push_right(7);
        assert_eq!(deque.try_pop_left(), Some(7));
        assert!(deque.is_empty());

        deque.push_left(8);
        assert_eq!(deque.try_pop_right(), Some(8));
        assert!(deque.is_empty());
    }

    #[test]
    fn test_anchor_is_stable_after_each_push() {
        let deque = AnchoredDeque::new();

        for i in 0..16 {
            if i % 2 == 0 {
                deque.push_right(i);
            } else {
                deque.push_left(i);
            }
            // The pusher finishes stabilization before returning; with no other
            // threads around, the published status must already be stable.
            assert!(format!("{:?}", deque).contains("Stable"));
        }
    }

    #[test]
    fn test_debug_format() {
        let deque: AnchoredDeque<i32> = AnchoredDeque::new();
        let debug_str = format!("{:?}", deque);
        assert!(debug_str.contains("AnchoredDeque"));
        assert!(debug_str.contains("is_empty"));
    }

    #[test]
    fn test_default() {
        let deque: AnchoredDeque<String> = AnchoredDeque::default();
        assert!(deque.is_empty());
    }
}
