//! Time-keyed work queue for staggered pattern releases.
//!
//! Entries are released in (due time, insertion order) order. Due times are
//! match-clock milliseconds, so pausing the match pauses the queue and slow
//! motion stretches it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Scheduled<T> {
    due_ms: f32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scheduled<T> {
    // Reversed: BinaryHeap is a max-heap and we want the earliest entry on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .total_cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct EventScheduler<T> {
    heap: BinaryHeap<Scheduled<T>>,
    next_seq: u64,
}

impl<T> Default for EventScheduler<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> EventScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f32, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { due_ms, seq, item });
    }

    /// Pop the earliest entry due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: f32) -> Option<T> {
        if self.heap.peek()?.due_ms <= now_ms {
            self.heap.pop().map(|s| s.item)
        } else {
            None
        }
    }

    /// All entries due at or before `now_ms`, in release order.
    pub fn drain_due(&mut self, now_ms: f32) -> Vec<T> {
        let mut due = Vec::new();
        while let Some(item) = self.pop_due(now_ms) {
            due.push(item);
        }
        due
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_by_due_time_then_insertion() {
        let mut s = EventScheduler::new();
        s.schedule(200.0, "late");
        s.schedule(100.0, "first");
        s.schedule(100.0, "second");
        s.schedule(0.0, "now");
        assert_eq!(s.drain_due(100.0), vec!["now", "first", "second"]);
        assert_eq!(s.len(), 1);
        assert!(s.pop_due(199.9).is_none());
        assert_eq!(s.pop_due(200.0), Some("late"));
        assert!(s.is_empty());
    }

    #[test]
    fn clear_drops_pending() {
        let mut s = EventScheduler::new();
        s.schedule(5.0, 1);
        s.schedule(6.0, 2);
        s.clear();
        assert!(s.drain_due(f32::MAX).is_empty());
    }
}
