//! Time-ordered pending-event queue.
//!
//! # Why this exists
//!
//! A discrete-event run never scans time; it leaps from one scheduled event
//! straight to the next. The queue is the sole ordering authority: a binary
//! min-heap keyed on `(time, insertion order)`, so simultaneous events pop
//! in the order they were scheduled and a fixed seed replays the exact same
//! event sequence.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use thiserror::Error;

use crate::event::Event;

/// Popping from an empty queue. The run loop checks [`EventQueue::peek_time`]
/// before every pop, so this reaching a caller means a driver bug.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("event queue is empty")]
pub struct EmptyQueue;

#[derive(Debug)]
struct Scheduled {
    event: Event,
    seq: u64,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.event
            .time
            .total_cmp(&other.event.time)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-heap of pending events ordered by `(time, insertion order)`.
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event`. Equal-time events pop in push order.
    pub fn push(&mut self, event: Event) {
        debug_assert!(event.time.is_finite(), "scheduled event at non-finite time");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Scheduled { event, seq }));
    }

    /// Remove and return the earliest pending event.
    pub fn pop_next(&mut self) -> Result<Event, EmptyQueue> {
        match self.heap.pop() {
            Some(Reverse(scheduled)) => Ok(scheduled.event),
            None => Err(EmptyQueue),
        }
    }

    /// Time of the earliest pending event, without removing it.
    pub fn peek_time(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(s)| s.event.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
