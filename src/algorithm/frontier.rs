//! Work list of candidate seeds for space-filling streamlines
//!
//! Tracing pushes candidates beside every growing streamline. The exhaustive
//! pass pops them last-in first-out and only then checks whether the spot is
//! still free: candidates go stale as later streamlines claim space, and are
//! discarded when popped rather than filtered when pushed.

use crate::algorithm::tracer::{Streamline, StreamlineTracer};
use crate::spatial::Point;

/// LIFO stack of candidate seed points
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    candidates: Vec<Point>,
    pushed: usize,
    discarded: usize,
}

impl Frontier {
    /// Create an empty frontier
    pub const fn new() -> Self {
        Self {
            candidates: Vec::new(),
            pushed: 0,
            discarded: 0,
        }
    }

    /// Queue a candidate seed
    pub fn push(&mut self, point: Point) {
        self.candidates.push(point);
        self.pushed += 1;
    }

    /// Take the most recently queued candidate
    pub fn pop(&mut self) -> Option<Point> {
        self.candidates.pop()
    }

    /// Number of candidates waiting
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check whether no candidates are waiting
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates queued over the frontier's lifetime
    pub const fn pushed(&self) -> usize {
        self.pushed
    }

    /// Candidates dropped because their spot was claimed before they were popped
    pub const fn discarded(&self) -> usize {
        self.discarded
    }

    /// Trace from every candidate until none remain
    ///
    /// Each popped candidate is re-checked against the occupancy index and
    /// discarded if claimed; otherwise it seeds a streamline of `width`, which
    /// may queue further candidates. Streamlines are returned in trace order.
    pub fn drain(&mut self, tracer: &mut StreamlineTracer, width: f64) -> Vec<Streamline> {
        let mut traced = Vec::new();

        while let Some(candidate) = self.pop() {
            if tracer.is_claimed(candidate) {
                self.discarded += 1;
                continue;
            }
            traced.push(tracer.trace(candidate, width, self));
        }

        traced
    }
}
