use crate::geometry::Position;
use std::collections::VecDeque;

/// Bounded, chronologically ordered history of smoothed positions.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    capacity: usize,
    points: VecDeque<Position>,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, p: Position) {
        if self.capacity == 0 {
            return;
        }
        self.points.push_back(p);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Position> + '_ {
        self.points.iter()
    }

    pub fn newest(&self) -> Option<Position> {
        self.points.back().copied()
    }

    /// Decay factor `1 - age/K` for each retained point, oldest first, where
    /// `age` counts back from the newest entry (newest = 0).
    pub fn decay_weights(&self) -> impl Iterator<Item = (Position, f32)> + '_ {
        let len = self.points.len();
        let k = self.capacity.max(1) as f32;
        self.points.iter().enumerate().map(move |(i, p)| {
            let age = (len - 1 - i) as f32;
            (*p, (1.0 - age / k).max(0.0))
        })
    }
}
