use crate::coords::Vec2;

/// Consumed front points are compacted away once they reach this count and
/// outnumber the live ones.
const COMPACT_AT: usize = 32;

/// A freehand stroke: points in insertion (drawing) order.
///
/// Points are appended while drawing and removed from the front while decaying.
/// They are never reordered.
#[derive(Debug, Clone)]
pub struct Stroke {
    points: Vec<Vec2>,
    /// Index of the oldest live point in `points`.
    head: usize,
}

impl Stroke {
    /// Starts a stroke at `start`.
    pub fn new(start: Vec2) -> Self {
        Self { points: vec![start], head: 0 }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points[self.head..]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len() - self.head
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn push(&mut self, point: Vec2) {
        self.points.push(point);
    }

    /// Removes and returns the oldest point. Amortized O(1).
    pub fn pop_front(&mut self) -> Option<Vec2> {
        let point = *self.points.get(self.head)?;
        self.head += 1;
        if self.head == self.points.len() {
            self.points.clear();
            self.head = 0;
        } else if self.head >= COMPACT_AT && self.head * 2 >= self.points.len() {
            self.points.drain(..self.head);
            self.head = 0;
        }
        Some(point)
    }
}

impl PartialEq for Stroke {
    fn eq(&self, other: &Self) -> bool {
        self.points() == other.points()
    }
}
