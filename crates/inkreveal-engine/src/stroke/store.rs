use std::collections::VecDeque;

use crate::coords::Vec2;
use crate::error::StrokeError;

use super::Stroke;

/// Active stroke plus completed strokes.
///
/// Invariants:
/// - at most one active stroke
/// - `completed` is FIFO: the front stroke is the oldest and decays first
/// - a completed stroke that runs out of points is removed immediately
#[derive(Debug, Default)]
pub struct StrokeStore {
    active: Option<Stroke>,
    completed: VecDeque<Stroke>,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Opens a new active stroke at `point`.
    pub fn begin_stroke(&mut self, point: Vec2) -> Result<(), StrokeError> {
        if self.active.is_some() {
            return Err(StrokeError::AlreadyActive);
        }
        self.active = Some(Stroke::new(point));
        Ok(())
    }

    /// Appends `point` to the active stroke.
    pub fn append_point(&mut self, point: Vec2) -> Result<(), StrokeError> {
        let stroke = self.active.as_mut().ok_or(StrokeError::NoActiveStroke)?;
        stroke.push(point);
        Ok(())
    }

    /// Freezes the active stroke at the back of the completed list.
    ///
    /// Returns `false` (and does nothing) when no stroke is active.
    pub fn end_stroke(&mut self) -> bool {
        match self.active.take() {
            Some(stroke) => {
                self.completed.push_back(stroke);
                true
            }
            None => false,
        }
    }

    /// Removes the front point of the oldest completed stroke.
    ///
    /// The stroke is dropped once it has no points left. No-op when there are
    /// no completed strokes. Returns whether anything was removed.
    pub fn decay_oldest(&mut self) -> bool {
        let Some(oldest) = self.completed.front_mut() else {
            return false;
        };
        oldest.pop_front();
        if oldest.is_empty() {
            self.completed.pop_front();
        }
        true
    }

    /// Discards the active stroke and every completed stroke.
    pub fn clear(&mut self) {
        self.active = None;
        self.completed.clear();
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn active(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Completed strokes, oldest first.
    #[inline]
    pub fn completed(&self) -> impl Iterator<Item = &Stroke> {
        self.completed.iter()
    }

    #[inline]
    pub fn completed_len(&self) -> usize {
        self.completed.len()
    }

    #[inline]
    pub fn has_completed(&self) -> bool {
        !self.completed.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_none() && self.completed.is_empty()
    }

    /// Every stroke in paint order: completed (oldest first), then the active one.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.completed.iter().chain(self.active.iter())
    }

    /// Total number of points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes().map(Stroke::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    fn completed_points(store: &StrokeStore) -> Vec<Vec<Vec2>> {
        store.completed().map(|s| s.points().to_vec()).collect()
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn begin_append_end_yields_one_completed_stroke() {
        let mut store = StrokeStore::new();
        store.begin_stroke(p(1.0, 2.0)).unwrap();
        store.append_point(p(3.0, 4.0)).unwrap();
        assert!(store.end_stroke());

        assert!(store.active().is_none());
        assert_eq!(completed_points(&store), vec![vec![p(1.0, 2.0), p(3.0, 4.0)]]);
    }

    #[test]
    fn begin_while_active_is_rejected() {
        let mut store = StrokeStore::new();
        store.begin_stroke(p(0.0, 0.0)).unwrap();
        assert_eq!(store.begin_stroke(p(5.0, 5.0)), Err(StrokeError::AlreadyActive));
        // The first stroke is untouched.
        assert_eq!(store.active().unwrap().points(), &[p(0.0, 0.0)]);
    }

    #[test]
    fn append_without_active_is_rejected() {
        let mut store = StrokeStore::new();
        assert_eq!(store.append_point(p(1.0, 1.0)), Err(StrokeError::NoActiveStroke));
        assert!(store.is_empty());
    }

    #[test]
    fn end_without_active_is_noop() {
        let mut store = StrokeStore::new();
        assert!(!store.end_stroke());
        assert!(store.is_empty());
    }

    #[test]
    fn completed_strokes_keep_fifo_order() {
        let mut store = StrokeStore::new();
        for i in 0..3 {
            store.begin_stroke(p(i as f32, 0.0)).unwrap();
            store.end_stroke();
        }
        let firsts: Vec<f32> = store.completed().map(|s| s.points()[0].x).collect();
        assert_eq!(firsts, vec![0.0, 1.0, 2.0]);
    }

    // ── decay ─────────────────────────────────────────────────────────────

    #[test]
    fn decay_on_empty_store_is_noop() {
        let mut store = StrokeStore::new();
        assert!(!store.decay_oldest());
        assert!(store.is_empty());
    }

    #[test]
    fn decay_ignores_active_stroke() {
        let mut store = StrokeStore::new();
        store.begin_stroke(p(0.0, 0.0)).unwrap();
        store.append_point(p(1.0, 0.0)).unwrap();
        assert!(!store.decay_oldest());
        assert_eq!(store.active().unwrap().len(), 2);
    }

    #[test]
    fn decay_removes_front_points_then_the_stroke() {
        let mut store = StrokeStore::new();
        store.begin_stroke(p(0.0, 0.0)).unwrap();
        store.append_point(p(1.0, 0.0)).unwrap();
        store.end_stroke();
        store.begin_stroke(p(9.0, 9.0)).unwrap();
        store.end_stroke();

        assert!(store.decay_oldest());
        assert_eq!(completed_points(&store), vec![vec![p(1.0, 0.0)], vec![p(9.0, 9.0)]]);

        assert!(store.decay_oldest());
        assert_eq!(completed_points(&store), vec![vec![p(9.0, 9.0)]]);

        assert!(store.decay_oldest());
        assert!(!store.has_completed());
        assert!(!store.decay_oldest());
    }

    // ── clear / queries ───────────────────────────────────────────────────

    #[test]
    fn clear_discards_everything() {
        let mut store = StrokeStore::new();
        store.begin_stroke(p(0.0, 0.0)).unwrap();
        store.end_stroke();
        store.begin_stroke(p(1.0, 1.0)).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert!(!store.is_drawing());
        // A new stroke can start right away.
        assert!(store.begin_stroke(p(2.0, 2.0)).is_ok());
    }

    #[test]
    fn strokes_lists_completed_before_active() {
        let mut store = StrokeStore::new();
        store.begin_stroke(p(0.0, 0.0)).unwrap();
        store.end_stroke();
        store.begin_stroke(p(5.0, 5.0)).unwrap();
        store.append_point(p(6.0, 6.0)).unwrap();

        let firsts: Vec<Vec2> = store.strokes().map(|s| s.points()[0]).collect();
        assert_eq!(firsts, vec![p(0.0, 0.0), p(5.0, 5.0)]);
        assert_eq!(store.point_count(), 3);
    }
}
