//! Scratch mask surface.
//!
//! The mask is the ink the user has scratched so far. It owns the stroke
//! store, knows the surface size and ink width, and keeps the coverage
//! estimate current as points arrive. Rendering turns every stroke into a
//! round-capped, round-joined polyline; the same polylines double as the alpha
//! mask through which revealed content is drawn.

use crate::coords::Vec2;
use crate::error::StrokeError;
use crate::geom;
use crate::paint::Color;
use crate::scene::{DrawList, PolylineCmd, StrokeMask, ZIndex};
use crate::stroke::{Stroke, StrokeStore};

/// Soft edge drawn around the ink, in logical pixels.
const INK_BLUR: f32 = 5.0;

#[derive(Debug)]
pub struct ScratchMask {
    store: StrokeStore,
    size: Vec2,
    stroke_width: f32,
    coverage: f32,
    ink: Color,
}

impl ScratchMask {
    pub fn new(size: Vec2, stroke_width: f32) -> Self {
        Self {
            store: StrokeStore::new(),
            size,
            stroke_width,
            coverage: 0.0,
            ink: Color::BLACK,
        }
    }

    // ── properties ────────────────────────────────────────────────────────

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Changes the surface size. Identical ink reports a different coverage
    /// on the next point, since the surface area is the denominator.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    #[inline]
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    /// Color used by [`render`](Self::render).
    pub fn set_ink(&mut self, ink: Color) {
        self.ink = ink;
    }

    /// Coverage percentage as of the last point added (0 after a clear).
    #[inline]
    pub fn coverage(&self) -> f32 {
        self.coverage
    }

    #[inline]
    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    // ── stroke lifecycle ──────────────────────────────────────────────────

    pub fn on_stroke_start(&mut self, point: Vec2) -> Result<(), StrokeError> {
        self.store.begin_stroke(point)
    }

    /// Appends `point` to the active stroke and returns the new coverage.
    pub fn on_stroke_point(&mut self, point: Vec2) -> Result<f32, StrokeError> {
        self.store.append_point(point)?;
        Ok(self.recompute_coverage())
    }

    /// Freezes the active stroke. Returns `false` when none was active.
    pub fn on_stroke_end(&mut self) -> bool {
        self.store.end_stroke()
    }

    /// Re-estimates coverage over every stroke, active included.
    pub fn recompute_coverage(&mut self) -> f32 {
        self.coverage = geom::estimate_coverage(
            self.store.strokes().map(Stroke::points),
            self.stroke_width,
            self.size.x,
            self.size.y,
        );
        log::trace!("coverage {:.2}%", self.coverage);
        self.coverage
    }

    /// Erodes the oldest completed stroke by one point.
    pub fn decay_oldest(&mut self) -> bool {
        self.store.decay_oldest()
    }

    /// Wipes all ink.
    pub fn clear(&mut self) {
        self.store.clear();
        self.coverage = 0.0;
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Ink polylines in paint order: completed strokes, then the active one.
    pub fn mask_paths(&self) -> StrokeMask {
        self.store
            .strokes()
            .filter(|s| !s.is_empty())
            .map(|s| PolylineCmd::rounded(s.points().to_vec(), self.stroke_width, self.ink).blur(INK_BLUR))
            .collect()
    }

    /// Draws the ink itself at `z`.
    pub fn render(&self, list: &mut DrawList, z: ZIndex) {
        for path in self.mask_paths() {
            list.push_polyline(z, path);
        }
    }
}
