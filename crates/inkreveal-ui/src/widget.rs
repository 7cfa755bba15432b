use std::time::Duration;

use inkreveal_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
///
/// ```rust,ignore
/// use inkreveal_ui::prelude::*;
///
/// pub struct Dot { color: Color }
///
/// impl Widget for Dot {
///     fn measure(&self, constraints: Constraints) -> Vec2 {
///         constraints.constrain(Vec2::new(8.0, 8.0))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_rect(rect, self.color);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Size this widget wants given the available space. Must be deterministic.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw this widget into `painter` within `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }

    /// Advance time-driven state by `dt`. Called once per frame before paint.
    fn update(&mut self, _dt: Duration) {}
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget. Any `Widget` converts to `Element` via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints) -> Vec2 {
        self.0.measure(constraints)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        self.0.on_event(event, rect)
    }

    #[inline]
    pub fn update(&mut self, dt: Duration) {
        self.0.update(dt)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
