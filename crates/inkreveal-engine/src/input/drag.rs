use crate::coords::{Rect, Vec2};

use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};

/// One step of a drag gesture, in surface-local coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DragPhase {
    Began(Vec2),
    Moved(Vec2),
    Ended,
}

/// Turns raw pointer events into drag phases for one scratch surface.
///
/// - a primary press inside `bounds` begins a drag
/// - moves while dragging continue it, even outside `bounds`
/// - release, pointer-leave, or focus loss end it
///
/// Presses outside `bounds` and non-primary buttons are ignored, so at most
/// one drag is ever open.
#[derive(Debug, Clone)]
pub struct DragTracker {
    bounds: Rect,
    dragging: bool,
    last: Option<Vec2>,
}

impl DragTracker {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, dragging: false, last: None }
    }

    /// Surface rect in host coordinates.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Applies one input event; returns the drag phase it produced, if any.
    pub fn apply_event(&mut self, ev: &InputEvent) -> Option<DragPhase> {
        match *ev {
            InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y }) => {
                let pos = Vec2::new(x, y);
                match state {
                    MouseButtonState::Pressed if !self.dragging && self.bounds.contains(pos) => {
                        self.dragging = true;
                        self.last = Some(pos);
                        Some(DragPhase::Began(self.bounds.to_local(pos)))
                    }
                    MouseButtonState::Released if self.dragging => self.end(),
                    _ => None,
                }
            }

            InputEvent::PointerButton(_) => None,

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                let pos = Vec2::new(x, y);
                if !self.dragging || self.last == Some(pos) {
                    return None;
                }
                self.last = Some(pos);
                Some(DragPhase::Moved(self.bounds.to_local(pos)))
            }

            InputEvent::PointerLeft | InputEvent::Focused(false) if self.dragging => self.end(),

            InputEvent::PointerLeft | InputEvent::Focused(_) => None,
        }
    }

    fn end(&mut self) -> Option<DragPhase> {
        self.dragging = false;
        self.last = None;
        Some(DragPhase::Ended)
    }
}
