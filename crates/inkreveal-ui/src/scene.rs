use std::time::Duration;

use inkreveal_engine::coords::{Rect, Vec2};
use inkreveal_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
///
/// Construct this from your window system's events each frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` for exactly one frame when the primary button goes down.
    pub mouse_down: bool,
    /// `true` for exactly one frame when the primary button goes up.
    pub mouse_up: bool,
    /// The cursor left the window this frame.
    pub pointer_left: bool,
    /// The window lost focus this frame.
    pub focus_lost: bool,
}

impl UiInput {
    /// Events this snapshot produces, in dispatch order.
    pub fn events(&self) -> Vec<UiEvent> {
        let pos = self.mouse_pos;
        let mut events = Vec::with_capacity(3);
        if self.mouse_down {
            events.push(UiEvent::Press { pos });
        }
        events.push(UiEvent::Move { pos });
        if self.mouse_up {
            events.push(UiEvent::Release { pos });
        }
        if self.pointer_left {
            events.push(UiEvent::Leave);
        }
        if self.focus_lost {
            events.push(UiEvent::FocusLost);
        }
        events
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns the draw list across frames.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut root: Element = ScratchCard::new(&mut factory)?.into();
///
/// // In your frame callback:
/// let dt = clock.tick().dt;
/// let draw_list = ui.frame(&mut root, viewport, &input, dt);
/// renderer.render(draw_list);
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new() }
    }

    /// Runs one frame for a root widget that persists across frames:
    /// update, measure, events, then paint.
    ///
    /// The root sits at the origin with its measured size, constrained to the
    /// viewport. The returned list is owned
    /// by the scene and valid until the next call.
    #[must_use]
    pub fn frame(
        &mut self,
        root: &mut Element,
        viewport: Vec2,
        input: &UiInput,
        dt: Duration,
    ) -> &mut DrawList {
        self.draw_list.clear();

        // ── update ────────────────────────────────────────────────────────
        root.update(dt);

        // ── measure ───────────────────────────────────────────────────────
        let size = root.measure(Constraints::loose(viewport));
        let rect = Rect::new(0.0, 0.0, size.x, size.y);

        // ── events ────────────────────────────────────────────────────────
        for event in input.events() {
            root.on_event(&event, rect);
        }

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, rect);
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_frame_only_moves() {
        let input = UiInput { mouse_pos: Vec2::new(3.0, 4.0), ..Default::default() };
        assert_eq!(input.events(), vec![UiEvent::Move { pos: Vec2::new(3.0, 4.0) }]);
    }

    #[test]
    fn press_comes_before_move_and_release_after() {
        let pos = Vec2::new(1.0, 1.0);
        let input = UiInput { mouse_pos: pos, mouse_down: true, mouse_up: true, focus_lost: true, ..Default::default() };
        assert_eq!(
            input.events(),
            vec![
                UiEvent::Press { pos },
                UiEvent::Move { pos },
                UiEvent::Release { pos },
                UiEvent::FocusLost,
            ]
        );
    }
}
