use inkreveal_engine::coords::Vec2;
use inkreveal_engine::input::InputEvent;

/// Input events routed through the widget tree.
///
/// Positions are in scene coordinates (logical pixels). Widgets convert
/// to local space with `rect.to_local(pos)`.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary button went down at `pos`.
    Press { pos: Vec2 },
    /// Pointer is at `pos` (fired every frame, pressed or not).
    Move { pos: Vec2 },
    /// Primary button went up at `pos`.
    Release { pos: Vec2 },
    /// Pointer left the window.
    Leave,
    /// Window lost keyboard / pointer focus.
    FocusLost,
}

impl From<&UiEvent> for InputEvent {
    fn from(event: &UiEvent) -> Self {
        match *event {
            UiEvent::Press { pos } => InputEvent::pressed(pos.x, pos.y),
            UiEvent::Move { pos } => InputEvent::moved(pos.x, pos.y),
            UiEvent::Release { pos } => InputEvent::released(pos.x, pos.y),
            UiEvent::Leave => InputEvent::PointerLeft,
            UiEvent::FocusLost => InputEvent::Focused(false),
        }
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled: stop routing to siblings / parents.
    Consumed,
    /// Event was not handled: keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
