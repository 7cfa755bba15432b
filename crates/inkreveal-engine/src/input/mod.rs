//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate their window-system
//! events into [`InputEvent`]s; [`DragTracker`] turns those into the
//! begin / move / end phases that drive a stroke.

mod drag;
mod types;

pub use drag::{DragPhase, DragTracker};
pub use types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
