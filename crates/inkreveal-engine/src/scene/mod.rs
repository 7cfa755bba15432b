//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - carry per-item opacity and ink-mask scoping for layered reveal content
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList, MaskId};
pub use shapes::polyline::{LineCap, LineJoin, PolylineCmd, StrokeMask};
pub use shapes::rect::RectCmd;
