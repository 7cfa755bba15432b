//! Stroke model.
//!
//! - [`Stroke`]: one freehand drag, points in drawing order
//! - [`StrokeStore`]: the active stroke plus completed strokes, oldest first
//!
//! The store is the single owner of scratch ink. It is mutated by the session
//! on pointer events and by decay ticks, never from inside a draw pass.

mod store;
mod stroke;

pub use store::StrokeStore;
pub use stroke::Stroke;
