//! Coordinate and geometry types shared by the engine, the UI layer and hosts.
//!
//! Canonical space is surface-local:
//! - Logical pixels (DPI-aware)
//! - Origin at the top-left corner of the scratch surface
//! - +X right, +Y down
//!
//! A stroke point is just a [`Vec2`] in this space.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
