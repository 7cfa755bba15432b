use thiserror::Error;

/// Stroke lifecycle violations reported by [`crate::stroke::StrokeStore`].
///
/// Pointer events arrive strictly ordered for a single stroke, so these only
/// show up when a host forwards events out of order or two drags overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrokeError {
    /// `begin_stroke` while a stroke is already being drawn.
    #[error("a stroke is already active")]
    AlreadyActive,
    /// `append_point` without a preceding `begin_stroke`.
    #[error("no active stroke to append to")]
    NoActiveStroke,
}
