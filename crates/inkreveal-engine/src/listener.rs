use crate::coords::Vec2;

/// Fire-and-forget notifications mirroring the scratch gesture.
///
/// Implemented by visual-effect adapters (particles pulled toward the finger,
/// haptics, sound) and by hosts that want to observe scratching. Every method
/// has an empty default, so implementors only override what they react to.
/// Points are in surface-local coordinates.
pub trait ScratchListener {
    /// A stroke started at `point`.
    fn on_scratch_start(&mut self, point: Vec2) {
        let _ = point;
    }

    /// The active stroke moved to `point`.
    fn on_scratch_move(&mut self, point: Vec2) {
        let _ = point;
    }

    /// The active stroke ended (pointer lifted, cancelled, or focus lost).
    fn on_scratch_end(&mut self) {}
}
