use inkreveal_engine::coords::Vec2;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_clamps_to_max_only() {
        let c = Constraints::loose(Vec2::new(100.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(300.0, 10.0)), Vec2::new(100.0, 10.0));
    }

    #[test]
    fn tight_forces_the_size() {
        let c = Constraints::tight(Vec2::new(80.0, 80.0));
        assert_eq!(c.constrain(Vec2::new(10.0, 500.0)), Vec2::new(80.0, 80.0));
    }

    #[test]
    fn unbounded_keeps_anything_positive() {
        let c = Constraints::unbounded();
        assert_eq!(c.constrain(Vec2::new(1e6, 3.0)), Vec2::new(1e6, 3.0));
    }
}
