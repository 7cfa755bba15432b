use inkreveal_engine::coords::{Rect, Vec2};
use inkreveal_engine::paint::Color;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// A solid block of colour. Fills whatever rect it is given.
///
/// ```rust,ignore
/// Swatch::new(Color::from_srgb_u8(240, 190, 40, 255)).size(120.0, 80.0)
/// ```
pub struct Swatch {
    color: Color,
    size: Option<Vec2>,
}

impl Swatch {
    pub fn new(color: Color) -> Self {
        Self { color, size: None }
    }

    /// Preferred size. Without one the swatch takes all the space offered.
    pub fn size(mut self, w: f32, h: f32) -> Self { self.size = Some(Vec2::new(w, h)); self }
}

impl Widget for Swatch {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.size.unwrap_or(constraints.max))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rect(rect, self.color);
    }
}
