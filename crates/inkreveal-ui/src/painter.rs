use inkreveal_engine::coords::Rect;
use inkreveal_engine::paint::Color;
use inkreveal_engine::scene::{DrawList, MaskId, PolylineCmd, StrokeMask, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` and hands out increasing z-indices, so
/// later calls paint on top of earlier ones.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, color);
    }

    /// Stroked polyline. Empty polylines draw nothing.
    pub fn stroke_polyline(&mut self, cmd: PolylineCmd) {
        let z = self.next_z();
        self.draw_list.push_polyline(z, cmd);
    }

    // ── scopes ────────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    /// Everything painted until [`pop_opacity`](Self::pop_opacity) is faded by `opacity`.
    pub fn push_opacity(&mut self, opacity: f32) {
        self.draw_list.push_opacity(opacity);
    }

    pub fn pop_opacity(&mut self) {
        self.draw_list.pop_opacity();
    }

    /// Everything painted until [`pop_mask`](Self::pop_mask) shows only where
    /// `mask` paints.
    pub fn push_mask(&mut self, mask: StrokeMask) -> MaskId {
        self.draw_list.push_mask(mask)
    }

    pub fn pop_mask(&mut self) {
        self.draw_list.pop_mask();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkreveal_engine::coords::Vec2;

    #[test]
    fn later_calls_paint_on_top() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list);
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        }
        let items = list.items();
        assert!(items[0].key < items[1].key);
    }

    #[test]
    fn scopes_apply_to_items_inside_them() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list);
            p.push_opacity(0.5);
            let id = p.push_mask(vec![PolylineCmd::rounded(vec![Vec2::new(1.0, 1.0)], 4.0, Color::BLACK)]);
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
            p.pop_mask();
            p.pop_opacity();
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
            assert_eq!(id, MaskId(0));
        }
        let items = list.items();
        assert_eq!(items[0].opacity, 0.5);
        assert_eq!(items[0].mask, Some(MaskId(0)));
        assert_eq!(items[1].opacity, 1.0);
        assert_eq!(items[1].mask, None);
    }
}
