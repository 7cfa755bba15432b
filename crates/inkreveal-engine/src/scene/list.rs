use crate::coords::Rect;

use super::{DrawCmd, SortKey, StrokeMask, ZIndex};

/// Index of a stroke mask registered on a [`DrawList`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MaskId(pub u32);

/// A single draw item: sort key + command + the scope it was recorded in.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
    /// Effective opacity in `[0, 1]`: product of every enclosing opacity scope.
    pub opacity: f32,
    /// Innermost ink mask the item is drawn through, if any.
    pub mask: Option<MaskId>,
}

impl DrawItem {
    /// `true` when the item would not produce any visible pixels.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.opacity <= 0.0 || self.clip_rect.is_some_and(Rect::is_empty)
    }
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Scopes
///
/// Three stacks scope the commands pushed while they are active, and each
/// push must be balanced with its pop:
/// - [`push_clip`] / [`pop_clip`]: scissor rect, intersected with the parent
/// - [`push_opacity`] / [`pop_opacity`]: multiplied into the parent opacity
/// - [`push_mask`] / [`pop_mask`]: content only shows where the mask's strokes paint
///
/// ```ignore
/// let mask = draw_list.push_mask(ink.mask_paths());
/// // ... push revealed content ...
/// draw_list.pop_mask();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    clip_stack: Vec<Rect>,
    opacity_stack: Vec<f32>,
    mask_stack: Vec<MaskId>,
    masks: Vec<StrokeMask>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, masks and all scope stacks. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
        self.opacity_stack.clear();
        self.mask_stack.clear();
        self.masks.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a mask registered with [`push_mask`].
    #[inline]
    pub fn mask(&self, id: MaskId) -> Option<&StrokeMask> {
        self.masks.get(id.0 as usize)
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip, opacity and mask scopes.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
            opacity: self.opacity_stack.last().copied().unwrap_or(1.0),
            mask: self.mask_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    // ── scopes ────────────────────────────────────────────────────────────

    /// Begins a scissor region intersected with any parent clip rect.
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            Some(&parent) => intersect(parent, rect),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Begins an opacity scope. `opacity` is clamped to `[0, 1]`.
    #[inline]
    pub fn push_opacity(&mut self, opacity: f32) {
        let parent = self.opacity_stack.last().copied().unwrap_or(1.0);
        self.opacity_stack.push(parent * opacity.clamp(0.0, 1.0));
    }

    /// Ends the most recent opacity scope.
    #[inline]
    pub fn pop_opacity(&mut self) {
        debug_assert!(!self.opacity_stack.is_empty(), "pop_opacity called without matching push_opacity");
        self.opacity_stack.pop();
    }

    /// Registers `mask` and begins a masked scope.
    ///
    /// Masks do not intersect: the innermost one wins.
    pub fn push_mask(&mut self, mask: StrokeMask) -> MaskId {
        let id = MaskId(self.masks.len() as u32);
        self.masks.push(mask);
        self.mask_stack.push(id);
        id
    }

    /// Ends the most recent masked scope.
    #[inline]
    pub fn pop_mask(&mut self) {
        debug_assert!(!self.mask_stack.is_empty(), "pop_mask called without matching push_mask");
        self.mask_stack.pop();
    }

    // ── paint order ───────────────────────────────────────────────────────

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

/// Intersection of two rects; a zero-area rect when they do not overlap so
/// renderers skip the scoped draw calls.
fn intersect(a: Rect, b: Rect) -> Rect {
    let min_x = a.origin.x.max(b.origin.x);
    let min_y = a.origin.y.max(b.origin.y);
    let max_x = a.max().x.min(b.max().x);
    let max_y = a.max().y.min(b.max().y);
    if max_x <= min_x || max_y <= min_y {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    } else {
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::PolylineCmd;

    fn unit_rect(list: &mut DrawList, z: i32) {
        list.push_rect(ZIndex(z), Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        unit_rect(&mut list, 2);
        unit_rect(&mut list, 0);
        unit_rect(&mut list, 2);
        let order: Vec<u32> = list.iter_in_paint_order().map(|i| i.key.order).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn opacity_scopes_multiply() {
        let mut list = DrawList::new();
        list.push_opacity(0.5);
        list.push_opacity(0.5);
        unit_rect(&mut list, 0);
        list.pop_opacity();
        unit_rect(&mut list, 0);
        list.pop_opacity();
        unit_rect(&mut list, 0);

        let opacities: Vec<f32> = list.items().iter().map(|i| i.opacity).collect();
        assert_eq!(opacities, vec![0.25, 0.5, 1.0]);
    }

    #[test]
    fn masked_scope_tags_items() {
        let mut list = DrawList::new();
        let ink = vec![PolylineCmd::rounded(vec![Vec2::new(1.0, 1.0)], 4.0, Color::BLACK)];
        let id = list.push_mask(ink.clone());
        unit_rect(&mut list, 0);
        list.pop_mask();
        unit_rect(&mut list, 0);

        assert_eq!(list.items()[0].mask, Some(id));
        assert_eq!(list.items()[1].mask, None);
        assert_eq!(list.mask(id), Some(&ink));
    }

    #[test]
    fn disjoint_clips_make_items_invisible() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(20.0, 20.0, 10.0, 10.0));
        unit_rect(&mut list, 0);
        list.pop_clip();
        list.pop_clip();
        assert!(list.items()[0].is_invisible());
    }

    #[test]
    fn empty_polylines_are_skipped() {
        let mut list = DrawList::new();
        list.push_polyline(ZIndex(0), PolylineCmd::rounded(Vec::new(), 4.0, Color::BLACK));
        assert!(list.is_empty());
    }

    #[test]
    fn clear_resets_masks_and_scopes() {
        let mut list = DrawList::new();
        list.push_opacity(0.1);
        list.push_mask(Vec::new());
        unit_rect(&mut list, 0);
        list.clear();
        unit_rect(&mut list, 0);
        assert_eq!(list.items()[0].opacity, 1.0);
        assert_eq!(list.items()[0].mask, None);
        assert!(list.mask(MaskId(0)).is_none());
    }
}
