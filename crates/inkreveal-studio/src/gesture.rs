use inkreveal_ui::prelude::{UiInput, Vec2};

/// A scripted pointer gesture, one [`UiInput`] per frame.
#[derive(Debug, Clone, Default)]
pub struct Gesture {
    frames: Vec<UiInput>,
}

impl Gesture {
    /// Back-and-forth sweep over a `size` surface.
    ///
    /// `rows` horizontal passes, evenly spaced, joined by vertical moves at
    /// the edges. The pointer travels at most `step` per frame. Pressed on the
    /// first frame, released on the last.
    pub fn zigzag(size: Vec2, rows: u32, step: f32) -> Self {
        let rows = rows.max(1);
        let step = step.max(1.0);
        let row_y = |r: u32| size.y * (r as f32 + 0.5) / rows as f32;

        let mut path = vec![Vec2::new(0.0, row_y(0))];
        for r in 0..rows {
            let y = row_y(r);
            let (from, to) = if r % 2 == 0 { (0.0, size.x) } else { (size.x, 0.0) };
            if r > 0 {
                walk(&mut path, Vec2::new(from, y), step);
            }
            walk(&mut path, Vec2::new(to, y), step);
        }

        let last = path.len() - 1;
        let frames = path
            .into_iter()
            .enumerate()
            .map(|(i, mouse_pos)| UiInput {
                mouse_pos,
                mouse_down: i == 0,
                mouse_up: i == last,
                ..Default::default()
            })
            .collect();
        Self { frames }
    }

    /// Appends `count` frames with the pointer up and still.
    pub fn then_idle(mut self, count: usize) -> Self {
        let mouse_pos = self.frames.last().map(|f| f.mouse_pos).unwrap_or_default();
        self.frames
            .extend(std::iter::repeat_n(UiInput { mouse_pos, ..Default::default() }, count));
        self
    }

    #[inline]
    pub fn frames(&self) -> &[UiInput] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

/// Extends `path` towards `to` in increments of at most `step`.
fn walk(path: &mut Vec<Vec2>, to: Vec2, step: f32) {
    let from = path.last().copied().unwrap_or(to);
    let n = (from.distance(to) / step).ceil() as usize;
    for i in 1..=n {
        let t = i as f32 / n as f32;
        path.push(from + (to - from) * t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zigzag_presses_first_and_releases_last() {
        let g = Gesture::zigzag(Vec2::new(100.0, 100.0), 2, 10.0);
        let frames = g.frames();
        assert!(frames[0].mouse_down);
        assert!(frames.last().is_some_and(|f| f.mouse_up));
        assert_eq!(frames.iter().filter(|f| f.mouse_down).count(), 1);
        assert_eq!(frames.iter().filter(|f| f.mouse_up).count(), 1);
    }

    #[test]
    fn zigzag_stays_on_the_surface() {
        let g = Gesture::zigzag(Vec2::new(120.0, 80.0), 3, 7.0);
        for f in g.frames() {
            let p = f.mouse_pos;
            assert!((0.0..=120.0).contains(&p.x) && (0.0..=80.0).contains(&p.y), "{p:?}");
        }
    }

    #[test]
    fn zigzag_steps_are_bounded() {
        let g = Gesture::zigzag(Vec2::new(100.0, 100.0), 2, 10.0);
        for pair in g.frames().windows(2) {
            assert!(pair[0].mouse_pos.distance(pair[1].mouse_pos) <= 10.0 + 1e-3);
        }
        // 100 across, 50 down, 100 back: 25 moves after the first point.
        assert_eq!(g.len(), 26);
    }

    #[test]
    fn idle_frames_keep_the_pointer_still() {
        let g = Gesture::zigzag(Vec2::new(50.0, 50.0), 1, 10.0).then_idle(3);
        let tail = &g.frames()[g.len() - 3..];
        for f in tail {
            assert!(!f.mouse_down && !f.mouse_up);
            assert_eq!(f.mouse_pos, Vec2::new(50.0, 25.0));
        }
    }
}
