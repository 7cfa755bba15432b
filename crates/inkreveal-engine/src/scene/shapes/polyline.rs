use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// How open polyline ends are drawn.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint.
    #[default]
    Butt,
    /// Half-disc extending past the endpoint. A one-point polyline draws a dot.
    Round,
    /// Half-square extending past the endpoint.
    Square,
}

/// How consecutive polyline segments are joined.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroked polyline draw payload.
///
/// Points are in logical pixels, in drawing order. Renderers stroke the path
/// `points[0] → points[1] → …` with `width`, `cap` and `join`; `blur` is a
/// soft-edge radius applied around the stroke (0 = hard edge).
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCmd {
    pub points: Vec<Vec2>,
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    pub color: Color,
    pub blur: f32,
}

impl PolylineCmd {
    /// Round-capped, round-joined stroke, the shape of scratch ink.
    #[inline]
    pub fn rounded(points: Vec<Vec2>, width: f32, color: Color) -> Self {
        Self { points, width, cap: LineCap::Round, join: LineJoin::Round, color, blur: 0.0 }
    }

    #[inline]
    pub fn blur(mut self, radius: f32) -> Self {
        self.blur = radius.max(0.0);
        self
    }

    /// Same stroke shifted by `offset`. Moves surface-local ink into scene space.
    pub fn translated(mut self, offset: Vec2) -> Self {
        for p in &mut self.points {
            *p = *p + offset;
        }
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A set of stroked polylines used as an alpha mask.
///
/// Content drawn under a mask is visible only where the polylines would paint.
pub type StrokeMask = Vec<PolylineCmd>;

impl DrawList {
    /// Records a polyline draw command. Empty polylines are skipped.
    #[inline]
    pub fn push_polyline(&mut self, z: ZIndex, cmd: PolylineCmd) {
        if cmd.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Polyline(cmd));
    }
}
