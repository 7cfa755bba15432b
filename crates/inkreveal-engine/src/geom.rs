//! Geometry utilities behind the coverage estimate.
//!
//! All functions are pure. Coverage is estimated from a point cloud rather than
//! from rasterized ink: every surviving stroke point is treated as a disc of the
//! stroke's diameter, and discs are summed without any union. Overlapping ink
//! (crossing strokes, a stroke retracing itself after decimation) is therefore
//! counted more than once. The reveal threshold is tuned against this estimator,
//! so the bias is part of the contract.

use std::f32::consts::PI;

use crate::coords::Vec2;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    p1.distance(p2)
}

/// Keeps the points inside `[0, width] × [0, height]`, boundaries included.
pub fn clamp_to_bounds(points: &[Vec2], width: f32, height: f32) -> Vec<Vec2> {
    points
        .iter()
        .copied()
        .filter(|p| p.x >= 0.0 && p.y >= 0.0 && p.x <= width && p.y <= height)
        .collect()
}

/// Greedy single-pass thinning.
///
/// A point is retained only if it lies at least `min_dist` away from every
/// point retained before it. Earlier points always win; a dropped point never
/// causes later points to be dropped.
pub fn decimate_by_min_distance(points: &[Vec2], min_dist: f32) -> Vec<Vec2> {
    let mut kept: Vec<Vec2> = Vec::with_capacity(points.len());
    for &p in points {
        if kept.iter().all(|&k| distance(k, p) >= min_dist) {
            kept.push(p);
        }
    }
    kept
}

/// Area of the disc stamped by one stroke point.
#[inline]
pub fn disc_area(stroke_width: f32) -> f32 {
    let r = stroke_width * 0.5;
    PI * r * r
}

/// Estimated revealed percentage of a `surface_width × surface_height` surface.
///
/// Each stroke is clamped to the surface, then decimated by half the stroke
/// width; survivors contribute one disc each. Discs are summed across all
/// strokes, so the result can exceed 100 for heavily scratched surfaces.
/// A surface without area reports 0.
pub fn estimate_coverage<'a, I>(
    strokes: I,
    stroke_width: f32,
    surface_width: f32,
    surface_height: f32,
) -> f32
where
    I: IntoIterator<Item = &'a [Vec2]>,
{
    let surface_area = surface_width * surface_height;
    if !(surface_width > 0.0 && surface_height > 0.0) || !surface_area.is_finite() {
        return 0.0;
    }

    let min_dist = stroke_width * 0.5;
    let discs: usize = strokes
        .into_iter()
        .map(|points| {
            let inside = clamp_to_bounds(points, surface_width, surface_height);
            decimate_by_min_distance(&inside, min_dist).len()
        })
        .sum();

    disc_area(stroke_width) * discs as f32 / surface_area * 100.0
}
