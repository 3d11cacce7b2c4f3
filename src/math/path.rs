//! Polyline helpers and grid ray tracing

use glam::Vec2;

use super::vec;

/// Where a length budget runs out along a polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakPoint {
    /// Index of the first point past the budget
    pub index: usize,
    /// Interpolated point at exactly the budget
    pub point: Vec2,
}

/// Every unit-grid cell crossed by the segment from `a` to `b`
///
/// Cells are identified by their center coordinates, so both endpoints are
/// rounded to the nearest cell first. Each step advances whichever axis
/// reaches its next cell boundary sooner (both on a tie), until the target
/// cell is reached. An axis with no extent is never stepped, and an axis
/// that has reached its target coordinate stops stepping, so the walk
/// ends on `b` for any finite input. Non-finite endpoints yield just the
/// start cell, and the walk never takes more steps than the Manhattan
/// distance between the cells.
pub fn ray_trace(a: Vec2, b: Vec2) -> Vec<Vec2> {
    let start = a.round();
    if !a.is_finite() || !b.is_finite() {
        return vec![start];
    }
    let target = b.round();
    let diff = target - start;
    let sign = vec::sign(diff);
    let sign_mod = sign.max(Vec2::ZERO);

    let boundary_x = |cell: Vec2| (diff.y * (cell.x + sign_mod.x - start.x)).abs();
    let boundary_y = |cell: Vec2| (diff.x * (cell.y + sign_mod.y - start.y)).abs();

    let mut cell = start;
    let mut traversed = vec![cell];

    let mut dist_x = if diff.x == 0.0 { f32::INFINITY } else { boundary_x(cell) };
    let mut dist_y = if diff.y == 0.0 { f32::INFINITY } else { boundary_y(cell) };

    // Past 2^24 a unit step is lost to f32 precision
    let max_steps = (diff.x.abs() + diff.y.abs()) as usize + 1;

    while cell != target && traversed.len() <= max_steps {
        if cell.x != target.x && dist_x <= dist_y {
            cell.x += sign.x;
            dist_x = if cell.x == target.x { f32::INFINITY } else { boundary_x(cell) };
        }
        if cell.y != target.y && dist_y <= dist_x {
            cell.y += sign.y;
            dist_y = if cell.y == target.y { f32::INFINITY } else { boundary_y(cell) };
        }
        traversed.push(cell);
    }

    traversed
}

/// Ray trace between two world points on a grid of `tile_size` tiles
///
/// Points are scaled into tile coordinates, traced, and scaled back out.
pub fn tile_path(start: Vec2, end: Vec2, tile_size: Vec2) -> Vec<Vec2> {
    let start_tile = vec::divide(start, tile_size);
    let end_tile = vec::divide(end, tile_size);
    ray_trace(start_tile, end_tile)
        .into_iter()
        .map(|p| vec::multiply(p, tile_size))
        .collect()
}

/// Mean of all points; the origin for an empty path
pub fn avg(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    sum(points) / points.len() as f32
}

pub fn sum(points: &[Vec2]) -> Vec2 {
    vec::sum(points)
}

/// Total distance between consecutive points
pub fn length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| vec::dist(w[0], w[1])).sum()
}

/// First point where the accumulated length exceeds `max_length`
pub fn break_point(points: &[Vec2], max_length: f32) -> Option<BreakPoint> {
    let mut travelled = 0.0;
    for (i, w) in points.windows(2).enumerate() {
        let d = vec::dist(w[0], w[1]);
        travelled += d;
        if travelled > max_length {
            let remaining = travelled - max_length;
            return Some(BreakPoint {
                index: i + 1,
                point: vec::lerp(w[0], w[1], 1.0 - remaining / d),
            });
        }
    }
    None
}

/// The path cut down to `max_length`, with the last point pulled back onto
/// the budget
pub fn truncate(points: &[Vec2], max_length: f32) -> Vec<Vec2> {
    if max_length == 0.0 {
        return Vec::new();
    }
    match break_point(points, max_length) {
        Some(bp) => {
            let mut kept = points[..bp.index].to_vec();
            kept.push(bp.point);
            kept
        }
        None => points.to_vec(),
    }
}

/// Drop adjacent duplicates
pub fn distinct<T: PartialEq + Copy>(points: &[T]) -> Vec<T> {
    let mut out = points.to_vec();
    out.dedup();
    out
}

/// Component-wise product of every point with `mult`
pub fn multiply(points: &[Vec2], mult: Vec2) -> Vec<Vec2> {
    points.iter().map(|p| vec::multiply(*p, mult)).collect()
}

pub fn scale(points: &[Vec2], s: f32) -> Vec<Vec2> {
    points.iter().map(|p| vec::scale(*p, s)).collect()
}
