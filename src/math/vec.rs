//! 2D vector and line geometry
//!
//! `glam::Vec2` doubles as point and vector. Sign conventions follow canvas
//! space (y grows downward), which is why the pivot form of [`rotate`] turns
//! the opposite way from the plain form.

use glam::Vec2;

/// Default tolerance for [`contains`]
pub const CONTAINS_THRESHOLD: f32 = 0.001;

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

/// Uniform scale
#[inline]
pub fn scale(v: Vec2, s: f32) -> Vec2 {
    v * s
}

/// Per-axis scale
#[inline]
pub fn scale_xy(v: Vec2, x: f32, y: f32) -> Vec2 {
    Vec2::new(v.x * x, v.y * y)
}

/// Component-wise product
#[inline]
pub fn multiply(a: Vec2, b: Vec2) -> Vec2 {
    a * b
}

/// Component-wise quotient
#[inline]
pub fn divide(a: Vec2, b: Vec2) -> Vec2 {
    a / b
}

#[inline]
pub fn length(v: Vec2) -> f32 {
    length_squared(v).sqrt()
}

#[inline]
pub fn length_squared(v: Vec2) -> f32 {
    v.x * v.x + v.y * v.y
}

#[inline]
pub fn dist(a: Vec2, b: Vec2) -> f32 {
    length(a - b)
}

#[inline]
pub fn dist_squared(a: Vec2, b: Vec2) -> f32 {
    length_squared(a - b)
}

/// Unit vector in the direction of `v`; the zero vector comes back unchanged
pub fn unit(v: Vec2) -> Vec2 {
    let len = length(v);
    if len == 0.0 { v } else { v / len }
}

/// Rotate `v` by `radians`
///
/// Without a pivot this is the standard counter-clockwise rotation about the
/// origin. With a pivot the rotation runs the other way
/// (`y' = cos·dy - sin·dx`); callers rely on both forms as they are.
pub fn rotate(v: Vec2, radians: f32, origin: Option<Vec2>) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    match origin {
        Some(o) => {
            let d = v - o;
            Vec2::new(cos * d.x + sin * d.y + o.x, cos * d.y - sin * d.x + o.y)
        }
        None => Vec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y),
    }
}

/// Heading of `v` in radians
#[inline]
pub fn angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Heading from `a` toward `b`
#[inline]
pub fn angle_to(a: Vec2, b: Vec2) -> f32 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Unsigned angle between two vectors, `acos(a·b / |a||b|)`
///
/// The ratio is clamped to 1 because rounding can push it just above and
/// turn the result into NaN. Zero-length input gives 0.
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let denominator = length(a) * length(b);
    if denominator == 0.0 {
        return 0.0;
    }
    (dot(a, b) / denominator).min(1.0).acos()
}

/// Angle at `center` formed by `prev -> center -> next`
pub fn angle3(prev: Vec2, center: Vec2, next: Vec2) -> f32 {
    angle_between(prev - center, next - center)
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Scalar 2D cross product
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Project `point` onto `line` (a direction from the origin)
///
/// The scalar is `dot / |line|`, not `dot / |line|²`: the result is scaled by
/// the line's own length. A zero-length line projects to the origin.
pub fn project(point: Vec2, line: Vec2) -> Vec2 {
    let denominator = length(line);
    if denominator == 0.0 {
        return Vec2::ZERO;
    }
    line * (dot(point, line) / denominator)
}

/// Nearest point to `p` on the infinite line through `l1` and `l2`
pub fn nearest_point(l1: Vec2, l2: Vec2, p: Vec2) -> Option<Vec2> {
    let d = l2 - l1;
    let len_sq = length_squared(d);
    if len_sq == 0.0 {
        return None;
    }
    let r = dot(p - l1, d) / len_sq;
    Some(l1 + d * r)
}

/// Nearest point to `p` on the closed segment `a..b`
pub fn nearest_between(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let v = b - a;
    let len_sq = length_squared(v);
    if len_sq == 0.0 {
        return a;
    }
    let t = (dot(v, p - a) / len_sq).clamp(0.0, 1.0);
    lerp(a, b, t)
}

/// Distance from `p` to the infinite line through `l1` and `l2`
///
/// Infinite when the line is degenerate.
pub fn shortest_dist(l1: Vec2, l2: Vec2, p: Vec2) -> f32 {
    let d = l2 - l1;
    let len_sq = length_squared(d);
    if len_sq == 0.0 {
        return f32::INFINITY;
    }
    let s = ((l1.y - p.y) * d.x - (l1.x - p.x) * d.y) / len_sq;
    s.abs() * len_sq.sqrt()
}

/// Intersection of segments `p1..p2` and `p3..p4`
///
/// `None` when either segment has zero length, the segments are parallel,
/// or the crossing lies outside either segment.
pub fn intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    if p1 == p2 || p3 == p4 {
        return None;
    }

    let denominator = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denominator == 0.0 {
        return None;
    }

    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denominator;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denominator;

    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }

    Some(p1 + (p2 - p1) * ua)
}

/// True if `p` lies on the segment `l1..l2`
///
/// Uses the distance-sum test: the two legs through `p` add up to the
/// segment length (within `threshold`) only for colinear points between the
/// endpoints.
pub fn contains(l1: Vec2, l2: Vec2, p: Vec2, threshold: f32) -> bool {
    let legs = dist(p, l1) + dist(p, l2);
    near_scalar(legs, dist(l1, l2), threshold)
}

/// True if anti-parallel segments share any endpoint span
pub fn overlap(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let slope1 = angle(p2 - p1);
    let slope2 = angle(p4 - p3);
    if !near_scalar((slope2 - slope1).abs(), std::f32::consts::PI, 0.01) {
        return false;
    }
    contains(p1, p2, p3, CONTAINS_THRESHOLD)
        || contains(p1, p2, p4, CONTAINS_THRESHOLD)
        || contains(p3, p4, p1, CONTAINS_THRESHOLD)
        || contains(p3, p4, p2, CONTAINS_THRESHOLD)
}

/// Which side of line `a -> b` the point `c` is on
///
/// Zero on the line, negative to the left, positive to the right.
#[inline]
pub fn line_point_dir(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[inline]
pub fn mid(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

#[inline]
pub fn abs(v: Vec2) -> Vec2 {
    Vec2::new(v.x.abs(), v.y.abs())
}

/// Per-axis sign; zero stays zero
pub fn sign(v: Vec2) -> Vec2 {
    Vec2::new(sign_of(v.x), sign_of(v.y))
}

fn sign_of(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Perpendicular `(-y, x)`
#[inline]
pub fn normal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Point `t` (0..=1) of the way from `start` to `end`
#[inline]
pub fn lerp(start: Vec2, end: Vec2, t: f32) -> Vec2 {
    start + (end - start) * t
}

#[inline]
pub fn equals(a: Vec2, b: Vec2) -> bool {
    a.x == b.x && a.y == b.y
}

/// Both components within `threshold`
pub fn near(a: Vec2, b: Vec2, threshold: f32) -> bool {
    near_scalar(a.x, b.x, threshold) && near_scalar(a.y, b.y, threshold)
}

#[inline]
fn near_scalar(a: f32, b: f32, threshold: f32) -> bool {
    (a - b).abs() <= threshold
}

#[inline]
pub fn round(v: Vec2) -> Vec2 {
    v.round()
}

#[inline]
pub fn ceil(v: Vec2) -> Vec2 {
    v.ceil()
}

#[inline]
pub fn floor(v: Vec2) -> Vec2 {
    v.floor()
}

/// Snap each component to a multiple of `step`: positives snap up,
/// zero and negatives snap down
pub fn round_to(v: Vec2, step: f32) -> Vec2 {
    let snap = |x: f32| {
        if x > 0.0 {
            ceil_scalar(x, step)
        } else {
            floor_scalar(x, step)
        }
    };
    Vec2::new(snap(v.x), snap(v.y))
}

pub fn ceil_to(v: Vec2, step: f32) -> Vec2 {
    Vec2::new(ceil_scalar(v.x, step), ceil_scalar(v.y, step))
}

pub fn floor_to(v: Vec2, step: f32) -> Vec2 {
    Vec2::new(floor_scalar(v.x, step), floor_scalar(v.y, step))
}

fn ceil_scalar(x: f32, step: f32) -> f32 {
    (x / step).ceil() * step
}

fn floor_scalar(x: f32, step: f32) -> f32 {
    (x / step).floor() * step
}

pub fn sum(points: &[Vec2]) -> Vec2 {
    points.iter().fold(Vec2::ZERO, |acc, p| acc + *p)
}

/// `[[1, 2]] -> [Vec2(1, 2)]`
pub fn from_array(pairs: &[[f32; 2]]) -> Vec<Vec2> {
    pairs.iter().map(|&[x, y]| Vec2::new(x, y)).collect()
}
