//! 3D vector helpers
//!
//! Same value semantics as [`super::vec`], over `glam::Vec3`.

use glam::Vec3;

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

#[inline]
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

#[inline]
pub fn floor(v: Vec3) -> Vec3 {
    v.floor()
}

/// Uniform scale
#[inline]
pub fn scale(v: Vec3, s: f32) -> Vec3 {
    v * s
}

/// Per-axis scale
#[inline]
pub fn scale_xyz(v: Vec3, x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(v.x * x, v.y * y, v.z * z)
}

#[inline]
pub fn length_squared(v: Vec3) -> f32 {
    v.x * v.x + v.y * v.y + v.z * v.z
}

#[inline]
pub fn length(v: Vec3) -> f32 {
    length_squared(v).sqrt()
}

#[inline]
pub fn dist(a: Vec3, b: Vec3) -> f32 {
    length(b - a)
}

#[inline]
pub fn dist_squared(a: Vec3, b: Vec3) -> f32 {
    length_squared(a - b)
}

#[inline]
pub fn lerp(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    start + (end - start) * t
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Vectors are collinear when their cross product is exactly zero
pub fn collinear(a: Vec3, b: Vec3) -> bool {
    cross(a, b) == Vec3::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_of_axes() {
        assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(cross(Vec3::Y, Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_collinear() {
        assert!(collinear(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0)));
        assert!(!collinear(Vec3::X, Vec3::Y));
    }

    #[test]
    fn test_dist_and_lerp() {
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(dist(a, b), 7.0);
        assert_eq!(dist_squared(a, b), 49.0);
        assert_eq!(lerp(a, b, 0.5), Vec3::new(1.0, 1.5, 3.0));
        assert_eq!(scale_xyz(b, 1.0, 0.0, 2.0), Vec3::new(2.0, 0.0, 12.0));
    }
}
