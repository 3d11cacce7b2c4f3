//! Base simulated object
//!
//! Position, velocity, facing and a size-derived collision radius, plus the
//! visual parameters the renderer needs. No game rules live here.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use crate::assets::Image;
use crate::math::vec;

/// Playfield bounds, supplied by the renderer/viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Opaque RGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Player tracer rounds
    pub const AMBER: Color = Color::rgb(253, 200, 51);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string (`rgb(r, g, b)`)
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::GREEN
    }
}

/// An image key plus the source rectangle to cut from it
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub key: String,
    pub sx: f32,
    pub sy: f32,
    pub sw: f32,
    pub sh: f32,
}

/// Construction arguments; anything left `None` gets a safe default
#[derive(Debug, Clone, Default)]
pub struct EntityDesc {
    pub image: Option<Image>,
    pub position: Option<Vec2>,
    pub velocity: Option<Vec2>,
    pub size: Option<Vec2>,
    pub angle: Option<f32>,
    pub color: Option<Color>,
    pub sx: Option<f32>,
    pub sy: Option<f32>,
    pub sw: Option<f32>,
    pub sh: Option<f32>,
}

/// A positioned, drawable, collidable object
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub position: Vec2,
    /// Per-frame displacement, applied after rotating by `angle`
    pub velocity: Vec2,
    pub size: Vec2,
    /// Collision radius, derived from `size` (the boss overrides it while bobbing)
    pub radius: f32,
    /// Facing in radians
    pub angle: f32,
    pub color: Color,
    pub sprite: Option<Sprite>,
}

impl Entity {
    pub fn new(desc: EntityDesc) -> Self {
        let size = desc.size.unwrap_or(Vec2::ZERO);
        let sprite = desc.image.map(|image| Sprite {
            sx: desc.sx.unwrap_or(0.0),
            sy: desc.sy.unwrap_or(0.0),
            sw: desc.sw.unwrap_or(image.width),
            sh: desc.sh.unwrap_or(image.height),
            key: image.key,
        });

        Self {
            position: desc.position.unwrap_or(Vec2::ZERO),
            velocity: desc.velocity.unwrap_or(Vec2::ZERO),
            size,
            radius: radius_for(size),
            angle: desc.angle.unwrap_or(0.0),
            color: desc.color.unwrap_or_default(),
            sprite,
        }
    }

    /// Swap the sprite image, keeping the source rectangle
    pub fn set_sprite_key(&mut self, key: &str) {
        if let Some(sprite) = self.sprite.as_mut() {
            key.clone_into(&mut sprite.key);
        }
    }

    /// Velocity rotated into world space by the current facing
    pub fn displacement(&self) -> Vec2 {
        vec::rotate(self.velocity, self.angle, None)
    }

    /// Apply one frame of velocity without any bounds
    pub fn translate(&mut self) {
        self.position += self.displacement();
    }

    /// Apply one frame of velocity, then clamp into
    /// `[0, width - radius] x [0, height - radius]`
    pub fn advance(&mut self, bounds: Viewport) {
        self.translate();
        self.position.x = clamp_range(self.position.x, 0.0, bounds.width - self.radius);
        self.position.y = clamp_range(self.position.y, 0.0, bounds.height - self.radius);
    }

    /// Hit test: the distance between centers is under *either* radius.
    ///
    /// This is deliberately more generous than circle overlap and is the
    /// collision rule every gameplay check uses.
    pub fn is_colliding(&self, other: &Entity) -> bool {
        let d = vec::dist(self.position, other.position);
        d < self.radius || d < other.radius
    }

    /// Facing that points the sprite's "up" at `point`
    pub fn angle_to(&self, point: Vec2) -> f32 {
        vec::angle_to(self.position, point) + FRAC_PI_2
    }

    pub fn look_at(&mut self, point: Vec2) {
        self.angle = self.angle_to(point);
    }
}

/// `max(w, h) / 2`
#[inline]
pub fn radius_for(size: Vec2) -> f32 {
    size.x.max(size.y) / 2.0
}

/// Clamp that tolerates an inverted range (tiny viewports): the upper bound wins
#[inline]
pub fn clamp_range(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(x: f32, y: f32, size: f32) -> Entity {
        Entity::new(EntityDesc {
            position: Some(Vec2::new(x, y)),
            size: Some(Vec2::splat(size)),
            ..Default::default()
        })
    }

    #[test]
    fn test_defaults() {
        let e = Entity::new(EntityDesc::default());
        assert_eq!(e.position, Vec2::ZERO);
        assert_eq!(e.velocity, Vec2::ZERO);
        assert_eq!(e.size, Vec2::ZERO);
        assert_eq!(e.radius, 0.0);
        assert_eq!(e.angle, 0.0);
        assert_eq!(e.color, Color::GREEN);
        assert!(e.sprite.is_none());
    }

    #[test]
    fn test_radius_from_larger_side() {
        let e = Entity::new(EntityDesc {
            size: Some(Vec2::new(30.0, 50.0)),
            ..Default::default()
        });
        assert_eq!(e.radius, 25.0);
    }

    #[test]
    fn test_sprite_rect_defaults_to_whole_image() {
        let e = Entity::new(EntityDesc {
            image: Some(Image::new("img/up.png", 64.0, 32.0)),
            ..Default::default()
        });
        let sprite = e.sprite.unwrap();
        assert_eq!((sprite.sx, sprite.sy, sprite.sw, sprite.sh), (0.0, 0.0, 64.0, 32.0));
    }

    #[test]
    fn test_advance_rotates_velocity_and_clamps() {
        let mut e = Entity::new(EntityDesc {
            position: Some(Vec2::new(50.0, 50.0)),
            velocity: Some(Vec2::new(0.0, -10.0)),
            size: Some(Vec2::splat(20.0)),
            angle: Some(std::f32::consts::FRAC_PI_2),
            ..Default::default()
        });
        // (0, -10) rotated a quarter turn counter-clockwise is (10, 0)
        e.advance(Viewport::new(200.0, 200.0));
        assert!((e.position - Vec2::new(60.0, 50.0)).length() < 1e-4);

        e.position = Vec2::new(195.0, 50.0);
        e.advance(Viewport::new(200.0, 200.0));
        assert_eq!(e.position.x, 190.0);
    }

    #[test]
    fn test_collision_uses_either_radius() {
        let big = at(0.0, 0.0, 100.0);
        let tiny = at(40.0, 0.0, 2.0);
        assert!(big.is_colliding(&tiny));
        assert!(tiny.is_colliding(&big));
        assert!(!at(0.0, 0.0, 2.0).is_colliding(&tiny));
    }

    #[test]
    fn test_angle_to_points_sprite_up() {
        let e = at(0.0, 0.0, 10.0);
        // Target straight up the screen (negative y) means no rotation
        assert!(e.angle_to(Vec2::new(0.0, -10.0)).abs() < 1e-6);
        let mut e = e;
        e.look_at(Vec2::new(10.0, 0.0));
        assert!((e.angle - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_moving_along_look_at_heads_to_target() {
        let mut e = at(0.0, 0.0, 2.0);
        e.velocity = Vec2::new(0.0, -3.0);
        let target = Vec2::new(30.0, 40.0);
        e.look_at(target);
        e.translate();
        assert!((e.position - Vec2::new(1.8, 2.4)).length() < 1e-4);
    }

    proptest! {
        #[test]
        fn collision_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, asz in 0.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bsz in 0.0f32..200.0,
        ) {
            let a = at(ax, ay, asz);
            let b = at(bx, by, bsz);
            prop_assert_eq!(a.is_colliding(&b), b.is_colliding(&a));
        }
    }
}
