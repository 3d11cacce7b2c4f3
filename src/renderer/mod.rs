//! Rendering contract
//!
//! The simulation never draws. After each tick the shell hands the state to
//! [`draw_scene`], which walks it in update order and issues primitive calls
//! on a [`Renderer`]. The browser build implements it over a Canvas 2D context.

use glam::Vec2;

use crate::sim::{Color, Entity, GameState, Sprite, Viewport};

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::Canvas2dRenderer;

/// Pointer marker radius
const POINTER_RADIUS: f32 = 5.0;
const POINTER_LINE_WIDTH: f32 = 0.5;
const LASER_LINE_WIDTH: f32 = 1.0;

/// Where and how large to draw something, centered on `position`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Rotation in radians
    pub angle: f32,
    pub size: Vec2,
}

impl From<&Entity> for Transform {
    fn from(entity: &Entity) -> Self {
        Self {
            position: entity.position,
            angle: entity.angle,
            size: entity.size,
        }
    }
}

/// Drawing backend
pub trait Renderer {
    /// Current drawable area
    fn viewport(&self) -> Viewport;

    /// Clear for a new frame, keeping `motion_blur` (0..1) of the last one
    fn begin_frame(&mut self, motion_blur: f32);

    /// Draw a source rectangle of an image, scaled to `transform.size`
    fn draw_sprite(&mut self, transform: Transform, sprite: &Sprite);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32);

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    /// Collision radius, center point and facing marker
    fn draw_debug(&mut self, transform: Transform, radius: f32);
}

/// Per-frame presentation options
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawOptions {
    pub debug: bool,
    /// Blur strength for this frame (already gated by settings)
    pub motion_blur: f32,
}

/// Sprite if it has one, otherwise a filled circle of its radius
pub fn draw_entity<R: Renderer + ?Sized>(renderer: &mut R, entity: &Entity, debug: bool) {
    let transform = Transform::from(entity);
    match &entity.sprite {
        Some(sprite) => renderer.draw_sprite(transform, sprite),
        None => renderer.fill_circle(entity.position, entity.radius, entity.color),
    }
    if debug {
        renderer.draw_debug(transform, entity.radius);
    }
}

/// Draw one frame: pointer marker, boss, aim laser, player, minions, bullets
pub fn draw_scene<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameState,
    pointer: Vec2,
    options: DrawOptions,
) {
    renderer.begin_frame(options.motion_blur);
    renderer.stroke_circle(pointer, POINTER_RADIUS, Color::RED, POINTER_LINE_WIDTH);

    if let Some(boss) = &state.boss {
        draw_entity(renderer, &boss.entity, options.debug);
    }

    let player = &state.player.entity;
    renderer.draw_line(player.position, pointer, Color::GREEN, LASER_LINE_WIDTH);
    draw_entity(renderer, player, options.debug);

    for minion in state.minions.iter().rev() {
        draw_entity(renderer, &minion.entity, options.debug);
    }
    for bullet in &state.bullets {
        draw_entity(renderer, &bullet.entity, options.debug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetCatalog;
    use crate::sim::Projectile;

    #[derive(Debug, PartialEq)]
    enum Call {
        Begin(f32),
        Sprite(String),
        Fill(Color),
        Stroke(Color),
        Line(Color),
        Debug,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Renderer for Recorder {
        fn viewport(&self) -> Viewport {
            Viewport::new(800.0, 600.0)
        }
        fn begin_frame(&mut self, motion_blur: f32) {
            self.calls.push(Call::Begin(motion_blur));
        }
        fn draw_sprite(&mut self, _: Transform, sprite: &Sprite) {
            self.calls.push(Call::Sprite(sprite.key.clone()));
        }
        fn fill_circle(&mut self, _: Vec2, _: f32, color: Color) {
            self.calls.push(Call::Fill(color));
        }
        fn stroke_circle(&mut self, _: Vec2, _: f32, color: Color, _: f32) {
            self.calls.push(Call::Stroke(color));
        }
        fn draw_line(&mut self, _: Vec2, _: Vec2, color: Color, _: f32) {
            self.calls.push(Call::Line(color));
        }
        fn draw_debug(&mut self, _: Transform, _: f32) {
            self.calls.push(Call::Debug);
        }
    }

    fn scene() -> GameState {
        let mut state = GameState::new(1, Viewport::new(800.0, 600.0), AssetCatalog::headless());
        state.minions.clear();
        state.bullets.push(Projectile::player(Vec2::new(10.0, 10.0), 0.0));
        state
    }

    #[test]
    fn test_scene_order() {
        let mut r = Recorder::default();
        let options = DrawOptions {
            debug: false,
            motion_blur: 0.3,
        };
        draw_scene(&mut r, &scene(), Vec2::new(5.0, 5.0), options);

        assert_eq!(r.calls[0], Call::Begin(0.3));
        assert_eq!(r.calls[1], Call::Stroke(Color::RED));
        assert_eq!(r.calls[2], Call::Sprite("img/graem_sad.png".into()));
        assert_eq!(r.calls[3], Call::Line(Color::GREEN));
        assert_eq!(
            r.calls[4],
            Call::Sprite("img/tds/handgun/idle/survivor-idle_handgun_0.png".into())
        );
        // Bullets have no image
        assert_eq!(r.calls[5], Call::Fill(Color::AMBER));
        assert_eq!(r.calls.len(), 6);
    }

    #[test]
    fn test_debug_overlay_per_entity() {
        let mut r = Recorder::default();
        let options = DrawOptions {
            debug: true,
            motion_blur: 0.0,
        };
        draw_scene(&mut r, &scene(), Vec2::ZERO, options);
        let debug_calls = r.calls.iter().filter(|c| **c == Call::Debug).count();
        // Boss, player, bullet
        assert_eq!(debug_calls, 3);
    }
}
