//! Canvas 2D backend
//!
//! Draws on the main canvas. When a second, same-sized canvas is supplied it
//! carries the previous frame for motion blur.

use std::collections::HashMap;
use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{Renderer, Transform};
use crate::sim::{Color, Sprite, Viewport};

const DEBUG_LINE_WIDTH: f64 = 2.0;
/// Length of the facing marker
const DEBUG_FACING_LENGTH: f64 = 10.0;

pub struct Canvas2dRenderer {
    ctx: CanvasRenderingContext2d,
    blur: Option<CanvasRenderingContext2d>,
    images: HashMap<String, HtmlImageElement>,
}

impl Canvas2dRenderer {
    pub fn new(
        ctx: CanvasRenderingContext2d,
        blur: Option<CanvasRenderingContext2d>,
        images: HashMap<String, HtmlImageElement>,
    ) -> Self {
        Self { ctx, blur, images }
    }

    fn size(&self) -> (f64, f64) {
        self.ctx
            .canvas()
            .map(|c| (c.width() as f64, c.height() as f64))
            .unwrap_or((0.0, 0.0))
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }

    /// Run `draw` with the context translated and rotated into `transform`
    fn with_transform(&self, transform: Transform, draw: impl FnOnce(&CanvasRenderingContext2d)) {
        self.ctx.save();
        let _ = self
            .ctx
            .translate(transform.position.x as f64, transform.position.y as f64);
        let _ = self.ctx.rotate(transform.angle as f64);
        draw(&self.ctx);
        self.ctx.restore();
    }
}

impl Renderer for Canvas2dRenderer {
    fn viewport(&self) -> Viewport {
        let (w, h) = self.size();
        Viewport::new(w as f32, h as f32)
    }

    fn begin_frame(&mut self, motion_blur: f32) {
        let (w, h) = self.size();
        let blur_source = self.blur.as_ref().zip(self.ctx.canvas());

        match blur_source {
            Some((bctx, main_canvas)) if motion_blur > 0.0 => {
                bctx.clear_rect(0.0, 0.0, w, h);
                bctx.set_global_alpha(motion_blur as f64);
                let _ = bctx.draw_image_with_html_canvas_element(&main_canvas, 0.0, 0.0);
                self.ctx.clear_rect(0.0, 0.0, w, h);
                if let Some(blur_canvas) = bctx.canvas() {
                    let _ = self
                        .ctx
                        .draw_image_with_html_canvas_element(&blur_canvas, 0.0, 0.0);
                }
            }
            _ => self.ctx.clear_rect(0.0, 0.0, w, h),
        }
    }

    fn draw_sprite(&mut self, transform: Transform, sprite: &Sprite) {
        let Some(image) = self.images.get(&sprite.key) else {
            return;
        };
        let (w, h) = (transform.size.x as f64, transform.size.y as f64);
        self.with_transform(transform, |ctx| {
            let _ = ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                sprite.sx as f64,
                sprite.sy as f64,
                sprite.sw as f64,
                sprite.sh as f64,
                -w / 2.0,
                -h / 2.0,
                w,
                h,
            );
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.circle_path(center, radius);
        self.ctx.stroke();
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn draw_debug(&mut self, transform: Transform, radius: f32) {
        let green = Color::GREEN.css();
        self.with_transform(transform, |ctx| {
            ctx.set_line_width(DEBUG_LINE_WIDTH);
            ctx.set_stroke_style_str(&green);
            ctx.set_fill_style_str(&green);

            ctx.begin_path();
            let _ = ctx.arc(0.0, 0.0, radius.max(0.0) as f64, 0.0, TAU);
            ctx.stroke();

            ctx.fill_rect(-2.0, -2.0, 4.0, 4.0);

            ctx.begin_path();
            ctx.move_to(0.0, 0.0);
            ctx.line_to(0.0, -DEBUG_FACING_LENGTH);
            ctx.stroke();
        });
    }
}
