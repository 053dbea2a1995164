//! Canvas 2D renderer

use std::f64::consts::TAU;

use pong_core::{GameOver, Presenter, Side, Snapshot};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::overlay::Overlay;
use crate::theme::{self, Theme};

pub struct CanvasPresenter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: Theme,
    overlay: Overlay,
    cursor_hidden: bool,
}

impl CanvasPresenter {
    pub fn new(canvas: HtmlCanvasElement, theme: Theme, overlay: Overlay) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            canvas,
            ctx,
            theme,
            overlay,
            cursor_hidden: false,
        })
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }

    /// Size the canvas to the arena
    pub fn resize(&self, width: f32, height: f32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn draw(&mut self, frame: &Snapshot<'_>) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let arena = frame.arena;
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        // Background
        match self.theme {
            Theme::Gradient => {
                let gradient = ctx.create_linear_gradient(0.0, 0.0, width, height);
                gradient.add_color_stop(0.0, theme::GRADIENT_START)?;
                gradient.add_color_stop(1.0, theme::GRADIENT_END)?;
                ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Theme::Flat => ctx.set_fill_style_str(theme::FLAT_BACKGROUND),
        }
        ctx.fill_rect(0.0, 0.0, width, height);

        // Paddles
        let paddle_width = arena.paddle_width as f64;
        let paddle_height = arena.paddle_height as f64;
        ctx.set_fill_style_str(theme::STROKE_COLOR);
        ctx.fill_rect(
            frame.computer_x as f64,
            arena.paddle_offset as f64,
            paddle_width,
            paddle_height,
        );
        ctx.fill_rect(
            frame.player_x as f64,
            arena.player_paddle_y() as f64,
            paddle_width,
            paddle_height,
        );

        // Centre line and circle
        ctx.set_line_dash(&js_sys::Array::new())?;
        ctx.set_stroke_style_str(theme::STROKE_COLOR);
        ctx.set_line_width(theme::CENTER_LINE_WIDTH);
        ctx.begin_path();
        ctx.move_to(0.0, height / 2.0);
        ctx.line_to(width, height / 2.0);
        ctx.stroke();

        ctx.begin_path();
        ctx.arc(width / 2.0, height / 2.0, arena.center_radius as f64, 0.0, TAU)?;
        ctx.stroke();

        // Dashed guide lines at the paddle offsets
        let offset = arena.paddle_offset as f64;
        ctx.set_line_dash(&js_sys::Array::of1(&JsValue::from_f64(theme::LINE_GAP)))?;
        ctx.set_stroke_style_str(theme::DIM_TEXT_COLOR);
        for y in [offset, height - offset] {
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(width, y);
            ctx.stroke();
        }

        // Ball
        ctx.begin_path();
        ctx.arc(
            frame.ball_pos.x as f64,
            frame.ball_pos.y as f64,
            arena.ball_radius as f64,
            0.0,
            TAU,
        )?;
        ctx.set_fill_style_str(theme::STROKE_COLOR);
        ctx.fill();

        // Scores
        ctx.set_font(&theme::font(theme::SCORE_FONT_SIZE));
        ctx.set_text_align("center");
        ctx.set_text_baseline("bottom");
        ctx.fill_text(
            &frame.score.computer.to_string(),
            theme::SCORE_X,
            theme::score_y(Side::Computer, arena),
        )?;
        ctx.set_text_baseline("top");
        ctx.fill_text(
            &frame.score.player.to_string(),
            theme::SCORE_X,
            theme::score_y(Side::Player, arena),
        )?;

        // Names
        if self.theme.shows_labels() {
            ctx.set_font(&theme::font(theme::LABEL_FONT_SIZE));
            ctx.set_text_baseline("middle");
            for (side, name) in [
                (Side::Computer, &arena.computer_name),
                (Side::Player, &arena.player_name),
            ] {
                ctx.set_fill_style_str(theme::label_color(side, frame.active_half));
                ctx.fill_text(name, width / 2.0, theme::label_y(side, arena))?;
            }
        }

        if frame.pointer_tracking && !self.cursor_hidden {
            self.canvas.style().set_property("cursor", "none")?;
            self.cursor_hidden = true;
        }

        Ok(())
    }
}

impl Presenter for CanvasPresenter {
    fn render(&mut self, frame: &Snapshot<'_>) {
        if let Err(e) = self.draw(frame) {
            log::error!("Failed to draw frame: {:?}", e);
        }
    }

    fn game_over(&mut self, outcome: &GameOver) {
        if let Err(e) = self.overlay.show(&outcome.winner_name) {
            log::error!("Failed to show game over overlay: {:?}", e);
        }
    }
}
