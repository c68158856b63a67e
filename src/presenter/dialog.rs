use macroquad::color::{BLACK, Color};
use macroquad::input::{KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed, mouse_position};
use macroquad::math::{Rect, vec2};
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines};
use macroquad::text::{draw_text, measure_text};
use macroquad::window::{screen_height, screen_width};

const WIDTH: f32 = 350.0;
const HEIGHT: f32 = 100.0;
const TITLE_BAR: f32 = 22.0;
const CLOSE_BOX: f32 = 16.0;
const FONT_SIZE: u16 = 20;

const SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.4);
const PANEL: Color = Color::new(0.96, 0.96, 0.96, 1.0);
const TITLE: Color = Color::new(0.8, 0.8, 0.85, 1.0);
const HINT: Color = Color::new(0.45, 0.45, 0.45, 1.0);

/// Modal game-over message. Closing it is what starts the next game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOverDialog {
    message: String,
}

impl GameOverDialog {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn panel(screen_w: f32, screen_h: f32) -> Rect {
        Rect::new((screen_w - WIDTH) * 0.5, (screen_h - HEIGHT) * 0.5, WIDTH, HEIGHT)
    }

    pub fn close_box(panel: Rect) -> Rect {
        let inset = (TITLE_BAR - CLOSE_BOX) * 0.5;
        Rect::new(panel.right() - inset - CLOSE_BOX, panel.y + inset, CLOSE_BOX, CLOSE_BOX)
    }

    /// True when the player closed the dialog this frame.
    pub fn dismissed(&self) -> bool {
        if is_key_pressed(KeyCode::Enter)
            || is_key_pressed(KeyCode::Space)
            || is_key_pressed(KeyCode::Escape)
        {
            return true;
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = mouse_position();
            let panel = Self::panel(screen_width(), screen_height());
            return Self::close_box(panel).contains(vec2(mx, my));
        }
        false
    }

    pub fn draw(&self) {
        let sw = screen_width();
        let sh = screen_height();
        draw_rectangle(0.0, 0.0, sw, sh, SHADE);

        let panel = Self::panel(sw, sh);
        draw_rectangle(panel.x, panel.y, panel.w, panel.h, PANEL);
        draw_rectangle(panel.x, panel.y, panel.w, TITLE_BAR, TITLE);
        draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 1.0, BLACK);

        let close = Self::close_box(panel);
        draw_rectangle_lines(close.x, close.y, close.w, close.h, 1.0, BLACK);
        draw_text("x", close.x + 4.0, close.bottom() - 4.0, 16.0, BLACK);

        let body_top = panel.y + TITLE_BAR;
        let body_h = panel.h - TITLE_BAR;
        let m = measure_text(&self.message, None, FONT_SIZE, 1.0);
        let x = panel.x + (panel.w - m.width) * 0.5;
        let y = body_top + (body_h + m.height) * 0.5;
        draw_text(&self.message, x, y, FONT_SIZE as f32, BLACK);

        let hint = "close to play again";
        let hm = measure_text(hint, None, 14, 1.0);
        draw_text(hint, panel.x + (panel.w - hm.width) * 0.5, panel.bottom() - 6.0, 14.0, HINT);
    }
}
