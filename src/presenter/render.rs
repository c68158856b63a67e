use macroquad::color::Color;
use macroquad::shapes::draw_rectangle;
use macroquad::window::{clear_background, screen_height, screen_width};

use crate::game::{Board, CellState, Position};

pub const BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const EMPTY_CELL: Color = Color::new(0.94, 0.97, 1.0, 1.0); // alice blue
pub const SNAKE_CELL: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const FOOD_CELL: Color = Color::new(0.0, 0.0, 1.0, 1.0);

pub fn cell_color(state: CellState) -> Color {
    match state {
        CellState::Empty => EMPTY_CELL,
        CellState::Snake => SNAKE_CELL,
        CellState::Food => FOOD_CELL,
    }
}

/// Pixel geometry of the grid, centred on the screen with `gap` pixels
/// between cells and around the border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub cell: f32,
    pub gap: f32,
    pub off_x: f32,
    pub off_y: f32,
}

impl GridLayout {
    pub fn new(screen_w: f32, screen_h: f32, grid_size: usize, gap: f32) -> Self {
        let n = grid_size as f32;
        let side = screen_w.min(screen_h);
        let cell = ((side - gap * (n + 1.0)) / n).max(1.0);
        let span = cell * n + gap * (n + 1.0);
        Self {
            cell,
            gap,
            off_x: (screen_w - span) * 0.5,
            off_y: (screen_h - span) * 0.5,
        }
    }

    /// Top-left corner of the cell at `pos`; column is x, row is y.
    pub fn origin(&self, pos: Position) -> (f32, f32) {
        let step = self.cell + self.gap;
        (
            self.off_x + self.gap + pos.x as f32 * step,
            self.off_y + self.gap + pos.y as f32 * step,
        )
    }
}

pub fn draw_board(board: &Board, gap: f32) {
    clear_background(BACKGROUND);
    let layout = GridLayout::new(screen_width(), screen_height(), board.size(), gap);
    for (pos, state) in board.iter() {
        let (x, y) = layout.origin(pos);
        draw_rectangle(x, y, layout.cell, layout.cell, cell_color(state));
    }
}
