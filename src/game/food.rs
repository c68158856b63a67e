use log::debug;
use rand::Rng;

use super::board::{Board, CellState, Position};

/// The single food item on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
    alive: bool,
}

impl Food {
    /// Places a fresh food item on the board.
    pub fn spawn<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Self {
        Self {
            position: spawn(board, rng),
            alive: true,
        }
    }

    #[cfg(test)]
    pub(crate) fn at(position: Position) -> Self {
        Self {
            position,
            alive: true,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Marks the food as eaten. The board cell is left to the caller.
    pub fn consume(&mut self) {
        self.alive = false;
    }

    /// Moves the food to a new random cell and marks it alive.
    pub fn respawn<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) {
        if board.cell(self.position) == Some(CellState::Food) {
            board.set(self.position, CellState::Empty);
        }
        self.position = spawn(board, rng);
        self.alive = true;
    }
}

/// Samples random cells until one is not part of the snake, marks it as food
/// and returns it.
///
/// Never returns if every cell belongs to the snake.
pub fn spawn<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Position {
    let size = board.size() as i32;
    loop {
        let pos = Position::new(rng.random_range(0..size), rng.random_range(0..size));
        if !board.is_snake(pos) {
            board.set(pos, CellState::Food);
            debug!("food spawned at ({}, {})", pos.x, pos.y);
            return pos;
        }
    }
}
