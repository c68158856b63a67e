use std::collections::VecDeque;

use super::board::Position;

/// Occupied cells of the snake, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Lays out `length` cells horizontally, head at `head`, body trailing to the left.
    ///
    /// Panics if `length` is zero.
    pub fn horizontal(head: Position, length: usize) -> Self {
        assert!(length > 0, "snake needs at least one cell");
        let body = (0..length as i32)
            .map(|i| Position::new(head.x - i, head.y))
            .collect();
        Self { body }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    pub fn push_head(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    pub fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop_back()
    }
}
