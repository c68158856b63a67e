use super::direction::Direction;

/// Holds the direction the player asked for and the one the snake is moving in.
///
/// Requests are always accepted; illegal reversals are dropped at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLatch {
    pending: Direction,
    committed: Direction,
}

impl Default for InputLatch {
    fn default() -> Self {
        Self {
            pending: Direction::Right,
            committed: Direction::Right,
        }
    }
}

impl InputLatch {
    pub fn request(&mut self, direction: Direction) {
        self.pending = direction;
    }

    /// Applies the pending request unless it reverses the snake onto itself.
    pub fn commit(&mut self) -> Direction {
        if !self.pending.is_opposite(self.committed) {
            self.committed = self.pending;
        }
        self.committed
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }

    pub fn committed(&self) -> Direction {
        self.committed
    }
}
