use super::direction::Direction;

/// A cell coordinate. Signed so that the neighbour of an edge cell can be
/// represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Snake,
    Food,
}

/// Square grid of cell states, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(pos.x as i64)) && (0..size).contains(&(pos.y as i64))
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.size + pos.x as usize)
    }

    /// State of `pos`, or `None` when it lies off the board.
    pub fn cell(&self, pos: Position) -> Option<CellState> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Writes `state` into `pos`; returns false (and does nothing) off the board.
    pub fn set(&mut self, pos: Position, state: CellState) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    pub fn is_snake(&self, pos: Position) -> bool {
        self.cell(pos) == Some(CellState::Snake)
    }

    /// Every cell with its state, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, state)| {
            let pos = Position::new((i % size) as i32, (i / size) as i32);
            (pos, *state)
        })
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|s| **s == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        assert_eq!(board.count(CellState::Empty), 16);
        assert_eq!(board.iter().count(), 16);
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(5);
        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(4, 4)));
        assert!(!board.contains(Position::new(-1, 2)));
        assert!(!board.contains(Position::new(2, 5)));
        assert_eq!(board.cell(Position::new(5, 0)), None);
    }

    #[test]
    fn test_set_and_lookup() {
        let mut board = Board::new(5);
        assert!(board.set(Position::new(1, 3), CellState::Snake));
        assert!(board.is_snake(Position::new(1, 3)));
        assert_eq!(board.cell(Position::new(3, 1)), Some(CellState::Empty));
        assert!(!board.set(Position::new(-1, 0), CellState::Food));
        assert_eq!(board.count(CellState::Food), 0);
    }

    #[test]
    fn test_iter_is_row_major() {
        let board = Board::new(3);
        let positions: Vec<Position> = board.iter().map(|(p, _)| p).take(4).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_moved() {
        let p = Position::new(5, 10);
        assert_eq!(p.moved(Direction::Left), Position::new(4, 10));
        assert_eq!(p.moved(Direction::Right), Position::new(6, 10));
        assert_eq!(p.moved(Direction::Up), Position::new(5, 9));
        assert_eq!(p.moved(Direction::Down), Position::new(5, 11));
    }
}
