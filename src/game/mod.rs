//! Game rules for snake, free of any windowing or rendering code.

pub mod board;
pub mod direction;
pub mod food;
pub mod input;
pub mod session;
pub mod snake;

pub use board::{Board, CellState, Position};
pub use direction::Direction;
pub use food::Food;
pub use input::InputLatch;
pub use session::{Session, SessionState, TickOutcome};
pub use snake::Snake;
