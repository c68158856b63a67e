//! Grid snake: a single-player snake game on a square board.
//!
//! The `game` module holds the rules and has no windowing dependency.
//! `presenter` draws a session with macroquad and feeds keyboard input back.

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod presenter;

pub use clock::TickClock;
pub use config::GameConfig;
pub use error::{Collision, ConfigError};
pub use game::{CellState, Direction, Position, Session, SessionState, TickOutcome};
