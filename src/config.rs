use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_GRID_SIZE: usize = 20;
pub const DEFAULT_START_BODY_SIZE: usize = 3;
pub const DEFAULT_TICKS_PER_SECOND: f64 = 10.0;
pub const DEFAULT_WINDOW_SIZE: u32 = 800;
pub const DEFAULT_CELL_GAP: u32 = 1;

/// Settings fixed for the lifetime of a session.
///
/// `start_body_size` is not checked against `grid_size / 4`; a snake that
/// does not fit to the left of its start column hangs off the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square board
    pub grid_size: usize,
    /// Length of the snake at the start of every session
    pub start_body_size: usize,
    /// Game speed
    pub ticks_per_second: f64,
    /// Window width and height in logical pixels
    pub window_size: u32,
    /// Gap between neighbouring cells in logical pixels
    pub cell_gap: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            start_body_size: DEFAULT_START_BODY_SIZE,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            window_size: DEFAULT_WINDOW_SIZE,
            cell_gap: DEFAULT_CELL_GAP,
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: usize, start_body_size: usize) -> Self {
        Self {
            grid_size,
            start_body_size,
            ..Default::default()
        }
    }

    /// Reads a JSON config file. Missing fields fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.start_body_size == 0 {
            return Err(ConfigError::EmptySnake);
        }
        if !self.ticks_per_second.is_finite() || self.ticks_per_second <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.ticks_per_second));
        }
        if self.window_size == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if i32::try_from(self.window_size).is_err() {
            return Err(ConfigError::WindowTooLarge(self.window_size));
        }
        let cells = self.grid_size.saturating_mul(self.grid_size);
        if self.start_snake_cells_on_board() >= cells {
            return Err(ConfigError::NoRoomForFood {
                grid_size: self.grid_size,
            });
        }
        Ok(())
    }

    /// Cells of the starting snake that land on the board. The head sits in
    /// column `grid_size / 4` and the body trails left from there.
    pub fn start_snake_cells_on_board(&self) -> usize {
        self.start_body_size.min(self.grid_size / 4 + 1)
    }

    /// Window side in pixels as the windowing layer expects it.
    pub fn window_pixels(&self) -> i32 {
        i32::try_from(self.window_size).unwrap_or(i32::MAX)
    }
}
