use std::path::PathBuf;

use thiserror::Error;

/// Why a session ended. The display text is what the game-over dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Collision {
    #[error("Snake hit the edge")]
    Edge,
    #[error("The dummy snake tried to eat itself")]
    SelfCollision,
}

/// Errors raised while loading or validating a [`crate::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("start body size must be at least 1")]
    EmptySnake,
    #[error("ticks per second must be positive and finite, got {0}")]
    InvalidTickRate(f64),
    #[error("window size must be at least 1 pixel")]
    EmptyWindow,
    #[error("window size {0} is too large")]
    WindowTooLarge(u32),
    #[error("a {grid_size}x{grid_size} grid has no free cell for food next to the starting snake")]
    NoRoomForFood { grid_size: usize },
}
