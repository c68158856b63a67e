use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::GameConfig;
use grid_snake::presenter::{App, window_conf};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic snake on a square grid")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the board
    #[arg(long)]
    grid_size: Option<usize>,

    /// Starting length of the snake
    #[arg(long)]
    start_body_size: Option<usize>,

    /// Game speed
    #[arg(long)]
    ticks_per_second: Option<f64>,

    /// Window width and height in pixels
    #[arg(long)]
    window_size: Option<u32>,

    /// Fixed food seed, making every game identical
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(start_body_size) = self.start_body_size {
            config.start_body_size = start_body_size;
        }
        if let Some(ticks_per_second) = self.ticks_per_second {
            config.ticks_per_second = ticks_per_second;
        }
        if let Some(window_size) = self.window_size {
            config.window_size = window_size;
        }
        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level.into(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    info!(
        "starting snake: grid {}, body {}, {} ticks/s",
        config.grid_size, config.start_body_size, config.ticks_per_second
    );

    let conf = window_conf(&config);
    let app = App::new(config, cli.seed);
    macroquad::Window::from_config(conf, app.run());

    Ok(())
}
