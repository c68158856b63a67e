use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::board::{Board, CellState, Position};
use super::direction::Direction;
use super::food::Food;
use super::input::InputLatch;
use super::snake::Snake;
use crate::config::GameConfig;
use crate::error::Collision;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated(Collision),
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    /// The head landed on food: the snake grew and food was respawned.
    Ate,
    Terminated(Collision),
}

/// One game from start to collision. A reset builds a new session.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    snake: Snake,
    food: Food,
    input: InputLatch,
    state: SessionState,
    ticks: u64,
    rng: StdRng,
}

impl Session {
    /// Starts a session seeded from OS entropy.
    ///
    /// `config` should have passed [`GameConfig::validate`]: an empty start
    /// snake panics and a start snake covering every cell never finishes
    /// placing food.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Starts a session whose food placement is fully determined by `seed`.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GameConfig, mut rng: StdRng) -> Self {
        let size = config.grid_size as i32;
        let head = Position::new(size / 4, size / 2);
        let snake = Snake::horizontal(head, config.start_body_size);

        let mut board = Board::new(config.grid_size);
        for pos in snake.iter() {
            // segments past the left edge stay in the snake but off the board
            board.set(*pos, CellState::Snake);
        }
        let food = Food::spawn(&mut board, &mut rng);

        info!(
            "session started: {}x{} grid, snake of {} at ({}, {})",
            config.grid_size, config.grid_size, config.start_body_size, head.x, head.y
        );

        Self {
            board,
            snake,
            food,
            input: InputLatch::default(),
            state: SessionState::Running,
            ticks: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn input(&self) -> &InputLatch {
        &self.input
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Number of completed non-terminal ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Records a direction request for the next tick.
    pub fn request_direction(&mut self, direction: Direction) {
        self.input.request(direction);
    }

    /// Advances the game by one step.
    ///
    /// Collision checks run before anything moves, so a terminal tick leaves
    /// the board untouched. The tail cell is still occupied during the self
    /// check: stepping onto it ends the game even though it would be vacated.
    pub fn tick(&mut self) -> TickOutcome {
        if let SessionState::Terminated(reason) = self.state {
            return TickOutcome::Terminated(reason);
        }

        let direction = self.input.commit();
        let new_head = self.snake.head().moved(direction);

        if !self.board.contains(new_head) {
            return self.terminate(Collision::Edge);
        }
        if self.board.is_snake(new_head) {
            return self.terminate(Collision::SelfCollision);
        }

        self.snake.push_head(new_head);
        self.board.set(new_head, CellState::Snake);

        let ate = new_head == self.food.position();
        if ate {
            self.food.consume();
        } else if let Some(tail) = self.snake.pop_tail() {
            self.board.set(tail, CellState::Empty);
        }

        if !self.food.is_alive() {
            self.food.respawn(&mut self.board, &mut self.rng);
        }

        self.ticks += 1;
        if ate {
            debug!("food eaten, snake length {}", self.snake.len());
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    fn terminate(&mut self, reason: Collision) -> TickOutcome {
        info!(
            "session over after {} ticks, length {}: {}",
            self.ticks,
            self.snake.len(),
            reason
        );
        self.state = SessionState::Terminated(reason);
        TickOutcome::Terminated(reason)
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, pos: Position) {
        if self.board.cell(self.food.position()) == Some(CellState::Food) {
            self.board.set(self.food.position(), CellState::Empty);
        }
        self.board.set(pos, CellState::Food);
        self.food = Food::at(pos);
    }
}
