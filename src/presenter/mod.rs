//! macroquad front end: draws the board, forwards arrow keys to the session
//! and shows the game-over dialog.

pub mod dialog;
pub mod input;
pub mod render;

use log::info;
use macroquad::time::get_time;
use macroquad::window::{Conf, next_frame};

use crate::clock::TickClock;
use crate::config::GameConfig;
use crate::game::{Direction, Session, TickOutcome};
use dialog::GameOverDialog;

pub fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: config.window_pixels(),
        window_height: config.window_pixels(),
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

pub struct App {
    config: GameConfig,
    seed: Option<u64>,
    session: Session,
    clock: TickClock,
    dialog: Option<GameOverDialog>,
    games: u32,
}

impl App {
    /// With a seed every game places food identically.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let session = Self::fresh_session(&config, seed);
        let clock = TickClock::new(config.ticks_per_second);
        Self {
            config,
            seed,
            session,
            clock,
            dialog: None,
            games: 1,
        }
    }

    fn fresh_session(config: &GameConfig, seed: Option<u64>) -> Session {
        match seed {
            Some(seed) => Session::with_seed(config, seed),
            None => Session::new(config),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn dialog(&self) -> Option<&GameOverDialog> {
        self.dialog.as_ref()
    }

    pub fn start(&mut self, now: f64) {
        self.clock.start(now);
    }

    /// Direction requests are dropped while the game-over dialog is open.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.dialog.is_none() {
            self.session.request_direction(direction);
        }
    }

    /// Runs a tick if one is due at `now`.
    pub fn update(&mut self, now: f64) -> Option<TickOutcome> {
        if !self.clock.poll(now) {
            return None;
        }
        let outcome = self.session.tick();
        if let TickOutcome::Terminated(reason) = outcome {
            self.clock.stop();
            self.dialog = Some(GameOverDialog::new(reason.to_string()));
        }
        Some(outcome)
    }

    /// Closes the dialog and starts a new game from scratch.
    pub fn reset(&mut self, now: f64) {
        self.dialog = None;
        self.session = Self::fresh_session(&self.config, self.seed);
        self.games += 1;
        info!("reset, starting game {}", self.games);
        self.clock.start(now);
    }

    pub async fn run(mut self) {
        self.start(get_time());
        loop {
            if input::quit_requested() {
                info!("quit requested");
                break;
            }

            let dismissed = self.dialog.as_ref().is_some_and(|dialog| dialog.dismissed());
            if dismissed {
                self.reset(get_time());
            }

            for direction in input::pressed_directions() {
                self.request_direction(direction);
            }
            self.update(get_time());

            render::draw_board(self.session.board(), self.config.cell_gap as f32);
            if let Some(dialog) = &self.dialog {
                dialog.draw();
            }

            next_frame().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Collision;
    use crate::game::Position;

    fn app() -> App {
        let mut app = App::new(GameConfig::default(), Some(77));
        app.start(0.0);
        app
    }

    fn run_until_over(app: &mut App) -> Collision {
        let mut now = 0.0;
        for _ in 0..1000 {
            now += 0.1;
            if let Some(TickOutcome::Terminated(reason)) = app.update(now) {
                return reason;
            }
        }
        panic!("game never ended");
    }

    #[test]
    fn test_ticks_follow_clock() {
        let mut app = app();
        assert_eq!(app.update(0.05), None);
        assert!(app.update(0.1).is_some());
        assert_eq!(app.session().ticks(), 1);
    }

    #[test]
    fn test_collision_stops_clock_and_opens_dialog() {
        let mut app = app();
        app.request_direction(Direction::Up);
        let reason = run_until_over(&mut app);
        assert_eq!(reason, Collision::Edge);
        assert!(!app.clock().is_running());
        assert_eq!(app.dialog().map(|d| d.message()), Some("Snake hit the edge"));
        assert_eq!(app.update(1000.0), None);
    }

    #[test]
    fn test_input_ignored_while_dialog_open() {
        let mut app = app();
        app.request_direction(Direction::Up);
        run_until_over(&mut app);
        app.request_direction(Direction::Down);
        assert_eq!(app.session().input().pending(), Direction::Up);
    }

    #[test]
    fn test_reset_restores_canonical_session() {
        let mut app = app();
        let start = app.session().clone();
        app.request_direction(Direction::Down);
        run_until_over(&mut app);

        app.reset(500.0);
        assert!(app.dialog().is_none());
        assert!(app.clock().is_running());
        assert!(app.session().is_running());
        assert_eq!(app.session().board(), start.board());
        assert_eq!(app.session().snake(), start.snake());
        assert_eq!(app.session().food(), start.food());
        assert_eq!(app.session().input(), start.input());
        assert_eq!(app.session().snake().head(), Position::new(5, 10));

        assert_eq!(app.update(500.05), None);
        assert!(app.update(500.1).is_some());
    }
}
