use std::collections::HashSet;

use grid_snake::game::Board;
use grid_snake::{CellState, Collision, Direction, GameConfig, Position, Session, TickOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn snake_cells(board: &Board) -> HashSet<Position> {
    board
        .iter()
        .filter(|(_, state)| *state == CellState::Snake)
        .map(|(pos, _)| pos)
        .collect()
}

/// Plays random games and checks the board after every tick.
fn play_random(config: &GameConfig, seed: u64) -> Collision {
    let mut session = Session::with_seed(config, seed);
    let mut player = StdRng::seed_from_u64(seed ^ 0xdead_beef);

    loop {
        if player.random_bool(0.3) {
            let direction = DIRECTIONS[player.random_range(0..DIRECTIONS.len())];
            session.request_direction(direction);
        }

        let len_before = session.snake().len();
        let food_before = session.food().position();
        let board_before = session.board().clone();

        match session.tick() {
            TickOutcome::Terminated(reason) => {
                assert_eq!(session.board(), &board_before);
                assert_eq!(session.snake().len(), len_before);
                return reason;
            }
            outcome => {
                let body: HashSet<Position> = session.snake().iter().copied().collect();
                assert_eq!(body.len(), session.snake().len());
                assert_eq!(snake_cells(session.board()), body);
                assert!(session.food().is_alive());
                assert_eq!(session.board().count(CellState::Food), 1);

                if outcome == TickOutcome::Ate {
                    assert_eq!(session.snake().head(), food_before);
                    assert_eq!(session.snake().len(), len_before + 1);
                } else {
                    assert_eq!(session.snake().len(), len_before);
                    assert_eq!(session.food().position(), food_before);
                }
            }
        }
    }
}

#[test]
fn random_games_keep_board_consistent() {
    let config = GameConfig::default();
    for seed in 0..50 {
        play_random(&config, seed);
    }
}

#[test]
fn small_board_games_keep_board_consistent() {
    let config = GameConfig::new(6, 2);
    let mut reasons = HashSet::new();
    for seed in 0..200 {
        reasons.insert(play_random(&config, seed));
    }
    assert!(reasons.contains(&Collision::Edge));
}

#[test]
fn committed_direction_never_reverses() {
    let mut session = Session::with_seed(&GameConfig::default(), 3);
    let mut previous = session.input().committed();
    let turns = [
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];
    for direction in turns {
        session.request_direction(direction);
        if let TickOutcome::Terminated(_) = session.tick() {
            break;
        }
        let committed = session.input().committed();
        assert!(!committed.is_opposite(previous));
        previous = committed;
    }
}

#[test]
fn rebuilt_session_matches_start_layout() {
    let config = GameConfig::default();
    let start = Session::with_seed(&config, 99);

    let mut played = start.clone();
    played.request_direction(Direction::Down);
    while played.is_running() {
        played.tick();
    }
    assert!(played.ticks() > 0);
    assert_ne!(played.board(), start.board());

    let rebuilt = Session::with_seed(&config, 99);
    assert!(rebuilt.is_running());
    assert_eq!(rebuilt.board(), start.board());
    assert_eq!(rebuilt.food(), start.food());
    assert_eq!(rebuilt.snake(), start.snake());
    assert_eq!(rebuilt.input(), start.input());
    assert_eq!(
        rebuilt.snake().iter().copied().collect::<Vec<_>>(),
        vec![Position::new(5, 10), Position::new(4, 10), Position::new(3, 10)]
    );
    assert_eq!(rebuilt.ticks(), 0);
}
