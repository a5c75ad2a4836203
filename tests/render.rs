use pretty_assertions::assert_eq;
use runaway::game::actor::ActorKind;
use runaway::game::snapshot::{Changes, Presenter};
use runaway::map::direction::Direction;
use runaway::render::{draw, TerminalPresenter};
use speculoos::prelude::*;

mod common;

use common::{started_game, EXIT_NEXT_DOOR, OPEN_FIELD};

#[test]
fn test_draw_live_level() {
    let game = started_game(&[("first", EXIT_NEXT_DOOR), ("second", OPEN_FIELD)]);
    let frame = draw(&game.snapshot());

    let lines = frame.lines().collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "Runner: 0 Chaser: 0",
            "Level 1 (first), 1 to go",
            "REC",
            "Runner's turn. Remaining time: 5 s",
        ]
    );
}

#[test]
fn test_draw_trail_and_outcome() {
    let mut game = started_game(&[("first", EXIT_NEXT_DOOR), ("second", OPEN_FIELD)]);
    game.attempt_move(ActorKind::Runner, Direction::Right).unwrap();
    game.tick().unwrap();
    game.attempt_move(ActorKind::Runner, Direction::Down).unwrap();

    let frame = draw(&game.snapshot());
    assert_that(&frame).contains("Runner: 1 Chaser: 0");
    assert_that(&frame).contains("Last level: Runner reached an exit");
    assert_that(&frame).contains("o.C\nR..");
    assert_that(&frame).contains("Chaser's turn. Remaining time: 5 s");
}

#[test]
fn test_draw_game_over() {
    let mut game = started_game(&[("only", EXIT_NEXT_DOOR)]);
    game.attempt_move(ActorKind::Runner, Direction::Right).unwrap();

    let frame = draw(&game.snapshot());
    assert_that(&frame).contains("THE END.");
    assert_that(&frame).contains("THANKS FOR PLAYING");
    assert_that(&frame).contains("Runner: 1 Chaser: 0");
}

#[test]
fn test_terminal_presenter_skips_unchanged_frames() {
    let game = started_game(&[("a", OPEN_FIELD)]);
    let mut presenter = TerminalPresenter::new(Vec::new(), false);

    presenter.present(&game.snapshot(), Changes::empty()).unwrap();
    assert_that(&presenter.into_inner().is_empty()).is_true();
}

#[test]
fn test_terminal_presenter_clears_screen() {
    let game = started_game(&[("a", OPEN_FIELD)]);
    let mut presenter = TerminalPresenter::new(Vec::new(), true);

    presenter.present(&game.snapshot(), Changes::TIMER).unwrap();
    let output = String::from_utf8(presenter.into_inner()).unwrap();
    assert_that(&output.starts_with("\x1b[2J\x1b[H")).is_true();
    assert_that(&output).contains("Runner: 0 Chaser: 0");
}
