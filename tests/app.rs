use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use runaway::app::App;
use runaway::error::GameResult;
use runaway::game::events::Stage;
use runaway::game::sequencer::Scores;
use runaway::game::snapshot::{Changes, Presenter, Snapshot};
use speculoos::prelude::*;

mod common;

use common::{started_game, EXIT_NEXT_DOOR, OPEN_FIELD};

/// Keeps every frame it is asked to show.
#[derive(Default)]
struct Recorder {
    frames: Vec<(Snapshot, Changes)>,
}

impl Presenter for Recorder {
    fn present(&mut self, snapshot: &Snapshot, changes: Changes) -> GameResult<()> {
        self.frames.push((snapshot.clone(), changes));
        Ok(())
    }
}

const NEVER: Duration = Duration::from_secs(3600);

#[test]
fn first_frame_is_drawn_on_creation() {
    let (_tx, rx) = mpsc::channel();
    let app = App::new(started_game(&[("a", OPEN_FIELD)]), Recorder::default(), rx, NEVER).unwrap();

    let frames = &app.presenter().frames;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].0.stage, Stage::RunnerTurn);
    assert_eq!(frames[0].1, Changes::all());
}

#[test]
fn input_lines_drive_moves() {
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(
        started_game(&[("first", EXIT_NEXT_DOOR), ("second", OPEN_FIELD)]),
        Recorder::default(),
        rx,
        NEVER,
    )
    .unwrap();

    tx.send("w".to_string()).unwrap();
    tx.send("right".to_string()).unwrap();
    assert_that(&app.run().unwrap()).is_true();

    assert_eq!(app.game.scores(), Scores { runner: 1, chaser: 0 });
    assert_eq!(app.game.level_name(), Some("second"));
    assert_eq!(app.presenter().frames.len(), 2);
}

#[test]
fn quit_stops_the_loop() {
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(started_game(&[("a", OPEN_FIELD)]), Recorder::default(), rx, NEVER).unwrap();

    tx.send("q".to_string()).unwrap();
    assert_that(&app.run().unwrap()).is_false();
    assert_eq!(app.game.stage(), Stage::RunnerTurn);
}

#[test]
fn clock_runs_out_without_input() {
    let (tx, rx) = mpsc::channel::<String>();
    drop(tx);
    let mut app = App::new(
        started_game(&[("a", OPEN_FIELD)]),
        Recorder::default(),
        rx,
        Duration::from_millis(10),
    )
    .unwrap();

    thread::sleep(Duration::from_millis(120));
    assert_that(&app.run().unwrap()).is_false();

    assert_that(&app.game.is_over()).is_true();
    assert_eq!(app.game.scores(), Scores { runner: 0, chaser: 1 });
    let (last, _) = app.presenter().frames.last().unwrap();
    assert_that(&last.game_over()).is_true();
}

#[test]
fn stalled_frame_loses_at_most_one_level() {
    let (_tx, rx) = mpsc::channel::<String>();
    let mut app = App::new(
        started_game(&[("a", OPEN_FIELD), ("b", OPEN_FIELD), ("c", OPEN_FIELD)]),
        Recorder::default(),
        rx,
        Duration::from_millis(10),
    )
    .unwrap();

    thread::sleep(Duration::from_millis(200));
    assert_that(&app.run().unwrap()).is_true();

    assert_eq!(app.game.scores(), Scores { runner: 0, chaser: 1 });
    assert_eq!(app.game.level_name(), Some("b"));
    assert_eq!(app.game.stage(), Stage::RunnerTurn);
}
