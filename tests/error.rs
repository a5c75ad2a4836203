use std::io;
use std::path::PathBuf;

use glam::IVec2;
use runaway::error::{ConfigError, GameError, LevelError, ParseError};
use runaway::game::actor::ActorKind;
use speculoos::prelude::*;

#[test]
fn test_parse_error_display() {
    let error = ParseError::InvalidTile {
        row: 2,
        col: 5,
        token: "x".to_string(),
    };
    assert_that(&error.to_string()).contains("row 2, column 5");

    let error = ParseError::DuplicateStart {
        kind: ActorKind::Chaser,
        first: IVec2::new(0, 0),
        second: IVec2::new(1, 0),
    };
    assert_that(&error.to_string()).starts_with("Chaser start is defined twice");
}

#[test]
fn test_game_error_from_level_error() {
    let error: GameError = LevelError::MissingActor {
        level: "maze".to_string(),
        kind: ActorKind::Runner,
    }
    .into();

    assert_that(&matches!(error, GameError::Level(LevelError::MissingActor { .. }))).is_true();
    assert_that(&error.to_string()).contains("has no Runner start");
}

#[test]
fn test_malformed_keeps_source() {
    let error = LevelError::Malformed {
        path: PathBuf::from("levels/bad.csv"),
        source: ParseError::Empty,
    };

    let source = std::error::Error::source(&error).map(ToString::to_string);
    assert_that(&source).is_equal_to(Some("Level grid is empty".to_string()));
    assert_that(&error.to_string()).contains("levels/bad.csv");
}

#[test]
fn test_game_error_from_io_and_config() {
    let error: GameError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
    assert_that(&matches!(error, GameError::Io(_))).is_true();

    let error: GameError = ConfigError::Invalid {
        key: "RUNAWAY_TURN_TIME",
        reason: "must be positive".to_string(),
    }
    .into();
    assert_that(&error.to_string()).contains("RUNAWAY_TURN_TIME");
}
