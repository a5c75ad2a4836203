//! Centralized error types for the game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use std::io;
use std::path::PathBuf;

use glam::IVec2;

use crate::game::actor::ActorKind;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur during game operation.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Level error: {0}")]
    Level(#[from] LevelError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for level grid parsing.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A cell that is not an integer, or an integer that is not a tile code.
    #[error("Invalid tile {token:?} at row {row}, column {col}: expected an integer tile code from 0 to 4")]
    InvalidTile { row: usize, col: usize, token: String },
    #[error("Row {row} has {found} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("{kind} start is defined twice, at {first} and {second}")]
    DuplicateStart { kind: ActorKind, first: IVec2, second: IVec2 },
    #[error("Level grid is empty")]
    Empty,
}

/// Errors related to loading and playing levels.
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    #[error("Malformed level file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("No level files found in {0}")]
    NoLevels(PathBuf),

    /// A level without a start for one of the actors was asked to play that actor's turn.
    #[error("Level {level:?} is misconfigured: it has no {kind} start")]
    MissingActor { level: String, kind: ActorKind },
}

/// Errors raised while loading the configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
