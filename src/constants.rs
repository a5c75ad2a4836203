//! This module contains all the constants used in the game.

use std::time::Duration;

/// The time between frames of the terminal loop.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 30.0) as u64);

/// Seconds an actor has to make its move before the turn is forfeited.
pub const TURN_TIME: u32 = 5;

/// The length of one countdown tick, in milliseconds.
pub const TICK_MILLIS: u64 = 1000;

/// Directory scanned for level files when none are given on the command line.
pub const LEVELS_DIR: &str = "levels";

/// Extension of level files.
pub const LEVEL_EXTENSION: &str = "csv";

/// Separator between tile codes on a level row.
pub const TILE_SEPARATOR: char = ',';

/// The kinds of tile a level file can contain, keyed by their integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum_macros::FromRepr, strum_macros::AsRefStr)]
#[repr(u8)]
#[strum(serialize_all = "snake_case")]
pub enum Tile {
    /// Walkable floor.
    #[default]
    Empty = 0,
    Wall = 1,
    /// Reaching one wins the level for the Runner.
    Exit = 2,
    /// The Runner's starting position; walkable.
    RunnerStart = 3,
    /// The Chaser's starting position; walkable.
    ChaserStart = 4,
}

impl Tile {
    /// Every tile, in code order.
    pub const ALL: [Tile; 5] = [Tile::Empty, Tile::Wall, Tile::Exit, Tile::RunnerStart, Tile::ChaserStart];

    /// Returns the integer code used for this tile in level files.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        let expected_nanos = (1_000_000_000.0 / 30.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_tile_codes() {
        for (code, tile) in Tile::ALL.iter().enumerate() {
            assert_eq!(tile.code() as usize, code);
            assert_eq!(Tile::from_repr(code as u8), Some(*tile));
        }
        assert_eq!(Tile::from_repr(5), None);
    }

    #[test]
    fn test_tile_names() {
        assert_eq!(Tile::RunnerStart.as_ref(), "runner_start");
        assert_eq!(Tile::Wall.as_ref(), "wall");
    }
}
