#![allow(dead_code)]

use runaway::config::GameConfig;
use runaway::game::Game;
use runaway::map::Level;

pub fn level(name: &str, raw: &str) -> Level {
    Level::parse(name, raw).expect("test level should parse")
}

/// Builds and starts a game over the given `(name, grid)` pairs with the default turn time.
pub fn started_game(levels: &[(&str, &str)]) -> Game {
    let mut game = Game::new(levels.iter().map(|(name, raw)| level(name, raw)), GameConfig::default());
    game.start().expect("game should start");
    game
}

/// Runner at (0, 0), Chaser at (2, 0), two open rows.
pub const OPEN_FIELD: &str = "3,0,4\n0,0,0";

/// Runner at (0, 0) next to an exit at (1, 0); Chaser at (2, 0).
pub const EXIT_NEXT_DOOR: &str = "3,2,4";

/// A Runner sealed in by walls, with no Chaser.
pub const WALLED_IN: &str = "1,1,1\n1,3,1\n1,1,1";
