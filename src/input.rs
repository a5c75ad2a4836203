//! Mapping raw input tokens to game commands.

use std::collections::HashMap;

use tracing::debug;

use crate::game::actor::ActorKind;
use crate::map::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// A move request, tagged with the actor whose keys were pressed.
    Move(ActorKind, Direction),
    Exit,
}

#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<&'static str, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Runner: arrow keys, by name, as raw escape sequences, and on ijkl
        for (keys, direction) in [
            (["up", "\x1b[A", "i"], Direction::Up),
            (["down", "\x1b[B", "k"], Direction::Down),
            (["left", "\x1b[D", "j"], Direction::Left),
            (["right", "\x1b[C", "l"], Direction::Right),
        ] {
            for key in keys {
                key_bindings.insert(key, GameCommand::Move(ActorKind::Runner, direction));
            }
        }

        // Chaser: wasd
        key_bindings.insert("w", GameCommand::Move(ActorKind::Chaser, Direction::Up));
        key_bindings.insert("s", GameCommand::Move(ActorKind::Chaser, Direction::Down));
        key_bindings.insert("a", GameCommand::Move(ActorKind::Chaser, Direction::Left));
        key_bindings.insert("d", GameCommand::Move(ActorKind::Chaser, Direction::Right));

        key_bindings.insert("q", GameCommand::Exit);
        key_bindings.insert("quit", GameCommand::Exit);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn get(&self, key: &str) -> Option<GameCommand> {
        self.key_bindings.get(key).copied()
    }

    /// Translates one line of terminal input into commands.
    ///
    /// Whitespace-separated keys are looked up case-insensitively; a run of arrow escape
    /// sequences with nothing between them is split into one command per arrow.
    /// Unknown keys are skipped.
    pub fn parse_line(&self, line: &str) -> Vec<GameCommand> {
        line.split_whitespace()
            .flat_map(|word| {
                if word.starts_with('\x1b') {
                    word.split_inclusive(['A', 'B', 'C', 'D'])
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                } else {
                    vec![word.to_lowercase()]
                }
            })
            .filter_map(|key| {
                let command = self.get(&key);
                if command.is_none() {
                    debug!(key = %key.escape_debug(), "Unbound key");
                }
                command
            })
            .collect()
    }
}
