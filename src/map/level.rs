//! Level definitions built from parsed grids.

use std::collections::HashSet;

use glam::IVec2;
use pathfinding::prelude::bfs;
use smallvec::SmallVec;

use crate::constants::Tile;
use crate::error::ParseError;
use crate::game::actor::ActorKind;
use crate::map::direction::Direction;
use crate::map::parser::{LevelParser, ParsedLevel};

/// One playable grid configuration.
///
/// A `Level` is immutable once built; the live, mutable counterpart used during play is
/// the [`EntityRegistry`](crate::game::registry::EntityRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// A display name, usually the file stem.
    pub name: String,
    /// Grid size as (columns, rows).
    pub size: IVec2,
    pub walls: HashSet<IVec2>,
    pub exits: SmallVec<[IVec2; 4]>,
    pub runner_start: Option<IVec2>,
    pub chaser_start: Option<IVec2>,
}

impl Level {
    /// Builds a level from already parsed grid data.
    pub fn new(name: impl Into<String>, parsed: ParsedLevel) -> Self {
        Self {
            name: name.into(),
            size: parsed.size(),
            walls: parsed.positions_of(Tile::Wall).collect(),
            exits: parsed.positions_of(Tile::Exit).collect(),
            runner_start: parsed.runner_start,
            chaser_start: parsed.chaser_start,
        }
    }

    /// Parses a raw grid and builds a level from it.
    pub fn parse(name: impl Into<String>, raw: &str) -> Result<Self, ParseError> {
        Ok(Self::new(name, LevelParser::parse_grid(raw)?))
    }

    /// Returns the start position for the given actor, if the level defines one.
    pub fn start_of(&self, kind: ActorKind) -> Option<IVec2> {
        match kind {
            ActorKind::Runner => self.runner_start,
            ActorKind::Chaser => self.chaser_start,
        }
    }

    pub fn in_bounds(&self, position: IVec2) -> bool {
        position.cmpge(IVec2::ZERO).all() && position.cmplt(self.size).all()
    }

    /// Whether an actor may stand on `position`.
    pub fn is_open(&self, position: IVec2) -> bool {
        self.in_bounds(position) && !self.walls.contains(&position)
    }

    /// Whether any exit can be walked to from the Runner's start.
    ///
    /// Levels without a Runner start or without exits are trivially unsolvable.
    pub fn exit_reachable(&self) -> bool {
        let Some(start) = self.runner_start else {
            return false;
        };

        bfs(
            &start,
            |&position| {
                Direction::DIRECTIONS
                    .into_iter()
                    .map(move |dir| position + dir.as_ivec2())
                    .filter(move |&next| self.is_open(next))
            },
            |position| self.exits.contains(position),
        )
        .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_grid() {
        let level = Level::parse("corridor", "1,1,1,1,1\n1,3,0,2,1\n1,1,1,1,1").unwrap();

        assert_eq!(level.name, "corridor");
        assert_eq!(level.size, IVec2::new(5, 3));
        assert_eq!(level.walls.len(), 12);
        assert_eq!(level.exits.as_slice(), &[IVec2::new(3, 1)]);
        assert_eq!(level.start_of(ActorKind::Runner), Some(IVec2::new(1, 1)));
        assert_eq!(level.start_of(ActorKind::Chaser), None);
    }

    #[test]
    fn test_bounds_and_walls() {
        let level = Level::parse("tiny", "3,1\n0,2").unwrap();

        assert!(level.is_open(IVec2::new(0, 0)));
        assert!(!level.is_open(IVec2::new(1, 0)));
        assert!(!level.is_open(IVec2::new(-1, 0)));
        assert!(!level.is_open(IVec2::new(0, 2)));
        assert!(level.is_open(IVec2::new(1, 1)));
    }

    #[test]
    fn test_exit_reachable() {
        let open = Level::parse("open", "3,0,2").unwrap();
        assert!(open.exit_reachable());

        let blocked = Level::parse("blocked", "3,1,2").unwrap();
        assert!(!blocked.exit_reachable());

        let no_exit = Level::parse("no exit", "3,0,0").unwrap();
        assert!(!no_exit.exit_reachable());
    }
}
