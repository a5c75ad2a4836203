//! The two player-controlled actors.

use glam::IVec2;
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::map::direction::Direction;

/// Which side of the chase an actor plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum ActorKind {
    /// Heads for an exit.
    Runner,
    /// Hunts the Runner down.
    Chaser,
}

impl ActorKind {
    /// Returns the other side of the chase.
    pub const fn opponent(self) -> ActorKind {
        match self {
            ActorKind::Runner => ActorKind::Chaser,
            ActorKind::Chaser => ActorKind::Runner,
        }
    }
}

/// A live actor on the current level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub kind: ActorKind,
    pub position: IVec2,
    /// Seconds left in the current turn.
    pub timer: u32,
    pub has_turn: bool,
}

impl Actor {
    pub fn new(kind: ActorKind, position: IVec2, turn_time: u32) -> Self {
        Self {
            kind,
            position,
            timer: turn_time,
            has_turn: false,
        }
    }

    /// The cell one step away in `direction`.
    pub fn candidate(&self, direction: Direction) -> IVec2 {
        self.position + direction.as_ivec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_an_involution() {
        for kind in ActorKind::iter() {
            assert_ne!(kind.opponent(), kind);
            assert_eq!(kind.opponent().opponent(), kind);
        }
    }

    #[test]
    fn test_candidate_does_not_move() {
        let actor = Actor::new(ActorKind::Runner, IVec2::new(2, 2), 5);
        assert_eq!(actor.candidate(Direction::Up), IVec2::new(2, 1));
        assert_eq!(actor.position, IVec2::new(2, 2));
        assert!(!actor.has_turn);
        assert_eq!(actor.timer, 5);
    }
}
