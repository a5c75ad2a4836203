//! Positions of everything on the live level that is not an actor.

use std::collections::HashSet;

use glam::IVec2;
use smallvec::SmallVec;

use crate::game::actor::ActorKind;
use crate::map::Level;

/// A past position of an actor, left behind when it moved away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrailMarker {
    pub position: IVec2,
    pub left_by: ActorKind,
}

/// Walls, exits and trail markers of the level being played.
///
/// Walls and exits are copied from the [`Level`] when it is loaded and never change;
/// trail markers accumulate as actors move and are dropped with the rest of the level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRegistry {
    size: IVec2,
    walls: HashSet<IVec2>,
    exits: SmallVec<[IVec2; 4]>,
    trail: Vec<TrailMarker>,
}

impl EntityRegistry {
    pub fn from_level(level: &Level) -> Self {
        Self {
            size: level.size,
            walls: level.walls.clone(),
            exits: level.exits.clone(),
            trail: Vec::new(),
        }
    }

    /// Grid size as (columns, rows).
    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn walls(&self) -> &HashSet<IVec2> {
        &self.walls
    }

    pub fn exits(&self) -> &[IVec2] {
        &self.exits
    }

    pub fn trail(&self) -> &[TrailMarker] {
        &self.trail
    }

    /// Whether a move onto `position` must be rejected: a wall cell, or off the grid.
    pub fn blocks(&self, position: IVec2) -> bool {
        self.walls.contains(&position) || !(position.cmpge(IVec2::ZERO).all() && position.cmplt(self.size).all())
    }

    pub fn is_exit(&self, position: IVec2) -> bool {
        self.exits.contains(&position)
    }

    pub fn drop_marker(&mut self, left_by: ActorKind, position: IVec2) {
        self.trail.push(TrailMarker { position, left_by });
    }

    /// Whether `left_by` has left a marker on `position`.
    pub fn has_marker(&self, left_by: ActorKind, position: IVec2) -> bool {
        self.trail
            .iter()
            .any(|marker| marker.left_by == left_by && marker.position == position)
    }

    /// Forgets the whole level.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> EntityRegistry {
        EntityRegistry::from_level(&Level::parse("test", "1,1,1\n3,0,2\n1,1,1").unwrap())
    }

    #[test]
    fn test_blocks_walls_and_edges() {
        let registry = registry();
        assert!(registry.blocks(IVec2::new(0, 0)));
        assert!(registry.blocks(IVec2::new(-1, 1)));
        assert!(registry.blocks(IVec2::new(3, 1)));
        assert!(!registry.blocks(IVec2::new(1, 1)));
        assert!(!registry.blocks(IVec2::new(2, 1)));
    }

    #[test]
    fn test_markers_are_tagged() {
        let mut registry = registry();
        registry.drop_marker(ActorKind::Runner, IVec2::new(0, 1));

        assert!(registry.has_marker(ActorKind::Runner, IVec2::new(0, 1)));
        assert!(!registry.has_marker(ActorKind::Chaser, IVec2::new(0, 1)));
        assert_eq!(registry.trail().len(), 1);
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut registry = registry();
        registry.drop_marker(ActorKind::Chaser, IVec2::new(1, 1));
        registry.clear();

        assert!(registry.trail().is_empty());
        assert!(registry.walls().is_empty());
        assert!(registry.exits().is_empty());
        assert_eq!(registry.size(), IVec2::ZERO);
    }
}
