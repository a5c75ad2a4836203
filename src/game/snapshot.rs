//! The view of the game handed to presentation adapters.

use bitflags::bitflags;
use glam::IVec2;

use crate::error::GameResult;
use crate::game::actor::{Actor, ActorKind};
use crate::game::events::{LevelOutcome, Stage};
use crate::game::registry::TrailMarker;
use crate::game::sequencer::Scores;

bitflags! {
    /// What changed since an adapter last took the changes.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        const ACTORS = 1 << 0;
        const TRAIL = 1 << 1;
        const SCORES = 1 << 2;
        const TURN = 1 << 3;
        const TIMER = 1 << 4;
        /// A level ended or started; walls and exits must be redrawn.
        const LEVEL = 1 << 5;
    }
}

/// Everything an adapter needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub stage: Stage,
    /// Name of the live level, `None` between levels.
    pub level_name: Option<String>,
    /// 1-based number of the live level; 0 before the first one.
    pub level_number: usize,
    pub levels_remaining: usize,
    /// Grid size as (columns, rows).
    pub size: IVec2,
    /// Wall cells in row-major order.
    pub walls: Vec<IVec2>,
    pub exits: Vec<IVec2>,
    pub trail: Vec<TrailMarker>,
    pub runner: Option<Actor>,
    pub chaser: Option<Actor>,
    pub scores: Scores,
    pub last_outcome: Option<LevelOutcome>,
}

impl Snapshot {
    /// The actor holding the turn, if any.
    pub fn active(&self) -> Option<&Actor> {
        match self.stage.active()? {
            ActorKind::Runner => self.runner.as_ref(),
            ActorKind::Chaser => self.chaser.as_ref(),
        }
    }

    /// Seconds left for the actor holding the turn.
    pub fn remaining_time(&self) -> Option<u32> {
        self.active().map(|actor| actor.timer)
    }

    pub fn game_over(&self) -> bool {
        self.stage == Stage::GameOver
    }
}

/// A display collaborator. The game never calls into one directly; the driving loop
/// hands it a fresh [`Snapshot`] after each event that changed something.
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot, changes: Changes) -> GameResult<()>;
}
