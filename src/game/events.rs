//! Results reported by the turn controller.

use glam::IVec2;
use strum_macros::{AsRefStr, Display};

use crate::game::actor::ActorKind;

/// The high-level stage of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum Stage {
    /// The Runner holds the turn.
    RunnerTurn,
    /// The Chaser holds the turn.
    ChaserTurn,
    /// Between levels (or before the first one): nobody holds the turn.
    LevelTransition,
    /// The level queue is exhausted.
    GameOver,
}

impl Stage {
    /// The actor holding the turn in this stage, if any.
    pub fn active(self) -> Option<ActorKind> {
        match self {
            Stage::RunnerTurn => Some(ActorKind::Runner),
            Stage::ChaserTurn => Some(ActorKind::Chaser),
            Stage::LevelTransition | Stage::GameOver => None,
        }
    }
}

/// Why a level ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum WinReason {
    /// The Chaser moved onto the Runner.
    #[strum(to_string = "caught the Runner")]
    Caught,
    /// The Chaser moved onto a cell the Runner had left.
    #[strum(to_string = "picked up the Runner's trail")]
    CrossedRunnerTrail,
    /// The Runner moved onto an exit.
    #[strum(to_string = "reached an exit")]
    ReachedExit,
    /// The Runner moved onto a cell the Chaser had left.
    #[strum(to_string = "slipped along the Chaser's trail")]
    CrossedChaserTrail,
    /// The opponent ran out of time.
    #[strum(to_string = "won on time")]
    Timeout,
}

/// The result of a finished level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOutcome {
    pub winner: ActorKind,
    pub reason: WinReason,
}

/// The result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The requesting actor does not hold the turn; nothing changed.
    Ignored,
    /// The target cell is a wall or off the grid; nothing changed and the turn is kept.
    Blocked { at: IVec2 },
    /// The move was made and the turn passed to the opponent.
    Moved { from: IVec2, to: IVec2 },
    /// The move was made and ended the level.
    Won { from: IVec2, to: IVec2, outcome: LevelOutcome },
}

impl MoveResult {
    /// Whether the actor actually changed position.
    pub fn accepted(&self) -> bool {
        matches!(self, MoveResult::Moved { .. } | MoveResult::Won { .. })
    }
}

/// The result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// No turn is in progress.
    Idle,
    /// The active actor lost a second.
    Counted { active: ActorKind, remaining: u32 },
    /// The active actor ran out of time and lost the level.
    TimedOut(LevelOutcome),
}
