//! Ordered level queue and cross-level scoring.

use std::collections::VecDeque;

use tracing::info;

use crate::game::actor::ActorKind;
use crate::map::Level;

/// Levels won by each side. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub runner: u32,
    pub chaser: u32,
}

impl Scores {
    pub fn of(&self, kind: ActorKind) -> u32 {
        match kind {
            ActorKind::Runner => self.runner,
            ActorKind::Chaser => self.chaser,
        }
    }

    fn credit(&mut self, kind: ActorKind) {
        match kind {
            ActorKind::Runner => self.runner += 1,
            ActorKind::Chaser => self.chaser += 1,
        }
    }
}

/// Owns the not-yet-played levels and the score counters for the whole run.
#[derive(Debug, Clone, Default)]
pub struct LevelSequencer {
    queue: VecDeque<Level>,
    scores: Scores,
    played: usize,
}

impl LevelSequencer {
    pub fn new(levels: impl IntoIterator<Item = Level>) -> Self {
        Self {
            queue: levels.into_iter().collect(),
            scores: Scores::default(),
            played: 0,
        }
    }

    /// Credits the winner of the level that just ended, if any, and hands out the next level.
    ///
    /// Returns `None` once the queue is exhausted.
    pub fn advance(&mut self, winner: Option<ActorKind>) -> Option<Level> {
        if let Some(kind) = winner {
            self.scores.credit(kind);
            info!(winner = %kind, runner = self.scores.runner, chaser = self.scores.chaser, "Score updated");
        }

        let next = self.queue.pop_front()?;
        self.played += 1;
        Some(next)
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Levels started so far, including the current one.
    pub fn played(&self) -> usize {
        self.played
    }

    /// Levels still waiting in the queue.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}
