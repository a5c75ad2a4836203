//! This module contains the main game logic and state.
//!
//! [`Game`] is the turn controller: it owns the live level, both actors and the level
//! sequence, and is only ever mutated through [`Game::start`], [`Game::attempt_move`],
//! [`Game::tick`] and [`Game::advance`].

use glam::IVec2;
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult, LevelError};
use crate::map::direction::Direction;
use crate::map::Level;

use self::actor::{Actor, ActorKind};
use self::events::{LevelOutcome, MoveResult, Stage, TickResult, WinReason};
use self::registry::EntityRegistry;
use self::sequencer::{LevelSequencer, Scores};
use self::snapshot::{Changes, Snapshot};

pub mod actor;
pub mod events;
pub mod registry;
pub mod sequencer;
pub mod snapshot;

/// The complete state of one game run.
///
/// At most one actor holds the turn at any time; neither does while a level is being
/// torn down or loaded, nor once the game is over.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    registry: EntityRegistry,
    runner: Option<Actor>,
    chaser: Option<Actor>,
    sequencer: LevelSequencer,
    level_name: Option<String>,
    level_finished: bool,
    game_over: bool,
    /// Outcome of the level that just ended, waiting to be credited by `advance`.
    pending: Option<LevelOutcome>,
    last_outcome: Option<LevelOutcome>,
    changes: Changes,
}

impl Game {
    /// Creates a game over the given level queue. No level is live until [`Game::start`].
    pub fn new(levels: impl IntoIterator<Item = Level>, config: GameConfig) -> Self {
        Self {
            config,
            registry: EntityRegistry::default(),
            runner: None,
            chaser: None,
            sequencer: LevelSequencer::new(levels),
            level_name: None,
            level_finished: true,
            game_over: false,
            pending: None,
            last_outcome: None,
            changes: Changes::empty(),
        }
    }

    /// Loads the first level and gives the Runner the turn.
    ///
    /// # Errors
    ///
    /// Fails if the game was already started, or if the first level has no Runner start.
    pub fn start(&mut self) -> GameResult<Stage> {
        if self.game_over || self.sequencer.played() > 0 {
            return Err(GameError::InvalidState("game already started".to_string()));
        }
        self.advance()
    }

    pub fn stage(&self) -> Stage {
        let runner_turn = self.runner.as_ref().is_some_and(|actor| actor.has_turn);
        let chaser_turn = self.chaser.as_ref().is_some_and(|actor| actor.has_turn);
        debug_assert!(!(runner_turn && chaser_turn), "both actors hold the turn");

        if self.game_over {
            Stage::GameOver
        } else if runner_turn {
            Stage::RunnerTurn
        } else if chaser_turn {
            Stage::ChaserTurn
        } else {
            Stage::LevelTransition
        }
    }

    /// Moves `kind` one tile in `direction`, if it holds the turn.
    ///
    /// Requests from an actor that does not hold the turn are ignored. A move into a wall or
    /// off the grid is rejected and the turn is kept. An accepted move leaves a trail marker
    /// on the cell that was left, then either ends the level or passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::MissingActor`] if the live level has no start for an actor this
    /// move has to involve.
    pub fn attempt_move(&mut self, kind: ActorKind, direction: Direction) -> GameResult<MoveResult> {
        if self.stage().active().is_none() {
            return Ok(MoveResult::Ignored);
        }

        let actor = self.actor(kind)?;
        if !actor.has_turn {
            trace!(actor = %kind, "Ignoring move out of turn");
            return Ok(MoveResult::Ignored);
        }

        let from = actor.position;
        let to = actor.candidate(direction);
        if self.registry.blocks(to) {
            debug!(actor = %kind, direction = direction.as_ref(), %to, "Move blocked");
            return Ok(MoveResult::Blocked { at: to });
        }

        // Decided before anything moves; a move that does not end the level must be able to
        // pass the turn, so a missing opponent fails it untouched.
        let outcome = self.check_win(kind, to);
        if outcome.is_none() {
            self.actor(kind.opponent())?;
        }

        let turn_time = self.config.turn_time;
        let actor = self.actor_mut(kind)?;
        actor.position = to;
        actor.has_turn = false;
        actor.timer = turn_time;
        self.registry.drop_marker(kind, from);
        self.changes |= Changes::ACTORS | Changes::TRAIL | Changes::TURN | Changes::TIMER;
        debug!(actor = %kind, %from, %to, "Moved");

        if let Some(outcome) = outcome {
            self.finish_level(outcome);
            self.advance()?;
            return Ok(MoveResult::Won { from, to, outcome });
        }

        self.hand_turn_to(kind.opponent())?;
        Ok(MoveResult::Moved { from, to })
    }

    /// Counts one second off the active actor's clock. Running out loses the level.
    ///
    /// Outside of a turn this does nothing, so a clock that keeps ticking across a level
    /// change cannot affect the next level.
    pub fn tick(&mut self) -> GameResult<TickResult> {
        let Some(active) = self.stage().active() else {
            return Ok(TickResult::Idle);
        };

        let actor = self.actor_mut(active)?;
        actor.timer = actor.timer.saturating_sub(1);
        let remaining = actor.timer;
        self.changes |= Changes::TIMER;
        trace!(actor = %active, remaining, "Tick");

        if remaining > 0 {
            return Ok(TickResult::Counted { active, remaining });
        }

        let winner = active.opponent();
        self.actor(winner)?;
        let outcome = LevelOutcome {
            winner,
            reason: WinReason::Timeout,
        };
        self.finish_level(outcome);
        self.advance()?;
        Ok(TickResult::TimedOut(outcome))
    }

    /// Leaves the level transition: credits the winner of the level that just ended,
    /// discards it, and loads the next level with the Runner to move, or ends the game.
    ///
    /// # Errors
    ///
    /// Fails when called while a turn is in progress or after the game is over, and with
    /// [`LevelError::MissingActor`] if the next level has no Runner start.
    pub fn advance(&mut self) -> GameResult<Stage> {
        let stage = self.stage();
        if stage != Stage::LevelTransition {
            return Err(GameError::InvalidState(format!("cannot advance levels during {stage}")));
        }

        let winner = self.pending.take().map(|outcome| outcome.winner);
        if winner.is_some() {
            self.changes |= Changes::SCORES;
        }

        self.discard_level();
        self.changes |= Changes::LEVEL | Changes::ACTORS | Changes::TRAIL | Changes::TURN;

        match self.sequencer.advance(winner) {
            Some(level) => {
                self.load_level(level);
                self.hand_turn_to(ActorKind::Runner)?;
            }
            None => {
                self.game_over = true;
                let scores = self.sequencer.scores();
                info!(runner = scores.runner, chaser = scores.chaser, "Game over");
            }
        }

        Ok(self.stage())
    }

    /// Builds a view of the current state for presentation.
    pub fn snapshot(&self) -> Snapshot {
        let mut walls = self.registry.walls().iter().copied().collect::<Vec<IVec2>>();
        walls.sort_by_key(|position| (position.y, position.x));

        Snapshot {
            stage: self.stage(),
            level_name: self.level_name.clone(),
            level_number: self.sequencer.played(),
            levels_remaining: self.sequencer.remaining(),
            size: self.registry.size(),
            walls,
            exits: self.registry.exits().to_vec(),
            trail: self.registry.trail().to_vec(),
            runner: self.runner.clone(),
            chaser: self.chaser.clone(),
            scores: self.sequencer.scores(),
            last_outcome: self.last_outcome,
        }
    }

    /// Returns and resets the set of changes since the last call.
    pub fn take_changes(&mut self) -> Changes {
        std::mem::take(&mut self.changes)
    }

    pub fn scores(&self) -> Scores {
        self.sequencer.scores()
    }

    pub fn runner(&self) -> Option<&Actor> {
        self.runner.as_ref()
    }

    pub fn chaser(&self) -> Option<&Actor> {
        self.chaser.as_ref()
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn level_name(&self) -> Option<&str> {
        self.level_name.as_deref()
    }

    pub fn level_finished(&self) -> bool {
        self.level_finished
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Win conditions for `kind` moving onto `to`. The first hit wins.
    fn check_win(&self, kind: ActorKind, to: IVec2) -> Option<LevelOutcome> {
        let reason = match kind {
            ActorKind::Chaser if self.runner.as_ref().is_some_and(|runner| runner.position == to) => WinReason::Caught,
            ActorKind::Chaser if self.registry.has_marker(ActorKind::Runner, to) => WinReason::CrossedRunnerTrail,
            ActorKind::Runner if self.registry.is_exit(to) => WinReason::ReachedExit,
            ActorKind::Runner if self.registry.has_marker(ActorKind::Chaser, to) => WinReason::CrossedChaserTrail,
            _ => return None,
        };

        Some(LevelOutcome { winner: kind, reason })
    }

    fn finish_level(&mut self, outcome: LevelOutcome) {
        for actor in [self.runner.as_mut(), self.chaser.as_mut()].into_iter().flatten() {
            actor.has_turn = false;
        }
        self.level_finished = true;
        self.pending = Some(outcome);
        self.last_outcome = Some(outcome);
        self.changes |= Changes::TURN;
        info!(
            level = self.level_name.as_deref().unwrap_or_default(),
            winner = %outcome.winner,
            reason = %outcome.reason,
            "Level finished"
        );
    }

    fn discard_level(&mut self) {
        self.registry.clear();
        self.runner = None;
        self.chaser = None;
        self.level_name = None;
    }

    fn load_level(&mut self, level: Level) {
        let turn_time = self.config.turn_time;
        self.registry = EntityRegistry::from_level(&level);
        self.runner = level
            .start_of(ActorKind::Runner)
            .map(|position| Actor::new(ActorKind::Runner, position, turn_time));
        self.chaser = level
            .start_of(ActorKind::Chaser)
            .map(|position| Actor::new(ActorKind::Chaser, position, turn_time));
        self.level_finished = false;
        info!(
            level = %level.name,
            number = self.sequencer.played(),
            remaining = self.sequencer.remaining(),
            "Level started"
        );
        self.level_name = Some(level.name);
    }

    /// Gives `kind` the turn with a full clock, taking it from the opponent.
    fn hand_turn_to(&mut self, kind: ActorKind) -> GameResult<()> {
        let turn_time = self.config.turn_time;
        self.actor(kind)?;

        if let Some(opponent) = self.slot_mut(kind.opponent()).as_mut() {
            opponent.has_turn = false;
        }
        let actor = self.actor_mut(kind)?;
        actor.has_turn = true;
        actor.timer = turn_time;
        self.changes |= Changes::TURN | Changes::TIMER;
        Ok(())
    }

    fn slot_mut(&mut self, kind: ActorKind) -> &mut Option<Actor> {
        match kind {
            ActorKind::Runner => &mut self.runner,
            ActorKind::Chaser => &mut self.chaser,
        }
    }

    fn actor(&self, kind: ActorKind) -> GameResult<&Actor> {
        let slot = match kind {
            ActorKind::Runner => &self.runner,
            ActorKind::Chaser => &self.chaser,
        };
        slot.as_ref().ok_or_else(|| missing_actor(&self.level_name, kind))
    }

    fn actor_mut(&mut self, kind: ActorKind) -> GameResult<&mut Actor> {
        let level_name = &self.level_name;
        let slot = match kind {
            ActorKind::Runner => &mut self.runner,
            ActorKind::Chaser => &mut self.chaser,
        };
        slot.as_mut().ok_or_else(|| missing_actor(level_name, kind))
    }
}

fn missing_actor(level_name: &Option<String>, kind: ActorKind) -> GameError {
    LevelError::MissingActor {
        level: level_name.clone().unwrap_or_default(),
        kind,
    }
    .into()
}
