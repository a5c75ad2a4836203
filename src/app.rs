use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

use crate::constants::LOOP_TIME;
use crate::error::GameResult;
use crate::formatter;
use crate::game::events::{MoveResult, TickResult};
use crate::game::snapshot::{Changes, Presenter};
use crate::game::Game;
use crate::input::{Bindings, GameCommand};

/// Reads stdin line by line on a background thread.
///
/// The thread ends when stdin closes; the receiver then reports a disconnect.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "Failed to read input");
                    break;
                }
            }
        }
    });
    rx
}

/// Drives a [`Game`]: feeds it input and countdown ticks, and shows its state.
pub struct App<P: Presenter> {
    pub game: Game,
    presenter: P,
    input: Receiver<String>,
    bindings: Bindings,
    input_closed: bool,
    tick_duration: Duration,
    /// Time accumulated toward the next countdown tick.
    accumulator: Duration,
    last_frame: Instant,
}

impl<P: Presenter> App<P> {
    /// Wraps a started game and draws its first frame.
    pub fn new(game: Game, presenter: P, input: Receiver<String>, tick_duration: Duration) -> GameResult<Self> {
        let mut app = Self {
            game,
            presenter,
            input,
            bindings: Bindings::default(),
            input_closed: false,
            tick_duration,
            accumulator: Duration::ZERO,
            last_frame: Instant::now(),
        };
        app.game.take_changes();
        app.present(Changes::all())?;
        Ok(app)
    }

    /// Executes a single frame: handles pending input, counts down the clock, redraws if
    /// anything changed, then sleeps out the rest of the frame.
    ///
    /// # Returns
    ///
    /// `true` if the game should keep running, `false` once it is over or exit was requested.
    pub fn run(&mut self) -> GameResult<bool> {
        let start = Instant::now();
        let dt = start.saturating_duration_since(self.last_frame);
        self.last_frame = start;

        if !self.process_input()? {
            info!("Exit requested");
            return Ok(false);
        }

        self.advance_clock(dt)?;

        let changes = self.game.take_changes();
        self.present(changes)?;

        if self.game.is_over() {
            return Ok(false);
        }

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            spin_sleep::sleep(LOOP_TIME - elapsed);
        }

        Ok(true)
    }

    /// Applies every line received since the last frame. Returns `false` on an exit command.
    fn process_input(&mut self) -> GameResult<bool> {
        loop {
            let line = match self.input.try_recv() {
                Ok(line) => line,
                Err(TryRecvError::Empty) => return Ok(true),
                Err(TryRecvError::Disconnected) => {
                    if !self.input_closed {
                        warn!("Input closed; the clock keeps running");
                        self.input_closed = true;
                    }
                    return Ok(true);
                }
            };

            for command in self.bindings.parse_line(&line) {
                if !self.handle_command(command)? {
                    return Ok(false);
                }
            }
        }
    }

    /// Returns `false` if the command asks to exit.
    pub fn handle_command(&mut self, command: GameCommand) -> GameResult<bool> {
        match command {
            GameCommand::Exit => Ok(false),
            GameCommand::Move(kind, direction) => {
                let result = self.game.attempt_move(kind, direction)?;
                trace!(actor = %kind, ?result, "Move handled");
                if result.accepted() {
                    // The next actor starts with a whole tick
                    self.accumulator = Duration::ZERO;
                }
                if let MoveResult::Won { outcome, .. } = result {
                    debug!(winner = %outcome.winner, reason = %outcome.reason, "Level won by move");
                }
                Ok(true)
            }
        }
    }

    fn advance_clock(&mut self, dt: Duration) -> GameResult<()> {
        self.accumulator += dt;
        while self.accumulator >= self.tick_duration {
            self.accumulator -= self.tick_duration;
            formatter::increment_tick();
            if let TickResult::TimedOut(outcome) = self.game.tick()? {
                debug!(winner = %outcome.winner, "Level won on time");
                // Time spent before the next level existed is not charged to it
                self.accumulator = Duration::ZERO;
                break;
            }
        }
        Ok(())
    }

    fn present(&mut self, changes: Changes) -> GameResult<()> {
        if changes.is_empty() {
            return Ok(());
        }
        self.presenter.present(&self.game.snapshot(), changes)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
