//! Plain-text rendering of game snapshots.

use std::fmt::Write as _;
use std::io::Write;

use glam::IVec2;

use crate::error::GameResult;
use crate::game::actor::{Actor, ActorKind};
use crate::game::snapshot::{Changes, Presenter, Snapshot};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// The character drawn for a cell, highest priority first: actors, exits, trails, walls.
fn cell_symbol(snapshot: &Snapshot, position: IVec2) -> char {
    let on = |actor: &Option<Actor>| actor.as_ref().is_some_and(|a| a.position == position);

    if on(&snapshot.runner) {
        'R'
    } else if on(&snapshot.chaser) {
        'C'
    } else if snapshot.exits.contains(&position) {
        'E'
    } else if let Some(marker) = snapshot.trail.iter().rev().find(|m| m.position == position) {
        match marker.left_by {
            ActorKind::Runner => 'o',
            ActorKind::Chaser => 'x',
        }
    } else if snapshot.walls.contains(&position) {
        '#'
    } else {
        '.'
    }
}

/// Draws a full frame: scores, level line, grid, and the turn status.
pub fn draw(snapshot: &Snapshot) -> String {
    let mut frame = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(frame, "Runner: {} Chaser: {}", snapshot.scores.runner, snapshot.scores.chaser);

    if let Some(outcome) = snapshot.last_outcome {
        let _ = writeln!(frame, "Last level: {} {}", outcome.winner, outcome.reason);
    }

    if snapshot.game_over() {
        frame.push_str("\nTHE END. THANKS FOR PLAYING\n");
        return frame;
    }

    if let Some(name) = &snapshot.level_name {
        let _ = writeln!(
            frame,
            "Level {} ({name}), {} to go",
            snapshot.level_number, snapshot.levels_remaining
        );
    }

    for y in 0..snapshot.size.y {
        let row = (0..snapshot.size.x)
            .map(|x| cell_symbol(snapshot, IVec2::new(x, y)))
            .collect::<String>();
        frame.push_str(&row);
        frame.push('\n');
    }

    match snapshot.active() {
        Some(actor) => {
            let _ = writeln!(frame, "{}'s turn. Remaining time: {} s", actor.kind, actor.timer);
        }
        None => frame.push_str("Waiting for the next level\n"),
    }

    frame
}

/// Redraws the whole terminal screen whenever something changed.
pub struct TerminalPresenter<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> TerminalPresenter<W> {
    /// `clear` controls whether the screen is wiped before each frame.
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, snapshot: &Snapshot, changes: Changes) -> GameResult<()> {
        if changes.is_empty() {
            return Ok(());
        }
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(draw(snapshot).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
