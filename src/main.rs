use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use runaway::app::{spawn_stdin_reader, App};
use runaway::config::load_config;
use runaway::game::Game;
use runaway::logging::setup_logging;
use runaway::map::loader::{discover_levels, load_levels};
use runaway::render::TerminalPresenter;

/// Loads the levels, then runs the game loop until the queue is exhausted or exit is requested.
///
/// Level files may be given as arguments; otherwise every level file in the configured
/// directory is played in name order.
fn main() -> anyhow::Result<()> {
    setup_logging()?;
    let config = load_config().context("failed to load configuration")?;

    let mut paths = env::args().skip(1).map(PathBuf::from).collect::<Vec<_>>();
    if paths.is_empty() {
        paths = discover_levels(&config.levels_dir)
            .with_context(|| format!("failed to find levels in {}", config.levels_dir.display()))?;
    }
    let levels = load_levels(&paths).context("failed to load levels")?;

    let mut game = Game::new(levels, config.game());
    game.start()?;
    info!(turn_time = config.turn_time, tick_millis = config.tick_millis, "Game started");

    let presenter = TerminalPresenter::new(io::stdout(), true);
    let mut app = App::new(game, presenter, spawn_stdin_reader(), config.tick_duration())?;
    while app.run()? {}

    let scores = app.game.scores();
    info!(runner = scores.runner, chaser = scores.chaser, "Exiting");
    Ok(())
}
