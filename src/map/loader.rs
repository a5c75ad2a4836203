//! Level file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::constants::LEVEL_EXTENSION;
use crate::error::{GameResult, LevelError};
use crate::map::level::Level;

/// Lists the level files in `dir`, sorted by file name.
///
/// # Errors
///
/// Returns [`LevelError::NoLevels`] if the directory holds no level files, or an IO error
/// if it cannot be read.
pub fn discover_levels(dir: &Path) -> GameResult<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == LEVEL_EXTENSION))
        .collect::<Vec<_>>();

    if paths.is_empty() {
        return Err(LevelError::NoLevels(dir.to_path_buf()).into());
    }

    paths.sort();
    debug!(dir = %dir.display(), count = paths.len(), "Discovered level files");
    Ok(paths)
}

/// Reads and parses a single level file. The level is named after the file stem.
pub fn load_level(path: &Path) -> GameResult<Level> {
    let raw = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let level = Level::parse(name, &raw).map_err(|source| LevelError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    if !level.exit_reachable() {
        warn!(level = %level.name, "No exit is reachable from the Runner start");
    }

    Ok(level)
}

/// Loads every level up front, so a malformed file is reported before any level is played.
pub fn load_levels(paths: &[PathBuf]) -> GameResult<Vec<Level>> {
    let levels = paths.iter().map(|path| load_level(path)).collect::<GameResult<Vec<_>>>()?;
    info!(count = levels.len(), "Levels loaded");
    Ok(levels)
}
