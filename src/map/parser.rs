//! Level parsing functionality for converting raw tile-code grids into structured data.

use glam::IVec2;

use crate::constants::{Tile, TILE_SEPARATOR};
use crate::error::ParseError;
use crate::game::actor::ActorKind;

/// Represents the parsed data from a raw level grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLevel {
    /// The parsed tile layout, indexed as `tiles[row][col]`.
    pub tiles: Vec<Vec<Tile>>,
    /// The Runner's starting position, if the grid has one.
    pub runner_start: Option<IVec2>,
    /// The Chaser's starting position, if the grid has one.
    pub chaser_start: Option<IVec2>,
}

impl ParsedLevel {
    /// Grid size as (columns, rows).
    pub fn size(&self) -> IVec2 {
        let rows = self.tiles.len();
        let cols = self.tiles.first().map_or(0, Vec::len);
        IVec2::new(cols as i32, rows as i32)
    }

    /// Positions of every tile of the given kind, in row-major order.
    pub fn positions_of(&self, wanted: Tile) -> impl Iterator<Item = IVec2> + '_ {
        self.tiles.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |(_, tile)| **tile == wanted)
                .map(move |(x, _)| IVec2::new(x as i32, y as i32))
        })
    }
}

/// Parser for converting comma-separated tile codes into structured level data.
pub struct LevelParser;

impl LevelParser {
    /// Parses a single cell token into a tile.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer, or an integer
    /// that is not a known tile code, is an [`ParseError::InvalidTile`].
    pub fn parse_code(token: &str, row: usize, col: usize) -> Result<Tile, ParseError> {
        let invalid = || ParseError::InvalidTile {
            row,
            col,
            token: token.to_string(),
        };

        let code: i64 = token.trim().parse().map_err(|_| invalid())?;
        u8::try_from(code).ok().and_then(Tile::from_repr).ok_or_else(invalid)
    }

    /// Parses a whole level grid.
    ///
    /// Each non-blank line is one row; cells are separated by commas. The grid must be
    /// rectangular, and each actor may have at most one start. A missing start is not an
    /// error here: it is reported when the level tries to play that actor.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered, scanning row by row.
    pub fn parse_grid(raw: &str) -> Result<ParsedLevel, ParseError> {
        let mut tiles: Vec<Vec<Tile>> = Vec::new();
        let mut runner_start: Option<IVec2> = None;
        let mut chaser_start: Option<IVec2> = None;

        for line in raw.lines().filter(|line| !line.trim().is_empty()) {
            let y = tiles.len();
            let row = line
                .trim()
                .split(TILE_SEPARATOR)
                .enumerate()
                .map(|(x, token)| Self::parse_code(token, y, x))
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = tiles.first() {
                if first.len() != row.len() {
                    return Err(ParseError::RaggedRow {
                        row: y,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }

            for (x, tile) in row.iter().enumerate() {
                let (slot, kind) = match tile {
                    Tile::RunnerStart => (&mut runner_start, ActorKind::Runner),
                    Tile::ChaserStart => (&mut chaser_start, ActorKind::Chaser),
                    _ => continue,
                };
                let position = IVec2::new(x as i32, y as i32);
                if let Some(first) = *slot {
                    return Err(ParseError::DuplicateStart {
                        kind,
                        first,
                        second: position,
                    });
                }
                *slot = Some(position);
            }

            tiles.push(row);
        }

        if tiles.is_empty() {
            return Err(ParseError::Empty);
        }

        Ok(ParsedLevel {
            tiles,
            runner_start,
            chaser_start,
        })
    }
}
