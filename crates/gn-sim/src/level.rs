//! ASCII level loading.
//!
//! # Format
//!
//! One text row per grid row, listed top to bottom:
//!
//! | Char | Cell                                  |
//! |------|---------------------------------------|
//! | `#`  | wall                                  |
//! | `.`  | dot                                   |
//! | `o`  | power item                            |
//! | `P`  | agent spawn (empty cell, exactly one) |
//! | `G`  | ghost spawn (empty cell)              |
//! | else | empty                                 |
//!
//! Rows are stored flipped so the bottom text row is `y = 0` and
//! [`Direction::Up`](gn_core::Direction::Up) is `y + 1`.

use gn_core::{CellCode, Position};
use gn_grid::Grid;

use crate::{SimError, SimResult};

const CLASSIC: &str = "\
###########
#....o...G#
#.###.###.#
#.........#
###.#.#.###
#P...#...G#
###########";

const MAZE: &str = "\
###############
#....#....#..G#
#.##.#.##.#.#.#
#o...#....#...#
#.#####.#####.#
#.....#.....#.#
###.#.###.#.#.#
#...#.....#...#
#.#.#####.#.###
#P..#....#..Go#
###############";

/// Names accepted by [`Level::builtin`].
pub const BUILTIN_LEVELS: [&str; 2] = ["classic", "maze"];

/// A parsed level: the starting grid plus spawn points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    name:         String,
    grid:         Grid,
    agent_spawn:  Position,
    ghost_spawns: Vec<Position>,
}

impl Level {
    /// Parse `text` (rows separated by newlines, top row first).
    ///
    /// Blank lines before the first and after the last row are ignored.
    pub fn parse(name: impl Into<String>, text: &str) -> SimResult<Self> {
        let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        let start = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(lines.len());
        let end = lines.iter().rposition(|l| !l.trim().is_empty()).map_or(start, |i| i + 1);
        Self::from_rows(name, &lines[start..end])
    }

    /// Build from rows listed top to bottom.
    pub fn from_rows(name: impl Into<String>, rows: &[&str]) -> SimResult<Self> {
        let first = rows.first().filter(|r| !r.is_empty()).ok_or(SimError::EmptyLevel)?;
        let expected = first.chars().count();
        let height = rows.len();

        let mut matrix = vec![vec![CellCode::EMPTY; height]; expected];
        let mut agent_spawn: Option<Position> = None;
        let mut ghost_spawns = Vec::new();

        for (row, text) in rows.iter().enumerate() {
            let got = text.chars().count();
            if got != expected {
                return Err(SimError::RaggedLevel { row, expected, got });
            }
            let y = height - 1 - row;
            for (x, ch) in text.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                matrix[x][y] = match ch {
                    '#' => CellCode::WALL,
                    '.' => CellCode::DOT,
                    'o' => CellCode::POWER,
                    'P' => {
                        if let Some(first) = agent_spawn {
                            return Err(SimError::DuplicateAgentSpawn { first, second: pos });
                        }
                        agent_spawn = Some(pos);
                        CellCode::EMPTY
                    }
                    'G' => {
                        ghost_spawns.push(pos);
                        CellCode::EMPTY
                    }
                    _ => CellCode::EMPTY,
                };
            }
        }

        let agent_spawn = agent_spawn.ok_or(SimError::MissingAgentSpawn)?;
        // Spawns were collected top row first; keep them in (y, x) order.
        ghost_spawns.sort_by_key(|p| (p.y, p.x));

        Ok(Self {
            name: name.into(),
            grid: Grid::from_matrix(&matrix)?,
            agent_spawn,
            ghost_spawns,
        })
    }

    /// The small 11x7 level with two ghosts.
    pub fn classic() -> SimResult<Self> {
        Self::parse("classic", CLASSIC)
    }

    /// The larger 15x11 maze with two ghosts and two power items.
    pub fn maze() -> SimResult<Self> {
        Self::parse("maze", MAZE)
    }

    /// Look up a built-in level by name.
    pub fn builtin(name: &str) -> SimResult<Self> {
        match name {
            "classic" => Self::classic(),
            "maze"    => Self::maze(),
            other     => Err(SimError::UnknownLevel(other.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent_spawn(&self) -> Position {
        self.agent_spawn
    }

    pub fn ghost_spawns(&self) -> &[Position] {
        &self.ghost_spawns
    }

    /// Dots plus power items.
    pub fn consumables(&self) -> usize {
        self.grid.count(CellCode::DOT) + self.grid.count(CellCode::POWER)
    }
}
