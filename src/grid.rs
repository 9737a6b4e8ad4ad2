//! Rectangular cell storage shared by the symbolic and numeric fields

use std::fmt;

use itertools::Itertools;
use rand::Rng;

use crate::error::{MazeError, Result};
use crate::Point;

/// Upper bound on random samples when looking for an empty cell
pub const SAMPLING_CAP: usize = 10_000;

/// Symbol in the playable field
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    /// Open ground, not yet walked on
    Empty,
    /// Ground the player has already walked on
    Path,
    /// Current player position; also the start marker
    PlayerMark,
    /// Obstacle, the player falls in and loses
    Hole,
    /// The hat, the player wins when reaching it
    Goal,
}

impl Cell {
    const S_EMPTY: char = '░';
    const S_PATH: char = '*';
    const S_PLAYER: char = 'P';
    const S_HOLE: char = 'O';
    const S_GOAL: char = '^';

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => Self::S_EMPTY,
            Cell::Path => Self::S_PATH,
            Cell::PlayerMark => Self::S_PLAYER,
            Cell::Hole => Self::S_HOLE,
            Cell::Goal => Self::S_GOAL,
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Self::S_EMPTY => Some(Cell::Empty),
            Self::S_PATH => Some(Cell::Path),
            Self::S_PLAYER => Some(Cell::PlayerMark),
            Self::S_HOLE => Some(Cell::Hole),
            Self::S_GOAL => Some(Cell::Goal),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Row-major matrix indexed `[y][x]`
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
    width: usize,
}

impl<T: Copy> Grid<T> {
    /// Grid of `height` rows and `width` columns, every cell set to `fill`
    pub fn new(height: usize, width: usize, fill: T) -> Self {
        Self {
            rows: (0..height).map(|_| vec![fill; width]).collect(),
            width,
        }
    }

    /// Build from rows; all rows must share the length of the first one.
    pub(crate) fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(MazeError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        Ok(Self { rows, width })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Value at column `x`, row `y`.
    ///
    /// Coordinates must be inside the grid; use [Self::get_checked] for
    /// positions that may have left it.
    pub fn get(&self, x: usize, y: usize) -> T {
        self.rows[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        self.rows[y][x] = value;
    }

    pub fn get_point(&self, point: Point) -> T {
        self.get(point.x, point.y)
    }

    pub fn set_point(&mut self, point: Point, value: T) {
        self.set(point.x, point.y, value)
    }

    /// Whether a signed position lies inside `[0, width) x [0, height)`
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height()
    }

    /// Signed position as a [Point], `None` when outside the grid
    pub fn checked_point(&self, x: isize, y: isize) -> Option<Point> {
        self.contains(x, y).then(|| Point::new(x as usize, y as usize))
    }

    /// Value at a signed position, `None` when outside the grid
    pub fn get_checked(&self, x: isize, y: isize) -> Option<T> {
        self.checked_point(x, y).map(|point| self.get_point(point))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// All cells with their coordinates, row by row
    pub fn cells(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, value)| (Point::new(x, y), *value))
        })
    }
}

impl Grid<Cell> {
    /// Sample random coordinates until an [Cell::Empty] one comes up.
    ///
    /// Gives up with [MazeError::ExhaustedGrid] after [SAMPLING_CAP] draws.
    pub fn random_free_cell<R: Rng>(&self, random: &mut R) -> Result<Point> {
        if self.height() == 0 || self.width() == 0 {
            return Err(MazeError::ExhaustedGrid { attempts: 0 });
        }
        for _ in 0..SAMPLING_CAP {
            let point = Point::new(
                random.gen_range(0..self.width()),
                random.gen_range(0..self.height()),
            );
            if self.get_point(point) == Cell::Empty {
                return Ok(point);
            }
        }
        Err(MazeError::ExhaustedGrid {
            attempts: SAMPLING_CAP,
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&(_, c)| c == cell).count()
    }
}

impl fmt::Display for Grid<Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.rows.iter().map(|row| row.iter().join("")).join("\n");
        write!(f, "{}", text)
    }
}
