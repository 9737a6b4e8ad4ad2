//! Find your hat in a field full of holes
//!
//! A random field is scattered with holes, the player starts at one cell and
//! the hat lies at another. Generated fields are checked with a
//! deterministic walk so that the hat can always be reached, and the start
//! and the hat are kept at least half a field apart on both axes.
//!
//! # Examples
//! ## Generate a playable field
//! ```
//! use find_your_hat::{is_solvable, MazeGenerator};
//!
//! let mut gen = MazeGenerator::new(Some(13));
//! let maze = gen.generate_solvable(10, 10, 0, 1000).unwrap();
//! assert!(is_solvable(&maze).unwrap());
//! println!("{}", maze);
//! ```
//!
//! ## Parse a field from text
//! ```
//! use find_your_hat::{is_solvable, Maze, Point};
//!
//! let text = "
//! PO░
//! O░░
//! ░░^";
//! let maze = Maze::parse(text.trim()).unwrap();
//! assert_eq!(maze.goal(), Point::new(2, 2));
//! assert!(!is_solvable(&maze).unwrap());
//! ```

use std::fmt;

pub mod agent;
pub mod error;
pub mod game;
pub mod grid;
pub mod maze_generator;
pub mod verifier;

pub use agent::{Direction, Player};
pub use error::{MazeError, Result};
pub use game::{Game, Outcome};
pub use grid::{Cell, Grid};
pub use maze_generator::{MazeConfig, MazeGenerator};
pub use verifier::{is_solvable, shortest_path};

/// Location in the field; `x` is the column, `y` the row, origin top-left
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Separation along each axis, `(|dx|, |dy|)`
    pub fn axis_distance(&self, other: Point) -> (usize, usize) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }
}

/// Field with its start, hat and holes
#[derive(Clone, Debug)]
pub struct Maze {
    /// Symbolic layout
    grid: Grid<Cell>,
    /// Where the player starts
    start: Point,
    /// Location of the hat
    goal: Point,
    /// Holes, in placement order
    obstacles: Vec<Point>,
}

impl Maze {
    pub(crate) fn new(grid: Grid<Cell>, start: Point, goal: Point, obstacles: Vec<Point>) -> Self {
        Self {
            grid,
            start,
            goal,
            obstacles,
        }
    }

    /// Parse a field from its text rendering
    ///
    /// - `text`: rows separated by newlines, using the symbols of [Cell].
    ///
    /// Exactly one start `P` and one hat `^` are required. Holes are
    /// collected row by row.
    ///
    /// # Examples
    /// ```
    /// use find_your_hat::Maze;
    /// let maze = Maze::parse("P░O\n░░^").unwrap();
    /// assert_eq!(maze.obstacles().len(), 1);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(MazeError::EmptyMaze);
        }

        let mut start = None;
        let mut goal = None;
        let mut obstacles = Vec::new();

        let mut rows = Vec::new();
        for (y, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for (x, symbol) in line.chars().enumerate() {
                let cell =
                    Cell::from_symbol(symbol).ok_or(MazeError::UnexpectedSymbol { symbol, x, y })?;
                match cell {
                    Cell::PlayerMark => Self::mark_once(&mut start, Point::new(x, y), "Start")?,
                    Cell::Goal => Self::mark_once(&mut goal, Point::new(x, y), "Hat")?,
                    Cell::Hole => obstacles.push(Point::new(x, y)),
                    Cell::Empty | Cell::Path => (),
                }
                row.push(cell);
            }
            rows.push(row);
        }

        let grid = Grid::from_rows(rows)?;
        Ok(Self::new(
            grid,
            start.ok_or(MazeError::MissingMarker("Start"))?,
            goal.ok_or(MazeError::MissingMarker("Hat"))?,
            obstacles,
        ))
    }

    fn mark_once(slot: &mut Option<Point>, point: Point, name: &'static str) -> Result<()> {
        if slot.replace(point).is_some() {
            return Err(MazeError::DuplicateMarker(name));
        }
        Ok(())
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid<Cell> {
        &mut self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cell, Maze, MazeError, Point};

    #[test]
    fn parse_maze_input() {
        let text = "
░░O░░
░P░O░
░░░░O
O░░^░"
            .trim();
        let maze = Maze::parse(text).unwrap();

        assert_eq!(maze.start(), Point::new(1, 1));
        assert_eq!(maze.goal(), Point::new(3, 3));
        assert_eq!(
            maze.obstacles(),
            &[
                Point::new(2, 0),
                Point::new(3, 1),
                Point::new(4, 2),
                Point::new(0, 3)
            ]
        );
        assert_eq!((maze.height(), maze.width()), (4, 5));
        assert_eq!(maze.grid().get(3, 1), Cell::Hole);
        assert_eq!(maze.to_string(), text);
    }

    #[test]
    fn walked_path_is_kept() {
        let maze = Maze::parse("P**\n░░^").unwrap();
        assert_eq!(maze.grid().get(2, 0), Cell::Path);
        assert!(maze.obstacles().is_empty());
    }

    #[test]
    fn unknown_symbol_is_reported_with_position() {
        let res = Maze::parse("P░\n░X\n░^");
        assert_eq!(
            res.unwrap_err(),
            MazeError::UnexpectedSymbol {
                symbol: 'X',
                x: 1,
                y: 1
            }
        );
    }

    #[test]
    fn markers_are_required_once() {
        assert_eq!(
            Maze::parse("P░\n░░").unwrap_err(),
            MazeError::MissingMarker("Hat")
        );
        assert_eq!(
            Maze::parse("P^\n░^").unwrap_err(),
            MazeError::DuplicateMarker("Hat")
        );
        assert_eq!(
            Maze::parse("PP\n░^").unwrap_err(),
            MazeError::DuplicateMarker("Start")
        );
        assert_eq!(Maze::parse("  \n").unwrap_err(), MazeError::EmptyMaze);
    }

    #[test]
    fn ragged_text_is_rejected() {
        assert!(matches!(
            Maze::parse("P░░\n░^"),
            Err(MazeError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn axis_distance_is_symmetric() {
        let a = Point::new(1, 7);
        let b = Point::new(4, 2);
        assert_eq!(a.axis_distance(b), (3, 5));
        assert_eq!(b.axis_distance(a), (3, 5));
    }
}
