//! Solvability check on a walled numeric copy of the field
//!
//! The field is copied into a grid of [Mark]s with one extra ring of
//! [Mark::Blocked] around it, so the walker never needs bounds checks. A
//! single cursor then walks the copy, marking cells as it goes, until it
//! stands on the hat or finds itself walled in.

use std::collections::VecDeque;

use log::trace;

use crate::agent::{Direction, Player};
use crate::error::{MazeError, Result};
use crate::grid::{Cell, Grid};
use crate::{Maze, Point};

/// State of a cell in the numeric copy
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[repr(u8)]
pub enum Mark {
    Unvisited = 0,
    Visited = 1,
    /// Hole, border or dead end
    Blocked = 2,
}

impl Mark {
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Field coordinate to numeric-grid coordinate
pub fn to_numeric(point: Point) -> Point {
    Point::new(point.x + 1, point.y + 1)
}

/// Numeric-grid coordinate back to field coordinate.
///
/// Border coordinates have no counterpart in the field.
pub fn from_numeric(point: Point) -> Option<Point> {
    Some(Point::new(point.x.checked_sub(1)?, point.y.checked_sub(1)?))
}

/// Bordered numeric copy of a maze, owned by the verifier
#[derive(Clone, Debug)]
pub struct NumericField {
    grid: Grid<Mark>,
    start: Point,
    goal: Point,
}

impl NumericField {
    /// Holes become [Mark::Blocked], every other cell [Mark::Unvisited],
    /// and the whole field is wrapped in a one cell wide blocked border.
    pub fn from_maze(maze: &Maze) -> Self {
        let mut grid = Grid::new(maze.height() + 2, maze.width() + 2, Mark::Blocked);
        for (point, cell) in maze.grid().cells() {
            let mark = match cell {
                Cell::Hole => Mark::Blocked,
                _ => Mark::Unvisited,
            };
            grid.set_point(to_numeric(point), mark);
        }
        Self {
            grid,
            start: to_numeric(maze.start()),
            goal: to_numeric(maze.goal()),
        }
    }

    pub fn grid(&self) -> &Grid<Mark> {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Walk steps allowed before the walk is considered stuck
    pub fn step_budget(&self) -> usize {
        4 * self.grid.height() * self.grid.width()
    }

    fn look(&self, bot: &Player, direction: Direction) -> Mark {
        let (x, y) = bot.neighbour(direction);
        self.grid.get_checked(x, y).unwrap_or(Mark::Blocked)
    }

    /// Run the cursor from the start until it reaches the hat (`true`) or
    /// is walled in (`false`).
    ///
    /// Each step sums the four neighbours of the cursor:
    /// - 8: every neighbour is blocked, the hat cannot be reached.
    /// - 7: a dead end entered from a visited cell; block it.
    /// - 6 with equal up and right neighbours: block it, otherwise the
    ///   cursor oscillates between two visited cells.
    /// - anything else: mark the cell visited.
    ///
    /// The cursor then moves to the first unvisited neighbour in the order
    /// up, right, left, down, falling back to the first visited one.
    pub fn walk(&mut self) -> Result<bool> {
        self.walk_within(self.step_budget())
    }

    /// [Self::walk] giving up with [MazeError::VerifierDidNotTerminate]
    /// after `budget` steps
    fn walk_within(&mut self, budget: usize) -> Result<bool> {
        let mut bot = Player::at(self.start);

        for step in 0..budget {
            let here = bot
                .point()
                .ok_or(MazeError::VerifierDidNotTerminate { steps: step })?;
            if here == self.goal {
                trace!("Hat reached after {} steps", step);
                return Ok(true);
            }

            let around = Direction::PRIORITY.map(|direction| self.look(&bot, direction));
            let [up, right, _, _] = around;
            let sum: u8 = around.iter().map(|mark| mark.value()).sum();

            match sum {
                8 => {
                    trace!("Walled in at {:?} after {} steps", here, step);
                    return Ok(false);
                }
                7 => self.grid.set_point(here, Mark::Blocked),
                6 if up == right => self.grid.set_point(here, Mark::Blocked),
                _ => self.grid.set_point(here, Mark::Visited),
            }

            let next = [Mark::Unvisited, Mark::Visited].into_iter().find_map(|wanted| {
                Direction::PRIORITY
                    .into_iter()
                    .zip(around)
                    .find_map(|(direction, mark)| (mark == wanted).then_some(direction))
            });
            match next {
                Some(direction) => bot.step(direction),
                None => return Ok(false),
            }
        }

        Err(MazeError::VerifierDidNotTerminate { steps: budget })
    }
}

/// Whether the hat can be reached from the start.
///
/// Works on its own copy; the maze itself is left untouched.
pub fn is_solvable(maze: &Maze) -> Result<bool> {
    NumericField::from_maze(maze).walk()
}

/// Shortest route from start to hat avoiding holes, both ends included.
///
/// Breadth-first search over the four orthogonal neighbours; `None` when the
/// hat cannot be reached.
pub fn shortest_path(maze: &Maze) -> Option<Vec<Point>> {
    let grid = maze.grid();
    let mut prev: Grid<Option<Point>> = Grid::new(grid.height(), grid.width(), None);
    let mut seen = Grid::new(grid.height(), grid.width(), false);

    let mut queue = VecDeque::from([maze.start()]);
    seen.set_point(maze.start(), true);

    while let Some(point) = queue.pop_front() {
        if point == maze.goal() {
            let mut path = vec![point];
            let mut current = point;
            while let Some(before) = prev.get_point(current) {
                path.push(before);
                current = before;
            }
            path.reverse();
            return Some(path);
        }

        let cursor = Player::at(point);
        for direction in Direction::PRIORITY {
            let (x, y) = cursor.neighbour(direction);
            if grid.get_checked(x, y).is_some_and(|cell| cell != Cell::Hole) {
                let next = Point::new(x as usize, y as usize);
                if !seen.get_point(next) {
                    seen.set_point(next, true);
                    prev.set_point(next, Some(point));
                    queue.push_back(next);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(text: &str) -> Maze {
        Maze::parse(text.trim()).unwrap()
    }

    #[test]
    fn open_field_is_solvable() {
        let maze = maze(
            "
P░░
░░░
░░^",
        );
        assert!(is_solvable(&maze).unwrap());
    }

    #[test]
    fn boxed_in_start_is_not_solvable() {
        let maze = maze(
            "
PO░
O░░
░░^",
        );
        assert!(!is_solvable(&maze).unwrap());
        assert_eq!(shortest_path(&maze), None);
    }

    #[test]
    fn numeric_copy_has_blocked_border() {
        let maze = maze(
            "
PO░
░░^",
        );
        let field = NumericField::from_maze(&maze);
        let grid = field.grid();

        assert_eq!((grid.height(), grid.width()), (4, 5));
        for (point, mark) in grid.cells() {
            let on_border = point.x == 0 || point.y == 0 || point.x == 4 || point.y == 3;
            if on_border {
                assert_eq!(mark, Mark::Blocked, "border at {:?}", point);
            }
        }
        assert_eq!(grid.get(2, 1), Mark::Blocked);
        assert_eq!(grid.get(1, 1), Mark::Unvisited);
        assert_eq!(grid.get(3, 2), Mark::Unvisited);
        assert_eq!(field.start(), Point::new(1, 1));
        assert_eq!(field.goal(), Point::new(3, 2));
        assert_eq!(field.step_budget(), 80);
    }

    #[test]
    fn translation_round_trip() {
        for point in [Point::new(0, 0), Point::new(3, 9), Point::new(14, 2)] {
            assert_eq!(from_numeric(to_numeric(point)), Some(point));
        }
        assert_eq!(from_numeric(Point::new(0, 3)), None);
    }

    #[test]
    fn winding_corridor_is_followed() {
        let maze = maze(
            "
P░░
OO░
^░░",
        );
        assert!(is_solvable(&maze).unwrap());

        let path = shortest_path(&maze).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(0, 2)));
    }

    #[test]
    fn exhausted_budget_is_an_error() {
        let maze = maze(
            "
P░░
OO░
^░░",
        );
        let mut field = NumericField::from_maze(&maze);
        assert_eq!(
            field.walk_within(1),
            Err(MazeError::VerifierDidNotTerminate { steps: 1 })
        );
        let mut field = NumericField::from_maze(&maze);
        assert_eq!(field.walk_within(7), Ok(true));
    }

    #[test]
    fn dead_end_is_blocked_and_left() {
        let maze = maze(
            "
░O░
P░O
O░^",
        );
        let mut field = NumericField::from_maze(&maze);
        assert!(field.walk().unwrap());
        // The cell above the start leads nowhere
        assert_eq!(field.grid().get(1, 1), Mark::Blocked);
        assert_eq!(field.grid().get(1, 2), Mark::Visited);
    }

    #[test]
    fn verdict_is_repeatable_and_maze_untouched() {
        let maze = maze(
            "
░O░░
P░O░
O░░^",
        );
        let before = maze.grid().clone();
        let first = is_solvable(&maze).unwrap();
        let second = is_solvable(&maze).unwrap();
        assert_eq!(first, second);
        assert_eq!(maze.grid(), &before);
    }

    #[test]
    fn shortest_path_steps_are_adjacent() {
        let maze = maze(
            "
P░░░
░OO░
░O^░",
        );
        let path = shortest_path(&maze).unwrap();
        assert_eq!(path.len(), 7);
        for pair in path.windows(2) {
            let (dx, dy) = pair[0].axis_distance(pair[1]);
            assert_eq!(dx + dy, 1);
            assert_ne!(maze.grid().get_point(pair[1]), Cell::Hole);
        }
    }
}
