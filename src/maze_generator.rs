//! Random field generation

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::error::{MazeError, Result};
use crate::grid::{Cell, Grid};
use crate::verifier::is_solvable;
use crate::{Maze, Point};

/// Parameters for a generated field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub height: usize,
    pub width: usize,
    /// Percentage of cells turned into holes, sensible range 0-50
    pub density: usize,
    /// Candidates tried before giving up
    pub max_attempts: usize,
    /// Random seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl MazeConfig {
    /// Generate a solvable field with a generator seeded from `seed`
    pub fn generate(&self) -> Result<Maze> {
        MazeGenerator::new(self.seed).generate_solvable(
            self.height,
            self.width,
            self.density,
            self.max_attempts,
        )
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            height: 15,
            width: 15,
            density: 30,
            max_attempts: 100,
            seed: None,
        }
    }
}

/// Why a candidate field was thrown away
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rejection {
    TooClose,
    Unsolvable,
}

/// Field generator with its own random source
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Number of holes for a field: `floor(height * width * density / 100)`
    ///
    /// `None` if the product does not fit in a `usize`.
    pub fn obstacle_count(height: usize, width: usize, density: usize) -> Option<usize> {
        Some(height.checked_mul(width)?.checked_mul(density)? / 100)
    }

    /// Generate a random field, without any solvability guarantee
    ///
    /// The start goes on a random cell, then the holes one by one, then the
    /// hat, each on a cell that is still empty.
    pub fn generate(&mut self, height: usize, width: usize, density: usize) -> Result<Maze> {
        let obstacle_count = Self::obstacle_count(height, width, density)
            .filter(|_| height > 0 && width > 0)
            .ok_or(MazeError::InvalidDimensions { height, width })?;
        let mut grid = Grid::new(height, width, Cell::Empty);

        let start = grid.random_free_cell(&mut self.random)?;
        grid.set_point(start, Cell::PlayerMark);

        let obstacles = (0..obstacle_count)
            .map(|_| -> Result<Point> {
                let hole = grid.random_free_cell(&mut self.random)?;
                grid.set_point(hole, Cell::Hole);
                Ok(hole)
            })
            .collect::<Result<Vec<_>>>()?;

        let goal = grid.random_free_cell(&mut self.random)?;
        grid.set_point(goal, Cell::Goal);

        Ok(Maze::new(grid, start, goal, obstacles))
    }

    /// Generate a field that can be solved, with the start and the hat at
    /// least half the field apart on both axes.
    ///
    /// Tries `max_attempts` candidates and fails with
    /// [MazeError::NoSolvableMazeFound] if none qualifies. Other errors are
    /// returned as soon as they occur.
    pub fn generate_solvable(
        &mut self,
        height: usize,
        width: usize,
        density: usize,
        max_attempts: usize,
    ) -> Result<Maze> {
        for attempt in 1..=max_attempts {
            let maze = self.generate(height, width, density)?;
            match Self::check(&maze)? {
                None => {
                    info!(
                        "Accepted {}x{} field with {} holes after {} attempts",
                        height,
                        width,
                        maze.obstacles().len(),
                        attempt
                    );
                    return Ok(maze);
                }
                Some(reason) => debug!("Attempt {} rejected: {:?}", attempt, reason),
            }
        }
        warn!(
            "No solvable {}x{} field at density {} in {} attempts",
            height, width, density, max_attempts
        );
        Err(MazeError::NoSolvableMazeFound {
            attempts: max_attempts,
        })
    }

    /// Whether start and hat are far enough apart: `|dx| >= width / 2` and
    /// `|dy| >= height / 2`, halves taken exactly.
    pub fn far_enough(maze: &Maze) -> bool {
        let (dx, dy) = maze.start().axis_distance(maze.goal());
        2 * dx >= maze.width() && 2 * dy >= maze.height()
    }

    fn check(maze: &Maze) -> Result<Option<Rejection>> {
        if !Self::far_enough(maze) {
            return Ok(Some(Rejection::TooClose));
        }
        if !is_solvable(maze)? {
            return Ok(Some(Rejection::Unsolvable));
        }
        Ok(None)
    }
}
