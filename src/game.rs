//! A playing session on an accepted field

use crate::agent::{Direction, Player};
use crate::grid::Cell;
use crate::Maze;

/// How the session ended
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Outcome {
    /// Player stepped off the field
    OutOfBounds,
    /// Player stepped into a hole
    FellInHole,
    /// Player reached the hat
    FoundHat,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::OutOfBounds => "Player out of bounds",
            Outcome::FellInHole => "Sorry, you fell down a hole.",
            Outcome::FoundHat => "Congrats, you found your hat.",
        }
    }

    pub fn is_win(self) -> bool {
        self == Outcome::FoundHat
    }
}

/// Field and the player walking on it
pub struct Game {
    maze: Maze,
    player: Player,
}

impl Game {
    /// Start a session with the player on the start cell
    pub fn new(maze: Maze) -> Self {
        let player = Player::at(maze.start());
        Self { maze, player }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    fn cell_under_player(&self) -> Option<Cell> {
        self.maze
            .grid()
            .get_checked(self.player.x(), self.player.y())
    }

    pub fn player_out_of_bounds(&self) -> bool {
        self.cell_under_player().is_none()
    }

    pub fn player_in_hole(&self) -> bool {
        self.cell_under_player() == Some(Cell::Hole)
    }

    pub fn player_in_hat(&self) -> bool {
        self.cell_under_player() == Some(Cell::Goal)
    }

    /// Terminal condition at the current position, if any.
    ///
    /// Checked in order: out of bounds, hole, hat.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.player_out_of_bounds() {
            Some(Outcome::OutOfBounds)
        } else if self.player_in_hole() {
            Some(Outcome::FellInHole)
        } else if self.player_in_hat() {
            Some(Outcome::FoundHat)
        } else {
            None
        }
    }

    fn mark_player_cell(&mut self, cell: Cell) {
        let grid = self.maze.grid_mut();
        if let Some(point) = grid.checked_point(self.player.x(), self.player.y()) {
            grid.set_point(point, cell);
        }
    }

    /// Leave a path mark on the current cell
    pub fn update_field_path(&mut self) {
        self.mark_player_cell(Cell::Path);
    }

    /// Put the player mark on the current cell
    pub fn update_field_player(&mut self) {
        self.mark_player_cell(Cell::PlayerMark);
    }

    /// Move one step and report whether the session is over
    pub fn step(&mut self, direction: Direction) -> Option<Outcome> {
        self.update_field_path();
        self.player.step(direction);
        let outcome = self.outcome();
        if outcome.is_none() {
            self.update_field_player();
        }
        outcome
    }
}
