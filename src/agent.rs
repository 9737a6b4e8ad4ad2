//! Movable position shared by the verifier walk and the human player

use crate::Point;

/// One of the four orthogonal moves
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Exploration order used by the solvability walk
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Left,
        Direction::Down,
    ];

    /// Offset `(dx, dy)` of a single step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Position of a traversal agent.
///
/// Coordinates are signed so that a player can step off the field; bounds,
/// holes and the goal are for the caller to check.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Player {
    x: isize,
    y: isize,
}

impl Player {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn at(point: Point) -> Self {
        Self::new(point.x as isize, point.y as isize)
    }

    pub fn x(&self) -> isize {
        self.x
    }

    pub fn y(&self) -> isize {
        self.y
    }

    /// Current position, `None` if it is off the field to the top or left
    pub fn point(&self) -> Option<Point> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        Some(Point::new(x, y))
    }

    pub fn up(&mut self) {
        self.y -= 1;
    }

    pub fn down(&mut self) {
        self.y += 1;
    }

    pub fn left(&mut self) {
        self.x -= 1;
    }

    pub fn right(&mut self) {
        self.x += 1;
    }

    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up(),
            Direction::Down => self.down(),
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// Position one step away, without moving
    pub fn neighbour(&self, direction: Direction) -> (isize, isize) {
        let (dx, dy) = direction.delta();
        (self.x + dx, self.y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_then_right() {
        let mut player = Player::new(2, 2);
        player.up();
        player.right();
        assert_eq!((player.x(), player.y()), (3, 1));
    }

    #[test]
    fn step_matches_direct_moves() {
        let mut a = Player::new(0, 0);
        let mut b = Player::new(0, 0);
        for direction in [Direction::Down, Direction::Right, Direction::Right, Direction::Up] {
            a.step(direction);
        }
        b.down();
        b.right();
        b.right();
        b.up();
        assert_eq!(a, b);
        assert_eq!(a.point(), Some(Point::new(2, 0)));
    }

    #[test]
    fn leaving_the_top_has_no_point() {
        let mut player = Player::at(Point::new(4, 0));
        player.up();
        assert_eq!(player.y(), -1);
        assert_eq!(player.point(), None);
        assert_eq!(player.neighbour(Direction::Down), (4, 0));
    }
}
