//! Errors raised while generating, parsing or verifying mazes

use thiserror::Error;

/// Everything that can go wrong inside the library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Random sampling could not land on an empty cell.
    ///
    /// The field is too dense; lower the density or enlarge the field.
    #[error("no free cell found after {attempts} random samples")]
    ExhaustedGrid { attempts: usize },

    /// No candidate was both solvable and hard enough.
    #[error("solvable maze not found in {attempts} attempts")]
    NoSolvableMazeFound { attempts: usize },

    /// The verifier walk ran past its step budget. This is a logic fault,
    /// not a property of the maze.
    #[error("solvability walk did not terminate within {steps} steps")]
    VerifierDidNotTerminate { steps: usize },

    #[error("invalid maze dimensions {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("maze text is empty")]
    EmptyMaze,

    #[error("unexpected character `{symbol}` at x={x}, y={y}")]
    UnexpectedSymbol { symbol: char, x: usize, y: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{0} is not found in maze")]
    MissingMarker(&'static str),

    #[error("{0} appears more than once in maze")]
    DuplicateMarker(&'static str),
}

pub type Result<T> = std::result::Result<T, MazeError>;
