//! Errors raised while building, generating and exporting mazes

use std::io;

use thiserror::Error;

use crate::grid::Position;

/// Everything that can go wrong in this crate
#[derive(Debug, Error)]
pub enum MazeError {
    /// Grid is too small to have an interior
    #[error("maze must be at least 3x3, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Endpoint lies on the border ring or outside the grid
    #[error("{0} lies outside the maze interior")]
    OutsideInterior(Position),

    #[error("start point is already set")]
    StartAlreadySet,

    #[error("end point is already set")]
    EndAlreadySet,

    #[error("start point must be set before the end point")]
    StartNotSet,

    #[error("end point {0} coincides with the start point")]
    EndOnStart(Position),

    /// Stepping was requested before both endpoints were placed
    #[error("start and end points must be set before generation")]
    NotReady,

    /// Backtracking found an empty history
    #[error("walker ran out of history after {steps} steps")]
    HistoryExhausted { steps: usize },

    #[error("walker did not reach the end within {limit} steps")]
    StepLimitExceeded { limit: usize },

    #[error("no maze could be generated in {attempts} attempts")]
    AttemptsExhausted { attempts: usize },

    #[error("failed to write maze")]
    Export(#[from] io::Error),

    #[error("unexpected character `{glyph}` at row={row}, col={col}")]
    UnexpectedGlyph { glyph: char, row: usize, col: usize },

    #[error("malformed maze text: {0}")]
    Malformed(String),
}

impl MazeError {
    /// Generation failed by chance; a walk with another seed may succeed.
    pub fn is_starvation(&self) -> bool {
        matches!(
            self,
            Self::HistoryExhausted { .. }
                | Self::StepLimitExceeded { .. }
                | Self::AttemptsExhausted { .. }
        )
    }
}
