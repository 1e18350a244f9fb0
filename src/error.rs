use grid_util::point::Point;
use thiserror::Error;

/// Errors raised while building a [Board](crate::board::Board) or reading one from text.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("row {row} has {found} cells, expected {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid token {token:?} at line {line}, column {column}")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("could not read board: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected search preconditions. Not finding a path is not an error, see
/// [SearchOutcome::Failed](crate::search::SearchOutcome::Failed).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("start {point} is outside the {width}x{height} board")]
    StartOutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("goal {point} is outside the {width}x{height} board")]
    GoalOutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("start {0} is not an empty cell")]
    StartBlocked(Point),
}
