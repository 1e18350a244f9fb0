//! Reading boards from text.
//!
//! Each non-blank line is a row of comma-separated integers; `0` is an empty cell and any
//! other value an obstacle. A trailing comma at the end of a row is allowed.
use crate::board::Board;
use crate::cell::Cell;
use crate::error::BoardError;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// How malformed tokens inside a row are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Stop reading the row at the first malformed token and keep what was read so far.
    #[default]
    Lenient,
    /// Reject the board.
    Strict,
}

/// Parses one row. `line_no` is only used for error reporting.
pub fn parse_line(line: &str, line_no: usize, mode: ParseMode) -> Result<Vec<Cell>, BoardError> {
    let body = line.trim();
    let body = body.strip_suffix(',').unwrap_or(body);
    let mut row = Vec::new();
    if body.is_empty() {
        return Ok(row);
    }
    for (column, token) in body.split(',').map(str::trim).enumerate() {
        match token.parse::<i64>() {
            Ok(value) => row.push(Cell::from_value(value)),
            Err(_) if mode == ParseMode::Lenient => {
                warn!(
                    "Line {}: ignoring {:?} and the rest of the row",
                    line_no, token
                );
                break;
            }
            Err(_) => {
                return Err(BoardError::InvalidToken {
                    line: line_no,
                    column,
                    token: token.to_owned(),
                })
            }
        }
    }
    Ok(row)
}

/// Parses a whole board. Blank lines are skipped; rows must all end up the same length.
pub fn parse_board(text: &str, mode: ParseMode) -> Result<Board, BoardError> {
    let rows = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1, mode))
        .collect::<Result<Vec<_>, _>>()?;
    Board::from_rows(rows)
}

pub fn read_board_file<P: AsRef<Path>>(path: P, mode: ParseMode) -> Result<Board, BoardError> {
    let path = path.as_ref();
    debug!("Reading board from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_board(&text, mode)
}
