//! # grid_astar
//!
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) over a rectangular board
//! with obstacles. Moves are 4-directional with unit cost and the heuristic is the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), so the first time
//! the goal leaves the frontier it does so with a minimal cost.
//!
//! The search works on the board in place: cells are marked [Cell::Visited] when they enter
//! the frontier and [Cell::Path] when expanded, and on success the endpoints become
//! [Cell::Start] and [Cell::Finish]. Connected components can optionally be consulted first
//! to avoid flood-filling the board when no path exists.
//!
//! ```
//! use grid_astar::{search, Board, Cell, SearchOutcome};
//!
//! let mut board = Board::new(3, 3);
//! board.set_obstacle(Board::point(1, 1), true);
//! let outcome = search(board, Board::point(0, 0), Board::point(2, 2)).unwrap();
//! let solution = outcome.into_solution().unwrap();
//! assert_eq!(solution.cost, 4);
//! assert_eq!(solution.board.get(Board::point(2, 2)), Some(Cell::Finish));
//! ```
pub mod board;
pub mod cell;
pub mod context;
pub mod error;
pub mod expansion;
pub mod frontier;
pub mod heuristic;
pub mod loader;
pub mod node;
pub mod render;
pub mod search;

pub use board::Board;
pub use cell::Cell;
pub use context::{SearchContext, SearchObserver, SearchStats};
pub use error::{BoardError, SearchError};
pub use expansion::{Expander, Move};
pub use frontier::{Frontier, HeapFrontier, SortedFrontier};
pub use grid_util::point::Point;
pub use heuristic::{manhattan, Heuristic};
pub use loader::{parse_board, parse_line, read_board_file, ParseMode};
pub use node::Node;
pub use render::{render, Glyphs};
pub use search::{
    annotate, search, AstarSearch, CancelToken, PathMarking, SearchConfig, SearchOutcome,
    Solution,
};
