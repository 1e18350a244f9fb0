use crate::board::Board;
use crate::cell::Cell;
use crate::context::{SearchContext, SearchObserver};
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::node::Node;
use grid_util::point::Point;

/// Axis-aligned unit moves. Rows grow downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// The order in which neighbours are expanded.
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// `(dx, dy)` of the move.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (0, -1),
            Move::Left => (-1, 0),
            Move::Down => (0, 1),
            Move::Right => (1, 0),
        }
    }

    pub fn apply(self, point: &Point) -> Point {
        let (dx, dy) = self.delta();
        Point::new(point.x + dx, point.y + dy)
    }
}

/// Generates the successors of expanded nodes.
#[derive(Clone, Copy, Debug)]
pub struct Expander<'a> {
    pub moves: &'a [Move],
    pub heuristic: Heuristic,
    /// Lower the cost of already queued cells that are reached more cheaply. Without this a
    /// cell keeps the cost it was discovered with, which can miss the shortest path.
    pub update_open: bool,
}

impl Default for Expander<'static> {
    fn default() -> Self {
        Expander {
            moves: &Move::ALL,
            heuristic: Heuristic::default(),
            update_open: true,
        }
    }
}

impl Expander<'_> {
    /// Queues every expandable neighbour of `current` at cost `g + 1`. Queued cells are
    /// marked visited on `board`, which closes them to later discovery.
    pub fn expand_neighbors<F, O>(
        &self,
        current: &Node,
        goal: &Point,
        board: &mut Board,
        context: &mut SearchContext<F>,
        observer: &mut O,
    ) where
        F: Frontier,
        O: SearchObserver,
    {
        let g = current.g + 1;
        for m in self.moves {
            let candidate = m.apply(&current.point);
            if board.is_expandable(candidate) {
                let h = self.heuristic.estimate(&candidate, goal);
                context.add_to_open(board, candidate, g, h, current.index, observer);
            } else if self.update_open && board.get(candidate) == Some(Cell::Visited) {
                let h = self.heuristic.estimate(&candidate, goal);
                context.improve(candidate, g, h, current.index, observer);
            }
        }
    }
}
