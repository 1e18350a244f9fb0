/// Status of a single board cell.
///
/// During one search a cell only moves forward through
/// `Empty -> Visited -> Path -> Start | Finish`. [Cell::Obstacle] is input
/// and is never overwritten.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Obstacle,
    /// Discovered by the search (placed on the frontier at some point).
    Visited,
    /// Expanded by the search, or on the reconstructed route when
    /// [PathMarking::Route](crate::search::PathMarking::Route) is used.
    Path,
    Start,
    Finish,
}

impl Cell {
    /// Maps a value from a board file: `0` is empty, anything else is an obstacle.
    pub fn from_value(value: i64) -> Cell {
        if value == 0 {
            Cell::Empty
        } else {
            Cell::Obstacle
        }
    }

    pub fn is_obstacle(self) -> bool {
        self == Cell::Obstacle
    }

    /// True for every cell the search has touched.
    pub fn is_explored(self) -> bool {
        matches!(self, Cell::Visited | Cell::Path | Cell::Start | Cell::Finish)
    }
}
