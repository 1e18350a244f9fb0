use grid_util::point::Point;

/// Step cost between two points on a 4-connected grid without obstacles.
///
/// Every move changes exactly one coordinate by one, so this never overestimates
/// the true remaining cost and is admissible for [AstarSearch](crate::search::AstarSearch).
pub fn manhattan(p1: &Point, p2: &Point) -> u32 {
    (p1.x - p2.x).unsigned_abs() + (p1.y - p2.y).unsigned_abs()
}

/// Remaining-cost estimate used to order the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    #[default]
    Manhattan,
    /// Ignores the goal, turning the search into a uniform-cost search.
    Zero,
}

impl Heuristic {
    pub fn estimate(&self, p1: &Point, p2: &Point) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan(p1, p2),
            Heuristic::Zero => 0,
        }
    }
}
