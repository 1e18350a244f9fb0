use crate::cell::Cell;
use crate::error::BoardError;
use crate::render::{render, Glyphs};
use core::fmt;
use grid_util::grid::{SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;

/// A rectangular board of [Cell]s. Points use `x` for the column and `y` for the row.
///
/// Besides the cells, [Board] keeps a [UnionFind] over 4-connected non-obstacle cells so
/// that unreachable goals can be detected without flood-filling the board. The components
/// are regenerated lazily through [update](Self::update) whenever obstacles change.
#[derive(Clone, Debug)]
pub struct Board {
    cells: SimpleValueGrid<Cell>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Default for Board {
    fn default() -> Board {
        Board::new(0, 0)
    }
}

impl Board {
    /// Creates a `width` x `height` board of [Cell::Empty] cells.
    pub fn new(width: usize, height: usize) -> Board {
        Board {
            cells: SimpleValueGrid::new(width, height, Cell::Empty),
            components: UnionFind::new(width * height),
            components_dirty: true,
        }
    }

    /// Builds a board from rows of cells. All rows must have the length of the first one.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Board, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(BoardError::MalformedRow {
                row,
                expected: width,
                found,
            });
        }
        let mut board = Board::new(width, height);
        for (y, row) in rows.into_iter().enumerate() {
            for (x, cell) in row.into_iter().enumerate() {
                board.cells.set(x as i32, y as i32, cell);
            }
        }
        Ok(board)
    }

    /// Builds a [Point] from `(row, column)` notation. Coordinates beyond `i32::MAX`
    /// wrap; use [try_point](Self::try_point) for untrusted input.
    pub fn point(row: usize, col: usize) -> Point {
        Point::new(col as i32, row as i32)
    }

    /// Like [point](Self::point), but [None] if a coordinate does not fit a [Point].
    pub fn try_point(row: usize, col: usize) -> Option<Point> {
        Some(Point::new(i32::try_from(col).ok()?, i32::try_from(row).ok()?))
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }
    pub fn height(&self) -> usize {
        self.cells.height()
    }
    /// Number of cells on the board.
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width()
            && (point.y as usize) < self.height()
    }

    /// Returns the cell at `point`, or [None] if it lies outside the board.
    pub fn get(&self, point: Point) -> Option<Cell> {
        self.in_bounds(point)
            .then(|| self.cells.get(point.x, point.y))
    }

    /// Updates a non-obstacle cell. Returns [false] without changing anything if `point` is
    /// out of bounds or holds an obstacle, or if `cell` is itself an obstacle.
    pub fn set(&mut self, point: Point, cell: Cell) -> bool {
        match self.get(point) {
            Some(current) if !current.is_obstacle() && !cell.is_obstacle() => {
                self.cells.set(point.x, point.y, cell);
                true
            }
            _ => false,
        }
    }

    /// Places or removes an obstacle and flags the components for regeneration.
    pub fn set_obstacle(&mut self, point: Point, blocked: bool) {
        if !self.in_bounds(point) {
            return;
        }
        let cell = if blocked { Cell::Obstacle } else { Cell::Empty };
        if self.cells.get(point.x, point.y) != cell {
            self.cells.set(point.x, point.y, cell);
            self.components_dirty = true;
        }
    }

    /// True iff `point` is on the board and its cell is still [Cell::Empty].
    ///
    /// This is the only deduplication the search relies on: cells are marked
    /// [Cell::Visited] as soon as they enter the frontier, so no point is discovered twice.
    pub fn is_expandable(&self, point: Point) -> bool {
        self.get(point) == Some(Cell::Empty)
    }

    /// Counts the cells satisfying `pred`.
    pub fn count<F>(&self, pred: F) -> usize
    where
        F: Fn(Cell) -> bool,
    {
        self.points().filter(|&p| pred(self.cells.get(p.x, p.y))).count()
    }

    /// All points of the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (w, h) = (self.width() as i32, self.height() as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.height() as i32)
            .map(|y| {
                (0..self.width() as i32)
                    .map(|x| self.cells.get(x, y))
                    .collect()
            })
            .collect()
    }

    fn ix(&self, point: &Point) -> usize {
        point.y as usize * self.width() + point.x as usize
    }

    /// Retrieves the component id a given [Point] belongs to. Components must be up to date.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.ix(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Out of bounds points and
    /// obstacles are unreachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        let passable = |p: &Point| self.get(*p).is_some_and(|c| !c.is_obstacle());
        if passable(start) && passable(goal) {
            !self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up 4-connected non-obstacle cells.
    pub fn generate_components(&mut self) {
        debug!(
            "Generating components for {}x{} board",
            self.width(),
            self.height()
        );
        self.components = UnionFind::new(self.area());
        self.components_dirty = false;
        let points = self.points().collect::<Vec<_>>();
        for point in points {
            if self.cells.get(point.x, point.y).is_obstacle() {
                continue;
            }
            let parent_ix = self.ix(&point);
            for n in [
                Point::new(point.x + 1, point.y),
                Point::new(point.x, point.y + 1),
            ] {
                if self.get(n).is_some_and(|c| !c.is_obstacle()) {
                    let ix = self.ix(&n);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render(self, &Glyphs::default()))
    }
}
