use crate::board::Board;
use crate::cell::Cell;
use crate::context::{SearchContext, SearchObserver, SearchStats};
use crate::error::SearchError;
use crate::expansion::{Expander, Move};
use crate::frontier::{Frontier, HeapFrontier};
use crate::heuristic::Heuristic;
use grid_util::point::Point;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Which cells end up marked as [Cell::Path] on a solved board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathMarking {
    /// Every expanded cell, i.e. the whole explored trail.
    #[default]
    Expanded,
    /// Only the cells of the route reconstructed from the goal back to the start.
    /// Other explored cells stay [Cell::Visited].
    Route,
}

/// Shared flag for stopping a running search from elsewhere.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    pub marking: PathMarking,
    /// Lower the cost of queued cells that are reached again more cheaply before they are
    /// expanded. When disabled every cell keeps the cost it was first discovered with,
    /// and the returned path can be longer than optimal.
    pub update_open: bool,
    /// Consult the board's connected components before searching and fail right away if
    /// the goal is on a different component than the start.
    pub check_reachability: bool,
    pub cancel: Option<CancelToken>,
    pub deadline: Option<Instant>,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            heuristic: Heuristic::default(),
            marking: PathMarking::default(),
            update_open: true,
            check_reachability: false,
            cancel: None,
            deadline: None,
        }
    }
}

impl SearchConfig {
    fn interrupted(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// A successful search.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The input board with explored cells and the endpoints annotated.
    pub board: Board,
    /// Number of steps from start to goal.
    pub cost: u32,
    /// The route from start to goal, both included.
    pub route: Vec<Point>,
    pub stats: SearchStats,
}

#[derive(Clone, Debug)]
pub enum SearchOutcome {
    Succeeded(Solution),
    /// The frontier ran empty before the goal was reached: there is no path.
    Failed(SearchStats),
    /// The search was stopped by its [CancelToken] or deadline.
    Cancelled(SearchStats),
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Succeeded(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Succeeded(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Succeeded(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Succeeded(solution) => &solution.stats,
            SearchOutcome::Failed(stats) | SearchOutcome::Cancelled(stats) => stats,
        }
    }
}

/// Searches `board` for a path from `start` to `goal` with the default configuration.
pub fn search(board: Board, start: Point, goal: Point) -> Result<SearchOutcome, SearchError> {
    AstarSearch::new(SearchConfig::default()).run(board, start, goal)
}

/// Paints the endpoints of a solved board, and the route when one is given.
pub fn annotate(board: &mut Board, start: Point, goal: Point, route: Option<&[Point]>) {
    for &p in route.unwrap_or_default() {
        board.set(p, Cell::Path);
    }
    board.set(start, Cell::Start);
    board.set(goal, Cell::Finish);
}

/// A* search over a [Board] with 4-directional unit-cost moves.
///
/// The searcher keeps its [SearchContext] between runs so the frontier and back-pointer
/// allocations are reused.
pub struct AstarSearch<F: Frontier = HeapFrontier> {
    pub config: SearchConfig,
    context: SearchContext<F>,
}

impl AstarSearch<HeapFrontier> {
    pub fn new(config: SearchConfig) -> AstarSearch<HeapFrontier> {
        AstarSearch::with_frontier(config, HeapFrontier::new())
    }
}

impl<F: Frontier> AstarSearch<F> {
    pub fn with_frontier(config: SearchConfig, frontier: F) -> AstarSearch<F> {
        AstarSearch {
            config,
            context: SearchContext::with_frontier(frontier),
        }
    }

    pub fn run(
        &mut self,
        board: Board,
        start: Point,
        goal: Point,
    ) -> Result<SearchOutcome, SearchError> {
        self.run_observed(board, start, goal, &mut ())
    }

    /// Same as [run](Self::run), reporting every frontier event to `observer`.
    pub fn run_observed<O: SearchObserver>(
        &mut self,
        mut board: Board,
        start: Point,
        goal: Point,
        observer: &mut O,
    ) -> Result<SearchOutcome, SearchError> {
        validate(&board, start, goal)?;
        self.context.reset();

        if self.config.check_reachability {
            board.update();
            if board.unreachable(&start, &goal) {
                info!("{} is not reachable from {}", goal, start);
                return Ok(SearchOutcome::Failed(self.context.stats));
            }
        }

        info!("Searching path from {} to {}", start, goal);
        let expander = Expander {
            moves: &Move::ALL,
            heuristic: self.config.heuristic,
            update_open: self.config.update_open,
        };
        let h = expander.heuristic.estimate(&start, &goal);
        self.context.add_start(&mut board, start, h, observer);

        loop {
            if self.config.interrupted() {
                info!(
                    "Search from {} to {} cancelled after {} expansions",
                    start, goal, self.context.stats.expanded
                );
                return Ok(SearchOutcome::Cancelled(self.context.stats));
            }
            let Some(current) = self.context.pop_best() else {
                break;
            };
            observer.on_expand(&current);
            if self.config.marking == PathMarking::Expanded {
                board.set(current.point, Cell::Path);
            }

            if current.point == goal {
                let route = self.context.route(current.index);
                let painted = match self.config.marking {
                    PathMarking::Expanded => None,
                    PathMarking::Route => Some(route.as_slice()),
                };
                annotate(&mut board, start, goal, painted);
                let stats = self.context.stats;
                debug!(
                    "Reached {} with cost {} ({} expanded, {} inserted)",
                    goal, current.g, stats.expanded, stats.inserted
                );
                return Ok(SearchOutcome::Succeeded(Solution {
                    board,
                    cost: current.g,
                    route,
                    stats,
                }));
            }

            expander.expand_neighbors(&current, &goal, &mut board, &mut self.context, observer);
        }

        warn!("No path found from {} to {}", start, goal);
        Ok(SearchOutcome::Failed(self.context.stats))
    }
}

fn validate(board: &Board, start: Point, goal: Point) -> Result<(), SearchError> {
    let (width, height) = (board.width(), board.height());
    if !board.in_bounds(start) {
        return Err(SearchError::StartOutOfBounds {
            point: start,
            width,
            height,
        });
    }
    if !board.in_bounds(goal) {
        return Err(SearchError::GoalOutOfBounds {
            point: goal,
            width,
            height,
        });
    }
    if !board.is_expandable(start) {
        return Err(SearchError::StartBlocked(start));
    }
    Ok(())
}
