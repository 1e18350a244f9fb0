use crate::board::Board;
use crate::cell::Cell;
use crate::frontier::{Frontier, HeapFrontier};
use crate::node::Node;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the start node.
const NO_PARENT: usize = usize::MAX;

/// Receives the frontier events of a search.
pub trait SearchObserver {
    /// A cell was discovered and queued for the first time.
    fn on_insert(&mut self, _node: &Node) {}
    /// A queued cell was found again with a lower cost and queued with that cost.
    fn on_update(&mut self, _node: &Node) {}
    /// A node was taken from the frontier and expanded.
    fn on_expand(&mut self, _node: &Node) {}
}

impl SearchObserver for () {}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken from the frontier and expanded.
    pub expanded: usize,
    /// Cells discovered and queued.
    pub inserted: usize,
    /// Queued cells whose cost was lowered before expansion.
    pub updated: usize,
    /// Largest frontier size seen.
    pub max_frontier: usize,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    parent: usize,
    g: u32,
    closed: bool,
}

/// Per-search state: the frontier plus a back-pointer table. The table is indexed by
/// discovery order, which doubles as the [Node::index] of each queued node.
pub struct SearchContext<F: Frontier = HeapFrontier> {
    pub frontier: F,
    parents: FxIndexMap<Point, Entry>,
    pub stats: SearchStats,
}

impl SearchContext<HeapFrontier> {
    pub fn new() -> SearchContext<HeapFrontier> {
        SearchContext::with_frontier(HeapFrontier::new())
    }
}

impl Default for SearchContext<HeapFrontier> {
    fn default() -> Self {
        SearchContext::new()
    }
}

impl<F: Frontier> SearchContext<F> {
    pub fn with_frontier(frontier: F) -> SearchContext<F> {
        SearchContext {
            frontier,
            parents: FxIndexMap::default(),
            stats: SearchStats::default(),
        }
    }

    pub fn reset(&mut self) {
        self.frontier.clear();
        self.parents.clear();
        self.stats = SearchStats::default();
    }

    /// Queues the start node of a search.
    pub fn add_start<O: SearchObserver>(
        &mut self,
        board: &mut Board,
        point: Point,
        h: u32,
        observer: &mut O,
    ) {
        self.add_to_open(board, point, 0, h, NO_PARENT, observer);
    }

    /// Marks `point` as [Cell::Visited] and queues it with the given costs. Returns [false]
    /// without changing anything if `point` was already discovered; use
    /// [improve](Self::improve) to lower its cost instead.
    pub fn add_to_open<O: SearchObserver>(
        &mut self,
        board: &mut Board,
        point: Point,
        g: u32,
        h: u32,
        parent: usize,
        observer: &mut O,
    ) -> bool {
        let index = match self.parents.entry(point) {
            indexmap::map::Entry::Occupied(_) => return false,
            indexmap::map::Entry::Vacant(vacant) => {
                let index = vacant.index();
                vacant.insert(Entry {
                    parent,
                    g,
                    closed: false,
                });
                index
            }
        };
        board.set(point, Cell::Visited);
        let node = Node::new(point, g, h, index);
        observer.on_insert(&node);
        self.push(node);
        self.stats.inserted += 1;
        true
    }

    /// Lowers the cost of a discovered but not yet expanded cell to `g`, reached from
    /// `parent`. The cheaper node is pushed and the old one is skipped by
    /// [pop_best](Self::pop_best). Returns [false] if `point` is unknown, already expanded, or
    /// not improved.
    pub fn improve<O: SearchObserver>(
        &mut self,
        point: Point,
        g: u32,
        h: u32,
        parent: usize,
        observer: &mut O,
    ) -> bool {
        let Some((index, _, entry)) = self.parents.get_full_mut(&point) else {
            return false;
        };
        if entry.closed || entry.g <= g {
            return false;
        }
        entry.g = g;
        entry.parent = parent;
        let node = Node::new(point, g, h, index);
        observer.on_update(&node);
        self.push(node);
        self.stats.updated += 1;
        true
    }

    /// Pops the best node that has not been expanded yet and closes it. Entries superseded
    /// by [improve](Self::improve) are dropped.
    pub fn pop_best(&mut self) -> Option<Node> {
        while let Some(node) = self.frontier.pop() {
            let Some((_, entry)) = self.parents.get_index_mut(node.index) else {
                continue;
            };
            if entry.closed || node.g > entry.g {
                continue;
            }
            entry.closed = true;
            self.stats.expanded += 1;
            return Some(node);
        }
        None
    }

    fn push(&mut self, node: Node) {
        self.frontier.push(node);
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
    }

    /// Follows back-pointers from the node at `index` to the start. The returned route
    /// runs from the start to that node.
    pub fn route(&self, index: usize) -> Vec<Point> {
        let mut path: Vec<Point> = std::iter::successors(Some(index), |&i| {
            self.parents.get_index(i).map(|(_, entry)| entry.parent)
        })
        .map_while(|i| self.parents.get_index(i).map(|(point, _)| *point))
        .collect();
        path.reverse();
        path
    }
}
