use grid_util::point::Point;

/// A discovered cell together with its search costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub point: Point,
    /// Steps taken from the start.
    pub g: u32,
    /// Estimated steps remaining to the goal.
    pub h: u32,
    /// Position of this node in the search's back-pointer table.
    pub index: usize,
}

impl Node {
    pub fn new(point: Point, g: u32, h: u32, index: usize) -> Node {
        Node { point, g, h, index }
    }

    /// Priority of the node, lower is expanded first.
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}
