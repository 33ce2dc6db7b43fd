use crate::{Cell, Cost};
use std::cmp::Ordering;

/// Index of a [`SearchNode`] inside a [`NodeArena`]
pub(crate) type NodeIndex = usize;

/// All Nodes created during one search. Parents refer to each other by index.
pub(crate) type NodeArena = slab::Slab<SearchNode>;

/// One state reached by the search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SearchNode {
    pub position: Cell,
    /// `None` only for the start Node
    pub parent: Option<NodeIndex>,
    pub g: Cost,
    pub h: Cost,
}

impl SearchNode {
    pub fn new(position: Cell, parent: Option<NodeIndex>, g: Cost, h: Cost) -> SearchNode {
        SearchNode {
            position,
            parent,
            g,
            h,
        }
    }

    pub fn f(&self) -> Cost {
        self.g + self.h
    }
}

/// Walks the parent links from `index` back to the start and returns the Cells start first.
pub(crate) fn reconstruct(nodes: &NodeArena, index: NodeIndex) -> Vec<Cell> {
    let mut steps = vec![];
    let mut current = Some(index);
    while let Some(i) = current {
        let node = &nodes[i];
        steps.push(node.position);
        current = node.parent;
    }
    steps.reverse();
    steps
}

/// An entry of the frontier.
///
/// [`BinaryHeap`](std::collections::BinaryHeap) is a max-heap, so the ordering is reversed:
/// the "greatest" entry has the lowest `f`, then the lowest `h`, then the smallest position.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub f: Cost,
    pub h: Cost,
    pub position: Cell,
    pub node: NodeIndex,
}

impl FrontierEntry {
    pub fn new(node: NodeIndex, data: &SearchNode) -> FrontierEntry {
        FrontierEntry {
            f: data.f(),
            h: data.h,
            position: data.position,
            node,
        }
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for FrontierEntry {}
impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for FrontierEntry {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.f
            .total_cmp(&self.f)
            .then_with(|| rhs.h.total_cmp(&self.h))
            .then_with(|| rhs.position.cmp(&self.position))
    }
}
