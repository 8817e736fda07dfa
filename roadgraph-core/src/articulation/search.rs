//! Explicit-stack low-link search.
//!
//! The per-node state (`depth`, `reachback`, `children`, `num_subtrees`) is
//! held in arrays keyed by dense node position. A [`Frame`] carries only the
//! node, the depth it is assigned on first visit and its search parent; a
//! frame stays on the stack until every child of its node has been consumed,
//! and only then propagates its reachback to the parent.

use crate::graph::Adjacency;

/// Depth sentinel for nodes not yet visited in the current run.
pub(super) const UNVISITED: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Frame {
    node: usize,
    depth: usize,
    parent: usize,
}

/// Per-run state for the articulation point sweep.
pub(super) struct SearchContext<'a> {
    adjacency: &'a Adjacency,
    depth: Vec<usize>,
    reachback: Vec<usize>,
    children: Vec<Vec<usize>>,
    num_subtrees: Vec<usize>,
    remaining: Vec<bool>,
    cut: Vec<bool>,
    stack: Vec<Frame>,
}

impl<'a> SearchContext<'a> {
    pub(super) fn new(adjacency: &'a Adjacency) -> Self {
        let node_count = adjacency.len();
        Self {
            adjacency,
            depth: vec![UNVISITED; node_count],
            reachback: vec![0; node_count],
            children: vec![Vec::new(); node_count],
            num_subtrees: vec![0; node_count],
            remaining: vec![true; node_count],
            cut: vec![false; node_count],
            stack: Vec::new(),
        }
    }

    /// Returns `true` while `node` has not been fully processed by any sweep.
    pub(super) fn is_remaining(&self, node: usize) -> bool {
        self.remaining.get(node).copied().unwrap_or(false)
    }

    /// Number of child subtrees found when `node` was a sweep root.
    pub(super) fn subtrees(&self, node: usize) -> usize {
        self.num_subtrees.get(node).copied().unwrap_or(0)
    }

    /// Sweeps the component containing `root`, treating `root` as the DFS
    /// root: it is a cut vertex iff more than one subtree hangs off it.
    pub(super) fn sweep_from(&mut self, root: usize) {
        let adjacency = self.adjacency;
        self.depth[root] = 0;
        self.num_subtrees[root] = 0;
        self.remaining[root] = false;

        for &child in adjacency.neighbours(root) {
            if self.depth[child] == UNVISITED {
                self.search(child, 1, root);
                self.num_subtrees[root] += 1;
            }
        }
        if self.num_subtrees[root] > 1 {
            self.cut[root] = true;
        }
    }

    fn search(&mut self, start: usize, depth: usize, parent: usize) {
        let adjacency = self.adjacency;
        self.stack.clear();
        self.stack.push(Frame {
            node: start,
            depth,
            parent,
        });

        while let Some(&frame) = self.stack.last() {
            let node = frame.node;
            if self.depth[node] == UNVISITED {
                self.depth[node] = frame.depth;
                self.reachback[node] = frame.depth;
                // Reversed so that `pop` hands children out in neighbour order.
                let children = &mut self.children[node];
                children.clear();
                children.extend(
                    adjacency
                        .neighbours(node)
                        .iter()
                        .rev()
                        .copied()
                        .filter(|&neighbour| neighbour != frame.parent),
                );
            } else if let Some(child) = self.children[node].pop() {
                if self.depth[child] == UNVISITED {
                    self.stack.push(Frame {
                        node: child,
                        depth: self.depth[node] + 1,
                        parent: node,
                    });
                } else {
                    self.reachback[node] = self.reachback[node].min(self.depth[child]);
                }
            } else {
                if node != start {
                    let parent = frame.parent;
                    self.reachback[parent] = self.reachback[parent].min(self.reachback[node]);
                    if self.reachback[node] >= self.depth[parent] {
                        self.cut[parent] = true;
                    }
                }
                self.stack.pop();
                self.remaining[node] = false;
            }
        }
    }

    /// Dense positions of every cut vertex found, ascending.
    pub(super) fn into_cut_vertices(self) -> Vec<usize> {
        self.cut
            .iter()
            .enumerate()
            .filter(|(_, is_cut)| **is_cut)
            .map(|(position, _)| position)
            .collect()
    }
}
