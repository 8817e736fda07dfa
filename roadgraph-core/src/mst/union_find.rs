//! Rank-weighted union-find used by the spanning forest builder.
//!
//! Nodes are addressed by dense position. Trees are kept shallow by
//! attaching the lower-ranked root beneath the higher-ranked one, so `find`
//! walks parent links without path compression.

/// Result of a [`DisjointForest::union`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnionOutcome {
    /// Two distinct trees were merged.
    Merged,
    /// Both nodes already shared a root; nothing changed.
    AlreadyConnected,
}

/// Disjoint-set forest with union by rank and a live root counter.
///
/// # Examples
/// ```
/// use roadgraph_core::{DisjointForest, UnionOutcome};
///
/// let mut forest = DisjointForest::new(3);
/// assert_eq!(forest.union(0, 1), UnionOutcome::Merged);
/// assert_eq!(forest.union(1, 0), UnionOutcome::AlreadyConnected);
/// assert_eq!(forest.roots(), 2);
/// assert_eq!(forest.find(0), forest.find(1));
/// ```
#[derive(Clone, Debug)]
pub struct DisjointForest {
    parents: Vec<usize>,
    ranks: Vec<u32>,
    roots: usize,
}

impl DisjointForest {
    /// Creates `node_count` singleton sets.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            parents: (0..node_count).collect(),
            ranks: vec![0; node_count],
            roots: node_count,
        }
    }

    /// Number of nodes tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` when the forest tracks no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of distinct trees.
    #[rustfmt::skip]
    #[must_use]
    pub fn roots(&self) -> usize { self.roots }

    /// Rank of the tree rooted at `node`; meaningful for roots only.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    #[must_use]
    pub fn rank(&self, node: usize) -> u32 {
        self.ranks[node]
    }

    /// Returns the representative of the set containing `node`.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    #[must_use]
    pub fn find(&self, node: usize) -> usize {
        let mut current = node;
        loop {
            let parent = self.parents[current];
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    /// Returns `true` when both nodes share a representative.
    ///
    /// # Panics
    /// Panics when either node is out of range.
    #[must_use]
    pub fn connected(&self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The shallower tree is attached beneath the deeper one. On equal ranks
    /// the root of `left` wins and its rank grows by one.
    ///
    /// # Panics
    /// Panics when either node is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> UnionOutcome {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return UnionOutcome::AlreadyConnected;
        }

        let left_rank = self.ranks[left_root];
        let right_rank = self.ranks[right_root];
        if left_rank < right_rank {
            self.parents[left_root] = right_root;
        } else {
            self.parents[right_root] = left_root;
            if left_rank == right_rank {
                self.ranks[left_root] = left_rank.saturating_add(1);
            }
        }
        self.roots -= 1;
        UnionOutcome::Merged
    }
}
