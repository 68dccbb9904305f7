use serde::{Deserialize, Serialize};

enum TreeDir {
    Left,
    Right,
}

/// Flat storage for a complete binary tree with a fixed number of leaves.
///
/// The root lives at cell 0 and the children of cell `i` at `2i + 1` and
/// `2i + 2`, so a tree with `n` leaves occupies exactly `2n - 1` cells and
/// the leaf for slot `i` sits at cell `n - 1 + i`. When `n` is not a power
/// of two the leaf cells span the two bottom levels; the slot mapping stays
/// purely arithmetic either way.
#[derive(Debug, Serialize, Deserialize)]
pub struct Tree<V> {
    nodes: Vec<V>,
    leaf_count: usize,
}

impl<V: Clone + Copy> Tree<V> {
    // assumes leaf_count > 0
    pub fn new(value: V, leaf_count: usize) -> Self {
        Self {
            nodes: vec![value; 2 * leaf_count - 1],
            leaf_count,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn root(&self) -> usize {
        0
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        if node == self.root() {
            None
        } else {
            Some((node - 1) / 2)
        }
    }

    fn child(&self, node: usize, dir: TreeDir) -> Option<usize> {
        let child = match dir {
            TreeDir::Left => 2 * node + 1,
            TreeDir::Right => 2 * node + 2,
        };
        if child < self.nodes.len() {
            Some(child)
        } else {
            None
        }
    }

    pub fn children(&self, node: usize) -> (Option<usize>, Option<usize>) {
        (
            self.child(node, TreeDir::Left),
            self.child(node, TreeDir::Right),
        )
    }

    // cell holding slot 0; the leaves of higher slots follow in order
    pub fn first_leaf(&self) -> usize {
        self.leaf_count - 1
    }

    pub fn value(&self, node: usize) -> V {
        self.nodes[node]
    }

    pub fn set_value(&mut self, node: usize, value: V) {
        self.nodes[node] = value;
    }

    pub fn values(&self) -> &[V] {
        &self.nodes
    }
}
