mod max_query;

use crate::query_tree::QueryTree;
use crate::traits::NegativeInfinity;
use max_query::MaxQuery;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MaxTree<V: Copy + NegativeInfinity + PartialOrd> {
    tree: QueryTree<V, MaxQuery>,
}

impl<V: Copy + NegativeInfinity + PartialOrd> MaxTree<V> {
    pub fn with_leaf_count(leaf_count: usize) -> Self {
        Self {
            tree: QueryTree::with_leaf_count(leaf_count),
        }
    }

    pub fn root(&self) -> usize {
        self.tree.root()
    }

    pub fn first_leaf(&self) -> usize {
        self.tree.first_leaf()
    }

    pub fn value(&self, node: usize) -> V {
        self.tree.value(node)
    }

    pub fn update_value(&mut self, leaf: usize, value: V) {
        self.tree.update_value(leaf, value)
    }
}
