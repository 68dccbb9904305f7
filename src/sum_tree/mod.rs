mod sampling;

use crate::error::TreeError;
use crate::max_tree::MaxTree;
use crate::nodes::MaxNode;
use crate::priority::Priority;
use crate::traits::Zero;
use crate::tree::Tree;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-capacity prefix-sum tree over per-slot priorities.
///
/// Leaves hold the priorities of `capacity` slots and every internal node
/// holds the sum of its children, so the root is the total priority and a
/// cumulative-priority target resolves to a slot in O(log n). Slots are
/// written either in place with [`update`](Self::update) or in ring-buffer
/// order with [`push`](Self::push), which overwrites the oldest slot once
/// every slot has been written. This is the structure backing prioritized
/// experience replay: the parallel item storage evicts its oldest entry at
/// the same time the ring cursor wraps.
#[derive(Debug, Serialize, Deserialize)]
pub struct SumTree<P: Priority> {
    priorities: Tree<P>,
    priorities_max: MaxTree<MaxNode<P>>,
    head: usize,
    len: usize,
}

impl<P: Priority> SumTree<P> {
    pub fn with_capacity(capacity: usize) -> Result<Self, TreeError> {
        if capacity == 0 {
            return Err(TreeError::InvalidArgument("capacity must be positive"));
        }
        Ok(Self {
            priorities: Tree::new(P::zero(), capacity),
            priorities_max: MaxTree::with_leaf_count(capacity),
            head: 0,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.priorities.leaf_count()
    }

    /// Number of slots written by [`push`](Self::push) so far, saturating at
    /// the capacity once the ring has wrapped.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sum of all slot priorities (the value at the root).
    pub fn total(&self) -> P {
        self.priorities.value(self.priorities.root())
    }

    /// Largest priority currently held by any written slot, or `None` while
    /// no slot has been written.
    pub fn max_priority(&self) -> Option<P> {
        self.priorities_max.value(self.priorities_max.root()).into()
    }

    /// Current priority of `slot`.
    pub fn priority(&self, slot: usize) -> Result<P, TreeError> {
        self.leaf(slot).map(|leaf| self.priorities.value(leaf))
    }

    fn leaf(&self, slot: usize) -> Result<usize, TreeError> {
        if slot < self.capacity() {
            Ok(self.priorities.first_leaf() + slot)
        } else {
            Err(TreeError::IndexOutOfRange {
                slot,
                capacity: self.capacity(),
            })
        }
    }

    /// Sets the priority of `slot`, patching every ancestor sum on the path
    /// back to the root with the difference. A rejected call leaves the tree
    /// untouched; the ring cursor and entry count never move here.
    pub fn update(&mut self, slot: usize, priority: P) -> Result<(), TreeError> {
        let leaf = self.leaf(slot)?;
        if priority < P::zero() {
            return Err(TreeError::InvalidArgument("priority must be non-negative"));
        }
        let delta = priority - self.priorities.value(leaf);
        self.priorities.set_value(leaf, priority);
        self.add_to_ancestors(leaf, delta);
        self.priorities_max
            .update_value(self.priorities_max.first_leaf() + slot, priority.into());
        Ok(())
    }

    fn add_to_ancestors(&mut self, mut node: usize, delta: P) {
        while let Some(parent) = self.priorities.parent(node) {
            let value = self.priorities.value(parent) + delta;
            self.priorities.set_value(parent, value);
            node = parent;
        }
    }

    /// Writes `priority` at the ring cursor, then advances the cursor and
    /// grows the entry count toward the capacity.
    pub fn push(&mut self, priority: P) -> Result<(), TreeError> {
        self.update(self.head, priority)?;
        self.head += 1;
        if self.head == self.capacity() {
            self.head = 0;
        }
        if self.len < self.capacity() {
            self.len += 1;
        }
        Ok(())
    }

    /// Resolves `fraction` of the total priority to a slot, returning the
    /// slot and its priority. Drawing `fraction` uniformly from `[0, 1)`
    /// selects each slot with probability proportional to its priority.
    pub fn find(&self, fraction: P) -> Result<(usize, P), TreeError> {
        self.find_by_sum(fraction * self.total())
    }

    /// Resolves an absolute cumulative-priority `target` to the slot whose
    /// prefix-sum interval contains it.
    ///
    /// The descent is left-biased: a target lying exactly on the boundary
    /// between two slots resolves to the earlier one. Targets at or beyond
    /// the total priority clamp to the last leaf instead of failing, so the
    /// call returns a valid slot whenever the total is positive.
    pub fn find_by_sum(&self, target: P) -> Result<(usize, P), TreeError> {
        if self.total() <= P::zero() {
            return Err(TreeError::EmptyDistribution);
        }
        let leaf = self.descend(target);
        let slot = leaf - self.priorities.first_leaf();
        Ok((slot, self.priorities.value(leaf)))
    }

    fn descend(&self, mut target: P) -> usize {
        let mut node = self.priorities.root();
        loop {
            match self.priorities.children(node) {
                (None, None) => return node,
                (Some(left), None) => node = left,
                (None, Some(right)) => node = right,
                (Some(left), Some(right)) => {
                    let left_sum = self.priorities.value(left);
                    node = if target <= left_sum {
                        left
                    } else {
                        target -= left_sum;
                        right
                    };
                }
            }
        }
    }

    /// Snapshot of every node value in array order, internal sums included.
    pub fn nodes(&self) -> &[P] {
        self.priorities.values()
    }
}

impl<P: Priority + fmt::Debug> fmt::Display for SumTree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.nodes();
        let mut depth = 0;
        let mut start = 0;
        while start < nodes.len() {
            let end = usize::min(2 * start + 1, nodes.len());
            if depth > 0 {
                writeln!(f)?;
            }
            write!(f, "depth {}: {:?}", depth, &nodes[start..end])?;
            depth += 1;
            start = end;
        }
        Ok(())
    }
}
