//! Huffman tree construction.
//!
//! The tree is built by the classic greedy merge: every symbol starts as a
//! leaf in a min-priority queue, and the two lightest nodes are repeatedly
//! joined under a new internal node until one root remains.
//!
//! # Tie-breaking
//!
//! The queue is keyed on `(weight, sequence)`. Leaves receive sequence numbers
//! in the frequency table's first-insertion order and every merged node takes
//! the next free number, so nodes of equal weight leave the queue in the
//! order they were created. The resulting tree is a pure function of the
//! table's contents and order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Huffman tree node.
///
/// Edge labels are implied by position: `left` is reached with a 0 digit,
/// `right` with a 1 digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// Terminal node carrying a symbol.
    Leaf {
        /// The symbol this leaf decodes to.
        symbol: S,
        /// The symbol's frequency.
        weight: u64,
    },
    /// Merge point with exactly two children.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// Child reached by a 0 digit.
        left: Box<Node<S>>,
        /// Child reached by a 1 digit.
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    /// Aggregate weight of the subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for [`Node::Leaf`].
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path. A lone leaf has height 0.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => max = max.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
        max
    }

    /// Leaf symbols in left-to-right order.
    pub fn symbols(&self) -> Vec<&S> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => out.push(symbol),
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    /// Join two subtrees; `left` gets the 0 edge.
    fn merge(left: Node<S>, right: Node<S>) -> Result<Node<S>> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or(Error::WeightOverflow)?;
        Ok(Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// Priority-queue slot: a subtree plus its tie-break sequence number.
struct QueueEntry<S> {
    seq: u64,
    node: Node<S>,
}

impl<S> QueueEntry<S> {
    fn key(&self) -> (u64, u64) {
        (self.node.weight(), self.seq)
    }
}

impl<S> PartialEq for QueueEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for QueueEntry<S> {}

impl<S> Ord for QueueEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key()) // Min-priority queue
    }
}

impl<S> PartialOrd for QueueEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a Huffman tree from symbol frequencies and return its root.
///
/// A table with a single symbol yields a lone [`Node::Leaf`]. Weights are
/// taken as given: [`FrequencyTable`] never holds a zero weight.
///
/// ```
/// use huffman::{build_tree, FrequencyTable};
///
/// let table = FrequencyTable::from_weights([('a', 1), ('b', 2), ('c', 3)]).unwrap();
/// let root = build_tree(&table).unwrap();
/// assert_eq!(root.weight(), 6);
/// assert_eq!(root.leaf_count(), 3);
/// ```
pub fn build_tree<S>(frequencies: &FrequencyTable<S>) -> Result<Node<S>>
where
    S: Eq + Hash + Clone + Debug,
{
    let mut pq = BinaryHeap::with_capacity(frequencies.len());
    let mut seq = 0u64;
    for (symbol, weight) in frequencies.iter() {
        pq.push(QueueEntry {
            seq,
            node: Node::Leaf {
                symbol: symbol.clone(),
                weight,
            },
        });
        seq += 1;
    }

    loop {
        let (a, b) = match (pq.pop(), pq.pop()) {
            (Some(a), Some(b)) => (a, b),
            (Some(root), None) => {
                let root = root.node;
                debug!(
                    symbols = frequencies.len(),
                    total_weight = root.weight(),
                    height = root.height(),
                    "built huffman tree"
                );
                return Ok(root);
            }
            _ => return Err(Error::EmptyInput),
        };
        trace!(
            left = a.node.weight(),
            right = b.node.weight(),
            "merging nodes"
        );
        pq.push(QueueEntry {
            seq,
            node: Node::merge(a.node, b.node)?,
        });
        seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> FrequencyTable<char> {
        FrequencyTable::from_weights([
            ('a', 5),
            ('b', 9),
            ('c', 12),
            ('d', 13),
            ('e', 16),
            ('f', 45),
        ])
        .unwrap()
    }

    fn check_weights<S>(node: &Node<S>) {
        if let Node::Internal {
            weight,
            left,
            right,
        } = node
        {
            assert_eq!(*weight, left.weight() + right.weight());
            check_weights(left.as_ref());
            check_weights(right.as_ref());
        }
    }

    #[test]
    fn test_empty_table() {
        let table: FrequencyTable<char> = FrequencyTable::new();
        assert_eq!(build_tree(&table), Err(Error::EmptyInput));
    }

    #[test]
    fn test_single_symbol_is_leaf() {
        let table = FrequencyTable::from_weights([('a', 5)]).unwrap();
        let root = build_tree(&table).unwrap();
        assert_eq!(
            root,
            Node::Leaf {
                symbol: 'a',
                weight: 5
            }
        );
        assert_eq!(root.height(), 0);
    }

    #[test]
    fn test_classic_structure() {
        let root = build_tree(&classic()).unwrap();
        assert_eq!(root.weight(), 100);
        assert_eq!(root.leaf_count(), 6);
        check_weights(&root);

        // f (45) is merged last against the 55-weight subtree.
        match &root {
            Node::Internal { left, right, .. } => {
                assert_eq!(
                    **left,
                    Node::Leaf {
                        symbol: 'f',
                        weight: 45
                    }
                );
                assert_eq!(right.weight(), 55);
            }
            Node::Leaf { .. } => panic!("root should be internal"),
        }
    }

    #[test]
    fn test_two_symbols_first_popped_goes_left() {
        let table = FrequencyTable::from_weights([('x', 7), ('y', 2)]).unwrap();
        let root = build_tree(&table).unwrap();
        assert_eq!(root.symbols(), vec![&'y', &'x']);
    }

    #[test]
    fn test_ties_follow_insertion_order() {
        let table = FrequencyTable::from_weights([('p', 1), ('q', 1), ('r', 1), ('s', 1)]).unwrap();
        let root = build_tree(&table).unwrap();
        // (p,q) then (r,s), then the two pairs in creation order.
        assert_eq!(root.symbols(), vec![&'p', &'q', &'r', &'s']);
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn test_overflow_is_reported() {
        let table = FrequencyTable::from_weights([(0u8, u64::MAX), (1u8, 1)]).unwrap();
        assert_eq!(build_tree(&table), Err(Error::WeightOverflow));
    }
}
