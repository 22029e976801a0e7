//! Pairing Heap implementation
//!
//! A pairing heap is a type of heap-ordered tree with:
//! - O(1) amortized insert
//! - O(log n) amortized delete_min
//! - o(log n) amortized decrease_key (in fact, better than log n)
//!
//! The pairing heap is simpler than Fibonacci heaps while still providing
//! excellent amortized performance for decrease_key operations. There is no
//! cascading structure: a decreased node is cut out and melded with the root.
//!
//! Nodes live in a [`SlotMap`] arena and refer to each other by key. Each
//! node records its parent, its first child, and its previous and next
//! siblings, so cutting a node out of a child list is O(1).

use crate::stats::{HeapStats, OpTimer, Operation};
use crate::traits::{Handle, Heap, HeapError};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to an element in a Pairing heap
    ///
    /// Only meaningful for the heap that returned it.
    pub struct PairingHandle;
}

impl Handle for PairingHandle {}

struct Node<T, P> {
    item: T,
    priority: P,
    parent: Option<PairingHandle>,
    first_child: Option<PairingHandle>,
    next_sibling: Option<PairingHandle>,
    prev_sibling: Option<PairingHandle>,
}

/// Pairing Heap
///
/// # Example
///
/// ```rust
/// use decrease_key_heaps::pairing::PairingHeap;
/// use decrease_key_heaps::Heap;
///
/// let mut heap = PairingHeap::new();
/// let handle = heap.insert(5, "item");
/// heap.insert(3, "other");
/// heap.decrease_key(handle, 1).unwrap();
/// assert_eq!(heap.find_min(), Ok((&1, &"item")));
/// ```
pub struct PairingHeap<T, P: Ord> {
    nodes: SlotMap<PairingHandle, Node<T, P>>,
    root: Option<PairingHandle>,
    stats: HeapStats,
}

impl<T, P: Ord> Default for PairingHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Heap<T, P> for PairingHeap<T, P> {
    type Handle = PairingHandle;

    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            stats: HeapStats::default(),
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, priority: P, item: T) -> Self::Handle {
        let timer = OpTimer::start();
        let node = self.nodes.insert(Node {
            item,
            priority,
            parent: None,
            first_child: None,
            next_sibling: None,
            prev_sibling: None,
        });

        self.root = Some(match self.root {
            Some(root) => self.meld(root, node),
            None => node,
        });

        self.stats.record(Operation::Insert, timer);
        node
    }

    fn find_min(&self) -> Result<(&P, &T), HeapError> {
        let root = self.root.ok_or(HeapError::EmptyHeap)?;
        let node = &self.nodes[root];
        Ok((&node.priority, &node.item))
    }

    fn delete_min(&mut self) -> Result<(P, T), HeapError> {
        let timer = OpTimer::start();
        let root = self.root.ok_or(HeapError::EmptyHeap)?;
        let node = self.nodes.remove(root).ok_or(HeapError::InvalidHandle)?;

        self.root = node.first_child.map(|first| self.merge_pairs(first));

        self.stats.record(Operation::DeleteMin, timer);
        Ok((node.priority, node.item))
    }

    fn decrease_key(&mut self, handle: Self::Handle, new_priority: P) -> Result<(), HeapError> {
        let timer = OpTimer::start();
        let node = self
            .nodes
            .get_mut(handle)
            .ok_or(HeapError::InvalidHandle)?;

        if new_priority >= node.priority {
            return Err(HeapError::InvalidKey);
        }
        node.priority = new_priority;

        // The root is already the minimum
        if self.root != Some(handle) {
            self.cut(handle);
            self.root = Some(match self.root {
                Some(root) => self.meld(root, handle),
                None => handle,
            });
        }

        self.stats.record(Operation::DecreaseKey, timer);
        Ok(())
    }

    fn get(&self, handle: Self::Handle) -> Option<(&P, &T)> {
        self.nodes
            .get(handle)
            .map(|node| (&node.priority, &node.item))
    }

    fn stats(&self) -> &HeapStats {
        &self.stats
    }

    fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

impl<T, P: Ord> PairingHeap<T, P> {
    /// Melds two detached trees, returning the root of the result
    ///
    /// The smaller root wins, `a` on ties. The loser becomes the winner's
    /// first child.
    fn meld(&mut self, a: PairingHandle, b: PairingHandle) -> PairingHandle {
        let (winner, loser) = if self.nodes[b].priority < self.nodes[a].priority {
            (b, a)
        } else {
            (a, b)
        };

        let first_child = self.nodes[winner].first_child;
        let loser_node = &mut self.nodes[loser];
        loser_node.parent = Some(winner);
        loser_node.prev_sibling = None;
        loser_node.next_sibling = first_child;
        if let Some(child) = first_child {
            self.nodes[child].prev_sibling = Some(loser);
        }
        self.nodes[winner].first_child = Some(loser);

        winner
    }

    /// Merges a sibling list in a two-pass pairing operation
    fn merge_pairs(&mut self, first: PairingHandle) -> PairingHandle {
        // First pass: meld adjacent pairs left to right
        let mut pairs = Vec::new();
        let mut current = Some(first);

        while let Some(a) = current {
            let next = self.nodes[a].next_sibling;
            self.detach(a);

            match next {
                Some(b) => {
                    current = self.nodes[b].next_sibling;
                    self.detach(b);
                    pairs.push(self.meld(a, b));
                }
                None => {
                    pairs.push(a);
                    current = None;
                }
            }
        }

        // Second pass: meld the pairs right to left; the first pass always
        // leaves at least one tree
        let mut result = pairs.pop().unwrap_or(first);
        while let Some(tree) = pairs.pop() {
            result = self.meld(tree, result);
        }

        result
    }

    /// Clears the parent and sibling links of a node
    fn detach(&mut self, node: PairingHandle) {
        let node = &mut self.nodes[node];
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    /// Cuts a node (with its subtree) out of its parent's child list
    fn cut(&mut self, node: PairingHandle) {
        let Node {
            parent,
            prev_sibling,
            next_sibling,
            ..
        } = self.nodes[node];

        match prev_sibling {
            Some(prev) => self.nodes[prev].next_sibling = next_sibling,
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent].first_child = next_sibling;
                }
            }
        }
        if let Some(next) = next_sibling {
            self.nodes[next].prev_sibling = prev_sibling;
        }

        self.detach(node);
    }

    /// Checks every structural invariant of the heap
    ///
    /// Verifies that the root has no parent or siblings, every child points
    /// back at its parent, sibling links are mutually consistent, heap order
    /// holds, and every arena node is reachable exactly once.
    pub fn verify_internal_structure(&self) -> bool {
        let Some(root) = self.root else {
            return self.nodes.is_empty();
        };
        let Some(root_node) = self.nodes.get(root) else {
            return false;
        };
        if root_node.parent.is_some()
            || root_node.prev_sibling.is_some()
            || root_node.next_sibling.is_some()
        {
            return false;
        }

        let mut visited = 0usize;
        let mut stack = vec![root];
        while let Some(key) = stack.pop() {
            visited += 1;
            if visited > self.nodes.len() {
                return false;
            }

            let node = &self.nodes[key];
            let mut prev = None;
            let mut current = node.first_child;
            while let Some(child) = current {
                let Some(child_node) = self.nodes.get(child) else {
                    return false;
                };
                if child_node.parent != Some(key)
                    || child_node.prev_sibling != prev
                    || child_node.priority < node.priority
                {
                    return false;
                }
                stack.push(child);
                prev = Some(child);
                current = child_node.next_sibling;
            }
        }

        visited == self.nodes.len()
    }
}
