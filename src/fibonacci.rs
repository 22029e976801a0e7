//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized insert and decrease_key
//! - O(log n) amortized delete_min
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list, and so is every node's list of children.
//! The heap maintains a pointer to the minimum root.
//!
//! Nodes live in a [`SlotMap`] arena. Every structural link (parent, child,
//! left, right) is an arena key, and the key returned by `insert` is the handle
//! used for `decrease_key`. Generational keys let a stale handle be reported as
//! [`HeapError::InvalidHandle`] instead of touching a reused slot.

use crate::stats::{HeapStats, OpTimer, Operation};
use crate::traits::{Handle, Heap, HeapError};
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use smallvec::{smallvec, SmallVec};

new_key_type! {
    /// Handle to an element in a Fibonacci heap
    ///
    /// Only meaningful for the heap that returned it.
    pub struct FibonacciHandle;
}

impl Handle for FibonacciHandle {}

struct Node<T, P> {
    item: T,
    priority: P,
    parent: Option<FibonacciHandle>,
    child: Option<FibonacciHandle>,
    left: FibonacciHandle,
    right: FibonacciHandle,
    degree: usize,
    /// Lost a child since it last became a child itself; never set on a root
    marked: bool,
}

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use decrease_key_heaps::fibonacci::FibonacciHeap;
/// use decrease_key_heaps::Heap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.insert(5, "item");
/// heap.insert(3, "other");
/// heap.decrease_key(handle, 1).unwrap();
/// assert_eq!(heap.find_min(), Ok((&1, &"item")));
/// assert_eq!(heap.delete_min(), Ok((1, "item")));
/// ```
pub struct FibonacciHeap<T, P: Ord> {
    nodes: SlotMap<FibonacciHandle, Node<T, P>>,
    min: Option<FibonacciHandle>,
    stats: HeapStats,
}

impl<T, P: Ord> Default for FibonacciHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Heap<T, P> for FibonacciHeap<T, P> {
    type Handle = FibonacciHandle;

    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            min: None,
            stats: HeapStats::default(),
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, priority: P, item: T) -> Self::Handle {
        let timer = OpTimer::start();
        let node = self.nodes.insert_with_key(|key| Node {
            item,
            priority,
            parent: None,
            child: None,
            left: key,
            right: key,
            degree: 0,
            marked: false,
        });

        match self.min {
            Some(min) => {
                self.link_after(min, node);
                if self.nodes[node].priority < self.nodes[min].priority {
                    self.min = Some(node);
                }
            }
            None => self.min = Some(node),
        }

        self.stats.record(Operation::Insert, timer);
        node
    }

    fn find_min(&self) -> Result<(&P, &T), HeapError> {
        let min = self.min.ok_or(HeapError::EmptyHeap)?;
        let node = &self.nodes[min];
        Ok((&node.priority, &node.item))
    }

    fn delete_min(&mut self) -> Result<(P, T), HeapError> {
        let timer = OpTimer::start();
        let min = self.min.ok_or(HeapError::EmptyHeap)?;

        // Promote children to the root list
        if let Some(child) = self.nodes[min].child.take() {
            for current in self.ring(child) {
                let node = &mut self.nodes[current];
                node.parent = None;
                node.marked = false;
                self.link_after(min, current);
            }
            self.nodes[min].degree = 0;
        }

        // Remove min from root list
        let right = self.nodes[min].right;
        if right == min {
            self.min = None;
        } else {
            self.unlink(min);
            self.min = Some(right);
            self.consolidate();
        }

        let node = self.nodes.remove(min).ok_or(HeapError::InvalidHandle)?;
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

        if let Some(parent) = node.parent {
            if self.nodes[handle].priority < self.nodes[parent].priority {
                self.cut(handle, parent);
                self.cascading_cut(parent);
            }
        }

        if let Some(min) = self.min {
            if self.nodes[handle].priority < self.nodes[min].priority {
                self.min = Some(handle);
            }
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

impl<T, P: Ord> FibonacciHeap<T, P> {
    /// Collects the members of the circular list containing `start`
    fn ring(&self, start: FibonacciHandle) -> Vec<FibonacciHandle> {
        let mut members = vec![start];
        let mut current = self.nodes[start].right;
        while current != start {
            members.push(current);
            current = self.nodes[current].right;
        }
        members
    }

    /// Splices `node` into the circular list right after `anchor`
    fn link_after(&mut self, anchor: FibonacciHandle, node: FibonacciHandle) {
        let right = self.nodes[anchor].right;
        self.nodes[node].left = anchor;
        self.nodes[node].right = right;
        self.nodes[right].left = node;
        self.nodes[anchor].right = node;
    }

    /// Removes `node` from its circular list, leaving it a singleton ring
    fn unlink(&mut self, node: FibonacciHandle) {
        let left = self.nodes[node].left;
        let right = self.nodes[node].right;
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.nodes[node].left = node;
        self.nodes[node].right = node;
    }

    /// Consolidates the heap by linking trees of the same degree
    fn consolidate(&mut self) {
        let Some(start) = self.min else {
            return;
        };

        // The Fibonacci bound is log_phi(n), so the table may have to grow
        let max_degree = (self.nodes.len() as f64).log2() as usize + 2;
        let mut by_degree: SmallVec<[Option<FibonacciHandle>; 64]> = smallvec![None; max_degree];

        let roots = self.ring(start);
        let root_count = roots.len();

        for root in roots {
            let mut x = root;
            let mut d = self.nodes[x].degree;

            loop {
                if d >= by_degree.len() {
                    by_degree.resize(d + 1, None);
                }
                let Some(mut y) = by_degree[d].take() else {
                    break;
                };

                // The scanned tree keeps the root on equal priorities
                if self.nodes[y].priority < self.nodes[x].priority {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                d += 1;
            }

            by_degree[d] = Some(x);
        }

        // Rebuild root list and find new min
        self.min = None;
        for root in by_degree.into_iter().flatten() {
            self.nodes[root].left = root;
            self.nodes[root].right = root;
            match self.min {
                Some(min) => {
                    self.link_after(min, root);
                    if self.nodes[root].priority < self.nodes[min].priority {
                        self.min = Some(root);
                    }
                }
                None => self.min = Some(root),
            }
        }

        tracing::trace!(
            roots_before = root_count,
            len = self.nodes.len(),
            "consolidated fibonacci heap"
        );
    }

    /// Links root `y` as a child of root `x`
    fn link(&mut self, y: FibonacciHandle, x: FibonacciHandle) {
        self.unlink(y);

        let node = &mut self.nodes[y];
        node.parent = Some(x);
        node.marked = false;

        let first_child = self.nodes[x].child;
        match first_child {
            Some(child) => self.link_after(child, y),
            None => self.nodes[x].child = Some(y),
        }
        self.nodes[x].degree += 1;
    }

    /// Cuts `node` from `parent` and adds it to the root list
    fn cut(&mut self, node: FibonacciHandle, parent: FibonacciHandle) {
        let right = self.nodes[node].right;
        let parent_node = &mut self.nodes[parent];
        if right == node {
            parent_node.child = None;
        } else if parent_node.child == Some(node) {
            parent_node.child = Some(right);
        }
        parent_node.degree -= 1;

        self.unlink(node);
        let cut_node = &mut self.nodes[node];
        cut_node.parent = None;
        cut_node.marked = false;

        match self.min {
            Some(min) => self.link_after(min, node),
            None => self.min = Some(node),
        }
    }

    /// Walks up from `node`, cutting marked ancestors until an unmarked one
    /// (which gets marked) or a root is reached
    fn cascading_cut(&mut self, mut node: FibonacciHandle) {
        let mut cuts = 0usize;
        while let Some(parent) = self.nodes[node].parent {
            if !self.nodes[node].marked {
                self.nodes[node].marked = true;
                break;
            }
            self.cut(node, parent);
            cuts += 1;
            node = parent;
        }

        if cuts > 0 {
            tracing::trace!(cuts, "cascading cut");
        }
    }

    /// Checks every structural invariant of the heap
    ///
    /// Verifies that the root list and all child lists are consistent circular
    /// doubly linked lists, parent links and degrees match the child lists,
    /// heap order holds, no root is marked, the minimum pointer references the
    /// smallest root, every node of degree d has at least F(d+2) nodes in its
    /// subtree, and every arena node is reachable exactly once.
    pub fn verify_internal_structure(&self) -> bool {
        let Some(min) = self.min else {
            return self.nodes.is_empty();
        };
        let Some(roots) = self.checked_ring(min) else {
            return false;
        };

        let min_priority = &self.nodes[min].priority;
        for &root in &roots {
            let node = &self.nodes[root];
            if node.parent.is_some() || node.marked || node.priority < *min_priority {
                return false;
            }
        }

        // Pre-order walk; children are checked when their parent is visited
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = roots;
        while let Some(key) = stack.pop() {
            if order.len() >= self.nodes.len() {
                return false;
            }
            order.push(key);

            let node = &self.nodes[key];
            let Some(child) = node.child else {
                if node.degree != 0 {
                    return false;
                }
                continue;
            };
            let Some(children) = self.checked_ring(child) else {
                return false;
            };
            if children.len() != node.degree {
                return false;
            }
            for &c in &children {
                let child_node = &self.nodes[c];
                if child_node.parent != Some(key) || child_node.priority < node.priority {
                    return false;
                }
            }
            stack.extend(children);
        }

        if order.len() != self.nodes.len() {
            return false;
        }

        // Subtree sizes, children before parents
        let mut sizes: SecondaryMap<FibonacciHandle, usize> = SecondaryMap::new();
        for &key in order.iter().rev() {
            let node = &self.nodes[key];
            let mut size = 1;
            if let Some(child) = node.child {
                for c in self.ring(child) {
                    size += sizes.get(c).copied().unwrap_or(0);
                }
            }
            if size < fibonacci_number(node.degree + 2) {
                return false;
            }
            sizes.insert(key, size);
        }

        true
    }

    /// Like `ring`, but returns `None` on a dangling key, a broken back
    /// link, or a list longer than the arena
    fn checked_ring(&self, start: FibonacciHandle) -> Option<Vec<FibonacciHandle>> {
        let mut members = vec![start];
        let mut current = start;
        loop {
            let right = self.nodes.get(current)?.right;
            if self.nodes.get(right)?.left != current {
                return None;
            }
            if right == start {
                return Some(members);
            }
            if members.len() >= self.nodes.len() {
                return None;
            }
            members.push(right);
            current = right;
        }
    }
}

fn fibonacci_number(n: usize) -> usize {
    let (mut a, mut b) = (0usize, 1usize);
    for _ in 0..n {
        (a, b) = (b, a.saturating_add(b));
    }
    a
}
