//! Common traits for heap data structures
//!
//! This module provides the priority-queue capability shared by the heaps in
//! this crate:
//!
//! - [`Heap`]: insert, find-min, delete-min, decrease-key and element count
//! - [`Handle`]: marker for the stable per-element handles returned by insert
//! - [`HeapKind`]: runtime selection between the heap variants
//!
//! Handles stay valid across any number of `decrease_key` calls and across
//! the structural relinking done by other operations. They become invalid once
//! `delete_min` returns their element.

use crate::stats::HeapStats;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `find_min` or `delete_min` was called on a heap with no elements
    #[error("heap is empty")]
    EmptyHeap,
    /// The new priority is not strictly less than the current priority
    #[error("new priority is not less than current priority")]
    InvalidKey,
    /// The handle is no longer valid (element was removed)
    #[error("handle is no longer valid (element was removed)")]
    InvalidHandle,
}

/// A handle to an element in the heap, used for decrease_key operations
///
/// Handles are small `Copy` keys into the heap's node arena, so callers can
/// keep them in plain arrays indexed by their own identifiers.
pub trait Handle: Copy + Eq + fmt::Debug {}

/// Base trait for addressable min-heaps with `decrease_key` support
///
/// Elements are stored as (priority, item) pairs to separate the ordering key
/// from the data.
///
/// # Example
///
/// ```rust
/// use decrease_key_heaps::{Heap, HeapError};
/// use decrease_key_heaps::pairing::PairingHeap;
///
/// let mut heap = PairingHeap::new();
/// let handle = heap.insert(10, "item");
/// heap.insert(7, "other");
/// heap.decrease_key(handle, 5).unwrap();
/// assert_eq!(heap.find_min(), Ok((&5, &"item")));
/// assert_eq!(heap.decrease_key(handle, 5), Err(HeapError::InvalidKey));
/// ```
pub trait Heap<T, P: Ord> {
    /// The handle type for this heap, used to reference elements for decrease_key
    type Handle: Handle;

    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority, returning its handle
    ///
    /// # Time Complexity
    /// O(1) amortized for both heaps in this crate.
    fn insert(&mut self, priority: P, item: T) -> Self::Handle;

    /// Returns the minimum priority and associated item without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap holds no elements.
    fn find_min(&self) -> Result<(&P, &T), HeapError>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// The handle of the returned element must not be used afterwards.
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn delete_min(&mut self) -> Result<(P, T), HeapError>;

    /// Decreases the priority of an element identified by the handle
    ///
    /// # Errors
    /// Returns `HeapError::InvalidKey` if the new priority is not strictly
    /// less than the current priority, and `HeapError::InvalidHandle` if the
    /// element was already removed.
    ///
    /// # Time Complexity
    /// - Fibonacci Heap: O(1) amortized
    /// - Pairing Heap: o(log n) amortized
    fn decrease_key(&mut self, handle: Self::Handle, new_priority: P) -> Result<(), HeapError>;

    /// Returns the priority and item of a live element
    fn get(&self, handle: Self::Handle) -> Option<(&P, &T)>;

    /// Cumulative operation counts and timings since creation or the last reset
    fn stats(&self) -> &HeapStats;

    /// Clears the operation counters
    fn reset_stats(&mut self);
}

/// The interchangeable heap variants, for choosing one at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapKind {
    Fibonacci,
    Pairing,
}

impl HeapKind {
    pub const ALL: [HeapKind; 2] = [HeapKind::Fibonacci, HeapKind::Pairing];

    pub fn name(self) -> &'static str {
        match self {
            HeapKind::Fibonacci => "fibonacci",
            HeapKind::Pairing => "pairing",
        }
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown heap name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heap kind `{0}` (expected `fibonacci` or `pairing`)")]
pub struct UnknownHeapKind(pub String);

impl FromStr for HeapKind {
    type Err = UnknownHeapKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fibonacci" | "fib" => Ok(HeapKind::Fibonacci),
            "pairing" => Ok(HeapKind::Pairing),
            _ => Err(UnknownHeapKind(s.to_string())),
        }
    }
}
