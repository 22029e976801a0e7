//! Operation counters for heap instrumentation
//!
//! Every heap keeps a [`HeapStats`] that counts successful inserts, delete-mins
//! and decrease-keys, and accumulates the wall-clock time spent in each kind of
//! operation. Time is only sampled when the `op-timing` feature is enabled;
//! counts are always maintained.
//!
//! The statistics never influence heap behaviour. They exist for benchmark
//! harnesses that want to attribute an algorithm's run time to the queue.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "op-timing")]
use std::time::Instant;

/// The kinds of heap operation that are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Insert,
    DeleteMin,
    DecreaseKey,
}

impl Operation {
    /// All operation kinds, in reporting order
    pub const ALL: [Operation; 3] = [
        Operation::Insert,
        Operation::DeleteMin,
        Operation::DecreaseKey,
    ];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert => write!(f, "insert"),
            Operation::DeleteMin => write!(f, "delete_min"),
            Operation::DecreaseKey => write!(f, "decrease_key"),
        }
    }
}

/// Cumulative per-operation counts and timings for one heap instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeapStats {
    pub insert_count: u64,
    pub delete_min_count: u64,
    pub decrease_key_count: u64,
    pub insert_time: Duration,
    pub delete_min_time: Duration,
    pub decrease_key_time: Duration,
}

impl HeapStats {
    /// Number of successful operations of the given kind
    pub fn count(&self, op: Operation) -> u64 {
        match op {
            Operation::Insert => self.insert_count,
            Operation::DeleteMin => self.delete_min_count,
            Operation::DecreaseKey => self.decrease_key_count,
        }
    }

    /// Time spent in operations of the given kind
    ///
    /// Always zero unless the `op-timing` feature is enabled.
    pub fn time(&self, op: Operation) -> Duration {
        match op {
            Operation::Insert => self.insert_time,
            Operation::DeleteMin => self.delete_min_time,
            Operation::DecreaseKey => self.decrease_key_time,
        }
    }

    /// Total number of counted operations
    pub fn total_operations(&self) -> u64 {
        Operation::ALL.iter().map(|&op| self.count(op)).sum()
    }

    /// Clears all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record(&mut self, op: Operation, timer: OpTimer) {
        let elapsed = timer.elapsed();
        match op {
            Operation::Insert => {
                self.insert_count += 1;
                self.insert_time += elapsed;
            }
            Operation::DeleteMin => {
                self.delete_min_count += 1;
                self.delete_min_time += elapsed;
            }
            Operation::DecreaseKey => {
                self.decrease_key_count += 1;
                self.decrease_key_time += elapsed;
            }
        }
    }
}

/// Measures a single heap operation
///
/// Zero-sized without the `op-timing` feature.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpTimer {
    #[cfg(feature = "op-timing")]
    start: Instant,
}

impl OpTimer {
    #[inline]
    pub(crate) fn start() -> Self {
        OpTimer {
            #[cfg(feature = "op-timing")]
            start: Instant::now(),
        }
    }

    #[inline]
    fn elapsed(&self) -> Duration {
        #[cfg(feature = "op-timing")]
        {
            self.start.elapsed()
        }
        #[cfg(not(feature = "op-timing"))]
        {
            Duration::ZERO
        }
    }
}
