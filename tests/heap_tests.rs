//! Behavioural tests shared by every heap implementation
//!
//! Each check is written once against the `Heap` trait and instantiated for
//! both heaps by the `heap_tests!` macro at the bottom of the file.

use decrease_key_heaps::fibonacci::FibonacciHeap;
use decrease_key_heaps::pairing::PairingHeap;
use decrease_key_heaps::stats::Operation;
use decrease_key_heaps::{Heap, HeapError};

/// Heaps that can check their own structural invariants
trait Verifiable {
    fn verify(&self) -> bool;
}

impl<T, P: Ord> Verifiable for FibonacciHeap<T, P> {
    fn verify(&self) -> bool {
        self.verify_internal_structure()
    }
}

impl<T, P: Ord> Verifiable for PairingHeap<T, P> {
    fn verify(&self) -> bool {
        self.verify_internal_structure()
    }
}

fn test_empty_heap<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.find_min(), Err(HeapError::EmptyHeap));
    assert_eq!(heap.delete_min(), Err(HeapError::EmptyHeap));
    assert_eq!(heap.stats().delete_min_count, 0);
}

fn test_single_element<H: Heap<&'static str, i32>>() {
    let mut heap = H::new();
    let handle = heap.insert(42, "only");
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.find_min(), Ok((&42, &"only")));
    assert_eq!(heap.get(handle), Some((&42, &"only")));

    heap.decrease_key(handle, 7).unwrap();
    assert_eq!(heap.find_min(), Ok((&7, &"only")));

    assert_eq!(heap.delete_min(), Ok((7, "only")));
    assert!(heap.is_empty());
    assert_eq!(heap.get(handle), None);
}

fn test_basic_ordering<H: Heap<i32, i32> + Verifiable>() {
    let mut heap = H::new();
    for value in [50, 10, 40, 20, 30, 0, 60] {
        heap.insert(value, value * 10);
    }
    assert!(heap.verify());

    let mut popped = Vec::new();
    while let Ok((priority, item)) = heap.delete_min() {
        assert_eq!(item, priority * 10);
        popped.push(priority);
        assert!(heap.verify());
    }
    assert_eq!(popped, vec![0, 10, 20, 30, 40, 50, 60]);
}

fn test_duplicate_priorities<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    for item in 0..5 {
        heap.insert(3, item);
    }
    heap.insert(1, 100);

    assert_eq!(heap.delete_min(), Ok((1, 100)));

    let mut items = Vec::new();
    while let Ok((priority, item)) = heap.delete_min() {
        assert_eq!(priority, 3);
        items.push(item);
    }
    items.sort_unstable();
    assert_eq!(items, vec![0, 1, 2, 3, 4]);
}

fn test_descending_insertion<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    for i in (0..50).rev() {
        heap.insert(i, i);
    }
    for i in 0..50 {
        assert_eq!(heap.delete_min(), Ok((i, i)));
    }
}

fn test_multiple_decrease_same<H: Heap<i32, i32> + Verifiable>() {
    let mut heap = H::new();
    for i in 0..20 {
        heap.insert(100 + i, i);
    }
    heap.delete_min().unwrap();
    let handle = heap.insert(1000, -1);

    for priority in [500, 250, 100, 50, 1] {
        heap.decrease_key(handle, priority).unwrap();
        assert_eq!(heap.get(handle), Some((&priority, &-1)));
        assert!(heap.verify());
    }
    assert_eq!(heap.find_min(), Ok((&1, &-1)));
}

fn test_decrease_key_new_min<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    let h1 = heap.insert(100, 1);
    let h2 = heap.insert(200, 2);
    let h3 = heap.insert(300, 3);

    heap.decrease_key(h3, 150).unwrap();
    assert_eq!(heap.find_min(), Ok((&100, &1)));

    heap.decrease_key(h2, 50).unwrap();
    assert_eq!(heap.find_min(), Ok((&50, &2)));

    heap.decrease_key(h1, 25).unwrap();
    assert_eq!(heap.find_min(), Ok((&25, &1)));

    assert_eq!(heap.delete_min(), Ok((25, 1)));
    assert_eq!(heap.delete_min(), Ok((50, 2)));
    assert_eq!(heap.delete_min(), Ok((150, 3)));
}

fn test_rejected_decrease_key<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    let handle = heap.insert(10, 1);
    heap.insert(20, 2);

    assert_eq!(heap.decrease_key(handle, 10), Err(HeapError::InvalidKey));
    assert_eq!(heap.decrease_key(handle, 15), Err(HeapError::InvalidKey));
    assert_eq!(heap.get(handle), Some((&10, &1)));
    assert_eq!(heap.stats().decrease_key_count, 0);
}

fn test_stale_handle<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    let first = heap.insert(1, 1);
    heap.insert(2, 2);
    assert_eq!(heap.delete_min(), Ok((1, 1)));

    assert_eq!(heap.get(first), None);
    assert_eq!(heap.decrease_key(first, 0), Err(HeapError::InvalidHandle));

    // Reusing the freed slot must not revive the old handle
    let fresh = heap.insert(5, 5);
    assert_ne!(first, fresh);
    assert_eq!(heap.decrease_key(first, 0), Err(HeapError::InvalidHandle));
    assert_eq!(heap.find_min(), Ok((&2, &2)));
}

fn test_stats_counts<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    let handles: Vec<_> = (0..10).map(|i| heap.insert(100 + i, i)).collect();
    for (i, &handle) in handles.iter().enumerate().skip(5) {
        heap.decrease_key(handle, i as i32).unwrap();
    }
    for _ in 0..4 {
        heap.delete_min().unwrap();
    }
    let _ = heap.decrease_key(handles[9], 1000);

    let stats = heap.stats();
    assert_eq!(stats.count(Operation::Insert), 10);
    assert_eq!(stats.count(Operation::DecreaseKey), 5);
    assert_eq!(stats.count(Operation::DeleteMin), 4);
    assert_eq!(stats.total_operations(), 19);

    heap.reset_stats();
    assert_eq!(heap.stats().total_operations(), 0);
    assert_eq!(heap.len(), 6);
}

fn test_alternating_operations<H: Heap<i32, i32> + Verifiable>() {
    let mut heap = H::new();
    for i in 0..10 {
        heap.insert(i * 10, i);
    }
    for _ in 0..3 {
        heap.delete_min().unwrap();
    }
    for i in 10..15 {
        heap.insert(i * 10, i);
    }
    for _ in 0..2 {
        heap.delete_min().unwrap();
    }
    assert!(heap.verify());

    let mut count = 0;
    let mut last = i32::MIN;
    while let Ok((priority, _)) = heap.delete_min() {
        assert!(priority >= last);
        last = priority;
        count += 1;
    }
    assert_eq!(count, 10);
}

fn test_stress_with_decrease_key<H: Heap<u64, u64> + Verifiable>() {
    let mut heap = H::new();
    let mut handles = Vec::new();
    let mut priorities = Vec::new();
    for i in 0..500u64 {
        let priority = (i * 7919) % 1000 + 1000;
        handles.push(heap.insert(priority, i));
        priorities.push(priority);
    }

    // Trigger consolidation so decrease_key has trees to cut from
    let (first, item) = heap.delete_min().unwrap();
    let removed = item as usize;
    assert_eq!(first, priorities[removed]);

    for (i, &handle) in handles.iter().enumerate() {
        if i == removed || i % 3 != 0 {
            continue;
        }
        let lowered = priorities[i] - 900;
        heap.decrease_key(handle, lowered).unwrap();
        priorities[i] = lowered;
    }
    assert!(heap.verify());

    let mut expected: Vec<u64> = priorities
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != removed)
        .map(|(_, &p)| p)
        .collect();
    expected.sort_unstable();

    let mut actual = Vec::new();
    while let Ok((priority, _)) = heap.delete_min() {
        actual.push(priority);
    }
    assert_eq!(actual, expected);
}

fn test_large_priorities<H: Heap<usize, u64>>() {
    let mut heap = H::new();
    let top = heap.insert(u64::MAX, 0);
    heap.insert(u64::MAX - 1, 1);
    heap.insert(0, 2);

    heap.decrease_key(top, u64::MAX - 2).unwrap();
    assert_eq!(heap.delete_min(), Ok((0, 2)));
    assert_eq!(heap.delete_min(), Ok((u64::MAX - 2, 0)));
    assert_eq!(heap.delete_min(), Ok((u64::MAX - 1, 1)));
}

macro_rules! heap_tests {
    ($module:ident, $heap:ident) => {
        mod $module {
            use super::*;

            #[test]
            fn empty_heap() {
                test_empty_heap::<$heap<i32, i32>>();
            }

            #[test]
            fn single_element() {
                test_single_element::<$heap<&'static str, i32>>();
            }

            #[test]
            fn basic_ordering() {
                test_basic_ordering::<$heap<i32, i32>>();
            }

            #[test]
            fn duplicate_priorities() {
                test_duplicate_priorities::<$heap<i32, i32>>();
            }

            #[test]
            fn descending_insertion() {
                test_descending_insertion::<$heap<i32, i32>>();
            }

            #[test]
            fn multiple_decrease_same() {
                test_multiple_decrease_same::<$heap<i32, i32>>();
            }

            #[test]
            fn decrease_key_new_min() {
                test_decrease_key_new_min::<$heap<i32, i32>>();
            }

            #[test]
            fn rejected_decrease_key() {
                test_rejected_decrease_key::<$heap<i32, i32>>();
            }

            #[test]
            fn stale_handle() {
                test_stale_handle::<$heap<i32, i32>>();
            }

            #[test]
            fn stats_counts() {
                test_stats_counts::<$heap<i32, i32>>();
            }

            #[test]
            fn alternating_operations() {
                test_alternating_operations::<$heap<i32, i32>>();
            }

            #[test]
            fn stress_with_decrease_key() {
                test_stress_with_decrease_key::<$heap<u64, u64>>();
            }

            #[test]
            fn large_priorities() {
                test_large_priorities::<$heap<usize, u64>>();
            }
        }
    };
}

heap_tests!(fibonacci, FibonacciHeap);
heap_tests!(pairing, PairingHeap);
